//! Dark-mode preference.

use crate::domain::error::Result;
use crate::storage::backend::{SharedStore, DARK_MODE_KEY};

/// Reads and writes the `darkMode` entry.
#[derive(Debug, Clone)]
pub struct Preferences {
    store: SharedStore,
}

impl Preferences {
    #[must_use]
    pub fn new(store: SharedStore) -> Self {
        Self { store }
    }

    /// Stored dark-mode choice, `None` when nothing usable is stored.
    ///
    /// Only the exact strings `"true"` and `"false"` count; anything else and
    /// store read failures are treated as absent.
    #[must_use]
    pub fn dark_mode(&self) -> Option<bool> {
        match self.store.borrow().get(DARK_MODE_KEY) {
            Ok(Some(value)) => match value.as_str() {
                "true" => Some(true),
                "false" => Some(false),
                other => {
                    tracing::warn!(value = %other, "ignoring unrecognized dark mode preference");
                    None
                }
            },
            Ok(None) => None,
            Err(e) => {
                tracing::warn!(error = %e, "preference store unavailable");
                None
            }
        }
    }

    /// Persists the dark-mode choice as `"true"` / `"false"`.
    ///
    /// # Errors
    ///
    /// Returns the store error if the write fails.
    pub fn set_dark_mode(&self, enabled: bool) -> Result<()> {
        let value = if enabled { "true" } else { "false" };
        self.store.borrow_mut().set(DARK_MODE_KEY, value)?;
        tracing::debug!(dark_mode = enabled, "dark mode preference saved");
        Ok(())
    }
}
