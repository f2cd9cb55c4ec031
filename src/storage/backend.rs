//! Key-value store abstraction.
//!
//! This module defines the [`KeyValueStore`] trait that isolates persistence
//! from view and controller logic. The gallery keeps two independent entries
//! (favorites and the dark-mode preference), each a plain string value, so the
//! trait mirrors a synchronous string-to-string store rather than a typed
//! database.

use crate::domain::error::Result;
use std::cell::RefCell;
use std::rc::Rc;

/// Key under which the favorite id sequence is stored (JSON array of integers).
pub const FAVORITES_KEY: &str = "favorites";

/// Key under which the dark-mode preference is stored (`"true"` / `"false"`).
pub const DARK_MODE_KEY: &str = "darkMode";

/// Synchronous string key-value store.
///
/// Every `set` is durable once it returns. There is no transaction support:
/// callers rewrite a whole entry on every mutation.
///
/// # Implementations
///
/// - [`JsonFileStore`](crate::storage::JsonFileStore): JSON file with atomic writes
/// - [`MemoryStore`](crate::storage::MemoryStore): process-local map
///
/// # Examples
///
/// ```
/// use wallgrid::storage::{KeyValueStore, MemoryStore};
///
/// let mut store = MemoryStore::default();
/// store.set("darkMode", "true")?;
/// assert_eq!(store.get("darkMode")?.as_deref(), Some("true"));
/// # Ok::<(), wallgrid::WallgridError>(())
/// ```
pub trait KeyValueStore: std::fmt::Debug {
    /// Reads the value stored under `key`, `None` if absent.
    ///
    /// # Errors
    ///
    /// Returns an error if the backing medium cannot be read.
    fn get(&self, key: &str) -> Result<Option<String>>;

    /// Stores `value` under `key`, replacing any previous value.
    ///
    /// # Errors
    ///
    /// Returns an error if the backing medium cannot be written.
    fn set(&mut self, key: &str, value: &str) -> Result<()>;
}

/// Store handle shared by the favorites and preference wrappers.
///
/// The plugin runs on a single thread, so shared ownership does not need
/// synchronization.
pub type SharedStore = Rc<RefCell<dyn KeyValueStore>>;

/// Wraps a concrete store into a [`SharedStore`].
pub fn share<S: KeyValueStore + 'static>(store: S) -> SharedStore {
    Rc::new(RefCell::new(store))
}
