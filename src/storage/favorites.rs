//! Persisted favorite set.
//!
//! Favorites are a set of wallpaper ids kept in ascending order. The ordered
//! sequence is what gets serialized, which makes the persisted blob canonical:
//! toggling the same id twice leaves byte-identical bytes in the store.

use crate::domain::error::Result;
use crate::domain::WallpaperId;
use crate::storage::backend::{SharedStore, FAVORITES_KEY};

/// Favorite ids backed by a key-value store entry.
///
/// Membership checks never touch the store; every toggle rewrites the whole
/// entry.
#[derive(Debug)]
pub struct PersistedFavorites {
    /// Ascending, duplicate-free ids.
    ids: Vec<WallpaperId>,
    store: SharedStore,
}

impl PersistedFavorites {
    /// Loads favorites from `store`.
    ///
    /// An absent entry, a corrupt entry, or an unreadable store all yield an
    /// empty set; none of these is reported to the caller.
    ///
    /// A stored sequence that is not already in canonical form (unsorted,
    /// duplicated, or spaced differently) is rewritten once, so later toggles
    /// compare against canonical bytes.
    #[must_use]
    pub fn load(store: SharedStore) -> Self {
        let raw = store.borrow().get(FAVORITES_KEY);

        let (mut ids, stored) = match raw {
            Ok(Some(raw)) => match serde_json::from_str::<Vec<WallpaperId>>(&raw) {
                Ok(ids) => (ids, Some(raw)),
                Err(e) => {
                    tracing::warn!(error = %e, "persisted favorites are corrupt, starting empty");
                    (Vec::new(), None)
                }
            },
            Ok(None) => (Vec::new(), None),
            Err(e) => {
                tracing::warn!(error = %e, "favorites store unavailable, starting empty");
                (Vec::new(), None)
            }
        };

        ids.sort_unstable();
        ids.dedup();

        let favorites = Self { ids, store };
        if let Some(stored) = stored {
            favorites.normalize_stored(&stored);
        }

        tracing::debug!(favorite_count = favorites.ids.len(), "favorites loaded");
        favorites
    }

    fn normalize_stored(&self, stored: &str) {
        let canonical = match serde_json::to_string(&self.ids) {
            Ok(canonical) => canonical,
            Err(e) => {
                tracing::warn!(error = %e, "failed to serialize favorites");
                return;
            }
        };
        if canonical == stored {
            return;
        }

        tracing::debug!(stored = %stored, canonical = %canonical, "rewriting favorites in canonical form");
        if let Err(e) = self.store.borrow_mut().set(FAVORITES_KEY, &canonical) {
            tracing::warn!(error = %e, "failed to rewrite favorites");
        }
    }

    /// Flips membership of `id` and persists the full set.
    ///
    /// Returns whether `id` is a favorite afterwards.
    ///
    /// # Errors
    ///
    /// Returns the store error if the write fails; the in-memory set is left
    /// unchanged in that case.
    pub fn toggle(&mut self, id: WallpaperId) -> Result<bool> {
        let mut next = self.ids.clone();
        let now_favorite = match next.binary_search(&id) {
            Ok(index) => {
                next.remove(index);
                false
            }
            Err(index) => {
                next.insert(index, id);
                true
            }
        };

        let serialized = serde_json::to_string(&next)?;
        self.store.borrow_mut().set(FAVORITES_KEY, &serialized)?;
        self.ids = next;

        tracing::debug!(
            wallpaper_id = id,
            favorite = now_favorite,
            favorite_count = self.ids.len(),
            "favorite toggled"
        );
        Ok(now_favorite)
    }

    #[must_use]
    pub fn is_favorite(&self, id: WallpaperId) -> bool {
        self.ids.binary_search(&id).is_ok()
    }

    #[must_use]
    pub fn ids(&self) -> &[WallpaperId] {
        &self.ids
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.ids.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.ids.is_empty()
    }
}
