//! Storage layer for persisted gallery settings.
//!
//! Two entries survive restarts: the favorite id set and the dark-mode
//! preference. Both live in one flat string key-value store.
//!
//! # Modules
//!
//! - `backend`: Key-value store trait and the shared store handle
//! - `json`: JSON file store with atomic writes
//! - `memory`: In-memory store (fallback and tests)
//! - `favorites`: Favorite id set over the store
//! - `preferences`: Dark-mode preference over the store

pub mod backend;
pub mod favorites;
pub mod json;
pub mod memory;
pub mod preferences;

pub use backend::{share, KeyValueStore, SharedStore, DARK_MODE_KEY, FAVORITES_KEY};
pub use favorites::PersistedFavorites;
pub use json::JsonFileStore;
pub use memory::MemoryStore;
pub use preferences::Preferences;
