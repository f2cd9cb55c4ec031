//! JSON file-based key-value store.
//!
//! Entries live in a single flat JSON object on disk. Writes go through a
//! temporary file that is atomically renamed over the target, so a crash never
//! leaves a half-written blob behind.
//!
//! # File Format
//!
//! ```json
//! {
//!   "darkMode": "true",
//!   "favorites": "[12, 4031, 977]"
//! }
//! ```

use crate::domain::error::{Result, WallgridError};
use crate::storage::backend::KeyValueStore;
use std::collections::BTreeMap;
use std::path::{Path, PathBuf};

/// JSON file key-value store.
///
/// The whole map is cached in memory and flushed on every `set`. The cache
/// only takes a value once it is on disk, so a failed write is never carried
/// into a later flush. Not coordinated across plugin instances: the last
/// writer wins.
#[derive(Debug)]
pub struct JsonFileStore {
    /// Path to the JSON file on disk.
    file_path: PathBuf,

    /// In-memory copy of the file contents.
    entries: BTreeMap<String, String>,
}

impl JsonFileStore {
    /// Opens the store at `file_path`, creating parent directories as needed.
    ///
    /// A missing file is an empty store.
    ///
    /// # Errors
    ///
    /// Returns an error if:
    /// - Parent directory creation fails
    /// - The file exists but cannot be read
    /// - The file contains something other than a flat JSON object of strings
    pub fn open(file_path: PathBuf) -> Result<Self> {
        tracing::debug!(path = ?file_path, "opening key-value store");

        if let Some(parent) = file_path.parent() {
            std::fs::create_dir_all(parent)?;
        }

        let entries = if file_path.exists() {
            Self::load_from_file(&file_path)?
        } else {
            tracing::debug!("store file absent, starting empty");
            BTreeMap::new()
        };

        tracing::debug!(entry_count = entries.len(), "key-value store opened");

        Ok(Self { file_path, entries })
    }

    /// Path of the backing file.
    #[must_use]
    pub fn path(&self) -> &Path {
        &self.file_path
    }

    fn load_from_file(path: &Path) -> Result<BTreeMap<String, String>> {
        let contents = std::fs::read_to_string(path)?;
        if contents.trim().is_empty() {
            return Ok(BTreeMap::new());
        }

        serde_json::from_str(&contents)
            .map_err(|e| WallgridError::Storage(format!("failed to parse store file: {e}")))
    }

    /// Writes `entries` to a temporary file and renames it into place.
    fn save_to_file(&self, entries: &BTreeMap<String, String>) -> Result<()> {
        let json = serde_json::to_string_pretty(entries)?;

        let tmp_path = self.file_path.with_extension("tmp");
        std::fs::write(&tmp_path, json)?;
        std::fs::rename(&tmp_path, &self.file_path)?;

        tracing::trace!(path = ?self.file_path, "key-value store flushed");
        Ok(())
    }
}

impl KeyValueStore for JsonFileStore {
    fn get(&self, key: &str) -> Result<Option<String>> {
        Ok(self.entries.get(key).cloned())
    }

    fn set(&mut self, key: &str, value: &str) -> Result<()> {
        let _span = tracing::debug_span!("store_set", key = %key, value_len = value.len()).entered();

        let mut next = self.entries.clone();
        next.insert(key.to_string(), value.to_string());
        self.save_to_file(&next)?;
        self.entries = next;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn missing_file_opens_empty() {
        let dir = tempfile::tempdir().unwrap();
        let store = JsonFileStore::open(dir.path().join("nested/store.json")).unwrap();
        assert_eq!(store.get("favorites").unwrap(), None);
    }

    #[test]
    fn values_survive_reopen() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("store.json");

        let mut store = JsonFileStore::open(path.clone()).unwrap();
        store.set("darkMode", "false").unwrap();
        store.set("favorites", "[1,2]").unwrap();
        drop(store);

        let reopened = JsonFileStore::open(path).unwrap();
        assert_eq!(reopened.get("darkMode").unwrap().as_deref(), Some("false"));
        assert_eq!(reopened.get("favorites").unwrap().as_deref(), Some("[1,2]"));
    }

    #[test]
    fn failed_write_is_not_flushed_by_a_later_set() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("store.json");
        let tmp_path = path.with_extension("tmp");

        let mut store = JsonFileStore::open(path.clone()).unwrap();
        store.set("favorites", "[]").unwrap();

        std::fs::create_dir(&tmp_path).unwrap();
        assert!(store.set("favorites", "[5]").is_err());
        assert_eq!(store.get("favorites").unwrap().as_deref(), Some("[]"));
        std::fs::remove_dir(&tmp_path).unwrap();

        store.set("darkMode", "false").unwrap();

        let reopened = JsonFileStore::open(path).unwrap();
        assert_eq!(reopened.get("favorites").unwrap().as_deref(), Some("[]"));
        assert_eq!(reopened.get("darkMode").unwrap().as_deref(), Some("false"));
    }

    #[test]
    fn corrupt_file_is_a_storage_error() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("store.json");
        std::fs::write(&path, "{not json").unwrap();

        let err = JsonFileStore::open(path).unwrap_err();
        assert!(matches!(err, WallgridError::Storage(_)));
    }

    #[test]
    fn no_temporary_file_left_behind() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("store.json");

        let mut store = JsonFileStore::open(path.clone()).unwrap();
        store.set("favorites", "[]").unwrap();

        assert!(path.exists());
        assert!(!path.with_extension("tmp").exists());
    }
}
