//! Key-value storage for player progress.
//!
//! Stores string values under string keys, the same shape as browser local
//! storage. Two backends:
//!
//! - [`MemoryStore`]: in-process map, for tests and throwaway sessions
//! - [`FileStore`]: a JSON object on disk, rewritten on every save

use std::path::{Path, PathBuf};

use rustc_hash::FxHashMap;
use tracing::debug;

use crate::core::Result;

/// Storage backend for progress values.
pub trait ProgressStore {
    /// Read the value under `key`, `None` if absent.
    fn load(&self, key: &str) -> Result<Option<String>>;

    /// Write `value` under `key`.
    fn save(&mut self, key: &str, value: &str) -> Result<()>;
}

/// In-memory store.
#[derive(Clone, Debug, Default)]
pub struct MemoryStore {
    values: FxHashMap<String, String>,
}

impl MemoryStore {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a store pre-filled with one value.
    #[must_use]
    pub fn with_value(key: impl Into<String>, value: impl Into<String>) -> Self {
        let mut store = Self::new();
        store.values.insert(key.into(), value.into());
        store
    }

    /// Peek at a value without going through the trait.
    #[must_use]
    pub fn get(&self, key: &str) -> Option<&str> {
        self.values.get(key).map(String::as_str)
    }
}

impl ProgressStore for MemoryStore {
    fn load(&self, key: &str) -> Result<Option<String>> {
        Ok(self.values.get(key).cloned())
    }

    fn save(&mut self, key: &str, value: &str) -> Result<()> {
        self.values.insert(key.to_string(), value.to_string());
        Ok(())
    }
}

/// JSON-file store.
///
/// The whole file is a single JSON object of string values. A missing file
/// reads as empty.
#[derive(Clone, Debug)]
pub struct FileStore {
    path: PathBuf,
}

impl FileStore {
    #[must_use]
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    #[must_use]
    pub fn path(&self) -> &Path {
        &self.path
    }

    fn read_all(&self) -> Result<FxHashMap<String, String>> {
        match std::fs::read_to_string(&self.path) {
            Ok(text) if text.trim().is_empty() => Ok(FxHashMap::default()),
            Ok(text) => Ok(serde_json::from_str(&text)?),
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => Ok(FxHashMap::default()),
            Err(e) => Err(e.into()),
        }
    }
}

impl ProgressStore for FileStore {
    fn load(&self, key: &str) -> Result<Option<String>> {
        Ok(self.read_all()?.remove(key))
    }

    fn save(&mut self, key: &str, value: &str) -> Result<()> {
        // A corrupt file is replaced rather than blocking saves.
        let mut values = self.read_all().unwrap_or_default();
        values.insert(key.to_string(), value.to_string());

        if let Some(parent) = self.path.parent() {
            if !parent.as_os_str().is_empty() {
                std::fs::create_dir_all(parent)?;
            }
        }
        std::fs::write(&self.path, serde_json::to_string_pretty(&values)?)?;
        debug!(path = %self.path.display(), key, value, "saved progress");
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::GameError;

    #[test]
    fn test_memory_store() {
        let mut store = MemoryStore::new();
        assert_eq!(store.load("k").unwrap(), None);

        store.save("k", "3").unwrap();
        assert_eq!(store.load("k").unwrap(), Some("3".to_string()));
        assert_eq!(store.get("k"), Some("3"));
    }

    #[test]
    fn test_memory_store_with_value() {
        let store = MemoryStore::with_value("maxUnlockedLevel", "12");
        assert_eq!(store.load("maxUnlockedLevel").unwrap().as_deref(), Some("12"));
    }

    #[test]
    fn test_file_store_missing_file() {
        let dir = tempfile::tempdir().unwrap();
        let store = FileStore::new(dir.path().join("progress.json"));
        assert_eq!(store.load("maxUnlockedLevel").unwrap(), None);
    }

    #[test]
    fn test_file_store_round_trip() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("nested").join("progress.json");

        let mut store = FileStore::new(&path);
        store.save("maxUnlockedLevel", "4").unwrap();
        store.save("other", "x").unwrap();

        let reopened = FileStore::new(&path);
        assert_eq!(reopened.load("maxUnlockedLevel").unwrap().as_deref(), Some("4"));
        assert_eq!(reopened.load("other").unwrap().as_deref(), Some("x"));
    }

    #[test]
    fn test_file_store_corrupt_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("progress.json");
        std::fs::write(&path, "not json").unwrap();

        let mut store = FileStore::new(&path);
        assert!(matches!(store.load("maxUnlockedLevel"), Err(GameError::Serialization(_))));

        store.save("maxUnlockedLevel", "2").unwrap();
        assert_eq!(store.load("maxUnlockedLevel").unwrap().as_deref(), Some("2"));
    }
}
