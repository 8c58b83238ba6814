//! Key-value storage port
//!
//! The ledger persists each collection as a JSON string under a fixed key.
//! `KeyValueStore` is the seam; `MemoryStore` keeps values in a map and
//! `FileStore` keeps one `<key>.json` file per key in a directory.

use std::collections::HashMap;
use std::path::{Path, PathBuf};

use crate::error::{SpendError, SpendResult};

use super::file_io::{read_text, write_text_atomic};

/// A string key-value store
pub trait KeyValueStore {
    /// Read the value stored under `key`, if any
    fn read(&self, key: &str) -> SpendResult<Option<String>>;

    /// Store `value` under `key`, replacing any previous value
    fn write(&mut self, key: &str, value: &str) -> SpendResult<()>;
}

impl<S: KeyValueStore + ?Sized> KeyValueStore for Box<S> {
    fn read(&self, key: &str) -> SpendResult<Option<String>> {
        (**self).read(key)
    }

    fn write(&mut self, key: &str, value: &str) -> SpendResult<()> {
        (**self).write(key, value)
    }
}

/// In-memory store, used by tests and embedders
#[derive(Debug, Clone, Default)]
pub struct MemoryStore {
    values: HashMap<String, String>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Seed a store with a single value
    pub fn with_value(key: impl Into<String>, value: impl Into<String>) -> Self {
        let mut store = Self::new();
        store.values.insert(key.into(), value.into());
        store
    }

    /// Peek at a stored value without going through the trait
    pub fn get(&self, key: &str) -> Option<&str> {
        self.values.get(key).map(String::as_str)
    }
}

impl KeyValueStore for MemoryStore {
    fn read(&self, key: &str) -> SpendResult<Option<String>> {
        Ok(self.values.get(key).cloned())
    }

    fn write(&mut self, key: &str, value: &str) -> SpendResult<()> {
        self.values.insert(key.to_string(), value.to_string());
        Ok(())
    }
}

/// Directory-backed store: each key lives in `<dir>/<key>.json`
#[derive(Debug, Clone)]
pub struct FileStore {
    dir: PathBuf,
}

impl FileStore {
    /// Create a store rooted at `dir` (created lazily on first write)
    pub fn new(dir: impl Into<PathBuf>) -> Self {
        Self { dir: dir.into() }
    }

    /// Directory holding the key files
    pub fn dir(&self) -> &Path {
        &self.dir
    }

    /// Path of the file backing `key`
    pub fn path_for(&self, key: &str) -> SpendResult<PathBuf> {
        validate_key(key)?;
        Ok(self.dir.join(format!("{}.json", key)))
    }
}

impl KeyValueStore for FileStore {
    fn read(&self, key: &str) -> SpendResult<Option<String>> {
        read_text(self.path_for(key)?)
    }

    fn write(&mut self, key: &str, value: &str) -> SpendResult<()> {
        write_text_atomic(self.path_for(key)?, value)
    }
}

/// Keys become file names, so only a safe alphabet is allowed
fn validate_key(key: &str) -> SpendResult<()> {
    let valid = !key.is_empty()
        && key
            .chars()
            .all(|c| c.is_ascii_alphanumeric() || c == '_' || c == '-');
    if valid {
        Ok(())
    } else {
        Err(SpendError::Storage(format!("Invalid storage key: '{}'", key)))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_memory_store_read_write() {
        let mut store = MemoryStore::new();
        assert_eq!(store.read("expenses").unwrap(), None);

        store.write("expenses", "[]").unwrap();
        assert_eq!(store.read("expenses").unwrap().as_deref(), Some("[]"));

        store.write("expenses", "[1]").unwrap();
        assert_eq!(store.get("expenses"), Some("[1]"));
    }

    #[test]
    fn test_file_store_survives_reopen() {
        let temp_dir = TempDir::new().unwrap();
        let mut store = FileStore::new(temp_dir.path().join("data"));
        store.write("goals", r#"[{"a":1}]"#).unwrap();

        let reopened = FileStore::new(temp_dir.path().join("data"));
        assert_eq!(reopened.read("goals").unwrap().as_deref(), Some(r#"[{"a":1}]"#));
        assert!(temp_dir.path().join("data").join("goals.json").exists());
    }

    #[test]
    fn test_file_store_missing_key() {
        let temp_dir = TempDir::new().unwrap();
        let store = FileStore::new(temp_dir.path());
        assert_eq!(store.read("expenses").unwrap(), None);
    }

    #[test]
    fn test_file_store_rejects_unsafe_keys() {
        let temp_dir = TempDir::new().unwrap();
        let mut store = FileStore::new(temp_dir.path());

        assert!(store.write("../escape", "x").is_err());
        assert!(store.read("").is_err());
        assert!(store.path_for("with space").is_err());
        assert!(store.path_for("goals_v2").is_ok());
    }

    #[test]
    fn test_boxed_store_delegates() {
        let mut store: Box<dyn KeyValueStore> = Box::new(MemoryStore::new());
        store.write("k", "v").unwrap();
        assert_eq!(store.read("k").unwrap().as_deref(), Some("v"));
    }
}
