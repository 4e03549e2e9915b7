use std::fs;
use std::path::PathBuf;

use crate::error::{Result, StoreError};

/// Seam between the content store and the durable key-value store.
///
/// Keys are opaque strings; values are serialized JSON. A backend never
/// decides policy: the store owns defaults, merging and failure handling.
pub trait StorageBackend {
    /// Read the value stored under `key`, or `None` when absent.
    fn read(&self, key: &str) -> Option<String>;

    /// Write `value` under `key`, replacing any previous value.
    fn write(&mut self, key: &str, value: &str) -> Result<()>;
}

/// Production backend: one `<key>.json` file per entry under the user's
/// config directory.
pub struct DirStorage {
    root: PathBuf,
}

impl DirStorage {
    pub fn new(root: PathBuf) -> Self {
        Self { root }
    }

    /// Backend rooted at the default config location (cross-platform).
    pub fn default_location() -> Self {
        let mut path = dirs::config_dir().unwrap_or_else(|| PathBuf::from("."));
        path.push("chiro-studio");
        Self::new(path)
    }

    fn entry_path(&self, key: &str) -> PathBuf {
        self.root.join(format!("{}.json", key))
    }
}

impl StorageBackend for DirStorage {
    fn read(&self, key: &str) -> Option<String> {
        fs::read_to_string(self.entry_path(key)).ok()
    }

    fn write(&mut self, key: &str, value: &str) -> Result<()> {
        fs::create_dir_all(&self.root)?;
        fs::write(self.entry_path(key), value)?;
        Ok(())
    }
}

/// Volatile backend. Useful for hosts that embed the engine without a
/// writable filesystem, and for tests.
#[derive(Default)]
pub struct MemoryStorage {
    entries: std::collections::HashMap<String, String>,
    /// When set, every write fails with [`StoreError::StorageFull`].
    pub quota_exhausted: bool,
}

impl MemoryStorage {
    pub fn new() -> Self {
        Self::default()
    }
}

impl StorageBackend for MemoryStorage {
    fn read(&self, key: &str) -> Option<String> {
        self.entries.get(key).cloned()
    }

    fn write(&mut self, key: &str, value: &str) -> Result<()> {
        if self.quota_exhausted {
            return Err(StoreError::StorageFull);
        }
        self.entries.insert(key.to_string(), value.to_string());
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_dir_storage_round_trip() {
        let dir = tempfile::tempdir().unwrap();
        let mut storage = DirStorage::new(dir.path().to_path_buf());
        assert_eq!(storage.read("some_key"), None);
        storage.write("some_key", "{\"a\":1}").unwrap();
        assert_eq!(storage.read("some_key"), Some("{\"a\":1}".to_string()));
        storage.write("some_key", "{}").unwrap();
        assert_eq!(storage.read("some_key"), Some("{}".to_string()));
    }

    #[test]
    fn test_dir_storage_creates_root() {
        let dir = tempfile::tempdir().unwrap();
        let nested = dir.path().join("a").join("b");
        let mut storage = DirStorage::new(nested.clone());
        storage.write("k", "v").unwrap();
        assert!(nested.join("k.json").exists());
    }

    #[test]
    fn test_memory_storage_quota() {
        let mut storage = MemoryStorage::new();
        storage.write("k", "v").unwrap();
        storage.quota_exhausted = true;
        let err = storage.write("k", "v2").unwrap_err();
        assert!(err.is_storage_full());
        // The old value is untouched by the failed write
        assert_eq!(storage.read("k"), Some("v".to_string()));
    }
}
