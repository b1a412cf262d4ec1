//! Durable key-value storage.
//!
//! The journal persists as string values under well-known keys, the way the
//! browser original used local storage. The [`Storage`] trait abstracts the
//! backend; [`FileStorage`] maps each key to one file under a root
//! directory, [`MemoryStorage`] keeps values in a map for tests and
//! ephemeral use.

use std::collections::HashMap;
use std::io::ErrorKind;
use std::path::PathBuf;

/// Storage key for the serialized marker collection.
pub const MARKERS_KEY: &str = "travel_markers";

/// Storage key for the user's avatar (data-URL string or emoji).
pub const AVATAR_KEY: &str = "user_avatar";

/// Errors from a storage backend.
#[derive(Debug, thiserror::Error)]
pub enum StorageError {
    #[error("failed to read key {key}: {message}")]
    Read { key: String, message: String },

    #[error("failed to write key {key}: {message}")]
    Write { key: String, message: String },
}

/// A string-valued key-value store.
///
/// Writes are whole-value replacements with no atomicity guarantee; a crash
/// mid-write may leave a partial value behind. Readers tolerate that by
/// treating an undecodable value as absent.
pub trait Storage {
    fn get(&self, key: &str) -> Result<Option<String>, StorageError>;
    fn set(&mut self, key: &str, value: &str) -> Result<(), StorageError>;
    fn remove(&mut self, key: &str) -> Result<(), StorageError>;
}

/// In-memory backend.
#[derive(Debug, Default)]
pub struct MemoryStorage {
    entries: HashMap<String, String>,
}

impl MemoryStorage {
    pub fn new() -> Self {
        Self::default()
    }
}

impl Storage for MemoryStorage {
    fn get(&self, key: &str) -> Result<Option<String>, StorageError> {
        Ok(self.entries.get(key).cloned())
    }

    fn set(&mut self, key: &str, value: &str) -> Result<(), StorageError> {
        self.entries.insert(key.to_string(), value.to_string());
        Ok(())
    }

    fn remove(&mut self, key: &str) -> Result<(), StorageError> {
        self.entries.remove(key);
        Ok(())
    }
}

/// File-backed backend: one file per key under a root directory.
#[derive(Debug, Clone)]
pub struct FileStorage {
    root: PathBuf,
}

impl FileStorage {
    /// Open (creating if needed) a storage directory.
    pub fn open(root: impl Into<PathBuf>) -> Result<Self, StorageError> {
        let root = root.into();
        std::fs::create_dir_all(&root).map_err(|err| StorageError::Write {
            key: root.display().to_string(),
            message: err.to_string(),
        })?;
        Ok(Self { root })
    }

    fn path_for(&self, key: &str) -> PathBuf {
        self.root.join(format!("{key}.json"))
    }
}

impl Storage for FileStorage {
    fn get(&self, key: &str) -> Result<Option<String>, StorageError> {
        match std::fs::read_to_string(self.path_for(key)) {
            Ok(value) => Ok(Some(value)),
            Err(err) if err.kind() == ErrorKind::NotFound => Ok(None),
            Err(err) => Err(StorageError::Read {
                key: key.to_string(),
                message: err.to_string(),
            }),
        }
    }

    fn set(&mut self, key: &str, value: &str) -> Result<(), StorageError> {
        std::fs::write(self.path_for(key), value).map_err(|err| StorageError::Write {
            key: key.to_string(),
            message: err.to_string(),
        })
    }

    fn remove(&mut self, key: &str) -> Result<(), StorageError> {
        match std::fs::remove_file(self.path_for(key)) {
            Ok(()) => Ok(()),
            Err(err) if err.kind() == ErrorKind::NotFound => Ok(()),
            Err(err) => Err(StorageError::Write {
                key: key.to_string(),
                message: err.to_string(),
            }),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn memory_storage_round_trip() {
        let mut storage = MemoryStorage::new();
        assert_eq!(storage.get("k").unwrap(), None);

        storage.set("k", "value").unwrap();
        assert_eq!(storage.get("k").unwrap().as_deref(), Some("value"));

        storage.remove("k").unwrap();
        assert_eq!(storage.get("k").unwrap(), None);
    }

    #[test]
    fn file_storage_round_trip() {
        let dir = tempfile::tempdir().unwrap();
        let mut storage = FileStorage::open(dir.path()).unwrap();

        assert_eq!(storage.get(MARKERS_KEY).unwrap(), None);
        storage.set(MARKERS_KEY, "[]").unwrap();
        assert_eq!(storage.get(MARKERS_KEY).unwrap().as_deref(), Some("[]"));

        // Removing a missing key is not an error.
        storage.remove("absent").unwrap();
        storage.remove(MARKERS_KEY).unwrap();
        assert_eq!(storage.get(MARKERS_KEY).unwrap(), None);
    }
}
