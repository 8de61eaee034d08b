//! In-memory storage backend for tests and ephemeral runs.

use std::collections::HashMap;
use std::sync::{Mutex, PoisonError};

use super::{StorageBackend, StorageError, StorageKey};

/// Keeps blobs in a map. Nothing survives the process.
#[derive(Default)]
pub struct MemoryBackend {
    blobs: Mutex<HashMap<StorageKey, String>>,
}

impl MemoryBackend {
    /// Create an empty backend.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Raw blob currently stored under `key`, for test assertions.
    #[must_use]
    pub fn snapshot(&self, key: StorageKey) -> Option<String> {
        self.lock().get(&key).cloned()
    }

    fn lock(&self) -> std::sync::MutexGuard<'_, HashMap<StorageKey, String>> {
        // A poisoned map of strings is still a map of strings.
        self.blobs.lock().unwrap_or_else(PoisonError::into_inner)
    }
}

impl StorageBackend for MemoryBackend {
    fn read(&self, key: StorageKey) -> Result<Option<String>, StorageError> {
        Ok(self.lock().get(&key).cloned())
    }

    fn write(&self, key: StorageKey, value: &str) -> Result<(), StorageError> {
        self.lock().insert(key, value.to_owned());
        Ok(())
    }

    fn remove(&self, key: StorageKey) -> Result<(), StorageError> {
        self.lock().remove(&key);
        Ok(())
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    #[test]
    fn test_write_read_remove() {
        let backend = MemoryBackend::new();
        assert!(backend.read(StorageKey::Cart).unwrap().is_none());

        backend.write(StorageKey::Cart, "blob").unwrap();
        assert_eq!(backend.read(StorageKey::Cart).unwrap().as_deref(), Some("blob"));

        backend.remove(StorageKey::Cart).unwrap();
        assert!(backend.read(StorageKey::Cart).unwrap().is_none());
    }

    #[test]
    fn test_snapshot_mirrors_stored_blob() {
        let backend = MemoryBackend::new();
        backend.write(StorageKey::Session, r#"{"a":1}"#).unwrap();
        assert_eq!(backend.snapshot(StorageKey::Session).as_deref(), Some(r#"{"a":1}"#));
    }
}
