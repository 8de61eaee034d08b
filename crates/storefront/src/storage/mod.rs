//! Persistence boundary for client-side state.
//!
//! Collections are stored as named JSON blobs. The [`StorageBackend`] trait
//! is the swap point: the real engine runs on [`FileBackend`], tests usually
//! run on [`MemoryBackend`].
//!
//! Storage failures are recoverable by contract. The [`Storage`] facade
//! applies that policy in one place: a failed or unreadable read behaves like
//! an absent record, a failed write or remove is a logged no-op. Stores never
//! see a `StorageError`; the next successful mutation rewrites the whole blob
//! and persistence self-heals.

pub mod file;
pub mod memory;

use std::fmt;
use std::sync::Arc;

use serde::Serialize;
use serde::de::DeserializeOwned;
use thiserror::Error;

pub use file::FileBackend;
pub use memory::MemoryBackend;

/// Keys under which collections are persisted.
///
/// Each store owns exactly one key; nothing else touches it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum StorageKey {
    /// The shopping cart record.
    Cart,
    /// The chat transcript record.
    Chat,
    /// The login session record.
    Session,
}

impl StorageKey {
    /// Stable name of the key, also the stem of its file on disk.
    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Self::Cart => "chouette_learning_cart",
            Self::Chat => "chouette_learning_chat",
            Self::Session => "chouette_learning_session",
        }
    }
}

impl fmt::Display for StorageKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Errors a storage backend can report.
#[derive(Debug, Error)]
pub enum StorageError {
    /// The underlying I/O operation failed.
    #[error("storage I/O failed: {0}")]
    Io(#[from] std::io::Error),

    /// The backend is not usable at all.
    #[error("storage backend unavailable: {0}")]
    Unavailable(String),
}

/// A place to keep raw JSON blobs, one per [`StorageKey`].
///
/// `read` returns `Ok(None)` for a key that was never written; errors are
/// reserved for actual backend failures.
pub trait StorageBackend: Send + Sync {
    /// Read the blob stored under `key`, if any.
    fn read(&self, key: StorageKey) -> Result<Option<String>, StorageError>;

    /// Replace the blob stored under `key`.
    fn write(&self, key: StorageKey, value: &str) -> Result<(), StorageError>;

    /// Delete the blob stored under `key`. Removing an absent key succeeds.
    fn remove(&self, key: StorageKey) -> Result<(), StorageError>;
}

impl<T: StorageBackend + ?Sized> StorageBackend for Arc<T> {
    fn read(&self, key: StorageKey) -> Result<Option<String>, StorageError> {
        (**self).read(key)
    }

    fn write(&self, key: StorageKey, value: &str) -> Result<(), StorageError> {
        (**self).write(key, value)
    }

    fn remove(&self, key: StorageKey) -> Result<(), StorageError> {
        (**self).remove(key)
    }
}

/// Shared handle over a backend, applying the degrade-silently policy.
///
/// Cheap to clone; all clones talk to the same backend.
#[derive(Clone)]
pub struct Storage {
    backend: Arc<dyn StorageBackend>,
}

impl Storage {
    /// Wrap a backend.
    pub fn new(backend: impl StorageBackend + 'static) -> Self {
        Self {
            backend: Arc::new(backend),
        }
    }

    /// Load and deserialize the record under `key`.
    ///
    /// Returns `None` when the key is absent, the backend fails, or the blob
    /// does not parse as `T`. All three degrade the same way.
    pub fn load_json<T: DeserializeOwned>(&self, key: StorageKey) -> Option<T> {
        let blob = match self.backend.read(key) {
            Ok(blob) => blob?,
            Err(e) => {
                tracing::warn!("failed to read {key}, treating as absent: {e}");
                return None;
            }
        };
        match serde_json::from_str(&blob) {
            Ok(value) => Some(value),
            Err(e) => {
                tracing::warn!("unreadable record under {key}, treating as absent: {e}");
                None
            }
        }
    }

    /// Serialize and persist `value` under `key`, best effort.
    ///
    /// A failed write keeps the in-memory state authoritative for this
    /// process; the next write will carry the full record again.
    pub fn store_json<T: Serialize>(&self, key: StorageKey, value: &T) {
        let blob = match serde_json::to_string(value) {
            Ok(blob) => blob,
            Err(e) => {
                tracing::warn!("failed to serialize record for {key}: {e}");
                return;
            }
        };
        if let Err(e) = self.backend.write(key, &blob) {
            tracing::warn!("failed to persist {key}, continuing in memory: {e}");
        }
    }

    /// Remove the record under `key`, best effort.
    pub fn remove(&self, key: StorageKey) {
        if let Err(e) = self.backend.remove(key) {
            tracing::warn!("failed to remove {key}: {e}");
        }
    }
}

impl fmt::Debug for Storage {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Storage").finish_non_exhaustive()
    }
}
