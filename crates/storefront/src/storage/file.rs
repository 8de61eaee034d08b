//! File-per-key storage backend.

use std::fs;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};

use super::{StorageBackend, StorageError, StorageKey};

/// Stores each key as `<key>.json` under a state directory.
///
/// Writes go to a sibling temp file first and are moved into place with a
/// rename, so a record on disk is always either the previous version or the
/// new one, never a truncated mix.
pub struct FileBackend {
    dir: PathBuf,
}

impl FileBackend {
    /// Open a backend rooted at `dir`, creating the directory if needed.
    ///
    /// # Errors
    ///
    /// Returns [`StorageError::Io`] if the directory cannot be created.
    pub fn new(dir: impl Into<PathBuf>) -> Result<Self, StorageError> {
        let dir = dir.into();
        fs::create_dir_all(&dir)?;
        Ok(Self { dir })
    }

    /// The directory records live in.
    #[must_use]
    pub fn dir(&self) -> &Path {
        &self.dir
    }

    fn path_for(&self, key: StorageKey) -> PathBuf {
        self.dir.join(format!("{}.json", key.name()))
    }
}

impl StorageBackend for FileBackend {
    fn read(&self, key: StorageKey) -> Result<Option<String>, StorageError> {
        match fs::read_to_string(self.path_for(key)) {
            Ok(blob) => Ok(Some(blob)),
            Err(e) if e.kind() == ErrorKind::NotFound => Ok(None),
            Err(e) => Err(e.into()),
        }
    }

    fn write(&self, key: StorageKey, value: &str) -> Result<(), StorageError> {
        let path = self.path_for(key);
        let tmp = path.with_extension("json.tmp");
        fs::write(&tmp, value)?;
        fs::rename(&tmp, &path)?;
        Ok(())
    }

    fn remove(&self, key: StorageKey) -> Result<(), StorageError> {
        match fs::remove_file(self.path_for(key)) {
            Ok(()) => Ok(()),
            Err(e) if e.kind() == ErrorKind::NotFound => Ok(()),
            Err(e) => Err(e.into()),
        }
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    #[test]
    fn test_read_before_any_write_is_none() {
        let dir = tempfile::tempdir().unwrap();
        let backend = FileBackend::new(dir.path()).unwrap();
        assert!(backend.read(StorageKey::Cart).unwrap().is_none());
    }

    #[test]
    fn test_write_then_read_roundtrip() {
        let dir = tempfile::tempdir().unwrap();
        let backend = FileBackend::new(dir.path()).unwrap();

        backend.write(StorageKey::Cart, r#"{"version":2,"items":[]}"#).unwrap();
        let blob = backend.read(StorageKey::Cart).unwrap();
        assert_eq!(blob.as_deref(), Some(r#"{"version":2,"items":[]}"#));
    }

    #[test]
    fn test_write_replaces_previous_blob() {
        let dir = tempfile::tempdir().unwrap();
        let backend = FileBackend::new(dir.path()).unwrap();

        backend.write(StorageKey::Chat, "first").unwrap();
        backend.write(StorageKey::Chat, "second").unwrap();
        assert_eq!(backend.read(StorageKey::Chat).unwrap().as_deref(), Some("second"));
    }

    #[test]
    fn test_write_leaves_no_temp_file_behind() {
        let dir = tempfile::tempdir().unwrap();
        let backend = FileBackend::new(dir.path()).unwrap();
        backend.write(StorageKey::Cart, "{}").unwrap();

        let names: Vec<String> = fs::read_dir(dir.path())
            .unwrap()
            .map(|entry| entry.unwrap().file_name().to_string_lossy().into_owned())
            .collect();
        assert_eq!(names, vec!["chouette_learning_cart.json".to_owned()]);
    }

    #[test]
    fn test_remove_is_idempotent() {
        let dir = tempfile::tempdir().unwrap();
        let backend = FileBackend::new(dir.path()).unwrap();

        backend.write(StorageKey::Session, "{}").unwrap();
        backend.remove(StorageKey::Session).unwrap();
        backend.remove(StorageKey::Session).unwrap();
        assert!(backend.read(StorageKey::Session).unwrap().is_none());
    }

    #[test]
    fn test_keys_do_not_collide_on_disk() {
        let dir = tempfile::tempdir().unwrap();
        let backend = FileBackend::new(dir.path()).unwrap();

        backend.write(StorageKey::Cart, "cart").unwrap();
        backend.write(StorageKey::Chat, "chat").unwrap();
        assert_eq!(backend.read(StorageKey::Cart).unwrap().as_deref(), Some("cart"));
        assert_eq!(backend.read(StorageKey::Chat).unwrap().as_deref(), Some("chat"));
    }
}
