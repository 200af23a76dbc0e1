//! File-system blob store.
//!
//! Stores each blob as `<key>.json` in a data directory:
//! - `QUIVER_DATA_DIR` when set
//! - otherwise the platform config directory, e.g. `~/.config/quiver`

use std::io::ErrorKind;
use std::path::{Path, PathBuf};

use tokio::fs;

use quiver_application::ports::{BlobStore, BlobStoreError};

/// Blob store writing one JSON file per key.
#[derive(Debug, Clone)]
pub struct FileBlobStore {
    directory: PathBuf,
}

impl FileBlobStore {
    /// Creates a store rooted at the given directory.
    #[must_use]
    pub fn new(directory: impl Into<PathBuf>) -> Self {
        Self {
            directory: directory.into(),
        }
    }

    /// Creates a store at the default data directory.
    ///
    /// # Errors
    ///
    /// Returns an error when no data directory can be determined.
    pub fn at_default_location() -> Result<Self, BlobStoreError> {
        let directory = std::env::var_os("QUIVER_DATA_DIR")
            .map(PathBuf::from)
            .or_else(|| dirs::config_dir().map(|p| p.join("quiver")))
            .ok_or_else(|| {
                BlobStoreError::Other("could not determine a data directory".to_string())
            })?;
        Ok(Self::new(directory))
    }

    /// Returns the directory this store writes into.
    #[must_use]
    pub fn directory(&self) -> &Path {
        &self.directory
    }

    fn path_for(&self, key: &str) -> PathBuf {
        self.directory.join(format!("{key}.json"))
    }
}

impl BlobStore for FileBlobStore {
    async fn load(&self, key: &str) -> Result<Option<Vec<u8>>, BlobStoreError> {
        match fs::read(self.path_for(key)).await {
            Ok(bytes) => Ok(Some(bytes)),
            Err(e) if e.kind() == ErrorKind::NotFound => Ok(None),
            Err(e) => Err(BlobStoreError::Io(e)),
        }
    }

    async fn save(&self, key: &str, bytes: &[u8]) -> Result<(), BlobStoreError> {
        fs::create_dir_all(&self.directory).await?;
        fs::write(self.path_for(key), bytes).await?;
        Ok(())
    }

    async fn remove(&self, key: &str) -> Result<(), BlobStoreError> {
        match fs::remove_file(self.path_for(key)).await {
            Ok(()) => Ok(()),
            Err(e) if e.kind() == ErrorKind::NotFound => Ok(()),
            Err(e) => Err(BlobStoreError::Io(e)),
        }
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use tempfile::tempdir;

    #[tokio::test]
    async fn test_round_trip() {
        let dir = tempdir().unwrap();
        let store = FileBlobStore::new(dir.path());

        store.save("test_key", b"payload").await.unwrap();
        let loaded = store.load("test_key").await.unwrap();
        assert_eq!(loaded.as_deref(), Some(b"payload".as_slice()));
        assert!(dir.path().join("test_key.json").exists());
    }

    #[tokio::test]
    async fn test_missing_key_is_absent() {
        let dir = tempdir().unwrap();
        let store = FileBlobStore::new(dir.path());
        assert_eq!(store.load("nope").await.unwrap(), None);
    }

    #[tokio::test]
    async fn test_remove_is_idempotent() {
        let dir = tempdir().unwrap();
        let store = FileBlobStore::new(dir.path());

        store.save("gone", b"x").await.unwrap();
        store.remove("gone").await.unwrap();
        store.remove("gone").await.unwrap();
        assert_eq!(store.load("gone").await.unwrap(), None);
    }

    #[tokio::test]
    async fn test_save_creates_directory() {
        let dir = tempdir().unwrap();
        let nested = dir.path().join("deep").join("quiver");
        let store = FileBlobStore::new(&nested);

        store.save("k", b"v").await.unwrap();
        assert!(nested.join("k.json").exists());
    }
}
