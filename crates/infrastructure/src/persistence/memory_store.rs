//! In-memory blob store.
//!
//! Used by tests and for ephemeral sessions that should leave nothing on
//! disk.

use std::collections::HashMap;

use tokio::sync::Mutex;

use quiver_application::ports::{BlobStore, BlobStoreError};

/// Blob store backed by a process-local map.
#[derive(Debug, Default)]
pub struct MemoryBlobStore {
    blobs: Mutex<HashMap<String, Vec<u8>>>,
}

impl MemoryBlobStore {
    /// Creates an empty store.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns the stored keys, for assertions.
    pub async fn keys(&self) -> Vec<String> {
        self.blobs.lock().await.keys().cloned().collect()
    }
}

impl BlobStore for MemoryBlobStore {
    async fn load(&self, key: &str) -> Result<Option<Vec<u8>>, BlobStoreError> {
        Ok(self.blobs.lock().await.get(key).cloned())
    }

    async fn save(&self, key: &str, bytes: &[u8]) -> Result<(), BlobStoreError> {
        self.blobs.lock().await.insert(key.to_string(), bytes.to_vec());
        Ok(())
    }

    async fn remove(&self, key: &str) -> Result<(), BlobStoreError> {
        self.blobs.lock().await.remove(key);
        Ok(())
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[tokio::test]
    async fn test_round_trip_and_remove() {
        let store = MemoryBlobStore::new();
        store.save("k", b"v").await.unwrap();
        assert_eq!(store.load("k").await.unwrap().as_deref(), Some(b"v".as_slice()));

        store.remove("k").await.unwrap();
        assert_eq!(store.load("k").await.unwrap(), None);
        assert!(store.keys().await.is_empty());
    }
}
