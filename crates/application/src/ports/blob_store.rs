//! Storage port

use std::future::Future;

use thiserror::Error;

/// Failures at the storage boundary.
#[derive(Debug, Error)]
pub enum BlobStoreError {
    /// An I/O error during load/save/remove.
    #[error("storage I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// Any other storage failure.
    #[error("storage error: {0}")]
    Other(String),
}

/// Port for opaque, string-keyed blob persistence.
///
/// The engine round-trips three independent blobs (history, environments,
/// saved requests) through this interface; the stored bytes are opaque
/// serialized state.
pub trait BlobStore: Send + Sync {
    /// Loads the blob for `key`, or `None` when absent.
    fn load(
        &self,
        key: &str,
    ) -> impl Future<Output = Result<Option<Vec<u8>>, BlobStoreError>> + Send;

    /// Saves the blob for `key`, overwriting any previous value.
    fn save(
        &self,
        key: &str,
        bytes: &[u8],
    ) -> impl Future<Output = Result<(), BlobStoreError>> + Send;

    /// Removes the blob for `key`. Removing an absent key is not an error.
    fn remove(&self, key: &str) -> impl Future<Output = Result<(), BlobStoreError>> + Send;
}
