//! Port definitions (interfaces)
//!
//! Ports define the boundaries between the engine and external systems.
//! Each port is a trait implemented by adapters in the infrastructure layer.

mod blob_store;
mod transport;

pub use blob_store::{BlobStore, BlobStoreError};
pub use transport::{HttpTransport, TransportError};
