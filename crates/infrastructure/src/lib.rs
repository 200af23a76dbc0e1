//! Quiver Infrastructure - Adapters
//!
//! Concrete implementations of the application layer's ports: a reqwest
//! transport and file-system/in-memory blob stores.

pub mod http;
pub mod persistence;

pub use http::ReqwestTransport;
pub use persistence::{FileBlobStore, MemoryBlobStore};
