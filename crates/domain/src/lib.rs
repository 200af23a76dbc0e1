//! Quiver Domain - Core business types
//!
//! This crate defines the domain model for the Quiver HTTP client.
//! All types here are pure Rust with no I/O dependencies.

pub mod auth;
pub mod collection;
pub mod environment;
pub mod error;
pub mod history;
pub mod id;
pub mod request;
pub mod response;

pub use auth::AuthState;
pub use collection::SavedRequest;
pub use environment::{EnvVariable, Environment};
pub use error::{DomainError, DomainResult};
pub use history::{HistoryEntry, RequestHistory, HISTORY_LIMIT};
pub use id::generate_id;
pub use request::{HeaderMap, HeaderRow, HttpMethod, ParamRow, RequestDescriptor, RequestDraft};
pub use response::{format_bytes, RawResponse, ResponseHeader, ResponseSnapshot};
