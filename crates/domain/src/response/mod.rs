//! Response types and normalization

mod raw;
mod snapshot;

pub use raw::{RawResponse, ResponseHeader};
pub use snapshot::{format_bytes, ResponseSnapshot};
