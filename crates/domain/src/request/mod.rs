//! Request composition types

mod descriptor;
mod draft;
mod header;
mod method;
mod query;

pub use descriptor::{HeaderMap, RequestDescriptor};
pub use draft::RequestDraft;
pub use header::HeaderRow;
pub use method::HttpMethod;
pub use query::ParamRow;
