//! Request composition
//!
//! Turns the editable draft plus an environment into a concrete outgoing
//! request: URL/query composition, auth header building, and final assembly.

mod assembler;
mod auth;
mod url;

pub use assembler::{assemble, AssembleError};
pub use auth::build_auth_header;
pub use url::{
    build_url_with_params, draft_from_history, parse_params_from_url, MalformedUrlError,
};
