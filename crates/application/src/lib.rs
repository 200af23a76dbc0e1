//! Quiver Application - Request engine
//!
//! The composition and resolution engine: variable substitution, URL/query
//! composition, auth header building, request assembly, response-driven
//! history, and the session store. I/O goes through the port traits in
//! [`ports`]; adapters live in the infrastructure crate.

pub mod compose;
pub mod ports;
pub mod resolve;
pub mod send;
pub mod store;

pub use compose::{
    assemble, build_auth_header, build_url_with_params, draft_from_history, parse_params_from_url,
    AssembleError, MalformedUrlError,
};
pub use resolve::resolve;
pub use send::{RequestRunner, SendError};
pub use store::{SessionStore, StoreError, ENVIRONMENTS_KEY, HISTORY_KEY, SAVED_REQUESTS_KEY};
