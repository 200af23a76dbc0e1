//! HTTP transport port

use std::future::Future;

use thiserror::Error;

use quiver_domain::{RawResponse, RequestDescriptor};

/// Failures at the transport layer.
///
/// These are caught, surfaced as a user-visible message, and still produce
/// a history entry; they are never confused with local validation failures.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum TransportError {
    /// The request timed out.
    #[error("request timed out after {timeout_ms}ms")]
    Timeout {
        /// Configured timeout in milliseconds
        timeout_ms: u64,
    },

    /// DNS resolution failed.
    #[error("could not resolve host {host}: {message}")]
    Dns {
        /// The host that failed to resolve
        host: String,
        /// Resolver description
        message: String,
    },

    /// The connection was refused.
    #[error("connection refused by {host}:{port}")]
    ConnectionRefused {
        /// Target host
        host: String,
        /// Target port
        port: u16,
    },

    /// The connection failed for another reason.
    #[error("connection failed: {0}")]
    ConnectionFailed(String),

    /// The transport rejected the URL.
    #[error("invalid URL: {0}")]
    InvalidUrl(String),

    /// Any other transport failure.
    #[error("{0}")]
    Other(String),
}

impl TransportError {
    /// A user-visible message: the error's description when it has one,
    /// else a generic fallback.
    #[must_use]
    pub fn user_message(&self) -> String {
        let message = self.to_string();
        if message.trim().is_empty() {
            "Request failed.".to_string()
        } else {
            message
        }
    }
}

/// Port for executing HTTP requests.
///
/// The transport consumes a fully assembled descriptor and returns the raw
/// response; elapsed-time measurement is owned by the caller. A send, once
/// issued, runs to completion or failure; there is no cancellation
/// primitive and no retry in the core.
pub trait HttpTransport: Send + Sync {
    /// Sends the request and returns the raw response.
    fn send(
        &self,
        request: &RequestDescriptor,
    ) -> impl Future<Output = Result<RawResponse, TransportError>> + Send;
}
