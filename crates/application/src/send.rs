//! Send use case
//!
//! Orchestrates one send attempt: assemble, transport, normalize, record.
//! The transport call is the sole suspension point; everything read to
//! build the request is captured before it.

use std::sync::Arc;
use std::time::Instant;

use thiserror::Error;

use quiver_domain::{HistoryEntry, RequestDraft, ResponseSnapshot};

use crate::compose::{assemble, AssembleError};
use crate::ports::{BlobStore, HttpTransport, TransportError};
use crate::store::SessionStore;

/// Failures of a send attempt.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum SendError {
    /// Local validation failed; no network call was attempted and no
    /// history entry was recorded.
    #[error(transparent)]
    Assemble(#[from] AssembleError),

    /// The transport failed; a history entry was still recorded.
    #[error(transparent)]
    Transport(#[from] TransportError),
}

impl SendError {
    /// Returns true when the failure is local validation, not transport.
    #[must_use]
    pub const fn is_local(&self) -> bool {
        matches!(self, Self::Assemble(_))
    }

    /// A user-visible message for this failure.
    #[must_use]
    pub fn user_message(&self) -> String {
        match self {
            Self::Assemble(error) => error.to_string(),
            Self::Transport(error) => error.user_message(),
        }
    }
}

/// Use case for sending composed requests.
///
/// Holds the transport; the session store is passed per call so one runner
/// can serve successive sends. No retries, no cancellation: a send runs to
/// completion or transport failure.
pub struct RequestRunner<C: HttpTransport> {
    transport: Arc<C>,
}

impl<C: HttpTransport> RequestRunner<C> {
    /// Creates a runner over the given transport.
    pub fn new(transport: Arc<C>) -> Self {
        Self { transport }
    }

    /// Executes one send attempt.
    ///
    /// The active environment's variables are captured before the transport
    /// await; edits racing the send cannot tear the resolution. Every attempt
    /// that reaches the transport records exactly one history entry, whether
    /// it succeeds or fails; local validation failures record none.
    ///
    /// # Errors
    ///
    /// Returns [`SendError::Assemble`] for local validation failures and
    /// [`SendError::Transport`] when the network call fails.
    pub async fn send<S: BlobStore>(
        &self,
        draft: &RequestDraft,
        session: &mut SessionStore<S>,
    ) -> Result<ResponseSnapshot, SendError> {
        let variables = session.active_variables().to_vec();
        let descriptor = assemble(draft, &variables)?;

        let start = Instant::now();
        match self.transport.send(&descriptor).await {
            Ok(raw) => {
                let elapsed = elapsed_ms(start);
                let snapshot = ResponseSnapshot::from_raw(&raw, elapsed);
                record_history(
                    session,
                    HistoryEntry::completed(descriptor.method, &descriptor.url, raw.status, elapsed),
                )
                .await;
                Ok(snapshot)
            }
            Err(error) => {
                let elapsed = elapsed_ms(start);
                record_history(
                    session,
                    HistoryEntry::failed(descriptor.method, &descriptor.url, elapsed),
                )
                .await;
                Err(SendError::Transport(error))
            }
        }
    }
}

/// Appends a history entry, swallowing persistence faults.
///
/// History is observability: a storage hiccup must not turn a finished
/// response into an error.
async fn record_history<S: BlobStore>(session: &mut SessionStore<S>, entry: HistoryEntry) {
    if let Err(error) = session.push_history(entry).await {
        tracing::warn!(%error, "failed to persist history entry");
    }
}

fn elapsed_ms(start: Instant) -> u64 {
    u64::try_from(start.elapsed().as_millis()).unwrap_or(u64::MAX)
}
