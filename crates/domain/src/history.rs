//! Request history
//!
//! A bounded, newest-first log of past send attempts. Transport failures are
//! recorded too (status absent); local validation failures never reach here.

use std::collections::VecDeque;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::id::generate_id;
use crate::request::HttpMethod;

/// Maximum number of history entries kept; oldest are dropped first.
pub const HISTORY_LIMIT: usize = 25;

/// A single entry in the request history.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct HistoryEntry {
    /// Unique identifier for this entry.
    #[serde(default = "generate_id")]
    pub id: String,
    /// HTTP method used.
    pub method: HttpMethod,
    /// The fully resolved URL that was sent.
    pub url: String,
    /// Response status code, absent when the transport failed.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub status: Option<u16>,
    /// Elapsed time in milliseconds.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub time_ms: Option<u64>,
    /// When the request was executed.
    pub timestamp: DateTime<Utc>,
}

impl HistoryEntry {
    /// Creates an entry for a send that received a response.
    #[must_use]
    pub fn completed(method: HttpMethod, url: impl Into<String>, status: u16, time_ms: u64) -> Self {
        Self {
            id: generate_id(),
            method,
            url: url.into(),
            status: Some(status),
            time_ms: Some(time_ms),
            timestamp: Utc::now(),
        }
    }

    /// Creates an entry for a send whose transport failed.
    ///
    /// A failed send is still historically significant: elapsed time is
    /// recorded, status stays absent.
    #[must_use]
    pub fn failed(method: HttpMethod, url: impl Into<String>, time_ms: u64) -> Self {
        Self {
            id: generate_id(),
            method,
            url: url.into(),
            status: None,
            time_ms: Some(time_ms),
            timestamp: Utc::now(),
        }
    }

    /// Returns the elapsed time as a display string.
    #[must_use]
    pub fn duration_display(&self) -> String {
        match self.time_ms {
            #[allow(clippy::cast_precision_loss)]
            Some(ms) if ms >= 1000 => format!("{:.1}s", ms as f64 / 1000.0),
            Some(ms) => format!("{ms}ms"),
            None => "-".to_string(),
        }
    }
}

/// Bounded request history, newest first.
///
/// Serializes transparently as a plain array of entries.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct RequestHistory {
    entries: VecDeque<HistoryEntry>,
}

impl RequestHistory {
    /// Creates an empty history.
    #[must_use]
    pub const fn new() -> Self {
        Self {
            entries: VecDeque::new(),
        }
    }

    /// Prepends an entry, dropping the oldest beyond [`HISTORY_LIMIT`].
    pub fn push(&mut self, entry: HistoryEntry) {
        self.entries.push_front(entry);
        while self.entries.len() > HISTORY_LIMIT {
            self.entries.pop_back();
        }
    }

    /// Returns all entries, newest first.
    #[must_use]
    pub const fn entries(&self) -> &VecDeque<HistoryEntry> {
        &self.entries
    }

    /// Returns an entry by id.
    #[must_use]
    pub fn get(&self, id: &str) -> Option<&HistoryEntry> {
        self.entries.iter().find(|e| e.id == id)
    }

    /// Clears all entries.
    pub fn clear(&mut self) {
        self.entries.clear();
    }

    /// Returns the number of entries.
    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Returns true if history is empty.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}
