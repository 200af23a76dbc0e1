//! Editable header rows

use serde::{Deserialize, Serialize};

use crate::id::generate_id;

/// A single editable header row.
///
/// Rows keep a stable id across edits and support enable/disable without
/// deletion; disabled rows are retained but excluded from resolution.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct HeaderRow {
    /// Stable row identifier, unique within the owning list.
    #[serde(default = "generate_id")]
    pub id: String,
    /// The header name (e.g., "Accept")
    pub key: String,
    /// The header value (e.g., "application/json")
    pub value: String,
    /// Whether this header is enabled
    #[serde(default = "default_enabled")]
    pub enabled: bool,
}

const fn default_enabled() -> bool {
    true
}

impl HeaderRow {
    /// Creates a new enabled header row with a fresh id.
    #[must_use]
    pub fn new(key: impl Into<String>, value: impl Into<String>) -> Self {
        Self {
            id: generate_id(),
            key: key.into(),
            value: value.into(),
            enabled: true,
        }
    }

    /// Creates a disabled header row.
    #[must_use]
    pub fn disabled(key: impl Into<String>, value: impl Into<String>) -> Self {
        Self {
            enabled: false,
            ..Self::new(key, value)
        }
    }

    /// Creates an empty enabled row, as produced by an "add row" action.
    #[must_use]
    pub fn empty() -> Self {
        Self::new("", "")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_header_row_creation() {
        let row = HeaderRow::new("Accept", "application/json");
        assert_eq!(row.key, "Accept");
        assert_eq!(row.value, "application/json");
        assert!(row.enabled);
        assert!(!row.id.is_empty());
    }

    #[test]
    fn test_disabled_row() {
        let row = HeaderRow::disabled("X-Debug", "true");
        assert!(!row.enabled);
    }

    #[test]
    fn test_rows_get_distinct_ids() {
        let a = HeaderRow::empty();
        let b = HeaderRow::empty();
        assert_ne!(a.id, b.id);
    }
}
