//! Editable query parameter rows

use serde::{Deserialize, Serialize};

use crate::id::generate_id;

/// A single editable query parameter row.
///
/// Same shape as a header row: stable id, enable/disable without deletion,
/// order significant.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ParamRow {
    /// Stable row identifier, unique within the owning list.
    #[serde(default = "generate_id")]
    pub id: String,
    /// The parameter key
    pub key: String,
    /// The parameter value
    pub value: String,
    /// Whether this parameter is enabled
    #[serde(default = "default_enabled")]
    pub enabled: bool,
}

const fn default_enabled() -> bool {
    true
}

impl ParamRow {
    /// Creates a new enabled parameter row with a fresh id.
    #[must_use]
    pub fn new(key: impl Into<String>, value: impl Into<String>) -> Self {
        Self {
            id: generate_id(),
            key: key.into(),
            value: value.into(),
            enabled: true,
        }
    }

    /// Creates a disabled parameter row.
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
