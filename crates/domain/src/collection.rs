//! Saved request templates

use serde::{Deserialize, Serialize};

use crate::auth::AuthState;
use crate::id::generate_id;
use crate::request::{HeaderRow, HttpMethod, ParamRow, RequestDraft};

/// A named snapshot of the composer form.
///
/// Saving copies the draft in full; later edits to the live form never
/// touch a saved request. The only way to change one is to overwrite it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SavedRequest {
    /// Unique identifier
    #[serde(default = "generate_id")]
    pub id: String,
    /// User-chosen name
    pub name: String,
    /// HTTP method
    pub method: HttpMethod,
    /// Target URL as typed (placeholders intact)
    pub url: String,
    /// Header rows as typed
    #[serde(default)]
    pub headers: Vec<HeaderRow>,
    /// Parameter rows as typed
    #[serde(default)]
    pub params: Vec<ParamRow>,
    /// Body text as typed
    #[serde(default)]
    pub body: String,
    /// Authentication state
    #[serde(default)]
    pub auth: AuthState,
}

impl SavedRequest {
    /// Snapshots a draft under the given name (trimmed).
    #[must_use]
    pub fn from_draft(name: impl Into<String>, draft: &RequestDraft) -> Self {
        Self {
            id: generate_id(),
            name: name.into().trim().to_string(),
            method: draft.method,
            url: draft.url.clone(),
            headers: draft.headers.clone(),
            params: draft.params.clone(),
            body: draft.body.clone(),
            auth: draft.auth.clone(),
        }
    }

    /// Copies this saved request back into an editable draft.
    #[must_use]
    pub fn to_draft(&self) -> RequestDraft {
        RequestDraft {
            method: self.method,
            url: self.url.clone(),
            headers: self.headers.clone(),
            params: self.params.clone(),
            body: self.body.clone(),
            auth: self.auth.clone(),
        }
    }
}
