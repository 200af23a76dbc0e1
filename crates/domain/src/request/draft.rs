//! The live composer form

use serde::{Deserialize, Serialize};

use super::{HeaderRow, HttpMethod, ParamRow};
use crate::auth::AuthState;

/// The editable state of the request composer.
///
/// This is what the user types into: unresolved variables, disabled rows and
/// all. Assembly turns a draft plus an environment into a
/// [`RequestDescriptor`](super::RequestDescriptor).
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct RequestDraft {
    /// HTTP method
    pub method: HttpMethod,
    /// Target URL (may contain `{{variable}}` placeholders)
    pub url: String,
    /// Editable header rows
    #[serde(default)]
    pub headers: Vec<HeaderRow>,
    /// Editable query parameter rows
    #[serde(default)]
    pub params: Vec<ParamRow>,
    /// Body text (ignored for GET)
    #[serde(default)]
    pub body: String,
    /// Authentication state
    #[serde(default)]
    pub auth: AuthState,
}

impl RequestDraft {
    /// Creates an empty GET draft.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a GET draft for the given URL.
    #[must_use]
    pub fn get(url: impl Into<String>) -> Self {
        Self {
            url: url.into(),
            ..Self::default()
        }
    }

    /// Removes a header row by id.
    pub fn remove_header(&mut self, id: &str) {
        self.headers.retain(|row| row.id != id);
    }

    /// Removes a parameter row by id.
    pub fn remove_param(&mut self, id: &str) {
        self.params.retain(|row| row.id != id);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_draft() {
        let draft = RequestDraft::new();
        assert_eq!(draft.method, HttpMethod::Get);
        assert!(draft.url.is_empty());
        assert!(draft.headers.is_empty());
        assert_eq!(draft.auth, AuthState::None);
    }

    #[test]
    fn test_remove_rows_by_id() {
        let mut draft = RequestDraft::get("https://example.com");
        draft.headers.push(HeaderRow::new("Accept", "text/plain"));
        draft.params.push(ParamRow::new("q", "1"));

        let header_id = draft.headers[0].id.clone();
        let param_id = draft.params[0].id.clone();
        draft.remove_header(&header_id);
        draft.remove_param(&param_id);

        assert!(draft.headers.is_empty());
        assert!(draft.params.is_empty());
    }
}
