//! Authentication state

use serde::{Deserialize, Serialize};

/// Authentication state for a request.
///
/// Exactly one variant is active at a time; switching variants fully
/// replaces the value, so fields never leak across variants.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum AuthState {
    /// No authentication
    #[default]
    None,
    /// Bearer token authentication
    Bearer {
        /// The bearer token (may contain variables like `{{access_token}}`)
        token: String,
    },
    /// Basic authentication
    Basic {
        /// Username (may contain variables)
        username: String,
        /// Password (may contain variables)
        password: String,
    },
}

impl AuthState {
    /// Returns true if authentication is configured.
    #[must_use]
    pub const fn is_configured(&self) -> bool {
        !matches!(self, Self::None)
    }

    /// Creates a bearer token authentication.
    #[must_use]
    pub fn bearer(token: impl Into<String>) -> Self {
        Self::Bearer {
            token: token.into(),
        }
    }

    /// Creates a basic authentication.
    #[must_use]
    pub fn basic(username: impl Into<String>, password: impl Into<String>) -> Self {
        Self::Basic {
            username: username.into(),
            password: password.into(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_default_is_none() {
        assert_eq!(AuthState::default(), AuthState::None);
        assert!(!AuthState::None.is_configured());
    }

    #[test]
    fn test_switching_variants_replaces_fields() {
        let auth = AuthState::basic("user", "secret");
        let switched = AuthState::bearer("tkn");
        assert_eq!(
            switched,
            AuthState::Bearer {
                token: "tkn".to_string()
            }
        );
        // The basic credentials are gone, not merged
        assert_ne!(auth, switched);
    }

    #[test]
    fn test_serde_tag_shape() {
        let auth = AuthState::bearer("abc");
        let json = serde_json::to_string(&auth).unwrap_or_default();
        assert!(json.contains(r#""type":"bearer""#));
    }
}
