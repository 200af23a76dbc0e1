//! Authorization header building

use base64::engine::general_purpose::STANDARD;
use base64::Engine;

use quiver_domain::{AuthState, EnvVariable};

/// Builds zero or one `Authorization` header from the auth state.
///
/// Credentials are variable-resolved before use. A bearer token that is
/// empty after resolving and trimming produces no header rather than a
/// malformed one; basic auth requires a non-empty resolved username. The
/// emitted value carries the resolved credentials untrimmed.
///
/// The caller merges this pair into the header map after user-supplied
/// headers, so it wins over a user-entered `Authorization` header.
#[must_use]
pub fn build_auth_header(
    auth: &AuthState,
    variables: &[EnvVariable],
) -> Option<(String, String)> {
    match auth {
        AuthState::None => None,
        AuthState::Bearer { token } => {
            let token = crate::resolve(token, variables);
            if token.trim().is_empty() {
                return None;
            }
            Some(("Authorization".to_string(), format!("Bearer {token}")))
        }
        AuthState::Basic { username, password } => {
            let username = crate::resolve(username, variables);
            if username.is_empty() {
                return None;
            }
            let password = crate::resolve(password, variables);
            let encoded = STANDARD.encode(format!("{username}:{password}"));
            Some(("Authorization".to_string(), format!("Basic {encoded}")))
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_none_is_absent() {
        assert_eq!(build_auth_header(&AuthState::None, &[]), None);
    }

    #[test]
    fn test_bearer_header() {
        let header = build_auth_header(&AuthState::bearer("abc123"), &[]);
        assert_eq!(
            header,
            Some(("Authorization".to_string(), "Bearer abc123".to_string()))
        );
    }

    #[test]
    fn test_empty_bearer_token_is_absent() {
        assert_eq!(build_auth_header(&AuthState::bearer(""), &[]), None);
        assert_eq!(build_auth_header(&AuthState::bearer("   "), &[]), None);
    }

    #[test]
    fn test_bearer_token_resolved_before_emptiness_check() {
        let vars = vec![EnvVariable::new("tkn", "resolved-token")];
        let header = build_auth_header(&AuthState::bearer("{{tkn}}"), &vars);
        assert_eq!(
            header,
            Some((
                "Authorization".to_string(),
                "Bearer resolved-token".to_string()
            ))
        );

        // Resolving to nothing means no header
        assert_eq!(build_auth_header(&AuthState::bearer("{{missing}}"), &[]), None);
    }

    #[test]
    fn test_bearer_value_is_not_trimmed() {
        let header = build_auth_header(&AuthState::bearer("  x  "), &[]);
        assert_eq!(
            header,
            Some(("Authorization".to_string(), "Bearer   x  ".to_string()))
        );
    }

    #[test]
    fn test_basic_header_encodes_user_colon_pass() {
        let header = build_auth_header(&AuthState::basic("u", "p"), &[]);
        // base64("u:p")
        assert_eq!(
            header,
            Some(("Authorization".to_string(), "Basic dTpw".to_string()))
        );
    }

    #[test]
    fn test_basic_without_username_is_absent() {
        assert_eq!(build_auth_header(&AuthState::basic("", "p"), &[]), None);
    }

    #[test]
    fn test_basic_credentials_are_resolved() {
        let vars = vec![
            EnvVariable::new("user", "u"),
            EnvVariable::new("pass", "p"),
        ];
        let header = build_auth_header(&AuthState::basic("{{user}}", "{{pass}}"), &vars);
        assert_eq!(
            header,
            Some(("Authorization".to_string(), "Basic dTpw".to_string()))
        );
    }
}
