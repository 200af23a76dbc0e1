//! Raw transport response

use serde::{Deserialize, Serialize};

/// A response header as received, order preserved.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ResponseHeader {
    /// Header name as sent by the server
    pub key: String,
    /// Header value
    pub value: String,
}

impl ResponseHeader {
    /// Creates a response header.
    #[must_use]
    pub fn new(key: impl Into<String>, value: impl Into<String>) -> Self {
        Self {
            key: key.into(),
            value: value.into(),
        }
    }
}

/// The untransformed result of a transport send.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct RawResponse {
    /// HTTP status code
    pub status: u16,
    /// Status text (e.g., "OK", "Not Found")
    pub status_text: String,
    /// Response headers in received order
    pub headers: Vec<ResponseHeader>,
    /// Response body decoded as text
    pub body: String,
}

impl RawResponse {
    /// Looks up a header value case-insensitively.
    #[must_use]
    pub fn header(&self, name: &str) -> Option<&str> {
        self.headers
            .iter()
            .find(|h| h.key.eq_ignore_ascii_case(name))
            .map(|h| h.value.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_header_lookup_is_case_insensitive() {
        let raw = RawResponse {
            status: 200,
            status_text: "OK".to_string(),
            headers: vec![ResponseHeader::new("Content-Type", "application/json")],
            body: String::new(),
        };

        assert_eq!(raw.header("content-type"), Some("application/json"));
        assert_eq!(raw.header("CONTENT-TYPE"), Some("application/json"));
        assert_eq!(raw.header("x-missing"), None);
    }
}
