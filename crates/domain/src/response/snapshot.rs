//! Normalized response snapshot

use serde::{Deserialize, Serialize};
use serde_json::ser::{PrettyFormatter, Serializer};
use serde_json::Value;

use super::raw::{RawResponse, ResponseHeader};

/// Placeholder shown when a non-JSON response has no body at all.
const EMPTY_BODY_PLACEHOLDER: &str = "Empty body";

/// An immutable, fully materialized view of one response.
///
/// Decoupled from the transport call that produced it: everything a
/// pretty/raw toggle needs is re-derivable from `raw_body` and
/// `content_type`, so display never requires a re-fetch.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ResponseSnapshot {
    /// True for 2xx status codes
    pub ok: bool,
    /// HTTP status code
    pub status: u16,
    /// Status text (e.g., "OK")
    pub status_text: String,
    /// Elapsed time in milliseconds
    pub time_ms: u64,
    /// UTF-8 byte length of the raw body (never of the display body)
    pub size: usize,
    /// Response headers in received order
    pub headers: Vec<ResponseHeader>,
    /// Display body: pretty-printed JSON when it applies, else raw text
    /// or a placeholder for empty bodies
    pub body: String,
    /// The untransformed response text
    pub raw_body: String,
    /// The response `content-type` header, or `"unknown"`
    pub content_type: String,
}

impl ResponseSnapshot {
    /// Normalizes a raw transport response.
    #[must_use]
    pub fn from_raw(raw: &RawResponse, time_ms: u64) -> Self {
        let content_type = raw
            .header("content-type")
            .unwrap_or("unknown")
            .to_string();

        let body = if content_type.contains("application/json") || looks_like_json(&raw.body) {
            try_format_json(&raw.body)
        } else if raw.body.is_empty() {
            EMPTY_BODY_PLACEHOLDER.to_string()
        } else {
            raw.body.clone()
        };

        Self {
            ok: raw.status >= 200 && raw.status < 300,
            status: raw.status,
            status_text: raw.status_text.clone(),
            time_ms,
            size: raw.body.len(),
            headers: raw.headers.clone(),
            body,
            raw_body: raw.body.clone(),
            content_type,
        }
    }

    /// Re-derives the pretty display body from the stored raw text.
    #[must_use]
    pub fn pretty_body(&self) -> String {
        if self.content_type.contains("application/json") {
            try_format_json(&self.raw_body)
        } else {
            self.body.clone()
        }
    }

    /// Returns true if the status code indicates success (2xx).
    #[must_use]
    pub const fn is_success(&self) -> bool {
        self.status >= 200 && self.status < 300
    }

    /// Returns true if the status code indicates a client error (4xx).
    #[must_use]
    pub const fn is_client_error(&self) -> bool {
        self.status >= 400 && self.status < 500
    }

    /// Returns true if the status code indicates a server error (5xx).
    #[must_use]
    pub const fn is_server_error(&self) -> bool {
        self.status >= 500 && self.status < 600
    }

    /// Joins headers as `key: value` lines, for copy actions.
    #[must_use]
    pub fn headers_text(&self) -> String {
        self.headers
            .iter()
            .map(|h| format!("{}: {}", h.key, h.value))
            .collect::<Vec<_>>()
            .join("\n")
    }
}

/// Response-side JSON sniff: trimmed body starts with `{` or `[`.
///
/// The request assembler keeps its own copy of this check; the two sides
/// may diverge.
fn looks_like_json(body: &str) -> bool {
    let trimmed = body.trim_start();
    trimmed.starts_with('{') || trimmed.starts_with('[')
}

/// Best-effort pretty print with 2-space indentation.
///
/// Parse failure falls back to the input unchanged; this never errors past
/// the display boundary.
fn try_format_json(payload: &str) -> String {
    let Ok(value) = serde_json::from_str::<Value>(payload) else {
        return payload.to_string();
    };

    let mut buffer = Vec::new();
    let formatter = PrettyFormatter::with_indent(b"  ");
    let mut serializer = Serializer::with_formatter(&mut buffer, formatter);
    if value.serialize(&mut serializer).is_err() {
        return payload.to_string();
    }
    String::from_utf8(buffer).unwrap_or_else(|_| payload.to_string())
}

/// Formats a byte count for display: `B`, one-decimal `KB`, two-decimal `MB`.
#[must_use]
#[allow(clippy::cast_precision_loss)]
pub fn format_bytes(size: usize) -> String {
    if size < 1024 {
        format!("{size} B")
    } else if size < 1024 * 1024 {
        format!("{:.1} KB", size as f64 / 1024.0)
    } else {
        format!("{:.2} MB", size as f64 / (1024.0 * 1024.0))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn raw(content_type: Option<&str>, body: &str) -> RawResponse {
        let headers = content_type
            .map(|ct| vec![ResponseHeader::new("Content-Type", ct)])
            .unwrap_or_default();
        RawResponse {
            status: 200,
            status_text: "OK".to_string(),
            headers,
            body: body.to_string(),
        }
    }

    #[test]
    fn test_size_counts_utf8_bytes() {
        let snapshot = ResponseSnapshot::from_raw(&raw(Some("text/plain"), "héllo"), 10);
        assert_eq!(snapshot.size, 6);
        assert_eq!(snapshot.raw_body.chars().count(), 5);
    }

    #[test]
    fn test_json_body_is_pretty_printed() {
        let snapshot =
            ResponseSnapshot::from_raw(&raw(Some("application/json"), r#"{"a":1,"b":[2]}"#), 10);
        assert_eq!(snapshot.body, "{\n  \"a\": 1,\n  \"b\": [\n    2\n  ]\n}");
        assert_eq!(snapshot.raw_body, r#"{"a":1,"b":[2]}"#);
    }

    #[test]
    fn test_json_sniff_without_content_type() {
        let snapshot = ResponseSnapshot::from_raw(&raw(None, "[1,2]"), 10);
        assert_eq!(snapshot.content_type, "unknown");
        assert_eq!(snapshot.body, "[\n  1,\n  2\n]");
    }

    #[test]
    fn test_malformed_json_falls_back_to_raw() {
        let snapshot = ResponseSnapshot::from_raw(&raw(Some("application/json"), "{not json"), 10);
        assert_eq!(snapshot.body, "{not json");
    }

    #[test]
    fn test_empty_non_json_body_gets_placeholder() {
        let snapshot = ResponseSnapshot::from_raw(&raw(Some("text/html"), ""), 10);
        assert_eq!(snapshot.body, "Empty body");
        assert_eq!(snapshot.raw_body, "");
        assert_eq!(snapshot.size, 0);
    }

    #[test]
    fn test_empty_json_body_stays_empty() {
        // The JSON branch falls back to the raw text, not the placeholder
        let snapshot = ResponseSnapshot::from_raw(&raw(Some("application/json"), ""), 10);
        assert_eq!(snapshot.body, "");
    }

    #[test]
    fn test_pretty_body_rederives_from_raw() {
        let snapshot =
            ResponseSnapshot::from_raw(&raw(Some("application/json"), r#"{"a":1}"#), 10);
        assert_eq!(snapshot.pretty_body(), "{\n  \"a\": 1\n}");
    }

    #[test]
    fn test_status_predicates() {
        let mut r = raw(None, "");
        r.status = 404;
        let snapshot = ResponseSnapshot::from_raw(&r, 1);
        assert!(!snapshot.ok);
        assert!(snapshot.is_client_error());
        assert!(!snapshot.is_server_error());
    }

    #[test]
    fn test_headers_text() {
        let mut r = raw(Some("text/plain"), "hi");
        r.headers.push(ResponseHeader::new("X-Trace", "abc"));
        let snapshot = ResponseSnapshot::from_raw(&r, 1);
        assert_eq!(snapshot.headers_text(), "Content-Type: text/plain\nX-Trace: abc");
    }

    #[test]
    fn test_format_bytes() {
        assert_eq!(format_bytes(512), "512 B");
        assert_eq!(format_bytes(1536), "1.5 KB");
        assert_eq!(format_bytes(2 * 1024 * 1024), "2.00 MB");
    }
}
