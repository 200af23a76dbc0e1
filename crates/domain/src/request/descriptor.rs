//! Assembled request descriptor

use serde::{Deserialize, Serialize};

use super::HttpMethod;

/// An ordered header map with last-writer-wins set semantics.
///
/// Keys are compared exactly on `set`; an overwritten key keeps its original
/// position, a new key is appended. Containment checks for content-type
/// sniffing are case-insensitive.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct HeaderMap {
    entries: Vec<(String, String)>,
}

impl HeaderMap {
    /// Creates an empty header map.
    #[must_use]
    pub const fn new() -> Self {
        Self {
            entries: Vec::new(),
        }
    }

    /// Sets a header, overwriting the value of an existing exact-match key
    /// in place or appending a new entry.
    pub fn set(&mut self, key: impl Into<String>, value: impl Into<String>) {
        let key = key.into();
        let value = value.into();
        match self.entries.iter_mut().find(|(k, _)| *k == key) {
            Some(entry) => entry.1 = value,
            None => self.entries.push((key, value)),
        }
    }

    /// Returns the value for an exact-match key.
    #[must_use]
    pub fn get(&self, key: &str) -> Option<&str> {
        self.entries
            .iter()
            .find(|(k, _)| k == key)
            .map(|(_, v)| v.as_str())
    }

    /// Returns true if any key matches case-insensitively.
    #[must_use]
    pub fn contains_key_ignore_case(&self, key: &str) -> bool {
        self.entries.iter().any(|(k, _)| k.eq_ignore_ascii_case(key))
    }

    /// Iterates entries in insertion order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.entries.iter().map(|(k, v)| (k.as_str(), v.as_str()))
    }

    /// Returns the number of headers.
    #[must_use]
    #[allow(clippy::missing_const_for_fn)]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Returns true if there are no headers.
    #[must_use]
    #[allow(clippy::missing_const_for_fn)]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl<'a> IntoIterator for &'a HeaderMap {
    type Item = (&'a str, &'a str);
    type IntoIter = std::iter::Map<
        std::slice::Iter<'a, (String, String)>,
        fn(&'a (String, String)) -> (&'a str, &'a str),
    >;

    fn into_iter(self) -> Self::IntoIter {
        self.entries.iter().map(|(k, v)| (k.as_str(), v.as_str()))
    }
}

/// A fully assembled, ready-to-send request.
///
/// All variables are resolved, headers merged, and the URL composed; the
/// transport consumes this verbatim.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RequestDescriptor {
    /// HTTP method
    pub method: HttpMethod,
    /// Final URL, query parameters included
    pub url: String,
    /// Merged headers in transmission order
    pub headers: HeaderMap,
    /// Body text, if one is attached
    pub body: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_set_overwrites_in_place() {
        let mut headers = HeaderMap::new();
        headers.set("Accept", "text/plain");
        headers.set("X-Token", "a");
        headers.set("Accept", "application/json");

        assert_eq!(headers.len(), 2);
        assert_eq!(headers.get("Accept"), Some("application/json"));
        // Overwritten key keeps its original position
        let keys: Vec<_> = headers.iter().map(|(k, _)| k).collect();
        assert_eq!(keys, vec!["Accept", "X-Token"]);
    }

    #[test]
    fn test_set_is_case_sensitive() {
        let mut headers = HeaderMap::new();
        headers.set("authorization", "a");
        headers.set("Authorization", "b");
        assert_eq!(headers.len(), 2);
    }

    #[test]
    fn test_contains_key_ignore_case() {
        let mut headers = HeaderMap::new();
        headers.set("Content-Type", "text/plain");
        assert!(headers.contains_key_ignore_case("content-type"));
        assert!(headers.contains_key_ignore_case("CONTENT-TYPE"));
        assert!(!headers.contains_key_ignore_case("accept"));
    }
}
