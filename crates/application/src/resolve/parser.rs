//! Placeholder parser for `{{variable}}` syntax
//!
//! Scans strings for non-greedy `{{…}}` occurrences and reports their byte
//! spans, so substitution can splice around them in a single pass.

use std::ops::Range;

/// A parsed placeholder occurrence.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PlaceholderRef {
    /// The trimmed inner text. May be empty: `{{}}` is a valid occurrence
    /// and still gets substituted away.
    pub name: String,
    /// Byte range of the whole `{{…}}` occurrence in the input.
    pub span: Range<usize>,
}

/// Parses a string and extracts all placeholder occurrences.
///
/// Matching is non-greedy: each `{{` pairs with the nearest following `}}`.
/// An unterminated `{{` is not an occurrence.
///
/// # Examples
///
/// ```
/// use quiver_application::resolve::parser::scan_placeholders;
///
/// let refs = scan_placeholders("{{base_url}}/users/{{ id }}");
/// assert_eq!(refs.len(), 2);
/// assert_eq!(refs[0].name, "base_url");
/// assert_eq!(refs[1].name, "id");
/// ```
#[must_use]
pub fn scan_placeholders(input: &str) -> Vec<PlaceholderRef> {
    let mut references = Vec::new();
    let mut cursor = 0;

    while let Some(open) = input[cursor..].find("{{") {
        let start = cursor + open;
        let inner_start = start + 2;
        let Some(close) = input[inner_start..].find("}}") else {
            break;
        };
        let inner_end = inner_start + close;
        let end = inner_end + 2;

        references.push(PlaceholderRef {
            name: input[inner_start..inner_end].trim().to_string(),
            span: start..end,
        });
        cursor = end;
    }

    references
}
