//! URL and query string composition

use thiserror::Error;
use url::Url;

use quiver_domain::{HistoryEntry, ParamRow, RequestDraft};

/// The URL could not be parsed as an absolute URL.
///
/// A local validation failure: callers must not attempt the send.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
#[error("invalid URL `{url}`: {reason}")]
pub struct MalformedUrlError {
    /// The offending URL as given
    pub url: String,
    /// Parser description of the failure
    pub reason: String,
}

/// Merges enabled parameter rows into a URL's query string.
///
/// Rows with a disabled flag or an empty trimmed key are skipped. When
/// nothing survives the filter the input URL is returned unchanged, embedded
/// query string and all. Otherwise each surviving row **sets** its trimmed
/// key to its trimmed value in list order: an existing key keeps its
/// position and loses later duplicates, a new key is appended.
///
/// # Errors
///
/// Returns [`MalformedUrlError`] when `url` is not parseable as an absolute
/// URL.
pub fn build_url_with_params(
    url: &str,
    params: &[ParamRow],
) -> Result<String, MalformedUrlError> {
    let enabled: Vec<&ParamRow> = params
        .iter()
        .filter(|p| p.enabled && !p.key.trim().is_empty())
        .collect();
    if enabled.is_empty() {
        return Ok(url.to_string());
    }

    let mut parsed = Url::parse(url).map_err(|e| MalformedUrlError {
        url: url.to_string(),
        reason: e.to_string(),
    })?;

    let mut pairs: Vec<(String, String)> = parsed
        .query_pairs()
        .map(|(k, v)| (k.into_owned(), v.into_owned()))
        .collect();
    for param in enabled {
        set_pair(&mut pairs, param.key.trim(), param.value.trim());
    }

    parsed
        .query_pairs_mut()
        .clear()
        .extend_pairs(pairs.iter().map(|(k, v)| (k.as_str(), v.as_str())));
    Ok(parsed.to_string())
}

/// Replaces the first occurrence of `key` and drops later duplicates, or
/// appends when the key is absent.
fn set_pair(pairs: &mut Vec<(String, String)>, key: &str, value: &str) {
    let Some(first) = pairs.iter().position(|(k, _)| k == key) else {
        pairs.push((key.to_string(), value.to_string()));
        return;
    };

    pairs[first].1 = value.to_string();
    let mut index = pairs.len();
    while index > first + 1 {
        index -= 1;
        if pairs[index].0 == key {
            pairs.remove(index);
        }
    }
}

/// Derives enabled parameter rows from a URL's existing query string.
///
/// Order is preserved; an unparseable URL yields an empty list, never an
/// error. Used at initial load and for the explicit "sync from URL" action
/// that replaces the parameter list wholesale.
#[must_use]
pub fn parse_params_from_url(url: &str) -> Vec<ParamRow> {
    let Ok(parsed) = Url::parse(url) else {
        return Vec::new();
    };

    parsed
        .query_pairs()
        .map(|(key, value)| ParamRow::new(key, value))
        .collect()
}

/// Rebuilds an editable draft from a history entry.
///
/// History records only method and final URL, so the parameter list is
/// re-derived from the URL's query string.
#[must_use]
pub fn draft_from_history(entry: &HistoryEntry) -> RequestDraft {
    RequestDraft {
        method: entry.method,
        url: entry.url.clone(),
        params: parse_params_from_url(&entry.url),
        ..RequestDraft::default()
    }
}
