//! Request assembly

use thiserror::Error;

use quiver_domain::{EnvVariable, HeaderMap, HeaderRow, ParamRow, RequestDescriptor, RequestDraft};

use super::auth::build_auth_header;
use super::url::{build_url_with_params, MalformedUrlError};
use crate::resolve;

/// Local validation failures during assembly.
///
/// Both variants are raised before any transport call and must be reported
/// distinctly from transport failures.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum AssembleError {
    /// The URL field is empty.
    #[error("URL is required")]
    EmptyUrl,

    /// The resolved URL cannot be parsed.
    #[error(transparent)]
    MalformedUrl(#[from] MalformedUrlError),
}

/// Assembles a draft plus an environment into a ready-to-send descriptor.
///
/// Steps, in an order that matters for correctness:
/// 1. reject an empty trimmed URL;
/// 2. resolve variables into URL, header rows, param rows, and body;
/// 3. fold enabled, non-empty-key header rows into the map (last same-key
///    row wins);
/// 4. merge the auth header on top;
/// 5. attach the body only for non-GET methods with non-empty trimmed text;
/// 6. infer `Content-Type: application/json` for brace/bracket-prefixed
///    bodies when none is present;
/// 7. compose the final URL from the resolved URL and params.
///
/// # Errors
///
/// Returns [`AssembleError`] on an empty or malformed URL; no network call
/// is attempted in either case.
pub fn assemble(
    draft: &RequestDraft,
    variables: &[EnvVariable],
) -> Result<RequestDescriptor, AssembleError> {
    if draft.url.trim().is_empty() {
        return Err(AssembleError::EmptyUrl);
    }

    let resolved_url = resolve(&draft.url, variables);
    let resolved_headers: Vec<HeaderRow> = draft
        .headers
        .iter()
        .map(|row| HeaderRow {
            key: resolve(&row.key, variables),
            value: resolve(&row.value, variables),
            ..row.clone()
        })
        .collect();
    let resolved_params: Vec<ParamRow> = draft
        .params
        .iter()
        .map(|row| ParamRow {
            key: resolve(&row.key, variables),
            value: resolve(&row.value, variables),
            ..row.clone()
        })
        .collect();
    let resolved_body = resolve(&draft.body, variables);

    let mut headers = HeaderMap::new();
    for row in resolved_headers
        .iter()
        .filter(|row| row.enabled && !row.key.trim().is_empty())
    {
        headers.set(row.key.trim(), row.value.trim());
    }

    if let Some((name, value)) = build_auth_header(&draft.auth, variables) {
        headers.set(name, value);
    }

    let body = (draft.method.allows_body() && !resolved_body.trim().is_empty())
        .then_some(resolved_body);

    if let Some(body_text) = &body {
        if !headers.contains_key_ignore_case("content-type") && body_looks_like_json(body_text) {
            headers.set("Content-Type", "application/json");
        }
    }

    let url = build_url_with_params(&resolved_url, &resolved_params)?;

    Ok(RequestDescriptor {
        method: draft.method,
        url,
        headers,
        body,
    })
}

/// Request-side JSON sniff: trimmed body starts with `{` or `[`.
///
/// A prefix check, not a parse: bodies that are invalid JSON but
/// brace-prefixed still get the header. The response normalizer keeps its
/// own copy of this check; the two sides may diverge.
fn body_looks_like_json(body: &str) -> bool {
    let trimmed = body.trim_start();
    trimmed.starts_with('{') || trimmed.starts_with('[')
}
