//! Variable resolution
//!
//! Substitutes `{{name}}` placeholders from an environment's variable list.
//! Resolution is total: it never fails and never leaves placeholder text in
//! the output.

pub mod parser;

use quiver_domain::EnvVariable;

use parser::scan_placeholders;

/// Resolves all `{{name}}` placeholders in `input`.
///
/// Lookup takes the first variable in list order whose `enabled` is true and
/// whose key equals the trimmed capture; the first match wins even when later
/// entries share the key. A missing or disabled name substitutes the empty
/// string. Substituted values are inserted verbatim in a single left-to-right
/// pass; placeholders inside a substituted value are not re-resolved, so
/// expansion cannot recurse.
#[must_use]
pub fn resolve(input: &str, variables: &[EnvVariable]) -> String {
    let references = scan_placeholders(input);
    if references.is_empty() {
        return input.to_string();
    }

    let mut resolved = String::with_capacity(input.len());
    let mut last_end = 0;

    for reference in &references {
        resolved.push_str(&input[last_end..reference.span.start]);
        if let Some(variable) = variables
            .iter()
            .find(|v| v.enabled && v.key == reference.name)
        {
            resolved.push_str(&variable.value);
        }
        last_end = reference.span.end;
    }

    resolved.push_str(&input[last_end..]);
    resolved
}
