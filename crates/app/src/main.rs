//! Quiver - command line HTTP request composer.
//!
//! Builds a request draft from the arguments, resolves it against the
//! active environment, sends it, and prints the normalized response.
//! History, environments, and saved requests persist under
//! `QUIVER_DATA_DIR` (or the platform config directory).

use std::process::ExitCode;
use std::sync::Arc;

use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use quiver_application::{RequestRunner, SessionStore};
use quiver_domain::{format_bytes, AuthState, HeaderRow, ParamRow, RequestDraft};
use quiver_infrastructure::{FileBlobStore, ReqwestTransport};

const USAGE: &str = "Usage: quiver <METHOD> <URL> [options]

Options:
  -H, --header <KEY:VALUE>   add a header row (repeatable)
  -q, --param <KEY=VALUE>    add a query parameter row (repeatable)
  -d, --data <BODY>          request body (ignored for GET)
      --bearer <TOKEN>       bearer token authentication
      --basic <USER:PASS>    basic authentication
      --raw                  print the raw response body";

/// A parsed invocation.
struct Invocation {
    draft: RequestDraft,
    raw: bool,
}

fn parse_args(args: &[String]) -> Result<Invocation, String> {
    let mut positional = Vec::new();
    let mut draft = RequestDraft::new();
    let mut raw = false;

    let mut iter = args.iter();
    while let Some(arg) = iter.next() {
        let mut value_for = |flag: &str| {
            iter.next()
                .cloned()
                .ok_or_else(|| format!("{flag} requires a value"))
        };
        match arg.as_str() {
            "-H" | "--header" => {
                let pair = value_for(arg)?;
                let (key, value) = pair
                    .split_once(':')
                    .ok_or_else(|| format!("expected KEY:VALUE, got `{pair}`"))?;
                draft.headers.push(HeaderRow::new(key.trim(), value.trim()));
            }
            "-q" | "--param" => {
                let pair = value_for(arg)?;
                let (key, value) = pair
                    .split_once('=')
                    .ok_or_else(|| format!("expected KEY=VALUE, got `{pair}`"))?;
                draft.params.push(ParamRow::new(key, value));
            }
            "-d" | "--data" => draft.body = value_for(arg)?,
            "--bearer" => draft.auth = AuthState::bearer(value_for(arg)?),
            "--basic" => {
                let pair = value_for(arg)?;
                let (user, pass) = pair
                    .split_once(':')
                    .ok_or_else(|| format!("expected USER:PASS, got `{pair}`"))?;
                draft.auth = AuthState::basic(user, pass);
            }
            "--raw" => raw = true,
            other if other.starts_with('-') => return Err(format!("unknown option `{other}`")),
            other => positional.push(other.to_string()),
        }
    }

    let [method, url] = positional.as_slice() else {
        return Err("expected <METHOD> and <URL>".to_string());
    };
    draft.method = method.parse().map_err(|e| format!("{e}"))?;
    draft.url.clone_from(url);

    Ok(Invocation { draft, raw })
}

async fn run(invocation: Invocation) -> Result<(), String> {
    let blobs = FileBlobStore::at_default_location().map_err(|e| e.to_string())?;
    tracing::debug!(dir = %blobs.directory().display(), "using data directory");
    let mut session = SessionStore::load(blobs).await;

    let transport = ReqwestTransport::new().map_err(|e| e.to_string())?;
    let runner = RequestRunner::new(Arc::new(transport));

    let snapshot = runner
        .send(&invocation.draft, &mut session)
        .await
        .map_err(|e| e.user_message())?;

    println!(
        "{} {}  {} ms  {}",
        snapshot.status,
        snapshot.status_text,
        snapshot.time_ms,
        format_bytes(snapshot.size)
    );
    println!("Content-Type: {}", snapshot.content_type);
    println!();
    println!("{}", snapshot.headers_text());
    println!();
    if invocation.raw {
        println!("{}", snapshot.raw_body);
    } else {
        println!("{}", snapshot.body);
    }

    Ok(())
}

#[tokio::main]
async fn main() -> ExitCode {
    tracing_subscriber::registry()
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")))
        .with(tracing_subscriber::fmt::layer())
        .init();

    let args: Vec<String> = std::env::args().skip(1).collect();
    let invocation = match parse_args(&args) {
        Ok(invocation) => invocation,
        Err(message) => {
            eprintln!("{message}\n\n{USAGE}");
            return ExitCode::from(2);
        }
    };

    match run(invocation).await {
        Ok(()) => ExitCode::SUCCESS,
        Err(message) => {
            eprintln!("{message}");
            ExitCode::FAILURE
        }
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use quiver_domain::HttpMethod;

    fn args(parts: &[&str]) -> Vec<String> {
        parts.iter().map(ToString::to_string).collect()
    }

    #[test]
    fn test_parse_minimal() {
        let invocation = parse_args(&args(&["get", "https://example.com"])).unwrap();
        assert_eq!(invocation.draft.method, HttpMethod::Get);
        assert_eq!(invocation.draft.url, "https://example.com");
        assert!(!invocation.raw);
    }

    #[test]
    fn test_parse_full_invocation() {
        let invocation = parse_args(&args(&[
            "POST",
            "https://api.example.com/items",
            "-H",
            "Accept: application/json",
            "-q",
            "page=2",
            "-d",
            r#"{"a":1}"#,
            "--bearer",
            "tkn",
            "--raw",
        ]))
        .unwrap();

        let draft = &invocation.draft;
        assert_eq!(draft.method, HttpMethod::Post);
        assert_eq!(draft.headers.len(), 1);
        assert_eq!(draft.headers[0].key, "Accept");
        assert_eq!(draft.params[0].value, "2");
        assert_eq!(draft.body, r#"{"a":1}"#);
        assert_eq!(draft.auth, AuthState::bearer("tkn"));
        assert!(invocation.raw);
    }

    #[test]
    fn test_parse_rejects_bad_input() {
        assert!(parse_args(&args(&["GET"])).is_err());
        assert!(parse_args(&args(&["SPLICE", "https://example.com"])).is_err());
        assert!(parse_args(&args(&["GET", "https://example.com", "-H"])).is_err());
        assert!(parse_args(&args(&["GET", "https://example.com", "--nope"])).is_err());
        assert!(parse_args(&args(&["GET", "https://example.com", "-q", "noequals"])).is_err());
    }
}
