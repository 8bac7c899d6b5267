//! URL normalization.
//!
//! Turns a raw candidate string into a [`NormalizedUrl`] (scheme, host, path)
//! using the `url` crate's standard host parsing. Strings without an explicit
//! `http://` or `https://` prefix get `http://` prepended: an unspecified
//! scheme is scored as insecure.

mod host;

use std::borrow::Cow;

use thiserror::Error;

pub use host::{base_domain, is_dotted_quad, label_count};

/// Scheme prepended when the raw string has no explicit `http(s)://` prefix.
const DEFAULT_SCHEME_PREFIX: &str = "http://";

/// URL scheme as far as scoring is concerned.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Scheme {
    Http,
    Https,
    Other,
}

impl Scheme {
    fn from_parsed(scheme: &str) -> Self {
        match scheme {
            "http" => Scheme::Http,
            "https" => Scheme::Https,
            _ => Scheme::Other,
        }
    }
}

/// Structured view of a candidate URL, derived once per scan.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NormalizedUrl {
    pub scheme: Scheme,
    /// Host as produced by standard host parsing (lowercased, IPv4 canonical).
    pub host: String,
    pub path: String,
    /// The raw string exactly as given to [`normalize`].
    pub raw: String,
}

/// Why a candidate string could not be normalized.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum NormalizeError {
    #[error("malformed URL: {0}")]
    Parse(#[from] url::ParseError),
    #[error("URL has no host")]
    MissingHost,
}

fn has_explicit_scheme(raw: &str) -> bool {
    let starts_with = |prefix: &str| {
        raw.get(..prefix.len())
            .is_some_and(|head| head.eq_ignore_ascii_case(prefix))
    };
    starts_with("http://") || starts_with("https://")
}

/// Parse `raw` into a [`NormalizedUrl`].
///
/// `raw` is expected to be trimmed and to have passed
/// [`check_input`](crate::input::check_input). No side effects.
pub fn normalize(raw: &str) -> Result<NormalizedUrl, NormalizeError> {
    let candidate: Cow<'_, str> = if has_explicit_scheme(raw) {
        Cow::Borrowed(raw)
    } else {
        Cow::Owned(format!("{DEFAULT_SCHEME_PREFIX}{raw}"))
    };

    let parsed = url::Url::parse(&candidate)?;
    let host = parsed
        .host_str()
        .filter(|h| !h.is_empty())
        .ok_or(NormalizeError::MissingHost)?
        .to_string();

    Ok(NormalizedUrl {
        scheme: Scheme::from_parsed(parsed.scheme()),
        host,
        path: parsed.path().to_string(),
        raw: raw.to_string(),
    })
}
