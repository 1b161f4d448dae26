//! URL normalization.
//!
//! Turns whatever the user pasted into a canonical absolute URL. Input without
//! a scheme is treated as `http://`, then parsed with the WHATWG algorithm from
//! the `url` crate. Host and scheme are lower-cased by the parser; existing
//! percent-encoding is kept as-is.

mod scheme;

pub use scheme::has_scheme_prefix;

use crate::error::EvaluateError;
use serde::Serialize;
use url::Url;

/// Scheme assumed when the input does not carry one.
const DEFAULT_SCHEME_PREFIX: &str = "http://";

/// Canonical, parsed form of a user-supplied URL.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct NormalizedUrl {
    /// Lower-case scheme without the trailing `:` (e.g. `https`).
    pub scheme: String,
    /// Host as serialized by the parser; IPv6 literals keep their brackets.
    pub hostname: String,
    /// Explicit port, if one was given and it is not the scheme default.
    pub port: Option<u16>,
    pub path: String,
    /// Query string without the leading `?`.
    pub query: Option<String>,
    /// Canonical serialization; re-parsing it yields the same string.
    pub full: String,
}

impl NormalizedUrl {
    /// Path and query concatenated the way they appear in the URL (`/a?b=c`).
    pub fn path_and_query(&self) -> String {
        match &self.query {
            Some(q) => format!("{}?{}", self.path, q),
            None => self.path.clone(),
        }
    }

    fn from_parsed(parsed: Url) -> Self {
        Self {
            scheme: parsed.scheme().to_string(),
            hostname: parsed.host_str().unwrap_or_default().to_string(),
            port: parsed.port(),
            path: parsed.path().to_string(),
            query: parsed.query().map(str::to_string),
            full: parsed.to_string(),
        }
    }
}

/// Normalizes raw user input into a [`NormalizedUrl`].
///
/// # Examples
///
/// - `normalize("example.com")` → `full == "http://example.com/"`
/// - `normalize("HTTPS://Example.COM/a")` → `full == "https://example.com/a"`
/// - `normalize("   ")` → `Err(EvaluateError::InvalidUrl { .. })`
pub fn normalize(raw: &str) -> Result<NormalizedUrl, EvaluateError> {
    let trimmed = raw.trim();
    if trimmed.is_empty() {
        return Err(EvaluateError::invalid(raw, "input is empty"));
    }

    let candidate = if has_scheme_prefix(trimmed) {
        trimmed.to_string()
    } else {
        format!("{DEFAULT_SCHEME_PREFIX}{trimmed}")
    };

    let parsed = Url::parse(&candidate).map_err(|e| EvaluateError::invalid(raw, e.to_string()))?;
    Ok(NormalizedUrl::from_parsed(parsed))
}
