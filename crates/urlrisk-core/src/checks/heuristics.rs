use serde::{Deserialize, Serialize};

/// Lists and limits the pure checks consult.
///
/// Loaded from the `[heuristics]` section of `config.toml`; any key left out
/// keeps its built-in default.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Heuristics {
    /// Hostname suffixes of link shorteners (matched case-insensitively).
    pub shorteners: Vec<String>,
    /// TLD suffixes, including the leading dot. First match wins.
    pub risky_tlds: Vec<String>,
    /// Substrings looked for in the lower-cased path and query.
    pub suspicious_keywords: Vec<String>,
    /// URLs longer than this many characters are flagged.
    pub max_url_length: usize,
    /// Hostnames with at least this many dot-separated labels are flagged.
    pub min_subdomain_parts: usize,
    /// Hostnames with at least this many hyphens are flagged.
    pub min_hyphens: usize,
    /// Explicit ports that are not flagged.
    pub allowed_ports: Vec<u16>,
}

fn strings(items: &[&str]) -> Vec<String> {
    items.iter().map(|s| s.to_string()).collect()
}

impl Default for Heuristics {
    fn default() -> Self {
        Self {
            shorteners: strings(&[
                "bit.ly",
                "t.co",
                "tinyurl.com",
                "goo.gl",
                "ow.ly",
                "is.gd",
                "buff.ly",
                "adf.ly",
                "rb.gy",
            ]),
            risky_tlds: strings(&[
                ".xyz",
                ".top",
                ".icu",
                ".men",
                ".click",
                ".work",
                ".trade",
                ".download",
                ".party",
                ".stream",
            ]),
            suspicious_keywords: strings(&[
                "login", "secure", "account", "update", "verify", "confirm", "password", "bank",
                "signin",
            ]),
            max_url_length: 200,
            min_subdomain_parts: 4,
            min_hyphens: 3,
            allowed_ports: vec![80, 443],
        }
    }
}
