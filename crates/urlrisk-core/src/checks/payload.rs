//! Checks over the full URL string and its path/query.

use super::{CheckId, CheckResult, Heuristics};
use crate::url_model::NormalizedUrl;

pub fn url_length(url: &NormalizedUrl, h: &Heuristics) -> CheckResult {
    let len = url.full.chars().count();
    if len > h.max_url_length {
        CheckResult::fail(
            CheckId::UrlLength,
            format!("Very long URL ({len} chars); often used to hide payloads."),
        )
    } else {
        CheckResult::pass(CheckId::UrlLength, format!("URL length is {len} chars."))
    }
}

pub fn at_symbol(url: &NormalizedUrl) -> CheckResult {
    if url.full.contains('@') {
        CheckResult::fail(
            CheckId::AtSymbol,
            "Contains \"@\" which can be used to obfuscate real target.",
        )
    } else {
        CheckResult::pass(CheckId::AtSymbol, "No \"@\" in URL.")
    }
}

pub fn suspicious_keywords(url: &NormalizedUrl, h: &Heuristics) -> CheckResult {
    let haystack = url.path_and_query().to_lowercase();
    let found: Vec<&str> = h
        .suspicious_keywords
        .iter()
        .map(String::as_str)
        .filter(|k| haystack.contains(&k.to_lowercase()))
        .collect();

    if found.is_empty() {
        CheckResult::pass(
            CheckId::SuspiciousKeywords,
            "No suspicious keywords in path or query.",
        )
    } else {
        CheckResult::fail(
            CheckId::SuspiciousKeywords,
            format!("Found suspicious keywords: {}", found.join(", ")),
        )
    }
}

/// `%` followed by two hex digits anywhere in `s`.
fn has_percent_escape(s: &str) -> bool {
    s.as_bytes()
        .windows(3)
        .any(|w| w[0] == b'%' && w[1].is_ascii_hexdigit() && w[2].is_ascii_hexdigit())
}

pub fn encoded_payload(url: &NormalizedUrl) -> CheckResult {
    let full = &url.full;
    if has_percent_escape(full) || full.contains("\\x") || full.contains("eval(") {
        CheckResult::fail(
            CheckId::EncodedPayload,
            "URL contains encoded characters or suspicious patterns.",
        )
    } else {
        CheckResult::pass(
            CheckId::EncodedPayload,
            "No encoded or obfuscated sequences found.",
        )
    }
}
