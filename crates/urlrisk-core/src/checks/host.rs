//! Hostname-shape checks.

use super::{CheckId, CheckResult, Heuristics};
use crate::url_model::NormalizedUrl;

/// Four dot-separated runs of ASCII digits. Octet range is not checked.
fn is_dotted_quad(host: &str) -> bool {
    let parts: Vec<&str> = host.split('.').collect();
    parts.len() == 4
        && parts
            .iter()
            .all(|p| !p.is_empty() && p.bytes().all(|b| b.is_ascii_digit()))
}

fn is_ip_literal(host: &str) -> bool {
    is_dotted_quad(host) || host.contains(':')
}

pub fn ip_hostname(url: &NormalizedUrl) -> CheckResult {
    if is_ip_literal(&url.hostname) {
        CheckResult::fail(
            CheckId::IpHostname,
            "Hostname is an IP address; often used by malicious services.",
        )
    } else {
        CheckResult::pass(CheckId::IpHostname, "Hostname is a domain name.")
    }
}

pub fn punycode(url: &NormalizedUrl) -> CheckResult {
    if url.hostname.contains("xn--") {
        CheckResult::fail(
            CheckId::Punycode,
            "Punycode (IDN) detected; may be used in homograph attacks.",
        )
    } else {
        CheckResult::pass(CheckId::Punycode, "No punycode labels in hostname.")
    }
}

pub fn shortener(url: &NormalizedUrl, h: &Heuristics) -> CheckResult {
    let host = url.hostname.to_ascii_lowercase();
    let hit = h
        .shorteners
        .iter()
        .find(|s| host.ends_with(&s.to_ascii_lowercase()));
    match hit {
        Some(s) => CheckResult::fail(
            CheckId::Shortener,
            format!("URL uses a known shortener ({s}); redirect hides final destination."),
        ),
        None => CheckResult::pass(CheckId::Shortener, "Not a known URL shortener."),
    }
}

/// IP literals have no labels to count and are handled by [`ip_hostname`].
pub fn subdomain_depth(url: &NormalizedUrl, h: &Heuristics) -> CheckResult {
    if is_ip_literal(&url.hostname) {
        return CheckResult::pass(
            CheckId::SubdomainDepth,
            "Hostname is an IP literal; no subdomains.",
        );
    }
    let parts = url.hostname.split('.').count();
    if parts >= h.min_subdomain_parts {
        CheckResult::fail(
            CheckId::SubdomainDepth,
            format!(
                "Deep subdomain ({parts} parts); sometimes used to mimic legitimate domains."
            ),
        )
    } else {
        CheckResult::pass(
            CheckId::SubdomainDepth,
            format!("Hostname has {parts} parts."),
        )
    }
}

pub fn multiple_hyphens(url: &NormalizedUrl, h: &Heuristics) -> CheckResult {
    let hyphens = url.hostname.matches('-').count();
    if hyphens >= h.min_hyphens {
        CheckResult::fail(
            CheckId::MultipleHyphens,
            format!(
                "Multiple hyphens ({hyphens}) in hostname can indicate suspicious domain-generation."
            ),
        )
    } else {
        CheckResult::pass(
            CheckId::MultipleHyphens,
            format!("Hostname has {hyphens} hyphens."),
        )
    }
}

pub fn risky_tld(url: &NormalizedUrl, h: &Heuristics) -> CheckResult {
    let host = url.hostname.to_ascii_lowercase();
    match h
        .risky_tlds
        .iter()
        .find(|tld| host.ends_with(&tld.to_ascii_lowercase()))
    {
        Some(tld) => CheckResult::fail(
            CheckId::RiskyTld,
            format!(
                "Top-level domain {tld} is sometimes associated with low-cost or abusive registrations."
            ),
        ),
        None => CheckResult::pass(CheckId::RiskyTld, "Top-level domain is not on the risky list."),
    }
}
