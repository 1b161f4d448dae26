//! Heuristic check registry.
//!
//! Each check looks at a [`NormalizedUrl`] and produces exactly one
//! [`CheckResult`]. All checks except DNS resolution are pure string
//! inspections; the DNS check lives in [`dns`] and is driven by the
//! aggregator because it needs a resolver and a timeout.
//!
//! The order of [`CheckId::ALL`] is the order of `checks` in every
//! evaluation result.

pub mod dns;
mod heuristics;
mod host;
mod payload;
mod transport;

pub use heuristics::Heuristics;

use crate::url_model::NormalizedUrl;
use serde::Serialize;

/// Stable identifier of a registered check.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum CheckId {
    Https,
    IpHostname,
    Punycode,
    UrlLength,
    AtSymbol,
    Shortener,
    SuspiciousKeywords,
    EncodedPayload,
    SubdomainDepth,
    MultipleHyphens,
    RiskyTld,
    NonstandardPort,
    DnsResolution,
}

/// Whether a check can be evaluated from the URL alone.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "kebab-case")]
pub enum CheckKind {
    Pure,
    IoBound,
}

impl CheckId {
    /// Registry order.
    pub const ALL: [CheckId; 13] = [
        CheckId::Https,
        CheckId::IpHostname,
        CheckId::Punycode,
        CheckId::UrlLength,
        CheckId::AtSymbol,
        CheckId::Shortener,
        CheckId::SuspiciousKeywords,
        CheckId::EncodedPayload,
        CheckId::SubdomainDepth,
        CheckId::MultipleHyphens,
        CheckId::RiskyTld,
        CheckId::NonstandardPort,
        CheckId::DnsResolution,
    ];

    pub fn as_str(self) -> &'static str {
        match self {
            CheckId::Https => "https",
            CheckId::IpHostname => "ip_hostname",
            CheckId::Punycode => "punycode",
            CheckId::UrlLength => "url_length",
            CheckId::AtSymbol => "at_symbol",
            CheckId::Shortener => "shortener",
            CheckId::SuspiciousKeywords => "suspicious_keywords",
            CheckId::EncodedPayload => "encoded_payload",
            CheckId::SubdomainDepth => "subdomain_depth",
            CheckId::MultipleHyphens => "multiple_hyphens",
            CheckId::RiskyTld => "risky_tld",
            CheckId::NonstandardPort => "nonstandard_port",
            CheckId::DnsResolution => "dns_resolution",
        }
    }

    /// Score added when this check fails. Always at least 1.
    pub fn weight(self) -> u32 {
        match self {
            CheckId::IpHostname | CheckId::Shortener | CheckId::DnsResolution => 3,
            CheckId::SubdomainDepth | CheckId::MultipleHyphens | CheckId::NonstandardPort => 1,
            CheckId::Https
            | CheckId::Punycode
            | CheckId::UrlLength
            | CheckId::AtSymbol
            | CheckId::SuspiciousKeywords
            | CheckId::EncodedPayload
            | CheckId::RiskyTld => 2,
        }
    }

    /// Weight reported on a passing result.
    ///
    /// The HTTPS, hostname-format and DNS rows are informational when they
    /// pass and report 0; the rest report their failure weight. Passing checks
    /// never contribute to the score either way.
    pub fn pass_weight(self) -> u32 {
        match self {
            CheckId::Https | CheckId::IpHostname | CheckId::DnsResolution => 0,
            other => other.weight(),
        }
    }

    pub fn kind(self) -> CheckKind {
        match self {
            CheckId::DnsResolution => CheckKind::IoBound,
            _ => CheckKind::Pure,
        }
    }

    /// Human label for the given outcome.
    pub fn title(self, passed: bool) -> &'static str {
        match (self, passed) {
            (CheckId::Https, true) => "Has HTTPS",
            (CheckId::Https, false) => "Missing HTTPS",
            (CheckId::IpHostname, true) => "Hostname format",
            (CheckId::IpHostname, false) => "IP as hostname",
            (CheckId::Punycode, _) => "Punycode / IDN",
            (CheckId::UrlLength, _) => "URL length",
            (CheckId::AtSymbol, _) => "At symbol",
            (CheckId::Shortener, _) => "Known shortener",
            (CheckId::SuspiciousKeywords, _) => "Suspicious keywords",
            (CheckId::EncodedPayload, _) => "Encoded payloads",
            (CheckId::SubdomainDepth, _) => "Subdomain depth",
            (CheckId::MultipleHyphens, _) => "Multiple hyphens",
            (CheckId::RiskyTld, _) => "Risky TLD",
            (CheckId::NonstandardPort, _) => "Nonstandard port",
            (CheckId::DnsResolution, true) => "DNS resolution",
            (CheckId::DnsResolution, false) => "DNS resolution failed",
        }
    }
}

impl std::fmt::Display for CheckId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Outcome of one check.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CheckResult {
    pub name: CheckId,
    pub title: &'static str,
    pub weight: u32,
    pub passed: bool,
    pub message: String,
}

impl CheckResult {
    pub fn pass(id: CheckId, message: impl Into<String>) -> Self {
        Self {
            name: id,
            title: id.title(true),
            weight: id.pass_weight(),
            passed: true,
            message: message.into(),
        }
    }

    pub fn fail(id: CheckId, message: impl Into<String>) -> Self {
        Self {
            name: id,
            title: id.title(false),
            weight: id.weight(),
            passed: false,
            message: message.into(),
        }
    }

    /// Contribution to the total score.
    pub fn cost(&self) -> u32 {
        if self.passed {
            0
        } else {
            self.weight
        }
    }
}

/// The pure checks plus the lists and limits they consult.
#[derive(Debug, Clone, Default)]
pub struct CheckRegistry {
    heuristics: Heuristics,
}

impl CheckRegistry {
    pub fn new(heuristics: Heuristics) -> Self {
        Self { heuristics }
    }

    pub fn heuristics(&self) -> &Heuristics {
        &self.heuristics
    }

    /// Registered checks in output order.
    pub fn ids(&self) -> &'static [CheckId] {
        &CheckId::ALL
    }

    pub fn len(&self) -> usize {
        CheckId::ALL.len()
    }

    pub fn is_empty(&self) -> bool {
        false
    }

    /// Evaluates a pure check. Returns `None` for io-bound checks, which the
    /// aggregator runs separately.
    pub fn run_pure(&self, id: CheckId, url: &NormalizedUrl) -> Option<CheckResult> {
        let h = &self.heuristics;
        let result = match id {
            CheckId::Https => transport::https(url),
            CheckId::IpHostname => host::ip_hostname(url),
            CheckId::Punycode => host::punycode(url),
            CheckId::UrlLength => payload::url_length(url, h),
            CheckId::AtSymbol => payload::at_symbol(url),
            CheckId::Shortener => host::shortener(url, h),
            CheckId::SuspiciousKeywords => payload::suspicious_keywords(url, h),
            CheckId::EncodedPayload => payload::encoded_payload(url),
            CheckId::SubdomainDepth => host::subdomain_depth(url, h),
            CheckId::MultipleHyphens => host::multiple_hyphens(url, h),
            CheckId::RiskyTld => host::risky_tld(url, h),
            CheckId::NonstandardPort => transport::nonstandard_port(url, h),
            CheckId::DnsResolution => return None,
        };
        Some(result)
    }
}
