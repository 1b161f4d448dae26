//! Scheme and port checks.

use super::{CheckId, CheckResult, Heuristics};
use crate::url_model::NormalizedUrl;

pub fn https(url: &NormalizedUrl) -> CheckResult {
    if url.scheme == "https" {
        CheckResult::pass(CheckId::Https, "Secure protocol (HTTPS).")
    } else {
        CheckResult::fail(
            CheckId::Https,
            "URL does not use HTTPS; not encrypted in transit.",
        )
    }
}

pub fn nonstandard_port(url: &NormalizedUrl, h: &Heuristics) -> CheckResult {
    match url.port {
        Some(port) if !h.allowed_ports.contains(&port) => CheckResult::fail(
            CheckId::NonstandardPort,
            format!("Uses nonstandard port {port}; unusual for public websites."),
        ),
        Some(port) => CheckResult::pass(
            CheckId::NonstandardPort,
            format!("Explicit port {port} is a standard web port."),
        ),
        None => CheckResult::pass(CheckId::NonstandardPort, "Default port for the scheme."),
    }
}
