//! Runs the registry against one URL and totals the score.

use crate::checks::dns::{self, HostResolver, LookupFailure};
use crate::checks::{CheckId, CheckRegistry, CheckResult};
use crate::url_model::NormalizedUrl;
use std::net::IpAddr;
use std::time::Duration;

/// Checks in registry order plus the summed cost of the failed ones.
#[derive(Debug, Clone)]
pub struct Scored {
    pub score: u32,
    pub checks: Vec<CheckResult>,
    /// Outcome of the DNS lookup, kept for the result's `details`.
    pub lookup: Result<IpAddr, LookupFailure>,
}

/// Evaluates every registered check. Never short-circuits.
///
/// The pure checks and the DNS lookup are driven concurrently; results are
/// slotted back into registry order before returning.
pub async fn aggregate(
    url: &NormalizedUrl,
    registry: &CheckRegistry,
    resolver: &dyn HostResolver,
    dns_timeout: Duration,
) -> Scored {
    let ids = registry.ids();

    let pure = async {
        ids.iter()
            .map(|&id| registry.run_pure(id, url))
            .collect::<Vec<Option<CheckResult>>>()
    };
    let (slots, lookup) = tokio::join!(pure, dns::resolve(resolver, &url.hostname, dns_timeout));

    if let Err(ref failure) = lookup {
        tracing::warn!(host = %url.hostname, %failure, "dns check failed");
    }

    let mut checks = Vec::with_capacity(ids.len());
    let mut score = 0u32;
    for (&id, slot) in ids.iter().zip(slots) {
        debug_assert!(slot.is_some() || id == CheckId::DnsResolution);
        let result = slot.unwrap_or_else(|| dns::check_result(&lookup));
        tracing::debug!(
            check = %result.name,
            passed = result.passed,
            weight = result.weight,
            "check evaluated"
        );
        score = score.saturating_add(result.cost());
        checks.push(result);
    }

    Scored {
        score,
        checks,
        lookup,
    }
}
