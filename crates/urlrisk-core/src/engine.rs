//! Evaluation entry point.
//!
//! [`Engine::evaluate`] is the one operation callers use: normalize, run the
//! registry, classify, and assemble an [`EvaluationResult`]. An engine holds
//! only immutable configuration, so one instance can serve concurrent
//! evaluations.

use crate::checks::dns::{HostResolver, SystemResolver, DEFAULT_DNS_TIMEOUT};
use crate::checks::{CheckRegistry, CheckResult, Heuristics};
use crate::config::UrlRiskConfig;
use crate::error::EvaluateError;
use crate::score::aggregate;
use crate::url_model::normalize;
use crate::verdict::{Thresholds, Verdict};
use serde::Serialize;
use std::collections::BTreeMap;
use std::sync::Arc;
use std::time::Duration;

/// Key in [`EvaluationResult::details`] holding the resolved address.
pub const DETAIL_RESOLVED: &str = "resolved";
/// Key in [`EvaluationResult::details`] describing a failed lookup.
pub const DETAIL_DNS_ERROR: &str = "dns_error";

/// Full, itemized outcome of one evaluation.
#[derive(Debug, Clone, Serialize)]
pub struct EvaluationResult {
    /// Raw input as given by the caller.
    pub input: String,
    /// Canonical URL string.
    pub normalized: String,
    pub hostname: String,
    pub scheme: String,
    pub score: u32,
    /// One entry per registered check, in registry order.
    pub checks: Vec<CheckResult>,
    pub verdict: Verdict,
    pub details: BTreeMap<String, String>,
}

impl EvaluationResult {
    pub fn failed_checks(&self) -> impl Iterator<Item = &CheckResult> {
        self.checks.iter().filter(|c| !c.passed)
    }
}

/// URL risk scoring engine.
#[derive(Clone)]
pub struct Engine {
    registry: CheckRegistry,
    thresholds: Thresholds,
    resolver: Arc<dyn HostResolver>,
    dns_timeout: Duration,
}

impl std::fmt::Debug for Engine {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Engine")
            .field("registry", &self.registry)
            .field("thresholds", &self.thresholds)
            .field("dns_timeout", &self.dns_timeout)
            .finish_non_exhaustive()
    }
}

impl Default for Engine {
    fn default() -> Self {
        Self::new(Heuristics::default(), Thresholds::default())
    }
}

impl Engine {
    /// Engine using the system resolver and the default DNS timeout.
    pub fn new(heuristics: Heuristics, thresholds: Thresholds) -> Self {
        Self {
            registry: CheckRegistry::new(heuristics),
            thresholds,
            resolver: Arc::new(SystemResolver),
            dns_timeout: DEFAULT_DNS_TIMEOUT,
        }
    }

    pub fn from_config(cfg: &UrlRiskConfig) -> Self {
        Self::new(cfg.heuristics.clone(), cfg.thresholds).with_dns_timeout(cfg.dns_timeout())
    }

    pub fn with_resolver(mut self, resolver: Arc<dyn HostResolver>) -> Self {
        self.resolver = resolver;
        self
    }

    pub fn with_dns_timeout(mut self, timeout: Duration) -> Self {
        self.dns_timeout = timeout;
        self
    }

    pub fn registry(&self) -> &CheckRegistry {
        &self.registry
    }

    pub fn thresholds(&self) -> Thresholds {
        self.thresholds
    }

    pub fn dns_timeout(&self) -> Duration {
        self.dns_timeout
    }

    /// Evaluates `raw` and returns the itemized verdict.
    ///
    /// Fails only when `raw` cannot be normalized into a URL; in that case no
    /// check runs.
    pub async fn evaluate(&self, raw: &str) -> Result<EvaluationResult, EvaluateError> {
        let url = normalize(raw)?;
        let scored = aggregate(
            &url,
            &self.registry,
            self.resolver.as_ref(),
            self.dns_timeout,
        )
        .await;
        let verdict = self.thresholds.classify(scored.score);

        let mut details = BTreeMap::new();
        match &scored.lookup {
            Ok(addr) => {
                details.insert(DETAIL_RESOLVED.to_string(), addr.to_string());
            }
            Err(failure) => {
                details.insert(DETAIL_DNS_ERROR.to_string(), failure.to_string());
            }
        }

        tracing::info!(
            url = %url.full,
            score = scored.score,
            %verdict,
            "evaluated url"
        );

        Ok(EvaluationResult {
            input: raw.to_string(),
            normalized: url.full,
            hostname: url.hostname,
            scheme: url.scheme,
            score: scored.score,
            checks: scored.checks,
            verdict,
            details,
        })
    }
}
