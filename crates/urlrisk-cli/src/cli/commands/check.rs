//! `urlrisk check <url>...` – evaluate URLs and print the verdicts.

use anyhow::{bail, Result};
use std::fmt::Write as _;
use std::time::Duration;
use urlrisk_core::config::UrlRiskConfig;
use urlrisk_core::engine::{DETAIL_DNS_ERROR, DETAIL_RESOLVED};
use urlrisk_core::{Engine, EvaluateError, EvaluationResult};

#[derive(Debug, Clone, Default)]
pub struct CheckOptions {
    pub json: bool,
    pub dns_timeout_ms: Option<u64>,
}

/// Human-readable, itemized report for one result.
pub(crate) fn render_report(result: &EvaluationResult) -> String {
    let mut out = String::new();
    let _ = writeln!(out, "URL:        {}", result.input);
    let _ = writeln!(out, "Normalized: {}", result.normalized);
    let _ = writeln!(out, "Verdict:    {} (score {})", result.verdict, result.score);
    for check in &result.checks {
        let mark = if check.passed { "ok  " } else { "FAIL" };
        let cost = if check.passed {
            "  ".to_string()
        } else {
            format!("+{}", check.weight)
        };
        let _ = writeln!(
            out,
            "  [{mark}] {cost} {:<22} {}",
            check.title, check.message
        );
    }
    if let Some(addr) = result.details.get(DETAIL_RESOLVED) {
        let _ = writeln!(out, "Resolved:   {addr}");
    } else if let Some(err) = result.details.get(DETAIL_DNS_ERROR) {
        let _ = writeln!(out, "DNS error:  {err}");
    }
    out
}

fn json_entry(raw: &str, outcome: &Result<EvaluationResult, EvaluateError>) -> serde_json::Value {
    match outcome {
        Ok(result) => serde_json::to_value(result).unwrap_or_else(|e| {
            serde_json::json!({ "input": raw, "error": format!("serialize result: {e}") })
        }),
        Err(_) => serde_json::json!({ "input": raw, "error": "Invalid URL" }),
    }
}

pub async fn run_check(cfg: &UrlRiskConfig, urls: &[String], opts: &CheckOptions) -> Result<()> {
    let mut engine = Engine::from_config(cfg);
    if let Some(ms) = opts.dns_timeout_ms {
        engine = engine.with_dns_timeout(Duration::from_millis(ms));
    }

    let mut invalid = 0usize;
    let mut entries = Vec::with_capacity(urls.len());
    for (i, raw) in urls.iter().enumerate() {
        let outcome = engine.evaluate(raw).await;
        if let Err(ref e) = outcome {
            tracing::info!(input = %raw, error = %e, "rejected input");
            invalid += 1;
        }

        if opts.json {
            entries.push(json_entry(raw, &outcome));
            continue;
        }
        if i > 0 {
            println!();
        }
        match outcome {
            Ok(result) => print!("{}", render_report(&result)),
            Err(_) => println!("URL:        {raw}\nerror: Invalid URL"),
        }
    }

    if opts.json {
        println!("{}", serde_json::to_string_pretty(&entries)?);
    }

    if invalid > 0 {
        bail!("{invalid} of {} inputs were not valid URLs", urls.len());
    }
    Ok(())
}
