//! `urlrisk checks` – list the registry.

use anyhow::Result;
use urlrisk_core::config::UrlRiskConfig;
use urlrisk_core::{CheckId, CheckKind};

pub fn run_checks(cfg: &UrlRiskConfig) -> Result<()> {
    println!("{:<3} {:<20} {:<7} {:<8} {}", "#", "ID", "WEIGHT", "KIND", "TITLE");
    for (i, id) in CheckId::ALL.iter().enumerate() {
        let kind = match id.kind() {
            CheckKind::Pure => "pure",
            CheckKind::IoBound => "io-bound",
        };
        println!(
            "{:<3} {:<20} {:<7} {:<8} {}",
            i + 1,
            id.as_str(),
            id.weight(),
            kind,
            id.title(false)
        );
    }
    println!();
    println!(
        "Verdict: Suspicious at score >= {}, Danger at score >= {}; DNS timeout {} ms.",
        cfg.thresholds.suspicious, cfg.thresholds.danger, cfg.dns_timeout_ms
    );
    Ok(())
}
