use crate::checks::Heuristics;
use crate::verdict::Thresholds;
use anyhow::{bail, Context, Result};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};
use std::time::Duration;

/// Global configuration loaded from `~/.config/urlrisk/config.toml`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct UrlRiskConfig {
    /// Upper bound on the DNS lookup, in milliseconds.
    pub dns_timeout_ms: u64,
    /// Score thresholds for the Suspicious and Danger tiers.
    #[serde(default)]
    pub thresholds: Thresholds,
    /// Lists and limits used by the pure checks.
    #[serde(default)]
    pub heuristics: Heuristics,
}

impl Default for UrlRiskConfig {
    fn default() -> Self {
        Self {
            dns_timeout_ms: 3_000,
            thresholds: Thresholds::default(),
            heuristics: Heuristics::default(),
        }
    }
}

impl UrlRiskConfig {
    pub fn dns_timeout(&self) -> Duration {
        Duration::from_millis(self.dns_timeout_ms)
    }

    pub fn to_toml_string(&self) -> Result<String> {
        Ok(toml::to_string_pretty(self)?)
    }

    /// Rejects settings the classifier and checks cannot work with.
    pub fn validate(&self) -> Result<()> {
        if self.dns_timeout_ms == 0 {
            bail!("dns_timeout_ms must be greater than 0");
        }
        if self.thresholds.suspicious == 0 {
            bail!("thresholds.suspicious must be at least 1");
        }
        if self.thresholds.danger <= self.thresholds.suspicious {
            bail!(
                "thresholds.danger ({}) must be greater than thresholds.suspicious ({})",
                self.thresholds.danger,
                self.thresholds.suspicious
            );
        }
        Ok(())
    }
}

pub fn config_path() -> Result<PathBuf> {
    let xdg_dirs = xdg::BaseDirectories::with_prefix("urlrisk")?;
    Ok(xdg_dirs.place_config_file("config.toml")?)
}

/// Load and validate configuration from an explicit file.
pub fn load_from(path: &Path) -> Result<UrlRiskConfig> {
    let data =
        fs::read_to_string(path).with_context(|| format!("read config {}", path.display()))?;
    let cfg: UrlRiskConfig =
        toml::from_str(&data).with_context(|| format!("parse config {}", path.display()))?;
    cfg.validate()
        .with_context(|| format!("invalid config {}", path.display()))?;
    Ok(cfg)
}

/// Write the default configuration to `path` (creating parent dirs) and return it.
pub fn write_default(path: &Path) -> Result<UrlRiskConfig> {
    let default_cfg = UrlRiskConfig::default();
    let toml = default_cfg.to_toml_string()?;
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent)?;
    }
    fs::write(path, toml).with_context(|| format!("write config {}", path.display()))?;
    tracing::info!("created default config at {}", path.display());
    Ok(default_cfg)
}

/// Load configuration from disk, creating a default file if none exists.
pub fn load_or_init() -> Result<UrlRiskConfig> {
    let path = config_path()?;
    if !path.exists() {
        return write_default(&path);
    }
    load_from(&path)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_config_values() {
        let cfg = UrlRiskConfig::default();
        assert_eq!(cfg.dns_timeout_ms, 3_000);
        assert_eq!(cfg.thresholds.suspicious, 3);
        assert_eq!(cfg.thresholds.danger, 6);
        assert_eq!(cfg.heuristics.max_url_length, 200);
        assert!(cfg.validate().is_ok());
    }

    #[test]
    fn config_toml_roundtrip() {
        let cfg = UrlRiskConfig::default();
        let toml = toml::to_string_pretty(&cfg).unwrap();
        let parsed: UrlRiskConfig = toml::from_str(&toml).unwrap();
        assert_eq!(parsed, cfg);
    }

    #[test]
    fn config_toml_minimal() {
        let cfg: UrlRiskConfig = toml::from_str("dns_timeout_ms = 500").unwrap();
        assert_eq!(cfg.dns_timeout(), Duration::from_millis(500));
        assert_eq!(cfg.thresholds, Thresholds::default());
        assert_eq!(cfg.heuristics, Heuristics::default());
    }

    #[test]
    fn config_toml_custom_sections() {
        let toml = r#"
            dns_timeout_ms = 1500

            [thresholds]
            suspicious = 4

            [heuristics]
            shorteners = ["lnk.example"]
            suspicious_keywords = ["wallet", "seed"]
            allowed_ports = [80, 443, 8443]
        "#;
        let cfg: UrlRiskConfig = toml::from_str(toml).unwrap();
        assert_eq!(cfg.thresholds.suspicious, 4);
        assert_eq!(cfg.thresholds.danger, 6);
        assert_eq!(cfg.heuristics.shorteners, vec!["lnk.example".to_string()]);
        assert_eq!(cfg.heuristics.allowed_ports, vec![80, 443, 8443]);
        assert_eq!(cfg.heuristics.risky_tlds.len(), 10);
    }

    #[test]
    fn validate_rejects_inverted_thresholds() {
        let mut cfg = UrlRiskConfig::default();
        cfg.thresholds = Thresholds {
            suspicious: 6,
            danger: 6,
        };
        assert!(cfg.validate().is_err());
        cfg.thresholds = Thresholds {
            suspicious: 0,
            danger: 6,
        };
        assert!(cfg.validate().is_err());
    }

    #[test]
    fn validate_rejects_zero_timeout() {
        let cfg = UrlRiskConfig {
            dns_timeout_ms: 0,
            ..UrlRiskConfig::default()
        };
        assert!(cfg.validate().is_err());
    }

    #[test]
    fn write_default_then_load_from() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("nested").join("config.toml");
        let written = write_default(&path).unwrap();
        let loaded = load_from(&path).unwrap();
        assert_eq!(written, loaded);
    }

    #[test]
    fn load_from_reports_invalid_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("config.toml");
        fs::write(&path, "dns_timeout_ms = 100\n[thresholds]\ndanger = 2\n").unwrap();
        let err = load_from(&path).unwrap_err();
        assert!(format!("{err:#}").contains("thresholds.danger"));
    }
}
