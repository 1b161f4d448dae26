//! `urlrisk config` – show where the config lives and what is in effect.

use anyhow::Result;
use std::path::Path;
use urlrisk_core::config::{self, UrlRiskConfig};

pub fn run_config(explicit: Option<&Path>, cfg: &UrlRiskConfig) -> Result<()> {
    let path = match explicit {
        Some(p) => p.to_path_buf(),
        None => config::config_path()?,
    };
    println!("# {}", path.display());
    print!("{}", cfg.to_toml_string()?);
    Ok(())
}
