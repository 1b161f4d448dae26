//! CLI for the urlrisk URL risk scorer.

mod commands;

use anyhow::Result;
use clap::{Parser, Subcommand};
use clap_complete::Shell;
use std::path::PathBuf;
use urlrisk_core::config::{self, UrlRiskConfig};

use commands::{run_check, run_checks, run_completions, run_config, CheckOptions};

/// Top-level CLI for urlrisk.
#[derive(Debug, Parser)]
#[command(name = "urlrisk")]
#[command(about = "urlrisk: explainable heuristic risk scoring for links", long_about = None)]
pub struct Cli {
    /// Use this config file instead of ~/.config/urlrisk/config.toml.
    #[arg(long, global = true, value_name = "PATH")]
    pub config: Option<PathBuf>,

    #[command(subcommand)]
    pub command: CliCommand,
}

#[derive(Debug, Subcommand)]
pub enum CliCommand {
    /// Evaluate one or more URLs and print an itemized verdict.
    Check {
        /// URLs to evaluate; a missing scheme is treated as http://.
        #[arg(required = true, num_args = 1..)]
        urls: Vec<String>,

        /// Print results as a JSON array instead of a report.
        #[arg(long)]
        json: bool,

        /// Override the DNS lookup timeout from the config.
        #[arg(long, value_name = "MS")]
        dns_timeout_ms: Option<u64>,
    },

    /// List the registered checks in evaluation order.
    Checks,

    /// Show the config file location and the effective configuration.
    Config,

    /// Print shell completions to stdout.
    Completions {
        /// Target shell.
        shell: Shell,
    },
}

fn load_config(path: Option<&PathBuf>) -> Result<UrlRiskConfig> {
    let cfg = match path {
        Some(p) => config::load_from(p)?,
        None => config::load_or_init()?,
    };
    tracing::debug!("loaded config: {:?}", cfg);
    Ok(cfg)
}

impl CliCommand {
    pub async fn run_from_args() -> Result<()> {
        let cli = Cli::parse();

        if let CliCommand::Completions { shell } = cli.command {
            return run_completions(shell);
        }

        let cfg = load_config(cli.config.as_ref())?;

        match cli.command {
            CliCommand::Check {
                urls,
                json,
                dns_timeout_ms,
            } => {
                let opts = CheckOptions {
                    json,
                    dns_timeout_ms,
                };
                run_check(&cfg, &urls, &opts).await?
            }
            CliCommand::Checks => run_checks(&cfg)?,
            CliCommand::Config => run_config(cli.config.as_deref(), &cfg)?,
            CliCommand::Completions { .. } => {}
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests;
