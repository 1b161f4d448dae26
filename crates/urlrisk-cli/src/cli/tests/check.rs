//! Tests for the check subcommand.

use super::parse;
use crate::cli::{Cli, CliCommand};
use clap::Parser;

#[test]
fn cli_parse_check_single() {
    match parse(&["urlrisk", "check", "example.com"]) {
        CliCommand::Check {
            urls,
            json,
            dns_timeout_ms,
        } => {
            assert_eq!(urls, vec!["example.com".to_string()]);
            assert!(!json);
            assert!(dns_timeout_ms.is_none());
        }
        _ => panic!("expected Check"),
    }
}

#[test]
fn cli_parse_check_many_with_flags() {
    match parse(&[
        "urlrisk",
        "check",
        "https://bit.ly/abc",
        "http://192.168.1.1/login",
        "--json",
        "--dns-timeout-ms",
        "250",
    ]) {
        CliCommand::Check {
            urls,
            json,
            dns_timeout_ms,
        } => {
            assert_eq!(urls.len(), 2);
            assert_eq!(urls[1], "http://192.168.1.1/login");
            assert!(json);
            assert_eq!(dns_timeout_ms, Some(250));
        }
        _ => panic!("expected Check with flags"),
    }
}

#[test]
fn cli_parse_check_requires_url() {
    assert!(Cli::try_parse_from(["urlrisk", "check"]).is_err());
}

#[test]
fn cli_parse_global_config_flag() {
    let cli = Cli::try_parse_from(["urlrisk", "check", "x.example", "--config", "/tmp/u.toml"])
        .unwrap();
    assert_eq!(
        cli.config.as_deref(),
        Some(std::path::Path::new("/tmp/u.toml"))
    );
}
