//! Tests for checks, config and completions subcommands.

use super::parse;
use crate::cli::CliCommand;
use clap_complete::Shell;

#[test]
fn cli_parse_checks() {
    match parse(&["urlrisk", "checks"]) {
        CliCommand::Checks => {}
        _ => panic!("expected Checks"),
    }
}

#[test]
fn cli_parse_config() {
    match parse(&["urlrisk", "config"]) {
        CliCommand::Config => {}
        _ => panic!("expected Config"),
    }
}

#[test]
fn cli_parse_completions() {
    match parse(&["urlrisk", "completions", "bash"]) {
        CliCommand::Completions { shell } => assert_eq!(shell, Shell::Bash),
        _ => panic!("expected Completions"),
    }
}

#[test]
fn cli_definition_is_consistent() {
    use clap::CommandFactory;
    crate::cli::Cli::command().debug_assert();
}
