//! Integration tests for CLI argument handling
//!
//! These only exercise paths that fail or exit before any network request.

use std::process::Command;

/// Helper to run the CLI with given args and capture output
fn run_cli(args: &[&str]) -> std::process::Output {
    Command::new(env!("CARGO_BIN_EXE_fluidsurveys"))
        .args(args)
        .env_remove("FLUIDSURVEYS_KEY")
        .env_remove("FLUIDSURVEYS_SECRET")
        .output()
        .expect("Failed to execute fluidsurveys")
}

#[test]
fn test_help_flag_exits_successfully() {
    let output = run_cli(&["--help"]);
    assert!(output.status.success(), "Expected --help to exit successfully");
    let stdout = String::from_utf8_lossy(&output.stdout);
    assert!(stdout.contains("fluidsurveys"), "Help should mention fluidsurveys");
    assert!(stdout.contains("surveys"), "Help should list the surveys command");
    assert!(stdout.contains("named"), "Help should list the named command");
    assert!(stdout.contains("--cache-ttl"), "Help should mention --cache-ttl");
}

#[test]
fn test_version_flag_exits_successfully() {
    let output = run_cli(&["--version"]);
    assert!(output.status.success());
    let stdout = String::from_utf8_lossy(&output.stdout);
    assert!(stdout.contains(env!("CARGO_PKG_VERSION")));
}

#[test]
fn test_missing_credentials_fails() {
    let output = run_cli(&["surveys"]);
    assert!(!output.status.success(), "Expected missing --key to fail");
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.contains("--key"), "Should name the missing option: {}", stderr);
}

#[test]
fn test_details_requires_id() {
    let output = run_cli(&["--key", "k", "--secret", "s", "details"]);
    assert!(!output.status.success());
}

#[test]
fn test_invalid_cache_ttl_fails() {
    let output = run_cli(&["--key", "k", "--secret", "s", "--cache-ttl", "soon", "surveys"]);
    assert!(!output.status.success());
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.contains("cache-ttl"), "Should mention the bad option: {}", stderr);
}

#[test]
fn test_unknown_command_fails() {
    let output = run_cli(&["--key", "k", "--secret", "s", "delete"]);
    assert!(!output.status.success());
}

#[cfg(test)]
mod unit_tests {
    //! Unit tests for CLI parsing that don't require running the binary

    use clap::Parser;
    use fluidsurveys::cli::{Cli, Command};

    #[test]
    fn test_named_command_parses_from_library() {
        let cli = Cli::try_parse_from(["fluidsurveys", "--key", "k", "--secret", "s", "named", "Beta"])
            .expect("should parse");
        assert_eq!(cli.command, Command::Named { name: "Beta".to_string() });
    }
}
