//! Integration tests for the bistro CLI.
//!
//! These tests verify that the binary behaves correctly, including
//! argument parsing, help text, and version output.

use assert_cmd::Command;
use predicates::prelude::*;

/// Test that the binary runs without arguments and displays help/error.
#[test]
fn test_cli_no_arguments() {
    let mut cmd = Command::cargo_bin("bistro").expect("Failed to find bistro binary");

    // With clap subcommands required, no arguments should fail and show usage
    cmd.assert()
        .failure()
        .stderr(predicate::str::contains("Usage:"));
}

/// Test that the --version flag displays version information.
#[test]
fn test_cli_version_flag() {
    let mut cmd = Command::cargo_bin("bistro").expect("Failed to find bistro binary");

    cmd.arg("--version");

    cmd.assert()
        .success()
        .stdout(predicate::str::contains("bistro"))
        .stdout(predicate::str::contains(env!("CARGO_PKG_VERSION")));
}

/// Test that the --help flag displays help text.
#[test]
fn test_cli_help_flag() {
    let mut cmd = Command::cargo_bin("bistro").expect("Failed to find bistro binary");

    cmd.arg("--help");

    cmd.assert()
        .success()
        .stdout(predicate::str::contains("Usage:"))
        .stdout(predicate::str::contains(
            "Manage restaurant table reservations",
        ));
}

/// Test that an invalid subcommand fails with a clap error.
#[test]
fn test_cli_unknown_subcommand() {
    let mut cmd = Command::cargo_bin("bistro").expect("Failed to find bistro binary");

    cmd.arg("frobnicate");

    cmd.assert()
        .failure()
        .stderr(predicate::str::contains("unrecognized subcommand"));
}

/// Test that a malformed clock time is rejected during argument parsing.
#[test]
fn test_cli_invalid_time_rejected() {
    let mut cmd = Command::cargo_bin("bistro").expect("Failed to find bistro binary");

    cmd.args([
        "add-restaurant",
        "--name",
        "Test",
        "--open",
        "25:99",
        "--close",
        "22:00",
    ]);

    cmd.assert()
        .failure()
        .stderr(predicate::str::contains("invalid clock time"));
}
