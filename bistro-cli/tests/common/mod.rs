//! Common test utilities for CLI integration tests.
//!
//! This module provides shared helpers for CLI testing: an isolated data
//! directory per test and command builders with it pre-configured.

use assert_cmd::Command;
use std::path::PathBuf;
use tempfile::TempDir;

/// Test environment with isolated data directory.
pub struct TestEnv {
    /// Temporary directory (kept alive for the duration of the test)
    #[allow(dead_code)]
    temp_dir: TempDir,
    /// Path to the bistro data directory
    pub data_dir: PathBuf,
}

#[allow(dead_code)]
impl TestEnv {
    /// Create a new test environment.
    pub fn new() -> Self {
        let temp_dir = tempfile::tempdir().expect("Failed to create temp dir");
        let data_dir = temp_dir.path().join("bistro-data");

        Self { temp_dir, data_dir }
    }

    /// Get a bare command builder without pre-configured flags.
    pub fn command_bare(&self) -> Command {
        Command::cargo_bin("bistro").expect("Failed to find bistro binary")
    }

    /// Get a command builder with the data directory pre-configured.
    pub fn command(&self) -> Command {
        let mut cmd = self.command_bare();
        cmd.arg("--data-dir").arg(&self.data_dir);
        cmd
    }

    /// Run a command and return its trimmed stdout, asserting success.
    ///
    /// Mutating commands print a bare id on stdout, so this is the way
    /// tests thread ids between steps.
    pub fn run_for_stdout(&self, args: &[&str]) -> String {
        let output = self
            .command()
            .args(args)
            .output()
            .expect("Failed to run bistro");
        assert!(
            output.status.success(),
            "command {:?} failed: {}",
            args,
            String::from_utf8_lossy(&output.stderr)
        );
        String::from_utf8(output.stdout)
            .expect("Non-UTF8 stdout")
            .trim()
            .to_string()
    }

    /// Add a restaurant open 10:00-22:00 with an 18:00-21:00 peak window
    /// capped at 90 minutes, returning its id.
    pub fn add_restaurant(&self) -> String {
        self.run_for_stdout(&[
            "add-restaurant",
            "--name",
            "Test Bistro",
            "--open",
            "10:00",
            "--close",
            "22:00",
            "--peak-start",
            "18:00",
            "--peak-end",
            "21:00",
            "--peak-max-duration",
            "90",
        ])
    }

    /// Add a table to a restaurant, returning its id.
    pub fn add_table(&self, restaurant: &str, number: &str, capacity: &str) -> String {
        self.run_for_stdout(&[
            "add-table",
            "--restaurant",
            restaurant,
            "--number",
            number,
            "--capacity",
            capacity,
        ])
    }
}
