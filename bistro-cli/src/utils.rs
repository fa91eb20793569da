//! Utility functions for CLI operations.
//!
//! This module provides common helpers used across CLI commands, including
//! configuration loading, database opening and dry-run reporting.

use crate::error::CliError;
use bistro::notify::LogNotifier;
use bistro::{init_logger, Config, Database, DatabaseConfig, OperationPlan};
use std::path::PathBuf;
use std::time::Duration;

/// Global CLI options shared across all commands.
#[derive(Debug, Clone)]
pub struct GlobalOptions {
    /// Enable verbose output.
    pub verbose: bool,

    /// Suppress non-essential output.
    pub quiet: bool,

    /// Override the data directory location.
    pub data_dir: Option<PathBuf>,

    /// Override the default busy timeout (in seconds).
    pub busy_timeout: Option<u32>,

    /// Disable automatic database initialization.
    pub disable_autoinit: bool,
}

/// Load configuration from file, environment and global options.
///
/// Precedence (highest first): global options, environment variables,
/// the configuration file, built-in defaults.
pub fn load_configuration(global: &GlobalOptions) -> Result<Config, CliError> {
    Config::load(global.data_dir.as_deref()).map_err(|e| CliError::Config(e.to_string()))
}

/// Open the database with configuration.
///
/// # Errors
///
/// Returns `NoDataDirectory` if the database doesn't exist and auto-init
/// is disabled.
pub fn open_database(global: &GlobalOptions, config: &Config) -> Result<Database, CliError> {
    let db_path = config.database_path();

    if !db_path.exists() && (global.disable_autoinit || config.disable_autoinit) {
        return Err(CliError::NoDataDirectory);
    }

    let mut db_config = DatabaseConfig::new(db_path);

    // Priority: global option > config file
    if let Some(timeout_seconds) = global.busy_timeout {
        db_config = db_config.with_busy_timeout(Duration::from_secs(timeout_seconds.into()));
    } else {
        db_config =
            db_config.with_busy_timeout(Duration::from_secs(config.maximum_lock_wait_seconds));
    }

    Database::open(db_config).map_err(CliError::from)
}

/// Build the notification sink for mutating commands.
///
/// Notifications go through the stderr logger, so they only show up with
/// `--verbose`.
pub fn make_notifier(global: &GlobalOptions) -> LogNotifier {
    LogNotifier::new(init_logger(global.verbose, global.quiet))
}

/// Print a dry-run report of the plan to stderr.
pub fn print_dry_run(plan: &OperationPlan, global: &GlobalOptions) {
    if global.quiet {
        return;
    }
    eprintln!("Dry run - would perform the following actions:");
    for (i, action) in plan.actions.iter().enumerate() {
        eprintln!("  {}. {}", i + 1, action.description());
    }
    if !plan.warnings.is_empty() {
        eprintln!("Warnings:");
        for warning in &plan.warnings {
            eprintln!("  - {warning}");
        }
    }
}

/// Print execution warnings to stderr.
pub fn print_warnings(warnings: &[String], global: &GlobalOptions) {
    if global.quiet {
        return;
    }
    for warning in warnings {
        eprintln!("Warning: {warning}");
    }
}
