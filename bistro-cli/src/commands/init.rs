//! Init command implementation.
//!
//! This module implements the `init` command for explicitly initializing
//! the bistro data directory and database.

use crate::error::CliError;
use crate::utils::GlobalOptions;
use bistro::database::{default_data_dir, Database, DatabaseConfig};
use clap::Args;
use std::fs;
use std::path::PathBuf;

/// Default configuration file contents written by `init --with-config`.
const DEFAULT_CONFIG: &str = "\
# bistro configuration
# default_duration_minutes: 120
# slot_interval_minutes: 30
# maximum_lock_wait_seconds: 5
";

/// Initialize bistro data directory and database.
#[derive(Args)]
pub struct InitCommand {
    /// Data directory to initialize
    #[arg(long, value_name = "PATH")]
    data_dir: Option<PathBuf>,

    /// Create default configuration file
    #[arg(long)]
    with_config: bool,

    /// Preview actions without executing
    #[arg(long)]
    dry_run: bool,
}

impl InitCommand {
    /// Execute the init command.
    ///
    /// Note: this command does NOT honor --disable-autoinit (would be
    /// paradoxical). The --data-dir flag means where to create, not where
    /// to find.
    pub fn execute(self, global: &GlobalOptions) -> Result<(), CliError> {
        // Priority: command flag > global flag > default
        let data_dir = self
            .data_dir
            .or_else(|| global.data_dir.clone())
            .or_else(|| default_data_dir().ok())
            .ok_or_else(|| {
                CliError::Config(
                    "Could not determine data directory (home directory not found)".to_string(),
                )
            })?;

        let db_path = data_dir.join("bistro.db");
        let config_path = data_dir.join("config.yaml");

        if self.dry_run {
            println!("Dry-run mode: no changes will be made");
            println!();
            println!("Would initialize bistro in: {}", data_dir.display());
            if data_dir.exists() {
                println!("  - Data directory already exists: {}", data_dir.display());
            } else {
                println!("  - Create data directory: {}", data_dir.display());
            }
            if db_path.exists() {
                println!("  - Database already exists: {}", db_path.display());
            } else {
                println!("  - Create database: {}", db_path.display());
            }
            if self.with_config {
                if config_path.exists() {
                    println!(
                        "  - Configuration file already exists (will not overwrite): {}",
                        config_path.display()
                    );
                } else {
                    println!("  - Create configuration file: {}", config_path.display());
                }
            }
            return Ok(());
        }

        let data_dir_created = !data_dir.exists();
        if data_dir_created {
            fs::create_dir_all(&data_dir)?;
        }

        // Opening initializes the schema
        let database_created = !db_path.exists();
        Database::open(DatabaseConfig::new(&db_path)).map_err(CliError::from)?;

        let mut config_created = false;
        if self.with_config && !config_path.exists() {
            fs::write(&config_path, DEFAULT_CONFIG)?;
            config_created = true;
        }

        println!("Initialized bistro in: {}", data_dir.display());
        if data_dir_created {
            println!("  - Created data directory");
        }
        if database_created {
            println!("  - Created database");
        }
        if config_created {
            println!("  - Created default configuration file");
        } else if self.with_config {
            println!("  - Configuration file already exists (not overwritten)");
        }

        Ok(())
    }
}
