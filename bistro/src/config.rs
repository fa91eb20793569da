//! Configuration loading and environment overrides.
//!
//! Settings come from three layers, later layers overriding earlier ones:
//! built-in defaults, the YAML file at `<data-dir>/config.yaml`, and
//! `BISTRO_*` environment variables.

use std::env;
use std::fs;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::error::{Error, Result};

/// Default requested duration when a booking does not specify one.
pub const DEFAULT_DURATION_MINUTES: u32 = 120;

/// Default spacing of the availability slot grid.
pub const DEFAULT_SLOT_INTERVAL_MINUTES: u16 = 30;

/// Default upper bound on waiting for the database write lock.
pub const DEFAULT_MAXIMUM_LOCK_WAIT_SECONDS: u64 = 5;

/// Raw configuration file contents. All fields optional so partial files
/// merge over the defaults.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct FileConfig {
    /// Data directory holding the database and this file.
    pub data_dir: Option<PathBuf>,
    /// Requested duration in minutes when a booking does not specify one.
    pub default_duration_minutes: Option<u32>,
    /// Spacing of the availability slot grid in minutes.
    pub slot_interval_minutes: Option<u16>,
    /// Upper bound on waiting for the database write lock.
    pub maximum_lock_wait_seconds: Option<u64>,
    /// Skip automatic schema initialization on open.
    pub disable_autoinit: Option<bool>,
}

impl FileConfig {
    /// Loads and parses a YAML configuration file.
    ///
    /// # Errors
    ///
    /// Returns an error if the file cannot be read or the YAML is invalid.
    pub fn load_file(path: &Path) -> Result<Self> {
        let contents = fs::read_to_string(path)?;
        Ok(serde_yaml::from_str(&contents)?)
    }

    /// Applies `BISTRO_*` environment variable overrides.
    ///
    /// # Errors
    ///
    /// Returns [`Error::Validation`] if a variable holds an unparseable
    /// value.
    pub fn apply_env_overrides(&mut self) -> Result<()> {
        if let Ok(dir) = env::var("BISTRO_DATA_DIR") {
            self.data_dir = Some(PathBuf::from(dir));
        }

        if let Ok(val) = env::var("BISTRO_DEFAULT_DURATION_MINUTES") {
            self.default_duration_minutes =
                Some(parse_env_number("BISTRO_DEFAULT_DURATION_MINUTES", &val)?);
        }

        if let Ok(val) = env::var("BISTRO_SLOT_INTERVAL_MINUTES") {
            self.slot_interval_minutes =
                Some(parse_env_number("BISTRO_SLOT_INTERVAL_MINUTES", &val)?);
        }

        if let Ok(val) = env::var("BISTRO_MAXIMUM_LOCK_WAIT_SECONDS") {
            self.maximum_lock_wait_seconds =
                Some(parse_env_number("BISTRO_MAXIMUM_LOCK_WAIT_SECONDS", &val)?);
        }

        if let Ok(val) = env::var("BISTRO_DISABLE_AUTOINIT") {
            self.disable_autoinit = Some(parse_bool("BISTRO_DISABLE_AUTOINIT", &val)?);
        }

        Ok(())
    }
}

/// Resolved configuration with every setting populated.
#[derive(Debug, Clone)]
pub struct Config {
    /// Data directory holding the database.
    pub data_dir: PathBuf,
    /// Requested duration in minutes when a booking does not specify one.
    pub default_duration_minutes: u32,
    /// Spacing of the availability slot grid in minutes.
    pub slot_interval_minutes: u16,
    /// Upper bound on waiting for the database write lock.
    pub maximum_lock_wait_seconds: u64,
    /// Skip automatic schema initialization on open.
    pub disable_autoinit: bool,
}

impl Config {
    /// Loads the configuration.
    ///
    /// Reads `<data-dir>/config.yaml` when it exists, then applies
    /// environment overrides. `data_dir` overrides the default data
    /// directory for both the file lookup and the resolved value.
    ///
    /// # Errors
    ///
    /// Returns an error if the file exists but cannot be read or parsed,
    /// if an environment override is invalid, or if the home directory
    /// cannot be determined.
    pub fn load(data_dir: Option<&Path>) -> Result<Self> {
        let base_dir = match data_dir {
            Some(dir) => dir.to_path_buf(),
            None => match env::var("BISTRO_DATA_DIR") {
                Ok(dir) => PathBuf::from(dir),
                Err(_) => crate::database::default_data_dir()?,
            },
        };

        let config_path = base_dir.join("config.yaml");
        let mut file = if config_path.exists() {
            FileConfig::load_file(&config_path)?
        } else {
            FileConfig::default()
        };
        file.apply_env_overrides()?;

        // An explicit data_dir argument wins over both file and environment
        if data_dir.is_some() {
            file.data_dir = Some(base_dir.clone());
        }

        Self::resolve(file, base_dir)
    }

    /// Resolves a raw file configuration against the defaults.
    ///
    /// # Errors
    ///
    /// Returns [`Error::Validation`] if a setting is out of range.
    pub fn resolve(file: FileConfig, fallback_data_dir: PathBuf) -> Result<Self> {
        let slot_interval = file
            .slot_interval_minutes
            .unwrap_or(DEFAULT_SLOT_INTERVAL_MINUTES);
        if slot_interval == 0 {
            return Err(Error::Validation {
                field: "slot_interval_minutes".to_string(),
                message: "must be at least 1".to_string(),
            });
        }

        let default_duration = file
            .default_duration_minutes
            .unwrap_or(DEFAULT_DURATION_MINUTES);
        if default_duration == 0 {
            return Err(Error::Validation {
                field: "default_duration_minutes".to_string(),
                message: "must be at least 1".to_string(),
            });
        }

        Ok(Self {
            data_dir: file.data_dir.unwrap_or(fallback_data_dir),
            default_duration_minutes: default_duration,
            slot_interval_minutes: slot_interval,
            maximum_lock_wait_seconds: file
                .maximum_lock_wait_seconds
                .unwrap_or(DEFAULT_MAXIMUM_LOCK_WAIT_SECONDS),
            disable_autoinit: file.disable_autoinit.unwrap_or(false),
        })
    }

    /// Returns the database file path inside the data directory.
    #[must_use]
    pub fn database_path(&self) -> PathBuf {
        self.data_dir.join("bistro.db")
    }
}

/// Parses a boolean environment value.
///
/// Accepts true/1/yes/on and false/0/no/off, case-insensitive.
fn parse_bool(field: &str, s: &str) -> Result<bool> {
    match s.to_lowercase().as_str() {
        "true" | "1" | "yes" | "on" => Ok(true),
        "false" | "0" | "no" | "off" => Ok(false),
        _ => Err(Error::Validation {
            field: field.to_string(),
            message: format!("invalid boolean value: '{s}'"),
        }),
    }
}

fn parse_env_number<T: std::str::FromStr>(field: &str, s: &str) -> Result<T> {
    s.parse().map_err(|_| Error::Validation {
        field: field.to_string(),
        message: "must be a positive integer".to_string(),
    })
}
