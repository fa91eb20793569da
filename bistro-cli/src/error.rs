//! CLI-specific error types with exit codes.
//!
//! This module defines error types specific to the CLI layer,
//! wrapping library errors and providing appropriate exit codes.

use bistro::Error as LibError;
use std::fmt;

/// CLI-specific error type with exit code mapping.
#[derive(Debug)]
pub enum CliError {
    /// Library error (wrapped).
    Library(LibError),

    /// Invalid command-line arguments.
    InvalidArguments(String),

    /// I/O error.
    Io(std::io::Error),

    /// Timeout waiting for database lock.
    Timeout,

    /// Data directory not found (and auto-init disabled).
    NoDataDirectory,

    /// Configuration error.
    Config(String),
}

impl CliError {
    /// Get the appropriate exit code for this error.
    ///
    /// Exit codes:
    /// - 0: Success (not an error)
    /// - 1: Scheduling failure (no table, conflict, out of hours)
    /// - 2: Timeout waiting for database lock
    /// - 3: No data directory found
    /// - 4: Invalid arguments
    /// - 5: I/O error
    /// - 6: Other library error
    /// - 7: Configuration error
    pub fn exit_code(&self) -> i32 {
        match self {
            CliError::Library(lib_err) => {
                if lib_err.is_scheduling_conflict() || lib_err.is_not_found() {
                    return 1;
                }
                match lib_err {
                    LibError::OutOfHours { .. }
                    | LibError::AlreadyCancelled { .. }
                    | LibError::CannotModifyCancelled { .. }
                    | LibError::TableNumberConflict { .. } => 1,
                    _ => 6,
                }
            }
            CliError::Timeout => 2,
            CliError::NoDataDirectory => 3,
            CliError::InvalidArguments(_) => 4,
            CliError::Io(_) => 5,
            CliError::Config(_) => 7,
        }
    }
}

impl fmt::Display for CliError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CliError::Library(e) => write!(f, "{e}"),
            CliError::InvalidArguments(msg) => write!(f, "Invalid arguments: {msg}"),
            CliError::Io(e) => write!(f, "I/O error: {e}"),
            CliError::Timeout => write!(f, "Timeout waiting for database lock"),
            CliError::NoDataDirectory => {
                write!(
                    f,
                    "Data directory not found (use --data-dir or enable auto-init)"
                )
            }
            CliError::Config(msg) => write!(f, "Configuration error: {msg}"),
        }
    }
}

impl std::error::Error for CliError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            CliError::Library(e) => Some(e),
            CliError::Io(e) => Some(e),
            _ => None,
        }
    }
}

impl From<LibError> for CliError {
    fn from(e: LibError) -> Self {
        // Lock timeouts get their own exit code
        if matches!(e, LibError::LockTimeout) {
            CliError::Timeout
        } else {
            CliError::Library(e)
        }
    }
}

impl From<std::io::Error> for CliError {
    fn from(e: std::io::Error) -> Self {
        CliError::Io(e)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;
    use uuid::Uuid;

    #[test]
    fn test_scheduling_failures_exit_one() {
        let conflict = CliError::from(LibError::NoAvailability {
            date: NaiveDate::from_ymd_opt(2026, 9, 1).unwrap(),
            start_time: "19:00".parse().unwrap(),
        });
        assert_eq!(conflict.exit_code(), 1);

        let duplicate = CliError::from(LibError::TableNumberConflict {
            restaurant_id: Uuid::new_v4(),
            table_number: "T1".to_string(),
        });
        assert_eq!(duplicate.exit_code(), 1);
    }

    #[test]
    fn test_lock_timeout_exits_two() {
        let e = CliError::from(LibError::LockTimeout);
        assert!(matches!(e, CliError::Timeout));
        assert_eq!(e.exit_code(), 2);
    }

    #[test]
    fn test_other_library_errors_exit_six() {
        let e = CliError::from(LibError::Validation {
            field: "phone".to_string(),
            message: "must be non-empty".to_string(),
        });
        assert_eq!(e.exit_code(), 6);
    }
}
