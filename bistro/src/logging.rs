//! Stderr logging with three verbosity modes.
//!
//! The CLI maps `--verbose` and `--quiet` onto a [`LogLevel`]; between
//! invocations the `BISTRO_LOG_MODE` environment variable picks the mode.
//! Reservation ids and listings go to stdout, so everything routed through
//! [`Logger`] stays off the machine-readable stream.

use std::env;
use std::str::FromStr;

/// Output verbosity, ordered so `Quiet < Normal < Verbose`.
///
/// Normal shows errors and warnings; Verbose adds info and debug lines,
/// including notification summaries.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum LogLevel {
    /// No stderr output at all.
    Quiet,
    /// Errors and warnings.
    Normal,
    /// Everything, including notification and allocation diagnostics.
    Verbose,
}

impl LogLevel {
    /// Resolves the mode from CLI flags and the environment.
    ///
    /// Flags beat `BISTRO_LOG_MODE`, and `verbose` beats `quiet` when both
    /// are set. An unset or unrecognized variable means [`LogLevel::Normal`].
    #[must_use]
    pub fn resolve(verbose: bool, quiet: bool) -> Self {
        if verbose {
            Self::Verbose
        } else if quiet {
            Self::Quiet
        } else {
            env::var("BISTRO_LOG_MODE")
                .ok()
                .and_then(|value| value.parse().ok())
                .unwrap_or(Self::Normal)
        }
    }
}

impl FromStr for LogLevel {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "quiet" => Ok(Self::Quiet),
            "normal" => Ok(Self::Normal),
            "verbose" => Ok(Self::Verbose),
            other => Err(format!("unknown log mode '{other}'")),
        }
    }
}

/// Writes prefixed lines to stderr, filtered by a [`LogLevel`].
#[derive(Debug, Clone, Copy)]
pub struct Logger {
    level: LogLevel,
}

impl Logger {
    /// Creates a logger that emits at `level`.
    #[must_use]
    pub const fn new(level: LogLevel) -> Self {
        Self { level }
    }

    /// Returns the level this logger emits at.
    #[must_use]
    pub const fn level(&self) -> LogLevel {
        self.level
    }

    fn emit(&self, floor: LogLevel, prefix: &str, message: &str) {
        if self.level >= floor {
            eprintln!("{prefix}: {message}");
        }
    }

    /// Logs an error. Shown unless the mode is Quiet.
    pub fn error(&self, message: &str) {
        self.emit(LogLevel::Normal, "ERROR", message);
    }

    /// Logs a warning. Shown unless the mode is Quiet.
    pub fn warn(&self, message: &str) {
        self.emit(LogLevel::Normal, "WARN", message);
    }

    /// Logs an informational line. Shown only in Verbose mode.
    pub fn info(&self, message: &str) {
        self.emit(LogLevel::Verbose, "INFO", message);
    }

    /// Logs a debug line. Shown only in Verbose mode.
    pub fn debug(&self, message: &str) {
        self.emit(LogLevel::Verbose, "DEBUG", message);
    }
}

impl Default for Logger {
    fn default() -> Self {
        Self::new(LogLevel::Normal)
    }
}

/// Builds the logger the CLI threads into
/// [`LogNotifier`](crate::notify::LogNotifier).
#[must_use]
pub fn init_logger(verbose: bool, quiet: bool) -> Logger {
    Logger::new(LogLevel::resolve(verbose, quiet))
}
