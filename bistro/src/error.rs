//! Error types for the bistro library.
//!
//! This module provides a comprehensive error hierarchy for all operations
//! in the bistro library, using `thiserror` for ergonomic error handling.

use chrono::NaiveDate;
use thiserror::Error;
use uuid::Uuid;

use crate::time_grid::ClockTime;

/// Result type alias for operations that may fail with a bistro error.
///
/// # Examples
///
/// ```
/// use bistro::{Error, Result};
///
/// fn example_operation() -> Result<u32> {
///     Ok(4)
/// }
/// ```
pub type Result<T> = std::result::Result<T, Error>;

/// The main error type for the bistro library.
///
/// This enum encompasses all possible error conditions that can occur
/// during reservation scheduling operations.
#[derive(Debug, Error)]
pub enum Error {
    /// The requested restaurant does not exist.
    #[error("restaurant not found: {id}")]
    RestaurantNotFound {
        /// The restaurant id that was not found.
        id: Uuid,
    },

    /// The requested interval falls outside operating hours.
    #[error("requested time {start}-{end} is outside operating hours {opening}-{closing}")]
    OutOfHours {
        /// Requested start time.
        start: ClockTime,
        /// Requested end time.
        end: ClockTime,
        /// The restaurant's opening time.
        opening: ClockTime,
        /// The restaurant's closing time.
        closing: ClockTime,
    },

    /// No table is large enough for the requested party.
    #[error("no table can seat a party of {party_size}")]
    NoCapacity {
        /// The requested party size.
        party_size: u32,
    },

    /// Every suitable table is already booked for the requested interval.
    #[error("no table available on {date} at {start_time}")]
    NoAvailability {
        /// The requested date.
        date: NaiveDate,
        /// The requested start time.
        start_time: ClockTime,
    },

    /// The requested reservation does not exist.
    #[error("reservation not found: {id}")]
    ReservationNotFound {
        /// The reservation id that was not found.
        id: Uuid,
    },

    /// The reservation is already cancelled.
    #[error("reservation {id} is already cancelled")]
    AlreadyCancelled {
        /// The cancelled reservation's id.
        id: Uuid,
    },

    /// A cancelled reservation cannot be modified.
    #[error("cannot modify cancelled reservation {id}")]
    CannotModifyCancelled {
        /// The cancelled reservation's id.
        id: Uuid,
    },

    /// The modified interval collides with another booking.
    #[error("slot on {date} at {start_time} is no longer available")]
    SlotUnavailable {
        /// The requested date.
        date: NaiveDate,
        /// The requested start time.
        start_time: ClockTime,
    },

    /// A table with this number already exists in the restaurant.
    #[error("table '{table_number}' already exists in restaurant {restaurant_id}")]
    TableNumberConflict {
        /// The restaurant holding the conflicting table.
        restaurant_id: Uuid,
        /// The duplicate table number.
        table_number: String,
    },

    /// The requested waitlist entry does not exist.
    #[error("waitlist entry not found: {id}")]
    WaitlistEntryNotFound {
        /// The waitlist entry id that was not found.
        id: Uuid,
    },

    /// A validation error occurred.
    #[error("validation error for '{field}': {message}")]
    Validation {
        /// The field that failed validation.
        field: String,
        /// A description of the validation failure.
        message: String,
    },

    /// A database error occurred.
    #[error("database error: {0}")]
    Database(#[source] rusqlite::Error),

    /// A configuration error occurred.
    #[error("configuration error: {0}")]
    Configuration(#[from] serde_yaml::Error),

    /// An I/O error occurred.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// The database write lock could not be acquired within the busy
    /// timeout.
    #[error("timed out waiting for the database lock")]
    LockTimeout,

    /// An unsupported schema version was encountered.
    #[error("unsupported schema version: expected {expected}, found {found}")]
    UnsupportedSchemaVersion {
        /// The expected schema version.
        expected: u32,
        /// The schema version found in the database.
        found: u32,
    },
}

// Additional conversions for better ergonomics

impl From<rusqlite::Error> for Error {
    fn from(err: rusqlite::Error) -> Self {
        // An expired busy timeout surfaces as its own variant so callers can
        // tell contention apart from corruption
        match err.sqlite_error_code() {
            Some(rusqlite::ErrorCode::DatabaseBusy | rusqlite::ErrorCode::DatabaseLocked) => {
                Self::LockTimeout
            }
            _ => Self::Database(err),
        }
    }
}

impl From<crate::time_grid::InvalidClockTimeError> for Error {
    fn from(err: crate::time_grid::InvalidClockTimeError) -> Self {
        Self::Validation {
            field: "time".to_string(),
            message: err.to_string(),
        }
    }
}

impl From<crate::model::ValidationError> for Error {
    fn from(err: crate::model::ValidationError) -> Self {
        Self::Validation {
            field: err.field,
            message: err.message,
        }
    }
}

impl Error {
    /// Check if error indicates a missing entity.
    ///
    /// # Examples
    ///
    /// ```
    /// use bistro::Error;
    /// use uuid::Uuid;
    ///
    /// let err = Error::ReservationNotFound { id: Uuid::new_v4() };
    /// assert!(err.is_not_found());
    /// ```
    #[must_use]
    pub fn is_not_found(&self) -> bool {
        matches!(
            self,
            Self::RestaurantNotFound { .. }
                | Self::ReservationNotFound { .. }
                | Self::WaitlistEntryNotFound { .. }
        )
    }

    /// Check if error indicates a scheduling conflict rather than bad input.
    ///
    /// # Examples
    ///
    /// ```
    /// use bistro::Error;
    ///
    /// let err = Error::NoCapacity { party_size: 12 };
    /// assert!(err.is_scheduling_conflict());
    /// ```
    #[must_use]
    pub fn is_scheduling_conflict(&self) -> bool {
        matches!(
            self,
            Self::NoCapacity { .. } | Self::NoAvailability { .. } | Self::SlotUnavailable { .. }
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_out_of_hours_error() {
        let t = |s: &str| s.parse::<ClockTime>().unwrap();
        let err = Error::OutOfHours {
            start: t("23:00"),
            end: t("01:00"),
            opening: t("10:00"),
            closing: t("22:00"),
        };
        let display = format!("{err}");
        assert!(display.contains("23:00-01:00"));
        assert!(display.contains("10:00-22:00"));
    }

    #[test]
    fn test_no_capacity_error() {
        let err = Error::NoCapacity { party_size: 12 };
        let display = format!("{err}");
        assert!(display.contains("party of 12"));
        assert!(err.is_scheduling_conflict());
    }

    #[test]
    fn test_not_found_classification() {
        let id = Uuid::new_v4();
        assert!(Error::RestaurantNotFound { id }.is_not_found());
        assert!(Error::ReservationNotFound { id }.is_not_found());
        assert!(Error::WaitlistEntryNotFound { id }.is_not_found());
        assert!(!Error::AlreadyCancelled { id }.is_not_found());
    }

    #[test]
    fn test_table_number_conflict_error() {
        let err = Error::TableNumberConflict {
            restaurant_id: Uuid::new_v4(),
            table_number: "T1".to_string(),
        };
        let display = format!("{err}");
        assert!(display.contains("'T1'"));
        assert!(display.contains("already exists"));
    }

    #[test]
    fn test_validation_error() {
        let err = Error::Validation {
            field: "customer_name".to_string(),
            message: "must be non-empty".to_string(),
        };
        let display = format!("{err}");
        assert!(display.contains("validation error"));
        assert!(display.contains("customer_name"));
    }

    #[test]
    fn test_busy_sqlite_error_becomes_lock_timeout() {
        let busy = rusqlite::Error::SqliteFailure(
            rusqlite::ffi::Error::new(rusqlite::ffi::SQLITE_BUSY),
            Some("database is locked".to_string()),
        );
        assert!(matches!(Error::from(busy), Error::LockTimeout));

        let corrupt = rusqlite::Error::SqliteFailure(
            rusqlite::ffi::Error::new(rusqlite::ffi::SQLITE_CORRUPT),
            None,
        );
        assert!(matches!(Error::from(corrupt), Error::Database(_)));
    }

    #[test]
    fn test_io_error_conversion() {
        let io_err = std::io::Error::new(std::io::ErrorKind::NotFound, "file not found");
        let err: Error = io_err.into();
        let display = format!("{err}");
        assert!(display.contains("I/O error"));
    }

    #[test]
    fn test_result_type_alias() {
        fn returns_result() -> Result<u32> {
            Err(Error::NoCapacity { party_size: 9 })
        }

        assert!(returns_result().is_err());
    }
}
