//! Domain model types for restaurants, tables, reservations and waitlists.
//!
//! All entity types carry validating builders: construction checks field
//! invariants up front so the engine and storage layers can rely on every
//! instance being well formed.

mod reservation;
mod restaurant;
mod table;
mod waitlist;

pub use reservation::{Reservation, ReservationBuilder, ReservationStatus};
pub use restaurant::{PeakWindow, Restaurant, RestaurantBuilder};
pub use table::{DiningTable, DiningTableBuilder};
pub use waitlist::{WaitlistEntry, WaitlistEntryBuilder, WaitlistStatus};

/// Error type for validation failures.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ValidationError {
    /// The field that failed validation.
    pub field: String,
    /// A description of the validation failure.
    pub message: String,
}

impl ValidationError {
    pub(crate) fn new(field: &str, message: impl Into<String>) -> Self {
        Self {
            field: field.to_string(),
            message: message.into(),
        }
    }
}

impl std::fmt::Display for ValidationError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "validation error for '{}': {}", self.field, self.message)
    }
}

impl std::error::Error for ValidationError {}

/// Validates a customer-facing string field: trims whitespace and rejects
/// empty results.
fn non_empty_trimmed(field: &str, value: &str) -> Result<String, ValidationError> {
    let trimmed = value.trim();
    if trimmed.is_empty() {
        return Err(ValidationError::new(
            field,
            format!("{field} must be non-empty after trimming whitespace"),
        ));
    }
    Ok(trimmed.to_string())
}
