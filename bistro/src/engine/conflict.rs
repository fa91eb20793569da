//! Double-booking detection.
//!
//! Conflict detection is the single enforcement point of the overlap
//! invariant: two non-cancelled reservations for the same table on the same
//! date never overlap. The planner consults it while building a plan, and
//! the atomic database writes re-run the same interval rule under the write
//! lock.

use chrono::NaiveDate;
use uuid::Uuid;

use crate::database::Database;
use crate::error::Result;
use crate::model::Reservation;
use crate::time_grid::{ranges_overlap, ClockTime};

/// Source of booked reservations for a table, injected into the scheduling
/// engine so the pure parts can be tested without a database.
pub trait ReservationLookup {
    /// Returns the non-cancelled reservations for `table_id` on `date`.
    ///
    /// # Errors
    ///
    /// Returns an error if the lookup fails.
    fn reservations_for_table(&self, table_id: Uuid, date: NaiveDate) -> Result<Vec<Reservation>>;
}

impl ReservationLookup for Database {
    fn reservations_for_table(&self, table_id: Uuid, date: NaiveDate) -> Result<Vec<Reservation>> {
        crate::database::reservations_for_table(self.connection(), table_id, date)
    }
}

/// In-memory lookup used by unit tests and dry-run validation.
#[derive(Debug, Default)]
pub struct StaticLookup {
    reservations: Vec<Reservation>,
}

impl StaticLookup {
    /// Creates a lookup serving the given reservations.
    #[must_use]
    pub fn new(reservations: Vec<Reservation>) -> Self {
        Self { reservations }
    }
}

impl ReservationLookup for StaticLookup {
    fn reservations_for_table(&self, table_id: Uuid, date: NaiveDate) -> Result<Vec<Reservation>> {
        Ok(self
            .reservations
            .iter()
            .filter(|r| r.table_id() == table_id && r.date() == date)
            .cloned()
            .collect())
    }
}

/// Checks whether `[start, end)` collides with an existing booking for the
/// table on the date.
///
/// `exclude` names a reservation to ignore; a reservation being moved never
/// conflicts with its own current interval.
///
/// # Errors
///
/// Returns an error if the reservation lookup fails.
pub fn has_conflict(
    lookup: &dyn ReservationLookup,
    table_id: Uuid,
    date: NaiveDate,
    start: ClockTime,
    end: ClockTime,
    exclude: Option<Uuid>,
) -> Result<bool> {
    let existing = lookup.reservations_for_table(table_id, date)?;
    Ok(existing.iter().any(|r| {
        exclude != Some(r.id()) && ranges_overlap(r.start_time(), r.end_time(), start, end)
    }))
}
