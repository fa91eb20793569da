//! Planning logic for cancelling reservations.

use uuid::Uuid;

use crate::database::Database;
use crate::error::{Error, Result};
use crate::model::ReservationStatus;
use crate::notify::NotificationEvent;

use super::plan::{OperationPlan, PlanAction};
use super::waitlist::select_promotion;

/// Options controlling a cancellation.
#[derive(Debug, Clone, Copy)]
pub struct CancelOptions {
    /// The reservation to cancel.
    pub reservation_id: Uuid,
}

impl CancelOptions {
    /// Creates cancellation options for a reservation.
    #[must_use]
    pub const fn new(reservation_id: Uuid) -> Self {
        Self { reservation_id }
    }
}

/// Plans the cancellation of a reservation.
///
/// Cancellation transitions the reservation to Cancelled and promotes at
/// most one waiting party whose size fits the freed seats, earliest joined
/// first. Promotion notifies; it never creates a reservation.
pub struct CancelPlan {
    options: CancelOptions,
}

impl CancelPlan {
    /// Creates a new cancellation plan from options.
    #[must_use]
    pub const fn new(options: CancelOptions) -> Self {
        Self { options }
    }

    /// Builds the operation plan.
    ///
    /// # Errors
    ///
    /// - [`Error::ReservationNotFound`] if the reservation does not exist
    /// - [`Error::AlreadyCancelled`] if it was already cancelled
    /// - Any database error from the reads
    pub fn build_plan(&self, db: &Database) -> Result<OperationPlan> {
        let id = self.options.reservation_id;
        let reservation = db
            .get_reservation(id)?
            .ok_or(Error::ReservationNotFound { id })?;

        if reservation.status() == ReservationStatus::Cancelled {
            return Err(Error::AlreadyCancelled { id });
        }

        let mut plan = OperationPlan::new(format!(
            "Cancel reservation for {} on {} at {}",
            reservation.customer_name(),
            reservation.date(),
            reservation.start_time(),
        ))
        .add_action(PlanAction::SetReservationStatus {
            id,
            status: ReservationStatus::Cancelled,
        });

        // At most one promotion, FIFO among parties that fit the freed seats
        let freed = reservation.party_size();
        if let Some(entry) =
            select_promotion(db, reservation.restaurant_id(), reservation.date(), freed)?
        {
            plan = plan
                .add_action(PlanAction::MarkWaitlistNotified { id: entry.id() })
                .add_action(PlanAction::Notify(NotificationEvent::TableAvailable {
                    entry,
                    freed_party_size: freed,
                }));
        }

        Ok(plan)
    }
}
