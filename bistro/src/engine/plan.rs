//! Plan types for reservation lifecycle operations.
//!
//! This module defines the plan structures that describe what actions
//! will be taken during an operation, without actually performing them.

use uuid::Uuid;

use crate::model::{Reservation, ReservationStatus, WaitlistEntry};
use crate::notify::NotificationEvent;

/// A single action to be taken during plan execution.
///
/// Each action corresponds to a specific database operation (or notification
/// dispatch) that will be performed when the plan is executed.
///
/// ## Note on `UpdateReservation` vs `UpdateReservationFields`
///
/// `UpdateReservation` rewrites the booked interval and table, so execution
/// re-checks conflicts atomically. `UpdateReservationFields` only touches
/// contact fields and the recorded duration, leaving the interval untouched;
/// it needs no conflict check. The split keeps the fast path for trivial
/// edits while making interval changes race-safe.
#[derive(Debug, Clone, PartialEq)]
pub enum PlanAction {
    /// Create a new reservation, re-checking conflicts atomically.
    CreateReservation(Reservation),

    /// Move an existing reservation to a new interval or table, re-checking
    /// conflicts atomically (the reservation's own row is excluded).
    UpdateReservation(Reservation),

    /// Update contact fields and recorded duration only.
    UpdateReservationFields(Reservation),

    /// Transition a reservation's lifecycle status.
    SetReservationStatus {
        /// The reservation to transition.
        id: Uuid,
        /// The new status.
        status: ReservationStatus,
    },

    /// Add a customer to the waitlist.
    CreateWaitlistEntry(WaitlistEntry),

    /// Promote a waiting entry to notified.
    MarkWaitlistNotified {
        /// The entry being promoted.
        id: Uuid,
    },

    /// Expire a waitlist entry.
    ExpireWaitlistEntry {
        /// The entry being removed.
        id: Uuid,
    },

    /// Dispatch a notification event.
    Notify(NotificationEvent),
}

impl PlanAction {
    /// Returns a human-readable description of this action.
    #[must_use]
    pub fn description(&self) -> String {
        match self {
            Self::CreateReservation(r) => format!(
                "Create reservation for {} on {} at {}",
                r.customer_name(),
                r.date(),
                r.start_time()
            ),
            Self::UpdateReservation(r) => format!(
                "Move reservation {} to {} at {}",
                r.id(),
                r.date(),
                r.start_time()
            ),
            Self::UpdateReservationFields(r) => {
                format!("Update details of reservation {}", r.id())
            }
            Self::SetReservationStatus { id, status } => {
                format!("Set reservation {id} status to {status}")
            }
            Self::CreateWaitlistEntry(e) => format!(
                "Add {} (party of {}) to the waitlist for {}",
                e.customer_name(),
                e.party_size(),
                e.date()
            ),
            Self::MarkWaitlistNotified { id } => {
                format!("Notify waitlist entry {id}")
            }
            Self::ExpireWaitlistEntry { id } => {
                format!("Expire waitlist entry {id}")
            }
            Self::Notify(event) => event.summary(),
        }
    }
}

/// A complete operation plan describing all actions to be taken.
///
/// Plans are generated during the planning phase and can be inspected,
/// logged, or executed. They include a description, a sequence of actions,
/// and any warnings that should be communicated to the user.
#[derive(Debug, Clone)]
pub struct OperationPlan {
    /// A human-readable description of the operation.
    pub description: String,

    /// The sequence of actions to perform.
    pub actions: Vec<PlanAction>,

    /// Warnings to communicate to the user.
    pub warnings: Vec<String>,
}

impl OperationPlan {
    /// Creates a new operation plan with the given description.
    ///
    /// # Examples
    ///
    /// ```
    /// use bistro::engine::OperationPlan;
    ///
    /// let plan = OperationPlan::new("Reserve a table");
    /// assert_eq!(plan.description, "Reserve a table");
    /// assert!(plan.is_empty());
    /// ```
    #[must_use]
    pub fn new(description: impl Into<String>) -> Self {
        Self {
            description: description.into(),
            actions: Vec::new(),
            warnings: Vec::new(),
        }
    }

    /// Adds an action to the plan.
    #[must_use]
    pub fn add_action(mut self, action: PlanAction) -> Self {
        self.actions.push(action);
        self
    }

    /// Adds a warning to the plan.
    #[must_use]
    pub fn add_warning(mut self, warning: impl Into<String>) -> Self {
        self.warnings.push(warning.into());
        self
    }

    /// Checks if the plan has no actions.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.actions.is_empty()
    }

    /// Returns the number of actions in the plan.
    #[must_use]
    pub fn len(&self) -> usize {
        self.actions.len()
    }
}
