//! Plan execution engine.
//!
//! This module implements the executor that takes operation plans
//! and applies them to the database. Each action commits independently,
//! so a failed waitlist promotion can never roll back the cancellation
//! that triggered it.

use uuid::Uuid;

use crate::database::Database;
use crate::error::{Error, Result};
use crate::model::{Reservation, WaitlistStatus};
use crate::notify::NotificationSink;

use super::plan::{OperationPlan, PlanAction};

/// Result of executing a plan.
///
/// This struct provides information about what happened during execution,
/// including whether it was a dry run and what actions were taken.
#[derive(Debug, Clone)]
pub struct ExecutionResult {
    /// Whether the execution was successful.
    pub success: bool,

    /// Whether this was a dry-run (no actual changes made).
    pub dry_run: bool,

    /// Descriptions of actions that were taken (or would be taken in dry-run).
    pub actions_taken: Vec<String>,

    /// Warnings from the plan plus any raised during execution.
    pub warnings: Vec<String>,

    /// The reservation that was created or moved (if applicable).
    pub reservation: Option<Reservation>,

    /// The waitlist entry that was promoted (if applicable).
    pub promoted: Option<Uuid>,
}

/// Executes operation plans against the database.
///
/// The executor can run in normal mode (applying changes) or dry-run mode
/// (validating without changes). Notification actions dispatch through the
/// provided sink; in dry-run mode nothing is dispatched.
///
/// # Examples
///
/// ```no_run
/// use bistro::database::{Database, DatabaseConfig};
/// use bistro::engine::{OperationPlan, PlanExecutor};
/// use bistro::notify::NullNotifier;
///
/// let mut db = Database::open(DatabaseConfig::new("/tmp/bistro.db")).unwrap();
/// let plan = OperationPlan::new("Test operation");
///
/// let notifier = NullNotifier;
/// let mut executor = PlanExecutor::new(&mut db, &notifier);
/// let result = executor.execute(&plan).unwrap();
/// assert!(result.success);
/// ```
pub struct PlanExecutor<'a> {
    db: &'a mut Database,
    notifier: &'a dyn NotificationSink,
    dry_run: bool,
}

impl<'a> PlanExecutor<'a> {
    /// Creates a new plan executor.
    #[must_use]
    pub fn new(db: &'a mut Database, notifier: &'a dyn NotificationSink) -> Self {
        Self {
            db,
            notifier,
            dry_run: false,
        }
    }

    /// Sets the executor to dry-run mode.
    ///
    /// In dry-run mode, the executor reports the plan but does not modify
    /// the database or dispatch notifications.
    #[must_use]
    pub const fn dry_run(mut self) -> Self {
        self.dry_run = true;
        self
    }

    /// Executes the given plan.
    ///
    /// If in dry-run mode, reports the plan without making changes.
    /// Otherwise, applies all actions in the plan to the database in order.
    ///
    /// # Errors
    ///
    /// Returns an error if any action fails to execute. In particular a
    /// booking that lost its slot to a concurrent writer surfaces as
    /// [`Error::NoAvailability`] (create) or [`Error::SlotUnavailable`]
    /// (move).
    pub fn execute(&mut self, plan: &OperationPlan) -> Result<ExecutionResult> {
        let actions_taken: Vec<String> =
            plan.actions.iter().map(PlanAction::description).collect();
        let mut warnings = plan.warnings.clone();
        let reservation = Self::extract_reservation(plan);
        let promoted = Self::extract_promoted(plan);

        if self.dry_run {
            return Ok(ExecutionResult {
                success: true,
                dry_run: true,
                actions_taken,
                warnings,
                reservation,
                promoted,
            });
        }

        for action in &plan.actions {
            self.execute_action(action, &mut warnings)?;
        }

        Ok(ExecutionResult {
            success: true,
            dry_run: false,
            actions_taken,
            warnings,
            reservation,
            promoted,
        })
    }

    /// Executes a single action, appending any non-fatal problems to
    /// `warnings`.
    fn execute_action(&mut self, action: &PlanAction, warnings: &mut Vec<String>) -> Result<()> {
        match action {
            PlanAction::CreateReservation(reservation) => {
                // Re-check under the write lock: a conflicting booking may
                // have landed between planning and execution.
                let created = self.db.try_create_reservation_atomic(reservation)?;
                if !created {
                    return Err(Error::NoAvailability {
                        date: reservation.date(),
                        start_time: reservation.start_time(),
                    });
                }
                Ok(())
            }
            PlanAction::UpdateReservation(reservation) => {
                let updated = self.db.try_update_reservation_atomic(reservation)?;
                if !updated {
                    return Err(Error::SlotUnavailable {
                        date: reservation.date(),
                        start_time: reservation.start_time(),
                    });
                }
                Ok(())
            }
            PlanAction::UpdateReservationFields(reservation) => {
                self.db.update_reservation_fields(reservation)
            }
            PlanAction::SetReservationStatus { id, status } => {
                if !self.db.update_reservation_status(*id, *status)? {
                    return Err(Error::ReservationNotFound { id: *id });
                }
                Ok(())
            }
            PlanAction::CreateWaitlistEntry(entry) => self.db.insert_waitlist_entry(entry),
            PlanAction::MarkWaitlistNotified { id } => {
                // A concurrent cancellation may have promoted or removed the
                // entry already. The cancellation itself has committed, so
                // this is a warning, not a failure.
                if !self.db.mark_waitlist_notified(*id)? {
                    warnings.push(format!("waitlist entry {id} was no longer waiting"));
                }
                Ok(())
            }
            PlanAction::ExpireWaitlistEntry { id } => {
                if !self.db.set_waitlist_status(*id, WaitlistStatus::Expired)? {
                    return Err(Error::WaitlistEntryNotFound { id: *id });
                }
                Ok(())
            }
            PlanAction::Notify(event) => {
                self.notifier.dispatch(event);
                Ok(())
            }
        }
    }

    /// Extracts the reservation a plan creates or moves, for the caller.
    fn extract_reservation(plan: &OperationPlan) -> Option<Reservation> {
        plan.actions.iter().find_map(|action| match action {
            PlanAction::CreateReservation(r)
            | PlanAction::UpdateReservation(r)
            | PlanAction::UpdateReservationFields(r) => Some(r.clone()),
            _ => None,
        })
    }

    /// Extracts the waitlist entry a plan promotes, if any.
    fn extract_promoted(plan: &OperationPlan) -> Option<Uuid> {
        plan.actions.iter().find_map(|action| match action {
            PlanAction::MarkWaitlistNotified { id } => Some(*id),
            _ => None,
        })
    }
}
