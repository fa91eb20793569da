//! Scheduling engine: allocation, availability and reservation lifecycle.
//!
//! Every mutating operation follows the same shape. A `*Plan` type reads the
//! current state and produces an [`OperationPlan`] describing the actions to
//! take; the [`PlanExecutor`] then applies those actions, or merely reports
//! them in dry-run mode. Concurrency is handled at execution time: inserts
//! and moves re-check conflicts under the database write lock.

mod allocator;
mod availability;
mod cancel;
mod conflict;
mod executor;
mod modify;
mod plan;
mod reserve;
mod waitlist;

pub use allocator::{allocate, check_slot, effective_duration, Allocation, AllocationRequest};
pub use availability::{enumerate_availability, AvailabilitySlot};
pub use cancel::{CancelOptions, CancelPlan};
pub use conflict::{has_conflict, ReservationLookup, StaticLookup};
pub use executor::{ExecutionResult, PlanExecutor};
pub use modify::{ModifyOptions, ModifyPlan};
pub use plan::{OperationPlan, PlanAction};
pub use reserve::{ReserveOptions, ReservePlan};
pub use waitlist::{
    promote_waitlist, select_promotion, JoinWaitlistOptions, JoinWaitlistPlan, RemoveWaitlistPlan,
};
