//! Waitlist planning: joining, leaving and promotion.

use chrono::NaiveDate;
use uuid::Uuid;

use crate::database::Database;
use crate::error::{Error, Result};
use crate::model::WaitlistEntry;
use crate::notify::{NotificationEvent, NotificationSink};
use crate::time_grid::ClockTime;

use super::plan::{OperationPlan, PlanAction};

/// Selects the promotion candidate for freed seats: the earliest joined
/// waiting party whose size fits, at most one.
///
/// # Errors
///
/// Returns an error if the lookup fails.
pub fn select_promotion(
    db: &Database,
    restaurant_id: Uuid,
    date: NaiveDate,
    freed_party_size: u32,
) -> Result<Option<WaitlistEntry>> {
    db.earliest_waiting_entry(restaurant_id, date, freed_party_size)
}

/// Promotes at most one waiting party for freed seats, standalone.
///
/// The cancellation path embeds promotion in its plan; this entry point
/// serves callers that freed capacity some other way. Returns the promoted
/// entry, if any.
///
/// # Errors
///
/// Returns an error if a database operation fails.
pub fn promote_waitlist(
    db: &mut Database,
    notifier: &dyn NotificationSink,
    restaurant_id: Uuid,
    date: NaiveDate,
    freed_party_size: u32,
) -> Result<Option<WaitlistEntry>> {
    let Some(entry) = select_promotion(db, restaurant_id, date, freed_party_size)? else {
        return Ok(None);
    };

    if !db.mark_waitlist_notified(entry.id())? {
        // Lost the race to another promoter
        return Ok(None);
    }

    notifier.dispatch(&NotificationEvent::TableAvailable {
        entry: entry.clone(),
        freed_party_size,
    });
    Ok(Some(entry))
}

/// Options for joining the waitlist.
#[derive(Debug, Clone)]
pub struct JoinWaitlistOptions {
    /// The restaurant to wait for.
    pub restaurant_id: Uuid,
    /// The desired date.
    pub date: NaiveDate,
    /// Preferred arrival time.
    pub preferred_time: ClockTime,
    /// Number of guests.
    pub party_size: u32,
    /// Customer name.
    pub customer_name: String,
    /// Contact phone number.
    pub phone: String,
}

/// Plans adding a customer to the waitlist.
pub struct JoinWaitlistPlan {
    options: JoinWaitlistOptions,
}

impl JoinWaitlistPlan {
    /// Creates a new join plan from options.
    #[must_use]
    pub const fn new(options: JoinWaitlistOptions) -> Self {
        Self { options }
    }

    /// Builds the operation plan.
    ///
    /// # Errors
    ///
    /// - [`Error::RestaurantNotFound`] if the restaurant does not exist
    /// - [`Error::Validation`] if the customer fields are invalid
    /// - Any database error from the reads
    pub fn build_plan(&self, db: &Database) -> Result<OperationPlan> {
        let opts = &self.options;
        if db.get_restaurant(opts.restaurant_id)?.is_none() {
            return Err(Error::RestaurantNotFound {
                id: opts.restaurant_id,
            });
        }

        let entry = WaitlistEntry::builder(opts.restaurant_id, opts.date, opts.preferred_time)
            .customer_name(&opts.customer_name)
            .phone(&opts.phone)
            .party_size(opts.party_size)
            .build()?;

        Ok(OperationPlan::new(format!(
            "Add {} (party of {}) to the waitlist for {}",
            opts.customer_name, opts.party_size, opts.date
        ))
        .add_action(PlanAction::CreateWaitlistEntry(entry.clone()))
        .add_action(PlanAction::Notify(NotificationEvent::WaitlistJoined {
            entry,
        })))
    }
}

/// Plans removing a waitlist entry.
pub struct RemoveWaitlistPlan {
    entry_id: Uuid,
}

impl RemoveWaitlistPlan {
    /// Creates a removal plan for an entry.
    #[must_use]
    pub const fn new(entry_id: Uuid) -> Self {
        Self { entry_id }
    }

    /// Builds the operation plan.
    ///
    /// # Errors
    ///
    /// Returns [`Error::WaitlistEntryNotFound`] if the entry does not exist,
    /// or a database error from the read.
    pub fn build_plan(&self, db: &Database) -> Result<OperationPlan> {
        let entry = db
            .get_waitlist_entry(self.entry_id)?
            .ok_or(Error::WaitlistEntryNotFound { id: self.entry_id })?;

        Ok(OperationPlan::new(format!(
            "Remove {} from the waitlist for {}",
            entry.customer_name(),
            entry.date()
        ))
        .add_action(PlanAction::ExpireWaitlistEntry { id: entry.id() }))
    }
}
