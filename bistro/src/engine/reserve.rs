//! Planning logic for creating reservations.

use chrono::NaiveDate;
use uuid::Uuid;

use crate::database::Database;
use crate::error::{Error, Result};
use crate::model::Reservation;
use crate::time_grid::ClockTime;

use super::allocator::{allocate, AllocationRequest};
use super::plan::{OperationPlan, PlanAction};
use crate::notify::NotificationEvent;

/// Options controlling a reservation creation.
#[derive(Debug, Clone)]
pub struct ReserveOptions {
    /// The restaurant to book at.
    pub restaurant_id: Uuid,
    /// The requested date.
    pub date: NaiveDate,
    /// The requested start time.
    pub start_time: ClockTime,
    /// Number of guests.
    pub party_size: u32,
    /// Requested duration in minutes, before any peak-hour cap.
    pub duration_minutes: u32,
    /// Customer name.
    pub customer_name: String,
    /// Contact phone number.
    pub phone: String,
}

impl ReserveOptions {
    /// Creates reservation options with the given booking parameters.
    #[must_use]
    pub fn new(
        restaurant_id: Uuid,
        date: NaiveDate,
        start_time: ClockTime,
        party_size: u32,
    ) -> Self {
        Self {
            restaurant_id,
            date,
            start_time,
            party_size,
            duration_minutes: 120,
            customer_name: String::new(),
            phone: String::new(),
        }
    }

    /// Sets the requested duration in minutes.
    #[must_use]
    pub const fn with_duration(mut self, minutes: u32) -> Self {
        self.duration_minutes = minutes;
        self
    }

    /// Sets the customer name.
    #[must_use]
    pub fn with_customer(mut self, name: &str, phone: &str) -> Self {
        self.customer_name = name.to_string();
        self.phone = phone.to_string();
        self
    }
}

/// Plans the creation of a reservation.
///
/// The planning phase performs all reads and validation: restaurant lookup,
/// peak capping, operating-hours check and best-fit table allocation. The
/// resulting plan inserts the reservation (re-checking conflicts atomically)
/// and dispatches a confirmation.
pub struct ReservePlan {
    options: ReserveOptions,
}

impl ReservePlan {
    /// Creates a new reservation plan from options.
    #[must_use]
    pub const fn new(options: ReserveOptions) -> Self {
        Self { options }
    }

    /// Builds the operation plan.
    ///
    /// # Errors
    ///
    /// - [`Error::RestaurantNotFound`] if the restaurant does not exist
    /// - [`Error::OutOfHours`], [`Error::NoCapacity`] or
    ///   [`Error::NoAvailability`] from allocation
    /// - [`Error::Validation`] if the customer fields are invalid
    /// - Any database error from the reads
    pub fn build_plan(&self, db: &Database) -> Result<OperationPlan> {
        let opts = &self.options;

        let restaurant = db
            .get_restaurant(opts.restaurant_id)?
            .ok_or(Error::RestaurantNotFound {
                id: opts.restaurant_id,
            })?;
        let tables = db.active_tables(opts.restaurant_id)?;

        let allocation = allocate(
            db,
            &restaurant,
            &tables,
            &AllocationRequest {
                date: opts.date,
                start_time: opts.start_time,
                party_size: opts.party_size,
                duration_minutes: opts.duration_minutes,
            },
        )?;

        let reservation = Reservation::builder(
            restaurant.id(),
            allocation.table.id(),
            opts.date,
            allocation.start_time,
        )
        .customer_name(&opts.customer_name)
        .phone(&opts.phone)
        .party_size(opts.party_size)
        .duration_minutes(allocation.effective_duration)
        .build()?;

        let plan = OperationPlan::new(format!(
            "Reserve table {} at {} for {} on {} {}-{}",
            allocation.table.table_number(),
            restaurant.name(),
            opts.customer_name,
            opts.date,
            allocation.start_time,
            allocation.end_time,
        ))
        .add_action(PlanAction::CreateReservation(reservation.clone()))
        .add_action(PlanAction::Notify(NotificationEvent::ReservationConfirmed {
            reservation,
            table_number: allocation.table.table_number().to_string(),
        }));

        Ok(plan)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::database::test_util::{create_test_database, sample_restaurant, sample_table};
    use crate::engine::executor::PlanExecutor;
    use crate::model::ReservationStatus;
    use crate::notify::NullNotifier;

    fn t(s: &str) -> ClockTime {
        s.parse().unwrap()
    }

    fn date() -> NaiveDate {
        NaiveDate::from_ymd_opt(2026, 9, 1).unwrap()
    }

    fn options(restaurant_id: Uuid, start: &str, party_size: u32) -> ReserveOptions {
        ReserveOptions::new(restaurant_id, date(), t(start), party_size)
            .with_customer("Ada", "555-0100")
    }

    #[test]
    fn test_reserve_plan_end_to_end() {
        let mut db = create_test_database();
        let restaurant = sample_restaurant();
        db.insert_restaurant(&restaurant).unwrap();
        db.insert_table(&sample_table(restaurant.id(), "T2", 2)).unwrap();
        db.insert_table(&sample_table(restaurant.id(), "T4", 4)).unwrap();
        db.insert_table(&sample_table(restaurant.id(), "T6", 6)).unwrap();

        let plan = ReservePlan::new(options(restaurant.id(), "12:00", 3))
            .build_plan(&db)
            .unwrap();
        assert_eq!(plan.len(), 2);

        let notifier = NullNotifier;
        let result = PlanExecutor::new(&mut db, &notifier).execute(&plan).unwrap();
        let reservation = result.reservation.unwrap();

        // Best fit for a party of 3 among {2, 4, 6} is the 4-top
        let stored = db.get_reservation(reservation.id()).unwrap().unwrap();
        assert_eq!(stored.status(), ReservationStatus::Confirmed);
        let tables = db.tables_for_restaurant(restaurant.id()).unwrap();
        let chosen = tables.iter().find(|t| t.id() == stored.table_id()).unwrap();
        assert_eq!(chosen.capacity(), 4);
    }

    #[test]
    fn test_reserve_peak_capped() {
        let mut db = create_test_database();
        let restaurant = sample_restaurant();
        db.insert_restaurant(&restaurant).unwrap();
        db.insert_table(&sample_table(restaurant.id(), "T1", 4)).unwrap();

        let plan = ReservePlan::new(
            options(restaurant.id(), "19:00", 2).with_duration(180),
        )
        .build_plan(&db)
        .unwrap();

        let notifier = NullNotifier;
        let mut executor = PlanExecutor::new(&mut db, &notifier);
        let result = executor.execute(&plan).unwrap();
        let reservation = result.reservation.unwrap();

        assert_eq!(reservation.duration_minutes(), 90);
        assert_eq!(reservation.end_time(), t("20:30"));
    }

    #[test]
    fn test_reserve_unknown_restaurant() {
        let db = create_test_database();
        let result = ReservePlan::new(options(Uuid::new_v4(), "12:00", 2)).build_plan(&db);
        assert!(matches!(result, Err(Error::RestaurantNotFound { .. })));
    }

    #[test]
    fn test_reserve_out_of_hours() {
        let mut db = create_test_database();
        let restaurant = sample_restaurant();
        db.insert_restaurant(&restaurant).unwrap();
        db.insert_table(&sample_table(restaurant.id(), "T1", 4)).unwrap();

        let result = ReservePlan::new(
            options(restaurant.id(), "23:00", 2).with_duration(60),
        )
        .build_plan(&db);
        assert!(matches!(result, Err(Error::OutOfHours { .. })));
    }

    #[test]
    fn test_reserve_dry_run_leaves_database_untouched() {
        let mut db = create_test_database();
        let restaurant = sample_restaurant();
        db.insert_restaurant(&restaurant).unwrap();
        db.insert_table(&sample_table(restaurant.id(), "T1", 4)).unwrap();

        let plan = ReservePlan::new(options(restaurant.id(), "12:00", 2))
            .build_plan(&db)
            .unwrap();

        let notifier = NullNotifier;
        let result = PlanExecutor::new(&mut db, &notifier)
            .dry_run()
            .execute(&plan)
            .unwrap();
        assert!(result.dry_run);
        assert!(db.list_reservations(restaurant.id(), date()).unwrap().is_empty());
    }
}
