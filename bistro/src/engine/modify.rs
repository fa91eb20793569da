//! Planning logic for modifying reservations.
//!
//! Touching the start time, date, party size or duration re-runs slot
//! validation with merged old-value-fallback parameters and may move the
//! booking to a better-fitting table. Edits to contact fields alone skip
//! re-validation and leave the booked interval untouched.

use chrono::NaiveDate;
use uuid::Uuid;

use crate::database::Database;
use crate::error::{Error, Result};
use crate::model::{Reservation, ReservationStatus};
use crate::time_grid::ClockTime;

use super::allocator::check_slot;
use super::plan::{OperationPlan, PlanAction};

/// Options controlling a modification. Unset fields keep their current
/// values.
#[derive(Debug, Clone, Default)]
pub struct ModifyOptions {
    /// The reservation to modify.
    pub reservation_id: Uuid,
    /// New customer name.
    pub customer_name: Option<String>,
    /// New contact phone number.
    pub phone: Option<String>,
    /// New party size.
    pub party_size: Option<u32>,
    /// New date.
    pub date: Option<NaiveDate>,
    /// New start time.
    pub start_time: Option<ClockTime>,
    /// New duration in minutes.
    pub duration_minutes: Option<u32>,
}

impl ModifyOptions {
    /// Creates empty modification options for a reservation.
    #[must_use]
    pub fn new(reservation_id: Uuid) -> Self {
        Self {
            reservation_id,
            ..Self::default()
        }
    }

    /// Returns `true` if any scheduling-relevant field is being changed.
    ///
    /// The duration counts: growing it moves the end of the booked interval,
    /// which can collide with a neighboring booking.
    #[must_use]
    pub const fn touches_schedule(&self) -> bool {
        self.start_time.is_some()
            || self.date.is_some()
            || self.party_size.is_some()
            || self.duration_minutes.is_some()
    }
}

/// Plans the modification of a reservation.
pub struct ModifyPlan {
    options: ModifyOptions,
}

impl ModifyPlan {
    /// Creates a new modification plan from options.
    #[must_use]
    pub const fn new(options: ModifyOptions) -> Self {
        Self { options }
    }

    /// Builds the operation plan.
    ///
    /// # Errors
    ///
    /// - [`Error::ReservationNotFound`] if the reservation does not exist
    /// - [`Error::CannotModifyCancelled`] if it is cancelled
    /// - [`Error::SlotUnavailable`] if the merged schedule has no free table
    /// - [`Error::Validation`] if a merged field is invalid
    /// - Any database error from the reads
    pub fn build_plan(&self, db: &Database) -> Result<OperationPlan> {
        let opts = &self.options;
        let id = opts.reservation_id;
        let existing = db
            .get_reservation(id)?
            .ok_or(Error::ReservationNotFound { id })?;

        if existing.status() == ReservationStatus::Cancelled {
            return Err(Error::CannotModifyCancelled { id });
        }

        // Merged parameters: unset options fall back to current values
        let customer_name = opts
            .customer_name
            .clone()
            .unwrap_or_else(|| existing.customer_name().to_string());
        let phone = opts
            .phone
            .clone()
            .unwrap_or_else(|| existing.phone().to_string());
        let party_size = opts.party_size.unwrap_or(existing.party_size());
        let date = opts.date.unwrap_or(existing.date());
        let start_time = opts.start_time.unwrap_or(existing.start_time());

        if self.options.touches_schedule() {
            let duration = opts.duration_minutes.unwrap_or(existing.duration_minutes());
            let end_time = start_time.add_minutes(duration);
            let tables = db.active_tables(existing.restaurant_id())?;

            // The reservation's own interval is excluded from the scan
            let table = check_slot(
                db,
                &tables,
                date,
                start_time,
                end_time,
                party_size,
                Some(id),
            )?
            .ok_or(Error::SlotUnavailable { date, start_time })?;

            let updated = Reservation::builder(existing.restaurant_id(), table.id(), date, start_time)
                .id(id)
                .customer_name(&customer_name)
                .phone(&phone)
                .party_size(party_size)
                .duration_minutes(duration)
                .status(existing.status())
                .created_at(existing.created_at())
                .build()?;

            Ok(OperationPlan::new(format!(
                "Move reservation for {customer_name} to {date} at {start_time}"
            ))
            .add_action(PlanAction::UpdateReservation(updated)))
        } else {
            // Contact-only change: persist the merged fields without touching
            // the booked interval
            let updated = Reservation::builder(
                existing.restaurant_id(),
                existing.table_id(),
                existing.date(),
                existing.start_time(),
            )
            .id(id)
            .customer_name(&customer_name)
            .phone(&phone)
            .party_size(existing.party_size())
            .duration_minutes(existing.duration_minutes())
            .status(existing.status())
            .created_at(existing.created_at())
            .build()?;

            Ok(OperationPlan::new(format!(
                "Update details of reservation for {customer_name}"
            ))
            .add_action(PlanAction::UpdateReservationFields(updated)))
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::database::test_util::{create_test_database, sample_restaurant, sample_table};
    use crate::engine::executor::PlanExecutor;
    use crate::notify::NullNotifier;

    fn t(s: &str) -> ClockTime {
        s.parse().unwrap()
    }

    fn date() -> NaiveDate {
        NaiveDate::from_ymd_opt(2026, 9, 1).unwrap()
    }

    fn booked(db: &mut Database, restaurant_id: Uuid, table_id: Uuid, start: &str) -> Reservation {
        let r = Reservation::builder(restaurant_id, table_id, date(), t(start))
            .customer_name("Ada")
            .phone("555-0100")
            .party_size(2)
            .duration_minutes(90)
            .build()
            .unwrap();
        assert!(db.try_create_reservation_atomic(&r).unwrap());
        r
    }

    #[test]
    fn test_modify_contact_fields_keeps_interval() {
        let mut db = create_test_database();
        let restaurant = sample_restaurant();
        db.insert_restaurant(&restaurant).unwrap();
        let table = sample_table(restaurant.id(), "T1", 4);
        db.insert_table(&table).unwrap();
        let r = booked(&mut db, restaurant.id(), table.id(), "19:00");

        let mut opts = ModifyOptions::new(r.id());
        opts.customer_name = Some("Grace".to_string());
        let plan = ModifyPlan::new(opts).build_plan(&db).unwrap();
        assert!(matches!(
            plan.actions[0],
            PlanAction::UpdateReservationFields(_)
        ));

        let notifier = NullNotifier;
        PlanExecutor::new(&mut db, &notifier).execute(&plan).unwrap();

        let stored = db.get_reservation(r.id()).unwrap().unwrap();
        assert_eq!(stored.customer_name(), "Grace");
        assert_eq!(stored.start_time(), t("19:00"));
        assert_eq!(stored.end_time(), t("20:30"));
        assert_eq!(stored.table_id(), table.id());
    }

    #[test]
    fn test_duration_change_revalidates_and_recomputes_end() {
        let mut db = create_test_database();
        let restaurant = sample_restaurant();
        db.insert_restaurant(&restaurant).unwrap();
        let table = sample_table(restaurant.id(), "T1", 4);
        db.insert_table(&table).unwrap();
        let r = booked(&mut db, restaurant.id(), table.id(), "19:00");

        let mut opts = ModifyOptions::new(r.id());
        opts.duration_minutes = Some(60);
        let plan = ModifyPlan::new(opts).build_plan(&db).unwrap();
        assert!(matches!(plan.actions[0], PlanAction::UpdateReservation(_)));

        let notifier = NullNotifier;
        PlanExecutor::new(&mut db, &notifier).execute(&plan).unwrap();

        let stored = db.get_reservation(r.id()).unwrap().unwrap();
        assert_eq!(stored.duration_minutes(), 60);
        assert_eq!(stored.end_time(), t("20:00"));
    }

    #[test]
    fn test_duration_growth_into_neighbor_rejected() {
        let mut db = create_test_database();
        let restaurant = sample_restaurant();
        db.insert_restaurant(&restaurant).unwrap();
        let table = sample_table(restaurant.id(), "T1", 4);
        db.insert_table(&table).unwrap();

        let seat = |start: &str| {
            Reservation::builder(restaurant.id(), table.id(), date(), t(start))
                .customer_name("Ada")
                .phone("555-0100")
                .party_size(2)
                .duration_minutes(60)
                .build()
                .unwrap()
        };
        let first = seat("12:00");
        assert!(db.try_create_reservation_atomic(&first).unwrap());
        assert!(db.try_create_reservation_atomic(&seat("13:00")).unwrap());

        // 12:00 + 180 would run through the neighboring 13:00-14:00 booking
        let mut opts = ModifyOptions::new(first.id());
        opts.duration_minutes = Some(180);
        let result = ModifyPlan::new(opts).build_plan(&db);
        assert!(matches!(result, Err(Error::SlotUnavailable { .. })));

        // The stored interval is untouched
        let stored = db.get_reservation(first.id()).unwrap().unwrap();
        assert_eq!(stored.end_time(), t("13:00"));
    }

    #[test]
    fn test_modify_start_time_revalidates_and_moves() {
        let mut db = create_test_database();
        let restaurant = sample_restaurant();
        db.insert_restaurant(&restaurant).unwrap();
        let table = sample_table(restaurant.id(), "T1", 4);
        db.insert_table(&table).unwrap();
        let r = booked(&mut db, restaurant.id(), table.id(), "19:00");

        let mut opts = ModifyOptions::new(r.id());
        opts.start_time = Some(t("12:00"));
        let plan = ModifyPlan::new(opts).build_plan(&db).unwrap();
        assert!(matches!(plan.actions[0], PlanAction::UpdateReservation(_)));

        let notifier = NullNotifier;
        PlanExecutor::new(&mut db, &notifier).execute(&plan).unwrap();

        let stored = db.get_reservation(r.id()).unwrap().unwrap();
        assert_eq!(stored.start_time(), t("12:00"));
        assert_eq!(stored.end_time(), t("13:30"));
    }

    #[test]
    fn test_modify_to_occupied_slot_fails() {
        let mut db = create_test_database();
        let restaurant = sample_restaurant();
        db.insert_restaurant(&restaurant).unwrap();
        let table = sample_table(restaurant.id(), "T1", 4);
        db.insert_table(&table).unwrap();
        let r = booked(&mut db, restaurant.id(), table.id(), "12:00");
        let _other = booked(&mut db, restaurant.id(), table.id(), "19:00");

        let mut opts = ModifyOptions::new(r.id());
        opts.start_time = Some(t("19:30"));
        let result = ModifyPlan::new(opts).build_plan(&db);
        assert!(matches!(result, Err(Error::SlotUnavailable { .. })));
    }

    #[test]
    fn test_modify_shift_within_own_interval_succeeds() {
        let mut db = create_test_database();
        let restaurant = sample_restaurant();
        db.insert_restaurant(&restaurant).unwrap();
        let table = sample_table(restaurant.id(), "T1", 4);
        db.insert_table(&table).unwrap();
        let r = booked(&mut db, restaurant.id(), table.id(), "19:00");

        // 19:30 overlaps the reservation's own 19:00-20:30 interval only
        let mut opts = ModifyOptions::new(r.id());
        opts.start_time = Some(t("19:30"));
        let plan = ModifyPlan::new(opts).build_plan(&db).unwrap();
        let notifier = NullNotifier;
        PlanExecutor::new(&mut db, &notifier).execute(&plan).unwrap();

        let stored = db.get_reservation(r.id()).unwrap().unwrap();
        assert_eq!(stored.start_time(), t("19:30"));
    }

    #[test]
    fn test_modify_party_size_can_move_table() {
        let mut db = create_test_database();
        let restaurant = sample_restaurant();
        db.insert_restaurant(&restaurant).unwrap();
        let small = sample_table(restaurant.id(), "T2", 2);
        let large = sample_table(restaurant.id(), "T6", 6);
        db.insert_table(&small).unwrap();
        db.insert_table(&large).unwrap();

        let r = Reservation::builder(restaurant.id(), small.id(), date(), t("12:00"))
            .customer_name("Ada")
            .phone("555-0100")
            .party_size(2)
            .duration_minutes(90)
            .build()
            .unwrap();
        assert!(db.try_create_reservation_atomic(&r).unwrap());

        let mut opts = ModifyOptions::new(r.id());
        opts.party_size = Some(5);
        let plan = ModifyPlan::new(opts).build_plan(&db).unwrap();
        let notifier = NullNotifier;
        PlanExecutor::new(&mut db, &notifier).execute(&plan).unwrap();

        let stored = db.get_reservation(r.id()).unwrap().unwrap();
        assert_eq!(stored.table_id(), large.id());
        assert_eq!(stored.party_size(), 5);
    }

    #[test]
    fn test_modify_cancelled_rejected() {
        let mut db = create_test_database();
        let restaurant = sample_restaurant();
        db.insert_restaurant(&restaurant).unwrap();
        let table = sample_table(restaurant.id(), "T1", 4);
        db.insert_table(&table).unwrap();
        let r = booked(&mut db, restaurant.id(), table.id(), "19:00");
        db.update_reservation_status(r.id(), ReservationStatus::Cancelled)
            .unwrap();

        let mut opts = ModifyOptions::new(r.id());
        opts.customer_name = Some("Grace".to_string());
        let result = ModifyPlan::new(opts).build_plan(&db);
        assert!(matches!(result, Err(Error::CannotModifyCancelled { .. })));
    }
}
