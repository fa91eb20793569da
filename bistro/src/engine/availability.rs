//! Availability enumeration over the fixed slot grid.

use chrono::NaiveDate;
use serde::Serialize;

use crate::error::Result;
use crate::model::{DiningTable, Restaurant};
use crate::time_grid::{slot_grid, ClockTime};

use super::allocator::{check_slot, effective_duration};
use super::conflict::ReservationLookup;

/// One bookable slot in an availability listing.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct AvailabilitySlot {
    /// Candidate start time.
    pub start_time: ClockTime,
    /// End of the interval the slot would book.
    pub end_time: ClockTime,
    /// Whether the slot starts inside the restaurant's peak window.
    pub is_peak_hour: bool,
}

/// Enumerates the bookable slots for a party on a date.
///
/// Candidate start times walk the interval grid across operating hours.
/// A slot is discarded up front when the *requested* duration would run past
/// closing; the slots that survive are probed with the capacity-and-conflict
/// check using the duration a booking would actually receive (peak-capped),
/// so the listing matches what a subsequent reservation would book.
///
/// Slots come back in ascending start-time order.
///
/// # Errors
///
/// Returns an error if a conflict scan fails.
pub fn enumerate_availability(
    lookup: &dyn ReservationLookup,
    restaurant: &Restaurant,
    tables: &[DiningTable],
    date: NaiveDate,
    party_size: u32,
    duration_minutes: u32,
    interval_minutes: u16,
) -> Result<Vec<AvailabilitySlot>> {
    let mut slots = Vec::new();

    for start in slot_grid(
        restaurant.opening_time(),
        restaurant.closing_time(),
        interval_minutes,
    ) {
        let requested_end = start.add_minutes(duration_minutes);
        if requested_end > restaurant.closing_time() || requested_end <= start {
            continue;
        }

        let effective = effective_duration(restaurant, start, duration_minutes);
        let end = start.add_minutes(effective);
        if check_slot(lookup, tables, date, start, end, party_size, None)?.is_some() {
            slots.push(AvailabilitySlot {
                start_time: start,
                end_time: end,
                is_peak_hour: restaurant.is_peak_hour(start),
            });
        }
    }

    Ok(slots)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::engine::conflict::StaticLookup;
    use crate::model::{PeakWindow, Reservation};
    use uuid::Uuid;

    fn t(s: &str) -> ClockTime {
        s.parse().unwrap()
    }

    fn date() -> NaiveDate {
        NaiveDate::from_ymd_opt(2026, 9, 1).unwrap()
    }

    fn table(restaurant_id: Uuid, number: &str, capacity: u32) -> DiningTable {
        DiningTable::builder(restaurant_id, number, capacity)
            .build()
            .unwrap()
    }

    #[test]
    fn test_short_day_enumeration() {
        // Open 10:00-14:00, 120-minute request: candidates 10:00..13:30,
        // slots whose end passes 14:00 are discarded, leaving 10:00-12:00.
        let restaurant = Restaurant::builder("Test", t("10:00"), t("14:00"))
            .build()
            .unwrap();
        let tables = vec![table(restaurant.id(), "T1", 4)];
        let lookup = StaticLookup::default();

        let slots =
            enumerate_availability(&lookup, &restaurant, &tables, date(), 2, 120, 30).unwrap();

        let starts: Vec<String> = slots.iter().map(|s| s.start_time.to_string()).collect();
        assert_eq!(starts, ["10:00", "10:30", "11:00", "11:30", "12:00"]);
        assert_eq!(slots[4].end_time, t("14:00"));
    }

    #[test]
    fn test_booked_slots_are_skipped() {
        let restaurant = Restaurant::builder("Test", t("10:00"), t("14:00"))
            .build()
            .unwrap();
        let t1 = table(restaurant.id(), "T1", 4);
        let booking = Reservation::builder(restaurant.id(), t1.id(), date(), t("11:00"))
            .customer_name("Ada")
            .phone("555-0100")
            .party_size(2)
            .duration_minutes(60)
            .build()
            .unwrap();
        let lookup = StaticLookup::new(vec![booking]);

        let slots =
            enumerate_availability(&lookup, &restaurant, &[t1], date(), 2, 60, 30).unwrap();

        let starts: Vec<String> = slots.iter().map(|s| s.start_time.to_string()).collect();
        // 10:30 and on through 11:30 would overlap the 11:00-12:00 booking;
        // 10:00-11:00 touches it and is allowed
        assert_eq!(starts, ["10:00", "12:00", "12:30", "13:00"]);
    }

    #[test]
    fn test_peak_slots_flagged_and_capped() {
        let restaurant = Restaurant::builder("Test", t("10:00"), t("22:00"))
            .peak(PeakWindow {
                start: t("18:00"),
                end: t("21:00"),
                max_duration_minutes: 90,
            })
            .build()
            .unwrap();
        let tables = vec![table(restaurant.id(), "T1", 4)];
        let lookup = StaticLookup::default();

        let slots =
            enumerate_availability(&lookup, &restaurant, &tables, date(), 2, 120, 30).unwrap();

        let peak_slot = slots.iter().find(|s| s.start_time == t("19:00")).unwrap();
        assert!(peak_slot.is_peak_hour);
        assert_eq!(peak_slot.end_time, t("20:30"));

        let off_peak = slots.iter().find(|s| s.start_time == t("12:00")).unwrap();
        assert!(!off_peak.is_peak_hour);
        assert_eq!(off_peak.end_time, t("14:00"));
    }

    #[test]
    fn test_no_fitting_table_yields_empty() {
        let restaurant = Restaurant::builder("Test", t("10:00"), t("14:00"))
            .build()
            .unwrap();
        let tables = vec![table(restaurant.id(), "T1", 2)];
        let lookup = StaticLookup::default();

        let slots =
            enumerate_availability(&lookup, &restaurant, &tables, date(), 6, 60, 30).unwrap();
        assert!(slots.is_empty());
    }

    #[test]
    fn test_slots_are_ascending() {
        let restaurant = Restaurant::builder("Test", t("10:00"), t("22:00"))
            .build()
            .unwrap();
        let tables = vec![table(restaurant.id(), "T1", 4)];
        let lookup = StaticLookup::default();

        let slots =
            enumerate_availability(&lookup, &restaurant, &tables, date(), 2, 60, 30).unwrap();
        assert!(slots.windows(2).all(|w| w[0].start_time < w[1].start_time));
    }
}
