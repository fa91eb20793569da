//! Best-fit table allocation.
//!
//! Given a booking request, the allocator caps the duration during peak
//! hours, validates operating hours, and picks the smallest free table that
//! seats the party.

use chrono::NaiveDate;
use uuid::Uuid;

use crate::error::{Error, Result};
use crate::model::{DiningTable, Restaurant};
use crate::time_grid::ClockTime;

use super::conflict::{has_conflict, ReservationLookup};

/// A request for a table on a given date and time.
#[derive(Debug, Clone, Copy)]
pub struct AllocationRequest {
    /// The requested date.
    pub date: NaiveDate,
    /// The requested start time.
    pub start_time: ClockTime,
    /// Number of guests.
    pub party_size: u32,
    /// Requested duration in minutes, before any peak-hour cap.
    pub duration_minutes: u32,
}

/// A successful allocation: the chosen table and the effective interval.
#[derive(Debug, Clone)]
pub struct Allocation {
    /// The chosen table.
    pub table: DiningTable,
    /// Start of the booked interval.
    pub start_time: ClockTime,
    /// End of the booked interval.
    pub end_time: ClockTime,
    /// Effective duration after any peak-hour cap.
    pub effective_duration: u32,
    /// Whether the start time falls in the restaurant's peak window.
    pub is_peak_hour: bool,
}

/// Returns the duration a request is actually granted, applying the
/// restaurant's peak-hour cap.
///
/// The cap only shortens: an off-peak request, or a peak request already at
/// or under the cap, keeps its requested duration.
#[must_use]
pub fn effective_duration(restaurant: &Restaurant, start: ClockTime, requested: u32) -> u32 {
    match restaurant.peak() {
        Some(peak) if peak.contains(start) && requested > peak.max_duration_minutes => {
            peak.max_duration_minutes
        }
        _ => requested,
    }
}

/// Allocates the best-fitting free table for a request.
///
/// Candidate tables must be active and seat the party; they are tried in
/// ascending capacity order (stable, so equal-capacity tables keep their
/// input order) and the first conflict-free one wins.
///
/// # Errors
///
/// - [`Error::OutOfHours`] if the capped interval leaves operating hours
/// - [`Error::NoCapacity`] if no active table seats the party
/// - [`Error::NoAvailability`] if every candidate is already booked
/// - Any lookup error from the conflict scan
pub fn allocate(
    lookup: &dyn ReservationLookup,
    restaurant: &Restaurant,
    tables: &[DiningTable],
    request: &AllocationRequest,
) -> Result<Allocation> {
    let effective = effective_duration(restaurant, request.start_time, request.duration_minutes);
    let end_time = request.start_time.add_minutes(effective);

    // end > start also rejects intervals that wrapped past midnight
    if request.start_time < restaurant.opening_time()
        || end_time > restaurant.closing_time()
        || end_time <= request.start_time
    {
        return Err(Error::OutOfHours {
            start: request.start_time,
            end: end_time,
            opening: restaurant.opening_time(),
            closing: restaurant.closing_time(),
        });
    }

    let mut candidates: Vec<&DiningTable> = tables
        .iter()
        .filter(|t| t.is_active() && t.capacity() >= request.party_size)
        .collect();
    if candidates.is_empty() {
        return Err(Error::NoCapacity {
            party_size: request.party_size,
        });
    }
    candidates.sort_by_key(|t| t.capacity());

    for table in candidates {
        if !has_conflict(
            lookup,
            table.id(),
            request.date,
            request.start_time,
            end_time,
            None,
        )? {
            log::debug!(
                "allocated table {} (capacity {}) for party of {} at {}",
                table.table_number(),
                table.capacity(),
                request.party_size,
                request.start_time
            );
            return Ok(Allocation {
                table: table.clone(),
                start_time: request.start_time,
                end_time,
                effective_duration: effective,
                is_peak_hour: restaurant.is_peak_hour(request.start_time),
            });
        }
    }

    Err(Error::NoAvailability {
        date: request.date,
        start_time: request.start_time,
    })
}

/// Checks a single slot the way availability enumeration does: capacity and
/// conflicts only, no operating-hours or peak logic.
///
/// Returns the best-fitting free table, or `None` when every candidate is
/// booked or too small.
///
/// # Errors
///
/// Returns an error if the conflict scan fails.
pub fn check_slot(
    lookup: &dyn ReservationLookup,
    tables: &[DiningTable],
    date: NaiveDate,
    start: ClockTime,
    end: ClockTime,
    party_size: u32,
    exclude: Option<Uuid>,
) -> Result<Option<DiningTable>> {
    let mut candidates: Vec<&DiningTable> = tables
        .iter()
        .filter(|t| t.is_active() && t.capacity() >= party_size)
        .collect();
    candidates.sort_by_key(|t| t.capacity());

    for table in candidates {
        if !has_conflict(lookup, table.id(), date, start, end, exclude)? {
            return Ok(Some(table.clone()));
        }
    }
    Ok(None)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::engine::conflict::StaticLookup;
    use crate::model::{PeakWindow, Reservation};

    fn t(s: &str) -> ClockTime {
        s.parse().unwrap()
    }

    fn date() -> NaiveDate {
        NaiveDate::from_ymd_opt(2026, 9, 1).unwrap()
    }

    fn restaurant() -> Restaurant {
        Restaurant::builder("Test", t("10:00"), t("22:00"))
            .peak(PeakWindow {
                start: t("18:00"),
                end: t("21:00"),
                max_duration_minutes: 90,
            })
            .build()
            .unwrap()
    }

    fn table(restaurant_id: Uuid, number: &str, capacity: u32) -> DiningTable {
        DiningTable::builder(restaurant_id, number, capacity)
            .build()
            .unwrap()
    }

    fn request(start: &str, party_size: u32, duration: u32) -> AllocationRequest {
        AllocationRequest {
            date: date(),
            start_time: t(start),
            party_size,
            duration_minutes: duration,
        }
    }

    fn booking(table_id: Uuid, start: &str, duration: u32) -> Reservation {
        Reservation::builder(Uuid::new_v4(), table_id, date(), t(start))
            .customer_name("Ada")
            .phone("555-0100")
            .party_size(2)
            .duration_minutes(duration)
            .build()
            .unwrap()
    }

    #[test]
    fn test_peak_cap_applies_only_above_cap() {
        let r = restaurant();
        // 19:00 is peak: 180 requested, capped to 90
        assert_eq!(effective_duration(&r, t("19:00"), 180), 90);
        // At or under the cap the request is kept
        assert_eq!(effective_duration(&r, t("19:00"), 60), 60);
        assert_eq!(effective_duration(&r, t("19:00"), 90), 90);
        // Off peak the request is kept
        assert_eq!(effective_duration(&r, t("12:00"), 180), 180);
        // Peak end is exclusive
        assert_eq!(effective_duration(&r, t("21:00"), 180), 180);
    }

    #[test]
    fn test_peak_capped_allocation_end_time() {
        let r = restaurant();
        let tables = vec![table(r.id(), "T1", 4)];
        let lookup = StaticLookup::default();

        let allocation = allocate(&lookup, &r, &tables, &request("19:00", 2, 180)).unwrap();
        assert_eq!(allocation.effective_duration, 90);
        assert_eq!(allocation.end_time, t("20:30"));
        assert!(allocation.is_peak_hour);
    }

    #[test]
    fn test_best_fit_prefers_smallest_table() {
        let r = restaurant();
        let tables = vec![
            table(r.id(), "T6", 6),
            table(r.id(), "T2", 2),
            table(r.id(), "T4", 4),
        ];
        let lookup = StaticLookup::default();

        let allocation = allocate(&lookup, &r, &tables, &request("12:00", 3, 120)).unwrap();
        assert_eq!(allocation.table.capacity(), 4);
    }

    #[test]
    fn test_best_fit_skips_conflicting_table() {
        let r = restaurant();
        let small = table(r.id(), "T4", 4);
        let large = table(r.id(), "T6", 6);
        let lookup = StaticLookup::new(vec![booking(small.id(), "12:00", 120)]);

        let allocation = allocate(
            &lookup,
            &r,
            &[small, large.clone()],
            &request("12:30", 3, 60),
        )
        .unwrap();
        assert_eq!(allocation.table.id(), large.id());
    }

    #[test]
    fn test_out_of_hours_rejected() {
        let r = restaurant();
        let tables = vec![table(r.id(), "T1", 4)];
        let lookup = StaticLookup::default();

        // 23:00 is after closing
        let result = allocate(&lookup, &r, &tables, &request("23:00", 2, 60));
        assert!(matches!(result, Err(Error::OutOfHours { .. })));

        // Ends past closing
        let result = allocate(&lookup, &r, &tables, &request("21:30", 2, 60));
        assert!(matches!(result, Err(Error::OutOfHours { .. })));

        // Before opening
        let result = allocate(&lookup, &r, &tables, &request("09:00", 2, 60));
        assert!(matches!(result, Err(Error::OutOfHours { .. })));

        // Ending exactly at closing is allowed
        assert!(allocate(&lookup, &r, &tables, &request("21:00", 2, 60)).is_ok());
    }

    #[test]
    fn test_no_capacity_and_no_availability() {
        let r = restaurant();
        let small = table(r.id(), "T2", 2);

        let lookup = StaticLookup::default();
        let result = allocate(&lookup, &r, &[small.clone()], &request("12:00", 5, 60));
        assert!(matches!(result, Err(Error::NoCapacity { party_size: 5 })));

        // Inactive tables never count as capacity
        let inactive = DiningTable::builder(r.id(), "T8", 8)
            .is_active(false)
            .build()
            .unwrap();
        let result = allocate(&lookup, &r, &[inactive], &request("12:00", 5, 60));
        assert!(matches!(result, Err(Error::NoCapacity { .. })));

        let lookup = StaticLookup::new(vec![booking(small.id(), "12:00", 120)]);
        let result = allocate(&lookup, &r, &[small], &request("12:30", 2, 60));
        assert!(matches!(result, Err(Error::NoAvailability { .. })));
    }

    #[test]
    fn test_check_slot_ignores_hours_and_peak() {
        let r = restaurant();
        let tables = vec![table(r.id(), "T1", 4)];
        let lookup = StaticLookup::default();

        // 23:00-01:00 is far outside operating hours, check_slot doesn't care
        let found = check_slot(&lookup, &tables, date(), t("23:00"), t("23:59"), 2, None).unwrap();
        assert!(found.is_some());

        // But capacity still filters
        let found = check_slot(&lookup, &tables, date(), t("12:00"), t("13:00"), 9, None).unwrap();
        assert!(found.is_none());
    }
}
