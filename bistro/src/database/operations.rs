//! Database CRUD operations for restaurants, tables, reservations and the
//! waitlist.
//!
//! Mutating operations that must observe a consistent view of the booking
//! table run inside IMMEDIATE transactions; the `try_*_atomic` methods
//! re-check interval conflicts under the write lock so two racing bookings
//! can never both commit.

use chrono::{DateTime, NaiveDate, TimeZone, Utc};
use rusqlite::{params, Connection, OptionalExtension, TransactionBehavior};
use uuid::Uuid;

use crate::error::Result;
use crate::model::{
    DiningTable, PeakWindow, Reservation, ReservationStatus, Restaurant, WaitlistEntry,
    WaitlistStatus,
};
use crate::time_grid::{ranges_overlap, ClockTime};

use super::connection::Database;
use super::schema::{
    INSERT_DINING_TABLE, INSERT_RESERVATION, INSERT_RESTAURANT, INSERT_WAITLIST_ENTRY,
};

const ISO_DATE_FORMAT: &str = "%Y-%m-%d";

fn date_to_text(date: NaiveDate) -> String {
    date.format(ISO_DATE_FORMAT).to_string()
}

fn conversion_err(e: impl std::error::Error + Send + Sync + 'static) -> rusqlite::Error {
    rusqlite::Error::ToSqlConversionFailure(Box::new(e))
}

fn text_to_date(text: &str) -> rusqlite::Result<NaiveDate> {
    NaiveDate::parse_from_str(text, ISO_DATE_FORMAT).map_err(conversion_err)
}

fn text_to_uuid(text: &str) -> rusqlite::Result<Uuid> {
    Uuid::parse_str(text).map_err(conversion_err)
}

fn minutes_to_clock(minutes: i64) -> rusqlite::Result<ClockTime> {
    let minutes = u16::try_from(minutes).map_err(conversion_err)?;
    ClockTime::new(minutes).map_err(conversion_err)
}

fn unix_secs_to_datetime(secs: i64) -> DateTime<Utc> {
    Utc.timestamp_opt(secs, 0).single().unwrap_or_default()
}

/// Helper function to deserialize a restaurant from a database row.
///
/// Expects row fields in this order: id, name, `opening_time`, `closing_time`,
/// `peak_start`, `peak_end`, `peak_max_duration`.
fn row_to_restaurant(row: &rusqlite::Row<'_>) -> rusqlite::Result<Restaurant> {
    let id: String = row.get(0)?;
    let name: String = row.get(1)?;
    let opening: i64 = row.get(2)?;
    let closing: i64 = row.get(3)?;
    let peak_start: Option<i64> = row.get(4)?;
    let peak_end: Option<i64> = row.get(5)?;
    let peak_max: Option<i64> = row.get(6)?;

    let mut builder = Restaurant::builder(&name, minutes_to_clock(opening)?, minutes_to_clock(closing)?)
        .id(text_to_uuid(&id)?);

    if let (Some(start), Some(end), Some(max)) = (peak_start, peak_end, peak_max) {
        builder = builder.peak(PeakWindow {
            start: minutes_to_clock(start)?,
            end: minutes_to_clock(end)?,
            max_duration_minutes: u32::try_from(max).map_err(conversion_err)?,
        });
    }

    builder.build().map_err(conversion_err)
}

/// Helper function to deserialize a dining table from a database row.
///
/// Expects row fields in this order: id, `restaurant_id`, `table_number`,
/// capacity, `is_active`.
fn row_to_table(row: &rusqlite::Row<'_>) -> rusqlite::Result<DiningTable> {
    let id: String = row.get(0)?;
    let restaurant_id: String = row.get(1)?;
    let table_number: String = row.get(2)?;
    let capacity: i64 = row.get(3)?;
    let is_active: bool = row.get(4)?;

    DiningTable::builder(
        text_to_uuid(&restaurant_id)?,
        &table_number,
        u32::try_from(capacity).map_err(conversion_err)?,
    )
    .id(text_to_uuid(&id)?)
    .is_active(is_active)
    .build()
    .map_err(conversion_err)
}

/// Helper function to deserialize a reservation from a database row.
///
/// Expects row fields in this order: id, `restaurant_id`, `table_id`,
/// `customer_name`, phone, `party_size`, date, `start_time`, `end_time`,
/// `duration_minutes`, status, `created_at`.
fn row_to_reservation(row: &rusqlite::Row<'_>) -> rusqlite::Result<Reservation> {
    let id: String = row.get(0)?;
    let restaurant_id: String = row.get(1)?;
    let table_id: String = row.get(2)?;
    let customer_name: String = row.get(3)?;
    let phone: String = row.get(4)?;
    let party_size: i64 = row.get(5)?;
    let date: String = row.get(6)?;
    let start_time: i64 = row.get(7)?;
    let duration_minutes: i64 = row.get(9)?;
    let status: String = row.get(10)?;
    let created_secs: i64 = row.get(11)?;

    let status = ReservationStatus::parse(&status)
        .map_err(|e| rusqlite::Error::InvalidColumnType(10, e, rusqlite::types::Type::Text))?;

    Reservation::builder(
        text_to_uuid(&restaurant_id)?,
        text_to_uuid(&table_id)?,
        text_to_date(&date)?,
        minutes_to_clock(start_time)?,
    )
    .id(text_to_uuid(&id)?)
    .customer_name(&customer_name)
    .phone(&phone)
    .party_size(u32::try_from(party_size).map_err(conversion_err)?)
    .duration_minutes(u32::try_from(duration_minutes).map_err(conversion_err)?)
    .status(status)
    .created_at(unix_secs_to_datetime(created_secs))
    .build()
    .map_err(conversion_err)
}

/// Helper function to deserialize a waitlist entry from a database row.
///
/// Expects row fields in this order: id, `restaurant_id`, `customer_name`,
/// phone, `party_size`, date, `preferred_time`, status, `created_at`.
fn row_to_waitlist_entry(row: &rusqlite::Row<'_>) -> rusqlite::Result<WaitlistEntry> {
    let id: String = row.get(0)?;
    let restaurant_id: String = row.get(1)?;
    let customer_name: String = row.get(2)?;
    let phone: String = row.get(3)?;
    let party_size: i64 = row.get(4)?;
    let date: String = row.get(5)?;
    let preferred_time: i64 = row.get(6)?;
    let status: String = row.get(7)?;
    let created_secs: i64 = row.get(8)?;

    let status = WaitlistStatus::parse(&status)
        .map_err(|e| rusqlite::Error::InvalidColumnType(7, e, rusqlite::types::Type::Text))?;

    WaitlistEntry::builder(
        text_to_uuid(&restaurant_id)?,
        text_to_date(&date)?,
        minutes_to_clock(preferred_time)?,
    )
    .id(text_to_uuid(&id)?)
    .customer_name(&customer_name)
    .phone(&phone)
    .party_size(u32::try_from(party_size).map_err(conversion_err)?)
    .status(status)
    .created_at(unix_secs_to_datetime(created_secs))
    .build()
    .map_err(conversion_err)
}

// SQL statements for read operations

const SELECT_RESTAURANT: &str = r"
    SELECT id, name, opening_time, closing_time, peak_start, peak_end, peak_max_duration
    FROM restaurants
    WHERE id = ?
";

const LIST_RESTAURANTS: &str = r"
    SELECT id, name, opening_time, closing_time, peak_start, peak_end, peak_max_duration
    FROM restaurants
    ORDER BY name
";

const SELECT_TABLES: &str = r"
    SELECT id, restaurant_id, table_number, capacity, is_active
    FROM dining_tables
    WHERE restaurant_id = ?
    ORDER BY rowid
";

const SELECT_ACTIVE_TABLES: &str = r"
    SELECT id, restaurant_id, table_number, capacity, is_active
    FROM dining_tables
    WHERE restaurant_id = ? AND is_active = 1
    ORDER BY rowid
";

const COUNT_TABLE_NUMBER: &str = r"
    SELECT COUNT(*) FROM dining_tables
    WHERE restaurant_id = ? AND table_number = ?
";

const SELECT_RESERVATION: &str = r"
    SELECT id, restaurant_id, table_id, customer_name, phone, party_size,
           date, start_time, end_time, duration_minutes, status, created_at
    FROM reservations
    WHERE id = ?
";

const SELECT_RESERVATIONS_FOR_TABLE: &str = r"
    SELECT id, restaurant_id, table_id, customer_name, phone, party_size,
           date, start_time, end_time, duration_minutes, status, created_at
    FROM reservations
    WHERE table_id = ? AND date = ? AND status != 'cancelled'
    ORDER BY start_time
";

const LIST_RESERVATIONS_FOR_DATE: &str = r"
    SELECT id, restaurant_id, table_id, customer_name, phone, party_size,
           date, start_time, end_time, duration_minutes, status, created_at
    FROM reservations
    WHERE restaurant_id = ? AND date = ? AND status != 'cancelled'
    ORDER BY start_time
";

const UPDATE_RESERVATION_STATUS: &str = r"
    UPDATE reservations SET status = ? WHERE id = ?
";

const UPDATE_RESERVATION_FULL: &str = r"
    UPDATE reservations
    SET table_id = ?, customer_name = ?, phone = ?, party_size = ?,
        date = ?, start_time = ?, end_time = ?, duration_minutes = ?
    WHERE id = ?
";

const UPDATE_RESERVATION_CONTACT: &str = r"
    UPDATE reservations
    SET customer_name = ?, phone = ?, duration_minutes = ?
    WHERE id = ?
";

const SELECT_WAITLIST_ENTRY: &str = r"
    SELECT id, restaurant_id, customer_name, phone, party_size,
           date, preferred_time, status, created_at
    FROM waitlist
    WHERE id = ?
";

const LIST_WAITING_ENTRIES: &str = r"
    SELECT id, restaurant_id, customer_name, phone, party_size,
           date, preferred_time, status, created_at
    FROM waitlist
    WHERE restaurant_id = ? AND date = ? AND status = 'waiting'
    ORDER BY created_at, rowid
";

const SELECT_PROMOTION_CANDIDATE: &str = r"
    SELECT id, restaurant_id, customer_name, phone, party_size,
           date, preferred_time, status, created_at
    FROM waitlist
    WHERE restaurant_id = ? AND date = ? AND status = 'waiting' AND party_size <= ?
    ORDER BY created_at, rowid
    LIMIT 1
";

const UPDATE_WAITLIST_STATUS: &str = r"
    UPDATE waitlist SET status = ? WHERE id = ?
";

const MARK_WAITLIST_NOTIFIED: &str = r"
    UPDATE waitlist SET status = 'notified' WHERE id = ? AND status = 'waiting'
";

/// Fetches the non-cancelled reservations for a table on a date.
///
/// Free function over a connection so it can run both standalone and inside
/// an open transaction.
///
/// # Errors
///
/// Returns an error if the query fails.
pub fn reservations_for_table(
    conn: &Connection,
    table_id: Uuid,
    date: NaiveDate,
) -> Result<Vec<Reservation>> {
    let mut stmt = conn.prepare(SELECT_RESERVATIONS_FOR_TABLE)?;
    let rows = stmt.query_map(
        params![table_id.to_string(), date_to_text(date)],
        row_to_reservation,
    )?;
    let mut reservations = Vec::new();
    for row in rows {
        reservations.push(row?);
    }
    Ok(reservations)
}

/// Fetches a reservation by id.
///
/// # Errors
///
/// Returns an error if the query fails.
pub fn get_reservation(conn: &Connection, id: Uuid) -> Result<Option<Reservation>> {
    let reservation = conn
        .query_row(SELECT_RESERVATION, params![id.to_string()], row_to_reservation)
        .optional()?;
    Ok(reservation)
}

/// Returns `true` if `[start, end)` overlaps any reservation in `existing`,
/// ignoring the reservation identified by `exclude`.
fn any_overlap(
    existing: &[Reservation],
    start: ClockTime,
    end: ClockTime,
    exclude: Option<Uuid>,
) -> bool {
    existing.iter().any(|r| {
        exclude != Some(r.id()) && ranges_overlap(r.start_time(), r.end_time(), start, end)
    })
}

impl Database {
    /// Inserts a restaurant.
    ///
    /// # Errors
    ///
    /// Returns an error if the insert fails.
    pub fn insert_restaurant(&mut self, restaurant: &Restaurant) -> Result<()> {
        let peak = restaurant.peak();
        self.conn.execute(
            INSERT_RESTAURANT,
            params![
                restaurant.id().to_string(),
                restaurant.name(),
                i64::from(restaurant.opening_time().minutes()),
                i64::from(restaurant.closing_time().minutes()),
                peak.map(|p| i64::from(p.start.minutes())),
                peak.map(|p| i64::from(p.end.minutes())),
                peak.map(|p| i64::from(p.max_duration_minutes)),
            ],
        )?;
        Ok(())
    }

    /// Fetches a restaurant by id.
    ///
    /// # Errors
    ///
    /// Returns an error if the query fails.
    pub fn get_restaurant(&self, id: Uuid) -> Result<Option<Restaurant>> {
        let restaurant = self
            .conn
            .query_row(SELECT_RESTAURANT, params![id.to_string()], row_to_restaurant)
            .optional()?;
        Ok(restaurant)
    }

    /// Lists all restaurants ordered by name.
    ///
    /// # Errors
    ///
    /// Returns an error if the query fails.
    pub fn list_restaurants(&self) -> Result<Vec<Restaurant>> {
        let mut stmt = self.conn.prepare(LIST_RESTAURANTS)?;
        let rows = stmt.query_map([], row_to_restaurant)?;
        let mut restaurants = Vec::new();
        for row in rows {
            restaurants.push(row?);
        }
        Ok(restaurants)
    }

    /// Inserts a dining table, enforcing table-number uniqueness within the
    /// restaurant.
    ///
    /// # Errors
    ///
    /// Returns [`crate::Error::TableNumberConflict`] if the restaurant already
    /// has a table with this number, or a database error if the insert fails.
    pub fn insert_table(&mut self, table: &DiningTable) -> Result<()> {
        let tx = self
            .conn
            .transaction_with_behavior(TransactionBehavior::Immediate)?;

        let count: i64 = tx.query_row(
            COUNT_TABLE_NUMBER,
            params![table.restaurant_id().to_string(), table.table_number()],
            |row| row.get(0),
        )?;
        if count > 0 {
            return Err(crate::Error::TableNumberConflict {
                restaurant_id: table.restaurant_id(),
                table_number: table.table_number().to_string(),
            });
        }

        tx.execute(
            INSERT_DINING_TABLE,
            params![
                table.id().to_string(),
                table.restaurant_id().to_string(),
                table.table_number(),
                i64::from(table.capacity()),
                table.is_active(),
            ],
        )?;

        tx.commit()?;
        Ok(())
    }

    /// Lists every table of a restaurant in insertion order.
    ///
    /// # Errors
    ///
    /// Returns an error if the query fails.
    pub fn tables_for_restaurant(&self, restaurant_id: Uuid) -> Result<Vec<DiningTable>> {
        let mut stmt = self.conn.prepare(SELECT_TABLES)?;
        let rows = stmt.query_map(params![restaurant_id.to_string()], row_to_table)?;
        let mut tables = Vec::new();
        for row in rows {
            tables.push(row?);
        }
        Ok(tables)
    }

    /// Lists the active tables of a restaurant in insertion order.
    ///
    /// The allocator applies its own capacity sort, so insertion order here
    /// keeps the best-fit tie-break deterministic.
    ///
    /// # Errors
    ///
    /// Returns an error if the query fails.
    pub fn active_tables(&self, restaurant_id: Uuid) -> Result<Vec<DiningTable>> {
        let mut stmt = self.conn.prepare(SELECT_ACTIVE_TABLES)?;
        let rows = stmt.query_map(params![restaurant_id.to_string()], row_to_table)?;
        let mut tables = Vec::new();
        for row in rows {
            tables.push(row?);
        }
        Ok(tables)
    }

    /// Fetches a reservation by id.
    ///
    /// # Errors
    ///
    /// Returns an error if the query fails.
    pub fn get_reservation(&self, id: Uuid) -> Result<Option<Reservation>> {
        get_reservation(&self.conn, id)
    }

    /// Lists the non-cancelled reservations of a restaurant for a date,
    /// ascending by start time.
    ///
    /// # Errors
    ///
    /// Returns an error if the query fails.
    pub fn list_reservations(
        &self,
        restaurant_id: Uuid,
        date: NaiveDate,
    ) -> Result<Vec<Reservation>> {
        let mut stmt = self.conn.prepare(LIST_RESERVATIONS_FOR_DATE)?;
        let rows = stmt.query_map(
            params![restaurant_id.to_string(), date_to_text(date)],
            row_to_reservation,
        )?;
        let mut reservations = Vec::new();
        for row in rows {
            reservations.push(row?);
        }
        Ok(reservations)
    }

    /// Updates a reservation's status.
    ///
    /// Returns `true` if a row was updated.
    ///
    /// # Errors
    ///
    /// Returns an error if the update fails.
    pub fn update_reservation_status(
        &mut self,
        id: Uuid,
        status: ReservationStatus,
    ) -> Result<bool> {
        let changed = self.conn.execute(
            UPDATE_RESERVATION_STATUS,
            params![status.as_str(), id.to_string()],
        )?;
        Ok(changed > 0)
    }

    /// Atomically inserts a reservation, re-checking for interval conflicts
    /// under the write lock.
    ///
    /// Returns `true` if the reservation was inserted, `false` if a
    /// conflicting booking appeared since the plan was built.
    ///
    /// # Errors
    ///
    /// Returns an error if the transaction or insert fails.
    pub fn try_create_reservation_atomic(&mut self, reservation: &Reservation) -> Result<bool> {
        let tx = self
            .conn
            .transaction_with_behavior(TransactionBehavior::Immediate)?;

        let existing = reservations_for_table(&tx, reservation.table_id(), reservation.date())?;
        if any_overlap(
            &existing,
            reservation.start_time(),
            reservation.end_time(),
            None,
        ) {
            return Ok(false);
        }

        tx.execute(
            INSERT_RESERVATION,
            params![
                reservation.id().to_string(),
                reservation.restaurant_id().to_string(),
                reservation.table_id().to_string(),
                reservation.customer_name(),
                reservation.phone(),
                i64::from(reservation.party_size()),
                date_to_text(reservation.date()),
                i64::from(reservation.start_time().minutes()),
                i64::from(reservation.end_time().minutes()),
                i64::from(reservation.duration_minutes()),
                reservation.status().as_str(),
                reservation.created_at().timestamp(),
            ],
        )?;

        tx.commit()?;
        Ok(true)
    }

    /// Atomically rewrites a reservation's interval, table and party fields,
    /// re-checking for conflicts under the write lock.
    ///
    /// The reservation's own row is excluded from the conflict scan.
    /// Returns `true` if the update committed, `false` if a conflicting
    /// booking appeared since the plan was built.
    ///
    /// # Errors
    ///
    /// Returns an error if the transaction or update fails.
    pub fn try_update_reservation_atomic(&mut self, reservation: &Reservation) -> Result<bool> {
        let tx = self
            .conn
            .transaction_with_behavior(TransactionBehavior::Immediate)?;

        let existing = reservations_for_table(&tx, reservation.table_id(), reservation.date())?;
        if any_overlap(
            &existing,
            reservation.start_time(),
            reservation.end_time(),
            Some(reservation.id()),
        ) {
            return Ok(false);
        }

        tx.execute(
            UPDATE_RESERVATION_FULL,
            params![
                reservation.table_id().to_string(),
                reservation.customer_name(),
                reservation.phone(),
                i64::from(reservation.party_size()),
                date_to_text(reservation.date()),
                i64::from(reservation.start_time().minutes()),
                i64::from(reservation.end_time().minutes()),
                i64::from(reservation.duration_minutes()),
                reservation.id().to_string(),
            ],
        )?;

        tx.commit()?;
        Ok(true)
    }

    /// Updates a reservation's contact fields and recorded duration without
    /// touching its booked interval.
    ///
    /// # Errors
    ///
    /// Returns an error if the update fails.
    pub fn update_reservation_fields(&mut self, reservation: &Reservation) -> Result<()> {
        self.conn.execute(
            UPDATE_RESERVATION_CONTACT,
            params![
                reservation.customer_name(),
                reservation.phone(),
                i64::from(reservation.duration_minutes()),
                reservation.id().to_string(),
            ],
        )?;
        Ok(())
    }

    /// Inserts a waitlist entry.
    ///
    /// # Errors
    ///
    /// Returns an error if the insert fails.
    pub fn insert_waitlist_entry(&mut self, entry: &WaitlistEntry) -> Result<()> {
        self.conn.execute(
            INSERT_WAITLIST_ENTRY,
            params![
                entry.id().to_string(),
                entry.restaurant_id().to_string(),
                entry.customer_name(),
                entry.phone(),
                i64::from(entry.party_size()),
                date_to_text(entry.date()),
                i64::from(entry.preferred_time().minutes()),
                entry.status().as_str(),
                entry.created_at().timestamp(),
            ],
        )?;
        Ok(())
    }

    /// Fetches a waitlist entry by id.
    ///
    /// # Errors
    ///
    /// Returns an error if the query fails.
    pub fn get_waitlist_entry(&self, id: Uuid) -> Result<Option<WaitlistEntry>> {
        let entry = self
            .conn
            .query_row(
                SELECT_WAITLIST_ENTRY,
                params![id.to_string()],
                row_to_waitlist_entry,
            )
            .optional()?;
        Ok(entry)
    }

    /// Lists the waiting entries for a restaurant and date in FIFO order.
    ///
    /// # Errors
    ///
    /// Returns an error if the query fails.
    pub fn list_waiting_entries(
        &self,
        restaurant_id: Uuid,
        date: NaiveDate,
    ) -> Result<Vec<WaitlistEntry>> {
        let mut stmt = self.conn.prepare(LIST_WAITING_ENTRIES)?;
        let rows = stmt.query_map(
            params![restaurant_id.to_string(), date_to_text(date)],
            row_to_waitlist_entry,
        )?;
        let mut entries = Vec::new();
        for row in rows {
            entries.push(row?);
        }
        Ok(entries)
    }

    /// Finds the earliest waiting entry whose party fits the freed capacity.
    ///
    /// # Errors
    ///
    /// Returns an error if the query fails.
    pub fn earliest_waiting_entry(
        &self,
        restaurant_id: Uuid,
        date: NaiveDate,
        max_party_size: u32,
    ) -> Result<Option<WaitlistEntry>> {
        let entry = self
            .conn
            .query_row(
                SELECT_PROMOTION_CANDIDATE,
                params![
                    restaurant_id.to_string(),
                    date_to_text(date),
                    i64::from(max_party_size)
                ],
                row_to_waitlist_entry,
            )
            .optional()?;
        Ok(entry)
    }

    /// Transitions a waiting entry to notified.
    ///
    /// The guard on the current status makes the promotion idempotent under
    /// racing cancellations; `false` means another writer got there first.
    ///
    /// # Errors
    ///
    /// Returns an error if the update fails.
    pub fn mark_waitlist_notified(&mut self, id: Uuid) -> Result<bool> {
        let changed = self
            .conn
            .execute(MARK_WAITLIST_NOTIFIED, params![id.to_string()])?;
        Ok(changed > 0)
    }

    /// Sets a waitlist entry's status unconditionally.
    ///
    /// Returns `true` if a row was updated.
    ///
    /// # Errors
    ///
    /// Returns an error if the update fails.
    pub fn set_waitlist_status(&mut self, id: Uuid, status: WaitlistStatus) -> Result<bool> {
        let changed = self.conn.execute(
            UPDATE_WAITLIST_STATUS,
            params![status.as_str(), id.to_string()],
        )?;
        Ok(changed > 0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::database::test_util::{create_test_database, sample_restaurant, sample_table};

    fn t(s: &str) -> ClockTime {
        s.parse().unwrap()
    }

    fn date() -> NaiveDate {
        NaiveDate::from_ymd_opt(2026, 9, 1).unwrap()
    }

    fn sample_reservation(restaurant_id: Uuid, table_id: Uuid, start: &str) -> Reservation {
        Reservation::builder(restaurant_id, table_id, date(), t(start))
            .customer_name("Ada")
            .phone("555-0100")
            .party_size(2)
            .duration_minutes(120)
            .build()
            .unwrap()
    }

    #[test]
    fn test_restaurant_round_trip() {
        let mut db = create_test_database();
        let restaurant = sample_restaurant();
        db.insert_restaurant(&restaurant).unwrap();

        let fetched = db.get_restaurant(restaurant.id()).unwrap().unwrap();
        assert_eq!(fetched, restaurant);

        assert!(db.get_restaurant(Uuid::new_v4()).unwrap().is_none());
    }

    #[test]
    fn test_restaurant_without_peak_round_trip() {
        let mut db = create_test_database();
        let restaurant = Restaurant::builder("No Peak", t("10:00"), t("22:00"))
            .build()
            .unwrap();
        db.insert_restaurant(&restaurant).unwrap();

        let fetched = db.get_restaurant(restaurant.id()).unwrap().unwrap();
        assert!(fetched.peak().is_none());
    }

    #[test]
    fn test_table_number_conflict() {
        let mut db = create_test_database();
        let restaurant = sample_restaurant();
        db.insert_restaurant(&restaurant).unwrap();

        db.insert_table(&sample_table(restaurant.id(), "T1", 4)).unwrap();
        let result = db.insert_table(&sample_table(restaurant.id(), "T1", 6));
        assert!(matches!(
            result,
            Err(crate::Error::TableNumberConflict { .. })
        ));
    }

    #[test]
    fn test_active_tables_excludes_inactive() {
        let mut db = create_test_database();
        let restaurant = sample_restaurant();
        db.insert_restaurant(&restaurant).unwrap();

        db.insert_table(&sample_table(restaurant.id(), "T1", 4)).unwrap();
        let inactive = DiningTable::builder(restaurant.id(), "T2", 6)
            .is_active(false)
            .build()
            .unwrap();
        db.insert_table(&inactive).unwrap();

        let active = db.active_tables(restaurant.id()).unwrap();
        assert_eq!(active.len(), 1);
        assert_eq!(active[0].table_number(), "T1");

        let all = db.tables_for_restaurant(restaurant.id()).unwrap();
        assert_eq!(all.len(), 2);
    }

    #[test]
    fn test_reservation_round_trip() {
        let mut db = create_test_database();
        let restaurant = sample_restaurant();
        db.insert_restaurant(&restaurant).unwrap();
        let table = sample_table(restaurant.id(), "T1", 4);
        db.insert_table(&table).unwrap();

        let reservation = sample_reservation(restaurant.id(), table.id(), "19:00");
        assert!(db.try_create_reservation_atomic(&reservation).unwrap());

        let fetched = db.get_reservation(reservation.id()).unwrap().unwrap();
        assert_eq!(fetched.start_time(), t("19:00"));
        assert_eq!(fetched.end_time(), t("21:00"));
        assert_eq!(fetched.status(), ReservationStatus::Confirmed);
    }

    #[test]
    fn test_atomic_create_rejects_overlap() {
        let mut db = create_test_database();
        let restaurant = sample_restaurant();
        db.insert_restaurant(&restaurant).unwrap();
        let table = sample_table(restaurant.id(), "T1", 4);
        db.insert_table(&table).unwrap();

        let first = sample_reservation(restaurant.id(), table.id(), "19:00");
        assert!(db.try_create_reservation_atomic(&first).unwrap());

        let overlapping = sample_reservation(restaurant.id(), table.id(), "20:00");
        assert!(!db.try_create_reservation_atomic(&overlapping).unwrap());

        // Touching intervals are allowed
        let touching = sample_reservation(restaurant.id(), table.id(), "21:00");
        assert!(db.try_create_reservation_atomic(&touching).unwrap());
    }

    #[test]
    fn test_cancelled_reservation_frees_interval() {
        let mut db = create_test_database();
        let restaurant = sample_restaurant();
        db.insert_restaurant(&restaurant).unwrap();
        let table = sample_table(restaurant.id(), "T1", 4);
        db.insert_table(&table).unwrap();

        let first = sample_reservation(restaurant.id(), table.id(), "19:00");
        assert!(db.try_create_reservation_atomic(&first).unwrap());
        assert!(db
            .update_reservation_status(first.id(), ReservationStatus::Cancelled)
            .unwrap());

        let second = sample_reservation(restaurant.id(), table.id(), "19:00");
        assert!(db.try_create_reservation_atomic(&second).unwrap());
    }

    #[test]
    fn test_atomic_update_excludes_self() {
        let mut db = create_test_database();
        let restaurant = sample_restaurant();
        db.insert_restaurant(&restaurant).unwrap();
        let table = sample_table(restaurant.id(), "T1", 4);
        db.insert_table(&table).unwrap();

        let reservation = sample_reservation(restaurant.id(), table.id(), "19:00");
        assert!(db.try_create_reservation_atomic(&reservation).unwrap());

        // Shifting the same reservation by 30 minutes overlaps its own old
        // interval but must still succeed.
        let shifted = Reservation::builder(restaurant.id(), table.id(), date(), t("19:30"))
            .id(reservation.id())
            .customer_name("Ada")
            .phone("555-0100")
            .party_size(2)
            .duration_minutes(120)
            .build()
            .unwrap();
        assert!(db.try_update_reservation_atomic(&shifted).unwrap());

        let fetched = db.get_reservation(reservation.id()).unwrap().unwrap();
        assert_eq!(fetched.start_time(), t("19:30"));
    }

    #[test]
    fn test_list_reservations_ascending_and_non_cancelled() {
        let mut db = create_test_database();
        let restaurant = sample_restaurant();
        db.insert_restaurant(&restaurant).unwrap();
        let t1 = sample_table(restaurant.id(), "T1", 4);
        let t2 = sample_table(restaurant.id(), "T2", 4);
        db.insert_table(&t1).unwrap();
        db.insert_table(&t2).unwrap();

        let late = sample_reservation(restaurant.id(), t1.id(), "20:00");
        let early = sample_reservation(restaurant.id(), t2.id(), "12:00");
        let cancelled = sample_reservation(restaurant.id(), t2.id(), "15:00");
        assert!(db.try_create_reservation_atomic(&late).unwrap());
        assert!(db.try_create_reservation_atomic(&early).unwrap());
        assert!(db.try_create_reservation_atomic(&cancelled).unwrap());
        db.update_reservation_status(cancelled.id(), ReservationStatus::Cancelled)
            .unwrap();

        let listed = db.list_reservations(restaurant.id(), date()).unwrap();
        assert_eq!(listed.len(), 2);
        assert_eq!(listed[0].id(), early.id());
        assert_eq!(listed[1].id(), late.id());
    }

    #[test]
    fn test_waitlist_fifo_candidate_selection() {
        let mut db = create_test_database();
        let restaurant = sample_restaurant();
        db.insert_restaurant(&restaurant).unwrap();

        let older = WaitlistEntry::builder(restaurant.id(), date(), t("19:00"))
            .customer_name("First")
            .phone("555-0001")
            .party_size(2)
            .created_at(Utc.timestamp_opt(1_000, 0).single().unwrap())
            .build()
            .unwrap();
        let newer = WaitlistEntry::builder(restaurant.id(), date(), t("19:00"))
            .customer_name("Second")
            .phone("555-0002")
            .party_size(4)
            .created_at(Utc.timestamp_opt(2_000, 0).single().unwrap())
            .build()
            .unwrap();
        db.insert_waitlist_entry(&newer).unwrap();
        db.insert_waitlist_entry(&older).unwrap();

        // Capacity fits both, the earlier entry wins
        let candidate = db
            .earliest_waiting_entry(restaurant.id(), date(), 4)
            .unwrap()
            .unwrap();
        assert_eq!(candidate.id(), older.id());

        // Capacity only fits the smaller, later-joined party is skipped
        let candidate = db
            .earliest_waiting_entry(restaurant.id(), date(), 2)
            .unwrap()
            .unwrap();
        assert_eq!(candidate.id(), older.id());

        // Nothing fits
        assert!(db
            .earliest_waiting_entry(restaurant.id(), date(), 1)
            .unwrap()
            .is_none());
    }

    #[test]
    fn test_mark_waitlist_notified_guards_status() {
        let mut db = create_test_database();
        let restaurant = sample_restaurant();
        db.insert_restaurant(&restaurant).unwrap();

        let entry = WaitlistEntry::builder(restaurant.id(), date(), t("19:00"))
            .customer_name("Grace")
            .phone("555-0003")
            .party_size(2)
            .build()
            .unwrap();
        db.insert_waitlist_entry(&entry).unwrap();

        assert!(db.mark_waitlist_notified(entry.id()).unwrap());
        // Second attempt finds no waiting row
        assert!(!db.mark_waitlist_notified(entry.id()).unwrap());

        let fetched = db.get_waitlist_entry(entry.id()).unwrap().unwrap();
        assert_eq!(fetched.status(), WaitlistStatus::Notified);
    }
}
