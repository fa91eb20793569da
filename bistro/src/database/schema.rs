//! Database schema definitions and SQL constants.
//!
//! This module contains all SQL table definitions, indices, and constants
//! related to the database schema for the bistro reservation system.

/// Current schema version for the database.
///
/// This version is stored in the metadata table and is used to ensure
/// compatibility between the database and the application.
pub const CURRENT_SCHEMA_VERSION: i32 = 1;

/// SQL statement to create the metadata table.
///
/// The metadata table stores key-value pairs for database configuration
/// and versioning information.
pub const CREATE_METADATA_TABLE: &str = r"
    CREATE TABLE IF NOT EXISTS metadata (
        key TEXT PRIMARY KEY NOT NULL,
        value TEXT NOT NULL
    )";

/// SQL statement to create the restaurants table.
///
/// Clock times are stored as INTEGER minutes since midnight; the peak
/// window columns are NULL when no peak window is configured.
pub const CREATE_RESTAURANTS_TABLE: &str = r"
    CREATE TABLE IF NOT EXISTS restaurants (
        id TEXT PRIMARY KEY NOT NULL,
        name TEXT NOT NULL,
        opening_time INTEGER NOT NULL,
        closing_time INTEGER NOT NULL,
        peak_start INTEGER,
        peak_end INTEGER,
        peak_max_duration INTEGER
    )";

/// SQL statement to create the dining tables table.
///
/// Table numbers are unique within a restaurant; the UNIQUE constraint is
/// the authoritative guard under concurrent inserts.
pub const CREATE_DINING_TABLES_TABLE: &str = r"
    CREATE TABLE IF NOT EXISTS dining_tables (
        id TEXT PRIMARY KEY NOT NULL,
        restaurant_id TEXT NOT NULL REFERENCES restaurants(id),
        table_number TEXT NOT NULL,
        capacity INTEGER NOT NULL,
        is_active INTEGER NOT NULL DEFAULT 1,
        UNIQUE (restaurant_id, table_number)
    )";

/// SQL statement to create the reservations table.
///
/// Dates are ISO-8601 TEXT, clock times INTEGER minutes, timestamps unix
/// seconds.
pub const CREATE_RESERVATIONS_TABLE: &str = r"
    CREATE TABLE IF NOT EXISTS reservations (
        id TEXT PRIMARY KEY NOT NULL,
        restaurant_id TEXT NOT NULL REFERENCES restaurants(id),
        table_id TEXT NOT NULL REFERENCES dining_tables(id),
        customer_name TEXT NOT NULL,
        phone TEXT NOT NULL,
        party_size INTEGER NOT NULL,
        date TEXT NOT NULL,
        start_time INTEGER NOT NULL,
        end_time INTEGER NOT NULL,
        duration_minutes INTEGER NOT NULL,
        status TEXT NOT NULL,
        created_at INTEGER NOT NULL
    )";

/// SQL statement to create the waitlist table.
pub const CREATE_WAITLIST_TABLE: &str = r"
    CREATE TABLE IF NOT EXISTS waitlist (
        id TEXT PRIMARY KEY NOT NULL,
        restaurant_id TEXT NOT NULL REFERENCES restaurants(id),
        customer_name TEXT NOT NULL,
        phone TEXT NOT NULL,
        party_size INTEGER NOT NULL,
        date TEXT NOT NULL,
        preferred_time INTEGER NOT NULL,
        status TEXT NOT NULL,
        created_at INTEGER NOT NULL
    )";

/// SQL statement to create an index on reservations by table and date.
///
/// This index speeds up the conflict scan that runs on every booking.
pub const CREATE_RESERVATION_TABLE_DATE_INDEX: &str = r"
    CREATE INDEX IF NOT EXISTS idx_reservations_table_date
    ON reservations(table_id, date)";

/// SQL statement to create an index on reservations by restaurant and date.
///
/// This index speeds up the daily reservation listing.
pub const CREATE_RESERVATION_RESTAURANT_DATE_INDEX: &str = r"
    CREATE INDEX IF NOT EXISTS idx_reservations_restaurant_date
    ON reservations(restaurant_id, date)";

/// SQL statement to create an index on the waitlist by restaurant, date and
/// status.
///
/// This index speeds up FIFO promotion candidate lookups.
pub const CREATE_WAITLIST_INDEX: &str = r"
    CREATE INDEX IF NOT EXISTS idx_waitlist_restaurant_date_status
    ON waitlist(restaurant_id, date, status)";

/// SQL statement to select the schema version from the metadata table.
pub const SELECT_SCHEMA_VERSION: &str = "SELECT value FROM metadata WHERE key = 'schema_version'";

/// SQL statement to insert or update the schema version in the metadata table.
pub const INSERT_SCHEMA_VERSION: &str =
    "INSERT OR REPLACE INTO metadata (key, value) VALUES ('schema_version', ?)";

/// SQL statement to insert a reservation.
pub const INSERT_RESERVATION: &str = r"
    INSERT INTO reservations
    (id, restaurant_id, table_id, customer_name, phone, party_size,
     date, start_time, end_time, duration_minutes, status, created_at)
    VALUES (?, ?, ?, ?, ?, ?, ?, ?, ?, ?, ?, ?)
";

/// SQL statement to insert a restaurant.
pub const INSERT_RESTAURANT: &str = r"
    INSERT INTO restaurants
    (id, name, opening_time, closing_time, peak_start, peak_end, peak_max_duration)
    VALUES (?, ?, ?, ?, ?, ?, ?)
";

/// SQL statement to insert a dining table.
pub const INSERT_DINING_TABLE: &str = r"
    INSERT INTO dining_tables
    (id, restaurant_id, table_number, capacity, is_active)
    VALUES (?, ?, ?, ?, ?)
";

/// SQL statement to insert a waitlist entry.
pub const INSERT_WAITLIST_ENTRY: &str = r"
    INSERT INTO waitlist
    (id, restaurant_id, customer_name, phone, party_size,
     date, preferred_time, status, created_at)
    VALUES (?, ?, ?, ?, ?, ?, ?, ?, ?)
";
