//! Common test utilities for integration tests.
//!
//! This module provides helper functions and fixture builders for testing
//! the bistro library against a real on-disk database.

use std::path::{Path, PathBuf};

use bistro::model::{DiningTable, PeakWindow, Restaurant};
use bistro::{ClockTime, Database, DatabaseConfig};
use chrono::NaiveDate;
use uuid::Uuid;

/// Creates a test database in a temporary location and returns its path.
///
/// The temp directory is leaked for the duration of the test run so that
/// multiple connections can be opened against the same file.
#[allow(dead_code)]
pub fn create_database_path() -> PathBuf {
    let temp_dir = tempfile::tempdir().expect("Failed to create temp dir");
    let db_path = temp_dir.path().join("bistro.db");
    std::mem::forget(temp_dir);
    db_path
}

/// Opens a connection to the database at `path`.
#[allow(dead_code)]
pub fn open_database(path: &Path) -> Database {
    Database::open(DatabaseConfig::new(path)).expect("Failed to open database")
}

/// Parses an `HH:MM` clock time, panicking on bad test input.
#[allow(dead_code)]
pub fn t(s: &str) -> ClockTime {
    s.parse().expect("Invalid test clock time")
}

/// The date all integration tests book on.
#[allow(dead_code)]
pub fn test_date() -> NaiveDate {
    NaiveDate::from_ymd_opt(2026, 9, 1).expect("Invalid test date")
}

/// A restaurant open 10:00-22:00 with a 18:00-21:00 peak capped at 90
/// minutes.
#[allow(dead_code)]
pub fn fixture_restaurant() -> Restaurant {
    Restaurant::builder("Chez Fixture", t("10:00"), t("22:00"))
        .peak(PeakWindow {
            start: t("18:00"),
            end: t("21:00"),
            max_duration_minutes: 90,
        })
        .build()
        .expect("Invalid fixture restaurant")
}

/// A table for `restaurant_id` with the given label and capacity.
#[allow(dead_code)]
pub fn fixture_table(restaurant_id: Uuid, number: &str, capacity: u32) -> DiningTable {
    DiningTable::builder(restaurant_id, number, capacity)
        .build()
        .expect("Invalid fixture table")
}
