//! Shared test utilities for database unit tests.
//!
//! This module provides helper functions used across multiple database test modules.

use tempfile::tempdir;
use uuid::Uuid;

use crate::database::{Database, DatabaseConfig};
use crate::model::{DiningTable, PeakWindow, Restaurant};

/// Creates a temporary test database that will be cleaned up automatically.
///
/// # Panics
///
/// Panics if the temporary directory or database cannot be created.
/// This is acceptable in test code where we want to fail fast.
#[must_use]
pub fn create_test_database() -> Database {
    let dir = tempdir().unwrap();
    let path = dir.path().join("test.db");
    let config = DatabaseConfig::new(path);
    let db = Database::open(config).unwrap();

    // Prevent the TempDir from being dropped immediately
    std::mem::forget(dir);

    db
}

/// Creates a test restaurant open 10:00-22:00 with a 18:00-21:00 peak window
/// capping reservations at 90 minutes.
///
/// # Panics
///
/// Panics if the restaurant cannot be built. This is acceptable in test code
/// where we want to fail fast.
#[must_use]
pub fn sample_restaurant() -> Restaurant {
    Restaurant::builder(
        "Test Bistro",
        "10:00".parse().unwrap(),
        "22:00".parse().unwrap(),
    )
    .peak(PeakWindow {
        start: "18:00".parse().unwrap(),
        end: "21:00".parse().unwrap(),
        max_duration_minutes: 90,
    })
    .build()
    .unwrap()
}

/// Creates an active test table.
///
/// # Panics
///
/// Panics if the table cannot be built. This is acceptable in test code
/// where we want to fail fast.
#[must_use]
pub fn sample_table(restaurant_id: Uuid, table_number: &str, capacity: u32) -> DiningTable {
    DiningTable::builder(restaurant_id, table_number, capacity)
        .build()
        .unwrap()
}
