//! Database layer for persistent storage of reservations.
//!
//! This module provides a SQLite-based storage layer for restaurants,
//! dining tables, reservations and the waitlist, including connection
//! management, schema versioning, and CRUD operations.
//!
//! # Examples
//!
//! ```no_run
//! use bistro::database::{Database, DatabaseConfig};
//! use bistro::model::Restaurant;
//!
//! // Open a database
//! let config = DatabaseConfig::new("/tmp/bistro.db");
//! let mut db = Database::open(config).unwrap();
//!
//! // Register a restaurant
//! let restaurant = Restaurant::builder(
//!     "Chez Panisse",
//!     "10:00".parse().unwrap(),
//!     "22:00".parse().unwrap(),
//! )
//! .build()
//! .unwrap();
//! db.insert_restaurant(&restaurant).unwrap();
//!
//! // List all restaurants
//! for restaurant in db.list_restaurants().unwrap() {
//!     println!("{}", restaurant.name());
//! }
//! ```

mod config;
mod connection;
pub mod migrations;
mod operations;
mod schema;
#[cfg(test)]
pub mod test_util;

// Re-export public API
pub use config::{default_data_dir, resolve_database_path, DatabaseConfig};
pub use connection::Database;
pub use operations::{get_reservation, reservations_for_table};

// Re-export migration functions for advanced use cases
pub use migrations::{check_schema_compatibility, get_schema_version, initialize_schema};
