#![deny(missing_docs, unsafe_code)]
#![warn(clippy::all, clippy::pedantic)]
#![allow(clippy::module_name_repetitions)]

//! # bistro
//!
//! A library for scheduling restaurant table reservations.
//!
//! This library provides the core types and operations for booking tables,
//! checking availability, and managing the reservation lifecycle, including
//! waitlist promotion when a cancellation frees seats.
//!
//! ## Core Types
//!
//! - [`ClockTime`]: A minute-of-day wall clock time with validation
//! - [`model::Restaurant`], [`model::DiningTable`], [`model::Reservation`]
//!   and [`model::WaitlistEntry`]: The scheduling entities
//! - [`Error`] and [`Result`]: Error handling types
//! - [`Logger`] and [`LogLevel`]: Logging infrastructure
//!
//! ## Examples
//!
//! ```
//! use bistro::ClockTime;
//! use bistro::time_grid::ranges_overlap;
//!
//! let start: ClockTime = "19:00".parse().unwrap();
//! let end = start.add_minutes(90);
//! assert_eq!(end.to_string(), "20:30");
//!
//! // Back-to-back bookings do not conflict
//! let next = end.add_minutes(60);
//! assert!(!ranges_overlap(start, end, end, next));
//! ```

pub mod config;
pub mod database;
pub mod engine;
pub mod error;
pub mod logging;
pub mod model;
pub mod notify;
pub mod time_grid;

// Re-export key types at crate root for convenience
pub use config::Config;
pub use database::{Database, DatabaseConfig};
pub use engine::{
    CancelOptions, CancelPlan, ExecutionResult, ModifyOptions, ModifyPlan, OperationPlan,
    PlanAction, PlanExecutor, ReserveOptions, ReservePlan,
};
pub use error::{Error, Result};
pub use logging::{init_logger, LogLevel, Logger};
pub use time_grid::ClockTime;
