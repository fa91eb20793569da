//! CLI command implementations.
//!
//! This module contains the implementations of all CLI commands:
//! - `init`: Initialize the data directory and database
//! - `add_restaurant`: Add a restaurant
//! - `add_table`: Add a dining table to a restaurant
//! - `restaurants`: List restaurants
//! - `reserve`: Book a table
//! - `cancel`: Cancel a reservation
//! - `modify`: Change an existing reservation
//! - `availability`: Show open time slots for a date
//! - `list`: List reservations for a date
//! - `waitlist_join`: Join the waitlist for a date
//! - `waitlist_list`: List waiting parties for a date
//! - `waitlist_remove`: Remove an entry from the waitlist

pub mod add_restaurant;
pub mod add_table;
pub mod availability;
pub mod cancel;
pub mod init;
pub mod list;
pub mod modify;
pub mod reserve;
pub mod restaurants;
pub mod waitlist_join;
pub mod waitlist_list;
pub mod waitlist_remove;

pub use add_restaurant::AddRestaurantCommand;
pub use add_table::AddTableCommand;
pub use availability::AvailabilityCommand;
pub use cancel::CancelCommand;
pub use init::InitCommand;
pub use list::ListCommand;
pub use modify::ModifyCommand;
pub use reserve::ReserveCommand;
pub use restaurants::RestaurantsCommand;
pub use waitlist_join::WaitlistJoinCommand;
pub use waitlist_list::WaitlistListCommand;
pub use waitlist_remove::WaitlistRemoveCommand;
