//! CLI structure and command definitions.
//!
//! This module defines the main CLI structure using clap's derive macros,
//! including global options and subcommands.

use crate::commands::{
    AddRestaurantCommand, AddTableCommand, AvailabilityCommand, CancelCommand, InitCommand,
    ListCommand, ModifyCommand, ReserveCommand, RestaurantsCommand, WaitlistJoinCommand,
    WaitlistListCommand, WaitlistRemoveCommand,
};
use clap::{Parser, Subcommand};
use std::path::PathBuf;

/// Command-line tool for scheduling restaurant table reservations.
#[derive(Parser)]
#[command(name = "bistro")]
#[command(version, about = "Manage restaurant table reservations", long_about = None)]
pub struct Cli {
    /// Enable verbose output
    #[arg(long, global = true)]
    pub verbose: bool,

    /// Suppress non-essential output
    #[arg(long, global = true)]
    pub quiet: bool,

    /// Override the data directory location
    #[arg(long, value_name = "PATH", global = true, env = "BISTRO_DATA_DIR")]
    pub data_dir: Option<PathBuf>,

    /// Override the default busy timeout (in seconds)
    #[arg(long, value_name = "SECONDS", global = true, env = "BISTRO_BUSY_TIMEOUT")]
    pub busy_timeout: Option<u32>,

    /// Disable automatic database initialization
    #[arg(long, global = true, env = "BISTRO_DISABLE_AUTOINIT")]
    pub disable_autoinit: bool,

    #[command(subcommand)]
    pub command: Command,
}

/// Available CLI commands.
#[derive(Subcommand)]
pub enum Command {
    /// Initialize the bistro data directory and database
    Init(InitCommand),

    /// Add a restaurant
    AddRestaurant(AddRestaurantCommand),

    /// Add a dining table to a restaurant
    AddTable(AddTableCommand),

    /// List restaurants
    Restaurants(RestaurantsCommand),

    /// Book a table
    Reserve(ReserveCommand),

    /// Cancel a reservation
    Cancel(CancelCommand),

    /// Change an existing reservation
    Modify(ModifyCommand),

    /// Show open time slots for a date
    Availability(AvailabilityCommand),

    /// List reservations for a date
    List(ListCommand),

    /// Join the waitlist for a date
    WaitlistJoin(WaitlistJoinCommand),

    /// List waiting parties for a date
    WaitlistList(WaitlistListCommand),

    /// Remove an entry from the waitlist
    WaitlistRemove(WaitlistRemoveCommand),
}
