//! Main entry point for the bistro CLI.
//!
//! This is the command-line interface for the bistro reservation system.
//! It provides commands for managing restaurants and bookings:
//! - `reserve`: Book a table
//! - `cancel`: Cancel a reservation
//! - `modify`: Change an existing reservation
//! - `availability`: Show open time slots for a date
//! - `list`: List reservations for a date

mod cli;
mod commands;
mod error;
mod utils;

use clap::Parser;
use cli::Cli;
use utils::GlobalOptions;

fn main() {
    let cli = Cli::parse();

    // Initialize logging based on verbosity
    let _logger = bistro::init_logger(cli.verbose, cli.quiet);

    let global = GlobalOptions {
        verbose: cli.verbose,
        quiet: cli.quiet,
        data_dir: cli.data_dir,
        busy_timeout: cli.busy_timeout,
        disable_autoinit: cli.disable_autoinit,
    };

    let result = match cli.command {
        cli::Command::Init(cmd) => cmd.execute(&global),
        cli::Command::AddRestaurant(cmd) => cmd.execute(&global),
        cli::Command::AddTable(cmd) => cmd.execute(&global),
        cli::Command::Restaurants(cmd) => cmd.execute(&global),
        cli::Command::Reserve(cmd) => cmd.execute(&global),
        cli::Command::Cancel(cmd) => cmd.execute(&global),
        cli::Command::Modify(cmd) => cmd.execute(&global),
        cli::Command::Availability(cmd) => cmd.execute(&global),
        cli::Command::List(cmd) => cmd.execute(&global),
        cli::Command::WaitlistJoin(cmd) => cmd.execute(&global),
        cli::Command::WaitlistList(cmd) => cmd.execute(&global),
        cli::Command::WaitlistRemove(cmd) => cmd.execute(&global),
    };

    match result {
        Ok(()) => std::process::exit(0),
        Err(e) => {
            eprintln!("Error: {e}");
            std::process::exit(e.exit_code());
        }
    }
}
