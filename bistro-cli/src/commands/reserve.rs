//! Reserve command implementation.
//!
//! This module implements the `reserve` command, which books a table
//! for a party at a restaurant.

use crate::error::CliError;
use crate::utils::{
    load_configuration, make_notifier, open_database, print_dry_run, print_warnings, GlobalOptions,
};
use bistro::{ClockTime, PlanExecutor, ReserveOptions, ReservePlan};
use chrono::NaiveDate;
use clap::Args;
use uuid::Uuid;

/// Book a table.
#[derive(Args)]
pub struct ReserveCommand {
    /// Restaurant id
    #[arg(long, value_name = "ID")]
    pub restaurant: Uuid,

    /// Reservation date (YYYY-MM-DD)
    #[arg(long, value_name = "DATE")]
    pub date: NaiveDate,

    /// Start time (HH:MM)
    #[arg(long, value_name = "TIME")]
    pub time: ClockTime,

    /// Number of guests
    #[arg(long, value_name = "COUNT")]
    pub party_size: u32,

    /// Requested duration in minutes (default from configuration)
    #[arg(long, value_name = "MINUTES")]
    pub duration: Option<u32>,

    /// Customer name
    #[arg(long, value_name = "NAME")]
    pub name: String,

    /// Contact phone number
    #[arg(long, value_name = "PHONE")]
    pub phone: String,

    /// Perform a dry run
    #[arg(long)]
    pub dry_run: bool,
}

impl ReserveCommand {
    /// Execute the reserve command.
    pub fn execute(self, global: &GlobalOptions) -> Result<(), CliError> {
        let config = load_configuration(global)?;

        let options = ReserveOptions::new(self.restaurant, self.date, self.time, self.party_size)
            .with_duration(self.duration.unwrap_or(config.default_duration_minutes))
            .with_customer(&self.name, &self.phone);

        let mut db = open_database(global, &config)?;

        let plan = ReservePlan::new(options)
            .build_plan(&db)
            .map_err(CliError::from)?;

        if self.dry_run {
            print_dry_run(&plan, global);
            return Ok(());
        }

        let notifier = make_notifier(global);
        let mut executor = PlanExecutor::new(&mut db, &notifier);
        let result = executor.execute(&plan).map_err(CliError::from)?;

        // Shell-friendly: just the reservation id on stdout
        if let Some(reservation) = result.reservation {
            println!("{}", reservation.id());
            if !global.quiet {
                eprintln!(
                    "Reserved for {} on {} {}-{}",
                    reservation.customer_name(),
                    reservation.date(),
                    reservation.start_time(),
                    reservation.end_time(),
                );
            }
        }

        print_warnings(&result.warnings, global);

        Ok(())
    }
}
