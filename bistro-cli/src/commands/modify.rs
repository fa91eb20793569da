//! Modify command implementation.
//!
//! Changing the date, time, party size or duration re-validates the slot
//! and may move the booking to a different table. Contact-only edits keep
//! the booked interval.

use crate::error::CliError;
use crate::utils::{
    load_configuration, make_notifier, open_database, print_dry_run, print_warnings, GlobalOptions,
};
use bistro::{ClockTime, ModifyOptions, ModifyPlan, PlanExecutor};
use chrono::NaiveDate;
use clap::Args;
use uuid::Uuid;

/// Change an existing reservation.
#[derive(Args)]
pub struct ModifyCommand {
    /// Reservation id
    #[arg(value_name = "RESERVATION")]
    pub reservation: Uuid,

    /// New customer name
    #[arg(long, value_name = "NAME")]
    pub name: Option<String>,

    /// New contact phone number
    #[arg(long, value_name = "PHONE")]
    pub phone: Option<String>,

    /// New party size
    #[arg(long, value_name = "COUNT")]
    pub party_size: Option<u32>,

    /// New date (YYYY-MM-DD)
    #[arg(long, value_name = "DATE")]
    pub date: Option<NaiveDate>,

    /// New start time (HH:MM)
    #[arg(long, value_name = "TIME")]
    pub time: Option<ClockTime>,

    /// New duration in minutes
    #[arg(long, value_name = "MINUTES")]
    pub duration: Option<u32>,

    /// Perform a dry run
    #[arg(long)]
    pub dry_run: bool,
}

impl ModifyCommand {
    /// Execute the modify command.
    pub fn execute(self, global: &GlobalOptions) -> Result<(), CliError> {
        if self.name.is_none()
            && self.phone.is_none()
            && self.party_size.is_none()
            && self.date.is_none()
            && self.time.is_none()
            && self.duration.is_none()
        {
            return Err(CliError::InvalidArguments(
                "nothing to change (pass at least one of --name, --phone, --party-size, \
                 --date, --time, --duration)"
                    .to_string(),
            ));
        }

        let mut options = ModifyOptions::new(self.reservation);
        options.customer_name = self.name;
        options.phone = self.phone;
        options.party_size = self.party_size;
        options.date = self.date;
        options.start_time = self.time;
        options.duration_minutes = self.duration;

        let config = load_configuration(global)?;
        let mut db = open_database(global, &config)?;

        let plan = ModifyPlan::new(options)
            .build_plan(&db)
            .map_err(CliError::from)?;

        if self.dry_run {
            print_dry_run(&plan, global);
            return Ok(());
        }

        let notifier = make_notifier(global);
        let mut executor = PlanExecutor::new(&mut db, &notifier);
        let result = executor.execute(&plan).map_err(CliError::from)?;

        if !global.quiet {
            if let Some(reservation) = result.reservation {
                eprintln!(
                    "Updated reservation {} ({} on {} {}-{})",
                    reservation.id(),
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
