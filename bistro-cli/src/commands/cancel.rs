//! Cancel command implementation.
//!
//! Cancelling a reservation frees its table and may promote one waiting
//! party from the waitlist.

use crate::error::CliError;
use crate::utils::{
    load_configuration, make_notifier, open_database, print_dry_run, print_warnings, GlobalOptions,
};
use bistro::{CancelOptions, CancelPlan, PlanExecutor};
use clap::Args;
use uuid::Uuid;

/// Cancel a reservation.
#[derive(Args)]
pub struct CancelCommand {
    /// Reservation id
    #[arg(value_name = "RESERVATION")]
    pub reservation: Uuid,

    /// Perform a dry run
    #[arg(long)]
    pub dry_run: bool,
}

impl CancelCommand {
    /// Execute the cancel command.
    pub fn execute(self, global: &GlobalOptions) -> Result<(), CliError> {
        let config = load_configuration(global)?;
        let mut db = open_database(global, &config)?;

        let plan = CancelPlan::new(CancelOptions::new(self.reservation))
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
            eprintln!("Cancelled reservation {}", self.reservation);
            if let Some(promoted) = result.promoted {
                eprintln!("Promoted waitlist entry {promoted}");
            }
        }

        print_warnings(&result.warnings, global);

        Ok(())
    }
}
