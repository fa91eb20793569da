//! Waitlist-remove command implementation.

use crate::error::CliError;
use crate::utils::{
    load_configuration, make_notifier, open_database, print_dry_run, print_warnings, GlobalOptions,
};
use bistro::engine::RemoveWaitlistPlan;
use bistro::PlanExecutor;
use clap::Args;
use uuid::Uuid;

/// Remove an entry from the waitlist.
#[derive(Args)]
pub struct WaitlistRemoveCommand {
    /// Waitlist entry id
    #[arg(value_name = "ENTRY")]
    pub entry: Uuid,

    /// Perform a dry run
    #[arg(long)]
    pub dry_run: bool,
}

impl WaitlistRemoveCommand {
    /// Execute the waitlist-remove command.
    pub fn execute(self, global: &GlobalOptions) -> Result<(), CliError> {
        let config = load_configuration(global)?;
        let mut db = open_database(global, &config)?;

        let plan = RemoveWaitlistPlan::new(self.entry)
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
            eprintln!("Removed waitlist entry {}", self.entry);
        }

        print_warnings(&result.warnings, global);

        Ok(())
    }
}
