//! Waitlist-join command implementation.

use crate::error::CliError;
use crate::utils::{
    load_configuration, make_notifier, open_database, print_dry_run, print_warnings, GlobalOptions,
};
use bistro::engine::{JoinWaitlistOptions, JoinWaitlistPlan};
use bistro::{ClockTime, PlanAction, PlanExecutor};
use chrono::NaiveDate;
use clap::Args;
use uuid::Uuid;

/// Join the waitlist for a date.
#[derive(Args)]
pub struct WaitlistJoinCommand {
    /// Restaurant id
    #[arg(long, value_name = "ID")]
    pub restaurant: Uuid,

    /// Desired date (YYYY-MM-DD)
    #[arg(long, value_name = "DATE")]
    pub date: NaiveDate,

    /// Preferred arrival time (HH:MM)
    #[arg(long, value_name = "TIME")]
    pub time: ClockTime,

    /// Number of guests
    #[arg(long, value_name = "COUNT")]
    pub party_size: u32,

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

impl WaitlistJoinCommand {
    /// Execute the waitlist-join command.
    pub fn execute(self, global: &GlobalOptions) -> Result<(), CliError> {
        let options = JoinWaitlistOptions {
            restaurant_id: self.restaurant,
            date: self.date,
            preferred_time: self.time,
            party_size: self.party_size,
            customer_name: self.name,
            phone: self.phone,
        };

        let config = load_configuration(global)?;
        let mut db = open_database(global, &config)?;

        let plan = JoinWaitlistPlan::new(options)
            .build_plan(&db)
            .map_err(CliError::from)?;

        if self.dry_run {
            print_dry_run(&plan, global);
            return Ok(());
        }

        // The entry id comes from the plan's create action
        let entry_id = plan.actions.iter().find_map(|action| match action {
            PlanAction::CreateWaitlistEntry(entry) => Some(entry.id()),
            _ => None,
        });

        let notifier = make_notifier(global);
        let mut executor = PlanExecutor::new(&mut db, &notifier);
        let result = executor.execute(&plan).map_err(CliError::from)?;

        if let Some(id) = entry_id {
            println!("{id}");
        }

        print_warnings(&result.warnings, global);

        Ok(())
    }
}
