//! Add-table command implementation.

use crate::error::CliError;
use crate::utils::{load_configuration, open_database, GlobalOptions};
use bistro::model::DiningTable;
use clap::Args;
use uuid::Uuid;

/// Add a dining table to a restaurant.
#[derive(Args)]
pub struct AddTableCommand {
    /// Restaurant id
    #[arg(long, value_name = "ID")]
    pub restaurant: Uuid,

    /// Table number label (unique within the restaurant)
    #[arg(long, value_name = "NUMBER")]
    pub number: String,

    /// Seating capacity
    #[arg(long, value_name = "SEATS")]
    pub capacity: u32,

    /// Create the table as inactive (excluded from allocation)
    #[arg(long)]
    pub inactive: bool,
}

impl AddTableCommand {
    /// Execute the add-table command.
    pub fn execute(self, global: &GlobalOptions) -> Result<(), CliError> {
        let table = DiningTable::builder(self.restaurant, &self.number, self.capacity)
            .is_active(!self.inactive)
            .build()
            .map_err(|e| CliError::InvalidArguments(e.to_string()))?;

        let config = load_configuration(global)?;
        let mut db = open_database(global, &config)?;

        // Fail early with a clear message rather than a foreign key error
        if db.get_restaurant(self.restaurant)?.is_none() {
            return Err(CliError::Library(bistro::Error::RestaurantNotFound {
                id: self.restaurant,
            }));
        }

        db.insert_table(&table).map_err(CliError::from)?;

        println!("{}", table.id());

        if !global.quiet {
            eprintln!(
                "Added table {} (seats {})",
                table.table_number(),
                table.capacity()
            );
        }

        Ok(())
    }
}
