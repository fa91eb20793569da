//! List command implementation.
//!
//! Lists the non-cancelled reservations of a restaurant for a date.

use crate::commands::restaurants::OutputFormat;
use crate::error::CliError;
use crate::utils::{load_configuration, open_database, GlobalOptions};
use chrono::NaiveDate;
use clap::Args;
use std::io::Write;
use uuid::Uuid;

/// List reservations for a date.
#[derive(Args)]
pub struct ListCommand {
    /// Restaurant id
    #[arg(long, value_name = "ID")]
    pub restaurant: Uuid,

    /// Date to list (YYYY-MM-DD)
    #[arg(long, value_name = "DATE")]
    pub date: NaiveDate,

    /// Output format
    #[arg(long, value_enum, default_value = "table", ignore_case = true)]
    pub format: OutputFormat,
}

impl ListCommand {
    /// Execute the list command.
    pub fn execute(self, global: &GlobalOptions) -> Result<(), CliError> {
        let config = load_configuration(global)?;
        let db = open_database(global, &config)?;

        let reservations = db
            .list_reservations(self.restaurant, self.date)
            .map_err(CliError::from)?;

        // Resolve table numbers for display
        let tables = db
            .tables_for_restaurant(self.restaurant)
            .map_err(CliError::from)?;
        let table_number = |id: Uuid| {
            tables
                .iter()
                .find(|t| t.id() == id)
                .map_or("-", |t| t.table_number())
        };

        let stdout = std::io::stdout();
        let mut handle = stdout.lock();

        match self.format {
            OutputFormat::Table => {
                writeln!(handle, "ID\tCUSTOMER\tPARTY\tTABLE\tSTART\tEND\tSTATUS")?;
                for r in &reservations {
                    writeln!(
                        handle,
                        "{}\t{}\t{}\t{}\t{}\t{}\t{}",
                        r.id(),
                        r.customer_name(),
                        r.party_size(),
                        table_number(r.table_id()),
                        r.start_time(),
                        r.end_time(),
                        r.status(),
                    )?;
                }
            }
            OutputFormat::Json => {
                let json_data: Vec<serde_json::Value> = reservations
                    .iter()
                    .map(|r| {
                        serde_json::json!({
                            "id": r.id(),
                            "customer_name": r.customer_name(),
                            "phone": r.phone(),
                            "party_size": r.party_size(),
                            "table": table_number(r.table_id()),
                            "date": r.date(),
                            "start_time": r.start_time().to_string(),
                            "end_time": r.end_time().to_string(),
                            "duration_minutes": r.duration_minutes(),
                            "status": r.status().to_string(),
                        })
                    })
                    .collect();
                serde_json::to_writer_pretty(&mut handle, &json_data)
                    .map_err(|e| CliError::Io(std::io::Error::new(std::io::ErrorKind::Other, e)))?;
                writeln!(handle)?;
            }
        }

        Ok(())
    }
}
