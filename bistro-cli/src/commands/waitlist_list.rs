//! Waitlist-list command implementation.
//!
//! Lists waiting parties in FIFO order (the same order promotion uses).

use crate::commands::restaurants::OutputFormat;
use crate::error::CliError;
use crate::utils::{load_configuration, open_database, GlobalOptions};
use chrono::NaiveDate;
use clap::Args;
use std::io::Write;
use uuid::Uuid;

/// List waiting parties for a date.
#[derive(Args)]
pub struct WaitlistListCommand {
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

impl WaitlistListCommand {
    /// Execute the waitlist-list command.
    pub fn execute(self, global: &GlobalOptions) -> Result<(), CliError> {
        let config = load_configuration(global)?;
        let db = open_database(global, &config)?;

        let entries = db
            .list_waiting_entries(self.restaurant, self.date)
            .map_err(CliError::from)?;

        let stdout = std::io::stdout();
        let mut handle = stdout.lock();

        match self.format {
            OutputFormat::Table => {
                writeln!(handle, "ID\tCUSTOMER\tPARTY\tPREFERRED\tJOINED")?;
                for e in &entries {
                    writeln!(
                        handle,
                        "{}\t{}\t{}\t{}\t{}",
                        e.id(),
                        e.customer_name(),
                        e.party_size(),
                        e.preferred_time(),
                        e.created_at().format("%Y-%m-%d %H:%M:%S"),
                    )?;
                }
            }
            OutputFormat::Json => {
                let json_data: Vec<serde_json::Value> = entries
                    .iter()
                    .map(|e| {
                        serde_json::json!({
                            "id": e.id(),
                            "customer_name": e.customer_name(),
                            "phone": e.phone(),
                            "party_size": e.party_size(),
                            "date": e.date(),
                            "preferred_time": e.preferred_time().to_string(),
                            "status": e.status(),
                            "created_at": e.created_at().to_rfc3339(),
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
