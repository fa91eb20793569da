//! Restaurants command implementation.
//!
//! Lists restaurants with their operating hours and table counts.

use crate::error::CliError;
use crate::utils::{load_configuration, open_database, GlobalOptions};
use clap::{Args, ValueEnum};
use std::io::Write;

/// List restaurants.
#[derive(Args)]
pub struct RestaurantsCommand {
    /// Output format
    #[arg(long, value_enum, default_value = "table", ignore_case = true)]
    pub format: OutputFormat,
}

/// Output format for listing commands.
#[derive(Clone, Copy, ValueEnum)]
#[value(rename_all = "lowercase")]
pub enum OutputFormat {
    /// Tab-separated table format (human-readable)
    Table,
    /// JSON format
    Json,
}

impl RestaurantsCommand {
    /// Execute the restaurants command.
    pub fn execute(self, global: &GlobalOptions) -> Result<(), CliError> {
        let config = load_configuration(global)?;
        let db = open_database(global, &config)?;

        let restaurants = db.list_restaurants().map_err(CliError::from)?;

        let stdout = std::io::stdout();
        let mut handle = stdout.lock();

        match self.format {
            OutputFormat::Table => {
                writeln!(handle, "ID\tNAME\tOPEN\tCLOSE\tTABLES")?;
                for r in &restaurants {
                    let tables = db.tables_for_restaurant(r.id()).map_err(CliError::from)?;
                    writeln!(
                        handle,
                        "{}\t{}\t{}\t{}\t{}",
                        r.id(),
                        r.name(),
                        r.opening_time(),
                        r.closing_time(),
                        tables.len(),
                    )?;
                }
            }
            OutputFormat::Json => {
                let mut json_data = Vec::new();
                for r in &restaurants {
                    let tables = db.tables_for_restaurant(r.id()).map_err(CliError::from)?;
                    json_data.push(serde_json::json!({
                        "id": r.id(),
                        "name": r.name(),
                        "opening_time": r.opening_time().to_string(),
                        "closing_time": r.closing_time().to_string(),
                        "peak": r.peak().map(|p| serde_json::json!({
                            "start": p.start.to_string(),
                            "end": p.end.to_string(),
                            "max_duration_minutes": p.max_duration_minutes,
                        })),
                        "tables": tables.iter().map(|t| serde_json::json!({
                            "id": t.id(),
                            "number": t.table_number(),
                            "capacity": t.capacity(),
                            "active": t.is_active(),
                        })).collect::<Vec<_>>(),
                    }));
                }
                serde_json::to_writer_pretty(&mut handle, &json_data)
                    .map_err(|e| CliError::Io(std::io::Error::new(std::io::ErrorKind::Other, e)))?;
                writeln!(handle)?;
            }
        }

        Ok(())
    }
}
