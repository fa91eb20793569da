//! Availability command implementation.
//!
//! Walks the slot grid for a date and shows the start times a party could
//! book.

use crate::commands::restaurants::OutputFormat;
use crate::error::CliError;
use crate::utils::{load_configuration, open_database, GlobalOptions};
use bistro::engine::{check_slot, effective_duration, enumerate_availability};
use bistro::model::{DiningTable, Restaurant};
use bistro::{ClockTime, Database, Error};
use chrono::NaiveDate;
use clap::Args;
use std::io::Write;
use uuid::Uuid;

/// Show open time slots for a date.
#[derive(Args)]
pub struct AvailabilityCommand {
    /// Restaurant id
    #[arg(long, value_name = "ID")]
    pub restaurant: Uuid,

    /// Date to check (YYYY-MM-DD)
    #[arg(long, value_name = "DATE")]
    pub date: NaiveDate,

    /// Number of guests
    #[arg(long, value_name = "COUNT")]
    pub party_size: u32,

    /// Requested duration in minutes (default from configuration)
    #[arg(long, value_name = "MINUTES")]
    pub duration: Option<u32>,

    /// Slot grid interval in minutes (default from configuration)
    #[arg(long, value_name = "MINUTES")]
    pub interval: Option<u16>,

    /// Check a single start time instead of walking the grid
    #[arg(long, value_name = "HH:MM")]
    pub at: Option<ClockTime>,

    /// Output format
    #[arg(long, value_enum, default_value = "table", ignore_case = true)]
    pub format: OutputFormat,
}

impl AvailabilityCommand {
    /// Execute the availability command.
    pub fn execute(self, global: &GlobalOptions) -> Result<(), CliError> {
        let config = load_configuration(global)?;
        let db = open_database(global, &config)?;

        let restaurant = db
            .get_restaurant(self.restaurant)?
            .ok_or(CliError::Library(Error::RestaurantNotFound {
                id: self.restaurant,
            }))?;
        let tables = db.active_tables(self.restaurant).map_err(CliError::from)?;
        let duration = self.duration.unwrap_or(config.default_duration_minutes);

        if let Some(start) = self.at {
            return self.check_single(&db, &restaurant, &tables, start, duration);
        }

        let slots = enumerate_availability(
            &db,
            &restaurant,
            &tables,
            self.date,
            self.party_size,
            duration,
            self.interval.unwrap_or(config.slot_interval_minutes),
        )
        .map_err(CliError::from)?;

        let stdout = std::io::stdout();
        let mut handle = stdout.lock();

        match self.format {
            OutputFormat::Table => {
                writeln!(handle, "START\tEND\tPEAK")?;
                for slot in &slots {
                    writeln!(
                        handle,
                        "{}\t{}\t{}",
                        slot.start_time,
                        slot.end_time,
                        if slot.is_peak_hour { "yes" } else { "no" },
                    )?;
                }
            }
            OutputFormat::Json => {
                serde_json::to_writer_pretty(&mut handle, &slots)
                    .map_err(|e| CliError::Io(std::io::Error::new(std::io::ErrorKind::Other, e)))?;
                writeln!(handle)?;
            }
        }

        Ok(())
    }

    /// Checks one start time against the capped duration and prints whether
    /// any table is free for it.
    fn check_single(
        &self,
        db: &Database,
        restaurant: &Restaurant,
        tables: &[DiningTable],
        start: ClockTime,
        requested: u32,
    ) -> Result<(), CliError> {
        let effective = effective_duration(restaurant, start, requested);
        let end = start.add_minutes(effective);
        let found = check_slot(db, tables, self.date, start, end, self.party_size, None)
            .map_err(CliError::from)?;

        let stdout = std::io::stdout();
        let mut handle = stdout.lock();

        match self.format {
            OutputFormat::Table => match &found {
                Some(table) => writeln!(
                    handle,
                    "available\t{start}\t{end}\t{}",
                    table.table_number()
                )?,
                None => writeln!(handle, "unavailable\t{start}\t{end}")?,
            },
            OutputFormat::Json => {
                let json_data = serde_json::json!({
                    "start_time": start.to_string(),
                    "end_time": end.to_string(),
                    "available": found.is_some(),
                    "table_number": found.as_ref().map(DiningTable::table_number),
                });
                serde_json::to_writer_pretty(&mut handle, &json_data)
                    .map_err(|e| CliError::Io(std::io::Error::new(std::io::ErrorKind::Other, e)))?;
                writeln!(handle)?;
            }
        }

        Ok(())
    }
}
