//! Add-restaurant command implementation.

use crate::error::CliError;
use crate::utils::{load_configuration, open_database, GlobalOptions};
use bistro::model::{PeakWindow, Restaurant};
use bistro::ClockTime;
use clap::Args;

/// Add a restaurant.
#[derive(Args)]
pub struct AddRestaurantCommand {
    /// Restaurant name
    #[arg(long, value_name = "NAME")]
    pub name: String,

    /// Opening time (HH:MM)
    #[arg(long, value_name = "TIME")]
    pub open: ClockTime,

    /// Closing time (HH:MM)
    #[arg(long, value_name = "TIME")]
    pub close: ClockTime,

    /// Start of the peak-hour window (HH:MM)
    #[arg(long, value_name = "TIME", requires_all = ["peak_end", "peak_max_duration"])]
    pub peak_start: Option<ClockTime>,

    /// End of the peak-hour window (HH:MM)
    #[arg(long, value_name = "TIME", requires = "peak_start")]
    pub peak_end: Option<ClockTime>,

    /// Maximum booking duration during peak hours (minutes)
    #[arg(long, value_name = "MINUTES", requires = "peak_start")]
    pub peak_max_duration: Option<u32>,
}

impl AddRestaurantCommand {
    /// Execute the add-restaurant command.
    pub fn execute(self, global: &GlobalOptions) -> Result<(), CliError> {
        let mut builder = Restaurant::builder(&self.name, self.open, self.close);

        if let (Some(start), Some(end), Some(max_duration_minutes)) =
            (self.peak_start, self.peak_end, self.peak_max_duration)
        {
            builder = builder.peak(PeakWindow {
                start,
                end,
                max_duration_minutes,
            });
        }

        let restaurant = builder
            .build()
            .map_err(|e| CliError::InvalidArguments(e.to_string()))?;

        let config = load_configuration(global)?;
        let mut db = open_database(global, &config)?;
        db.insert_restaurant(&restaurant).map_err(CliError::from)?;

        // Shell-friendly: just the id on stdout
        println!("{}", restaurant.id());

        if !global.quiet {
            eprintln!(
                "Added restaurant '{}' ({}-{})",
                restaurant.name(),
                restaurant.opening_time(),
                restaurant.closing_time()
            );
        }

        Ok(())
    }
}
