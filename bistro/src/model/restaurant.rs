//! Restaurant entity: operating hours and the optional peak-hour window.

use serde::{Deserialize, Serialize};
use uuid::Uuid;

use super::{non_empty_trimmed, ValidationError};
use crate::time_grid::ClockTime;

/// A peak-hour window during which reservation durations are capped.
///
/// The window is half-open: a reservation starting exactly at `end` is not
/// subject to the cap.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct PeakWindow {
    /// Start of the peak window (inclusive).
    pub start: ClockTime,
    /// End of the peak window (exclusive).
    pub end: ClockTime,
    /// Maximum reservation duration in minutes while the window applies.
    pub max_duration_minutes: u32,
}

impl PeakWindow {
    /// Returns `true` if a reservation starting at `time` falls inside the
    /// window.
    #[must_use]
    pub fn contains(&self, time: ClockTime) -> bool {
        time.is_within(self.start, self.end)
    }
}

/// A restaurant with operating hours and an optional peak window.
///
/// # Examples
///
/// ```
/// use bistro::model::{PeakWindow, Restaurant};
///
/// let restaurant = Restaurant::builder(
///     "Chez Panisse",
///     "10:00".parse().unwrap(),
///     "22:00".parse().unwrap(),
/// )
/// .peak(PeakWindow {
///     start: "18:00".parse().unwrap(),
///     end: "21:00".parse().unwrap(),
///     max_duration_minutes: 90,
/// })
/// .build()
/// .unwrap();
///
/// assert_eq!(restaurant.name(), "Chez Panisse");
/// assert!(restaurant.peak().is_some());
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Restaurant {
    id: Uuid,
    name: String,
    opening_time: ClockTime,
    closing_time: ClockTime,
    peak: Option<PeakWindow>,
}

impl Restaurant {
    /// Creates a new restaurant builder.
    #[must_use]
    pub fn builder(name: &str, opening_time: ClockTime, closing_time: ClockTime) -> RestaurantBuilder {
        RestaurantBuilder {
            id: None,
            name: name.to_string(),
            opening_time,
            closing_time,
            peak: None,
        }
    }

    /// Returns the restaurant id.
    #[must_use]
    pub const fn id(&self) -> Uuid {
        self.id
    }

    /// Returns the restaurant name.
    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Returns the opening time.
    #[must_use]
    pub const fn opening_time(&self) -> ClockTime {
        self.opening_time
    }

    /// Returns the closing time.
    #[must_use]
    pub const fn closing_time(&self) -> ClockTime {
        self.closing_time
    }

    /// Returns the peak-hour window, if configured.
    #[must_use]
    pub const fn peak(&self) -> Option<PeakWindow> {
        self.peak
    }

    /// Returns `true` if a reservation starting at `time` is subject to the
    /// peak-duration cap.
    #[must_use]
    pub fn is_peak_hour(&self, time: ClockTime) -> bool {
        self.peak.is_some_and(|w| w.contains(time))
    }
}

/// Builder for creating `Restaurant` instances.
#[derive(Debug)]
pub struct RestaurantBuilder {
    id: Option<Uuid>,
    name: String,
    opening_time: ClockTime,
    closing_time: ClockTime,
    peak: Option<PeakWindow>,
}

impl RestaurantBuilder {
    /// Sets an explicit id instead of generating one.
    #[must_use]
    pub const fn id(mut self, id: Uuid) -> Self {
        self.id = Some(id);
        self
    }

    /// Sets the peak-hour window.
    #[must_use]
    pub const fn peak(mut self, peak: PeakWindow) -> Self {
        self.peak = Some(peak);
        self
    }

    /// Builds the restaurant.
    ///
    /// # Errors
    ///
    /// Returns an error if:
    /// - The name is empty after trimming
    /// - Opening time is not strictly before closing time
    /// - The peak window is empty, lies outside operating hours, or has a
    ///   zero duration cap
    pub fn build(self) -> Result<Restaurant, ValidationError> {
        let name = non_empty_trimmed("name", &self.name)?;

        if self.opening_time >= self.closing_time {
            return Err(ValidationError::new(
                "opening_time",
                "opening time must be before closing time",
            ));
        }

        if let Some(peak) = self.peak {
            if peak.start >= peak.end {
                return Err(ValidationError::new(
                    "peak",
                    "peak window start must be before its end",
                ));
            }
            if peak.start < self.opening_time || peak.end > self.closing_time {
                return Err(ValidationError::new(
                    "peak",
                    "peak window must lie within operating hours",
                ));
            }
            if peak.max_duration_minutes == 0 {
                return Err(ValidationError::new(
                    "peak",
                    "peak duration cap must be at least one minute",
                ));
            }
        }

        Ok(Restaurant {
            id: self.id.unwrap_or_else(Uuid::new_v4),
            name,
            opening_time: self.opening_time,
            closing_time: self.closing_time,
            peak: self.peak,
        })
    }
}
