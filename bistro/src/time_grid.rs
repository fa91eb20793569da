//! Clock-time values and interval arithmetic for reservation scheduling.
//!
//! This module provides the minute-resolution clock type used throughout the
//! scheduling engine, along with the interval-overlap rule and the fixed-step
//! slot grid used for availability enumeration. All functions here are pure.

use std::fmt;
use std::str::FromStr;

use serde::{de, Deserialize, Deserializer, Serialize, Serializer};

/// Number of minutes in a day. Clock values are always strictly below this.
pub const MINUTES_PER_DAY: u16 = 1440;

/// A clock time with minute resolution, stored as minutes since midnight.
///
/// Valid values lie in `[0, 1440)`. Times are parsed from and displayed as
/// `"HH:MM"` strings, and serialize as that string form.
///
/// # Examples
///
/// ```
/// use bistro::ClockTime;
///
/// let t: ClockTime = "18:30".parse().unwrap();
/// assert_eq!(t.minutes(), 18 * 60 + 30);
/// assert_eq!(t.to_string(), "18:30");
///
/// // Values at or past 24:00 are invalid
/// assert!(ClockTime::new(1440).is_err());
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct ClockTime(u16);

impl ClockTime {
    /// Creates a clock time from minutes since midnight.
    ///
    /// # Errors
    ///
    /// Returns an error if `minutes` is not strictly below 1440.
    ///
    /// # Examples
    ///
    /// ```
    /// use bistro::ClockTime;
    ///
    /// let noon = ClockTime::new(720).unwrap();
    /// assert_eq!(noon.to_string(), "12:00");
    /// assert!(ClockTime::new(1500).is_err());
    /// ```
    pub fn new(minutes: u16) -> Result<Self, InvalidClockTimeError> {
        if minutes >= MINUTES_PER_DAY {
            Err(InvalidClockTimeError {
                input: minutes.to_string(),
                reason: format!("must be below {MINUTES_PER_DAY} minutes"),
            })
        } else {
            Ok(Self(minutes))
        }
    }

    /// Returns the value as minutes since midnight.
    #[must_use]
    pub const fn minutes(self) -> u16 {
        self.0
    }

    /// Returns the hour component (0-23).
    #[must_use]
    pub const fn hour(self) -> u16 {
        self.0 / 60
    }

    /// Returns the minute-of-hour component (0-59).
    #[must_use]
    pub const fn minute(self) -> u16 {
        self.0 % 60
    }

    /// Adds a number of minutes, wrapping past midnight.
    ///
    /// Crossing midnight is a valid, silent wrap; no day rollover is tracked.
    /// Callers that must stay within a single operating day guard against the
    /// wrap separately (see the allocator's `end > start` check).
    ///
    /// # Examples
    ///
    /// ```
    /// use bistro::ClockTime;
    ///
    /// let t: ClockTime = "19:00".parse().unwrap();
    /// assert_eq!(t.add_minutes(90).to_string(), "20:30");
    ///
    /// let late: ClockTime = "23:30".parse().unwrap();
    /// assert_eq!(late.add_minutes(60).to_string(), "00:30");
    /// ```
    #[must_use]
    pub fn add_minutes(self, delta: u32) -> Self {
        let total = (u32::from(self.0) + delta) % u32::from(MINUTES_PER_DAY);
        // Modulo keeps the value in range, so the cast is lossless.
        #[allow(clippy::cast_possible_truncation)]
        Self(total as u16)
    }

    /// Returns `true` if this time lies within the half-open range
    /// `[start, end)`.
    ///
    /// # Examples
    ///
    /// ```
    /// use bistro::ClockTime;
    ///
    /// let peak_start: ClockTime = "18:00".parse().unwrap();
    /// let peak_end: ClockTime = "21:00".parse().unwrap();
    ///
    /// let t: ClockTime = "18:00".parse().unwrap();
    /// assert!(t.is_within(peak_start, peak_end));
    ///
    /// let t: ClockTime = "21:00".parse().unwrap();
    /// assert!(!t.is_within(peak_start, peak_end));
    /// ```
    #[must_use]
    pub fn is_within(self, start: Self, end: Self) -> bool {
        start <= self && self < end
    }
}

impl TryFrom<u16> for ClockTime {
    type Error = InvalidClockTimeError;

    fn try_from(minutes: u16) -> Result<Self, Self::Error> {
        Self::new(minutes)
    }
}

impl fmt::Display for ClockTime {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:02}:{:02}", self.hour(), self.minute())
    }
}

impl FromStr for ClockTime {
    type Err = InvalidClockTimeError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let invalid = |reason: &str| InvalidClockTimeError {
            input: s.to_string(),
            reason: reason.to_string(),
        };

        let (hours, minutes) = s
            .split_once(':')
            .ok_or_else(|| invalid("expected HH:MM"))?;
        let hours: u16 = hours
            .parse()
            .map_err(|_| invalid("hour is not a number"))?;
        let minutes: u16 = minutes
            .parse()
            .map_err(|_| invalid("minute is not a number"))?;

        if hours >= 24 {
            return Err(invalid("hour must be below 24"));
        }
        if minutes >= 60 {
            return Err(invalid("minute must be below 60"));
        }

        Ok(Self(hours * 60 + minutes))
    }
}

impl Serialize for ClockTime {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(&self.to_string())
    }
}

impl<'de> Deserialize<'de> for ClockTime {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let s = String::deserialize(deserializer)?;
        s.parse().map_err(de::Error::custom)
    }
}

/// Error type for invalid clock-time values.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct InvalidClockTimeError {
    /// The input that failed to parse or validate.
    pub input: String,
    /// The reason the input is invalid.
    pub reason: String,
}

impl fmt::Display for InvalidClockTimeError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "invalid clock time '{}': {}", self.input, self.reason)
    }
}

impl std::error::Error for InvalidClockTimeError {}

/// Returns `true` if the half-open intervals `[a_start, a_end)` and
/// `[b_start, b_end)` share at least one instant.
///
/// The comparison is strict on both sides, so intervals that merely touch do
/// not overlap; back-to-back bookings on the same table are allowed.
///
/// # Examples
///
/// ```
/// use bistro::time_grid::ranges_overlap;
/// use bistro::ClockTime;
///
/// let t = |s: &str| s.parse::<ClockTime>().unwrap();
///
/// assert!(ranges_overlap(t("18:00"), t("20:00"), t("19:00"), t("21:00")));
///
/// // Touching endpoints are not a conflict
/// assert!(!ranges_overlap(t("18:00"), t("20:00"), t("20:00"), t("22:00")));
/// ```
#[must_use]
pub fn ranges_overlap(
    a_start: ClockTime,
    a_end: ClockTime,
    b_start: ClockTime,
    b_end: ClockTime,
) -> bool {
    a_start < b_end && a_end > b_start
}

/// Returns the signed number of minutes from `start` to `end`.
///
/// Negative when `end` precedes `start` on the clock face.
#[must_use]
pub fn duration_between(start: ClockTime, end: ClockTime) -> i32 {
    i32::from(end.minutes()) - i32::from(start.minutes())
}

/// Returns an iterator over candidate start times `start, start + interval,
/// ...` strictly below `end`.
///
/// The iterator is pure and restartable: cloning it before iteration yields
/// an independent, identical sequence. A zero interval produces an empty
/// grid.
///
/// # Examples
///
/// ```
/// use bistro::time_grid::slot_grid;
/// use bistro::ClockTime;
///
/// let open: ClockTime = "10:00".parse().unwrap();
/// let close: ClockTime = "12:00".parse().unwrap();
///
/// let slots: Vec<String> = slot_grid(open, close, 30).map(|s| s.to_string()).collect();
/// assert_eq!(slots, ["10:00", "10:30", "11:00", "11:30"]);
/// ```
#[must_use]
pub fn slot_grid(start: ClockTime, end: ClockTime, interval_minutes: u16) -> SlotGrid {
    SlotGrid {
        next: if interval_minutes == 0 {
            end.minutes()
        } else {
            start.minutes()
        },
        end: end.minutes(),
        interval: interval_minutes,
    }
}

/// Iterator over a fixed-interval grid of clock times. See [`slot_grid`].
#[derive(Debug, Clone)]
pub struct SlotGrid {
    next: u16,
    end: u16,
    interval: u16,
}

impl Iterator for SlotGrid {
    type Item = ClockTime;

    fn next(&mut self) -> Option<ClockTime> {
        if self.next >= self.end {
            return None;
        }
        let current = ClockTime(self.next);
        self.next = self.next.saturating_add(self.interval);
        Some(current)
    }
}
