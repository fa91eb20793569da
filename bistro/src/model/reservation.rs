//! Reservation entity and its lifecycle status.

use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use super::{non_empty_trimmed, ValidationError};
use crate::time_grid::ClockTime;

/// Lifecycle status of a reservation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ReservationStatus {
    /// Created but not yet confirmed.
    Pending,
    /// Confirmed and holding its table.
    Confirmed,
    /// The party was seated and has finished.
    Completed,
    /// Cancelled; no longer holds its table.
    Cancelled,
}

impl ReservationStatus {
    /// Parses a status from its storage representation.
    ///
    /// # Errors
    ///
    /// Returns an error if the string is not a known status.
    pub fn parse(s: &str) -> Result<Self, String> {
        match s {
            "pending" => Ok(Self::Pending),
            "confirmed" => Ok(Self::Confirmed),
            "completed" => Ok(Self::Completed),
            "cancelled" => Ok(Self::Cancelled),
            _ => Err(format!("invalid reservation status: {s}")),
        }
    }

    /// Returns the storage representation.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Pending => "pending",
            Self::Confirmed => "confirmed",
            Self::Completed => "completed",
            Self::Cancelled => "cancelled",
        }
    }
}

impl std::fmt::Display for ReservationStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A table reservation.
///
/// The interval `[start_time, end_time)` is what conflict detection compares;
/// `duration_minutes` records the effective duration after any peak-hour cap.
///
/// # Examples
///
/// ```
/// use bistro::model::Reservation;
/// use chrono::NaiveDate;
/// use uuid::Uuid;
///
/// let reservation = Reservation::builder(
///     Uuid::new_v4(),
///     Uuid::new_v4(),
///     NaiveDate::from_ymd_opt(2026, 9, 1).unwrap(),
///     "19:00".parse().unwrap(),
/// )
/// .customer_name("Ada")
/// .phone("555-0100")
/// .party_size(2)
/// .duration_minutes(90)
/// .build()
/// .unwrap();
///
/// assert_eq!(reservation.end_time().to_string(), "20:30");
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Reservation {
    id: Uuid,
    restaurant_id: Uuid,
    table_id: Uuid,
    customer_name: String,
    phone: String,
    party_size: u32,
    date: NaiveDate,
    start_time: ClockTime,
    end_time: ClockTime,
    duration_minutes: u32,
    status: ReservationStatus,
    created_at: DateTime<Utc>,
}

impl Reservation {
    /// Creates a new reservation builder.
    ///
    /// Customer name, phone, party size and duration must be supplied before
    /// `build`; the end time is computed from the start time and duration.
    #[must_use]
    pub fn builder(
        restaurant_id: Uuid,
        table_id: Uuid,
        date: NaiveDate,
        start_time: ClockTime,
    ) -> ReservationBuilder {
        ReservationBuilder {
            id: None,
            restaurant_id,
            table_id,
            customer_name: String::new(),
            phone: String::new(),
            party_size: 0,
            date,
            start_time,
            duration_minutes: 0,
            status: ReservationStatus::Confirmed,
            created_at: None,
        }
    }

    /// Returns the reservation id.
    #[must_use]
    pub const fn id(&self) -> Uuid {
        self.id
    }

    /// Returns the restaurant id.
    #[must_use]
    pub const fn restaurant_id(&self) -> Uuid {
        self.restaurant_id
    }

    /// Returns the reserved table's id.
    #[must_use]
    pub const fn table_id(&self) -> Uuid {
        self.table_id
    }

    /// Returns the customer name.
    #[must_use]
    pub fn customer_name(&self) -> &str {
        &self.customer_name
    }

    /// Returns the contact phone number.
    #[must_use]
    pub fn phone(&self) -> &str {
        &self.phone
    }

    /// Returns the party size.
    #[must_use]
    pub const fn party_size(&self) -> u32 {
        self.party_size
    }

    /// Returns the reservation date.
    #[must_use]
    pub const fn date(&self) -> NaiveDate {
        self.date
    }

    /// Returns the start time.
    #[must_use]
    pub const fn start_time(&self) -> ClockTime {
        self.start_time
    }

    /// Returns the end time.
    #[must_use]
    pub const fn end_time(&self) -> ClockTime {
        self.end_time
    }

    /// Returns the effective duration in minutes.
    #[must_use]
    pub const fn duration_minutes(&self) -> u32 {
        self.duration_minutes
    }

    /// Returns the lifecycle status.
    #[must_use]
    pub const fn status(&self) -> ReservationStatus {
        self.status
    }

    /// Returns the creation timestamp.
    #[must_use]
    pub const fn created_at(&self) -> DateTime<Utc> {
        self.created_at
    }

}

/// Builder for creating `Reservation` instances.
#[derive(Debug)]
pub struct ReservationBuilder {
    id: Option<Uuid>,
    restaurant_id: Uuid,
    table_id: Uuid,
    customer_name: String,
    phone: String,
    party_size: u32,
    date: NaiveDate,
    start_time: ClockTime,
    duration_minutes: u32,
    status: ReservationStatus,
    created_at: Option<DateTime<Utc>>,
}

impl ReservationBuilder {
    /// Sets an explicit id instead of generating one.
    #[must_use]
    pub const fn id(mut self, id: Uuid) -> Self {
        self.id = Some(id);
        self
    }

    /// Sets the customer name.
    #[must_use]
    pub fn customer_name(mut self, name: &str) -> Self {
        self.customer_name = name.to_string();
        self
    }

    /// Sets the contact phone number.
    #[must_use]
    pub fn phone(mut self, phone: &str) -> Self {
        self.phone = phone.to_string();
        self
    }

    /// Sets the party size.
    #[must_use]
    pub const fn party_size(mut self, party_size: u32) -> Self {
        self.party_size = party_size;
        self
    }

    /// Sets the effective duration; the end time is derived from it.
    #[must_use]
    pub const fn duration_minutes(mut self, minutes: u32) -> Self {
        self.duration_minutes = minutes;
        self
    }

    /// Sets the lifecycle status (defaults to Confirmed).
    #[must_use]
    pub const fn status(mut self, status: ReservationStatus) -> Self {
        self.status = status;
        self
    }

    /// Sets the creation timestamp.
    #[must_use]
    pub const fn created_at(mut self, created_at: DateTime<Utc>) -> Self {
        self.created_at = Some(created_at);
        self
    }

    /// Builds the reservation.
    ///
    /// # Errors
    ///
    /// Returns an error if:
    /// - The customer name or phone is empty after trimming
    /// - The party size is zero
    /// - The duration is zero
    pub fn build(self) -> Result<Reservation, ValidationError> {
        let customer_name = non_empty_trimmed("customer_name", &self.customer_name)?;
        let phone = non_empty_trimmed("phone", &self.phone)?;

        if self.party_size == 0 {
            return Err(ValidationError::new(
                "party_size",
                "party size must be at least 1",
            ));
        }
        if self.duration_minutes == 0 {
            return Err(ValidationError::new(
                "duration_minutes",
                "duration must be at least one minute",
            ));
        }

        Ok(Reservation {
            id: self.id.unwrap_or_else(Uuid::new_v4),
            restaurant_id: self.restaurant_id,
            table_id: self.table_id,
            customer_name,
            phone,
            party_size: self.party_size,
            date: self.date,
            start_time: self.start_time,
            end_time: self.start_time.add_minutes(self.duration_minutes),
            duration_minutes: self.duration_minutes,
            status: self.status,
            created_at: self.created_at.unwrap_or_else(Utc::now),
        })
    }
}
