//! Waitlist entity: customers waiting for a table to free up.

use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use super::{non_empty_trimmed, ValidationError};
use crate::time_grid::ClockTime;

/// Lifecycle status of a waitlist entry.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum WaitlistStatus {
    /// Waiting for a table to free up.
    Waiting,
    /// Notified that a table has become available.
    Notified,
    /// Converted into an actual reservation.
    Converted,
    /// Removed from the waitlist without being seated.
    Expired,
}

impl WaitlistStatus {
    /// Parses a status from its storage representation.
    ///
    /// # Errors
    ///
    /// Returns an error if the string is not a known status.
    pub fn parse(s: &str) -> Result<Self, String> {
        match s {
            "waiting" => Ok(Self::Waiting),
            "notified" => Ok(Self::Notified),
            "converted" => Ok(Self::Converted),
            "expired" => Ok(Self::Expired),
            _ => Err(format!("invalid waitlist status: {s}")),
        }
    }

    /// Returns the storage representation.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Waiting => "waiting",
            Self::Notified => "notified",
            Self::Converted => "converted",
            Self::Expired => "expired",
        }
    }
}

impl std::fmt::Display for WaitlistStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A waitlist entry.
///
/// `created_at` is the FIFO ordering key used when a cancellation frees a
/// table.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct WaitlistEntry {
    id: Uuid,
    restaurant_id: Uuid,
    customer_name: String,
    phone: String,
    party_size: u32,
    date: NaiveDate,
    preferred_time: ClockTime,
    status: WaitlistStatus,
    created_at: DateTime<Utc>,
}

impl WaitlistEntry {
    /// Creates a new waitlist entry builder.
    #[must_use]
    pub fn builder(
        restaurant_id: Uuid,
        date: NaiveDate,
        preferred_time: ClockTime,
    ) -> WaitlistEntryBuilder {
        WaitlistEntryBuilder {
            id: None,
            restaurant_id,
            customer_name: String::new(),
            phone: String::new(),
            party_size: 0,
            date,
            preferred_time,
            status: WaitlistStatus::Waiting,
            created_at: None,
        }
    }

    /// Returns the entry id.
    #[must_use]
    pub const fn id(&self) -> Uuid {
        self.id
    }

    /// Returns the restaurant id.
    #[must_use]
    pub const fn restaurant_id(&self) -> Uuid {
        self.restaurant_id
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

    /// Returns the desired date.
    #[must_use]
    pub const fn date(&self) -> NaiveDate {
        self.date
    }

    /// Returns the preferred arrival time.
    #[must_use]
    pub const fn preferred_time(&self) -> ClockTime {
        self.preferred_time
    }

    /// Returns the lifecycle status.
    #[must_use]
    pub const fn status(&self) -> WaitlistStatus {
        self.status
    }

    /// Returns the creation timestamp (FIFO ordering key).
    #[must_use]
    pub const fn created_at(&self) -> DateTime<Utc> {
        self.created_at
    }
}

/// Builder for creating `WaitlistEntry` instances.
#[derive(Debug)]
pub struct WaitlistEntryBuilder {
    id: Option<Uuid>,
    restaurant_id: Uuid,
    customer_name: String,
    phone: String,
    party_size: u32,
    date: NaiveDate,
    preferred_time: ClockTime,
    status: WaitlistStatus,
    created_at: Option<DateTime<Utc>>,
}

impl WaitlistEntryBuilder {
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

    /// Sets the lifecycle status (defaults to Waiting).
    #[must_use]
    pub const fn status(mut self, status: WaitlistStatus) -> Self {
        self.status = status;
        self
    }

    /// Sets the creation timestamp.
    #[must_use]
    pub const fn created_at(mut self, created_at: DateTime<Utc>) -> Self {
        self.created_at = Some(created_at);
        self
    }

    /// Builds the waitlist entry.
    ///
    /// # Errors
    ///
    /// Returns an error if the customer name or phone is empty after trimming
    /// or the party size is zero.
    pub fn build(self) -> Result<WaitlistEntry, ValidationError> {
        let customer_name = non_empty_trimmed("customer_name", &self.customer_name)?;
        let phone = non_empty_trimmed("phone", &self.phone)?;

        if self.party_size == 0 {
            return Err(ValidationError::new(
                "party_size",
                "party size must be at least 1",
            ));
        }

        Ok(WaitlistEntry {
            id: self.id.unwrap_or_else(Uuid::new_v4),
            restaurant_id: self.restaurant_id,
            customer_name,
            phone,
            party_size: self.party_size,
            date: self.date,
            preferred_time: self.preferred_time,
            status: self.status,
            created_at: self.created_at.unwrap_or_else(Utc::now),
        })
    }
}
