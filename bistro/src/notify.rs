//! Notification events emitted by reservation lifecycle operations.
//!
//! Dispatch is infallible and happens after persistence: a failed or missing
//! notification can never roll back a committed booking change.

use crate::logging::Logger;
use crate::model::{Reservation, WaitlistEntry};

/// An event worth telling a customer about.
#[derive(Debug, Clone, PartialEq)]
pub enum NotificationEvent {
    /// A reservation was confirmed.
    ReservationConfirmed {
        /// The confirmed reservation.
        reservation: Reservation,
        /// The assigned table's number label.
        table_number: String,
    },
    /// A table freed up for a waitlisted party.
    TableAvailable {
        /// The waitlist entry being notified.
        entry: WaitlistEntry,
        /// Seats freed by the cancellation.
        freed_party_size: u32,
    },
    /// A customer joined the waitlist.
    WaitlistJoined {
        /// The new waitlist entry.
        entry: WaitlistEntry,
    },
}

impl NotificationEvent {
    /// Returns a one-line human-readable summary of the event.
    #[must_use]
    pub fn summary(&self) -> String {
        match self {
            Self::ReservationConfirmed {
                reservation,
                table_number,
            } => format!(
                "Reservation confirmed for {} (party of {}) at table {} on {} {}-{}",
                reservation.customer_name(),
                reservation.party_size(),
                table_number,
                reservation.date(),
                reservation.start_time(),
                reservation.end_time(),
            ),
            Self::TableAvailable {
                entry,
                freed_party_size,
            } => format!(
                "Table for {} freed up on {}: notifying {} (party of {})",
                freed_party_size,
                entry.date(),
                entry.customer_name(),
                entry.party_size(),
            ),
            Self::WaitlistJoined { entry } => format!(
                "{} (party of {}) joined the waitlist for {} at {}",
                entry.customer_name(),
                entry.party_size(),
                entry.date(),
                entry.preferred_time(),
            ),
        }
    }
}

/// Sink for notification events.
///
/// Implementations must not fail; delivery problems are theirs to log.
pub trait NotificationSink {
    /// Delivers a single event.
    fn dispatch(&self, event: &NotificationEvent);
}

/// A sink that writes event summaries through the stderr [`Logger`].
pub struct LogNotifier {
    logger: Logger,
}

impl LogNotifier {
    /// Creates a notifier that logs through the given logger.
    #[must_use]
    pub const fn new(logger: Logger) -> Self {
        Self { logger }
    }
}

impl NotificationSink for LogNotifier {
    fn dispatch(&self, event: &NotificationEvent) {
        self.logger.info(&event.summary());
    }
}

/// A sink that drops every event.
#[derive(Debug, Default, Clone, Copy)]
pub struct NullNotifier;

impl NotificationSink for NullNotifier {
    fn dispatch(&self, _event: &NotificationEvent) {}
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;
    use uuid::Uuid;

    #[test]
    fn test_summaries_name_the_customer() {
        let entry = WaitlistEntry::builder(
            Uuid::new_v4(),
            NaiveDate::from_ymd_opt(2026, 9, 1).unwrap(),
            "19:00".parse().unwrap(),
        )
        .customer_name("Grace")
        .phone("555-0101")
        .party_size(4)
        .build()
        .unwrap();

        let joined = NotificationEvent::WaitlistJoined {
            entry: entry.clone(),
        };
        assert!(joined.summary().contains("Grace"));

        let available = NotificationEvent::TableAvailable {
            entry,
            freed_party_size: 4,
        };
        assert!(available.summary().contains("Grace"));
        assert!(available.summary().contains("party of 4"));
    }

    #[test]
    fn test_null_notifier_is_silent() {
        let entry = WaitlistEntry::builder(
            Uuid::new_v4(),
            NaiveDate::from_ymd_opt(2026, 9, 1).unwrap(),
            "19:00".parse().unwrap(),
        )
        .customer_name("Grace")
        .phone("555-0101")
        .party_size(4)
        .build()
        .unwrap();

        NullNotifier.dispatch(&NotificationEvent::WaitlistJoined { entry });
    }
}
