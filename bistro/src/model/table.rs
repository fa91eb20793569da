//! Dining table entity.

use serde::{Deserialize, Serialize};
use uuid::Uuid;

use super::{non_empty_trimmed, ValidationError};

/// A dining table belonging to a restaurant.
///
/// Table numbers are free-form labels ("T1", "Patio 3") that must be unique
/// within a restaurant; uniqueness is enforced by the storage layer.
///
/// # Examples
///
/// ```
/// use bistro::model::DiningTable;
/// use uuid::Uuid;
///
/// let table = DiningTable::builder(Uuid::new_v4(), "T1", 4).build().unwrap();
/// assert_eq!(table.capacity(), 4);
/// assert!(table.is_active());
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DiningTable {
    id: Uuid,
    restaurant_id: Uuid,
    table_number: String,
    capacity: u32,
    is_active: bool,
}

impl DiningTable {
    /// Creates a new dining table builder.
    #[must_use]
    pub fn builder(restaurant_id: Uuid, table_number: &str, capacity: u32) -> DiningTableBuilder {
        DiningTableBuilder {
            id: None,
            restaurant_id,
            table_number: table_number.to_string(),
            capacity,
            is_active: true,
        }
    }

    /// Returns the table id.
    #[must_use]
    pub const fn id(&self) -> Uuid {
        self.id
    }

    /// Returns the owning restaurant's id.
    #[must_use]
    pub const fn restaurant_id(&self) -> Uuid {
        self.restaurant_id
    }

    /// Returns the table number label.
    #[must_use]
    pub fn table_number(&self) -> &str {
        &self.table_number
    }

    /// Returns the seating capacity.
    #[must_use]
    pub const fn capacity(&self) -> u32 {
        self.capacity
    }

    /// Returns whether the table is accepting reservations.
    #[must_use]
    pub const fn is_active(&self) -> bool {
        self.is_active
    }
}

/// Builder for creating `DiningTable` instances.
#[derive(Debug)]
pub struct DiningTableBuilder {
    id: Option<Uuid>,
    restaurant_id: Uuid,
    table_number: String,
    capacity: u32,
    is_active: bool,
}

impl DiningTableBuilder {
    /// Sets an explicit id instead of generating one.
    #[must_use]
    pub const fn id(mut self, id: Uuid) -> Self {
        self.id = Some(id);
        self
    }

    /// Sets whether the table accepts reservations.
    #[must_use]
    pub const fn is_active(mut self, is_active: bool) -> Self {
        self.is_active = is_active;
        self
    }

    /// Builds the dining table.
    ///
    /// # Errors
    ///
    /// Returns an error if the table number is empty after trimming or the
    /// capacity is zero.
    pub fn build(self) -> Result<DiningTable, ValidationError> {
        let table_number = non_empty_trimmed("table_number", &self.table_number)?;

        if self.capacity == 0 {
            return Err(ValidationError::new(
                "capacity",
                "capacity must be at least 1",
            ));
        }

        Ok(DiningTable {
            id: self.id.unwrap_or_else(Uuid::new_v4),
            restaurant_id: self.restaurant_id,
            table_number,
            capacity: self.capacity,
            is_active: self.is_active,
        })
    }
}
