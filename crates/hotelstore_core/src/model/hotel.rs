//! Hotel record.
//!
//! # Invariants
//! - `name` is the unique key within the hotels file.
//! - `rooms` and `price` are kept as text exactly as supplied.
//! - On disk: `name|location|rooms|price` with no padding.

use crate::codec::Record;
use crate::model::{
    supplied, validate_patch_value, validate_record, EntityKind, RecordValidationError,
};
use serde::{Deserialize, Serialize};

/// One hotel entry.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Hotel {
    pub name: String,
    pub location: String,
    /// Room count, integer-as-text.
    pub rooms: String,
    /// Nightly price, decimal-as-text.
    pub price: String,
}

impl Hotel {
    pub fn new(
        name: impl Into<String>,
        location: impl Into<String>,
        rooms: impl Into<String>,
        price: impl Into<String>,
    ) -> Self {
        Self {
            name: name.into(),
            location: location.into(),
            rooms: rooms.into(),
            price: price.into(),
        }
    }

    /// Validates that every field fits the line format.
    pub fn validate(&self) -> Result<(), RecordValidationError> {
        validate_record(self)
    }
}

impl Record for Hotel {
    const ENTITY: EntityKind = EntityKind::Hotel;
    const DELIMITER: &'static str = "|";
    const FIELD_NAMES: &'static [&'static str] = &["name", "location", "rooms", "price"];

    fn fields(&self) -> Vec<&str> {
        vec![
            self.name.as_str(),
            self.location.as_str(),
            self.rooms.as_str(),
            self.price.as_str(),
        ]
    }

    fn from_fields(fields: Vec<String>) -> Option<Self> {
        let [name, location, rooms, price] = <[String; 4]>::try_from(fields).ok()?;
        Some(Self {
            name,
            location,
            rooms,
            price,
        })
    }
}

/// Partial update for an existing hotel.
///
/// `None` and empty values leave the stored field untouched.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct HotelPatch {
    pub location: Option<String>,
    pub rooms: Option<String>,
    pub price: Option<String>,
}

impl HotelPatch {
    pub fn validate(&self) -> Result<(), RecordValidationError> {
        validate_patch_value(EntityKind::Hotel, "location", &self.location)?;
        validate_patch_value(EntityKind::Hotel, "rooms", &self.rooms)?;
        validate_patch_value(EntityKind::Hotel, "price", &self.price)
    }

    /// Overwrites the supplied fields of `hotel`.
    pub fn apply_to(&self, hotel: &mut Hotel) {
        if let Some(location) = supplied(&self.location) {
            hotel.location = location.to_string();
        }
        if let Some(rooms) = supplied(&self.rooms) {
            hotel.rooms = rooms.to_string();
        }
        if let Some(price) = supplied(&self.price) {
            hotel.price = price.to_string();
        }
    }
}
