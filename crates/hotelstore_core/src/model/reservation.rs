//! Reservation record.
//!
//! # Invariants
//! - The `(customer_name, hotel_name)` pair is the unique key.
//! - Names are free text; they are not checked against the hotel or customer
//!   files.
//! - On disk: `customer_name | hotel_name`.

use crate::codec::Record;
use crate::model::{validate_record, EntityKind, RecordValidationError};
use serde::{Deserialize, Serialize};

/// A customer's booking at a hotel, both referenced by name.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Reservation {
    pub customer_name: String,
    pub hotel_name: String,
}

impl Reservation {
    pub fn new(customer_name: impl Into<String>, hotel_name: impl Into<String>) -> Self {
        Self {
            customer_name: customer_name.into(),
            hotel_name: hotel_name.into(),
        }
    }

    pub fn validate(&self) -> Result<(), RecordValidationError> {
        validate_record(self)
    }
}

impl Record for Reservation {
    const ENTITY: EntityKind = EntityKind::Reservation;
    const DELIMITER: &'static str = " | ";
    const FIELD_NAMES: &'static [&'static str] = &["customer_name", "hotel_name"];

    fn fields(&self) -> Vec<&str> {
        vec![self.customer_name.as_str(), self.hotel_name.as_str()]
    }

    fn from_fields(fields: Vec<String>) -> Option<Self> {
        let [customer_name, hotel_name] = <[String; 2]>::try_from(fields).ok()?;
        Some(Self {
            customer_name,
            hotel_name,
        })
    }
}
