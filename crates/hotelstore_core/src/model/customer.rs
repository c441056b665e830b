//! Customer record.
//!
//! # Invariants
//! - `name` is the unique key within the customers file.
//! - On disk: `name | email | phone`.

use crate::codec::Record;
use crate::model::{
    supplied, validate_patch_value, validate_record, EntityKind, RecordValidationError,
};
use serde::{Deserialize, Serialize};

/// One registered customer.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Customer {
    pub name: String,
    pub email: String,
    pub phone: String,
}

impl Customer {
    pub fn new(
        name: impl Into<String>,
        email: impl Into<String>,
        phone: impl Into<String>,
    ) -> Self {
        Self {
            name: name.into(),
            email: email.into(),
            phone: phone.into(),
        }
    }

    pub fn validate(&self) -> Result<(), RecordValidationError> {
        validate_record(self)
    }
}

impl Record for Customer {
    const ENTITY: EntityKind = EntityKind::Customer;
    const DELIMITER: &'static str = " | ";
    const FIELD_NAMES: &'static [&'static str] = &["name", "email", "phone"];

    fn fields(&self) -> Vec<&str> {
        vec![self.name.as_str(), self.email.as_str(), self.phone.as_str()]
    }

    fn from_fields(fields: Vec<String>) -> Option<Self> {
        let [name, email, phone] = <[String; 3]>::try_from(fields).ok()?;
        Some(Self { name, email, phone })
    }
}

/// Partial update for an existing customer.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CustomerPatch {
    pub email: Option<String>,
    pub phone: Option<String>,
}

impl CustomerPatch {
    pub fn validate(&self) -> Result<(), RecordValidationError> {
        validate_patch_value(EntityKind::Customer, "email", &self.email)?;
        validate_patch_value(EntityKind::Customer, "phone", &self.phone)
    }

    pub fn apply_to(&self, customer: &mut Customer) {
        if let Some(email) = supplied(&self.email) {
            customer.email = email.to_string();
        }
        if let Some(phone) = supplied(&self.phone) {
            customer.phone = phone.to_string();
        }
    }
}
