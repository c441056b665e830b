//! Domain records persisted by the flat-file store.
//!
//! # Responsibility
//! - Define the three record shapes (hotel, customer, reservation).
//! - Reject field values that would corrupt the line-oriented file format.
//!
//! # Invariants
//! - Every record has a fixed field order, which is also its on-disk order.
//! - Write paths never persist a field containing `|`, `\n` or `\r`.
//! - Write paths never persist an empty field or one with leading/trailing
//!   whitespace; the store trims line ends on load and would lose it.

use crate::codec::Record;
use serde::{Deserialize, Serialize};
use std::error::Error;
use std::fmt::{Display, Formatter};

pub mod customer;
pub mod hotel;
pub mod reservation;

/// Characters that can never appear inside a persisted field.
const FORBIDDEN_FIELD_CHARS: [char; 3] = ['|', '\n', '\r'];

/// Entity type tag used in status messages and diagnostics.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum EntityKind {
    Hotel,
    Customer,
    Reservation,
}

impl EntityKind {
    /// Human-facing label, as used in `[INFO]`/`[ERROR]` messages.
    pub fn label(self) -> &'static str {
        match self {
            Self::Hotel => "Hotel",
            Self::Customer => "Customer",
            Self::Reservation => "Reservation",
        }
    }

    /// Stable lowercase name for log events.
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Hotel => "hotel",
            Self::Customer => "customer",
            Self::Reservation => "reservation",
        }
    }
}

impl Display for EntityKind {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.label())
    }
}

/// Validation error for record field content.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RecordValidationError {
    /// A field contains the delimiter or a line break.
    ForbiddenCharacter {
        entity: EntityKind,
        field: &'static str,
        value: String,
    },
    /// A field is empty.
    Empty {
        entity: EntityKind,
        field: &'static str,
    },
    /// A field starts or ends with whitespace.
    Padded {
        entity: EntityKind,
        field: &'static str,
        value: String,
    },
}

impl Display for RecordValidationError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::ForbiddenCharacter {
                entity,
                field,
                value,
            } => write!(
                f,
                "{} field `{field}` must not contain `|` or line breaks, got {value:?}",
                entity.as_str()
            ),
            Self::Empty { entity, field } => {
                write!(f, "{} field `{field}` must not be empty", entity.as_str())
            }
            Self::Padded {
                entity,
                field,
                value,
            } => write!(
                f,
                "{} field `{field}` must not start or end with whitespace, got {value:?}",
                entity.as_str()
            ),
        }
    }
}

impl Error for RecordValidationError {}

/// Checks every field of `record` against the line format constraints.
pub(crate) fn validate_record<R: Record>(record: &R) -> Result<(), RecordValidationError> {
    for (field, value) in R::FIELD_NAMES.iter().zip(record.fields()) {
        validate_field(R::ENTITY, field, value)?;
    }
    Ok(())
}

/// Checks one patch value; omitted and empty values are always accepted.
pub(crate) fn validate_patch_value(
    entity: EntityKind,
    field: &'static str,
    value: &Option<String>,
) -> Result<(), RecordValidationError> {
    match supplied(value) {
        Some(value) => validate_field(entity, field, value),
        None => Ok(()),
    }
}

/// Returns the patch value only when it carries content.
///
/// Empty strings count as "not supplied", so modify never blanks a field.
pub(crate) fn supplied(value: &Option<String>) -> Option<&str> {
    value.as_deref().filter(|value| !value.is_empty())
}

fn validate_field(
    entity: EntityKind,
    field: &'static str,
    value: &str,
) -> Result<(), RecordValidationError> {
    if value.is_empty() {
        return Err(RecordValidationError::Empty { entity, field });
    }
    if value.contains(FORBIDDEN_FIELD_CHARS) {
        return Err(RecordValidationError::ForbiddenCharacter {
            entity,
            field,
            value: value.to_string(),
        });
    }
    if value.trim() != value {
        return Err(RecordValidationError::Padded {
            entity,
            field,
            value: value.to_string(),
        });
    }
    Ok(())
}
