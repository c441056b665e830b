//! Line codec for flat-file records.
//!
//! # Responsibility
//! - Map one in-memory record to one delimited text line and back.
//! - Report malformed lines as values so callers can skip them.
//!
//! # Invariants
//! - Field order is fixed per record type and mirrors `Record::FIELD_NAMES`.
//! - `decode` succeeds only when the field count equals the record arity.
//! - `decode(encode(r)) == r` whenever no field contains the delimiter.

use crate::model::EntityKind;
use std::error::Error;
use std::fmt::{Display, Formatter};

/// A record that can be stored as one delimited line.
pub trait Record: Sized {
    /// Entity tag used by status messages and logs.
    const ENTITY: EntityKind;
    /// Separator written between fields.
    const DELIMITER: &'static str;
    /// Field names in on-disk order. Its length is the record arity.
    const FIELD_NAMES: &'static [&'static str];

    /// Field values in on-disk order.
    fn fields(&self) -> Vec<&str>;

    /// Builds a record from decoded fields.
    ///
    /// Returns `None` when `fields.len()` does not match the arity.
    fn from_fields(fields: Vec<String>) -> Option<Self>;

    /// Number of fields on one line.
    fn arity() -> usize {
        Self::FIELD_NAMES.len()
    }
}

/// Error for a line that does not decode into a record.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DecodeError {
    FieldCount {
        entity: EntityKind,
        expected: usize,
        found: usize,
        line: String,
    },
}

impl Display for DecodeError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::FieldCount {
                entity,
                expected,
                found,
                line,
            } => write!(
                f,
                "invalid {} line: expected {expected} fields, found {found}: `{line}`",
                entity.as_str()
            ),
        }
    }
}

impl Error for DecodeError {}

/// Renders a record as a line without terminator.
pub fn to_line<R: Record>(record: &R) -> String {
    record.fields().join(R::DELIMITER)
}

/// Renders a record as a newline-terminated line.
pub fn encode<R: Record>(record: &R) -> String {
    let mut line = to_line(record);
    line.push('\n');
    line
}

/// Parses one line into a record.
///
/// A trailing `\n` / `\r\n` is ignored. Field values are not trimmed.
pub fn decode<R: Record>(line: &str) -> Result<R, DecodeError> {
    let line = line.trim_end_matches(['\n', '\r']);
    let fields: Vec<String> = line.split(R::DELIMITER).map(str::to_owned).collect();
    let found = fields.len();

    R::from_fields(fields).ok_or_else(|| DecodeError::FieldCount {
        entity: R::ENTITY,
        expected: R::arity(),
        found,
        line: line.to_string(),
    })
}
