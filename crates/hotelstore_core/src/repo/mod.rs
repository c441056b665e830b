//! Repository layer over the flat-file store.
//!
//! # Responsibility
//! - Define one CRUD contract per entity type.
//! - Run every mutation as load snapshot → pure transform → persist snapshot.
//!
//! # Invariants
//! - Each operation starts from a fresh read of the backing file.
//! - Rule violations (duplicate key, missing key) are `Outcome` values and
//!   never touch the file.
//! - Only write failures and invalid field content surface as `RepoError`.

use crate::model::{EntityKind, RecordValidationError};
use crate::store::StoreError;
use std::error::Error;
use std::fmt::{Display, Formatter};

pub mod customer_repo;
mod flat_file;
pub mod hotel_repo;
pub mod reservation_repo;

pub type RepoResult<T> = Result<T, RepoError>;

/// Error for repository operations that could not complete.
#[derive(Debug)]
pub enum RepoError {
    Validation(RecordValidationError),
    Store(StoreError),
}

impl Display for RepoError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Validation(err) => write!(f, "{err}"),
            Self::Store(err) => write!(f, "{err}"),
        }
    }
}

impl Error for RepoError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::Validation(err) => Some(err),
            Self::Store(err) => Some(err),
        }
    }
}

impl From<RecordValidationError> for RepoError {
    fn from(value: RecordValidationError) -> Self {
        Self::Validation(value)
    }
}

impl From<StoreError> for RepoError {
    fn from(value: StoreError) -> Self {
        Self::Store(value)
    }
}

/// Result of a create/modify/delete call that ran to completion.
///
/// `Display` renders the status line shown to users, prefixed with `[INFO]`
/// on success and `[ERROR]` on a rule violation.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Outcome {
    Created(EntityKind),
    Modified(EntityKind),
    Deleted(EntityKind),
    AlreadyExists(EntityKind),
    NotFound(EntityKind),
}

impl Outcome {
    pub fn entity(self) -> EntityKind {
        match self {
            Self::Created(entity)
            | Self::Modified(entity)
            | Self::Deleted(entity)
            | Self::AlreadyExists(entity)
            | Self::NotFound(entity) => entity,
        }
    }

    /// Whether the backing file was rewritten.
    pub fn is_success(self) -> bool {
        matches!(self, Self::Created(_) | Self::Modified(_) | Self::Deleted(_))
    }

    pub fn message(self) -> String {
        self.to_string()
    }

    fn as_str(self) -> &'static str {
        match self {
            Self::Created(_) => "created",
            Self::Modified(_) => "modified",
            Self::Deleted(_) => "deleted",
            Self::AlreadyExists(_) => "already_exists",
            Self::NotFound(_) => "not_found",
        }
    }
}

impl Display for Outcome {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        let label = self.entity().label();
        match self {
            Self::Created(_) => write!(f, "[INFO] {label} successfully created."),
            Self::Modified(_) => write!(f, "[INFO] {label} successfully modified."),
            // Reservations are cancelled rather than deleted.
            Self::Deleted(EntityKind::Reservation) => {
                write!(f, "[INFO] {label} successfully cancelled.")
            }
            Self::Deleted(_) => write!(f, "[INFO] {label} successfully deleted."),
            Self::AlreadyExists(_) => write!(f, "[ERROR] {label} already exists."),
            Self::NotFound(_) => write!(f, "[ERROR] {label} not found."),
        }
    }
}

/// Output of a pure snapshot transform.
///
/// `next == None` means the file must not be rewritten.
#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) struct Transition<R> {
    pub(crate) outcome: Outcome,
    pub(crate) next: Option<Vec<R>>,
}

impl<R> Transition<R> {
    pub(crate) fn unchanged(outcome: Outcome) -> Self {
        Self {
            outcome,
            next: None,
        }
    }

    pub(crate) fn changed(outcome: Outcome, next: Vec<R>) -> Self {
        Self {
            outcome,
            next: Some(next),
        }
    }
}
