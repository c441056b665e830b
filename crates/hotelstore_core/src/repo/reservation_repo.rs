//! Reservation repository contract and flat-file implementation.
//!
//! # Invariants
//! - A reservation is identified by its full `"customer | hotel"` line.
//! - Customer and hotel names are stored as given, without checking the other
//!   repositories.
//! - There is no partial update; a booking is created or cancelled.

use crate::codec::to_line;
use crate::model::reservation::Reservation;
use crate::model::EntityKind;
use crate::repo::flat_file::FlatFile;
use crate::repo::{Outcome, RepoResult, Transition};
use std::path::{Path, PathBuf};

/// Repository interface for reservation operations.
pub trait ReservationRepository {
    fn create_reservation(&self, customer_name: &str, hotel_name: &str) -> RepoResult<Outcome>;
    fn cancel_reservation(&self, customer_name: &str, hotel_name: &str) -> RepoResult<Outcome>;
    /// Lists reservations as stored lines, in file order.
    fn list_reservations(&self) -> Vec<String>;
    fn list_reservation_records(&self) -> Vec<Reservation>;
}

/// Reservation repository backed by `reservations.txt` (or any injected path).
pub struct FileReservationRepository {
    file: FlatFile<Reservation>,
}

impl FileReservationRepository {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self {
            file: FlatFile::new(path),
        }
    }

    pub fn path(&self) -> &Path {
        self.file.path()
    }
}

impl ReservationRepository for FileReservationRepository {
    fn create_reservation(&self, customer_name: &str, hotel_name: &str) -> RepoResult<Outcome> {
        let reservation = Reservation::new(customer_name, hotel_name);
        reservation.validate()?;
        self.file
            .apply("create", |reservations| plan_create(reservations, reservation))
    }

    fn cancel_reservation(&self, customer_name: &str, hotel_name: &str) -> RepoResult<Outcome> {
        let reservation = Reservation::new(customer_name, hotel_name);
        self.file
            .apply("cancel", |reservations| plan_cancel(reservations, &reservation))
    }

    fn list_reservations(&self) -> Vec<String> {
        self.file.snapshot().iter().map(to_line).collect()
    }

    fn list_reservation_records(&self) -> Vec<Reservation> {
        self.file.snapshot()
    }
}

fn same_line(left: &Reservation, right: &Reservation) -> bool {
    to_line(left) == to_line(right)
}

fn plan_create(
    mut reservations: Vec<Reservation>,
    reservation: Reservation,
) -> Transition<Reservation> {
    if reservations
        .iter()
        .any(|existing| same_line(existing, &reservation))
    {
        return Transition::unchanged(Outcome::AlreadyExists(EntityKind::Reservation));
    }
    reservations.push(reservation);
    Transition::changed(Outcome::Created(EntityKind::Reservation), reservations)
}

fn plan_cancel(
    reservations: Vec<Reservation>,
    reservation: &Reservation,
) -> Transition<Reservation> {
    let before = reservations.len();
    let remaining: Vec<Reservation> = reservations
        .into_iter()
        .filter(|existing| !same_line(existing, reservation))
        .collect();

    if remaining.len() == before {
        return Transition::unchanged(Outcome::NotFound(EntityKind::Reservation));
    }
    Transition::changed(Outcome::Deleted(EntityKind::Reservation), remaining)
}
