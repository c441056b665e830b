//! Hotel repository contract and flat-file implementation.
//!
//! # Invariants
//! - Keys are compared on the decoded `name` field for every operation.
//! - `modify` rewrites every record whose name matches.

use crate::model::hotel::{Hotel, HotelPatch};
use crate::model::EntityKind;
use crate::repo::flat_file::FlatFile;
use crate::repo::{Outcome, RepoResult, Transition};
use std::path::{Path, PathBuf};

/// Repository interface for hotel CRUD operations.
pub trait HotelRepository {
    fn create_hotel(&self, hotel: &Hotel) -> RepoResult<Outcome>;
    fn modify_hotel(&self, name: &str, patch: &HotelPatch) -> RepoResult<Outcome>;
    fn delete_hotel(&self, name: &str) -> RepoResult<Outcome>;
    fn get_hotel(&self, name: &str) -> Option<Hotel>;
    /// Lists decoded hotels in file order; malformed lines are skipped.
    fn list_hotels(&self) -> Vec<Hotel>;
}

/// Hotel repository backed by `hotels.txt` (or any injected path).
pub struct FileHotelRepository {
    file: FlatFile<Hotel>,
}

impl FileHotelRepository {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self {
            file: FlatFile::new(path),
        }
    }

    pub fn path(&self) -> &Path {
        self.file.path()
    }
}

impl HotelRepository for FileHotelRepository {
    fn create_hotel(&self, hotel: &Hotel) -> RepoResult<Outcome> {
        hotel.validate()?;
        self.file
            .apply("create", |hotels| plan_create(hotels, hotel))
    }

    fn modify_hotel(&self, name: &str, patch: &HotelPatch) -> RepoResult<Outcome> {
        patch.validate()?;
        self.file
            .apply("modify", |hotels| plan_modify(hotels, name, patch))
    }

    fn delete_hotel(&self, name: &str) -> RepoResult<Outcome> {
        self.file.apply("delete", |hotels| plan_delete(hotels, name))
    }

    fn get_hotel(&self, name: &str) -> Option<Hotel> {
        self.file
            .snapshot()
            .into_iter()
            .find(|hotel| hotel.name == name)
    }

    fn list_hotels(&self) -> Vec<Hotel> {
        self.file.snapshot()
    }
}

fn plan_create(mut hotels: Vec<Hotel>, hotel: &Hotel) -> Transition<Hotel> {
    if hotels.iter().any(|existing| existing.name == hotel.name) {
        return Transition::unchanged(Outcome::AlreadyExists(EntityKind::Hotel));
    }
    hotels.push(hotel.clone());
    Transition::changed(Outcome::Created(EntityKind::Hotel), hotels)
}

fn plan_modify(mut hotels: Vec<Hotel>, name: &str, patch: &HotelPatch) -> Transition<Hotel> {
    let mut found = false;
    for hotel in hotels.iter_mut().filter(|hotel| hotel.name == name) {
        patch.apply_to(hotel);
        found = true;
    }

    if !found {
        return Transition::unchanged(Outcome::NotFound(EntityKind::Hotel));
    }
    Transition::changed(Outcome::Modified(EntityKind::Hotel), hotels)
}

fn plan_delete(hotels: Vec<Hotel>, name: &str) -> Transition<Hotel> {
    let before = hotels.len();
    let remaining: Vec<Hotel> = hotels
        .into_iter()
        .filter(|hotel| hotel.name != name)
        .collect();

    if remaining.len() == before {
        return Transition::unchanged(Outcome::NotFound(EntityKind::Hotel));
    }
    Transition::changed(Outcome::Deleted(EntityKind::Hotel), remaining)
}
