//! Core record store for the hotel management system.
//! This crate is the single source of truth for record-level invariants.

pub mod codec;
pub mod config;
pub mod logging;
pub mod model;
pub mod repo;
pub mod service;
pub mod store;

pub use codec::{decode, encode, to_line, DecodeError, Record};
pub use config::StoreConfig;
pub use logging::{default_log_level, init_logging, logging_status, LoggingError};
pub use model::customer::{Customer, CustomerPatch};
pub use model::hotel::{Hotel, HotelPatch};
pub use model::reservation::Reservation;
pub use model::{EntityKind, RecordValidationError};
pub use repo::customer_repo::{CustomerRepository, FileCustomerRepository};
pub use repo::hotel_repo::{FileHotelRepository, HotelRepository};
pub use repo::reservation_repo::{FileReservationRepository, ReservationRepository};
pub use repo::{Outcome, RepoError, RepoResult};
pub use service::hotel_system::{FileHotelSystem, HotelSystem};
pub use store::{FileStore, StoreError, StoreResult};

/// Returns the core crate version.
pub fn core_version() -> &'static str {
    env!("CARGO_PKG_VERSION")
}

#[cfg(test)]
mod tests {
    use super::core_version;

    #[test]
    fn version_is_not_empty() {
        assert!(!core_version().is_empty());
    }
}
