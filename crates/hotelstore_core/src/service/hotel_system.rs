//! Hotel system facade.
//!
//! # Invariants
//! - The facade adds no rules of its own; every call goes to exactly one
//!   repository.
//! - Reservations are not checked against hotels or customers.

use crate::config::StoreConfig;
use crate::model::customer::{Customer, CustomerPatch};
use crate::model::hotel::{Hotel, HotelPatch};
use crate::model::reservation::Reservation;
use crate::repo::customer_repo::{CustomerRepository, FileCustomerRepository};
use crate::repo::hotel_repo::{FileHotelRepository, HotelRepository};
use crate::repo::reservation_repo::{FileReservationRepository, ReservationRepository};
use crate::repo::{Outcome, RepoResult};
use log::info;

/// File-backed hotel system, as built by [`HotelSystem::open`].
pub type FileHotelSystem =
    HotelSystem<FileHotelRepository, FileCustomerRepository, FileReservationRepository>;

/// Use-case wrapper over one repository per entity type.
pub struct HotelSystem<H, C, R> {
    hotels: H,
    customers: C,
    reservations: R,
}

impl FileHotelSystem {
    /// Builds file-backed repositories from `config`.
    pub fn open(config: &StoreConfig) -> Self {
        info!(
            "event=system_open module=service status=ok data_dir={}",
            config.data_dir().display()
        );
        Self::new(
            FileHotelRepository::new(config.hotels_path()),
            FileCustomerRepository::new(config.customers_path()),
            FileReservationRepository::new(config.reservations_path()),
        )
    }
}

impl<H, C, R> HotelSystem<H, C, R>
where
    H: HotelRepository,
    C: CustomerRepository,
    R: ReservationRepository,
{
    pub fn new(hotels: H, customers: C, reservations: R) -> Self {
        Self {
            hotels,
            customers,
            reservations,
        }
    }

    pub fn hotels(&self) -> &H {
        &self.hotels
    }

    pub fn customers(&self) -> &C {
        &self.customers
    }

    pub fn reservations(&self) -> &R {
        &self.reservations
    }

    pub fn create_hotel(&self, hotel: &Hotel) -> RepoResult<Outcome> {
        self.hotels.create_hotel(hotel)
    }

    pub fn modify_hotel(&self, name: &str, patch: &HotelPatch) -> RepoResult<Outcome> {
        self.hotels.modify_hotel(name, patch)
    }

    pub fn delete_hotel(&self, name: &str) -> RepoResult<Outcome> {
        self.hotels.delete_hotel(name)
    }

    pub fn display_hotels(&self) -> Vec<Hotel> {
        self.hotels.list_hotels()
    }

    pub fn create_customer(&self, customer: &Customer) -> RepoResult<Outcome> {
        self.customers.create_customer(customer)
    }

    pub fn modify_customer(&self, name: &str, patch: &CustomerPatch) -> RepoResult<Outcome> {
        self.customers.modify_customer(name, patch)
    }

    pub fn delete_customer(&self, name: &str) -> RepoResult<Outcome> {
        self.customers.delete_customer(name)
    }

    pub fn display_customers(&self) -> Vec<String> {
        self.customers.list_customers()
    }

    pub fn create_reservation(&self, customer_name: &str, hotel_name: &str) -> RepoResult<Outcome> {
        self.reservations
            .create_reservation(customer_name, hotel_name)
    }

    pub fn cancel_reservation(&self, customer_name: &str, hotel_name: &str) -> RepoResult<Outcome> {
        self.reservations
            .cancel_reservation(customer_name, hotel_name)
    }

    pub fn display_reservations(&self) -> Vec<String> {
        self.reservations.list_reservations()
    }

    /// Reservations held under `customer_name`, in file order.
    pub fn reservations_for_customer(&self, customer_name: &str) -> Vec<Reservation> {
        self.reservations
            .list_reservation_records()
            .into_iter()
            .filter(|reservation| reservation.customer_name == customer_name)
            .collect()
    }
}
