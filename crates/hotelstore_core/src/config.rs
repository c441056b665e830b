//! Backing-file locations for the three stores.
//!
//! # Invariants
//! - Default filenames are `hotels.txt`, `customers.txt` and
//!   `reservations.txt`, resolved against `data_dir`.
//! - Paths are handed to repositories at construction; nothing reads this
//!   configuration from global state.

use std::path::{Path, PathBuf};

pub const DEFAULT_HOTELS_FILE: &str = "hotels.txt";
pub const DEFAULT_CUSTOMERS_FILE: &str = "customers.txt";
pub const DEFAULT_RESERVATIONS_FILE: &str = "reservations.txt";

/// Where each entity store keeps its backing file.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StoreConfig {
    /// Base directory. Relative paths resolve against the process cwd.
    data_dir: PathBuf,
    hotels_file: String,
    customers_file: String,
    reservations_file: String,
}

impl Default for StoreConfig {
    fn default() -> Self {
        Self::in_dir(".")
    }
}

impl StoreConfig {
    /// Uses the default filenames inside `data_dir`.
    pub fn in_dir(data_dir: impl Into<PathBuf>) -> Self {
        Self {
            data_dir: data_dir.into(),
            hotels_file: DEFAULT_HOTELS_FILE.to_string(),
            customers_file: DEFAULT_CUSTOMERS_FILE.to_string(),
            reservations_file: DEFAULT_RESERVATIONS_FILE.to_string(),
        }
    }

    pub fn with_hotels_file(mut self, file_name: impl Into<String>) -> Self {
        self.hotels_file = file_name.into();
        self
    }

    pub fn with_customers_file(mut self, file_name: impl Into<String>) -> Self {
        self.customers_file = file_name.into();
        self
    }

    pub fn with_reservations_file(mut self, file_name: impl Into<String>) -> Self {
        self.reservations_file = file_name.into();
        self
    }

    pub fn data_dir(&self) -> &Path {
        &self.data_dir
    }

    pub fn hotels_path(&self) -> PathBuf {
        self.data_dir.join(&self.hotels_file)
    }

    pub fn customers_path(&self) -> PathBuf {
        self.data_dir.join(&self.customers_file)
    }

    pub fn reservations_path(&self) -> PathBuf {
        self.data_dir.join(&self.reservations_file)
    }
}
