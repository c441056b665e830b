//! Demo entry point for the hotel record store.
//!
//! # Responsibility
//! - Wire the file-backed repositories in the current directory.
//! - Run the sample booking flow and print each store's contents.

use hotelstore_core::{
    core_version, default_log_level, init_logging, Customer, FileHotelSystem, Hotel, Outcome,
    RepoResult, StoreConfig,
};
use std::process::ExitCode;

fn main() -> ExitCode {
    match std::env::current_dir() {
        Ok(cwd) => {
            if let Err(err) = init_logging(default_log_level(), cwd.join("logs")) {
                eprintln!("[WARN] logging disabled: {err}");
            }
        }
        Err(err) => eprintln!("[WARN] logging disabled: {err}"),
    }
    log::info!(
        "event=cli_start module=cli status=ok version={}",
        core_version()
    );

    let system = FileHotelSystem::open(&StoreConfig::default());

    let steps = [
        system.create_hotel(&Hotel::new("Hotel Plaza", "NYC", "100", "150.00")),
        system.create_customer(&Customer::new(
            "John Doe",
            "johndoe@example.com",
            "1234567890",
        )),
        system.create_reservation("John Doe", "Hotel Plaza"),
    ];
    let mut failed = false;
    for step in steps {
        failed |= report(step);
    }

    println!("Hotels: {:?}", system.display_hotels());
    println!("Customers: {:?}", system.display_customers());
    println!("Reservations: {:?}", system.display_reservations());

    if failed {
        ExitCode::FAILURE
    } else {
        ExitCode::SUCCESS
    }
}

/// Prints one status line; returns `true` when the call could not complete.
fn report(result: RepoResult<Outcome>) -> bool {
    match result {
        Ok(outcome) => {
            println!("{outcome}");
            false
        }
        Err(err) => {
            eprintln!("[ERROR] {err}");
            true
        }
    }
}
