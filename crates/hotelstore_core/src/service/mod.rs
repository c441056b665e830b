//! Application-level wiring over the repositories.
//!
//! # Responsibility
//! - Bundle the three entity repositories behind one entry point.
//! - Keep callers (CLI, demos) decoupled from file locations.

pub mod hotel_system;
