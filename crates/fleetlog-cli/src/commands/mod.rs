//! Subcommand handlers.
//!
//! Each module handles one group of subcommands; `main.rs` parses arguments
//! and dispatches here.

pub mod air_power;
pub mod detection;
pub mod equipment;
