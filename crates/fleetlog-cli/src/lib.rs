//! Fleet logbook CLI library.
//!
//! Argument types, command handlers and output formatting for the `fleetlog`
//! binary. The calculations themselves live in `fleetlog_lib`.

pub mod commands;
pub mod context;
pub mod output;
