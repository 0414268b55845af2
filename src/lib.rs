//! Workspace root package.
//!
//! Holds the shared pre-commit hook configuration; the engine lives in
//! `crates/fleetlog-lib` and the command-line tool in `crates/fleetlog-cli`.
