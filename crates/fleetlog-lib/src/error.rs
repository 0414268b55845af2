use std::path::PathBuf;

use thiserror::Error;

/// Convenient result alias for the fleet logbook library.
pub type Result<T> = std::result::Result<T, Error>;

/// Top-level library error type.
///
/// Missing equipment, unclassified items and inconsistent ship stats are not
/// errors: calculators report them through zero contributions and flags on
/// their results. Only loading and lookup failures surface here.
#[derive(Debug, Error)]
pub enum Error {
    /// Raised when equipment master data fails validation.
    #[error("invalid equipment data: {message}")]
    EquipmentDataValidation { message: String },

    /// Raised when two catalog rows share the same master id.
    #[error("duplicate equipment master id encountered: {id}")]
    DuplicateEquipment { id: u32 },

    /// Raised when a snapshot document cannot be decoded.
    #[error("failed to parse snapshot: {message}")]
    SnapshotParse { message: String },

    /// Raised when a caller asks for a fleet the snapshot does not contain.
    #[error("unknown fleet: {index}")]
    UnknownFleet { index: usize },

    /// Raised when a ship index is outside of the selected fleet.
    #[error("fleet {fleet} has no ship at position {index}")]
    UnknownShip { fleet: usize, index: usize },

    /// Raised when a caller asks for an airbase area the snapshot does not contain.
    #[error("unknown airbase area: {area}{}", format_known(.known))]
    UnknownAirbaseArea { area: u32, known: Vec<u32> },

    /// Raised when an area has no air corps with the requested id.
    #[error("airbase area {area} has no air corps {id}")]
    UnknownAirCorps { area: u32, id: u32 },

    /// Raised when a settings file could not be decoded.
    #[error("failed to parse settings at {path}: {message}")]
    SettingsParse { path: PathBuf, message: String },

    /// Raised when an explicitly requested settings file is missing.
    #[error("settings file not found at {path}")]
    SettingsNotFound { path: PathBuf },

    /// No suitable project directories could be resolved for this platform.
    #[error("failed to resolve project directories for settings")]
    ProjectDirsUnavailable,

    /// Wrapper for IO errors.
    #[error(transparent)]
    Io(#[from] std::io::Error),

    /// Wrapper for JSON errors outside of snapshot and settings decoding.
    #[error(transparent)]
    Json(#[from] serde_json::Error),
}

fn format_known(known: &[u32]) -> String {
    if known.is_empty() {
        String::new()
    } else {
        format!(
            ". Known areas: {}",
            known
                .iter()
                .map(|a| a.to_string())
                .collect::<Vec<_>>()
                .join(", ")
        )
    }
}
