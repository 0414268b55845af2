//! Fleet logbook combat value engine.
//!
//! This crate computes the numbers a fleet management tool shows next to a
//! snapshot of game state: land-based air power (per squadron, per air corps
//! and for high-altitude interception), fleet detection scores, sortie
//! detection totals and the night reconnaissance estimate. Every calculator
//! is a pure function of the snapshot, an [`EquipmentRegistry`] and explicit
//! [`Settings`]; nothing is cached between calls.
//!
//! Higher-level consumers (the CLI, telemetry builders) should depend on the
//! functions exported here instead of reimplementing the formulas.

#![deny(warnings)]

pub mod air_power;
pub mod airbase;
pub mod detection;
pub mod equipment;
pub mod error;
pub mod fleet;
pub mod output;
pub mod settings;
pub mod snapshot;

pub use air_power::{
    compute_air_corps_air_power, compute_airbase_defense_air_power, compute_squadron_air_power,
    AirPower, AirPowerDisplayMode,
};
pub use airbase::{ActionMode, AirCorps, Airbase, Distance, Squadron, SquadronState};
pub use detection::{
    sortie_detection, Detection, DetectionDisplayMode, NightRecon, SortieDetection,
};
pub use equipment::{
    Equipment, EquipmentCatalog, EquipmentCategory, EquipmentInstance, EquipmentRegistry,
    Inventory, SlotId,
};
pub use error::{Error, Result};
pub use fleet::{Fleet, Ship};
pub use output::{
    AirCorpsReport, AirDefenseReport, CoefficientValue, DetectionReport, NightReconReport,
    SortieReport,
};
pub use settings::{Settings, CONFIG_ENV};
pub use snapshot::Snapshot;
