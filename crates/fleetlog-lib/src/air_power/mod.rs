//! Air superiority calculations for land-based air corps.
//!
//! This module is organized into focused submodules:
//!
//! - [`value`] - The additive [`AirPower`] range and its display modes
//! - [`squadron`] - Per-squadron air power from aircraft class and proficiency
//! - [`corps`] - Air corps totals and the air defense recon bonus
//! - [`interception`] - Combined air defense of an area with the rocket multiplier
//!
//! Every function is a pure computation over the snapshot it is given.
//!
//! # Example
//!
//! ```
//! use std::collections::HashMap;
//! use fleetlog_lib::airbase::{ActionMode, AirCorps, Distance, Squadron};
//! use fleetlog_lib::air_power::{compute_air_corps_air_power, AirPowerDisplayMode};
//! use fleetlog_lib::equipment::{
//!     Equipment, EquipmentCategory, EquipmentMaster, EquipmentParams, SlotId,
//! };
//!
//! let master = EquipmentMaster {
//!     id: 20,
//!     name: "Type 0 Fighter Model 21".to_string(),
//!     type1: 3,
//!     category: EquipmentCategory::CarrierFighter,
//!     params: EquipmentParams { attack: 5, ..EquipmentParams::default() },
//! };
//! let mut registry: HashMap<SlotId, Equipment> = HashMap::new();
//! registry.insert(1, Equipment::from_master(&master, 1, 0, 0));
//!
//! let corps = AirCorps::new(6, 1, "First", Distance::default(), ActionMode::Sortie,
//!     [Squadron::active(1, 1, 16)]);
//! let power = compute_air_corps_air_power(&registry, &corps, AirPowerDisplayMode::BaseOnly);
//! assert_eq!(power.render(AirPowerDisplayMode::BaseOnly), "20");
//! ```

pub mod corps;
pub mod interception;
pub mod squadron;
pub mod value;

pub use corps::{compute_air_corps_air_power, defense_recon_bonus_percent, recon_bonus_percent};
pub use interception::{compute_airbase_defense_air_power, count_rocket_fighters, rocket_multiplier};
pub use squadron::{
    base_air_power, compute_squadron_air_power, proficiency_tier, squadron_air_power,
    ProficiencyRow,
};
pub use value::{AirPower, AirPowerDisplayMode};
