//! Equipment master data, owned instances and registry lookups.
//!
//! - [`attributes`] - Master rows, resolved instances and their parameters
//! - [`category`] - Fine equipment classes used for formula dispatch
//! - [`catalog`] - Master catalog loading from CSV
//! - [`registry`] - The [`EquipmentRegistry`] seam and the [`Inventory`] implementation
//! - [`constants`] - Proficiency tables and id sets shared by the calculators

pub mod attributes;
pub mod catalog;
pub mod category;
pub mod constants;
pub mod registry;

pub use attributes::{Equipment, EquipmentMaster, EquipmentParams, MasterId, SlotId};
pub use catalog::EquipmentCatalog;
pub use category::EquipmentCategory;
pub use registry::{EquipmentInstance, EquipmentRegistry, Inventory};
