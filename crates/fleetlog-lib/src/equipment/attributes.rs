//! Equipment master data and equipped instances.
//!
//! A master row describes an equipment type as the game defines it; an
//! [`Equipment`] is one owned copy with its own remodel level and proficiency.

use serde::{Deserialize, Serialize};

use crate::error::{Error, Result};

use super::category::EquipmentCategory;
use super::constants::MAX_ALV;

/// Identifier of an owned equipment instance (the game's slot item id).
pub type SlotId = i64;

/// Identifier of an equipment master row.
pub type MasterId = u32;

/// Static combat parameters of an equipment type.
///
/// `attack` is the anti-air rating used by every air power formula.
/// For land-based fighters `evasion` holds the interception rating and
/// `firepower` the anti-bomber rating.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct EquipmentParams {
    pub attack: i32,
    pub evasion: i32,
    pub firepower: i32,
    pub search: i32,
}

/// Equipment master data loaded from the catalog.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EquipmentMaster {
    pub id: MasterId,
    pub name: String,
    /// Coarse class. Zero means the client has not classified the item yet.
    pub type1: u16,
    pub category: EquipmentCategory,
    pub params: EquipmentParams,
}

impl EquipmentMaster {
    /// Validate master data for correctness.
    pub fn validate(&self) -> Result<()> {
        if self.id == 0 {
            return Err(Error::EquipmentDataValidation {
                message: "equipment id must be positive".to_string(),
            });
        }

        if self.name.trim().is_empty() {
            return Err(Error::EquipmentDataValidation {
                message: format!("equipment {} must have a name", self.id),
            });
        }

        Ok(())
    }
}

/// One owned equipment instance resolved against its master data.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Equipment {
    pub slot_id: SlotId,
    pub master_id: MasterId,
    pub name: String,
    pub type1: u16,
    pub category: EquipmentCategory,
    /// Remodel level (0-10).
    pub level: u8,
    /// Proficiency tier (0-7).
    pub alv: u8,
    pub params: EquipmentParams,
    #[serde(default)]
    pub locked: bool,
}

impl Equipment {
    /// Join an owned instance with its master row. Proficiency above the
    /// highest tier is clamped so table lookups stay in range.
    pub fn from_master(master: &EquipmentMaster, slot_id: SlotId, level: u8, alv: u8) -> Self {
        Self {
            slot_id,
            master_id: master.id,
            name: master.name.clone(),
            type1: master.type1,
            category: master.category,
            level,
            alv: alv.min(MAX_ALV),
            params: master.params,
            locked: false,
        }
    }

    /// Whether the client has assigned the item a primary class.
    pub fn is_classified(&self) -> bool {
        self.type1 != 0
    }
}
