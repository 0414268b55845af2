//! Fine equipment classes (`type2`) that select a calculation formula.

use std::fmt;

use serde::{Deserialize, Serialize};

/// Equipment class dispatched on by the air power and detection formulas.
///
/// Every class a formula distinguishes has its own variant; anything else is
/// kept as [`EquipmentCategory::Other`] with its raw code so a new formula is a
/// compile-checked addition.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(from = "u16", into = "u16")]
pub enum EquipmentCategory {
    /// Carrier-based fighter, including night fighters.
    CarrierFighter,
    /// Carrier-based dive bomber, including night bombers.
    DiveBomber,
    /// Carrier-based torpedo bomber.
    TorpedoBomber,
    /// Carrier-based reconnaissance aircraft.
    CarrierRecon,
    /// Carrier-based reconnaissance aircraft (second series).
    CarrierReconII,
    /// Seaplane reconnaissance aircraft.
    SeaplaneRecon,
    /// Seaplane bomber.
    SeaplaneBomber,
    /// Seaplane fighter.
    SeaplaneFighter,
    /// Large flying boat.
    FlyingBoat,
    /// Small radar.
    SmallRadar,
    /// Large radar.
    LargeRadar,
    /// Land-based attack aircraft.
    LandAttacker,
    /// Land-based fighter (interceptor).
    LandFighter,
    /// Land-based reconnaissance aircraft.
    LandRecon,
    /// Jet-powered fighter-bomber.
    JetFighterBomber,
    /// Any class without a dedicated formula.
    Other(u16),
}

impl EquipmentCategory {
    /// Map a raw `type2` code to its category.
    pub fn from_type2(code: u16) -> Self {
        match code {
            6 => Self::CarrierFighter,
            7 => Self::DiveBomber,
            8 => Self::TorpedoBomber,
            9 => Self::CarrierRecon,
            10 => Self::SeaplaneRecon,
            11 => Self::SeaplaneBomber,
            12 => Self::SmallRadar,
            13 => Self::LargeRadar,
            41 => Self::FlyingBoat,
            45 => Self::SeaplaneFighter,
            47 => Self::LandAttacker,
            48 => Self::LandFighter,
            49 => Self::LandRecon,
            57 => Self::JetFighterBomber,
            94 => Self::CarrierReconII,
            other => Self::Other(other),
        }
    }

    /// Raw `type2` code of this category.
    pub fn type2(self) -> u16 {
        match self {
            Self::CarrierFighter => 6,
            Self::DiveBomber => 7,
            Self::TorpedoBomber => 8,
            Self::CarrierRecon => 9,
            Self::SeaplaneRecon => 10,
            Self::SeaplaneBomber => 11,
            Self::SmallRadar => 12,
            Self::LargeRadar => 13,
            Self::FlyingBoat => 41,
            Self::SeaplaneFighter => 45,
            Self::LandAttacker => 47,
            Self::LandFighter => 48,
            Self::LandRecon => 49,
            Self::JetFighterBomber => 57,
            Self::CarrierReconII => 94,
            Self::Other(code) => code,
        }
    }
}

impl From<u16> for EquipmentCategory {
    fn from(code: u16) -> Self {
        Self::from_type2(code)
    }
}

impl From<EquipmentCategory> for u16 {
    fn from(category: EquipmentCategory) -> Self {
        category.type2()
    }
}

impl fmt::Display for EquipmentCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            Self::CarrierFighter => "carrier fighter",
            Self::DiveBomber => "dive bomber",
            Self::TorpedoBomber => "torpedo bomber",
            Self::CarrierRecon => "carrier recon",
            Self::CarrierReconII => "carrier recon II",
            Self::SeaplaneRecon => "seaplane recon",
            Self::SeaplaneBomber => "seaplane bomber",
            Self::SeaplaneFighter => "seaplane fighter",
            Self::FlyingBoat => "flying boat",
            Self::SmallRadar => "small radar",
            Self::LargeRadar => "large radar",
            Self::LandAttacker => "land attacker",
            Self::LandFighter => "land fighter",
            Self::LandRecon => "land recon",
            Self::JetFighterBomber => "jet fighter-bomber",
            Self::Other(code) => return write!(f, "type {code}"),
        };
        f.write_str(label)
    }
}
