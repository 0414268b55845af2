//! Land-based air corps snapshot model.
//!
//! An [`Airbase`] groups air corps by map area; each [`AirCorps`] holds up to
//! four [`Squadron`]s keyed by squadron id. The calculators in
//! [`crate::air_power`] read these values and never modify them.

use std::collections::BTreeMap;
use std::fmt;

use serde::{Deserialize, Serialize};

use crate::equipment::SlotId;

/// Map area identifier.
pub type AreaId = u32;

/// Air corps identifier within an area.
pub type CorpsId = u32;

/// Deployment state of a squadron.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(from = "u8", into = "u8")]
pub enum SquadronState {
    /// No aircraft assigned.
    Unassigned,
    /// Aircraft deployed and operational.
    Active,
    /// Aircraft being swapped out.
    Transferring,
    /// State code not known to this library.
    Unknown(u8),
}

impl SquadronState {
    /// Whether the squadron currently fields aircraft.
    pub fn is_deployed(self) -> bool {
        !matches!(self, Self::Unassigned | Self::Transferring)
    }
}

impl From<u8> for SquadronState {
    fn from(code: u8) -> Self {
        match code {
            0 => Self::Unassigned,
            1 => Self::Active,
            2 => Self::Transferring,
            other => Self::Unknown(other),
        }
    }
}

impl From<SquadronState> for u8 {
    fn from(state: SquadronState) -> Self {
        match state {
            SquadronState::Unassigned => 0,
            SquadronState::Active => 1,
            SquadronState::Transferring => 2,
            SquadronState::Unknown(code) => code,
        }
    }
}

/// One squadron slot of an air corps.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(from = "RawSquadron")]
pub struct Squadron {
    pub id: u32,
    pub state: SquadronState,
    pub slot_id: SlotId,
    pub count: u32,
    pub max_count: u32,
    pub condition: u32,
}

impl Squadron {
    /// Build a squadron. Unassigned and transferring squadrons carry no
    /// aircraft whatever the source reported.
    pub fn new(
        id: u32,
        state: SquadronState,
        slot_id: SlotId,
        count: u32,
        max_count: u32,
        condition: u32,
    ) -> Self {
        let (count, max_count, condition) = if state.is_deployed() {
            (count, max_count, condition)
        } else {
            (0, 0, 0)
        };
        Self {
            id,
            state,
            slot_id,
            count,
            max_count,
            condition,
        }
    }

    /// Convenience constructor for a deployed squadron at full strength.
    pub fn active(id: u32, slot_id: SlotId, count: u32) -> Self {
        Self::new(id, SquadronState::Active, slot_id, count, count, 1)
    }
}

#[derive(Deserialize)]
struct RawSquadron {
    #[serde(alias = "api_squadron_id")]
    id: u32,
    #[serde(alias = "api_state")]
    state: SquadronState,
    #[serde(alias = "api_slotid")]
    slot_id: SlotId,
    #[serde(default, alias = "api_count")]
    count: u32,
    #[serde(default, alias = "api_max_count")]
    max_count: u32,
    #[serde(default, alias = "api_cond")]
    condition: u32,
}

impl From<RawSquadron> for Squadron {
    fn from(raw: RawSquadron) -> Self {
        Squadron::new(
            raw.id,
            raw.state,
            raw.slot_id,
            raw.count,
            raw.max_count,
            raw.condition,
        )
    }
}

/// Operational posture of an air corps.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(from = "u8", into = "u8")]
pub enum ActionMode {
    Standby,
    Sortie,
    AirDefense,
    Retreat,
    Rest,
    Unknown(u8),
}

impl ActionMode {
    /// Human-readable label shown in textual renderings.
    pub fn label(self) -> &'static str {
        match self {
            Self::Standby => "Standby",
            Self::Sortie => "Sortie",
            Self::AirDefense => "Air Defense",
            Self::Retreat => "Retreat",
            Self::Rest => "Rest",
            Self::Unknown(_) => "Unknown",
        }
    }
}

impl From<u8> for ActionMode {
    fn from(code: u8) -> Self {
        match code {
            0 => Self::Standby,
            1 => Self::Sortie,
            2 => Self::AirDefense,
            3 => Self::Retreat,
            4 => Self::Rest,
            other => Self::Unknown(other),
        }
    }
}

impl From<ActionMode> for u8 {
    fn from(mode: ActionMode) -> Self {
        match mode {
            ActionMode::Standby => 0,
            ActionMode::Sortie => 1,
            ActionMode::AirDefense => 2,
            ActionMode::Retreat => 3,
            ActionMode::Rest => 4,
            ActionMode::Unknown(code) => code,
        }
    }
}

impl fmt::Display for ActionMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Combat radius of an air corps.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Distance {
    #[serde(alias = "api_base")]
    pub base: u32,
    #[serde(default, alias = "api_bonus")]
    pub bonus: u32,
}

impl Distance {
    pub fn total(self) -> u32 {
        self.base + self.bonus
    }
}

/// A land-based air corps.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(from = "RawAirCorps")]
pub struct AirCorps {
    pub area_id: AreaId,
    pub id: CorpsId,
    pub name: String,
    pub distance: Distance,
    pub action_mode: ActionMode,
    #[serde(serialize_with = "serialize_squadrons")]
    pub squadrons: BTreeMap<u32, Squadron>,
}

impl AirCorps {
    pub fn new<I>(
        area_id: AreaId,
        id: CorpsId,
        name: impl Into<String>,
        distance: Distance,
        action_mode: ActionMode,
        squadrons: I,
    ) -> Self
    where
        I: IntoIterator<Item = Squadron>,
    {
        Self {
            area_id,
            id,
            name: name.into(),
            distance,
            action_mode,
            squadrons: squadrons.into_iter().map(|s| (s.id, s)).collect(),
        }
    }

    /// Total combat radius (base plus bonus).
    pub fn distance(&self) -> u32 {
        self.distance.total()
    }

    /// Merge refreshed squadrons (after a resupply or plane change) by id.
    pub fn supply<I>(&mut self, squadrons: I)
    where
        I: IntoIterator<Item = Squadron>,
    {
        self.squadrons
            .extend(squadrons.into_iter().map(|s| (s.id, s)));
    }
}

fn serialize_squadrons<S>(
    squadrons: &BTreeMap<u32, Squadron>,
    serializer: S,
) -> std::result::Result<S::Ok, S::Error>
where
    S: serde::Serializer,
{
    serializer.collect_seq(squadrons.values())
}

#[derive(Deserialize)]
struct RawAirCorps {
    #[serde(alias = "api_area_id")]
    area_id: AreaId,
    #[serde(alias = "api_rid")]
    id: CorpsId,
    #[serde(default, alias = "api_name")]
    name: String,
    #[serde(default, alias = "api_distance")]
    distance: Distance,
    #[serde(alias = "api_action_kind")]
    action_mode: ActionMode,
    #[serde(default, alias = "api_plane_info")]
    squadrons: Vec<Squadron>,
}

impl From<RawAirCorps> for AirCorps {
    fn from(raw: RawAirCorps) -> Self {
        AirCorps::new(
            raw.area_id,
            raw.id,
            raw.name,
            raw.distance,
            raw.action_mode,
            raw.squadrons,
        )
    }
}

/// All air corps, grouped by map area.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(from = "Vec<AirCorps>", into = "Vec<AirCorps>")]
pub struct Airbase {
    areas: BTreeMap<AreaId, BTreeMap<CorpsId, AirCorps>>,
}

impl Airbase {
    /// Group air corps by area. A later corps with the same area and id
    /// replaces an earlier one.
    pub fn from_corps<I>(corps: I) -> Self
    where
        I: IntoIterator<Item = AirCorps>,
    {
        let mut areas: BTreeMap<AreaId, BTreeMap<CorpsId, AirCorps>> = BTreeMap::new();
        for c in corps {
            areas.entry(c.area_id).or_default().insert(c.id, c);
        }
        Self { areas }
    }

    /// Air corps of one area keyed by corps id.
    pub fn area(&self, area: AreaId) -> Option<&BTreeMap<CorpsId, AirCorps>> {
        self.areas.get(&area)
    }

    /// Known area ids in ascending order.
    pub fn area_ids(&self) -> Vec<AreaId> {
        self.areas.keys().copied().collect()
    }

    /// Every air corps, ordered by area then corps id.
    pub fn corps(&self) -> impl Iterator<Item = &AirCorps> {
        self.areas.values().flat_map(|area| area.values())
    }

    pub fn is_empty(&self) -> bool {
        self.areas.is_empty()
    }
}

impl From<Vec<AirCorps>> for Airbase {
    fn from(corps: Vec<AirCorps>) -> Self {
        Self::from_corps(corps)
    }
}

impl From<Airbase> for Vec<AirCorps> {
    fn from(airbase: Airbase) -> Self {
        airbase
            .areas
            .into_values()
            .flat_map(|area| area.into_values())
            .collect()
    }
}
