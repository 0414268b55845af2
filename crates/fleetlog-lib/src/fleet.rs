//! Ship and fleet snapshot model.

use serde::{Deserialize, Deserializer, Serialize};

use crate::equipment::SlotId;

/// A ship as seen by the detection calculators.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Ship {
    pub id: i64,
    #[serde(default)]
    pub ship_id: u32,
    #[serde(default)]
    pub name: Option<String>,
    #[serde(default)]
    pub level: u32,
    #[serde(default)]
    pub luck: u32,
    /// Hull class, used for nation-specific equipment synergies.
    #[serde(default)]
    pub ctype: u32,
    /// Ship type (destroyer, cruiser, ...).
    #[serde(default)]
    pub stype: u32,
    /// Displayed search stat, equipment included.
    pub search: i32,
    /// Equipped slots in order; empty slots are `None`.
    #[serde(default, deserialize_with = "deserialize_slots")]
    pub slots: Vec<Option<SlotId>>,
    /// Aircraft carried per slot, aligned with `slots`.
    #[serde(default)]
    pub onslot: Vec<u32>,
    #[serde(default, deserialize_with = "deserialize_slot")]
    pub extra_slot: Option<SlotId>,
    #[serde(default)]
    pub locked: bool,
}

impl Ship {
    /// Create a ship with the given search stat and equipped slots.
    pub fn new(id: i64, ctype: u32, search: i32, slots: Vec<Option<SlotId>>) -> Self {
        Self {
            id,
            ship_id: 0,
            name: None,
            level: 1,
            luck: 0,
            ctype,
            stype: 0,
            search,
            onslot: vec![0; slots.len()],
            slots,
            extra_slot: None,
            locked: false,
        }
    }

    /// Main slots followed by the extra slot, skipping empty ones.
    pub fn equipped(&self) -> impl Iterator<Item = SlotId> + '_ {
        self.slots.iter().flatten().chain(self.extra_slot.iter()).copied()
    }

    /// Main slots paired with their aircraft count. A slot without a count
    /// carries no aircraft.
    pub fn slots_with_aircraft(&self) -> impl Iterator<Item = (SlotId, u32)> + '_ {
        self.slots.iter().enumerate().filter_map(|(i, slot)| {
            slot.map(|id| (id, self.onslot.get(i).copied().unwrap_or(0)))
        })
    }

    pub fn display_name(&self) -> String {
        self.name
            .clone()
            .unwrap_or_else(|| format!("ship #{}", self.id))
    }
}

/// An ordered fleet.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Fleet {
    #[serde(default)]
    pub id: u32,
    #[serde(default)]
    pub name: Option<String>,
    pub ships: Vec<Ship>,
    /// Ships that withdrew during the sortie, aligned with `ships`.
    #[serde(default)]
    pub escaped: Vec<bool>,
}

impl Fleet {
    pub fn new(id: u32, ships: Vec<Ship>) -> Self {
        Self {
            id,
            name: None,
            ships,
            escaped: Vec::new(),
        }
    }

    /// Ships still present in the fleet.
    pub fn active_ships(&self) -> Vec<&Ship> {
        self.ships
            .iter()
            .enumerate()
            .filter(|(i, _)| !self.escaped.get(*i).copied().unwrap_or(false))
            .map(|(_, ship)| ship)
            .collect()
    }
}

/// Game payloads mark empty slots with `-1` (or `0` for a locked extra slot).
fn normalize_slot(raw: Option<SlotId>) -> Option<SlotId> {
    raw.filter(|id| *id > 0)
}

fn deserialize_slots<'de, D>(deserializer: D) -> std::result::Result<Vec<Option<SlotId>>, D::Error>
where
    D: Deserializer<'de>,
{
    let raw: Vec<Option<SlotId>> = Vec::deserialize(deserializer)?;
    Ok(raw.into_iter().map(normalize_slot).collect())
}

fn deserialize_slot<'de, D>(deserializer: D) -> std::result::Result<Option<SlotId>, D::Error>
where
    D: Deserializer<'de>,
{
    let raw: Option<SlotId> = Option::deserialize(deserializer)?;
    Ok(normalize_slot(raw))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn negative_and_null_slots_are_empty() {
        let json = r#"{"id": 1, "search": 40, "slots": [12, -1, null, 13], "extra_slot": 0}"#;
        let ship: Ship = serde_json::from_str(json).expect("valid ship");
        assert_eq!(ship.slots, vec![Some(12), None, None, Some(13)]);
        assert_eq!(ship.extra_slot, None);
        assert_eq!(ship.equipped().collect::<Vec<_>>(), vec![12, 13]);
    }

    #[test]
    fn equipped_includes_extra_slot_last() {
        let mut ship = Ship::new(1, 0, 40, vec![Some(3), None]);
        ship.extra_slot = Some(9);
        assert_eq!(ship.equipped().collect::<Vec<_>>(), vec![3, 9]);
    }

    #[test]
    fn slots_with_aircraft_default_missing_counts_to_zero() {
        let mut ship = Ship::new(1, 0, 40, vec![Some(3), None, Some(4)]);
        ship.onslot = vec![12];
        let pairs: Vec<_> = ship.slots_with_aircraft().collect();
        assert_eq!(pairs, vec![(3, 12), (4, 0)]);
    }

    #[test]
    fn escaped_ships_are_excluded() {
        let mut fleet = Fleet::new(
            1,
            vec![
                Ship::new(1, 0, 10, vec![]),
                Ship::new(2, 0, 10, vec![]),
                Ship::new(3, 0, 10, vec![]),
            ],
        );
        fleet.escaped = vec![false, true];
        let ids: Vec<i64> = fleet.active_ships().iter().map(|s| s.id).collect();
        assert_eq!(ids, vec![1, 3]);
    }
}
