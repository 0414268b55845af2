//! Per-ship decomposition of the detection score.

use std::collections::BTreeMap;

use tracing::warn;

use crate::equipment::constants::{
    SG_RADAR_INITIAL, SG_RADAR_LATE, SK_RADAR, UK_SHIP_CLASSES, US_SHIP_CLASSES,
};
use crate::equipment::{Equipment, EquipmentCategory, EquipmentRegistry, MasterId};
use crate::fleet::Ship;

/// Ship and equipment terms of one ship.
#[derive(Debug, Clone, PartialEq)]
pub struct ShipParam {
    pub ship_id: i64,
    item_param_los: i32,
    item_counts: BTreeMap<MasterId, usize>,
    item_bonus: i32,
    ship_los: f64,
    item_los: f64,
    los_failed: bool,
    inconsistent: bool,
}

impl ShipParam {
    /// Decompose `ship` using the equipment resolvable through `registry`.
    ///
    /// Main slots and the extra slot are considered; slots the registry
    /// cannot resolve are ignored.
    pub fn evaluate<R>(registry: &R, ship: &Ship) -> Self
    where
        R: EquipmentRegistry + ?Sized,
    {
        let items: Vec<&Equipment> = ship
            .equipped()
            .filter_map(|slot| registry.lookup(slot))
            .collect();

        let item_param_los: i32 = items.iter().map(|item| item.params.search).sum();
        let mut item_counts: BTreeMap<MasterId, usize> = BTreeMap::new();
        for item in &items {
            *item_counts.entry(item.master_id).or_insert(0) += 1;
        }
        let item_bonus = synergy_bonus(ship.ctype, &item_counts);

        let radicand = ship.search - item_param_los - item_bonus;
        let inconsistent = radicand < 0;
        let ship_los = if inconsistent {
            warn!(
                ship = ship.id,
                search = ship.search,
                item_param_los,
                item_bonus,
                "ship search is lower than its equipment; snapshot is out of date"
            );
            f64::NAN
        } else {
            f64::from(radicand).sqrt()
        };

        Self {
            ship_id: ship.id,
            item_param_los,
            item_los: items.iter().map(|item| item_los(item)).sum(),
            los_failed: items.iter().any(|item| !item.is_classified()),
            item_counts,
            item_bonus,
            ship_los,
            inconsistent,
        }
    }

    /// Sum of the equipment's raw search stats.
    pub fn item_param_los(&self) -> i32 {
        self.item_param_los
    }

    /// Equipped copies per master id.
    pub fn item_counts(&self) -> &BTreeMap<MasterId, usize> {
        &self.item_counts
    }

    /// Visible search granted by equipment synergies.
    pub fn item_bonus(&self) -> i32 {
        self.item_bonus
    }

    /// Square root of the ship's naked search stat. NaN when the ship's
    /// displayed search is lower than what its equipment accounts for.
    pub fn ship_los(&self) -> f64 {
        self.ship_los
    }

    /// Weighted equipment term.
    pub fn item_los(&self) -> f64 {
        self.item_los
    }

    /// True when an item has not been classified by the client yet.
    pub fn los_failed(&self) -> bool {
        self.los_failed
    }

    /// True when the naked search stat came out negative.
    pub fn is_inconsistent(&self) -> bool {
        self.inconsistent
    }
}

/// Search bonus shown on the ship for nation-specific radar synergies.
///
/// The US and UK bonuses are independent and add up.
pub fn synergy_bonus(ctype: u32, item_counts: &BTreeMap<MasterId, usize>) -> i32 {
    let count = |id: MasterId| item_counts.get(&id).copied().unwrap_or(0);
    let mut bonus = 0;
    if US_SHIP_CLASSES.contains(&ctype) {
        if count(SG_RADAR_INITIAL) > 0 {
            bonus += 1;
        }
        if count(SK_RADAR) > 0 {
            bonus += 2;
        }
        bonus += 4 * count(SG_RADAR_LATE) as i32;
    }
    if UK_SHIP_CLASSES.contains(&ctype) && count(SK_RADAR) > 0 {
        bonus += 1;
    }
    bonus
}

/// Weighted contribution of one item to the equipment term.
pub fn item_los(item: &Equipment) -> f64 {
    let los = f64::from(item.params.search);
    let improvement = f64::from(item.level).sqrt();
    match item.category {
        EquipmentCategory::TorpedoBomber => 0.8 * los,
        EquipmentCategory::CarrierRecon => 1.0 * (los + 1.2 * improvement),
        EquipmentCategory::SeaplaneRecon => 1.2 * (los + 1.2 * improvement),
        EquipmentCategory::SeaplaneBomber => 1.1 * (los + 1.15 * improvement),
        EquipmentCategory::SmallRadar => 0.6 * (los + 1.25 * improvement),
        EquipmentCategory::LargeRadar => 0.6 * (los + 1.4 * improvement),
        EquipmentCategory::CarrierFighter
        | EquipmentCategory::DiveBomber
        | EquipmentCategory::CarrierReconII
        | EquipmentCategory::FlyingBoat
        | EquipmentCategory::SeaplaneFighter
        | EquipmentCategory::LandAttacker
        | EquipmentCategory::LandFighter
        | EquipmentCategory::LandRecon
        | EquipmentCategory::JetFighterBomber
        | EquipmentCategory::Other(_) => 0.6 * los,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    use crate::equipment::{EquipmentMaster, EquipmentParams, SlotId};

    fn item(slot: SlotId, master_id: MasterId, category: EquipmentCategory, search: i32, level: u8) -> Equipment {
        let master = EquipmentMaster {
            id: master_id,
            name: format!("item {master_id}"),
            type1: 8,
            category,
            params: EquipmentParams {
                search,
                ..EquipmentParams::default()
            },
        };
        Equipment::from_master(&master, slot, level, 0)
    }

    fn registry(items: Vec<Equipment>) -> HashMap<SlotId, Equipment> {
        items.into_iter().map(|i| (i.slot_id, i)).collect()
    }

    fn counts(pairs: &[(MasterId, usize)]) -> BTreeMap<MasterId, usize> {
        pairs.iter().copied().collect()
    }

    #[test]
    fn naked_search_is_square_root_of_remaining_stat() {
        let reg = registry(vec![item(1, 100, EquipmentCategory::Other(1), 20, 0)]);
        let ship = Ship::new(1, 0, 100, vec![Some(1)]);
        let param = ShipParam::evaluate(&reg, &ship);
        assert_eq!(param.item_param_los(), 20);
        assert!((param.ship_los() - 80f64.sqrt()).abs() < 1e-12);
        assert!((param.ship_los() - 8.944).abs() < 1e-3);
        assert!(!param.is_inconsistent());
    }

    #[test]
    fn extra_slot_and_unresolved_slots() {
        let reg = registry(vec![
            item(1, 100, EquipmentCategory::SmallRadar, 5, 0),
            item(2, 101, EquipmentCategory::SmallRadar, 3, 0),
        ]);
        let mut ship = Ship::new(1, 0, 50, vec![Some(1), Some(99), None]);
        ship.extra_slot = Some(2);
        let param = ShipParam::evaluate(&reg, &ship);
        assert_eq!(param.item_param_los(), 8);
        assert_eq!(param.item_counts(), &counts(&[(100, 1), (101, 1)]));
        assert!((param.item_los() - 0.6 * 8.0).abs() < 1e-12);
    }

    #[test]
    fn us_radar_synergies_stack() {
        let found = counts(&[(SG_RADAR_INITIAL, 1), (SK_RADAR, 2), (SG_RADAR_LATE, 2)]);
        assert_eq!(synergy_bonus(65, &found), 1 + 2 + 8);
        assert_eq!(synergy_bonus(67, &found), 1);
        assert_eq!(synergy_bonus(1, &found), 0);
        assert_eq!(synergy_bonus(65, &BTreeMap::new()), 0);
    }

    #[test]
    fn synergy_reduces_naked_search() {
        let reg = registry(vec![item(1, SK_RADAR, EquipmentCategory::SmallRadar, 10, 0)]);
        let ship = Ship::new(1, 69, 68, vec![Some(1)]);
        let param = ShipParam::evaluate(&reg, &ship);
        assert_eq!(param.item_bonus(), 2);
        assert!((param.ship_los() - 56f64.sqrt()).abs() < 1e-12);
    }

    #[test]
    fn per_category_weights() {
        let cases = [
            (EquipmentCategory::TorpedoBomber, 5, 4, 0.8 * 5.0),
            (EquipmentCategory::CarrierRecon, 5, 4, 5.0 + 1.2 * 2.0),
            (EquipmentCategory::SeaplaneRecon, 5, 4, 1.2 * (5.0 + 1.2 * 2.0)),
            (EquipmentCategory::SeaplaneBomber, 5, 4, 1.1 * (5.0 + 1.15 * 2.0)),
            (EquipmentCategory::SmallRadar, 5, 4, 0.6 * (5.0 + 1.25 * 2.0)),
            (EquipmentCategory::LargeRadar, 5, 4, 0.6 * (5.0 + 1.4 * 2.0)),
            (EquipmentCategory::CarrierReconII, 5, 4, 0.6 * 5.0),
            (EquipmentCategory::FlyingBoat, 5, 4, 0.6 * 5.0),
        ];
        for (category, search, level, want) in cases {
            let got = item_los(&item(1, 1, category, search, level));
            assert!((got - want).abs() < 1e-12, "{category}: {got} != {want}");
        }
    }

    #[test]
    fn unclassified_item_flags_the_ship() {
        let mut unknown = item(1, 500, EquipmentCategory::Other(99), 3, 0);
        unknown.type1 = 0;
        let reg = registry(vec![unknown]);
        let param = ShipParam::evaluate(&reg, &Ship::new(1, 0, 30, vec![Some(1)]));
        assert!(param.los_failed());
        assert!((param.item_los() - 1.8).abs() < 1e-12);
    }

    #[test]
    fn negative_radicand_is_reported_not_hidden() {
        let reg = registry(vec![item(1, 100, EquipmentCategory::LargeRadar, 20, 0)]);
        let param = ShipParam::evaluate(&reg, &Ship::new(1, 0, 10, vec![Some(1)]));
        assert!(param.is_inconsistent());
        assert!(param.ship_los().is_nan());
    }
}
