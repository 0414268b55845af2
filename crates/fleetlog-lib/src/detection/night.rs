//! Night reconnaissance (aviation detection) estimate.

use tracing::debug;

use crate::equipment::{Equipment, EquipmentCategory, EquipmentRegistry};
use crate::fleet::Ship;

use super::evaluation::truncate;

/// Appended to the rendered estimate: the score that guarantees a sighting
/// on the reference map.
pub const NIGHT_RECON_SUFFIX: &str = "(6-3: 35.2 for a sure sighting)";

/// Aviation detection score of a group of ships.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct NightRecon {
    value: f64,
}

impl NightRecon {
    /// Sum the contributions of seaplane and flying boat slots.
    ///
    /// Only main slots count since the extra slot carries no aircraft.
    pub fn for_ships<'a, R, I>(registry: &R, ships: I) -> Self
    where
        R: EquipmentRegistry + ?Sized,
        I: IntoIterator<Item = &'a Ship>,
    {
        let value = ships
            .into_iter()
            .flat_map(|ship| ship.slots_with_aircraft())
            .filter_map(|(slot, count)| registry.lookup(slot).map(|item| slot_contribution(item, count)))
            .sum();
        debug!(value, "evaluated night reconnaissance");
        Self { value }
    }

    pub fn value(&self) -> f64 {
        self.value
    }

    /// Value truncated to one decimal, followed by [`NIGHT_RECON_SUFFIX`].
    pub fn render(&self) -> String {
        format!("{:.1} {NIGHT_RECON_SUFFIX}", truncate(self.value, 10.0))
    }
}

/// Contribution of `count` aircraft of `item`. Items other than seaplane
/// recon, seaplane bombers and flying boats contribute nothing.
pub fn slot_contribution(item: &Equipment, count: u32) -> f64 {
    let search = f64::from(item.params.search);
    let count = f64::from(count);
    match item.category {
        EquipmentCategory::SeaplaneRecon | EquipmentCategory::SeaplaneBomber => {
            search * count.sqrt().sqrt()
        }
        EquipmentCategory::FlyingBoat => search * count.sqrt(),
        _ => 0.0,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    use crate::equipment::{EquipmentMaster, EquipmentParams, SlotId};

    fn plane(slot: SlotId, category: EquipmentCategory, search: i32) -> Equipment {
        let master = EquipmentMaster {
            id: 25,
            name: "Type 0 Reconnaissance Seaplane".to_string(),
            type1: 5,
            category,
            params: EquipmentParams {
                search,
                ..EquipmentParams::default()
            },
        };
        Equipment::from_master(&master, slot, 0, 0)
    }

    fn registry() -> HashMap<SlotId, Equipment> {
        [
            plane(1, EquipmentCategory::SeaplaneRecon, 5),
            plane(2, EquipmentCategory::SeaplaneBomber, 6),
            plane(3, EquipmentCategory::FlyingBoat, 9),
            plane(4, EquipmentCategory::CarrierRecon, 7),
        ]
        .into_iter()
        .map(|i| (i.slot_id, i))
        .collect()
    }

    #[test]
    fn seaplanes_use_fourth_root_and_flying_boats_square_root() {
        let mut ship = Ship::new(1, 0, 40, vec![Some(1), Some(3), Some(4)]);
        ship.onslot = vec![16, 4, 8];
        let recon = NightRecon::for_ships(&registry(), [&ship]);
        // 5 * 2 + 9 * 2 + 0
        assert!((recon.value() - 28.0).abs() < 1e-12);
        assert_eq!(recon.render(), format!("28.0 {NIGHT_RECON_SUFFIX}"));
    }

    #[test]
    fn sums_across_ships_and_skips_extra_slot() {
        let mut first = Ship::new(1, 0, 40, vec![Some(2)]);
        first.onslot = vec![1];
        first.extra_slot = Some(1);
        let mut second = Ship::new(2, 0, 40, vec![None, Some(1)]);
        second.onslot = vec![0, 81];
        let recon = NightRecon::for_ships(&registry(), &[first, second]);
        assert!((recon.value() - (6.0 + 15.0)).abs() < 1e-12);
    }

    #[test]
    fn empty_slots_contribute_nothing() {
        let mut ship = Ship::new(1, 0, 40, vec![Some(1), Some(99)]);
        ship.onslot = vec![0, 12];
        let recon = NightRecon::for_ships(&registry(), [&ship]);
        assert_eq!(recon.value(), 0.0);
        assert_eq!(recon.render(), format!("0.0 {NIGHT_RECON_SUFFIX}"));
    }

    #[test]
    fn rendering_truncates_to_one_decimal() {
        let mut ship = Ship::new(1, 0, 40, vec![Some(1)]);
        ship.onslot = vec![2];
        let recon = NightRecon::for_ships(&registry(), [&ship]);
        // 5 * 2^(1/4) = 5.946...
        assert!(recon.render().starts_with("5.9 "));
    }
}
