//! Air power of a single squadron.
//!
//! The base value depends on the aircraft class; the proficiency estimate adds
//! a constant per-tier bonus plus the square root of the hidden proficiency
//! bounds of the tier.

use crate::airbase::{ActionMode, Squadron};
use crate::equipment::constants::{
    BOMBER_PROFICIENCY_BONUS, FIGHTER_PROFICIENCY_BONUS, INTERNAL_PROFICIENCY, MAX_ALV,
    SEAPLANE_BOMBER_PROFICIENCY_BONUS,
};
use crate::equipment::{Equipment, EquipmentCategory, EquipmentRegistry};

use super::value::{AirPower, AirPowerDisplayMode};

/// Proficiency bonus table applied to an aircraft class.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ProficiencyRow {
    Fighter,
    Bomber,
    SeaplaneBomber,
}

impl ProficiencyRow {
    /// Constant bonus per proficiency tier.
    pub fn table(self) -> &'static [i32; 8] {
        match self {
            Self::Fighter => &FIGHTER_PROFICIENCY_BONUS,
            Self::Bomber => &BOMBER_PROFICIENCY_BONUS,
            Self::SeaplaneBomber => &SEAPLANE_BOMBER_PROFICIENCY_BONUS,
        }
    }

    /// Constant bonus for a tier; tiers above the maximum use the top row entry.
    pub fn bonus(self, alv: u8) -> i32 {
        self.table()[usize::from(alv.min(MAX_ALV))]
    }
}

/// Inclusive bounds of the hidden proficiency value for a tier.
pub fn proficiency_tier(alv: u8) -> (i32, i32) {
    let alv = usize::from(alv.min(MAX_ALV));
    (INTERNAL_PROFICIENCY[alv], INTERNAL_PROFICIENCY[alv + 1] - 1)
}

/// Base air power (before proficiency) and bonus row for `count` aircraft.
///
/// Land-based fighters use their anti-bomber rating only while the air
/// corps is on air defense.
pub fn base_air_power(item: &Equipment, count: u32, action_mode: ActionMode) -> (f64, ProficiencyRow) {
    let sqrt_count = f64::from(count).sqrt();
    let attack = f64::from(item.params.attack);
    let evasion = f64::from(item.params.evasion);
    let firepower = f64::from(item.params.firepower);
    let level = f64::from(item.level);

    match item.category {
        EquipmentCategory::CarrierFighter | EquipmentCategory::SeaplaneFighter => (
            (attack + 0.2 * level) * sqrt_count,
            ProficiencyRow::Fighter,
        ),
        EquipmentCategory::LandFighter if action_mode == ActionMode::AirDefense => (
            (attack + evasion + 2.0 * firepower + 0.2 * level) * sqrt_count,
            ProficiencyRow::Fighter,
        ),
        EquipmentCategory::LandFighter => (
            (attack + 1.5 * evasion + 0.2 * level) * sqrt_count,
            ProficiencyRow::Fighter,
        ),
        EquipmentCategory::DiveBomber => {
            let improvement = if item.params.attack > 3 { 0.25 * level } else { 0.0 };
            ((attack + improvement) * sqrt_count, ProficiencyRow::Bomber)
        }
        EquipmentCategory::TorpedoBomber
        | EquipmentCategory::LandAttacker
        | EquipmentCategory::JetFighterBomber => (attack * sqrt_count, ProficiencyRow::Bomber),
        EquipmentCategory::SeaplaneBomber => (attack * sqrt_count, ProficiencyRow::SeaplaneBomber),
        EquipmentCategory::CarrierRecon
        | EquipmentCategory::CarrierReconII
        | EquipmentCategory::SeaplaneRecon
        | EquipmentCategory::FlyingBoat
        | EquipmentCategory::SmallRadar
        | EquipmentCategory::LargeRadar
        | EquipmentCategory::LandRecon
        | EquipmentCategory::Other(_) => {
            // Land-based recon gains a flat point from its second improvement.
            let recon_bonus =
                if item.category == EquipmentCategory::LandRecon && item.level >= 2 { 1.0 } else { 0.0 };
            (attack * sqrt_count + recon_bonus, ProficiencyRow::Bomber)
        }
    }
}

/// Air power of `count` aircraft of `item`.
///
/// With a proficiency mode the result spans the tier's hidden proficiency
/// bounds; otherwise it is the floored base value alone.
pub fn squadron_air_power(
    item: &Equipment,
    count: u32,
    action_mode: ActionMode,
    mode: AirPowerDisplayMode,
) -> AirPower {
    if count == 0 {
        return AirPower::ZERO;
    }

    let (base, row) = base_air_power(item, count, action_mode);
    if !mode.includes_proficiency() {
        return AirPower::single(base.floor() as i32);
    }

    let const_bonus = f64::from(row.bonus(item.alv));
    let (tier_low, tier_high) = proficiency_tier(item.alv);
    // The tier bounds are divided as integers before the square root.
    let min = (base + const_bonus + f64::from(tier_low / 10).sqrt()).floor() as i32;
    let max = (base + const_bonus + f64::from(tier_high / 10).sqrt()).floor() as i32;
    AirPower::new(min, max)
}

/// Air power of one squadron, resolving its equipment through `registry`.
///
/// Empty squadrons and unresolved equipment contribute zero.
pub fn compute_squadron_air_power<R>(
    registry: &R,
    squadron: &Squadron,
    action_mode: ActionMode,
    mode: AirPowerDisplayMode,
) -> AirPower
where
    R: EquipmentRegistry + ?Sized,
{
    if squadron.count == 0 {
        return AirPower::ZERO;
    }
    match registry.lookup(squadron.slot_id) {
        Some(item) => squadron_air_power(item, squadron.count, action_mode, mode),
        None => AirPower::ZERO,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::equipment::{EquipmentMaster, EquipmentParams, SlotId};
    use std::collections::HashMap;

    fn item(category: EquipmentCategory, params: EquipmentParams, level: u8, alv: u8) -> Equipment {
        let master = EquipmentMaster {
            id: 1,
            name: "test plane".to_string(),
            type1: 3,
            category,
            params,
        };
        Equipment::from_master(&master, 100, level, alv)
    }

    fn attack(value: i32) -> EquipmentParams {
        EquipmentParams {
            attack: value,
            ..EquipmentParams::default()
        }
    }

    #[test]
    fn tiers_are_ordered_and_zero_tier_spans_zero_to_nine() {
        assert_eq!(proficiency_tier(0), (0, 9));
        for alv in 0..=MAX_ALV {
            let (low, high) = proficiency_tier(alv);
            assert!(low <= high, "tier {alv}");
        }
        assert_eq!(proficiency_tier(7), (100, 120));
    }

    #[test]
    fn every_row_has_zero_bonus_at_zero_tier() {
        for row in [ProficiencyRow::Fighter, ProficiencyRow::Bomber, ProficiencyRow::SeaplaneBomber] {
            assert_eq!(row.bonus(0), 0);
        }
        assert_eq!(ProficiencyRow::Fighter.bonus(7), 22);
        assert_eq!(ProficiencyRow::SeaplaneBomber.bonus(7), 6);
    }

    #[test]
    fn fighter_without_proficiency_matches_reference_scenario() {
        let fighter = item(EquipmentCategory::CarrierFighter, attack(20), 0, 0);
        let (base, row) = base_air_power(&fighter, 18, ActionMode::Sortie);
        assert!((base - 84.852_813_742_385_7).abs() < 1e-9);
        assert_eq!(row, ProficiencyRow::Fighter);

        let plain = squadron_air_power(&fighter, 18, ActionMode::Sortie, AirPowerDisplayMode::BaseOnly);
        assert_eq!(plain, AirPower::single(84));

        // Tier 0 spans hidden proficiency 0..=9, and 9 / 10 truncates to 0.
        let ranged = squadron_air_power(
            &fighter,
            18,
            ActionMode::Sortie,
            AirPowerDisplayMode::RangeWithProficiency,
        );
        assert_eq!(ranged, AirPower::new(84, 84));
    }

    #[test]
    fn max_proficiency_fighter_range() {
        // Type 0 Fighter Model 21 (Skilled) style: attack 8, alv 7, 18 planes.
        let fighter = item(EquipmentCategory::CarrierFighter, attack(8), 0, 7);
        let value = squadron_air_power(&fighter, 18, ActionMode::Sortie, AirPowerDisplayMode::Range);
        // base = 8 * sqrt(18) = 33.94; + 22; + sqrt(10) = 3.16 / sqrt(12) = 3.46
        assert_eq!(value, AirPower::new(59, 59));

        let value = squadron_air_power(&fighter, 24, ActionMode::Sortie, AirPowerDisplayMode::Range);
        // base = 8 * sqrt(24) = 39.19; 39.19 + 22 + 3.16 = 64.35; + 3.46 = 64.65
        assert_eq!(value, AirPower::new(64, 64));
    }

    #[test]
    fn land_fighter_uses_anti_bomber_only_on_air_defense() {
        let params = EquipmentParams {
            attack: 11,
            evasion: 3,
            firepower: 1,
            search: 0,
        };
        let interceptor = item(EquipmentCategory::LandFighter, params, 0, 0);

        let (defense, _) = base_air_power(&interceptor, 16, ActionMode::AirDefense);
        assert!((defense - (11.0 + 3.0 + 2.0) * 4.0).abs() < 1e-9);

        let (sortie, _) = base_air_power(&interceptor, 16, ActionMode::Sortie);
        assert!((sortie - (11.0 + 4.5) * 4.0).abs() < 1e-9);
    }

    #[test]
    fn dive_bomber_improvement_needs_more_than_three_attack() {
        let weak = item(EquipmentCategory::DiveBomber, attack(3), 4, 0);
        let (base, row) = base_air_power(&weak, 4, ActionMode::Sortie);
        assert!((base - 6.0).abs() < 1e-9);
        assert_eq!(row, ProficiencyRow::Bomber);

        let strong = item(EquipmentCategory::DiveBomber, attack(4), 4, 0);
        let (base, _) = base_air_power(&strong, 4, ActionMode::Sortie);
        assert!((base - 10.0).abs() < 1e-9);
    }

    #[test]
    fn seaplane_bomber_uses_its_own_row() {
        let bomber = item(EquipmentCategory::SeaplaneBomber, attack(3), 0, 7);
        let value = squadron_air_power(&bomber, 4, ActionMode::Sortie, AirPowerDisplayMode::Range);
        // 3 * 2 + 6 + sqrt(10) / sqrt(12)
        assert_eq!(value, AirPower::new(15, 15));
    }

    #[test]
    fn land_recon_gets_flat_point_from_second_improvement() {
        let recon = item(EquipmentCategory::LandRecon, attack(3), 2, 0);
        let (base, row) = base_air_power(&recon, 4, ActionMode::Sortie);
        assert!((base - 7.0).abs() < 1e-9);
        assert_eq!(row, ProficiencyRow::Bomber);

        let recon = item(EquipmentCategory::LandRecon, attack(3), 1, 0);
        let (base, _) = base_air_power(&recon, 4, ActionMode::Sortie);
        assert!((base - 6.0).abs() < 1e-9);
    }

    #[test]
    fn empty_and_unresolved_squadrons_contribute_zero() {
        let mut registry: HashMap<SlotId, Equipment> = HashMap::new();
        registry.insert(100, item(EquipmentCategory::CarrierFighter, attack(10), 0, 0));

        let empty = Squadron::active(1, 100, 0);
        assert_eq!(
            compute_squadron_air_power(&registry, &empty, ActionMode::Sortie, AirPowerDisplayMode::Range),
            AirPower::ZERO
        );

        let missing = Squadron::active(2, 555, 18);
        assert_eq!(
            compute_squadron_air_power(&registry, &missing, ActionMode::Sortie, AirPowerDisplayMode::Range),
            AirPower::ZERO
        );

        let present = Squadron::active(3, 100, 16);
        assert_eq!(
            compute_squadron_air_power(&registry, &present, ActionMode::Sortie, AirPowerDisplayMode::BaseOnly),
            AirPower::single(40)
        );
    }

    #[test]
    fn ranges_are_ordered_for_every_tier() {
        for alv in 0..=MAX_ALV {
            for category in [
                EquipmentCategory::CarrierFighter,
                EquipmentCategory::TorpedoBomber,
                EquipmentCategory::SeaplaneBomber,
            ] {
                let plane = item(category, attack(0), 0, alv);
                let value = squadron_air_power(&plane, 1, ActionMode::Sortie, AirPowerDisplayMode::Range);
                assert!(value.min() <= value.max(), "{category} alv {alv}");
            }
        }
    }
}
