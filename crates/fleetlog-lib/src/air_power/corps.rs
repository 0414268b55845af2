//! Air power of a whole air corps.

use tracing::debug;

use crate::airbase::{ActionMode, AirCorps};
use crate::equipment::{Equipment, EquipmentCategory, EquipmentRegistry};

use super::squadron::compute_squadron_air_power;
use super::value::{AirPower, AirPowerDisplayMode};

/// Percentage applied when no reconnaissance plane is deployed.
pub const NO_RECON_BONUS_PERCENT: i32 = 100;

/// Sum of the squadrons of an air corps.
///
/// On air defense the total is raised by the best reconnaissance plane
/// deployed in the corps (see [`defense_recon_bonus_percent`]).
pub fn compute_air_corps_air_power<R>(
    registry: &R,
    corps: &AirCorps,
    mode: AirPowerDisplayMode,
) -> AirPower
where
    R: EquipmentRegistry + ?Sized,
{
    let total: AirPower = corps
        .squadrons
        .values()
        .map(|squadron| compute_squadron_air_power(registry, squadron, corps.action_mode, mode))
        .sum();

    if corps.action_mode != ActionMode::AirDefense {
        return total;
    }

    let percent = defense_recon_bonus_percent(registry, corps);
    let boosted = total.scale_percent(percent);
    debug!(
        corps = corps.id,
        area = corps.area_id,
        percent,
        min = boosted.min(),
        max = boosted.max(),
        "applied air defense recon bonus"
    );
    boosted
}

/// Best reconnaissance bonus among the corps' squadrons, as a percentage.
///
/// Every squadron with resolvable equipment is considered, whatever its
/// aircraft count.
pub fn defense_recon_bonus_percent<R>(registry: &R, corps: &AirCorps) -> i32
where
    R: EquipmentRegistry + ?Sized,
{
    corps
        .squadrons
        .values()
        .filter_map(|squadron| registry.lookup(squadron.slot_id))
        .map(recon_bonus_percent)
        .max()
        .unwrap_or(NO_RECON_BONUS_PERCENT)
}

/// Air defense bonus granted by a single item.
pub fn recon_bonus_percent(item: &Equipment) -> i32 {
    let search = item.params.search;
    match item.category {
        EquipmentCategory::CarrierRecon | EquipmentCategory::CarrierReconII => {
            if search >= 9 {
                130
            } else {
                120
            }
        }
        EquipmentCategory::SeaplaneRecon | EquipmentCategory::FlyingBoat => match search {
            s if s >= 9 => 116,
            8 => 113,
            _ => 110,
        },
        _ => NO_RECON_BONUS_PERCENT,
    }
}
