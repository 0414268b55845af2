//! High-altitude interception: the combined air defense of one airbase area.

use tracing::debug;

use crate::airbase::{ActionMode, AirCorps};
use crate::equipment::constants::ROCKET_FIGHTER_IDS;
use crate::equipment::EquipmentRegistry;

use super::corps::compute_air_corps_air_power;
use super::value::{AirPower, AirPowerDisplayMode};

/// Multiplier applied to the combined air defense value for the number of
/// rocket interceptors deployed.
pub fn rocket_multiplier(rockets: usize) -> f64 {
    match rockets {
        0 => 0.5,
        1 => 0.8,
        2 => 1.1,
        _ => 1.2,
    }
}

/// Number of rocket interceptors across the given air corps' squadrons.
pub fn count_rocket_fighters<'a, R, I>(registry: &R, corps: I) -> usize
where
    R: EquipmentRegistry + ?Sized,
    I: IntoIterator<Item = &'a AirCorps>,
{
    corps
        .into_iter()
        .flat_map(|c| c.squadrons.values())
        .filter_map(|squadron| registry.lookup(squadron.slot_id))
        .filter(|item| ROCKET_FIGHTER_IDS.contains(&item.master_id))
        .count()
}

/// Combined air power of the air corps on air defense within one area,
/// scaled by the rocket interceptor multiplier.
///
/// Each corps contributes its [`compute_air_corps_air_power`] value, recon
/// bonus included; the multiplier is applied once to the sum.
pub fn compute_airbase_defense_air_power<'a, R, I>(
    registry: &R,
    area: I,
    mode: AirPowerDisplayMode,
) -> AirPower
where
    R: EquipmentRegistry + ?Sized,
    I: IntoIterator<Item = &'a AirCorps>,
{
    let defending: Vec<&AirCorps> = area
        .into_iter()
        .filter(|c| c.action_mode == ActionMode::AirDefense)
        .collect();

    let rockets = count_rocket_fighters(registry, defending.iter().copied());
    let multiplier = rocket_multiplier(rockets);

    let total: AirPower = defending
        .iter()
        .map(|c| compute_air_corps_air_power(registry, c, mode))
        .sum();

    let scaled = total.scale(multiplier);
    debug!(
        corps = defending.len(),
        rockets,
        multiplier,
        min = scaled.min(),
        max = scaled.max(),
        "computed high-altitude interception air power"
    );
    scaled
}
