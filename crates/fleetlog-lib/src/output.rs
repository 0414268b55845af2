//! Serializable summaries of calculator results.
//!
//! Reports carry both the raw numbers and the string a GUI would show, so
//! JSON consumers never need to repeat the rendering rules.

use serde::Serialize;

use crate::air_power::{
    compute_air_corps_air_power, compute_airbase_defense_air_power, count_rocket_fighters,
    rocket_multiplier, AirPower,
};
use crate::airbase::{ActionMode, AirCorps, AreaId, CorpsId};
use crate::detection::{Detection, NightRecon, SortieDetection, COEFFICIENT_TABLE};
use crate::equipment::EquipmentRegistry;
use crate::settings::Settings;

/// Air power of one air corps.
#[derive(Debug, Clone, Serialize, PartialEq, Eq)]
pub struct AirCorpsReport {
    pub area_id: AreaId,
    pub id: CorpsId,
    pub name: String,
    pub action_mode: &'static str,
    pub distance: u32,
    pub min: i32,
    pub max: i32,
    pub rendered: String,
}

impl AirCorpsReport {
    pub fn from_corps<R>(registry: &R, corps: &AirCorps, settings: &Settings) -> Self
    where
        R: EquipmentRegistry + ?Sized,
    {
        let mode = settings.air_power_display_mode;
        let power = compute_air_corps_air_power(registry, corps, mode);
        Self {
            area_id: corps.area_id,
            id: corps.id,
            name: corps.name.clone(),
            action_mode: corps.action_mode.label(),
            distance: corps.distance(),
            min: power.min(),
            max: power.max(),
            rendered: power.render(mode),
        }
    }
}

/// High-altitude interception value of one area.
#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct AirDefenseReport {
    pub area_id: AreaId,
    /// Corps on air defense, by id.
    pub corps: Vec<CorpsId>,
    pub rocket_fighters: usize,
    pub multiplier: f64,
    pub min: i32,
    pub max: i32,
    pub rendered: String,
}

impl AirDefenseReport {
    pub fn from_area<R>(registry: &R, area_id: AreaId, area: &[&AirCorps], settings: &Settings) -> Self
    where
        R: EquipmentRegistry + ?Sized,
    {
        let mode = settings.air_power_display_mode;
        let defending: Vec<&AirCorps> = area
            .iter()
            .copied()
            .filter(|c| c.action_mode == ActionMode::AirDefense)
            .collect();
        let rocket_fighters = count_rocket_fighters(registry, defending.iter().copied());
        let power: AirPower =
            compute_airbase_defense_air_power(registry, area.iter().copied(), mode);
        Self {
            area_id,
            corps: defending.iter().map(|c| c.id).collect(),
            rocket_fighters,
            multiplier: rocket_multiplier(rocket_fighters),
            min: power.min(),
            max: power.max(),
            rendered: power.render(mode),
        }
    }
}

/// Detection score broken into its terms.
///
/// Numeric fields are `null` in JSON when the snapshot is inconsistent.
#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct DetectionReport {
    pub ships: usize,
    pub ship_term: f64,
    pub item_term: f64,
    pub hq_term: f64,
    pub space_term: f64,
    pub coefficient: f64,
    pub value: f64,
    /// Scores for coefficients 1 to 5.
    pub coefficient_values: [f64; 5],
    pub los_failed: bool,
    pub inconsistent: bool,
    pub rendered: String,
}

impl DetectionReport {
    pub fn from_detection(detection: &Detection, settings: &Settings) -> Self {
        let coefficient = settings.detection_coefficient;
        Self {
            ships: detection.ship_count(),
            ship_term: detection.ship_los(),
            item_term: detection.item_los(),
            hq_term: detection.hq_penalty(),
            space_term: detection.space_bonus(),
            coefficient,
            value: detection.value(coefficient),
            coefficient_values: detection.table(),
            los_failed: detection.los_failed(),
            inconsistent: detection.is_inconsistent(),
            rendered: detection.render(settings.detection_display_mode, coefficient),
        }
    }
}

/// One coefficient of a sortie summary.
#[derive(Debug, Clone, Copy, Serialize, PartialEq)]
pub struct CoefficientValue {
    pub coefficient: f64,
    pub value: f64,
}

/// Sortie-wide detection totals.
#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct SortieReport {
    pub combined: bool,
    pub los_failed: bool,
    pub fleets: Vec<DetectionReport>,
    pub values: Vec<CoefficientValue>,
}

impl SortieReport {
    pub fn from_sortie(sortie: &SortieDetection, settings: &Settings) -> Self {
        Self {
            combined: sortie.is_combined(),
            los_failed: sortie.los_failed(),
            fleets: sortie
                .fleets()
                .iter()
                .map(|d| DetectionReport::from_detection(d, settings))
                .collect(),
            values: COEFFICIENT_TABLE
                .iter()
                .zip(sortie.values())
                .map(|(coefficient, value)| CoefficientValue {
                    coefficient: *coefficient,
                    value,
                })
                .collect(),
        }
    }
}

/// Night reconnaissance estimate.
#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct NightReconReport {
    pub value: f64,
    pub rendered: String,
}

impl From<&NightRecon> for NightReconReport {
    fn from(recon: &NightRecon) -> Self {
        Self {
            value: recon.value(),
            rendered: recon.render(),
        }
    }
}
