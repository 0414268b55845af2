//! Sortie-wide detection summary, covering combined fleets.

use crate::equipment::EquipmentRegistry;
use crate::fleet::Fleet;

use super::evaluation::{Detection, COEFFICIENT_TABLE};

/// Detection of every fleet in a sortie, summed per coefficient.
#[derive(Debug, Clone, PartialEq)]
pub struct SortieDetection {
    fleets: Vec<Detection>,
    values: [f64; 5],
}

impl SortieDetection {
    /// Per-fleet scores, main fleet first.
    pub fn fleets(&self) -> &[Detection] {
        &self.fleets
    }

    /// Summed scores for the coefficients in [`COEFFICIENT_TABLE`].
    pub fn values(&self) -> [f64; 5] {
        self.values
    }

    /// True when any fleet contains unclassified items.
    pub fn los_failed(&self) -> bool {
        self.fleets.iter().any(Detection::los_failed)
    }

    pub fn is_combined(&self) -> bool {
        self.fleets.len() > 1
    }
}

/// Evaluate a sortie's main fleet and optional escort fleet.
///
/// Escaped ships are left out and both fleets share the HQ level.
pub fn sortie_detection<R>(
    registry: &R,
    main: &Fleet,
    escort: Option<&Fleet>,
    hq_level: u32,
) -> SortieDetection
where
    R: EquipmentRegistry + ?Sized,
{
    let fleets: Vec<Detection> = std::iter::once(main)
        .chain(escort)
        .map(|fleet| Detection::for_fleet(registry, fleet.active_ships(), hq_level))
        .collect();

    let values: [f64; 5] = COEFFICIENT_TABLE.map(|c| fleets.iter().map(|d| d.value(c)).sum());
    SortieDetection { fleets, values }
}
