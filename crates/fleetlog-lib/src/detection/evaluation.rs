//! Fleet and single-ship detection scores (formula 33).

use std::cmp::Ordering;

use serde::{Deserialize, Serialize};
use tracing::{debug, warn};

use crate::equipment::EquipmentRegistry;
use crate::fleet::Ship;

use super::ship_param::ShipParam;

/// Shown instead of a score when item data is stale or inconsistent.
pub const RELOAD_REQUIRED: &str = "<reload the game screen>";

/// Coefficients listed by the comparison table and reported to consumers.
pub const COEFFICIENT_TABLE: [f64; 5] = [1.0, 2.0, 3.0, 4.0, 5.0];

/// Added before truncating so values like `0.3` survive the round trip
/// through binary floating point.
const TRUNCATION_NUDGE: f64 = 1e-14;

/// How a [`Detection`] is rendered.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(from = "i64", into = "i64")]
pub enum DetectionDisplayMode {
    /// The score at the active coefficient, e.g. `36.128 (1.0)`.
    #[default]
    Single,
    /// The score followed by each of its terms.
    Breakdown,
    /// Scores for coefficients 1 to 5.
    CoefficientTable,
}

impl DetectionDisplayMode {
    /// Map a configured code to a mode. Unknown codes fall back to
    /// [`DetectionDisplayMode::Single`].
    pub fn from_code(code: i64) -> Self {
        match code {
            0 => Self::Single,
            1 => Self::Breakdown,
            2 => Self::CoefficientTable,
            other => {
                warn!(code = other, "unknown detection display mode; showing a single value");
                Self::Single
            }
        }
    }

    pub fn code(self) -> i64 {
        match self {
            Self::Single => 0,
            Self::Breakdown => 1,
            Self::CoefficientTable => 2,
        }
    }

    /// Whether the mode depends on every item being classified.
    pub fn requires_classification(self) -> bool {
        !matches!(self, Self::Single)
    }
}

impl From<i64> for DetectionDisplayMode {
    fn from(code: i64) -> Self {
        Self::from_code(code)
    }
}

impl From<DetectionDisplayMode> for i64 {
    fn from(mode: DetectionDisplayMode) -> Self {
        mode.code()
    }
}

/// Detection score of a fleet or a single ship.
///
/// `value(c) = ship term + item term * c + HQ penalty + space bonus`.
#[derive(Debug, Clone, PartialEq)]
pub struct Detection {
    ship_los: f64,
    item_los: f64,
    hq_penalty: f64,
    space_bonus: f64,
    los_failed: bool,
    inconsistent: bool,
    ship_count: usize,
}

impl Detection {
    /// Score a fleet commanded at `hq_level`.
    ///
    /// Each empty position below six adds 2 to the score; the HQ penalty is
    /// `-ceil(hq_level * 0.4)`.
    pub fn for_fleet<'a, R, I>(registry: &R, ships: I, hq_level: u32) -> Self
    where
        R: EquipmentRegistry + ?Sized,
        I: IntoIterator<Item = &'a Ship>,
    {
        let params: Vec<ShipParam> = ships
            .into_iter()
            .map(|ship| ShipParam::evaluate(registry, ship))
            .collect();
        let ship_count = params.len();

        // Adding zero turns the penalty of HQ level 0 into a positive zero.
        let hq_penalty = -(f64::from(hq_level) * 0.4).ceil() + 0.0;
        let space_bonus = 2.0 * (6.0 - ship_count as f64);

        let detection = Self {
            hq_penalty,
            space_bonus,
            ..Self::from_params(&params)
        };
        debug!(
            ships = ship_count,
            hq_level,
            ship_los = detection.ship_los,
            item_los = detection.item_los,
            los_failed = detection.los_failed,
            "evaluated fleet detection"
        );
        detection
    }

    /// Score a single ship. The HQ and space terms are zero.
    pub fn for_ship<R>(registry: &R, ship: &Ship) -> Self
    where
        R: EquipmentRegistry + ?Sized,
    {
        Self::from_params(&[ShipParam::evaluate(registry, ship)])
    }

    fn from_params(params: &[ShipParam]) -> Self {
        Self {
            ship_los: params.iter().map(ShipParam::ship_los).sum(),
            item_los: params.iter().map(ShipParam::item_los).sum(),
            hq_penalty: 0.0,
            space_bonus: 0.0,
            los_failed: params.iter().any(ShipParam::los_failed),
            inconsistent: params.iter().any(ShipParam::is_inconsistent),
            ship_count: params.len(),
        }
    }

    /// Score at the given equipment coefficient.
    pub fn value(&self, coefficient: f64) -> f64 {
        self.ship_los + self.item_los * coefficient + self.hq_penalty + self.space_bonus
    }

    /// Scores for every coefficient of [`COEFFICIENT_TABLE`].
    pub fn table(&self) -> [f64; 5] {
        COEFFICIENT_TABLE.map(|c| self.value(c))
    }

    pub fn ship_los(&self) -> f64 {
        self.ship_los
    }

    pub fn item_los(&self) -> f64 {
        self.item_los
    }

    pub fn hq_penalty(&self) -> f64 {
        self.hq_penalty
    }

    pub fn space_bonus(&self) -> f64 {
        self.space_bonus
    }

    pub fn ship_count(&self) -> usize {
        self.ship_count
    }

    /// True when some item has not been classified by the client yet.
    pub fn los_failed(&self) -> bool {
        self.los_failed
    }

    /// True when a ship's search stat did not cover its equipment.
    pub fn is_inconsistent(&self) -> bool {
        self.inconsistent
    }

    /// Order two scores by their value at `coefficient`.
    pub fn cmp_value(&self, other: &Self, coefficient: f64) -> Ordering {
        self.value(coefficient).total_cmp(&other.value(coefficient))
    }

    /// Render for display.
    ///
    /// Every number is truncated, never rounded: scores and terms to three
    /// decimals, the coefficient to one.
    pub fn render(&self, mode: DetectionDisplayMode, coefficient: f64) -> String {
        if self.inconsistent || (self.los_failed && mode.requires_classification()) {
            return RELOAD_REQUIRED.to_string();
        }

        match mode {
            DetectionDisplayMode::Breakdown => format!(
                "{:.3} ({:.3}{:+.3}({:.1}){:+.1}{:+.1})",
                truncate(self.value(coefficient), 1000.0),
                truncate(self.ship_los, 1000.0),
                truncate(self.item_los, 1000.0),
                truncate(coefficient, 10.0),
                self.hq_penalty,
                self.space_bonus,
            ),
            DetectionDisplayMode::CoefficientTable => {
                let [c1, c2, c3, c4, c5] = self.table().map(|v| truncate(v, 1000.0));
                format!("{c1:.3}(1) / {c2:.3}(2) / {c3:.3}(3) / {c4:.3}(4) / {c5:.3}(5)")
            }
            DetectionDisplayMode::Single => format!(
                "{:.3} ({:.1})",
                truncate(self.value(coefficient), 1000.0),
                truncate(coefficient, 10.0),
            ),
        }
    }
}

/// Truncate toward negative infinity at `1 / scale`, leaving a small offset
/// so the fixed-point formatter does not round the result back up.
pub fn truncate(value: f64, scale: f64) -> f64 {
    (((value + TRUNCATION_NUDGE) * scale).floor() + 0.1) / scale
}
