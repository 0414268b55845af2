//! The air power range value and its textual rendering.

use std::iter::Sum;
use std::ops::{Add, AddAssign};

use serde::{Deserialize, Serialize};
use tracing::warn;

/// How an [`AirPower`] is computed and rendered.
///
/// The numeric codes match the settings file and CLI flags. Every mode other
/// than [`AirPowerDisplayMode::BaseOnly`] includes the proficiency bonus in
/// squadron values.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(from = "i64", into = "i64")]
pub enum AirPowerDisplayMode {
    /// Aircraft stats only, rendered as the maximum.
    BaseOnly,
    /// Estimated range, rendered as `min-max`.
    Range,
    /// Estimated range including the proficiency estimate, rendered as `min-max`.
    #[default]
    RangeWithProficiency,
    /// Midpoint of the estimated range.
    Midpoint,
    /// Midpoint of the range including the proficiency estimate.
    MidpointWithProficiency,
}

impl AirPowerDisplayMode {
    /// Map a configured code to a mode. Unknown codes fall back to
    /// [`AirPowerDisplayMode::BaseOnly`], which renders the maximum.
    pub fn from_code(code: i64) -> Self {
        match code {
            0 => Self::BaseOnly,
            1 => Self::Range,
            2 => Self::RangeWithProficiency,
            3 => Self::Midpoint,
            4 => Self::MidpointWithProficiency,
            other => {
                warn!(code = other, "unknown air power display mode; showing base values");
                Self::BaseOnly
            }
        }
    }

    pub fn code(self) -> i64 {
        match self {
            Self::BaseOnly => 0,
            Self::Range => 1,
            Self::RangeWithProficiency => 2,
            Self::Midpoint => 3,
            Self::MidpointWithProficiency => 4,
        }
    }

    /// Whether squadron values include the proficiency range.
    pub fn includes_proficiency(self) -> bool {
        !matches!(self, Self::BaseOnly)
    }
}

impl From<i64> for AirPowerDisplayMode {
    fn from(code: i64) -> Self {
        Self::from_code(code)
    }
}

impl From<AirPowerDisplayMode> for i64 {
    fn from(mode: AirPowerDisplayMode) -> Self {
        mode.code()
    }
}

/// An additive `[min, max]` air power estimate.
///
/// `min <= max` holds for every value built from calculator output: squadron
/// ranges are ordered by construction and both sums and non-negative scaling
/// preserve the ordering.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct AirPower {
    min: i32,
    max: i32,
}

impl AirPower {
    /// The additive identity.
    pub const ZERO: AirPower = AirPower { min: 0, max: 0 };

    /// A value with no spread.
    pub const fn single(value: i32) -> Self {
        Self {
            min: value,
            max: value,
        }
    }

    pub fn new(min: i32, max: i32) -> Self {
        debug_assert!(min <= max, "air power range out of order: {min} > {max}");
        Self { min, max }
    }

    pub fn min(self) -> i32 {
        self.min
    }

    pub fn max(self) -> i32 {
        self.max
    }

    pub fn set_min(&mut self, min: i32) {
        debug_assert!(min <= self.max, "air power range out of order: {min} > {}", self.max);
        self.min = min;
    }

    pub fn set_max(&mut self, max: i32) {
        debug_assert!(self.min <= max, "air power range out of order: {} > {max}", self.min);
        self.max = max;
    }

    /// Multiply both ends by `percent / 100`, truncating after the multiply.
    pub fn scale_percent(self, percent: i32) -> Self {
        Self {
            min: self.min * percent / 100,
            max: self.max * percent / 100,
        }
    }

    /// Multiply both ends by a factor, truncating the products toward zero.
    pub fn scale(self, factor: f64) -> Self {
        Self {
            min: (f64::from(self.min) * factor) as i32,
            max: (f64::from(self.max) * factor) as i32,
        }
    }

    /// Render the value for the given display mode.
    pub fn render(self, mode: AirPowerDisplayMode) -> String {
        match mode {
            AirPowerDisplayMode::BaseOnly => self.max.to_string(),
            AirPowerDisplayMode::Range | AirPowerDisplayMode::RangeWithProficiency => {
                if self.min == self.max {
                    self.max.to_string()
                } else {
                    format!("{}-{}", self.min, self.max)
                }
            }
            AirPowerDisplayMode::Midpoint | AirPowerDisplayMode::MidpointWithProficiency => {
                (self.min + self.max).div_euclid(2).to_string()
            }
        }
    }
}

impl Add for AirPower {
    type Output = AirPower;

    fn add(self, other: AirPower) -> AirPower {
        AirPower {
            min: self.min + other.min,
            max: self.max + other.max,
        }
    }
}

impl AddAssign for AirPower {
    fn add_assign(&mut self, other: AirPower) {
        self.min += other.min;
        self.max += other.max;
    }
}

impl Sum for AirPower {
    fn sum<I: Iterator<Item = AirPower>>(iter: I) -> AirPower {
        iter.fold(AirPower::ZERO, Add::add)
    }
}
