//! Detection (line of sight) calculators.
//!
//! - [`ship_param`] - Per-ship terms: naked search, weighted equipment, synergies
//! - [`evaluation`] - Fleet and single-ship scores and their rendering
//! - [`sortie`] - Main plus escort fleet totals over the coefficient table
//! - [`night`] - Aviation detection estimate from seaplanes and flying boats

pub mod evaluation;
pub mod night;
pub mod ship_param;
pub mod sortie;

pub use evaluation::{truncate, Detection, DetectionDisplayMode, COEFFICIENT_TABLE, RELOAD_REQUIRED};
pub use night::{slot_contribution, NightRecon, NIGHT_RECON_SUFFIX};
pub use ship_param::{item_los, synergy_bonus, ShipParam};
pub use sortie::{sortie_detection, SortieDetection};
