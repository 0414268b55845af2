//! Global options shared by every subcommand.

use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use clap::{Args, ValueEnum};
use tracing::debug;

use fleetlog_lib::{
    AirPowerDisplayMode, DetectionDisplayMode, EquipmentCatalog, Inventory, Settings, Snapshot,
};

/// Output format for command results.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    /// Human-readable tables.
    #[default]
    Text,
    /// Pretty-printed JSON on stdout.
    Json,
}

/// Flags accepted before or after any subcommand.
#[derive(Args, Debug, Clone, Default)]
pub struct GlobalOptions {
    /// Settings file (defaults to FLEETLOG_CONFIG, then the platform config dir).
    #[arg(long, global = true)]
    pub config: Option<PathBuf>,

    /// Air power display mode (0-4); overrides the settings file.
    #[arg(long, global = true, allow_negative_numbers = true)]
    pub air_power_mode: Option<i64>,

    /// Detection display mode (0-2); overrides the settings file.
    #[arg(long, global = true, allow_negative_numbers = true)]
    pub detection_mode: Option<i64>,

    /// Equipment coefficient for detection scores; overrides the settings file.
    #[arg(long, global = true, value_parser = parse_coefficient)]
    pub coefficient: Option<f64>,

    /// Output format.
    #[arg(long, global = true, value_enum, default_value_t = OutputFormat::Text)]
    pub format: OutputFormat,
}

impl GlobalOptions {
    /// Load settings and apply command-line overrides.
    pub fn settings(&self) -> Result<Settings> {
        let mut settings =
            Settings::load(self.config.as_deref()).context("failed to load settings")?;
        if let Some(code) = self.air_power_mode {
            settings.air_power_display_mode = AirPowerDisplayMode::from_code(code);
        }
        if let Some(code) = self.detection_mode {
            settings.detection_display_mode = DetectionDisplayMode::from_code(code);
        }
        if let Some(coefficient) = self.coefficient {
            settings.detection_coefficient = coefficient;
        }
        debug!(?settings, "resolved settings");
        Ok(settings)
    }
}

fn parse_coefficient(raw: &str) -> std::result::Result<f64, String> {
    let value: f64 = raw
        .parse()
        .map_err(|_| format!("'{raw}' is not a number"))?;
    if !value.is_finite() {
        return Err(format!("'{raw}' is not a finite number"));
    }
    Ok(value)
}

/// Snapshot and catalog files for commands that evaluate game state.
#[derive(Args, Debug, Clone)]
pub struct SnapshotArgs {
    /// Game state snapshot (JSON).
    #[arg(long)]
    pub snapshot: PathBuf,

    /// Equipment master catalog (CSV).
    #[arg(long)]
    pub catalog: PathBuf,
}

impl SnapshotArgs {
    /// Load the snapshot and resolve its equipment against the catalog.
    pub fn load(&self) -> Result<(Snapshot, Inventory)> {
        let catalog = load_catalog(&self.catalog)?;
        let snapshot = Snapshot::from_path(&self.snapshot)
            .with_context(|| format!("failed to load snapshot from {}", self.snapshot.display()))?;
        let inventory = snapshot.inventory(&catalog);
        Ok((snapshot, inventory))
    }
}

/// Load an equipment catalog with a path-bearing error.
pub fn load_catalog(path: &Path) -> Result<EquipmentCatalog> {
    EquipmentCatalog::from_path(path)
        .with_context(|| format!("failed to load equipment catalog from {}", path.display()))
}

/// Resolved options passed to every command handler.
#[derive(Debug, Clone, Copy)]
pub struct RunContext {
    pub settings: Settings,
    pub format: OutputFormat,
}
