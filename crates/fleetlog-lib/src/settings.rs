//! Display settings shared by the renderers.

use std::env;
use std::ffi::OsString;
use std::fs;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};

use directories::ProjectDirs;
use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::air_power::AirPowerDisplayMode;
use crate::detection::DetectionDisplayMode;
use crate::error::{Error, Result};

/// Environment variable pointing at an alternative settings file.
pub const CONFIG_ENV: &str = "FLEETLOG_CONFIG";

/// Default settings filename inside the platform config directory.
const SETTINGS_FILENAME: &str = "settings.json";

/// Display mode and coefficient choices, passed explicitly to every render.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Settings {
    pub air_power_display_mode: AirPowerDisplayMode,
    pub detection_display_mode: DetectionDisplayMode,
    pub detection_coefficient: f64,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            air_power_display_mode: AirPowerDisplayMode::RangeWithProficiency,
            detection_display_mode: DetectionDisplayMode::Single,
            detection_coefficient: 1.0,
        }
    }
}

/// Where a settings file came from.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SettingsSource {
    /// Passed by the caller; must exist.
    Explicit(PathBuf),
    /// Named by [`CONFIG_ENV`]; must exist.
    Environment(PathBuf),
    /// The platform default; may be absent.
    Default(PathBuf),
}

impl SettingsSource {
    pub fn path(&self) -> &Path {
        match self {
            Self::Explicit(path) | Self::Environment(path) | Self::Default(path) => path,
        }
    }

    fn required(&self) -> bool {
        !matches!(self, Self::Default(_))
    }
}

/// Path of the settings file in the platform config directory.
pub fn default_settings_path() -> Result<PathBuf> {
    let dirs =
        ProjectDirs::from("com", "fleetlog", "fleetlog").ok_or(Error::ProjectDirsUnavailable)?;
    Ok(dirs.config_dir().join(SETTINGS_FILENAME))
}

/// Pick the settings file.
///
/// The resolution order is:
/// 1. Explicit `path` argument when provided.
/// 2. The value of `env_path` (normally [`CONFIG_ENV`]).
/// 3. `settings.json` in the platform config directory.
pub fn resolve_settings_path(
    path: Option<&Path>,
    env_path: Option<OsString>,
) -> Result<SettingsSource> {
    if let Some(explicit) = path {
        return Ok(SettingsSource::Explicit(explicit.to_path_buf()));
    }
    if let Some(from_env) = env_path.filter(|value| !value.is_empty()) {
        return Ok(SettingsSource::Environment(PathBuf::from(from_env)));
    }
    Ok(SettingsSource::Default(default_settings_path()?))
}

impl Settings {
    /// Load settings using the standard resolution order.
    pub fn load(path: Option<&Path>) -> Result<Self> {
        let source = resolve_settings_path(path, env::var_os(CONFIG_ENV))?;
        Self::load_from(&source)
    }

    /// Load settings from a resolved source. A missing default file yields
    /// [`Settings::default`].
    pub fn load_from(source: &SettingsSource) -> Result<Self> {
        let path = source.path();
        let contents = match fs::read_to_string(path) {
            Ok(contents) => contents,
            Err(err) if err.kind() == ErrorKind::NotFound => {
                if source.required() {
                    return Err(Error::SettingsNotFound {
                        path: path.to_path_buf(),
                    });
                }
                debug!(path = %path.display(), "no settings file; using defaults");
                return Ok(Self::default());
            }
            Err(err) => return Err(err.into()),
        };

        let settings = Self::from_json(&contents).map_err(|message| Error::SettingsParse {
            path: path.to_path_buf(),
            message,
        })?;
        debug!(path = %path.display(), ?settings, "loaded settings");
        Ok(settings)
    }

    fn from_json(contents: &str) -> std::result::Result<Self, String> {
        let settings: Self = serde_json::from_str(contents).map_err(|err| err.to_string())?;
        if !settings.detection_coefficient.is_finite() {
            return Err("detection_coefficient must be a finite number".to_string());
        }
        Ok(settings)
    }
}
