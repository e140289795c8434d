//! Configuration and settings management for DraftKit
//!
//! Provides configuration file handling and validation for a workspace.
//! Supports JSON and TOML file formats stored in platform-specific directories.
//!
//! Configuration is organized into logical sections:
//! - Zoom limits and step sizes
//! - Grid density
//! - Drag threshold
//! - Proximity tolerance
//! - Key bindings

use draftkit_core::constants::{
    DRAG_THRESHOLD, INITIAL_ZOOM, MAX_GRID_LINES, MAX_ZOOM, MIN_ZOOM, PROXIMITY_TOLERANCE,
    ZOOM_IN_STEP, ZOOM_OUT_STEP,
};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

use crate::error::{ConfigError, ConfigResult, SettingsError, SettingsResult};

/// Directory under the platform config dir holding DraftKit files.
const CONFIG_DIR_NAME: &str = "draftkit";

/// Default configuration file name.
const CONFIG_FILE_NAME: &str = "workspace.toml";

/// Command a workspace starts in
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum StartupCommand {
    /// Rubber-band selection
    #[default]
    Select,
    /// Segment drawing
    Line,
}

impl std::fmt::Display for StartupCommand {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Select => write!(f, "select"),
            Self::Line => write!(f, "line"),
        }
    }
}

/// Zoom limits and step sizes
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ZoomSettings {
    /// Smallest scale
    pub min: f64,
    /// Largest scale
    pub max: f64,
    /// Scale a new workspace opens at
    pub initial: f64,
    /// Step used at and above 1:1
    pub coarse_step: f64,
    /// Step used below 1:1 and when zooming out of 1:1
    pub fine_step: f64,
}

impl Default for ZoomSettings {
    fn default() -> Self {
        Self {
            min: MIN_ZOOM,
            max: MAX_ZOOM,
            initial: INITIAL_ZOOM,
            coarse_step: ZOOM_IN_STEP,
            fine_step: ZOOM_OUT_STEP,
        }
    }
}

impl ZoomSettings {
    /// Clamps `scale` into `[min, max]`. When the limits are inverted `max` wins.
    pub fn clamp(&self, scale: f64) -> f64 {
        scale.max(self.min).min(self.max)
    }
}

/// Grid density settings
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct GridSettings {
    /// Upper bound on grid lines per axis
    pub max_lines: usize,
}

impl Default for GridSettings {
    fn default() -> Self {
        Self {
            max_lines: MAX_GRID_LINES,
        }
    }
}

/// Pan gesture settings
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct DragSettings {
    /// Per-axis travel in pixels before a press turns into a pan
    pub threshold: f64,
}

impl Default for DragSettings {
    fn default() -> Self {
        Self {
            threshold: DRAG_THRESHOLD,
        }
    }
}

/// Pointer hit-test settings
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ProximitySettings {
    /// Hit radius around rendered geometry, in pixels
    pub tolerance: f64,
}

impl Default for ProximitySettings {
    fn default() -> Self {
        Self {
            tolerance: PROXIMITY_TOLERANCE,
        }
    }
}

/// Keyboard bindings, as key names reported by the host
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct KeyBindings {
    /// Advance the proximity candidate
    pub cycle_proximity: String,
    /// Delete the selection
    pub delete: String,
    /// Drop the draft segment or selection area
    pub cancel: String,
}

impl Default for KeyBindings {
    fn default() -> Self {
        Self {
            cycle_proximity: "t".to_string(),
            delete: "Delete".to_string(),
            cancel: "Escape".to_string(),
        }
    }
}

impl KeyBindings {
    /// Bindings as `(action name, key)` pairs.
    pub fn entries(&self) -> [(&'static str, &str); 3] {
        [
            ("cycle_proximity", self.cycle_proximity.as_str()),
            ("delete", self.delete.as_str()),
            ("cancel", self.cancel.as_str()),
        ]
    }

    /// Validate key bindings
    pub fn validate(&self) -> ConfigResult<()> {
        let entries = self.entries();
        for (i, (action, key)) in entries.iter().enumerate() {
            if key.trim().is_empty() {
                return Err(ConfigError::ValueOutOfRange {
                    key: format!("keys.{}", action),
                    value: format!("{:?}", key),
                });
            }
            if let Some((other, _)) = entries[i + 1..]
                .iter()
                .find(|(_, k)| k.eq_ignore_ascii_case(key))
            {
                return Err(ConfigError::ConflictingBinding {
                    key: key.to_string(),
                    first: action.to_string(),
                    second: other.to_string(),
                });
            }
        }
        Ok(())
    }
}

/// Complete workspace configuration
///
/// Aggregates all settings sections and provides file I/O operations.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
#[serde(default)]
pub struct WorkspaceConfig {
    /// Command a new workspace starts in
    pub initial_command: StartupCommand,
    /// Zoom settings
    pub zoom: ZoomSettings,
    /// Grid settings
    pub grid: GridSettings,
    /// Drag settings
    pub drag: DragSettings,
    /// Proximity settings
    pub proximity: ProximitySettings,
    /// Key bindings
    pub keys: KeyBindings,
}

impl WorkspaceConfig {
    /// Create new config with defaults
    pub fn new() -> Self {
        Self::default()
    }

    /// Platform default location, `<config dir>/draftkit/workspace.toml`
    pub fn default_path() -> SettingsResult<PathBuf> {
        let dir = dirs::config_dir().ok_or_else(|| {
            SettingsError::ConfigDirectory("no platform config directory".to_string())
        })?;
        Ok(dir.join(CONFIG_DIR_NAME).join(CONFIG_FILE_NAME))
    }

    /// Load config from file (JSON or TOML)
    pub fn load_from_file(path: &Path) -> SettingsResult<Self> {
        let format = ConfigFormat::from_path(path)?;
        let content = std::fs::read_to_string(path)
            .map_err(|e| SettingsError::LoadError(format!("{}: {}", path.display(), e)))?;

        let config: Self = match format {
            ConfigFormat::Json => serde_json::from_str(&content)?,
            ConfigFormat::Toml => toml::from_str(&content)?,
        };

        config.validate()?;
        tracing::debug!("Loaded workspace config from {}", path.display());
        Ok(config)
    }

    /// Load config from `path`, falling back to defaults when the file is missing
    pub fn load_or_default(path: &Path) -> SettingsResult<Self> {
        if !path.exists() {
            tracing::info!(
                "No workspace config at {}, using defaults",
                path.display()
            );
            return Ok(Self::default());
        }
        Self::load_from_file(path)
    }

    /// Save config to file (JSON or TOML)
    pub fn save_to_file(&self, path: &Path) -> SettingsResult<()> {
        self.validate()?;
        let format = ConfigFormat::from_path(path)?;

        let content = match format {
            ConfigFormat::Json => serde_json::to_string_pretty(self)?,
            ConfigFormat::Toml => toml::to_string_pretty(self)?,
        };

        if let Some(parent) = path.parent() {
            if !parent.as_os_str().is_empty() {
                std::fs::create_dir_all(parent).map_err(|e| {
                    SettingsError::ConfigDirectory(format!("{}: {}", parent.display(), e))
                })?;
            }
        }

        std::fs::write(path, content)
            .map_err(|e| SettingsError::SaveError(format!("{}: {}", path.display(), e)))?;
        tracing::debug!("Saved workspace config to {}", path.display());
        Ok(())
    }

    /// Validate configuration
    pub fn validate(&self) -> ConfigResult<()> {
        let zoom = &self.zoom;
        if !(zoom.min > 0.0) {
            return Err(out_of_range("zoom.min", zoom.min));
        }
        if !(zoom.max >= zoom.min) {
            return Err(out_of_range("zoom.max", zoom.max));
        }
        if !(zoom.initial >= zoom.min && zoom.initial <= zoom.max) {
            return Err(out_of_range("zoom.initial", zoom.initial));
        }
        if !(zoom.coarse_step > 0.0) {
            return Err(out_of_range("zoom.coarse_step", zoom.coarse_step));
        }
        if !(zoom.fine_step > 0.0) {
            return Err(out_of_range("zoom.fine_step", zoom.fine_step));
        }

        if self.grid.max_lines == 0 {
            return Err(out_of_range("grid.max_lines", self.grid.max_lines));
        }

        if !(self.drag.threshold >= 0.0) {
            return Err(out_of_range("drag.threshold", self.drag.threshold));
        }

        if !(self.proximity.tolerance >= 0.0) {
            return Err(out_of_range("proximity.tolerance", self.proximity.tolerance));
        }

        self.keys.validate()
    }
}

fn out_of_range(key: &str, value: impl std::fmt::Display) -> ConfigError {
    ConfigError::ValueOutOfRange {
        key: key.to_string(),
        value: value.to_string(),
    }
}

/// Supported on-disk formats, chosen by file extension.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum ConfigFormat {
    Json,
    Toml,
}

impl ConfigFormat {
    fn from_path(path: &Path) -> ConfigResult<Self> {
        match path.extension().and_then(|ext| ext.to_str()) {
            Some("json") => Ok(Self::Json),
            Some("toml") => Ok(Self::Toml),
            other => Err(ConfigError::UnsupportedFormat(
                other.unwrap_or("<none>").to_string(),
            )),
        }
    }
}
