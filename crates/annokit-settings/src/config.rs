//! Configuration and settings management for AnnoKit
//!
//! Provides configuration file handling and validation.
//! Supports JSON and TOML file formats stored in platform-specific directories.
//!
//! Configuration is organized into logical sections:
//! - Canvas settings (fit box, draw threshold, minimum resize)
//! - Navigation policy (edge behaviour, unsaved-change handling)
//! - Notification timing
//! - Logging output

use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

use crate::error::{ConfigError, SettingsError, SettingsResult};

/// What happens when navigating past the first or last image
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum BoundsPolicy {
    /// Stay on the edge image
    #[default]
    Clamp,
    /// Continue from the other end
    Wrap,
}

impl std::fmt::Display for BoundsPolicy {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Clamp => write!(f, "clamp"),
            Self::Wrap => write!(f, "wrap"),
        }
    }
}

/// How navigation treats unsaved edits in the working set
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum UnsavedPolicy {
    /// Warn, discard the edits and navigate
    #[default]
    Warn,
    /// Warn and refuse to navigate until saved or discarded
    Block,
}

impl std::fmt::Display for UnsavedPolicy {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Warn => write!(f, "warn"),
            Self::Block => write!(f, "block"),
        }
    }
}

/// Canvas geometry settings
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct CanvasSettings {
    /// Width of the display box the image is fitted into (pixels)
    pub box_width: f64,
    /// Height of the display box the image is fitted into (pixels)
    pub box_height: f64,
    /// A drag must exceed this on both axes to create a rectangle (display pixels)
    pub draw_threshold: f64,
    /// Smallest width/height a resize may produce (display pixels)
    pub min_resize: f64,
}

impl Default for CanvasSettings {
    fn default() -> Self {
        Self {
            box_width: 900.0,
            box_height: 600.0,
            draw_threshold: 10.0,
            min_resize: 5.0,
        }
    }
}

/// Navigation settings
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct NavigationSettings {
    pub bounds: BoundsPolicy,
    pub unsaved: UnsavedPolicy,
}

/// Notification settings
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct NotificationSettings {
    /// Status messages disappear after this many milliseconds (0 = never)
    pub dismiss_after_ms: u64,
}

impl Default for NotificationSettings {
    fn default() -> Self {
        Self {
            dismiss_after_ms: 5000,
        }
    }
}

/// Logging settings
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct LoggingSettings {
    /// Emit JSON lines instead of pretty output
    pub json: bool,
    /// Default level when RUST_LOG is not set
    pub level: String,
}

impl Default for LoggingSettings {
    fn default() -> Self {
        Self {
            json: false,
            level: "info".to_string(),
        }
    }
}

const LOG_LEVELS: [&str; 5] = ["trace", "debug", "info", "warn", "error"];

/// Complete application configuration
///
/// Aggregates all settings sections and provides file I/O operations.
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct Config {
    #[serde(default)]
    pub canvas: CanvasSettings,
    #[serde(default)]
    pub navigation: NavigationSettings,
    #[serde(default)]
    pub notifications: NotificationSettings,
    #[serde(default)]
    pub logging: LoggingSettings,
}

impl Config {
    /// Create new config with defaults
    pub fn new() -> Self {
        Self::default()
    }

    /// Platform config location, e.g. `~/.config/annokit/config.toml`
    pub fn default_path() -> SettingsResult<PathBuf> {
        dirs::config_dir()
            .map(|dir| dir.join("annokit").join("config.toml"))
            .ok_or_else(|| {
                SettingsError::ConfigDirectory("no platform config directory".to_string())
            })
    }

    /// Load config from file (JSON or TOML)
    pub fn load_from_file(path: &Path) -> SettingsResult<Self> {
        let content = std::fs::read_to_string(path)
            .map_err(|e| SettingsError::LoadError(format!("{}: {}", path.display(), e)))?;

        let config: Self = match Format::of(path)? {
            Format::Json => serde_json::from_str(&content)?,
            Format::Toml => toml::from_str(&content)?,
        };

        config.validate()?;
        tracing::debug!("Loaded config from {}", path.display());
        Ok(config)
    }

    /// Load config from file, falling back to defaults when the file does not exist
    pub fn load_or_default(path: &Path) -> SettingsResult<Self> {
        if path.exists() {
            Self::load_from_file(path)
        } else {
            tracing::info!("No config at {}, using defaults", path.display());
            Ok(Self::default())
        }
    }

    /// Save config to file (JSON or TOML)
    pub fn save_to_file(&self, path: &Path) -> SettingsResult<()> {
        self.validate()?;

        let content = match Format::of(path)? {
            Format::Json => serde_json::to_string_pretty(self)?,
            Format::Toml => toml::to_string_pretty(self)?,
        };

        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)?;
        }
        std::fs::write(path, content)
            .map_err(|e| SettingsError::SaveError(format!("{}: {}", path.display(), e)))?;

        Ok(())
    }

    /// Validate configuration
    pub fn validate(&self) -> SettingsResult<()> {
        let canvas = &self.canvas;
        positive("canvas.box_width", canvas.box_width)?;
        positive("canvas.box_height", canvas.box_height)?;
        positive("canvas.min_resize", canvas.min_resize)?;

        if !canvas.draw_threshold.is_finite() || canvas.draw_threshold < 0.0 {
            return Err(ConfigError::ValueOutOfRange {
                key: "canvas.draw_threshold".to_string(),
                value: canvas.draw_threshold.to_string(),
            }
            .into());
        }

        let level = self.logging.level.to_ascii_lowercase();
        if !LOG_LEVELS.contains(&level.as_str()) {
            return Err(SettingsError::InvalidSetting {
                key: "logging.level".to_string(),
                reason: format!("unknown level '{}'", self.logging.level),
            });
        }

        Ok(())
    }
}

fn positive(key: &str, value: f64) -> SettingsResult<()> {
    if value.is_finite() && value > 0.0 {
        Ok(())
    } else {
        Err(ConfigError::ValueOutOfRange {
            key: key.to_string(),
            value: value.to_string(),
        }
        .into())
    }
}

enum Format {
    Json,
    Toml,
}

impl Format {
    fn of(path: &Path) -> SettingsResult<Self> {
        match path.extension().and_then(|ext| ext.to_str()) {
            Some("json") => Ok(Self::Json),
            Some("toml") => Ok(Self::Toml),
            other => Err(ConfigError::UnsupportedFormat(other.unwrap_or("").to_string()).into()),
        }
    }
}
