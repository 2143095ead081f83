//! AnnoKit Settings Crate
//!
//! Handles application configuration and its persistence.

pub mod config;
pub mod error;

pub use config::{
    BoundsPolicy, CanvasSettings, Config, LoggingSettings, NavigationSettings,
    NotificationSettings, UnsavedPolicy,
};
pub use error::{ConfigError, SettingsError, SettingsResult};
