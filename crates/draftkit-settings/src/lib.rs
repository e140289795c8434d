//! DraftKit Settings Crate
//!
//! Handles workspace configuration: zoom limits and steps, grid density, drag
//! threshold, proximity tolerance and key bindings.

pub mod config;
pub mod error;

pub use config::{
    DragSettings, GridSettings, KeyBindings, ProximitySettings, StartupCommand, WorkspaceConfig,
    ZoomSettings,
};
pub use error::{ConfigError, ConfigResult, SettingsError, SettingsResult};
