// SPDX-License-Identifier: MPL-2.0
//! This module handles the crate's configuration, including loading and saving
//! user preferences to a `settings.toml` file.
//!
//! # Configuration Sections
//!
//! - `[general]` - Language and theme mode
//! - `[toast]` - Notification defaults (duration, anchor position, visible cap)
//! - `[sidebar]` - Side panel geometry
//!
//! # Path Resolution
//!
//! See [`paths`]. Tests and embedding applications should use
//! `load_from_path()`/`save_to_path()` or the `*_with_override` variants.
//!
//! # Examples
//!
//! ```no_run
//! use iced_kit::config;
//!
//! // Load existing configuration (returns tuple with optional warning)
//! let (mut config, _warning) = config::load();
//!
//! // Modify a setting
//! config.general.language = Some("fr".to_string());
//!
//! // Save the modified configuration
//! config::save(&config).expect("Failed to save config");
//! ```

pub mod defaults;
pub mod paths;

pub use defaults::*;

use crate::error::{Error, Result};
use crate::ui::notifications::Position;
use crate::ui::theming::ThemeMode;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};
use std::time::Duration;

const CONFIG_FILE: &str = "settings.toml";

/// Warning key surfaced when the settings file exists but cannot be parsed.
pub const CONFIG_LOAD_WARNING_KEY: &str = "notification-config-load-error";

// =============================================================================
// Section Structs
// =============================================================================

/// General application settings.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
pub struct GeneralConfig {
    /// UI language code (e.g., "en-US", "fr").
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub language: Option<String>,

    /// Theme mode (light, dark, or system).
    #[serde(default)]
    pub theme_mode: ThemeMode,
}

/// Toast notification settings.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct ToastConfig {
    /// Auto-dismiss duration for toasts published without an explicit one.
    /// `0` disables auto-dismiss.
    #[serde(default = "default_toast_duration_ms")]
    pub duration_ms: u64,

    /// Anchor position for toasts published without an explicit one.
    #[serde(default)]
    pub position: Position,

    /// Maximum number of toasts shown at once. Unbounded when absent.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub max_visible: Option<usize>,

    /// Timer polling interval while a toast timer is armed.
    #[serde(default = "default_tick_interval_ms")]
    pub tick_interval_ms: u64,
}

impl Default for ToastConfig {
    fn default() -> Self {
        Self {
            duration_ms: DEFAULT_TOAST_DURATION_MS,
            position: Position::default(),
            max_visible: None,
            tick_interval_ms: DEFAULT_TICK_INTERVAL_MS,
        }
    }
}

impl ToastConfig {
    /// Auto-dismiss duration, clamped to the supported range.
    #[must_use]
    pub fn duration(&self) -> Duration {
        Duration::from_millis(self.duration_ms.min(MAX_TOAST_DURATION_MS))
    }

    /// Tick interval, clamped to the supported range.
    #[must_use]
    pub fn tick_interval(&self) -> Duration {
        Duration::from_millis(
            self.tick_interval_ms
                .clamp(MIN_TICK_INTERVAL_MS, MAX_TICK_INTERVAL_MS),
        )
    }

    /// Visible cap, with nonsensical zero values raised to the minimum.
    #[must_use]
    pub fn max_visible(&self) -> Option<usize> {
        self.max_visible.map(|cap| cap.max(MIN_MAX_VISIBLE))
    }
}

/// Side panel settings.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct SidebarConfig {
    /// Panel width in logical pixels.
    #[serde(default = "default_sidebar_width")]
    pub width: f32,
}

impl Default for SidebarConfig {
    fn default() -> Self {
        Self {
            width: DEFAULT_SIDEBAR_WIDTH,
        }
    }
}

impl SidebarConfig {
    /// Panel width, clamped to the supported range.
    #[must_use]
    pub fn width(&self) -> f32 {
        self.width.clamp(MIN_SIDEBAR_WIDTH, MAX_SIDEBAR_WIDTH)
    }
}

/// Complete settings file.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
pub struct Config {
    #[serde(default)]
    pub general: GeneralConfig,
    #[serde(default)]
    pub toast: ToastConfig,
    #[serde(default)]
    pub sidebar: SidebarConfig,
}

fn default_toast_duration_ms() -> u64 {
    DEFAULT_TOAST_DURATION_MS
}

fn default_tick_interval_ms() -> u64 {
    DEFAULT_TICK_INTERVAL_MS
}

fn default_sidebar_width() -> f32 {
    DEFAULT_SIDEBAR_WIDTH
}

// =============================================================================
// Load / Save
// =============================================================================

fn get_config_path_with_override(base_dir: Option<PathBuf>) -> Option<PathBuf> {
    paths::get_app_config_dir_with_override(base_dir).map(|mut path| {
        path.push(CONFIG_FILE);
        path
    })
}

/// Loads the configuration from the default path.
///
/// Returns a tuple of (config, optional_warning). If loading fails, returns
/// default config with an i18n warning key explaining what went wrong.
pub fn load() -> (Config, Option<String>) {
    load_with_override(None)
}

/// Loads the configuration from a custom directory.
pub fn load_with_override(base_dir: Option<PathBuf>) -> (Config, Option<String>) {
    if let Some(path) = get_config_path_with_override(base_dir) {
        if path.exists() {
            match load_from_path(&path) {
                Ok(config) => return (config, None),
                Err(err) => {
                    log::warn!("Failed to load {}: {err}", path.display());
                    return (Config::default(), Some(CONFIG_LOAD_WARNING_KEY.to_string()));
                }
            }
        }
    }
    (Config::default(), None)
}

/// Loads configuration from a specific path.
pub fn load_from_path(path: &Path) -> Result<Config> {
    let content = fs::read_to_string(path)?;
    let config: Config = toml::from_str(&content)?;
    Ok(config)
}

/// Saves the configuration to the default path.
pub fn save(config: &Config) -> Result<()> {
    save_with_override(config, None)
}

/// Saves the configuration to a custom directory.
pub fn save_with_override(config: &Config, base_dir: Option<PathBuf>) -> Result<()> {
    if let Some(path) = get_config_path_with_override(base_dir) {
        return save_to_path(config, &path);
    }
    Ok(())
}

/// Saves configuration to a specific path, creating parent directories.
pub fn save_to_path(config: &Config, path: &Path) -> Result<()> {
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent)?;
    }
    let content = toml::to_string_pretty(config).map_err(Error::from)?;
    fs::write(path, content)?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    #[test]
    fn save_and_load_round_trip_preserves_settings() {
        let config = Config {
            general: GeneralConfig {
                language: Some("fr".to_string()),
                theme_mode: ThemeMode::Dark,
            },
            toast: ToastConfig {
                duration_ms: 2500,
                position: Position::TopCenter,
                max_visible: Some(4),
                tick_interval_ms: 50,
            },
            sidebar: SidebarConfig { width: 280.0 },
        };
        let temp_dir = tempdir().expect("failed to create temp dir");
        let config_path = temp_dir.path().join("nested").join("settings.toml");

        save_to_path(&config, &config_path).expect("failed to save config");
        let loaded = load_from_path(&config_path).expect("failed to load config");

        assert_eq!(loaded, config);
    }

    #[test]
    fn load_from_path_invalid_toml_errors() {
        let temp_dir = tempdir().expect("failed to create temp dir");
        let config_path = temp_dir.path().join("settings.toml");
        fs::write(&config_path, "not = valid = toml").expect("failed to write invalid toml");

        let result = load_from_path(&config_path);
        assert!(matches!(result, Err(Error::Config(_))));
    }

    #[test]
    fn missing_sections_fall_back_to_defaults() {
        let temp_dir = tempdir().expect("failed to create temp dir");
        let config_path = temp_dir.path().join("settings.toml");
        fs::write(&config_path, "[toast]\nposition = \"top-left\"\n").expect("write");

        let loaded = load_from_path(&config_path).expect("load");
        assert_eq!(loaded.toast.position, Position::TopLeft);
        assert_eq!(loaded.toast.duration_ms, DEFAULT_TOAST_DURATION_MS);
        assert_eq!(loaded.sidebar, SidebarConfig::default());
        assert_eq!(loaded.general, GeneralConfig::default());
    }

    #[test]
    fn load_with_override_from_empty_directory_returns_default() {
        let temp_dir = tempdir().expect("failed to create temp dir");
        let (config, warning) = load_with_override(Some(temp_dir.path().to_path_buf()));

        assert_eq!(config, Config::default());
        assert!(warning.is_none());
    }

    #[test]
    fn load_with_override_from_corrupted_file_returns_default_with_warning() {
        let temp_dir = tempdir().expect("failed to create temp dir");
        fs::write(temp_dir.path().join(CONFIG_FILE), "[toast\nbroken").expect("write");

        let (config, warning) = load_with_override(Some(temp_dir.path().to_path_buf()));

        assert_eq!(config, Config::default());
        assert_eq!(warning.as_deref(), Some(CONFIG_LOAD_WARNING_KEY));
    }

    #[test]
    fn save_with_override_and_load_with_override_round_trip() {
        let temp_dir = tempdir().expect("failed to create temp dir");
        let mut config = Config::default();
        config.toast.max_visible = Some(2);

        save_with_override(&config, Some(temp_dir.path().to_path_buf())).expect("save");
        let (loaded, warning) = load_with_override(Some(temp_dir.path().to_path_buf()));

        assert!(warning.is_none());
        assert_eq!(loaded.toast.max_visible, Some(2));
    }

    #[test]
    fn accessors_clamp_out_of_range_values() {
        let toast = ToastConfig {
            duration_ms: u64::MAX,
            position: Position::BottomRight,
            max_visible: Some(0),
            tick_interval_ms: 1,
        };
        assert_eq!(toast.duration(), Duration::from_millis(MAX_TOAST_DURATION_MS));
        assert_eq!(toast.tick_interval(), Duration::from_millis(MIN_TICK_INTERVAL_MS));
        assert_eq!(toast.max_visible(), Some(MIN_MAX_VISIBLE));

        let sidebar = SidebarConfig { width: 5000.0 };
        assert_eq!(sidebar.width(), MAX_SIDEBAR_WIDTH);
    }

    #[test]
    fn default_config_has_expected_values() {
        let config = Config::default();
        assert_eq!(config.toast.duration(), Duration::from_millis(5000));
        assert_eq!(config.toast.position, Position::BottomRight);
        assert!(config.toast.max_visible().is_none());
        assert_eq!(config.sidebar.width(), DEFAULT_SIDEBAR_WIDTH);
    }
}
