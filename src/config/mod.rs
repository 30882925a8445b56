// SPDX-License-Identifier: MPL-2.0
//! This module handles the application's configuration, including loading and saving
//! user preferences to a `settings.toml` file.
//!
//! # Configuration Sections
//!
//! - `[general]` - Language and theme mode
//! - `[viewer]` - Wheel zoom factor
//! - `[browser]` - Start folder, last visited folder and image name filters
//!
//! # Path Resolution
//!
//! The config file location can be customized for testing or portable deployments:
//! 1. Use `load_from_path()`/`save_to_path()` with explicit path
//! 2. Pass `--config-dir` on the command line
//! 3. Set `TREE_LENS_CONFIG_DIR` environment variable
//! 4. Falls back to platform-specific config directory
//!
//! # Examples
//!
//! ```no_run
//! use tree_lens::config::{self, Config};
//!
//! let (mut config, _warning) = config::load();
//! config.general.language = Some("fr".to_string());
//! config::save(&config).expect("Failed to save config");
//! ```

pub mod defaults;

pub use defaults::*;

use crate::app::paths;
use crate::error::{Error, Result};
use crate::ui::state::ZoomFactor;
use crate::ui::theming::ThemeMode;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

const CONFIG_FILE: &str = "settings.toml";

// =============================================================================
// Section Structs
// =============================================================================

/// General application settings.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct GeneralConfig {
    /// UI language code (e.g., "en-US", "fr").
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub language: Option<String>,

    /// Application theme mode (light, dark, or system).
    #[serde(
        default = "default_theme_mode",
        deserialize_with = "deserialize_theme_mode"
    )]
    pub theme_mode: ThemeMode,
}

impl Default for GeneralConfig {
    fn default() -> Self {
        Self {
            language: None,
            theme_mode: default_theme_mode(),
        }
    }
}

/// Viewer settings.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct ViewerConfig {
    /// Scale multiplier applied per Shift+wheel notch.
    #[serde(
        default = "default_zoom_factor",
        skip_serializing_if = "Option::is_none"
    )]
    pub zoom_factor: Option<f32>,
}

impl Default for ViewerConfig {
    fn default() -> Self {
        Self {
            zoom_factor: default_zoom_factor(),
        }
    }
}

impl ViewerConfig {
    /// Returns the configured zoom factor, clamped to the supported range.
    #[must_use]
    pub fn zoom_factor(&self) -> ZoomFactor {
        self.zoom_factor
            .map_or_else(ZoomFactor::default, ZoomFactor::new)
    }
}

/// Folder tree and image list settings.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct BrowserConfig {
    /// Root of the folder tree. Falls back to `last_directory`, then home.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub start_directory: Option<PathBuf>,

    /// Last folder selected in the tree, written by the application.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub last_directory: Option<PathBuf>,

    /// Glob patterns offered by the image list filter picker.
    #[serde(default = "default_name_filters")]
    pub name_filters: Vec<String>,
}

impl Default for BrowserConfig {
    fn default() -> Self {
        Self {
            start_directory: None,
            last_directory: None,
            name_filters: default_name_filters(),
        }
    }
}

impl BrowserConfig {
    /// Returns the configured name filters, or the defaults when the list
    /// holds no usable pattern.
    #[must_use]
    pub fn effective_name_filters(&self) -> Vec<String> {
        let filters: Vec<String> = self
            .name_filters
            .iter()
            .map(|pattern| pattern.trim())
            .filter(|pattern| !pattern.is_empty())
            .map(str::to_string)
            .collect();

        if filters.is_empty() {
            default_name_filters()
        } else {
            filters
        }
    }

    /// Resolves the root directory of the folder tree.
    ///
    /// Order: `start_directory`, `last_directory`, the user's home, `/`.
    /// Configured entries that no longer exist are skipped.
    #[must_use]
    pub fn root_directory(&self) -> PathBuf {
        [&self.start_directory, &self.last_directory]
            .into_iter()
            .flatten()
            .find(|path| path.is_dir())
            .cloned()
            .or_else(dirs::home_dir)
            .unwrap_or_else(|| PathBuf::from("/"))
    }
}

// =============================================================================
// Main Config Struct (Sectioned)
// =============================================================================

/// Application configuration with logical sections.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Default)]
pub struct Config {
    /// General application settings.
    #[serde(default)]
    pub general: GeneralConfig,

    /// Viewer settings.
    #[serde(default)]
    pub viewer: ViewerConfig,

    /// Folder tree and image list settings.
    #[serde(default)]
    pub browser: BrowserConfig,
}

// =============================================================================
// Default Value Functions
// =============================================================================

fn default_theme_mode() -> ThemeMode {
    ThemeMode::System
}

fn default_zoom_factor() -> Option<f32> {
    Some(DEFAULT_ZOOM_FACTOR)
}

fn default_name_filters() -> Vec<String> {
    DEFAULT_NAME_FILTERS.iter().map(ToString::to_string).collect()
}

fn deserialize_theme_mode<'de, D>(deserializer: D) -> std::result::Result<ThemeMode, D::Error>
where
    D: serde::Deserializer<'de>,
{
    use serde::de::Error;

    let raw = String::deserialize(deserializer)?;
    match raw.to_lowercase().as_str() {
        "light" => Ok(ThemeMode::Light),
        "dark" => Ok(ThemeMode::Dark),
        "system" => Ok(ThemeMode::System),
        other => Err(D::Error::custom(format!("invalid theme_mode: {}", other))),
    }
}

// =============================================================================
// Config Path Resolution
// =============================================================================

/// Returns the config file path with an optional override.
fn get_config_path_with_override(base_dir: Option<PathBuf>) -> Option<PathBuf> {
    paths::get_app_config_dir_with_override(base_dir).map(|mut path| {
        path.push(CONFIG_FILE);
        path
    })
}

// =============================================================================
// Load Functions
// =============================================================================

/// Loads the configuration from the default path.
///
/// Returns a tuple of (config, optional_warning). If loading fails, returns
/// default config with the i18n key of a warning explaining what went wrong.
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
                    log::warn!("Ignoring config at {}: {err}", path.display());
                    return (
                        Config::default(),
                        Some("status-config-load-error".to_string()),
                    );
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

// =============================================================================
// Save Functions
// =============================================================================

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

/// Saves configuration to a specific path.
pub fn save_to_path(config: &Config, path: &Path) -> Result<()> {
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent)?;
    }
    let content = toml::to_string_pretty(config).map_err(Error::from)?;
    fs::write(path, content)?;
    Ok(())
}

// =============================================================================
// Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::Error;
    use tempfile::tempdir;

    #[test]
    fn save_and_load_round_trip_preserves_settings() {
        let config = Config {
            general: GeneralConfig {
                language: Some("fr".to_string()),
                theme_mode: ThemeMode::Light,
            },
            viewer: ViewerConfig {
                zoom_factor: Some(1.05),
            },
            browser: BrowserConfig {
                start_directory: Some(PathBuf::from("/srv/photos")),
                last_directory: Some(PathBuf::from("/srv/photos/2024")),
                name_filters: vec!["*.png".to_string()],
            },
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

        match load_from_path(&config_path) {
            Err(Error::Config(_)) => {}
            other => panic!("expected Config error, got {:?}", other),
        }
    }

    #[test]
    fn invalid_theme_mode_is_rejected() {
        let temp_dir = tempdir().expect("failed to create temp dir");
        let config_path = temp_dir.path().join("settings.toml");
        fs::write(&config_path, "[general]\ntheme_mode = \"sepia\"\n")
            .expect("failed to write config");

        match load_from_path(&config_path) {
            Err(Error::Config(message)) => assert!(message.contains("invalid theme_mode")),
            other => panic!("expected Config error, got {:?}", other),
        }
    }

    #[test]
    fn default_config_has_expected_values() {
        let config = Config::default();
        assert!(config.general.language.is_none());
        assert_eq!(config.general.theme_mode, ThemeMode::System);
        assert_eq!(config.viewer.zoom_factor, Some(DEFAULT_ZOOM_FACTOR));
        assert_eq!(config.browser.name_filters, vec!["*.png", "*.jpg", "*.jpeg"]);
        assert!(config.browser.last_directory.is_none());
    }

    #[test]
    fn partial_file_fills_missing_sections_with_defaults() {
        let temp_dir = tempdir().expect("failed to create temp dir");
        let config_path = temp_dir.path().join("settings.toml");
        fs::write(&config_path, "[viewer]\nzoom_factor = 1.1\n").expect("failed to write");

        let loaded = load_from_path(&config_path).expect("failed to load config");
        assert_eq!(loaded.viewer.zoom_factor, Some(1.1));
        assert_eq!(loaded.general, GeneralConfig::default());
        assert_eq!(loaded.browser, BrowserConfig::default());
    }

    #[test]
    fn zoom_factor_is_clamped_on_use() {
        let viewer = ViewerConfig {
            zoom_factor: Some(50.0),
        };
        assert_eq!(viewer.zoom_factor().value(), MAX_ZOOM_FACTOR);

        let viewer = ViewerConfig { zoom_factor: None };
        assert_eq!(viewer.zoom_factor(), ZoomFactor::default());
    }

    #[test]
    fn empty_name_filters_fall_back_to_defaults() {
        let browser = BrowserConfig {
            name_filters: vec!["  ".to_string()],
            ..BrowserConfig::default()
        };
        assert_eq!(browser.effective_name_filters(), default_name_filters());

        let browser = BrowserConfig {
            name_filters: vec![" *.gif ".to_string()],
            ..BrowserConfig::default()
        };
        assert_eq!(browser.effective_name_filters(), vec!["*.gif"]);
    }

    #[test]
    fn root_directory_skips_missing_folders() {
        let temp_dir = tempdir().expect("failed to create temp dir");
        let browser = BrowserConfig {
            start_directory: Some(temp_dir.path().join("does-not-exist")),
            last_directory: Some(temp_dir.path().to_path_buf()),
            ..BrowserConfig::default()
        };
        assert_eq!(browser.root_directory(), temp_dir.path());
    }

    #[test]
    fn save_with_override_and_load_with_override_round_trip() {
        let temp_dir = tempdir().expect("failed to create temp dir");
        let base_dir = temp_dir.path().to_path_buf();

        let mut config = Config::default();
        config.browser.last_directory = Some(PathBuf::from("/tmp/pictures"));

        save_with_override(&config, Some(base_dir.clone())).expect("failed to save");
        assert!(base_dir.join(CONFIG_FILE).exists());

        let (loaded, warning) = load_with_override(Some(base_dir));
        assert!(warning.is_none());
        assert_eq!(loaded, config);
    }

    #[test]
    fn load_with_override_from_empty_directory_returns_default() {
        let temp_dir = tempdir().expect("failed to create temp dir");
        let (config, warning) = load_with_override(Some(temp_dir.path().to_path_buf()));
        assert!(warning.is_none());
        assert_eq!(config, Config::default());
    }

    #[test]
    fn load_with_override_from_corrupted_file_returns_default_with_warning() {
        let temp_dir = tempdir().expect("failed to create temp dir");
        fs::write(temp_dir.path().join(CONFIG_FILE), "[[[ broken").expect("failed to write");

        let (config, warning) = load_with_override(Some(temp_dir.path().to_path_buf()));
        assert_eq!(config, Config::default());
        assert_eq!(warning.as_deref(), Some("status-config-load-error"));
    }

    #[test]
    fn saved_config_uses_sectioned_format() {
        let temp_dir = tempdir().expect("failed to create temp dir");
        let config_path = temp_dir.path().join(CONFIG_FILE);
        save_to_path(&Config::default(), &config_path).expect("failed to save");

        let content = fs::read_to_string(&config_path).expect("failed to read");
        assert!(content.contains("[general]"));
        assert!(content.contains("[viewer]"));
        assert!(content.contains("[browser]"));
        assert!(!content.contains("last_directory"));
    }
}
