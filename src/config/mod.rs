// SPDX-License-Identifier: MPL-2.0
//! This module handles the crate's persisted configuration: the layout
//! defaults shared by every banner and the notification defaults used by the
//! demo, stored in a `settings.toml` file.
//!
//! # Configuration Sections
//!
//! - `[layout]` - Minimum height, content margin and horizontal inset
//! - `[notification]` - Default delay, message length and sound directory
//!
//! # Path Resolution
//!
//! 1. Use `load_from_path()`/`save_to_path()` with explicit path
//! 2. Set `ICED_BANNER_CONFIG_DIR` environment variable
//! 3. Falls back to platform-specific config directory
//!
//! # Examples
//!
//! ```no_run
//! use iced_banner::config;
//!
//! let (mut config, _warning) = config::load();
//! config.layout.minimum_height = Some(64.0);
//! config::save(&config).expect("Failed to save config");
//! ```

pub mod defaults;

pub use defaults::*;

use crate::error::{Error, Result};
use crate::ui::notifications::LayoutDefaults;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};
use std::time::Duration;

const CONFIG_FILE: &str = "settings.toml";

/// Application name used for directory naming.
const APP_NAME: &str = "IcedBanner";

/// Environment variable to override the config directory.
pub const ENV_CONFIG_DIR: &str = "ICED_BANNER_CONFIG_DIR";

// =============================================================================
// Section Structs
// =============================================================================

/// Layout defaults applied to banners created after loading.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct LayoutConfig {
    #[serde(default = "default_minimum_height", skip_serializing_if = "Option::is_none")]
    pub minimum_height: Option<f32>,

    #[serde(
        default = "default_content_margin_height",
        skip_serializing_if = "Option::is_none"
    )]
    pub content_margin_height: Option<f32>,

    #[serde(default = "default_offset_x", skip_serializing_if = "Option::is_none")]
    pub default_offset_x: Option<f32>,
}

impl Default for LayoutConfig {
    fn default() -> Self {
        Self {
            minimum_height: default_minimum_height(),
            content_margin_height: default_content_margin_height(),
            default_offset_x: default_offset_x(),
        }
    }
}

/// Per-notification defaults.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct NotificationConfig {
    /// Auto-dismiss delay in milliseconds. `0` keeps banners until hidden.
    #[serde(default = "default_delay_ms", skip_serializing_if = "Option::is_none")]
    pub default_delay_ms: Option<u64>,

    #[serde(
        default = "default_message_max_length",
        skip_serializing_if = "Option::is_none"
    )]
    pub message_max_length: Option<usize>,

    /// Directory searched for sound file names.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub sound_dir: Option<PathBuf>,
}

impl Default for NotificationConfig {
    fn default() -> Self {
        Self {
            default_delay_ms: default_delay_ms(),
            message_max_length: default_message_max_length(),
            sound_dir: None,
        }
    }
}

// =============================================================================
// Main Config Struct (Sectioned)
// =============================================================================

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Default)]
pub struct Config {
    #[serde(default)]
    pub layout: LayoutConfig,

    #[serde(default)]
    pub notification: NotificationConfig,
}

impl Config {
    /// Builds layout defaults from this config, clamping out-of-range values.
    #[must_use]
    pub fn layout_defaults(&self) -> LayoutDefaults {
        let mut layout = LayoutDefaults::default();
        if let Some(height) = self.layout.minimum_height {
            layout.set_minimum_height(height);
        }
        if let Some(margin) = self.layout.content_margin_height {
            layout.set_content_margin_height(margin);
        }
        if let Some(offset) = self.layout.default_offset_x {
            layout.set_default_offset_x(offset);
        }
        layout
    }

    /// Stores the given layout defaults in the `[layout]` section.
    pub fn set_layout_defaults(&mut self, layout: &LayoutDefaults) {
        self.layout = LayoutConfig {
            minimum_height: Some(layout.minimum_height()),
            content_margin_height: Some(layout.content_margin_height()),
            default_offset_x: Some(layout.default_offset_x()),
        };
    }

    #[must_use]
    pub fn default_delay(&self) -> Duration {
        self.notification
            .default_delay_ms
            .map_or(DEFAULT_DELAY, Duration::from_millis)
    }

    #[must_use]
    pub fn message_max_length(&self) -> usize {
        self.notification
            .message_max_length
            .unwrap_or(DEFAULT_MESSAGE_MAX_LENGTH)
    }

    /// Returns the sound directory, falling back to the platform data dir.
    #[must_use]
    pub fn sound_dir(&self) -> Option<PathBuf> {
        self.notification.sound_dir.clone().or_else(|| {
            dirs::data_dir().map(|mut path| {
                path.push(APP_NAME);
                path.push("sounds");
                path
            })
        })
    }
}

// =============================================================================
// Default Value Functions
// =============================================================================

fn default_minimum_height() -> Option<f32> {
    Some(DEFAULT_MINIMUM_HEIGHT)
}

fn default_content_margin_height() -> Option<f32> {
    Some(DEFAULT_CONTENT_MARGIN_HEIGHT)
}

fn default_offset_x() -> Option<f32> {
    Some(DEFAULT_OFFSET_X)
}

fn default_delay_ms() -> Option<u64> {
    u64::try_from(DEFAULT_DELAY.as_millis()).ok()
}

fn default_message_max_length() -> Option<usize> {
    Some(DEFAULT_MESSAGE_MAX_LENGTH)
}

// =============================================================================
// Config Path Resolution
// =============================================================================

fn get_config_path_with_override(base_dir: Option<PathBuf>) -> Option<PathBuf> {
    base_dir
        .or_else(|| std::env::var_os(ENV_CONFIG_DIR).map(PathBuf::from))
        .or_else(|| {
            dirs::config_dir().map(|mut path| {
                path.push(APP_NAME);
                path
            })
        })
        .map(|mut path| {
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
/// default config with a warning message explaining what went wrong.
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
                    tracing::warn!(path = %path.display(), error = %err, "falling back to default config");
                    return (Config::default(), Some(err.to_string()));
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
