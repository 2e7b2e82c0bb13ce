// SPDX-License-Identifier: MPL-2.0
//! This module handles the application's configuration: reading the
//! user-edited `settings.toml` file. The viewer never writes it.
//!
//! # Configuration Sections
//!
//! - `[general]` - Language override
//! - `[source]` - Changelog base URL (or directory) and request timeout
//! - `[menu]` - Language menu closing delay
//!
//! # Path Resolution
//!
//! 1. Use `load_from_path()` with an explicit path
//! 2. `--config-dir` CLI flag or `CHANGELOG_VIEWER_CONFIG_DIR` environment variable
//! 3. Falls back to platform-specific config directory
//!
//! # Examples
//!
//! ```no_run
//! use changelog_viewer::config;
//!
//! let (config, warning) = config::load();
//! if let Some(warning) = warning {
//!     eprintln!("using defaults: {}", warning);
//! }
//! println!("changelogs from {}", config.base_url());
//! ```

pub mod defaults;

pub use defaults::*;

use crate::app::paths;
use crate::error::Result;
use serde::Deserialize;
use std::fs;
use std::path::{Path, PathBuf};
use std::time::Duration;

const CONFIG_FILE: &str = "settings.toml";

// =============================================================================
// Section Structs
// =============================================================================

/// General application settings.
#[derive(Debug, Clone, Default, Deserialize, PartialEq)]
pub struct GeneralConfig {
    /// Language code override (e.g. "ja"). Ignored when unsupported.
    #[serde(default)]
    pub language: Option<String>,
}

/// Where changelog documents come from.
#[derive(Debug, Clone, Deserialize, PartialEq)]
pub struct SourceConfig {
    /// `http(s)://` base URL or a local directory path.
    #[serde(default = "default_base_url")]
    pub base_url: Option<String>,

    /// HTTP request timeout in seconds.
    #[serde(default = "default_timeout_secs")]
    pub timeout_secs: Option<u64>,
}

impl Default for SourceConfig {
    fn default() -> Self {
        Self {
            base_url: default_base_url(),
            timeout_secs: default_timeout_secs(),
        }
    }
}

/// Language menu settings.
#[derive(Debug, Clone, Deserialize, PartialEq)]
pub struct MenuConfig {
    /// Delay before a closing menu is removed, in milliseconds.
    #[serde(default = "default_close_delay_ms")]
    pub close_delay_ms: Option<u64>,
}

impl Default for MenuConfig {
    fn default() -> Self {
        Self {
            close_delay_ms: default_close_delay_ms(),
        }
    }
}

/// Application configuration with logical sections.
#[derive(Debug, Clone, Deserialize, PartialEq, Default)]
pub struct Config {
    #[serde(default)]
    pub general: GeneralConfig,

    #[serde(default)]
    pub source: SourceConfig,

    #[serde(default)]
    pub menu: MenuConfig,
}

impl Config {
    /// Base URL or directory, falling back to the default.
    #[must_use]
    pub fn base_url(&self) -> &str {
        self.source.base_url.as_deref().unwrap_or(DEFAULT_BASE_URL)
    }

    /// Request timeout, clamped to the supported range.
    #[must_use]
    pub fn timeout(&self) -> Duration {
        let secs = self
            .source
            .timeout_secs
            .unwrap_or(DEFAULT_TIMEOUT_SECS)
            .clamp(MIN_TIMEOUT_SECS, MAX_TIMEOUT_SECS);
        Duration::from_secs(secs)
    }

    /// Menu closing delay, clamped to the supported range.
    #[must_use]
    pub fn close_delay(&self) -> Duration {
        let ms = self
            .menu
            .close_delay_ms
            .unwrap_or(DEFAULT_MENU_CLOSE_DELAY_MS)
            .min(MAX_MENU_CLOSE_DELAY_MS);
        Duration::from_millis(ms)
    }
}

// =============================================================================
// Default Value Functions
// =============================================================================

fn default_base_url() -> Option<String> {
    Some(DEFAULT_BASE_URL.to_string())
}

fn default_timeout_secs() -> Option<u64> {
    Some(DEFAULT_TIMEOUT_SECS)
}

fn default_close_delay_ms() -> Option<u64> {
    Some(DEFAULT_MENU_CLOSE_DELAY_MS)
}

// =============================================================================
// Load
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
/// default config with a warning message explaining what went wrong.
pub fn load() -> (Config, Option<String>) {
    load_with_override(None)
}

/// Loads the configuration from a custom directory.
pub fn load_with_override(base_dir: Option<PathBuf>) -> (Config, Option<String>) {
    if let Some(path) = get_config_path_with_override(base_dir) {
        if path.exists() {
            return match load_from_path(&path) {
                Ok(config) => (config, None),
                Err(err) => (
                    Config::default(),
                    Some(format!("{} ({})", err, path.display())),
                ),
            };
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
