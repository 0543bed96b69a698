// SPDX-License-Identifier: Apache-2.0

//! Configuration management for DeFi Intel Timeline.
//!
//! Provides layered configuration from files and environment variables.
//! Uses XDG-compliant paths with environment variable support.
//!
//! # Configuration Sources (in priority order)
//!
//! 1. Environment variables (prefix: `DEFINTEL_`)
//! 2. Config file: `~/.config/defintel/config.toml`
//! 3. Built-in defaults
//!
//! # Examples
//!
//! ```bash
//! # Point the client at another API host
//! DEFINTEL_API__BASE_URL=https://intel.example.com defintel browse
//! ```

use std::path::{Path, PathBuf};

use config::{Config, Environment, File};
use serde::Deserialize;

use crate::card::is_valid_date_pattern;
use crate::error::DefIntelError;
use crate::messages::Language;

/// Number of records requested per page.
pub const DEFAULT_PAGE_SIZE: usize = 20;

/// Number of tags shown while the tag list is collapsed.
pub const DEFAULT_TAG_PREVIEW_LIMIT: usize = 8;

/// Application configuration.
#[derive(Debug, Default, Deserialize)]
#[serde(default)]
pub struct AppConfig {
    /// Feed API settings.
    pub api: ApiConfig,
    /// Block explorer link targets.
    pub explorer: ExplorerConfig,
    /// UI preferences.
    pub ui: UiConfig,
}

/// Feed API settings.
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct ApiConfig {
    /// Base URL every API path is appended to.
    pub base_url: String,
    /// Records requested per page.
    pub page_size: usize,
}

impl Default for ApiConfig {
    fn default() -> Self {
        Self {
            base_url: "http://localhost:8080".to_string(),
            page_size: DEFAULT_PAGE_SIZE,
        }
    }
}

/// Block explorer settings used to build outbound links.
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct ExplorerConfig {
    /// Multi-chain explorer for incident transactions and addresses.
    pub blockscan_url: String,
    /// Explorer for transfer addresses.
    pub etherscan_url: String,
}

impl Default for ExplorerConfig {
    fn default() -> Self {
        Self {
            blockscan_url: "https://blockscan.com".to_string(),
            etherscan_url: "https://etherscan.io".to_string(),
        }
    }
}

/// UI preferences.
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct UiConfig {
    /// Enable colored output.
    pub color: bool,
    /// Show spinners while requests are in flight.
    pub progress_bars: bool,
    /// Language of user-facing messages and dates.
    pub language: Language,
    /// Tags shown before the list needs expanding.
    pub tag_preview_limit: usize,
    /// strftime pattern overriding the language's date format.
    pub date_format: Option<String>,
}

impl Default for UiConfig {
    fn default() -> Self {
        Self {
            color: true,
            progress_bars: true,
            language: Language::default(),
            tag_preview_limit: DEFAULT_TAG_PREVIEW_LIMIT,
            date_format: None,
        }
    }
}

impl UiConfig {
    /// Date pattern in effect: the override, or the language default.
    #[must_use]
    pub fn date_pattern(&self) -> &str {
        self.date_format
            .as_deref()
            .unwrap_or_else(|| self.language.date_pattern())
    }
}

/// Returns the configuration directory.
///
/// Respects the `XDG_CONFIG_HOME` environment variable if set,
/// otherwise defaults to `~/.config/defintel`.
#[must_use]
pub fn config_dir() -> PathBuf {
    if let Ok(xdg_config) = std::env::var("XDG_CONFIG_HOME")
        && !xdg_config.is_empty()
    {
        return PathBuf::from(xdg_config).join("defintel");
    }
    dirs::home_dir()
        .expect("Could not determine home directory - is HOME set?")
        .join(".config")
        .join("defintel")
}

/// Returns the path to the configuration file.
#[must_use]
pub fn config_file_path() -> PathBuf {
    config_dir().join("config.toml")
}

/// Load application configuration from the default location.
///
/// Environment variables use the prefix `DEFINTEL_` and double underscore
/// for nested keys (e.g., `DEFINTEL_API__BASE_URL`).
///
/// # Errors
///
/// Returns `DefIntelError::Config` if the config file exists but is invalid.
pub fn load_config() -> Result<AppConfig, DefIntelError> {
    load_config_from(&config_file_path())
}

/// Load application configuration from an explicit file path.
///
/// The file is optional; environment variables still take precedence.
pub fn load_config_from(path: &Path) -> Result<AppConfig, DefIntelError> {
    let config = Config::builder()
        .add_source(File::from(path).required(false))
        .add_source(
            Environment::with_prefix("DEFINTEL")
                .prefix_separator("_")
                .separator("__")
                .try_parsing(true),
        )
        .build()?;

    let app_config: AppConfig = config.try_deserialize()?;
    if app_config.api.page_size == 0 {
        return Err(DefIntelError::Config {
            message: "api.page_size must be at least 1".to_string(),
        });
    }
    if let Some(pattern) = &app_config.ui.date_format
        && !is_valid_date_pattern(pattern)
    {
        return Err(DefIntelError::Config {
            message: format!("ui.date_format '{pattern}' is not a valid strftime pattern"),
        });
    }

    Ok(app_config)
}
