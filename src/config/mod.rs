// SPDX-License-Identifier: MPL-2.0
//! This module handles the component's configuration, including loading and
//! saving user preferences to a `settings.toml` file.
//!
//! # Examples
//!
//! ```no_run
//! use iced_toasts::config::{self, Config, Position};
//!
//! // Load existing configuration
//! let mut config = config::load().unwrap_or_default();
//!
//! // Modify a setting
//! config.position = Some(Position::TopRight);
//!
//! // Save the modified configuration
//! config::save(&config).expect("Failed to save config");
//! ```

use crate::error::Result;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};
use std::time::Duration;

mod defaults;

pub use defaults::{DEFAULT_TICK_INTERVAL_MS, MAX_TICK_INTERVAL_MS, MIN_TICK_INTERVAL_MS};

const CONFIG_FILE: &str = "settings.toml";
const APP_NAME: &str = "IcedToasts";

/// Screen corner the toast overlay is anchored to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum Position {
    TopLeft,
    TopRight,
    BottomLeft,
    #[default]
    BottomRight,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct Config {
    #[serde(default)]
    pub position: Option<Position>,
    #[serde(default)]
    pub tick_interval_ms: Option<u64>,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            position: Some(Position::default()),
            tick_interval_ms: Some(DEFAULT_TICK_INTERVAL_MS),
        }
    }
}

impl Config {
    /// Returns the configured overlay corner, falling back to the default.
    #[must_use]
    pub fn position(&self) -> Position {
        self.position.unwrap_or_default()
    }

    /// Returns the sweep interval, clamped to the allowed bounds.
    #[must_use]
    pub fn tick_interval(&self) -> Duration {
        let ms = self
            .tick_interval_ms
            .unwrap_or(DEFAULT_TICK_INTERVAL_MS)
            .clamp(MIN_TICK_INTERVAL_MS, MAX_TICK_INTERVAL_MS);
        Duration::from_millis(ms)
    }
}

fn get_default_config_path() -> Option<PathBuf> {
    dirs::config_dir().map(|mut path| {
        path.push(APP_NAME);
        path.push(CONFIG_FILE);
        path
    })
}

pub fn load() -> Result<Config> {
    if let Some(path) = get_default_config_path() {
        if path.exists() {
            return load_from_path(&path);
        }
    }
    Ok(Config::default())
}

pub fn save(config: &Config) -> Result<()> {
    if let Some(path) = get_default_config_path() {
        return save_to_path(config, &path);
    }
    Ok(())
}

pub fn load_from_path(path: &Path) -> Result<Config> {
    let content = fs::read_to_string(path)?;
    Ok(toml::from_str(&content).unwrap_or_default())
}

pub fn save_to_path(config: &Config, path: &Path) -> Result<()> {
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent)?;
    }
    let content = toml::to_string_pretty(config)?;
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
            position: Some(Position::TopLeft),
            tick_interval_ms: Some(250),
        };
        let temp_dir = tempdir().expect("failed to create temp dir");
        let config_path = temp_dir.path().join("nested").join("settings.toml");

        save_to_path(&config, &config_path).expect("failed to save config");
        let loaded = load_from_path(&config_path).expect("failed to load config");

        assert_eq!(loaded.position, Some(Position::TopLeft));
        assert_eq!(loaded.tick_interval_ms, Some(250));
    }

    #[test]
    fn load_from_path_returns_default_on_invalid_toml() {
        let temp_dir = tempdir().expect("failed to create temp dir");
        let config_path = temp_dir.path().join("settings.toml");
        std::fs::write(&config_path, "this is { not toml").expect("failed to write file");

        let loaded = load_from_path(&config_path).expect("load should not fail");
        assert_eq!(loaded.position(), Position::BottomRight);
    }

    #[test]
    fn missing_fields_fall_back_to_defaults() {
        let temp_dir = tempdir().expect("failed to create temp dir");
        let config_path = temp_dir.path().join("settings.toml");
        std::fs::write(&config_path, "position = \"top-right\"\n").expect("failed to write file");

        let loaded = load_from_path(&config_path).expect("failed to load config");
        assert_eq!(loaded.position(), Position::TopRight);
        assert_eq!(
            loaded.tick_interval(),
            Duration::from_millis(DEFAULT_TICK_INTERVAL_MS)
        );
    }

    #[test]
    fn tick_interval_is_clamped_to_bounds() {
        let too_fast = Config {
            position: None,
            tick_interval_ms: Some(1),
        };
        assert_eq!(
            too_fast.tick_interval(),
            Duration::from_millis(MIN_TICK_INTERVAL_MS)
        );

        let too_slow = Config {
            position: None,
            tick_interval_ms: Some(60_000),
        };
        assert_eq!(
            too_slow.tick_interval(),
            Duration::from_millis(MAX_TICK_INTERVAL_MS)
        );
    }
}
