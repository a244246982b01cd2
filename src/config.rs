//! Configuration management for wplay.
//!
//! The config file lives at `<config dir>/wplay/config.toml`, or wherever
//! `WPLAY_CONFIG` points. A missing file means defaults; command-line flags
//! override whatever the file says.

use std::fs;
use std::path::{Path, PathBuf};
use std::time::Duration;

use serde::{Deserialize, Serialize};

use crate::player::PlayerOptions;
use crate::theme::Theme;
use crate::workout::Gender;

/// Environment variable overriding the config file location.
pub const CONFIG_ENV: &str = "WPLAY_CONFIG";

#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("Could not determine config directory")]
    NoConfigDir,

    #[error("Failed to access config file {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Invalid config file: {0}")]
    Parse(#[from] toml::de::Error),

    #[error("Failed to serialize config: {0}")]
    Serialize(#[from] toml::ser::Error),
}

/// Main configuration structure.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    pub player: PlayerConfig,
    pub ui: UiConfig,
}

/// Playback settings.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct PlayerConfig {
    /// Skip the preview screen
    pub autostart: bool,
    /// Sprite frame interval in milliseconds
    pub frame_interval_ms: u64,
    /// Initial image variant
    pub gender: Gender,
    /// Where to write the debug log; no log without it
    #[serde(skip_serializing_if = "Option::is_none")]
    pub log_file: Option<PathBuf>,
}

impl Default for PlayerConfig {
    fn default() -> Self {
        Self {
            autostart: false,
            frame_interval_ms: 1000,
            gender: Gender::Male,
            log_file: None,
        }
    }
}

/// Appearance settings.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct UiConfig {
    /// "default", "classic" or "ocean"
    pub theme: String,
}

impl Default for UiConfig {
    fn default() -> Self {
        Self {
            theme: "default".to_string(),
        }
    }
}

impl Config {
    /// Path of the config file.
    pub fn config_path() -> Result<PathBuf, ConfigError> {
        if let Some(path) = std::env::var_os(CONFIG_ENV).filter(|p| !p.is_empty()) {
            return Ok(PathBuf::from(path));
        }
        dirs::config_dir()
            .map(|dir| dir.join("wplay").join("config.toml"))
            .ok_or(ConfigError::NoConfigDir)
    }

    /// Load from the default location.
    pub fn load() -> Result<Self, ConfigError> {
        Self::load_from(&Self::config_path()?)
    }

    /// Load from `path`; a missing file gives the defaults.
    pub fn load_from(path: &Path) -> Result<Self, ConfigError> {
        if !path.exists() {
            tracing::debug!(path = %path.display(), "No config file, using defaults");
            return Ok(Self::default());
        }
        let content = fs::read_to_string(path).map_err(|source| ConfigError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        Ok(toml::from_str(&content)?)
    }

    /// Save to the default location.
    pub fn save(&self) -> Result<(), ConfigError> {
        self.save_to(&Self::config_path()?)
    }

    /// Write the config as TOML, creating parent directories.
    pub fn save_to(&self, path: &Path) -> Result<(), ConfigError> {
        let io_err = |source| ConfigError::Io {
            path: path.to_path_buf(),
            source,
        };
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent).map_err(io_err)?;
        }
        let content = toml::to_string_pretty(self)?;
        fs::write(path, content).map_err(io_err)
    }

    /// Player options from the `[player]` section.
    pub fn player_options(&self) -> PlayerOptions {
        PlayerOptions {
            autostart: self.player.autostart,
            gender: self.player.gender,
            frame_interval: Duration::from_millis(self.player.frame_interval_ms),
        }
    }

    /// Theme named in `[ui]`; unknown names fall back to the default.
    pub fn theme(&self) -> Theme {
        Theme::by_name(&self.ui.theme).unwrap_or_else(|| {
            tracing::warn!(theme = %self.ui.theme, "Unknown theme, using default");
            Theme::default()
        })
    }
}
