//! TOML-based application configuration.
//!
//! Stores the dial mode -- the only externally meaningful switch -- plus
//! the renderer cadence and dimming preference. Event sets are NOT stored
//! here: events are per-invocation input.
//!
//! Configuration lives at `~/.config/clockface/config.toml`.

use std::path::PathBuf;

use serde::{Deserialize, Serialize};

use crate::error::{ConfigError, Result};
use crate::schedule::Mode;

/// Application configuration.
///
/// Serialized to/from TOML at `~/.config/clockface/config.toml`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Config {
    /// Dial mode (24h or 12h face).
    #[serde(default)]
    pub mode: Mode,
    /// Tick interval for the watch loop, in milliseconds.
    #[serde(default = "default_refresh_ms")]
    pub refresh_ms: u64,
    /// Dim the colors of inactive events in the stack view.
    #[serde(default = "default_true")]
    pub dim_inactive: bool,
}

fn default_refresh_ms() -> u64 {
    1000
}
fn default_true() -> bool {
    true
}

impl Default for Config {
    fn default() -> Self {
        Self {
            mode: Mode::default(),
            refresh_ms: default_refresh_ms(),
            dim_inactive: true,
        }
    }
}

impl Config {
    fn path() -> Result<PathBuf> {
        Ok(super::data_dir()?.join("config.toml"))
    }

    /// Load from disk, writing defaults on first run.
    ///
    /// # Errors
    /// Returns an error if an existing file cannot be read or parsed.
    pub fn load() -> Result<Self> {
        let path = Self::path()?;
        if path.exists() {
            let content = std::fs::read_to_string(&path).map_err(|e| ConfigError::LoadFailed {
                path: path.clone(),
                message: e.to_string(),
            })?;
            let cfg = toml::from_str(&content)
                .map_err(|e| ConfigError::ParseFailed(e.to_string()))?;
            Ok(cfg)
        } else {
            let cfg = Self::default();
            cfg.save()?;
            Ok(cfg)
        }
    }

    /// Load from disk, returning defaults on any error.
    pub fn load_or_default() -> Self {
        Self::load().unwrap_or_default()
    }

    /// Persist to disk.
    ///
    /// # Errors
    /// Returns an error if the config cannot be serialized or written.
    pub fn save(&self) -> Result<()> {
        let path = Self::path()?;
        let content =
            toml::to_string_pretty(self).map_err(|e| ConfigError::ParseFailed(e.to_string()))?;
        std::fs::write(&path, content).map_err(|e| ConfigError::SaveFailed {
            path: path.clone(),
            message: e.to_string(),
        })?;
        Ok(())
    }

    /// Get a config value as a string by key.
    pub fn get(&self, key: &str) -> Option<String> {
        match key {
            "mode" => Some(self.mode.to_string()),
            "refresh_ms" => Some(self.refresh_ms.to_string()),
            "dim_inactive" => Some(self.dim_inactive.to_string()),
            _ => None,
        }
    }

    /// Set a config value by key and persist.
    ///
    /// # Errors
    /// Returns an error if the key is unknown, the value cannot be parsed,
    /// or the config cannot be saved.
    pub fn set(&mut self, key: &str, value: &str) -> Result<()> {
        let unknown_or_bad = |message: String| ConfigError::ParseFailed(message);
        match key {
            "mode" => {
                self.mode = value
                    .parse()
                    .map_err(|_| unknown_or_bad(format!("cannot parse '{value}' as mode")))?;
            }
            "refresh_ms" => {
                self.refresh_ms = value
                    .parse()
                    .map_err(|_| unknown_or_bad(format!("cannot parse '{value}' as integer")))?;
            }
            "dim_inactive" => {
                self.dim_inactive = value
                    .parse()
                    .map_err(|_| unknown_or_bad(format!("cannot parse '{value}' as bool")))?;
            }
            other => return Err(unknown_or_bad(format!("unknown config key: {other}")).into()),
        }
        self.save()?;
        Ok(())
    }
}
