//! Configuration file support for the health model.
//!
//! Configuration is loaded from `$XDG_CONFIG_HOME/health-model/config.toml`.

use crate::{Error, Result};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

/// Application configuration
#[derive(Clone, Debug, Serialize, Deserialize, Default)]
pub struct Config {
    #[serde(default)]
    pub validation: ValidationPolicy,
}

/// Tunable validation rules applied at entity construction.
///
/// Every flag defaults to the lenient behavior; enabling one only ever
/// rejects more input.
#[derive(Clone, Copy, Debug, Serialize, Deserialize, Default, PartialEq, Eq)]
pub struct ValidationPolicy {
    /// Accept prescriptions with zero refills
    #[serde(default)]
    pub allow_zero_refills: bool,

    /// Reject over-the-counter usage labels outside the known vocabulary
    #[serde(default)]
    pub strict_usage_labels: bool,

    /// Reject medication routes outside the known vocabulary
    #[serde(default)]
    pub strict_routes: bool,

    /// Reject meal types outside the known vocabulary
    #[serde(default)]
    pub strict_meal_types: bool,

    /// Reject prescriptions whose end date precedes their start date
    #[serde(default)]
    pub strict_date_window: bool,
}

impl ValidationPolicy {
    /// Policy with every optional check enforced
    pub fn strict() -> Self {
        Self {
            allow_zero_refills: false,
            strict_usage_labels: true,
            strict_routes: true,
            strict_meal_types: true,
            strict_date_window: true,
        }
    }
}

impl Config {
    /// Load configuration from the standard config path
    pub fn load() -> Result<Self> {
        let config_path = Self::default_config_path()?;
        if config_path.exists() {
            Self::load_from(&config_path)
        } else {
            tracing::info!(
                "No config file found at {:?}, using defaults",
                config_path
            );
            Ok(Self::default())
        }
    }

    /// Load configuration from a specific path
    pub fn load_from(path: &Path) -> Result<Self> {
        let contents = std::fs::read_to_string(path)?;
        let config: Config = toml::from_str(&contents)?;
        tracing::info!("Loaded config from {:?}", path);
        Ok(config)
    }

    /// Get the default config file path
    pub fn default_config_path() -> Result<PathBuf> {
        let base = match dirs::config_dir() {
            Some(dir) => dir,
            None => {
                let home = std::env::var("HOME").map_err(|_| {
                    Error::Config("HOME environment variable not set".into())
                })?;
                PathBuf::from(home).join(".config")
            }
        };
        Ok(base.join("health-model").join("config.toml"))
    }

    /// Save the current configuration to a specific path
    pub fn save_to(&self, path: &Path) -> Result<()> {
        // Ensure parent directory exists
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)?;
        }

        let contents = toml::to_string_pretty(self)
            .map_err(|e| Error::Config(format!("Failed to serialize config: {}", e)))?;
        std::fs::write(path, contents)?;
        tracing::info!("Saved config to {:?}", path);
        Ok(())
    }
}
