//! Configuration module for markq
//!
//! Manages application configuration: the bookmark store location, the
//! reserved internal scheme prefixes, and search tuning. Configuration is
//! stored in the user's config directory.

use crate::search::SearchConfig;
use config::{Config, ConfigError, File, FileFormat};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::PathBuf;

/// Application configuration structure
#[derive(Debug, Serialize, Deserialize, Clone)]
pub struct MarkqConfig {
    /// Explicit path to the browser bookmark store; when unset the
    /// standard Chromium profile locations are probed
    #[serde(default)]
    pub bookmarks_file: Option<PathBuf>,

    /// Scheme prefixes the browser refuses to open from outside;
    /// confirming one of these copies the address instead
    #[serde(default = "default_internal_schemes")]
    pub internal_schemes: Vec<String>,

    /// How long the "copied" indicator stays up before the blank tab
    /// is requested, in milliseconds
    #[serde(default = "default_copied_flash_ms")]
    pub copied_flash_ms: u64,

    /// Fuzzy matching knobs
    #[serde(default)]
    pub search: SearchConfig,
}

fn default_internal_schemes() -> Vec<String> {
    [
        "chrome://",
        "chrome-extension://",
        "about:",
        "edge://",
        "brave://",
        "vivaldi://",
    ]
    .into_iter()
    .map(String::from)
    .collect()
}

const fn default_copied_flash_ms() -> u64 {
    700
}

impl Default for MarkqConfig {
    fn default() -> Self {
        Self {
            bookmarks_file: None,
            internal_schemes: default_internal_schemes(),
            copied_flash_ms: default_copied_flash_ms(),
            search: SearchConfig::default(),
        }
    }
}

impl MarkqConfig {
    /// Get the path to the config file
    ///
    /// # Errors
    ///
    /// Returns `ConfigError` if the system config directory cannot be determined.
    pub fn config_path() -> Result<PathBuf, ConfigError> {
        let config_dir = dirs::config_dir()
            .ok_or_else(|| ConfigError::Message("Could not determine config directory".to_string()))?;

        Ok(config_dir.join("markq").join("config.toml"))
    }

    /// Load configuration from file, creating a default one if it doesn't exist
    ///
    /// # Errors
    ///
    /// Returns `ConfigError` if the config file cannot be read, parsed, or created.
    pub fn load() -> Result<Self, ConfigError> {
        let config_path = Self::config_path()?;

        if !config_path.exists() {
            let default_config = Self::default();
            default_config.save()?;
            return Ok(default_config);
        }

        let settings = Config::builder()
            .add_source(File::from(config_path).format(FileFormat::Toml))
            .build()?;

        settings.try_deserialize()
    }

    /// Save configuration to file
    ///
    /// # Errors
    ///
    /// Returns `ConfigError` if the config directory cannot be created, the
    /// configuration cannot be serialized to TOML, or the file cannot be written.
    pub fn save(&self) -> Result<(), ConfigError> {
        let config_path = Self::config_path()?;

        if let Some(parent) = config_path.parent() {
            fs::create_dir_all(parent)
                .map_err(|e| ConfigError::Message(format!("Failed to create config directory: {e}")))?;
        }

        let toml_string = toml::to_string_pretty(self)
            .map_err(|e| ConfigError::Message(format!("Failed to serialize config: {e}")))?;

        fs::write(&config_path, toml_string)
            .map_err(|e| ConfigError::Message(format!("Failed to write config file: {e}")))?;

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_internal_schemes_cover_chromium_family() {
        let config = MarkqConfig::default();
        assert!(config.internal_schemes.iter().any(|s| s == "chrome://"));
        assert!(config.internal_schemes.iter().any(|s| s == "about:"));
    }

    #[test]
    fn test_config_roundtrip_toml() {
        let config = MarkqConfig::default();
        let toml_string = toml::to_string_pretty(&config).unwrap();
        let parsed: MarkqConfig = toml::from_str(&toml_string).unwrap();
        assert_eq!(parsed.copied_flash_ms, 700);
        assert_eq!(parsed.internal_schemes, config.internal_schemes);
    }
}
