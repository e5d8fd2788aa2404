//! Config persistence and path resolution for `DebugConfiguration`.
//!
//! Covers:
//! - `load` / `save` against the XDG-style default path
//! - `load_from` / `save_to` for explicit paths (atomic write)
//! - `config_path` / `config_dir` helpers

use super::DebugConfiguration;
use crate::error::ConfigError;
use std::fs;
use std::path::{Path, PathBuf};

/// Directory name under the user config root.
const APP_DIR_NAME: &str = "agent-debug";

/// File name of the debug configuration document.
const CONFIG_FILE_NAME: &str = "debug-config.yaml";

impl DebugConfiguration {
    /// Load configuration from the default path or create the default file.
    pub fn load() -> Result<Self, ConfigError> {
        let config_path = Self::config_path();
        log::info!("Config path: {:?}", config_path);

        if config_path.exists() {
            Self::load_from(&config_path)
        } else {
            log::info!(
                "Config file not found, creating default at {:?}",
                config_path
            );
            let config = Self::default();
            if let Err(e) = config.save() {
                log::error!("Failed to save default config: {}", e);
                return Err(e);
            }
            log::info!("Default config created successfully");
            Ok(config)
        }
    }

    /// Load and validate configuration from an explicit path.
    pub fn load_from(path: &Path) -> Result<Self, ConfigError> {
        log::info!("Loading debug config from {:?}", path);
        let contents = fs::read_to_string(path)?;
        let config: DebugConfiguration =
            serde_yaml_ng::from_str(&contents).map_err(ConfigError::Parse)?;
        config.validate()?;
        Ok(config)
    }

    /// Save configuration to the default path.
    pub fn save(&self) -> Result<(), ConfigError> {
        self.save_to(&Self::config_path())
    }

    /// Save configuration to an explicit path.
    pub fn save_to(&self, path: &Path) -> Result<(), ConfigError> {
        self.validate()?;

        if let Some(parent) = path.parent()
            && !parent.as_os_str().is_empty()
        {
            fs::create_dir_all(parent)?;
        }

        let yaml = serde_yaml_ng::to_string(self).map_err(ConfigError::Serialize)?;

        // Atomic save: write to temp file then rename to prevent corruption on crash
        let temp_path = path.with_extension("yaml.tmp");
        fs::write(&temp_path, &yaml)?;
        fs::rename(&temp_path, path)?;

        log::debug!("Saved debug config to {:?}", path);
        Ok(())
    }

    /// Get the configuration file path (using XDG convention)
    pub fn config_path() -> PathBuf {
        Self::config_dir().join(CONFIG_FILE_NAME)
    }

    /// Get the configuration directory path (using XDG convention)
    pub fn config_dir() -> PathBuf {
        #[cfg(target_os = "windows")]
        {
            if let Some(config_dir) = dirs::config_dir() {
                config_dir.join(APP_DIR_NAME)
            } else {
                PathBuf::from(".")
            }
        }
        #[cfg(not(target_os = "windows"))]
        {
            if let Some(home_dir) = dirs::home_dir() {
                home_dir.join(".config").join(APP_DIR_NAME)
            } else {
                PathBuf::from(".")
            }
        }
    }
}
