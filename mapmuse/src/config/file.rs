//! Configuration file handling for `~/.mapmuse/config.ini`.
//!
//! Loads and saves user configuration with sensible defaults. Settings
//! structs live in [`super::settings`], constants in [`super::defaults`],
//! parsing in [`super::parser`] and serialization in [`super::writer`].

use ini::Ini;
use std::path::{Path, PathBuf};
use thiserror::Error;

use super::settings::ConfigFile;

/// Configuration file errors.
#[derive(Debug, Error)]
pub enum ConfigFileError {
    /// Failed to read config file
    #[error("failed to read config file: {0}")]
    ReadError(#[from] ini::Error),

    /// Failed to write config file
    #[error("failed to write config file: {0}")]
    WriteError(String),

    /// Invalid configuration value
    #[error("invalid configuration: {section}.{key} = '{value}' - {reason}")]
    InvalidValue {
        section: String,
        key: String,
        value: String,
        reason: String,
    },

    /// Failed to create config directory
    #[error("failed to create config directory: {0}")]
    DirectoryError(std::io::Error),
}

impl ConfigFile {
    /// Load configuration from the default path (`~/.mapmuse/config.ini`).
    ///
    /// If the file doesn't exist, returns defaults.
    pub fn load() -> Result<Self, ConfigFileError> {
        Self::load_from(&config_file_path())
    }

    /// Load configuration from a specific path.
    ///
    /// If the file doesn't exist, returns defaults.
    pub fn load_from(path: &Path) -> Result<Self, ConfigFileError> {
        if !path.exists() {
            return Ok(Self::default());
        }

        let ini = Ini::load_from_file(path)?;
        super::parser::parse_ini(&ini)
    }

    /// Save configuration to the default path (`~/.mapmuse/config.ini`).
    pub fn save(&self) -> Result<(), ConfigFileError> {
        self.save_to(&config_file_path())
    }

    /// Save configuration to a specific path.
    pub fn save_to(&self, path: &Path) -> Result<(), ConfigFileError> {
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent).map_err(ConfigFileError::DirectoryError)?;
        }

        let content = super::writer::to_config_string(self);
        std::fs::write(path, content).map_err(|e| ConfigFileError::WriteError(e.to_string()))
    }
}

/// Get the path to the config directory (`~/.mapmuse`).
pub fn config_directory() -> PathBuf {
    dirs::home_dir()
        .unwrap_or_else(|| PathBuf::from("."))
        .join(".mapmuse")
}

/// Get the path to the config file (`~/.mapmuse/config.ini`).
pub fn config_file_path() -> PathBuf {
    config_directory().join("config.ini")
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::{DEFAULT_UPDATE_INTERVAL, DEFAULT_ZOOM};

    #[test]
    fn default_config() {
        let config = ConfigFile::default();
        assert_eq!(config.wallpaper.zoom, DEFAULT_ZOOM);
        assert_eq!(config.wallpaper.update_interval, DEFAULT_UPDATE_INTERVAL);
        assert!(config.wallpaper.invert_lightness);
        assert!(config.provider.google_api_key.is_none());
        assert!(config.themes.file.is_none());
    }

    #[test]
    fn load_nonexistent_returns_defaults() {
        let temp_dir = tempfile::TempDir::new().unwrap();
        let config_path = temp_dir.path().join("nonexistent.ini");

        let config = ConfigFile::load_from(&config_path).unwrap();
        assert_eq!(config, ConfigFile::default());
    }

    #[test]
    fn save_and_reload() {
        let temp_dir = tempfile::TempDir::new().unwrap();
        let config_path = temp_dir.path().join("config.ini");

        let mut config = ConfigFile::default();
        config.wallpaper.map_mode = 4;
        config.provider.mapbox_access_token = Some("pk.test".to_string());
        config.save_to(&config_path).unwrap();

        let reloaded = ConfigFile::load_from(&config_path).unwrap();
        assert_eq!(reloaded, config);
    }

    #[test]
    fn save_creates_parent_directory() {
        let temp_dir = tempfile::TempDir::new().unwrap();
        let config_path = temp_dir.path().join("nested").join("config.ini");

        ConfigFile::default().save_to(&config_path).unwrap();
        assert!(config_path.exists());
    }
}
