//! Application configuration management.
//!
//! Handles loading, saving, and managing application-wide settings: where the
//! preference file lives, queue rules, and simulated transfer timing.

use std::fs;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};
use tracing::{debug, info, warn};

use crate::error::{Error, Result, StorageError};
use crate::queue::QueueConfig;
use crate::simulate::SimulationConfig;

/// Application configuration.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct AppConfig {
    /// Directory holding `preferences.json`.
    #[serde(default = "default_data_directory")]
    pub data_directory: PathBuf,
    /// Download queue rules.
    #[serde(default)]
    pub queue: QueueConfig,
    /// Simulated transfer timing.
    #[serde(default)]
    pub simulation: SimulationConfig,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            data_directory: default_data_directory(),
            queue: QueueConfig::default(),
            simulation: SimulationConfig::default(),
        }
    }
}

impl AppConfig {
    /// Load configuration from `path`, writing defaults there if it is missing.
    pub fn load_from(path: &Path) -> Result<Self> {
        if !path.exists() {
            info!(
                "Config file not found at {}, using defaults",
                path.display()
            );
            let config = Self::default();
            if let Err(e) = config.save_to(path) {
                warn!("Failed to save default config: {}", e);
            }
            return Ok(config);
        }

        let content = fs::read_to_string(path).map_err(|e| StorageError::ReadFailed {
            path: path.to_path_buf(),
            reason: format!("Failed to read config file: {e}"),
        })?;

        let mut config: Self = serde_json::from_str(&content)
            .map_err(|e| Error::Configuration(format!("Failed to parse config file: {e}")))?;
        config.validate();

        info!("Loaded config from {}", path.display());
        debug!("Data directory: {}", config.data_directory.display());

        Ok(config)
    }

    /// Save configuration to `path`, creating parent directories.
    pub fn save_to(&self, path: &Path) -> Result<()> {
        if let Some(parent) = path.parent()
            && !parent.exists()
        {
            fs::create_dir_all(parent).map_err(|e| StorageError::CreateDirFailed {
                path: parent.to_path_buf(),
                reason: format!("Failed to create config directory: {e}"),
            })?;
        }

        let content = serde_json::to_string_pretty(self)?;
        fs::write(path, content).map_err(|e| StorageError::WriteFailed {
            path: path.to_path_buf(),
            reason: format!("Failed to write config file: {e}"),
        })?;

        info!("Saved config to {}", path.display());
        Ok(())
    }

    /// Clamp nested values into their allowed ranges.
    pub fn validate(&mut self) {
        self.simulation.validate();
    }
}

/// Get the default data directory.
#[must_use]
pub fn default_data_directory() -> PathBuf {
    dirs::data_local_dir()
        .unwrap_or_else(|| PathBuf::from("."))
        .join("mediadock")
}

fn config_file_path() -> PathBuf {
    dirs::config_dir()
        .unwrap_or_else(|| dirs::data_local_dir().unwrap_or_else(|| PathBuf::from(".")))
        .join("mediadock")
        .join("config.json")
}

fn validate_data_directory(path: &Path) -> Result<()> {
    if !path.is_absolute() {
        return Err(Error::Configuration(
            "Data directory must be an absolute path".to_string(),
        ));
    }
    if path.exists() && !path.is_dir() {
        return Err(Error::Configuration(format!(
            "Path exists but is not a directory: {}",
            path.display()
        )));
    }
    Ok(())
}

/// Configuration manager that handles loading and caching config.
#[derive(Debug)]
pub struct ConfigManager {
    config: AppConfig,
    path: PathBuf,
}

impl ConfigManager {
    /// Create a new config manager, loading config from the default location.
    ///
    /// # Errors
    ///
    /// Returns an error if the config cannot be loaded.
    pub fn new() -> Result<Self> {
        Self::with_path(config_file_path())
    }

    /// Create a config manager backed by the file at `path`.
    pub fn with_path(path: impl Into<PathBuf>) -> Result<Self> {
        let path = path.into();
        let config = AppConfig::load_from(&path)?;
        Ok(Self { config, path })
    }

    /// Get a reference to the current configuration.
    #[must_use]
    pub const fn config(&self) -> &AppConfig {
        &self.config
    }

    /// Get the data directory.
    #[must_use]
    pub fn data_directory(&self) -> &Path {
        &self.config.data_directory
    }

    /// Validate, store and save a new configuration.
    ///
    /// # Errors
    ///
    /// Returns an error if the data directory is unusable or the config
    /// cannot be saved.
    pub fn update(&mut self, mut config: AppConfig) -> Result<()> {
        validate_data_directory(&config.data_directory)?;
        config.validate();

        self.config = config;
        self.config.save_to(&self.path)?;
        Ok(())
    }

    /// Reset to default configuration.
    ///
    /// # Errors
    ///
    /// Returns an error if the config cannot be saved.
    pub fn reset(&mut self) -> Result<()> {
        self.config = AppConfig::default();
        self.config.save_to(&self.path)?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::queue::TransitionPolicy;
    use tempfile::TempDir;

    #[test]
    fn test_default_config() {
        let config = AppConfig::default();
        assert!(config.data_directory.ends_with("mediadock"));
        assert_eq!(config.queue.transition_policy, TransitionPolicy::Strict);
        assert!(!config.queue.validate_platform_urls);
    }

    #[test]
    fn test_missing_file_writes_defaults() {
        let temp_dir = TempDir::new().expect("Should create temp dir");
        let path = temp_dir.path().join("nested/config.json");

        let config = AppConfig::load_from(&path).expect("Should load defaults");
        assert_eq!(config, AppConfig::default());
        assert!(path.exists());
    }

    #[test]
    fn test_partial_json_uses_section_defaults() {
        let temp_dir = TempDir::new().expect("Should create temp dir");
        let path = temp_dir.path().join("config.json");
        fs::write(
            &path,
            r#"{"data_directory": "/srv/mediadock", "queue": {"transition_policy": "permissive"}}"#,
        )
        .expect("write config");

        let config = AppConfig::load_from(&path).expect("Should load");
        assert_eq!(config.data_directory, PathBuf::from("/srv/mediadock"));
        assert_eq!(config.queue.transition_policy, TransitionPolicy::Permissive);
        assert_eq!(config.simulation, SimulationConfig::default());
    }

    #[test]
    fn test_load_clamps_simulation() {
        let temp_dir = TempDir::new().expect("Should create temp dir");
        let path = temp_dir.path().join("config.json");
        fs::write(
            &path,
            r#"{"simulation": {"tick_interval_ms": 5, "step_percent": 0}}"#,
        )
        .expect("write config");

        let config = AppConfig::load_from(&path).expect("Should load");
        assert_eq!(config.simulation.tick_interval_ms, 50);
        assert_eq!(config.simulation.step_percent, 1);
    }

    #[test]
    fn test_invalid_json_is_configuration_error() {
        let temp_dir = TempDir::new().expect("Should create temp dir");
        let path = temp_dir.path().join("config.json");
        fs::write(&path, "not json").expect("write config");

        let result = AppConfig::load_from(&path);
        assert!(matches!(result, Err(Error::Configuration(_))));
    }

    #[test]
    fn test_config_manager_update_and_reset() {
        let temp_dir = TempDir::new().expect("Should create temp dir");
        let path = temp_dir.path().join("config.json");
        let mut manager = ConfigManager::with_path(&path).expect("Should create manager");

        let mut config = manager.config().clone();
        config.data_directory = temp_dir.path().join("data");
        config.queue.validate_platform_urls = true;
        manager.update(config.clone()).expect("Should update");
        assert_eq!(manager.data_directory(), temp_dir.path().join("data"));

        let reloaded = ConfigManager::with_path(&path).expect("Should reload");
        assert_eq!(reloaded.config(), &config);

        manager.reset().expect("Should reset");
        assert_eq!(manager.config(), &AppConfig::default());
    }

    #[test]
    fn test_config_manager_rejects_relative_data_directory() {
        let temp_dir = TempDir::new().expect("Should create temp dir");
        let mut manager =
            ConfigManager::with_path(temp_dir.path().join("config.json")).expect("manager");

        let config = AppConfig {
            data_directory: PathBuf::from("relative/data"),
            ..AppConfig::default()
        };
        assert!(manager.update(config).is_err());
        assert_eq!(manager.config(), &AppConfig::default());
    }

    #[test]
    fn test_config_json_format() {
        let json = serde_json::to_value(AppConfig::default()).expect("serialize");
        assert!(json.get("data_directory").is_some());
        assert_eq!(json["queue"]["transition_policy"], "strict");
        assert_eq!(json["simulation"]["tick_interval_ms"], 500);
    }
}
