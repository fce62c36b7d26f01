//! Configuration management for the application.
//!
//! This module handles loading, validating, and saving editor configuration
//! in TOML format with platform-specific directory resolution.

use crate::constants::{CONFIG_DIR_ENV, CONFIG_DIR_NAME, MAX_UNDO_LIMIT};
use crate::history::HistoryConfig;
use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

/// Path configuration for file system locations.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Default)]
pub struct PathConfig {
    /// Directory holding user courses and keyboard layouts
    pub data_dir: Option<PathBuf>,
}

/// Editor configuration.
///
/// # File Location
///
/// - Linux: `~/.config/KeyLayoutEditor/config.toml`
/// - macOS: `~/Library/Application Support/KeyLayoutEditor/config.toml`
/// - Windows: `%APPDATA%\KeyLayoutEditor\config.toml`
///
/// The `KEYLAYOUT_EDITOR_CONFIG_DIR` environment variable overrides the
/// directory.
///
/// # Validation
///
/// - `data_dir`, if set, must not point to an existing regular file
/// - `undo_limit` must not exceed 10000 (0 means unlimited)
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Default)]
pub struct EditorConfig {
    /// File system paths
    #[serde(default)]
    pub paths: PathConfig,
    /// Undo history settings
    #[serde(default)]
    pub history: HistoryConfig,
}

impl EditorConfig {
    /// Creates a new config with default values.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Gets the config directory path.
    pub fn config_dir() -> Result<PathBuf> {
        if let Some(dir) = std::env::var_os(CONFIG_DIR_ENV) {
            return Ok(PathBuf::from(dir));
        }

        let config_dir = dirs::config_dir()
            .context("Failed to determine config directory")?
            .join(CONFIG_DIR_NAME);

        Ok(config_dir)
    }

    /// Gets the full path to the config file.
    pub fn config_file_path() -> Result<PathBuf> {
        Ok(Self::config_dir()?.join("config.toml"))
    }

    /// Loads configuration from the default config file.
    ///
    /// If the file doesn't exist, returns default configuration.
    pub fn load() -> Result<Self> {
        Self::load_from(&Self::config_file_path()?)
    }

    /// Loads configuration from `path`, falling back to defaults if it is missing.
    pub fn load_from(path: &Path) -> Result<Self> {
        if !path.exists() {
            tracing::debug!(path = %path.display(), "no config file, using defaults");
            return Ok(Self::new());
        }

        let content = fs::read_to_string(path)
            .with_context(|| format!("Failed to read config file: {}", path.display()))?;

        let config: Self = toml::from_str(&content)
            .with_context(|| format!("Failed to parse config file: {}", path.display()))?;

        config.validate()?;
        Ok(config)
    }

    /// Saves configuration to the default config file.
    pub fn save(&self) -> Result<()> {
        self.save_to(&Self::config_file_path()?)
    }

    /// Saves configuration to `path` using atomic write.
    ///
    /// Uses temp file + rename pattern for atomic writes.
    pub fn save_to(&self, path: &Path) -> Result<()> {
        self.validate()?;

        if let Some(dir) = path.parent() {
            fs::create_dir_all(dir)
                .with_context(|| format!("Failed to create config directory: {}", dir.display()))?;
        }

        let content = toml::to_string_pretty(self).context("Failed to serialize configuration")?;
        let temp_path = path.with_extension("toml.tmp");

        fs::write(&temp_path, content).with_context(|| {
            format!("Failed to write temp config file: {}", temp_path.display())
        })?;

        fs::rename(&temp_path, path).with_context(|| {
            format!("Failed to rename temp config file to: {}", path.display())
        })?;

        tracing::debug!(path = %path.display(), "saved config");
        Ok(())
    }

    /// Validates configuration values.
    pub fn validate(&self) -> Result<()> {
        if let Some(data_dir) = &self.paths.data_dir {
            if data_dir.is_file() {
                anyhow::bail!(
                    "Data directory path points to a file: {}",
                    data_dir.display()
                );
            }
        }

        if self.history.undo_limit > MAX_UNDO_LIMIT {
            anyhow::bail!(
                "Undo limit {} exceeds maximum of {}",
                self.history.undo_limit,
                MAX_UNDO_LIMIT
            );
        }

        Ok(())
    }

    /// Returns the configured data directory or the default one.
    pub fn data_dir(&self) -> Result<PathBuf> {
        match &self.paths.data_dir {
            Some(dir) => Ok(dir.clone()),
            None => Ok(Self::config_dir()?.join("data")),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::history::DEFAULT_UNDO_LIMIT;
    use tempfile::TempDir;

    #[test]
    fn test_default_config() {
        let config = EditorConfig::new();
        assert_eq!(config.history.undo_limit, DEFAULT_UNDO_LIMIT);
        assert!(config.paths.data_dir.is_none());
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_save_and_load_roundtrip() {
        let temp = TempDir::new().unwrap();
        let path = temp.path().join("nested").join("config.toml");

        let mut config = EditorConfig::new();
        config.history.undo_limit = 25;
        config.paths.data_dir = Some(temp.path().join("data"));
        config.save_to(&path).unwrap();

        let loaded = EditorConfig::load_from(&path).unwrap();
        assert_eq!(loaded, config);
        assert!(!path.with_extension("toml.tmp").exists());
    }

    #[test]
    fn test_load_missing_file_returns_default() {
        let temp = TempDir::new().unwrap();
        let loaded = EditorConfig::load_from(&temp.path().join("missing.toml")).unwrap();
        assert_eq!(loaded, EditorConfig::default());
    }

    #[test]
    fn test_load_partial_file_fills_defaults() {
        let temp = TempDir::new().unwrap();
        let path = temp.path().join("config.toml");
        fs::write(&path, "[paths]\n").unwrap();

        let loaded = EditorConfig::load_from(&path).unwrap();
        assert_eq!(loaded.history.undo_limit, DEFAULT_UNDO_LIMIT);
    }

    #[test]
    fn test_load_invalid_toml_fails() {
        let temp = TempDir::new().unwrap();
        let path = temp.path().join("config.toml");
        fs::write(&path, "history = [").unwrap();

        assert!(EditorConfig::load_from(&path).is_err());
    }

    #[test]
    fn test_validate_rejects_large_undo_limit() {
        let mut config = EditorConfig::new();
        config.history.undo_limit = MAX_UNDO_LIMIT + 1;
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_validate_rejects_file_as_data_dir() {
        let temp = TempDir::new().unwrap();
        let file = temp.path().join("file.txt");
        fs::write(&file, "x").unwrap();

        let mut config = EditorConfig::new();
        config.paths.data_dir = Some(file);
        assert!(config.validate().is_err());
    }
}
