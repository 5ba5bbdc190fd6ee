//! Logging and output configuration.
//!
//! Settings are read from a TOML file. Every field is optional; anything not
//! given keeps its default.
//!
//! # Configuration File Format
//!
//! ```toml
//! [logging]
//! level = "info"   # error | warn | info | debug | trace
//! color = true
//!
//! [output]
//! summary = true
//! ```

use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};
use thiserror::Error;

/// Log levels accepted in `logging.level`.
pub const LOG_LEVELS: &[&str] = &["error", "warn", "info", "debug", "trace"];

/// Errors that can occur while loading configuration.
#[derive(Debug, Clone, Error)]
pub enum ConfigError {
    /// Configuration file not found at the specified path.
    #[error("Configuration file not found: {}", .0.display())]
    ConfigNotFound(PathBuf),
    /// Invalid TOML syntax, structure, or value.
    #[error("Invalid configuration: {0}")]
    ConfigInvalid(String),
    /// IO error while reading configuration.
    #[error("IO error reading configuration: {0}")]
    IoError(String),
}

/// Top-level configuration.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Config {
    #[serde(default)]
    pub logging: LoggingConfig,

    #[serde(default)]
    pub output: OutputConfig,
}

/// `[logging]` section.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LoggingConfig {
    /// Minimum level written by the subscriber.
    #[serde(default = "default_level")]
    pub level: String,

    /// Whether log lines use ANSI colors.
    #[serde(default = "default_true")]
    pub color: bool,
}

/// `[output]` section.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct OutputConfig {
    /// Print the per-category summary table after a run.
    #[serde(default = "default_true")]
    pub summary: bool,
}

fn default_level() -> String {
    "info".to_string()
}

fn default_true() -> bool {
    true
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: default_level(),
            color: true,
        }
    }
}

impl Default for OutputConfig {
    fn default() -> Self {
        Self { summary: true }
    }
}

impl Config {
    /// Load configuration from a file, with fallback to defaults.
    ///
    /// Attempts to load configuration in the following order:
    /// 1. If `config_path` is provided, load from that file
    /// 2. Look for `.organizerc.toml` in the current directory
    /// 3. Look for `~/.config/organize/config.toml` in home directory
    /// 4. Fall back to default configuration
    ///
    /// # Errors
    ///
    /// Returns an error if a configuration file is explicitly provided but cannot
    /// be read, or if any file found is invalid.
    pub fn load(config_path: Option<&Path>) -> Result<Self, ConfigError> {
        if let Some(path) = config_path {
            return Self::load_from_file(path);
        }

        let local_config = PathBuf::from(".organizerc.toml");
        if local_config.exists() {
            return Self::load_from_file(&local_config);
        }

        if let Ok(home) = std::env::var("HOME") {
            let home_config = PathBuf::from(home)
                .join(".config")
                .join("organize")
                .join("config.toml");
            if home_config.exists() {
                return Self::load_from_file(&home_config);
            }
        }

        Ok(Self::default())
    }

    /// Load configuration from a specific file.
    pub fn load_from_file(path: &Path) -> Result<Self, ConfigError> {
        if !path.exists() {
            return Err(ConfigError::ConfigNotFound(path.to_path_buf()));
        }

        let content = fs::read_to_string(path).map_err(|e| ConfigError::IoError(e.to_string()))?;
        Self::parse(&content)
    }

    /// Parse and validate configuration from TOML text.
    pub fn parse(content: &str) -> Result<Self, ConfigError> {
        let mut config: Self =
            toml::from_str(content).map_err(|e| ConfigError::ConfigInvalid(e.to_string()))?;

        config.logging.level = config.logging.level.to_lowercase();
        if !LOG_LEVELS.contains(&config.logging.level.as_str()) {
            return Err(ConfigError::ConfigInvalid(format!(
                "unknown log level '{}', expected one of {}",
                config.logging.level,
                LOG_LEVELS.join(", ")
            )));
        }

        Ok(config)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_defaults() {
        let config = Config::default();
        assert_eq!(config.logging.level, "info");
        assert!(config.logging.color);
        assert!(config.output.summary);
    }

    #[test]
    fn test_empty_file_uses_defaults() {
        assert_eq!(Config::parse("").unwrap(), Config::default());
    }

    #[test]
    fn test_partial_sections_fill_defaults() {
        let config = Config::parse("[logging]\nlevel = \"DEBUG\"\n").unwrap();
        assert_eq!(config.logging.level, "debug");
        assert!(config.logging.color);
        assert!(config.output.summary);

        let config = Config::parse("[output]\nsummary = false\n").unwrap();
        assert_eq!(config.logging.level, "info");
        assert!(!config.output.summary);
    }

    #[test]
    fn test_unknown_level_rejected() {
        let result = Config::parse("[logging]\nlevel = \"loud\"\n");
        assert!(matches!(result, Err(ConfigError::ConfigInvalid(_))));
    }

    #[test]
    fn test_invalid_toml_rejected() {
        let result = Config::parse("[logging\nlevel = ");
        assert!(matches!(result, Err(ConfigError::ConfigInvalid(_))));
    }

    #[test]
    fn test_load_explicit_file() {
        let temp_dir = TempDir::new().expect("Failed to create temp directory");
        let path = temp_dir.path().join("config.toml");
        fs::write(&path, "[logging]\ncolor = false\n").unwrap();

        let config = Config::load(Some(&path)).unwrap();
        assert!(!config.logging.color);
    }

    #[test]
    fn test_load_missing_explicit_file() {
        let temp_dir = TempDir::new().expect("Failed to create temp directory");
        let path = temp_dir.path().join("absent.toml");

        let result = Config::load(Some(&path));
        assert!(matches!(result, Err(ConfigError::ConfigNotFound(_))));
    }
}
