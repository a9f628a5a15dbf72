//! Configuration management for the emitter driver.
//!
//! This module handles loading, validation, and CLI overrides of the TOML
//! configuration file.

use crate::cli::CliArgs;
use crate::error::ConfigError;
use event_emitter::{EmitterConfig, FailurePolicy};
use serde::{Deserialize, Serialize};
use std::path::Path;
use tracing::info;

/// Application configuration loaded from TOML file.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct AppConfig {
    /// Emitter runtime settings
    #[serde(default)]
    pub emitter: EmitterConfig,
    /// Logging configuration settings
    #[serde(default)]
    pub logging: LoggingSettings,
}

/// Logging system configuration.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LoggingSettings {
    /// Log level filter (trace, debug, info, warn, error)
    pub level: String,
    /// Whether to output logs in JSON format
    #[serde(default)]
    pub json_format: bool,
}

impl Default for LoggingSettings {
    fn default() -> Self {
        Self {
            level: "info".to_string(),
            json_format: false,
        }
    }
}

impl AppConfig {
    /// Loads configuration from a TOML file.
    ///
    /// If the file doesn't exist, writes the default configuration to `path`
    /// and returns it.
    pub fn load_from_file(path: &Path) -> Result<Self, ConfigError> {
        let io_error = |source: std::io::Error| ConfigError::Io {
            path: path.to_path_buf(),
            source,
        };

        if path.exists() {
            let content = std::fs::read_to_string(path).map_err(io_error)?;
            let config: AppConfig = toml::from_str(&content)?;
            Ok(config)
        } else {
            let default_config = AppConfig::default();
            let toml_content = toml::to_string_pretty(&default_config)?;
            std::fs::write(path, toml_content).map_err(io_error)?;
            info!("Created default configuration file: {}", path.display());
            Ok(default_config)
        }
    }

    /// Applies command-line overrides on top of the file settings.
    pub fn apply_cli_overrides(&mut self, args: &CliArgs) {
        if let Some(level) = &args.log_level {
            self.logging.level = level.clone();
        }
        if args.json_logs {
            self.logging.json_format = true;
        }
        if args.isolate {
            self.emitter.failure_policy = FailurePolicy::Isolate;
        }
    }

    /// Validates the configuration values.
    pub fn validate(&self) -> Result<(), ConfigError> {
        let valid_levels = ["trace", "debug", "info", "warn", "error"];
        if !valid_levels.contains(&self.logging.level.as_str()) {
            return Err(ConfigError::Invalid(format!(
                "Invalid log level: {}. Must be one of: {valid_levels:?}",
                &self.logging.level
            )));
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::path::PathBuf;

    fn args() -> CliArgs {
        CliArgs {
            config_path: PathBuf::from("emitter.toml"),
            log_level: None,
            json_logs: false,
            isolate: false,
            stats_json: false,
            events: vec![],
        }
    }

    #[test]
    fn test_default_config_is_valid() {
        let config = AppConfig::default();
        assert!(config.validate().is_ok());
        assert_eq!(config.emitter.failure_policy, FailurePolicy::Propagate);
        assert_eq!(config.logging.level, "info");
    }

    #[test]
    fn test_invalid_log_level_rejected() {
        let mut config = AppConfig::default();
        config.logging.level = "loud".to_string();
        assert!(matches!(config.validate(), Err(ConfigError::Invalid(_))));
    }

    #[test]
    fn test_missing_file_is_created_with_defaults() {
        let dir = tempfile::tempdir().expect("Failed to create temp dir");
        let path = dir.path().join("emitter.toml");

        let config = AppConfig::load_from_file(&path).expect("Default config should load");

        assert_eq!(config, AppConfig::default());
        assert!(path.exists());

        let reloaded = AppConfig::load_from_file(&path).expect("Written config should reload");
        assert_eq!(reloaded, config);
    }

    #[test]
    fn test_partial_file_uses_defaults() {
        let dir = tempfile::tempdir().expect("Failed to create temp dir");
        let path = dir.path().join("emitter.toml");
        std::fs::write(&path, "[emitter]\nfailure_policy = \"isolate\"\n").unwrap();

        let config = AppConfig::load_from_file(&path).unwrap();

        assert_eq!(config.emitter.failure_policy, FailurePolicy::Isolate);
        assert!(!config.emitter.trace_dispatch);
        assert_eq!(config.logging, LoggingSettings::default());
    }

    #[test]
    fn test_malformed_file_is_parse_error() {
        let dir = tempfile::tempdir().expect("Failed to create temp dir");
        let path = dir.path().join("emitter.toml");
        std::fs::write(&path, "[emitter\nfailure_policy = 3").unwrap();

        assert!(matches!(
            AppConfig::load_from_file(&path),
            Err(ConfigError::Parse(_))
        ));
    }

    #[test]
    fn test_cli_overrides() {
        let mut config = AppConfig::default();
        let mut overrides = args();
        overrides.log_level = Some("debug".to_string());
        overrides.json_logs = true;
        overrides.isolate = true;

        config.apply_cli_overrides(&overrides);

        assert_eq!(config.logging.level, "debug");
        assert!(config.logging.json_format);
        assert_eq!(config.emitter.failure_policy, FailurePolicy::Isolate);
    }
}
