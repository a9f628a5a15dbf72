//! Error types for the emitter command-line driver.

use event_emitter::EmitterError;
use std::path::PathBuf;

/// Failures while loading or validating the configuration file.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    /// The configuration file could not be read or written
    #[error("Config file error at {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// The file is not valid TOML for [`AppConfig`](crate::config::AppConfig)
    #[error("Config parse error: {0}")]
    Parse(#[from] toml::de::Error),

    /// The default configuration could not be rendered as TOML
    #[error("Config serialization error: {0}")]
    Serialize(#[from] toml::ser::Error),

    /// The configuration parsed but holds an unusable value
    #[error("Invalid config: {0}")]
    Invalid(String),
}

/// Top-level application errors.
#[derive(Debug, thiserror::Error)]
pub enum AppError {
    #[error(transparent)]
    Config(#[from] ConfigError),

    #[error("Logging setup failed: {0}")]
    Logging(String),

    #[error(transparent)]
    Emit(#[from] EmitterError),

    #[error("Stats serialization error: {0}")]
    Stats(#[from] serde_json::Error),
}
