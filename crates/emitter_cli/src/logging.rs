//! Logging system setup and configuration.
//!
//! Initializes `tracing-subscriber` with human-readable or JSON output.

use crate::config::LoggingSettings;
use crate::error::AppError;
use tracing::info;
use tracing_subscriber::{fmt, layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

/// Initializes the logging system with the specified configuration.
///
/// `RUST_LOG` takes precedence over the configured level when set.
pub fn setup_logging(config: &LoggingSettings) -> Result<(), AppError> {
    let log_level = config.level.as_str();
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(log_level));

    let registry = tracing_subscriber::registry().with(filter);

    let result = if config.json_format {
        registry
            .with(fmt::layer().json().with_file(false).with_line_number(false).with_thread_names(true))
            .try_init()
    } else {
        registry
            .with(fmt::layer().with_ansi(true).with_file(false).with_line_number(false))
            .try_init()
    };
    result.map_err(|e| AppError::Logging(e.to_string()))?;

    info!("Logging initialized with level: {}", log_level);
    Ok(())
}
