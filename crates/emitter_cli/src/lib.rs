//! # Emitter Driver
//!
//! Command-line front end for the `event_emitter` crate. Loads a TOML
//! configuration, initializes logging, registers a few listeners and emits
//! the events named on the command line.
//!
//! ```bash
//! # Emit three events with the default configuration
//! emitter start tick stop
//!
//! # Keep going when a listener fails and print stats as JSON
//! emitter --isolate --stats-json start fail stop
//! ```

use tracing::{error, info};

pub mod app;
pub mod cli;
pub mod config;
pub mod error;
pub mod logging;

use app::Application;
use cli::CliArgs;
use config::AppConfig;
use error::AppError;

/// Runs the driver end to end: CLI parsing, configuration, logging, dispatch.
pub fn init() -> Result<(), AppError> {
    let args = CliArgs::parse();

    let mut config = AppConfig::load_from_file(&args.config_path)?;
    config.apply_cli_overrides(&args);
    config.validate()?;

    logging::setup_logging(&config.logging)?;
    info!(
        "Emitter driver v{} starting with failure policy '{}'",
        env!("CARGO_PKG_VERSION"),
        config.emitter.failure_policy.as_str()
    );

    let app = Application::new(&config, &args.events);
    let summary = match app.run(&args.events) {
        Ok(summary) => summary,
        Err(e) => {
            error!("Dispatch aborted: {e}");
            return Err(e);
        }
    };

    if args.stats_json {
        println!("{}", serde_json::to_string_pretty(&summary.stats)?);
    } else {
        info!(
            "Emitted {} events, {} listener calls, {} failures",
            summary.stats.events_emitted,
            summary.stats.listeners_invoked,
            summary.stats.listener_failures
        );
    }

    Ok(())
}
