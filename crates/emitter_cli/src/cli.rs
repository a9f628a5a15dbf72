//! Command-line interface handling for the emitter driver.
//!
//! Uses the `clap` builder API to parse overrides for the configuration file
//! and the list of events to emit.

use clap::{Arg, ArgAction, ArgMatches, Command};
use std::ffi::OsString;
use std::path::PathBuf;

/// Command line arguments parsed from user input.
#[derive(Debug, Clone)]
pub struct CliArgs {
    /// Path to the configuration file
    pub config_path: PathBuf,
    /// Optional override for log level
    pub log_level: Option<String>,
    /// Whether to force JSON log output
    pub json_logs: bool,
    /// Whether to isolate listener failures instead of propagating them
    pub isolate: bool,
    /// Whether to print the final statistics as JSON
    pub stats_json: bool,
    /// Event names to emit, in order
    pub events: Vec<String>,
}

impl CliArgs {
    /// Parses the process arguments.
    pub fn parse() -> Self {
        Self::from_matches(&command().get_matches())
    }

    /// Parses an explicit argument list, first item being the binary name.
    pub fn try_parse_from<I, T>(args: I) -> Result<Self, clap::Error>
    where
        I: IntoIterator<Item = T>,
        T: Into<OsString> + Clone,
    {
        let matches = command().try_get_matches_from(args)?;
        Ok(Self::from_matches(&matches))
    }

    fn from_matches(matches: &ArgMatches) -> Self {
        Self {
            config_path: matches
                .get_one::<String>("config")
                .map(PathBuf::from)
                .unwrap_or_else(|| PathBuf::from("emitter.toml")),
            log_level: matches.get_one::<String>("log-level").cloned(),
            json_logs: matches.get_flag("json-logs"),
            isolate: matches.get_flag("isolate"),
            stats_json: matches.get_flag("stats-json"),
            events: matches
                .get_many::<String>("events")
                .map(|values| values.cloned().collect())
                .unwrap_or_default(),
        }
    }
}

fn command() -> Command {
    Command::new("emitter")
        .version(env!("CARGO_PKG_VERSION"))
        .about("Emits named events through a typed synchronous emitter")
        .arg(
            Arg::new("config")
                .short('c')
                .long("config")
                .value_name("FILE")
                .help("Configuration file path")
                .default_value("emitter.toml"),
        )
        .arg(
            Arg::new("log-level")
                .short('l')
                .long("log-level")
                .value_name("LEVEL")
                .help("Log level (trace, debug, info, warn, error)"),
        )
        .arg(
            Arg::new("json-logs")
                .long("json-logs")
                .help("Output logs in JSON format")
                .action(ArgAction::SetTrue),
        )
        .arg(
            Arg::new("isolate")
                .long("isolate")
                .help("Keep dispatching when a listener fails")
                .action(ArgAction::SetTrue),
        )
        .arg(
            Arg::new("stats-json")
                .long("stats-json")
                .help("Print emitter statistics as JSON")
                .action(ArgAction::SetTrue),
        )
        .arg(
            Arg::new("events")
                .value_name("EVENT")
                .help("Event names to emit, in order")
                .num_args(0..),
        )
}
