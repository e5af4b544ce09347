//! `tracing` setup for the binary.
//!
//! Logs go to stderr so stdout only ever carries results. `RUST_LOG`, when set,
//! replaces the computed filter entirely.

use std::env;
use std::sync::Once;
use tracing::Level;
use tracing_subscriber::{fmt, layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

static INIT: Once = Once::new();

pub const DEFAULT_LEVEL: Level = Level::WARN;

/// Environment variable consulted when no level is given on the command line.
pub const LEVEL_ENV: &str = "RUNFINDER_LOG_LEVEL";

/// Parse a level name case-insensitively, falling back to [`DEFAULT_LEVEL`].
pub fn parse_level(level_str: &str) -> Level {
    match level_str.to_lowercase().as_str() {
        "trace" => Level::TRACE,
        "debug" => Level::DEBUG,
        "info" => Level::INFO,
        "warn" => Level::WARN,
        "error" => Level::ERROR,
        _ => {
            eprintln!(
                "Invalid log level '{}', defaulting to {}. Valid levels: trace, debug, info, warn, error",
                level_str, DEFAULT_LEVEL
            );
            DEFAULT_LEVEL
        }
    }
}

/// Pick the level from an explicit flag, then `--verbose`, then [`LEVEL_ENV`].
pub fn resolve_level(explicit: Option<&str>, verbose: bool) -> Level {
    if let Some(level_str) = explicit {
        parse_level(level_str)
    } else if verbose {
        Level::DEBUG
    } else {
        env::var(LEVEL_ENV)
            .map(|s| parse_level(&s))
            .unwrap_or(DEFAULT_LEVEL)
    }
}

/// Install the global subscriber. Later calls are no-ops.
pub fn init(level: Level) {
    INIT.call_once(|| {
        let filter = if env::var("RUST_LOG").is_ok() {
            EnvFilter::from_default_env()
        } else {
            EnvFilter::new(format!("runfinder={level}"))
        };

        tracing_subscriber::registry()
            .with(filter)
            .with(fmt::layer().with_target(true).with_writer(std::io::stderr))
            .init();
    });
}
