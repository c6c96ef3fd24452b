//! Diagnostic logging setup.
//!
//! The library only emits `tracing` events; installing a subscriber is left
//! to the binary. Logs go to stderr so they never mix with joined rows on
//! stdout.

use serde::{Deserialize, Serialize};
use std::io;
use std::str::FromStr;
use tracing::Level;
use tracing_subscriber::{fmt, prelude::*, EnvFilter, Registry};

/// Log line format.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum LogFormat {
    #[default]
    Text,
    Json,
}

impl FromStr for LogFormat {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "text" => Ok(LogFormat::Text),
            "json" => Ok(LogFormat::Json),
            _ => Err(format!("Invalid log format: {}. Use 'text' or 'json'.", s)),
        }
    }
}

/// Map a `-v` count onto a level, starting from `base`.
pub fn level_for_verbosity(base: Level, verbosity: u8) -> Level {
    let ladder = [Level::ERROR, Level::WARN, Level::INFO, Level::DEBUG, Level::TRACE];
    let start = ladder.iter().position(|l| *l == base).unwrap_or(1);
    ladder[(start + verbosity as usize).min(ladder.len() - 1)]
}

/// Install the global subscriber. `RUST_LOG` takes precedence over `level`.
pub fn init_logging(level: Level, format: LogFormat) {
    let env_filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(format!("csv_join={},warn", level)));

    match format {
        LogFormat::Json => {
            let fmt_layer = fmt::layer()
                .json()
                .with_writer(io::stderr)
                .with_target(true)
                .with_file(true)
                .with_line_number(true);

            Registry::default().with(env_filter).with(fmt_layer).init();
        }
        LogFormat::Text => {
            let fmt_layer = fmt::layer()
                .with_writer(io::stderr)
                .with_target(true)
                .with_line_number(true);

            Registry::default().with(env_filter).with(fmt_layer).init();
        }
    }
}
