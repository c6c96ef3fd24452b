//! Engine configuration
//!
//! Settings that are not part of a single invocation's positional arguments:
//! the default algorithm, the CSV dialect and logging. Loaded from an
//! optional JSON file; every field has a default so partial files are fine.

use crate::join::JoinAlgorithm;
use crate::logging::LogFormat;
use crate::{Error, Result};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;
use tracing::Level;

/// CSV dialect used for both reading and writing.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct CsvOptions {
    pub delimiter: char,
    pub quote: char,
}

impl Default for CsvOptions {
    fn default() -> Self {
        Self {
            delimiter: ',',
            quote: '"',
        }
    }
}

impl CsvOptions {
    pub fn delimiter_byte(&self) -> u8 {
        self.delimiter as u8
    }

    pub fn quote_byte(&self) -> u8 {
        self.quote as u8
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct LogSettings {
    /// One of error, warn, info, debug, trace
    pub level: String,
    pub format: LogFormat,
}

impl Default for LogSettings {
    fn default() -> Self {
        Self {
            level: "warn".to_string(),
            format: LogFormat::Text,
        }
    }
}

impl LogSettings {
    pub fn level(&self) -> Result<Level> {
        self.level
            .parse::<Level>()
            .map_err(|_| Error::Config(format!("Invalid log level: {}", self.level)))
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct EngineConfig {
    /// Algorithm used when none is given on the command line
    pub default_algorithm: JoinAlgorithm,
    pub csv: CsvOptions,
    pub logging: LogSettings,
}

impl EngineConfig {
    /// Read and validate a JSON configuration file.
    pub fn from_file(path: &Path) -> Result<Self> {
        let content = fs::read_to_string(path)?;
        let config: EngineConfig = serde_json::from_str(&content)
            .map_err(|e| Error::Config(format!("{}: {}", path.display(), e)))?;
        config.validate()?;
        Ok(config)
    }

    pub fn validate(&self) -> Result<()> {
        let CsvOptions { delimiter, quote } = self.csv;
        if !delimiter.is_ascii() || !quote.is_ascii() {
            return Err(Error::Config(
                "CSV delimiter and quote must be ASCII characters".to_string(),
            ));
        }
        if delimiter == quote {
            return Err(Error::Config(format!(
                "CSV delimiter and quote must differ (both are {:?})",
                delimiter
            )));
        }
        if matches!(delimiter, '\n' | '\r') || matches!(quote, '\n' | '\r') {
            return Err(Error::Config(
                "CSV delimiter and quote cannot be line terminators".to_string(),
            ));
        }
        self.logging.level()?;
        Ok(())
    }
}
