//! CLI error handling
//!
//! Maps engine errors onto user-facing messages and process exit codes.

use std::fmt;

/// Process exit codes by error category
pub mod exit_codes {
    /// Bad positional values (join type, algorithm)
    pub const USAGE_ERROR: i32 = 2;
    /// Configuration file missing or invalid
    pub const CONFIG_ERROR: i32 = 3;
    /// Input tables unusable for the requested join
    pub const INPUT_ERROR: i32 = 5;
    pub const IO_ERROR: i32 = 7;
    /// Engine invariant violated
    pub const INTERNAL_ERROR: i32 = 99;
}

#[derive(Debug)]
pub enum CliError {
    Usage(String),
    Config(String),
    Input(String),
    Io(String),
    Internal(String),
}

impl CliError {
    pub fn exit_code(&self) -> i32 {
        match self {
            CliError::Usage(_) => exit_codes::USAGE_ERROR,
            CliError::Config(_) => exit_codes::CONFIG_ERROR,
            CliError::Input(_) => exit_codes::INPUT_ERROR,
            CliError::Io(_) => exit_codes::IO_ERROR,
            CliError::Internal(_) => exit_codes::INTERNAL_ERROR,
        }
    }

    /// Short category name for logging
    pub fn category(&self) -> &'static str {
        match self {
            CliError::Usage(_) => "USAGE",
            CliError::Config(_) => "CONFIG",
            CliError::Input(_) => "INPUT",
            CliError::Io(_) => "IO",
            CliError::Internal(_) => "INTERNAL",
        }
    }
}

impl fmt::Display for CliError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CliError::Usage(msg) => write!(f, "{}", msg),
            CliError::Config(msg) => write!(f, "{}", msg),
            CliError::Input(msg) => write!(f, "{}", msg),
            CliError::Io(msg) => write!(f, "{}", msg),
            CliError::Internal(msg) => write!(f, "{} (this is a bug)", msg),
        }
    }
}

impl std::error::Error for CliError {}

impl From<csv_join::Error> for CliError {
    fn from(err: csv_join::Error) -> Self {
        use csv_join::Error;

        let msg = err.to_string();
        tracing::debug!(error_code = err.error_code(), "Engine error: {}", msg);
        match err {
            Error::UnsupportedJoinType(_) | Error::UnsupportedAlgorithm(_) => CliError::Usage(msg),
            Error::Config(_) => CliError::Config(msg),
            Error::MalformedTable { .. }
            | Error::ColumnOutOfRange { .. }
            | Error::IndexOutOfRange { .. }
            | Error::Csv(_) => CliError::Input(msg),
            Error::Io(_) => CliError::Io(msg),
            Error::InvalidCombination => CliError::Internal(msg),
        }
    }
}

/// Attach the offending path to an engine error raised while handling a file.
pub fn with_path(err: csv_join::Error, path: &str) -> CliError {
    match CliError::from(err) {
        CliError::Input(msg) => CliError::Input(format!("{}: {}", path, msg)),
        CliError::Io(msg) => CliError::Io(format!("{}: {}", path, msg)),
        other => other,
    }
}
