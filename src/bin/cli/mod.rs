//! csv-join command line
//!
//! ```text
//! csv-join <left_file> <left_column> <right_file> <right_column> <join_type> [algorithm]
//! ```
//!
//! Columns are zero-based. The joined table is written to stdout as CSV
//! without a header; diagnostics and logs go to stderr.

pub mod error;

use clap::{value_parser, Arg, ArgAction, ArgMatches, Command};
use csv_join::logging::{self, LogFormat};
use csv_join::{csv_io, EngineConfig, JoinAlgorithm, JoinExecutor, JoinType};
use std::io::{self, BufWriter, Write};
use std::path::Path;

use error::{with_path, CliError};

pub type CliResult<T> = Result<T, CliError>;

/// Build the CLI command structure
pub fn build_cli() -> Command {
    Command::new("csv-join")
        .about("Join two CSV files on a key column")
        .version(env!("CARGO_PKG_VERSION"))
        .arg(
            Arg::new("left_file")
                .help("Left input CSV file")
                .required(true)
                .index(1),
        )
        .arg(
            Arg::new("left_column")
                .help("Zero-based key column of the left file")
                .required(true)
                .value_parser(value_parser!(usize))
                .index(2),
        )
        .arg(
            Arg::new("right_file")
                .help("Right input CSV file")
                .required(true)
                .index(3),
        )
        .arg(
            Arg::new("right_column")
                .help("Zero-based key column of the right file")
                .required(true)
                .value_parser(value_parser!(usize))
                .index(4),
        )
        .arg(
            Arg::new("join_type")
                .help("Join type: inner, left, right or outer")
                .required(true)
                .index(5),
        )
        .arg(
            Arg::new("algorithm")
                .help("Join algorithm: nested or hash (default: hash, or the configured default)")
                .index(6),
        )
        .arg(
            Arg::new("config")
                .help("JSON configuration file")
                .long("config")
                .short('c'),
        )
        .arg(
            Arg::new("verbose")
                .help("Increase log verbosity (repeatable)")
                .long("verbose")
                .short('v')
                .action(ArgAction::Count),
        )
        .arg(
            Arg::new("log_format")
                .help("Log format on stderr")
                .long("log-format")
                .value_parser(["text", "json"]),
        )
}

/// Validated invocation.
#[derive(Debug, Clone)]
pub struct JoinArgs {
    pub left_file: String,
    pub left_column: usize,
    pub right_file: String,
    pub right_column: usize,
    pub join_type: JoinType,
    pub algorithm: JoinAlgorithm,
}

impl JoinArgs {
    /// Extract and validate positional arguments. Join type and algorithm are
    /// checked here, before any file is opened.
    pub fn from_matches(matches: &ArgMatches, config: &EngineConfig) -> CliResult<Self> {
        let left_file = required::<String>(matches, "left_file")?.clone();
        let left_column = *required::<usize>(matches, "left_column")?;
        let right_file = required::<String>(matches, "right_file")?.clone();
        let right_column = *required::<usize>(matches, "right_column")?;

        let join_type = required::<String>(matches, "join_type")?.parse::<JoinType>()?;
        let algorithm = match matches.get_one::<String>("algorithm") {
            Some(value) => value.parse::<JoinAlgorithm>()?,
            None => config.default_algorithm,
        };

        Ok(Self {
            left_file,
            left_column,
            right_file,
            right_column,
            join_type,
            algorithm,
        })
    }
}

fn required<'a, T: Clone + Send + Sync + 'static>(
    matches: &'a ArgMatches,
    name: &str,
) -> CliResult<&'a T> {
    matches
        .get_one::<T>(name)
        .ok_or_else(|| CliError::Usage(format!("{} argument is required", name)))
}

/// Load the configuration file if one was given, defaults otherwise.
pub fn load_config(matches: &ArgMatches) -> CliResult<EngineConfig> {
    match matches.get_one::<String>("config") {
        Some(path) => EngineConfig::from_file(Path::new(path)).map_err(|err| match err {
            csv_join::Error::Io(e) => CliError::Config(format!("{}: {}", path, e)),
            other => other.into(),
        }),
        None => Ok(EngineConfig::default()),
    }
}

/// Install logging from configuration, `-v` flags and `--log-format`.
pub fn init_logging(matches: &ArgMatches, config: &EngineConfig) -> CliResult<()> {
    let base = config.logging.level()?;
    let level = logging::level_for_verbosity(base, matches.get_count("verbose"));
    let format = match matches.get_one::<String>("log_format") {
        Some(value) => value.parse::<LogFormat>().map_err(CliError::Usage)?,
        None => config.logging.format,
    };
    logging::init_logging(level, format);
    Ok(())
}

/// Run one join and write the result to `out`.
pub fn run_join<W: Write>(args: &JoinArgs, config: &EngineConfig, out: W) -> CliResult<()> {
    let left = csv_io::read_table(Path::new(&args.left_file), &config.csv)
        .map_err(|e| with_path(e, &args.left_file))?;
    let right = csv_io::read_table(Path::new(&args.right_file), &config.csv)
        .map_err(|e| with_path(e, &args.right_file))?;

    left.check_column(args.left_column)
        .map_err(|e| with_path(e, &args.left_file))?;
    right
        .check_column(args.right_column)
        .map_err(|e| with_path(e, &args.right_file))?;

    let result = JoinExecutor::new(args.join_type, args.algorithm).execute(
        &left,
        args.left_column,
        &right,
        args.right_column,
    )?;

    tracing::info!(
        join_type = %args.join_type,
        algorithm = %args.algorithm,
        rows = result.rows.len(),
        duration_us = result.stats.execution_time_us,
        "Join finished"
    );
    if let Ok(stats) = serde_json::to_string(&result.stats) {
        tracing::debug!(%stats, "Join statistics");
    }

    csv_io::write_rows(out, &result.rows, &config.csv)?;
    Ok(())
}

/// Parse, configure, join, and write to stdout.
pub fn run(matches: &ArgMatches) -> CliResult<()> {
    let config = load_config(matches)?;
    let args = JoinArgs::from_matches(matches, &config)?;
    init_logging(matches, &config)?;

    let stdout = io::stdout();
    let mut out = BufWriter::new(stdout.lock());
    run_join(&args, &config, &mut out)?;
    out.flush().map_err(|e| CliError::Io(e.to_string()))?;
    Ok(())
}
