use thiserror::Error;

pub type Result<T> = std::result::Result<T, Error>;

#[derive(Error, Debug)]
pub enum Error {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("CSV error: {0}")]
    Csv(#[source] csv::Error),

    #[error("Malformed table: row {row} has {actual} fields, expected {expected}")]
    MalformedTable {
        row: usize,
        expected: usize,
        actual: usize,
    },

    #[error("Index out of range: row {row}, column {column} (table is {rows}x{width})")]
    IndexOutOfRange {
        row: usize,
        column: usize,
        rows: usize,
        width: usize,
    },

    #[error("Column out of range: key column {column} but table width is {width}")]
    ColumnOutOfRange { column: usize, width: usize },

    #[error("Unsupported join type: {0} (expected inner, left, right or outer)")]
    UnsupportedJoinType(String),

    #[error("Unsupported algorithm: {0} (expected nested or hash)")]
    UnsupportedAlgorithm(String),

    #[error("Invalid combination: both sides of an output row are absent")]
    InvalidCombination,

    #[error("Configuration error: {0}")]
    Config(String),
}

impl Error {
    pub fn error_code(&self) -> i32 {
        match self {
            Error::Io(_) => -1,
            Error::Csv(_) => -2,
            Error::MalformedTable { .. } => -3,
            Error::IndexOutOfRange { .. } => -4,
            Error::ColumnOutOfRange { .. } => -5,
            Error::UnsupportedJoinType(_) => -6,
            Error::UnsupportedAlgorithm(_) => -7,
            Error::Config(_) => -8,
            Error::InvalidCombination => -99,
        }
    }
}

/// Reader and writer failures surface as `Io`, whichever layer reported them.
impl From<csv::Error> for Error {
    fn from(err: csv::Error) -> Self {
        if let csv::ErrorKind::Io(io) = err.kind() {
            return Error::Io(std::io::Error::new(io.kind(), io.to_string()));
        }
        Error::Csv(err)
    }
}
