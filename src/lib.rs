//! Relational joins over CSV tables.
//!
//! Two tables are joined on one key column each, with inner, left, right or
//! full outer semantics, by either a nested-loop scan or a hash index. Both
//! algorithms produce the same rows in the same order.
//!
//! ```
//! use csv_join::{join, JoinAlgorithm, JoinType, Table};
//!
//! let left = Table::load(vec![
//!     vec!["1".to_string(), "Alice".to_string()],
//!     vec!["3".to_string(), "Charlie".to_string()],
//! ])?;
//! let right = Table::load(vec![vec!["1".to_string(), "25".to_string()]])?;
//!
//! let rows = join(&left, 0, &right, 0, JoinType::Left, JoinAlgorithm::Hash)?;
//! assert_eq!(rows[0], ["1", "Alice", "1", "25"]);
//! assert_eq!(rows[1], ["3", "Charlie", "", ""]);
//! # Ok::<(), csv_join::Error>(())
//! ```

pub mod combine;
pub mod config;
pub mod csv_io;
pub mod error;
pub mod index;
pub mod join;
pub mod logging;
pub mod table;

pub use combine::{combine, OutputRow};
pub use config::{CsvOptions, EngineConfig};
pub use error::{Error, Result};
pub use index::KeyIndex;
pub use join::{join, JoinAlgorithm, JoinExecutor, JoinResult, JoinStats, JoinType};
pub use table::{Row, Table};
