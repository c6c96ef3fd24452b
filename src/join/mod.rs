//! Join Executor
//!
//! Runs one of the four join policies over two tables using either a
//! nested-loop scan or a hash index on the probed side. The policy code is
//! shared by both algorithms; only the [`MatchFinder`] differs, and both
//! finders report matches in probed-table row order, so the output of the
//! two algorithms is identical row for row.

pub mod match_set;
pub mod matcher;

pub use match_set::MatchSet;
pub use matcher::{HashMatcher, MatchFinder, NestedLoopMatcher};

use crate::combine::{combine, OutputRow};
use crate::table::{Row, Table};
use crate::{Error, Result};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use std::time::Instant;

/// Join semantics.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum JoinType {
    Inner,
    Left,
    Right,
    /// Full outer join.
    Outer,
}

impl JoinType {
    /// Whether rows are driven from the right table.
    pub fn right_is_primary(self) -> bool {
        self == JoinType::Right
    }

    /// Whether an unmatched primary row is still emitted, padded.
    fn keeps_unmatched_primary(self) -> bool {
        self != JoinType::Inner
    }

    fn as_str(self) -> &'static str {
        match self {
            JoinType::Inner => "inner",
            JoinType::Left => "left",
            JoinType::Right => "right",
            JoinType::Outer => "outer",
        }
    }
}

impl FromStr for JoinType {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        match s {
            "inner" => Ok(JoinType::Inner),
            "left" => Ok(JoinType::Left),
            "right" => Ok(JoinType::Right),
            "outer" => Ok(JoinType::Outer),
            other => Err(Error::UnsupportedJoinType(other.to_string())),
        }
    }
}

impl fmt::Display for JoinType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Mechanism used to find matching rows.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum JoinAlgorithm {
    /// Compare every primary row against every probed row.
    Nested,
    /// Index the probed side once, then look up each primary key.
    #[default]
    Hash,
}

impl JoinAlgorithm {
    fn as_str(self) -> &'static str {
        match self {
            JoinAlgorithm::Nested => "nested",
            JoinAlgorithm::Hash => "hash",
        }
    }
}

impl FromStr for JoinAlgorithm {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        match s {
            "nested" => Ok(JoinAlgorithm::Nested),
            "hash" => Ok(JoinAlgorithm::Hash),
            other => Err(Error::UnsupportedAlgorithm(other.to_string())),
        }
    }
}

impl fmt::Display for JoinAlgorithm {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Counters collected during one join call.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct JoinStats {
    /// Rows of the primary table iterated
    pub primary_rows: u64,
    /// Key comparisons (nested) or index lookups (hash)
    pub key_comparisons: u64,
    /// Output rows combining a primary and a probed row
    pub matched_pairs: u64,
    /// Unmatched primary rows emitted with padding
    pub padded_rows: u64,
    /// Unmatched probed rows appended by an outer join
    pub remainder_rows: u64,
    /// Distinct keys in the probe index, hash algorithm only
    pub index_keys: Option<usize>,
    /// Wall time of the call in microseconds
    pub execution_time_us: u64,
}

impl JoinStats {
    pub fn rows_emitted(&self) -> u64 {
        self.matched_pairs + self.padded_rows + self.remainder_rows
    }
}

/// Rows produced by a join, plus the counters gathered while producing them.
#[derive(Debug, Clone)]
pub struct JoinResult {
    pub rows: Vec<OutputRow>,
    pub stats: JoinStats,
}

/// Executes joins for a fixed type and algorithm.
#[derive(Debug, Clone, Copy)]
pub struct JoinExecutor {
    join_type: JoinType,
    algorithm: JoinAlgorithm,
}

/// Which table drives emission and which is probed, with their key columns.
struct Sides<'a> {
    primary: &'a Table,
    primary_key: usize,
    probed: &'a Table,
    probed_key: usize,
    right_is_primary: bool,
    left_width: usize,
    right_width: usize,
}

impl Sides<'_> {
    /// Output row with columns restored to left-then-right order.
    fn emit(&self, primary: Option<&Row>, probed: Option<&Row>) -> Result<OutputRow> {
        if self.right_is_primary {
            combine(probed, primary, self.left_width, self.right_width)
        } else {
            combine(primary, probed, self.left_width, self.right_width)
        }
    }
}

impl JoinExecutor {
    pub fn new(join_type: JoinType, algorithm: JoinAlgorithm) -> Self {
        Self {
            join_type,
            algorithm,
        }
    }

    /// Join `left` and `right` on the given key columns.
    pub fn execute(
        &self,
        left: &Table,
        left_key: usize,
        right: &Table,
        right_key: usize,
    ) -> Result<JoinResult> {
        left.check_column(left_key)?;
        right.check_column(right_key)?;

        let right_is_primary = self.join_type.right_is_primary();
        let sides = if right_is_primary {
            Sides {
                primary: right,
                primary_key: right_key,
                probed: left,
                probed_key: left_key,
                right_is_primary,
                left_width: left.width(),
                right_width: right.width(),
            }
        } else {
            Sides {
                primary: left,
                primary_key: left_key,
                probed: right,
                probed_key: right_key,
                right_is_primary,
                left_width: left.width(),
                right_width: right.width(),
            }
        };

        tracing::debug!(
            join_type = %self.join_type,
            algorithm = %self.algorithm,
            left_rows = left.row_count(),
            right_rows = right.row_count(),
            "Join started"
        );

        let start = Instant::now();
        let mut result = match self.algorithm {
            JoinAlgorithm::Nested => {
                let finder = NestedLoopMatcher::new(sides.probed, sides.probed_key)?;
                self.run(&sides, &finder)?
            }
            JoinAlgorithm::Hash => {
                let finder = HashMatcher::build(sides.probed, sides.probed_key)?;
                self.run(&sides, &finder)?
            }
        };
        result.stats.execution_time_us = start.elapsed().as_micros() as u64;

        tracing::debug!(
            join_type = %self.join_type,
            algorithm = %self.algorithm,
            rows_emitted = result.stats.rows_emitted(),
            matched_pairs = result.stats.matched_pairs,
            padded_rows = result.stats.padded_rows,
            remainder_rows = result.stats.remainder_rows,
            key_comparisons = result.stats.key_comparisons,
            duration_us = result.stats.execution_time_us,
            "Join completed"
        );

        Ok(result)
    }

    /// Primary pass followed, for outer joins, by the remainder pass.
    fn run<F: MatchFinder>(&self, sides: &Sides<'_>, finder: &F) -> Result<JoinResult> {
        let mut stats = JoinStats {
            index_keys: finder.distinct_keys(),
            ..JoinStats::default()
        };
        let mut rows = Vec::with_capacity(sides.primary.row_count());
        let mut match_set =
            (self.join_type == JoinType::Outer).then(|| MatchSet::new(sides.probed.row_count()));
        let mut matches = Vec::new();
        let probed_rows = sides.probed.rows();

        for (position, primary_row) in sides.primary.rows().iter().enumerate() {
            stats.primary_rows += 1;
            matches.clear();
            stats.key_comparisons +=
                finder.find_matches(sides.primary.key(position, sides.primary_key), &mut matches);

            if matches.is_empty() {
                if self.join_type.keeps_unmatched_primary() {
                    rows.push(sides.emit(Some(primary_row), None)?);
                    stats.padded_rows += 1;
                }
                continue;
            }

            for &probed_position in &matches {
                if let Some(set) = match_set.as_mut() {
                    set.insert(probed_position);
                }
                rows.push(sides.emit(Some(primary_row), Some(&probed_rows[probed_position]))?);
                stats.matched_pairs += 1;
            }
        }

        if let Some(set) = match_set {
            for probed_position in set.unmatched() {
                rows.push(sides.emit(None, Some(&probed_rows[probed_position]))?);
                stats.remainder_rows += 1;
            }
        }

        Ok(JoinResult { rows, stats })
    }
}

/// Join two tables and return only the output rows.
pub fn join(
    left: &Table,
    left_key: usize,
    right: &Table,
    right_key: usize,
    join_type: JoinType,
    algorithm: JoinAlgorithm,
) -> Result<Vec<OutputRow>> {
    JoinExecutor::new(join_type, algorithm)
        .execute(left, left_key, right, right_key)
        .map(|result| result.rows)
}
