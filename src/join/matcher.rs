//! Match finders
//!
//! Both finders answer the same question, "which rows of the probed table
//! carry this key", and both answer it in probed-table row order. The
//! executor drives the join policy through this trait only, so the two
//! algorithms cannot diverge in what they emit.

use crate::index::KeyIndex;
use crate::table::Table;
use crate::Result;

pub trait MatchFinder {
    /// Append the positions of rows whose key equals `key` to `out`, in row
    /// order, and return the number of key comparisons or index probes spent.
    fn find_matches(&self, key: &str, out: &mut Vec<usize>) -> u64;

    /// Distinct keys held by the finder, when it keeps an index.
    fn distinct_keys(&self) -> Option<usize> {
        None
    }
}

/// Linear scan over the probed table for every probe.
#[derive(Debug)]
pub struct NestedLoopMatcher<'a> {
    table: &'a Table,
    key_column: usize,
}

impl<'a> NestedLoopMatcher<'a> {
    pub fn new(table: &'a Table, key_column: usize) -> Result<Self> {
        table.check_column(key_column)?;
        Ok(Self { table, key_column })
    }
}

impl MatchFinder for NestedLoopMatcher<'_> {
    fn find_matches(&self, key: &str, out: &mut Vec<usize>) -> u64 {
        out.extend(
            (0..self.table.row_count()).filter(|&row| self.table.key(row, self.key_column) == key),
        );
        self.table.row_count() as u64
    }
}

/// Key index built once over the probed table.
#[derive(Debug)]
pub struct HashMatcher<'a> {
    index: KeyIndex<'a>,
}

impl<'a> HashMatcher<'a> {
    pub fn build(table: &'a Table, key_column: usize) -> Result<Self> {
        Ok(Self {
            index: KeyIndex::build(table, key_column)?,
        })
    }
}

impl MatchFinder for HashMatcher<'_> {
    fn find_matches(&self, key: &str, out: &mut Vec<usize>) -> u64 {
        out.extend_from_slice(self.index.lookup(key));
        1
    }

    fn distinct_keys(&self) -> Option<usize> {
        Some(self.index.key_count())
    }
}
