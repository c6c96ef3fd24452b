//! Row Store
//!
//! An immutable, fixed-width table of string fields. The width is fixed by
//! the first row loaded; every later row must match it so that padding for
//! an absent side can always be sized without inspecting a row.

use crate::{Error, Result};

/// One row: ordered field strings.
pub type Row = Vec<String>;

/// Fixed-width, read-only table.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Table {
    rows: Vec<Row>,
    width: usize,
}

impl Table {
    /// Load rows into a table, rejecting ragged input.
    pub fn load(rows: Vec<Row>) -> Result<Self> {
        let width = rows.first().map_or(0, Vec::len);

        if let Some((row, actual)) = rows
            .iter()
            .map(Vec::len)
            .enumerate()
            .find(|&(_, len)| len != width)
        {
            return Err(Error::MalformedTable {
                row,
                expected: width,
                actual,
            });
        }

        Ok(Self { rows, width })
    }

    /// Number of fields in every row.
    pub fn width(&self) -> usize {
        self.width
    }

    pub fn row_count(&self) -> usize {
        self.rows.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    /// Field at `(row, column)`.
    pub fn field(&self, row: usize, column: usize) -> Result<&str> {
        self.rows
            .get(row)
            .and_then(|r| r.get(column))
            .map(String::as_str)
            .ok_or(Error::IndexOutOfRange {
                row,
                column,
                rows: self.rows.len(),
                width: self.width,
            })
    }

    pub fn rows(&self) -> &[Row] {
        &self.rows
    }

    /// Fails with `ColumnOutOfRange` unless `column` addresses a field of this table.
    pub fn check_column(&self, column: usize) -> Result<()> {
        if column >= self.width {
            return Err(Error::ColumnOutOfRange {
                column,
                width: self.width,
            });
        }
        Ok(())
    }

    /// Key field of `row`. Callers validate `column` once with `check_column`.
    pub(crate) fn key(&self, row: usize, column: usize) -> &str {
        &self.rows[row][column]
    }
}
