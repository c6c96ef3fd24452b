//! Key Index
//!
//! Ordered multimap from key string to the positions of the rows carrying it.
//! Positions for a key are kept in table order, which is what lets the hash
//! algorithm enumerate matches in the same order as a linear scan.

use crate::table::Table;
use crate::Result;
use smallvec::SmallVec;
use std::collections::HashMap;

/// Row positions sharing one key. Most keys are unique, so one slot is inline.
pub type Positions = SmallVec<[usize; 1]>;

#[derive(Debug, Default)]
pub struct KeyIndex<'a> {
    entries: HashMap<&'a str, Positions>,
    indexed_rows: usize,
}

impl<'a> KeyIndex<'a> {
    /// Index `table` on `key_column`, one pass in row order.
    pub fn build(table: &'a Table, key_column: usize) -> Result<Self> {
        table.check_column(key_column)?;

        let mut entries: HashMap<&'a str, Positions> = HashMap::with_capacity(table.row_count());
        for (position, row) in table.rows().iter().enumerate() {
            entries
                .entry(row[key_column].as_str())
                .or_default()
                .push(position);
        }

        tracing::debug!(
            rows = table.row_count(),
            distinct_keys = entries.len(),
            key_column,
            "Key index built"
        );

        Ok(Self {
            entries,
            indexed_rows: table.row_count(),
        })
    }

    /// Positions carrying `key`, in table order. Empty when the key is absent.
    pub fn lookup(&self, key: &str) -> &[usize] {
        self.entries
            .get(key)
            .map(|positions| positions.as_slice())
            .unwrap_or(&[])
    }

    pub fn contains(&self, key: &str) -> bool {
        self.entries.contains_key(key)
    }

    /// Number of distinct keys.
    pub fn key_count(&self) -> usize {
        self.entries.len()
    }

    /// Number of rows indexed.
    pub fn len(&self) -> usize {
        self.indexed_rows
    }

    pub fn is_empty(&self) -> bool {
        self.indexed_rows == 0
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::Error;

    fn table(data: &[&[&str]]) -> Table {
        Table::load(
            data.iter()
                .map(|r| r.iter().map(|f| f.to_string()).collect())
                .collect(),
        )
        .unwrap()
    }

    #[test]
    fn test_duplicate_keys_keep_row_order() {
        let t = table(&[&["1", "a"], &["2", "b"], &["1", "c"], &["1", "d"]]);
        let index = KeyIndex::build(&t, 0).unwrap();

        assert_eq!(index.lookup("1"), &[0, 2, 3]);
        assert_eq!(index.lookup("2"), &[1]);
        assert_eq!(index.key_count(), 2);
        assert_eq!(index.len(), 4);
    }

    #[test]
    fn test_missing_key_is_empty() {
        let t = table(&[&["1", "a"]]);
        let index = KeyIndex::build(&t, 0).unwrap();

        assert!(index.lookup("9").is_empty());
        assert!(!index.contains("9"));
        assert!(index.contains("1"));
    }

    #[test]
    fn test_keys_are_opaque_text() {
        let t = table(&[&["1"], &["01"], &[" 1"], &["A"], &["a"]]);
        let index = KeyIndex::build(&t, 0).unwrap();

        assert_eq!(index.key_count(), 5);
        assert_eq!(index.lookup("1"), &[0]);
        assert_eq!(index.lookup("01"), &[1]);
        assert_eq!(index.lookup("a"), &[4]);
    }

    #[test]
    fn test_empty_key_is_a_key() {
        let t = table(&[&["", "x"], &["k", "y"], &["", "z"]]);
        let index = KeyIndex::build(&t, 0).unwrap();
        assert_eq!(index.lookup(""), &[0, 2]);
    }

    #[test]
    fn test_column_out_of_range() {
        let t = table(&[&["1", "a"]]);
        assert!(matches!(
            KeyIndex::build(&t, 2),
            Err(Error::ColumnOutOfRange { column: 2, width: 2 })
        ));
    }
}
