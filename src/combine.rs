//! Row Combiner

use crate::table::Row;
use crate::{Error, Result};

/// Combined output row: left fields followed by right fields.
pub type OutputRow = Vec<String>;

/// Concatenate a left and right row, substituting empty fields for an absent side.
///
/// Widths are passed explicitly because an absent side has no row to measure.
/// Both sides absent is an engine defect and reported as `InvalidCombination`.
pub fn combine(
    left: Option<&Row>,
    right: Option<&Row>,
    left_width: usize,
    right_width: usize,
) -> Result<OutputRow> {
    if left.is_none() && right.is_none() {
        return Err(Error::InvalidCombination);
    }

    let mut out = Vec::with_capacity(left_width + right_width);
    append_side(&mut out, left, left_width);
    append_side(&mut out, right, right_width);

    debug_assert_eq!(out.len(), left_width + right_width);
    Ok(out)
}

fn append_side(out: &mut OutputRow, side: Option<&Row>, width: usize) {
    match side {
        Some(row) => out.extend(row.iter().cloned()),
        None => out.resize(out.len() + width, String::new()),
    }
}
