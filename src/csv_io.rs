//! CSV decoding and encoding around the engine.
//!
//! Inputs have no header row. Records are read flexibly so that ragged rows
//! reach [`Table::load`] and are reported as `MalformedTable` with a row
//! position, rather than as a decoder error.

use crate::config::CsvOptions;
use crate::table::{Row, Table};
use crate::Result;
use csv::{QuoteStyle, ReaderBuilder, Terminator, WriterBuilder};
use std::fs::File;
use std::io::{BufReader, Read, Write};
use std::path::Path;

/// Decode every record of `reader` into a table.
pub fn read_table_from<R: Read>(reader: R, options: &CsvOptions) -> Result<Table> {
    let mut reader = ReaderBuilder::new()
        .delimiter(options.delimiter_byte())
        .quote(options.quote_byte())
        .has_headers(false)
        .flexible(true)
        .from_reader(reader);

    let mut rows: Vec<Row> = Vec::new();
    for record in reader.records() {
        let record = record?;
        rows.push(record.iter().map(str::to_string).collect());
    }

    Table::load(rows)
}

/// Open and decode the CSV file at `path`.
pub fn read_table(path: &Path, options: &CsvOptions) -> Result<Table> {
    let file = File::open(path)?;
    let table = read_table_from(BufReader::new(file), options)?;

    tracing::debug!(
        path = %path.display(),
        rows = table.row_count(),
        width = table.width(),
        "Table loaded"
    );

    Ok(table)
}

/// Encode rows with minimal quoting, one `\n`-terminated line per row.
pub fn write_rows<W: Write>(writer: W, rows: &[Vec<String>], options: &CsvOptions) -> Result<()> {
    let mut writer = WriterBuilder::new()
        .delimiter(options.delimiter_byte())
        .quote(options.quote_byte())
        .quote_style(QuoteStyle::Necessary)
        .double_quote(true)
        .terminator(Terminator::Any(b'\n'))
        .has_headers(false)
        .flexible(true)
        .from_writer(writer);

    for row in rows {
        writer.write_record(row)?;
    }
    writer.flush()?;
    Ok(())
}
