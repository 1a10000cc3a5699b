//! CSV record source

use crate::error::{CleanerError, Result};
use crate::models::{Row, Table};
use std::io::Read;
use std::path::Path;
use tracing::debug;

/// Reads a scan export from disk
pub fn read_table(path: &Path) -> Result<Table> {
    if !path.exists() {
        return Err(CleanerError::NotFound(path.to_path_buf()));
    }
    let file = std::fs::File::open(path)?;
    let table = read_from(file)?;
    debug!(
        "Read {} rows x {} columns from {}",
        table.rows.len(),
        table.width(),
        path.display()
    );
    Ok(table)
}

/// Parses comma-separated, `"`-quoted text; the first record is the header.
///
/// Cells are kept verbatim. A row whose length differs from the header
/// fails with `CsvError`.
pub fn read_from<R: Read>(reader: R) -> Result<Table> {
    let mut reader = csv::ReaderBuilder::new()
        .has_headers(true)
        .flexible(false)
        .trim(csv::Trim::None)
        .from_reader(reader);

    let header = reader.headers()?.iter().map(String::from).collect();

    let mut rows = Vec::new();
    for record in reader.records() {
        let record = record?;
        let row: Row = record.iter().map(String::from).collect();
        rows.push(row);
    }

    Ok(Table::new(header, rows))
}
