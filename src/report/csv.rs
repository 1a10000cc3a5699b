//! CSV report export (RFC 4180 compliant)

use super::ReportRenderer;
use crate::error::Result;
use crate::models::Table;
use std::io::Write;
use std::path::Path;
use tracing::info;

/// Writes the cleaned table back out as CSV
pub struct CsvRenderer;

/// Serializes a table as CSV into any writer
pub fn write_table<W: Write>(table: &Table, writer: W) -> Result<()> {
    let mut wtr = csv::Writer::from_writer(writer);
    wtr.write_record(&table.header)?;
    for row in &table.rows {
        wtr.write_record(row)?;
    }
    wtr.flush()?;
    Ok(())
}

impl ReportRenderer for CsvRenderer {
    fn extension(&self) -> &'static str {
        "csv"
    }

    fn render(&self, table: &Table, output_path: &Path) -> Result<()> {
        let file = std::fs::File::create(output_path)?;
        write_table(table, std::io::BufWriter::new(file))?;
        info!("CSV report saved to {}", output_path.display());
        Ok(())
    }
}
