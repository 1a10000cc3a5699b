//! Report renderers and output file placement

pub mod csv;
pub mod html;

use crate::error::Result;
use crate::models::{OutputMode, Table};
use chrono::{DateTime, Local};
use std::path::{Path, PathBuf};
use tracing::debug;

/// Trait that every output format implements
pub trait ReportRenderer {
    /// File extension of the produced report
    fn extension(&self) -> &'static str;

    /// Writes the table to `output_path`
    fn render(&self, table: &Table, output_path: &Path) -> Result<()>;
}

/// Picks the renderer for an output mode
pub fn renderer_for(mode: OutputMode, template: Option<&Path>) -> Box<dyn ReportRenderer> {
    match mode {
        OutputMode::Html => Box::new(html::HtmlRenderer::new(template.map(Path::to_path_buf))),
        OutputMode::Csv => Box::new(csv::CsvRenderer),
    }
}

/// Report file name, e.g. `18-10-2026_14-03-59_clean_logs.csv`
pub fn report_file_name(now: DateTime<Local>, extension: &str) -> String {
    format!("{}_clean_logs.{extension}", now.format("%d-%m-%Y_%H-%M-%S"))
}

/// Renders into `logs_dir`, creating it when absent, and returns the report path.
///
/// Runs within the same second share a file name; the later one wins.
pub fn write_report(
    renderer: &dyn ReportRenderer,
    table: &Table,
    logs_dir: &Path,
    now: DateTime<Local>,
) -> Result<PathBuf> {
    if !logs_dir.exists() {
        debug!("Creating logs directory {}", logs_dir.display());
        std::fs::create_dir_all(logs_dir)?;
    }
    let output_path = logs_dir.join(report_file_name(now, renderer.extension()));
    renderer.render(table, &output_path)?;
    Ok(output_path)
}
