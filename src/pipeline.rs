//! Source → filter → projection → report pipeline

use crate::config::{self, ValidatedConfig};
use crate::error::Result;
use crate::filter;
use crate::models::{CleanerConfig, Table};
use crate::projector;
use crate::report;
use crate::source;
use chrono::Local;
use std::path::PathBuf;
use tracing::{debug, info};

/// Outcome of a completed run
#[derive(Debug, Clone)]
pub struct Report {
    /// Where the report was written
    pub output_path: PathBuf,
    /// Data rows in the source file
    pub rows_read: usize,
    /// Rows that carried a risk label
    pub rows_kept: usize,
    /// Columns left after projection
    pub columns_kept: Vec<String>,
}

/// Filtered, projected table and the source row count it came from
#[derive(Debug, Clone)]
pub struct Cleaned {
    /// Data rows in the source file
    pub rows_read: usize,
    /// Table after risk filtering and column projection
    pub table: Table,
}

/// Drives a single cleaning run from a validated configuration
pub struct Cleaner {
    config: ValidatedConfig,
}

impl Cleaner {
    pub fn new(config: ValidatedConfig) -> Self {
        Self { config }
    }

    /// Reads the source and returns the filtered, projected table
    pub fn clean(&self) -> Result<Cleaned> {
        let table = source::read_table(&self.config.file)?;
        let rows_read = table.rows.len();

        let rows = filter::filter_by_risk(table.rows, &self.config.risk_levels);
        debug!(
            "{} of {} rows match risk levels [{}]",
            rows.len(),
            rows_read,
            self.config.risk_levels.join(", ")
        );

        let table = projector::project(Table::new(table.header, rows), &self.config.columns);
        debug!("Keeping columns [{}]", table.header.join(", "));

        Ok(Cleaned { rows_read, table })
    }

    /// Runs the pipeline and writes the report
    pub fn run(&self) -> Result<Report> {
        info!(
            "Cleaning {} into {} report",
            self.config.file.display(),
            self.config.mode
        );
        let Cleaned { rows_read, table } = self.clean()?;

        let renderer = report::renderer_for(self.config.mode, self.config.template.as_deref());
        let output_path =
            report::write_report(&*renderer, &table, &self.config.logs_dir, Local::now())?;

        Ok(Report {
            output_path,
            rows_read,
            rows_kept: table.rows.len(),
            columns_kept: table.header,
        })
    }
}

/// Validates `config` and, when it passes, runs the pipeline
pub fn run(config: &CleanerConfig) -> Result<Report> {
    let validated = config::validate(config)?;
    Cleaner::new(validated).run()
}
