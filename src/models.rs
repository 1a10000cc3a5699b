//! Core data models for logclean

use serde::{Deserialize, Serialize};
use std::fmt;
use std::path::PathBuf;
use std::str::FromStr;

/// Risk labels that are always kept
pub const DEFAULT_RISK_LEVELS: [&str; 2] = ["HIGH", "CRITICAL"];

/// Columns that are always kept
pub const DEFAULT_COLUMNS: [&str; 5] = [
    "Component name",
    "Component version name",
    "Vulnerability id",
    "Description",
    "URL",
];

/// Ordered column names of a table
pub type Header = Vec<String>;

/// One data record, positionally aligned with the header
pub type Row = Vec<String>;

/// A parsed scan export: header plus data rows
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Table {
    pub header: Header,
    pub rows: Vec<Row>,
}

impl Table {
    pub fn new(header: Header, rows: Vec<Row>) -> Self {
        Self { header, rows }
    }

    /// Number of columns in the header
    pub fn width(&self) -> usize {
        self.header.len()
    }

    /// Returns true when every row has as many cells as the header
    pub fn is_rectangular(&self) -> bool {
        self.rows.iter().all(|row| row.len() == self.header.len())
    }
}

/// Output format of the cleaned report
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OutputMode {
    Html,
    Csv,
}

impl OutputMode {
    /// File extension used for reports in this mode
    pub fn extension(&self) -> &'static str {
        match self {
            OutputMode::Html => "html",
            OutputMode::Csv => "csv",
        }
    }
}

impl fmt::Display for OutputMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.extension())
    }
}

impl FromStr for OutputMode {
    type Err = ();

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        match s {
            "html" => Ok(OutputMode::Html),
            "csv" => Ok(OutputMode::Csv),
            _ => Err(()),
        }
    }
}

/// Configuration for a cleaning run, before validation
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CleanerConfig {
    /// Source CSV export
    pub file: Option<PathBuf>,
    /// Requested output mode, as given by the user
    pub mode: Option<String>,
    /// Labels a row must contain (exact cell match) to be kept
    pub risk_levels: Vec<String>,
    /// Columns kept in the report
    pub columns: Vec<String>,
    /// Directory reports are written into
    pub logs_dir: PathBuf,
    /// Optional Tera template replacing the built-in HTML layout
    #[serde(default)]
    pub template: Option<PathBuf>,
}

impl Default for CleanerConfig {
    fn default() -> Self {
        Self {
            file: None,
            mode: None,
            risk_levels: DEFAULT_RISK_LEVELS.iter().map(|s| s.to_string()).collect(),
            columns: DEFAULT_COLUMNS.iter().map(|s| s.to_string()).collect(),
            logs_dir: PathBuf::from("./logs"),
            template: None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = CleanerConfig::default();
        assert_eq!(config.risk_levels, vec!["HIGH", "CRITICAL"]);
        assert_eq!(config.columns.len(), 5);
        assert_eq!(config.columns[4], "URL");
        assert!(config.file.is_none());
        assert!(config.mode.is_none());
    }

    #[test]
    fn test_output_mode_parse() {
        assert_eq!("html".parse::<OutputMode>(), Ok(OutputMode::Html));
        assert_eq!("csv".parse::<OutputMode>(), Ok(OutputMode::Csv));
        assert!("HTML".parse::<OutputMode>().is_err());
        assert!("pdf".parse::<OutputMode>().is_err());
        assert_eq!(OutputMode::Csv.extension(), "csv");
    }

    #[test]
    fn test_table_rectangular() {
        let table = Table::new(
            vec!["a".into(), "b".into()],
            vec![vec!["1".into(), "2".into()]],
        );
        assert!(table.is_rectangular());
        assert_eq!(table.width(), 2);
    }
}
