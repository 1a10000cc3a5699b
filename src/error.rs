//! Error types for logclean

use std::path::PathBuf;
use thiserror::Error;

/// Main error type for logclean operations
#[derive(Debug, Error)]
pub enum CleanerError {
    #[error("{0}")]
    ConfigError(String),

    #[error("404 error. File {} not found", .0.display())]
    NotFound(PathBuf),

    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),

    #[error("CSV error: {0}")]
    CsvError(#[from] csv::Error),

    #[error("Template error: {0}")]
    TemplateError(#[from] tera::Error),

    #[error("TOML parse error: {0}")]
    TomlError(#[from] toml::de::Error),
}

/// Result type alias for logclean operations
pub type Result<T> = std::result::Result<T, CleanerError>;
