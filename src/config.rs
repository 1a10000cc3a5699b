//! Configuration management and pre-run validation

use crate::error::{CleanerError, Result};
use crate::models::{CleanerConfig, OutputMode};
use serde::Deserialize;
use std::path::{Path, PathBuf};

/// File-based configuration structure matching config/default.toml
#[derive(Debug, Deserialize)]
struct FileConfig {
    filter: Option<FilterSection>,
    output: Option<OutputSection>,
}

#[derive(Debug, Deserialize)]
struct FilterSection {
    risk_levels: Option<Vec<String>>,
    columns: Option<Vec<String>>,
}

#[derive(Debug, Deserialize)]
struct OutputSection {
    logs_dir: Option<PathBuf>,
    template: Option<PathBuf>,
}

/// Configuration that passed validation and can drive a run
#[derive(Debug, Clone)]
pub struct ValidatedConfig {
    pub file: PathBuf,
    pub mode: OutputMode,
    pub risk_levels: Vec<String>,
    pub columns: Vec<String>,
    pub logs_dir: PathBuf,
    pub template: Option<PathBuf>,
}

/// Loads configuration from a TOML file and merges with defaults
pub fn load_config(path: &Path) -> Result<CleanerConfig> {
    let content = std::fs::read_to_string(path)?;
    parse_config(&content)
}

/// Parses TOML configuration text; filter lists extend the defaults
pub fn parse_config(content: &str) -> Result<CleanerConfig> {
    let file_config: FileConfig = toml::from_str(content)?;

    let mut config = CleanerConfig::default();

    if let Some(filter) = file_config.filter {
        if let Some(levels) = filter.risk_levels {
            config.risk_levels.extend(levels);
        }
        if let Some(columns) = filter.columns {
            config.columns.extend(columns);
        }
    }

    if let Some(output) = file_config.output {
        if let Some(dir) = output.logs_dir {
            config.logs_dir = dir;
        }
        if output.template.is_some() {
            config.template = output.template;
        }
    }

    Ok(config)
}

/// Merges CLI arguments into an existing CleanerConfig
pub fn merge_cli_args(
    config: &mut CleanerConfig,
    file: Option<PathBuf>,
    mode: Option<String>,
    columns: Option<Vec<String>>,
    risk: Option<Vec<String>>,
    logs_dir: Option<PathBuf>,
) {
    if file.is_some() {
        config.file = file;
    }
    if mode.is_some() {
        config.mode = mode;
    }
    if let Some(c) = columns {
        config.columns.extend(c);
    }
    if let Some(r) = risk {
        config.risk_levels.extend(r);
    }
    if let Some(dir) = logs_dir {
        config.logs_dir = dir;
    }
}

/// Checks a configuration before anything is read or written.
///
/// Checks run in a fixed order: missing mode, missing source file,
/// unspecified file, unknown mode. The first failure wins.
pub fn validate(config: &CleanerConfig) -> Result<ValidatedConfig> {
    let Some(mode) = config.mode.as_deref() else {
        return Err(CleanerError::ConfigError(
            "Please select mode. --help for more information".to_string(),
        ));
    };

    if let Some(ref file) = config.file {
        if !file.exists() {
            return Err(CleanerError::NotFound(file.clone()));
        }
    }

    let Some(file) = config.file.clone() else {
        return Err(CleanerError::ConfigError("File not specified".to_string()));
    };

    let mode: OutputMode = mode
        .parse()
        .map_err(|_| CleanerError::ConfigError("Invalid mode specified".to_string()))?;

    Ok(ValidatedConfig {
        file,
        mode,
        risk_levels: config.risk_levels.clone(),
        columns: config.columns.clone(),
        logs_dir: config.logs_dir.clone(),
        template: config.template.clone(),
    })
}
