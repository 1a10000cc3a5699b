//! Common test utilities

#![allow(dead_code)]

use logclean::models::CleanerConfig;
use std::path::{Path, PathBuf};

pub const SCAN_HEADER: &str =
    "Component name,Component version name,Vulnerability id,Description,URL,Severity";

/// Writes `contents` as `scan.csv` inside `dir` and returns its path
pub fn write_scan(dir: &Path, contents: &str) -> PathBuf {
    let path = dir.join("scan.csv");
    std::fs::write(&path, contents).expect("Failed to write scan fixture");
    path
}

/// A scan export with one HIGH, one LOW and one CRITICAL finding
pub fn sample_scan() -> String {
    format!(
        "{SCAN_HEADER}\n\
         openssl,3.0.1,CVE-2024-0001,\"Heap overflow, remote\",https://nvd.nist.gov/vuln/detail/CVE-2024-0001,HIGH\n\
         zlib,1.2.11,CVE-2018-25032,Memory corruption,https://nvd.nist.gov/vuln/detail/CVE-2018-25032,LOW\n\
         log4j,2.14.0,CVE-2021-44228,Remote code execution,https://nvd.nist.gov/vuln/detail/CVE-2021-44228,CRITICAL\n"
    )
}

/// Creates a config pointing at `file` and writing into `logs_dir`
pub fn test_config(file: &Path, mode: &str, logs_dir: &Path) -> CleanerConfig {
    CleanerConfig {
        file: Some(file.to_path_buf()),
        mode: Some(mode.to_string()),
        logs_dir: logs_dir.to_path_buf(),
        ..CleanerConfig::default()
    }
}

/// Files currently present in `dir`, empty when it does not exist
pub fn list_files(dir: &Path) -> Vec<PathBuf> {
    match std::fs::read_dir(dir) {
        Ok(entries) => entries.filter_map(|e| e.ok()).map(|e| e.path()).collect(),
        Err(_) => Vec::new(),
    }
}
