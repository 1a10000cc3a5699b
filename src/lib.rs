//! logclean - Vulnerability scan log cleaner
//!
//! Reads a scan CSV export, keeps the rows tagged with a configured risk
//! level, drops the columns nobody asked for, and writes the result as an
//! HTML list or a clean CSV file.

pub mod config;
pub mod error;
pub mod filter;
pub mod models;
pub mod pipeline;
pub mod projector;
pub mod report;
pub mod source;
