//! logclean - Vulnerability scan log cleaner CLI

use clap::Parser;
use colored::Colorize;
use std::path::{Path, PathBuf};
use tabled::builder::Builder;
use tabled::settings::Style;
use tracing_subscriber::EnvFilter;

use logclean::config;
use logclean::models::CleanerConfig;
use logclean::pipeline::{self, Report};

/// Converts scan exports into a readable report filtered by risk level
#[derive(Parser)]
#[command(name = "logclean", version, about, long_about = None)]
struct Cli {
    /// Scan export to convert into a readable format
    #[arg(short, long, value_name = "FILE")]
    file: Option<PathBuf>,

    /// Extra columns to keep (comma-separated)
    #[arg(short, long, value_delimiter = ',')]
    columns: Option<Vec<String>>,

    /// Extra security risk level names (comma-separated)
    #[arg(short, long, value_delimiter = ',')]
    risk: Option<Vec<String>>,

    /// Output format (html or csv)
    #[arg(short, long)]
    mode: Option<String>,

    /// Path to configuration file
    #[arg(long)]
    config: Option<PathBuf>,

    /// Directory reports are written into
    #[arg(short = 'o', long)]
    logs_dir: Option<PathBuf>,

    /// Verbose output
    #[arg(short, long)]
    verbose: bool,
}

fn print_summary(report: &Report) {
    let mut builder = Builder::default();
    builder.push_record(["Rows read".to_string(), report.rows_read.to_string()]);
    builder.push_record(["Rows kept".to_string(), report.rows_kept.to_string()]);
    builder.push_record([
        "Columns kept".to_string(),
        report.columns_kept.len().to_string(),
    ]);

    let mut table = builder.build();
    table.with(Style::rounded());
    println!("{table}");
}

fn absolute(path: &Path) -> PathBuf {
    std::fs::canonicalize(path).unwrap_or_else(|_| {
        std::env::current_dir()
            .map(|cwd| cwd.join(path))
            .unwrap_or_else(|_| path.to_path_buf())
    })
}

fn main() {
    let cli = Cli::parse();

    let filter = if cli.verbose {
        "logclean=debug"
    } else {
        "logclean=info"
    };
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(filter)),
        )
        .with_target(false)
        .init();

    let loaded = if let Some(ref path) = cli.config {
        config::load_config(path)
    } else {
        let default_path = Path::new("config/default.toml");
        if default_path.exists() {
            config::load_config(default_path)
        } else {
            Ok(CleanerConfig::default())
        }
    };

    let mut cleaner_config = match loaded {
        Ok(c) => c,
        Err(e) => {
            eprintln!("{} {}", "[!]".red().bold(), e);
            std::process::exit(1);
        }
    };

    config::merge_cli_args(
        &mut cleaner_config,
        cli.file,
        cli.mode,
        cli.columns,
        cli.risk,
        cli.logs_dir,
    );

    match pipeline::run(&cleaner_config) {
        Ok(report) => {
            println!(
                "{} Logs successfully saved in {}",
                "[+]".green().bold(),
                absolute(&report.output_path).display().to_string().green()
            );
            print_summary(&report);
        }
        Err(e) => {
            eprintln!("{} {}", "[!]".red().bold(), e);
            std::process::exit(1);
        }
    }
}
