//! Command-line argument definitions for roster ingest
//!
//! This module defines the CLI interface using the clap derive API. Flag
//! values override the config file and environment layers.

use clap::{ArgAction, Parser, Subcommand, ValueEnum};
use std::path::PathBuf;

/// CLI arguments for the roster ingestion tool
///
/// Loads roster CSV files of person records into PostgreSQL, expanding
/// dotted column names into nested JSON and reporting the age distribution.
#[derive(Debug, Clone, Parser)]
#[command(
    name = "roster-ingest",
    version,
    about = "Load multi-line roster CSV files into PostgreSQL",
    long_about = "Streams a roster CSV file whose records may span multiple physical lines \
                  (quoted fields can contain embedded newlines), validates the header row, \
                  expands dotted column names into nested JSON objects, and writes bounded \
                  batches to a PostgreSQL users table with an age distribution report at the end."
)]
pub struct Args {
    #[command(subcommand)]
    pub command: Option<Commands>,
}

/// Available subcommands
#[derive(Debug, Clone, Subcommand)]
pub enum Commands {
    /// Ingest a roster CSV file into PostgreSQL
    Process(ProcessArgs),
}

/// Arguments for the process command
#[derive(Debug, Clone, Parser)]
pub struct ProcessArgs {
    /// Path to the roster CSV file
    ///
    /// Falls back to the CSV_PATH environment variable, then the config
    /// file, then ./data/users.csv.
    #[arg(value_name = "FILE", help = "Path to the roster CSV file")]
    pub csv_path: Option<PathBuf>,

    /// Records per bulk insert
    ///
    /// Overrides BATCH_SIZE from the environment and the config file.
    #[arg(
        short = 'b',
        long = "batch-size",
        value_name = "N",
        help = "Number of records per bulk insert"
    )]
    pub batch_size: Option<usize>,

    /// Path to a TOML config file
    ///
    /// Defaults to the user config directory (roster-ingest/config.toml)
    /// when present.
    #[arg(
        short = 'c',
        long = "config",
        value_name = "PATH",
        help = "Path to a TOML config file"
    )]
    pub config_file: Option<PathBuf>,

    /// Parse and classify without writing to PostgreSQL
    ///
    /// Runs the full pipeline against an in-memory store, so header and age
    /// validation still apply and the distribution report is still printed.
    #[arg(long = "dry-run", help = "Parse and classify without writing to PostgreSQL")]
    pub dry_run: bool,

    /// Output format for the end-of-run summary
    #[arg(
        long = "format",
        value_enum,
        default_value_t = OutputFormat::Text,
        help = "Summary output format"
    )]
    pub format: OutputFormat,

    /// Increase logging verbosity (-v debug, -vv trace)
    #[arg(short = 'v', long = "verbose", action = ArgAction::Count)]
    pub verbose: u8,

    /// Suppress progress output and non-warning logs
    #[arg(short = 'q', long = "quiet")]
    pub quiet: bool,
}

/// Summary output formats
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    /// Human-readable table
    Text,
    /// Machine-readable JSON
    Json,
}

impl ProcessArgs {
    /// Log level derived from the verbosity flags
    pub fn log_level(&self) -> &'static str {
        if self.quiet {
            "warn"
        } else {
            match self.verbose {
                0 => "info",
                1 => "debug",
                _ => "trace",
            }
        }
    }

    /// Whether to show the progress spinner
    pub fn show_progress(&self) -> bool {
        !self.quiet && self.format == OutputFormat::Text
    }
}
