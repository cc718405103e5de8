//! Roster Ingest Library
//!
//! A Rust library for loading roster CSV files of person records into
//! PostgreSQL, where a single logical record may span multiple physical lines
//! because quoted fields can contain embedded newlines.
//!
//! This library provides tools for:
//! - Reassembling multi-line logical records from a stream of physical lines
//! - Tokenizing records with RFC4180-like quoting and escaped-quote handling
//! - Validating the header row against the required leading columns
//! - Expanding dotted column names into nested JSON objects
//! - Classifying records into age buckets for distribution reporting
//! - Writing bounded batches to PostgreSQL with a single bulk insert per batch

pub mod config;
pub mod constants;

// Core application modules
pub mod app {
    pub mod models;
    pub mod services {
        pub mod age_stats;
        pub mod batcher;
        pub mod csv_reader;
        pub mod ingestor;
        pub mod record_mapper;
    }
    pub mod adapters {
        pub mod postgres;
        pub mod store;
    }
}

// CLI modules
pub mod cli {
    pub mod args;
    pub mod commands;
}

// Re-export commonly used types
pub use app::models::{IngestReport, MappedRecord};
pub use config::Config;

/// Result type alias for roster ingestion
pub type Result<T> = std::result::Result<T, Error>;

/// Error types for roster ingestion operations
///
/// All variants are fatal for the run in which they occur: the pipeline
/// performs no row-skipping or retry, and propagates the first failure to the
/// caller with any unflushed batch preserved.
#[derive(thiserror::Error, Debug)]
pub enum Error {
    /// I/O operation failed
    #[error("I/O error: {message}")]
    Io {
        message: String,
        #[source]
        source: std::io::Error,
    },

    /// File not found
    #[error("File not found: {path}")]
    FileNotFound { path: String },

    /// Configuration error
    #[error("Configuration error: {message}")]
    Configuration { message: String },

    /// Header row missing or wrong at a required position
    #[error("Header validation failed: expected header[{position}] = \"{expected}\", got \"{actual}\"")]
    HeaderMismatch {
        position: usize,
        expected: String,
        actual: String,
    },

    /// A data row's age field did not parse as an integer
    #[error("Invalid age value for record #{record_number}: \"{raw}\"")]
    InvalidAge { record_number: u64, raw: String },

    /// Persistence operation failed
    #[error("Persistence error: {message}")]
    Persistence {
        message: String,
        #[source]
        source: sqlx::Error,
    },
}

impl Error {
    /// Create an I/O error with context
    pub fn io(message: impl Into<String>, source: std::io::Error) -> Self {
        Self::Io {
            message: message.into(),
            source,
        }
    }

    /// Create a file not found error
    pub fn file_not_found(path: impl Into<String>) -> Self {
        Self::FileNotFound { path: path.into() }
    }

    /// Create a configuration error
    pub fn configuration(message: impl Into<String>) -> Self {
        Self::Configuration {
            message: message.into(),
        }
    }

    /// Create a header mismatch error
    pub fn header_mismatch(
        position: usize,
        expected: impl Into<String>,
        actual: impl Into<String>,
    ) -> Self {
        Self::HeaderMismatch {
            position,
            expected: expected.into(),
            actual: actual.into(),
        }
    }

    /// Create an invalid age error
    pub fn invalid_age(record_number: u64, raw: impl Into<String>) -> Self {
        Self::InvalidAge {
            record_number,
            raw: raw.into(),
        }
    }

    /// Create a persistence error with context
    pub fn persistence(message: impl Into<String>, source: sqlx::Error) -> Self {
        Self::Persistence {
            message: message.into(),
            source,
        }
    }
}

// Automatic conversions from common error types
impl From<std::io::Error> for Error {
    fn from(error: std::io::Error) -> Self {
        Self::Io {
            message: "I/O operation failed".to_string(),
            source: error,
        }
    }
}

impl From<sqlx::Error> for Error {
    fn from(error: sqlx::Error) -> Self {
        Self::Persistence {
            message: "database operation failed".to_string(),
            source: error,
        }
    }
}
