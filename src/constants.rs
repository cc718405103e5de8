//! Application constants for roster ingestion
//!
//! This module contains the fixed header contract, parsing characters, and
//! default values used throughout the ingestion pipeline.

// =============================================================================
// Header Contract
// =============================================================================

/// Required leading header names, in fixed order
///
/// The first three columns of every roster file must carry exactly these
/// names; ingestion fails before any data row is processed otherwise.
pub const REQUIRED_HEADERS: [&str; 3] = ["name.firstName", "name.lastName", "age"];

/// Dotted-name prefix routed into the `address` JSON column
///
/// Columns starting with this prefix are expanded (prefix stripped) under the
/// address object; every other non-reserved column lands in additional_info.
pub const ADDRESS_PREFIX: &str = "address.";

// =============================================================================
// Parsing Characters
// =============================================================================

/// Field delimiter within a logical record
pub const DELIMITER: char = ',';

/// Quote character enclosing fields that contain delimiters or newlines
pub const QUOTE: char = '"';

// =============================================================================
// Defaults
// =============================================================================

/// Default number of mapped records per bulk insert
pub const DEFAULT_BATCH_SIZE: usize = 1000;

/// Default roster file location when neither CLI nor environment supplies one
pub const DEFAULT_CSV_PATH: &str = "./data/users.csv";
