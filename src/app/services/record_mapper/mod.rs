//! Header-driven record mapping
//!
//! Turns an ordered field list into a [`MappedRecord`](crate::MappedRecord):
//! the first record of a run fixes the header schema, and each subsequent field
//! list is padded, keyed by header name, and reshaped into nested JSON
//! objects driven by dotted column names.
//!
//! ## Architecture
//!
//! - [`header`] - One-shot validation of the required leading columns
//! - [`nested`] - Dotted-path expansion into JSON object trees
//! - [`mapper`] - Full-name derivation, age parsing, and record assembly

pub mod header;
pub mod mapper;
pub mod nested;

#[cfg(test)]
mod tests;

// Re-export main types for easy access
pub use header::HeaderSchema;
pub use mapper::map_record;
pub use nested::set_nested;
