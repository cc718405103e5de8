//! Tests for header validation, dotted-path expansion, and record mapping

use super::header::HeaderSchema;

mod header_tests;
mod mapper_tests;

/// Build a validated schema from string literals
pub fn schema(names: &[&str]) -> HeaderSchema {
    let fields: Vec<String> = names.iter().map(|s| s.to_string()).collect();
    HeaderSchema::validate(&fields).expect("test header must validate")
}

/// Convert string literals into an owned field list
pub fn fields(values: &[&str]) -> Vec<String> {
    values.iter().map(|s| s.to_string()).collect()
}
