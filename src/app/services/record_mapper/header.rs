//! Header schema validation
//!
//! The first logical record of a run must carry the reserved name and age
//! columns in fixed leading positions. Validation runs exactly once; the
//! trimmed header list then serves as the schema for every data row.

use crate::constants::REQUIRED_HEADERS;
use crate::{Error, Result};

/// Ordered column names fixed from the first record of an ingestion run
#[derive(Debug, Clone, PartialEq)]
pub struct HeaderSchema {
    names: Vec<String>,
}

impl HeaderSchema {
    /// Validate a tokenized header row and fix it as the run's schema
    ///
    /// Every name is trimmed. Positions 0, 1, and 2 must equal
    /// `name.firstName`, `name.lastName`, and `age` exactly; a missing
    /// position is reported as an empty actual value. Fails fast with
    /// [`Error::HeaderMismatch`] before any data row is processed.
    pub fn validate(fields: &[String]) -> Result<Self> {
        let names: Vec<String> = fields.iter().map(|f| f.trim().to_string()).collect();

        for (position, expected) in REQUIRED_HEADERS.iter().enumerate() {
            let actual = names.get(position).map(String::as_str).unwrap_or("");
            if actual != *expected {
                return Err(Error::header_mismatch(position, *expected, actual));
            }
        }

        Ok(Self { names })
    }

    /// Trimmed column names in file order
    pub fn names(&self) -> &[String] {
        &self.names
    }

    /// Number of columns in the schema
    pub fn len(&self) -> usize {
        self.names.len()
    }

    /// True when the schema has no columns (cannot occur after validation)
    pub fn is_empty(&self) -> bool {
        self.names.is_empty()
    }
}
