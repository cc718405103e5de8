//! Data models for roster ingestion
//!
//! Core structures exchanged between the pipeline stages: the decoded record
//! shape persisted to the store, and the end-of-run report returned to the
//! trigger boundary.

use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::app::services::age_stats::AgeCounters;

/// One decoded roster record, ready for persistence
///
/// Built once per data row and immutable thereafter; owned by the batcher
/// until its batch is flushed. The JSON fields hold object trees with string
/// leaves, expanded from dotted column names, or `None` when no column fed
/// the tree.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MappedRecord {
    /// Derived full name: first name plus, when present, a space and last name
    pub name: String,

    /// Parsed integer age
    pub age: i32,

    /// Nested object built from `address.*` columns
    pub address: Option<Value>,

    /// Nested object built from all other non-reserved columns
    pub additional_info: Option<Value>,
}

/// Result of one ingestion run
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct IngestReport {
    /// Number of records successfully persisted
    pub total_processed: u64,

    /// Age distribution tallies across all mapped records
    pub age_counters: AgeCounters,
}
