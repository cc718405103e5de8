//! Persistence collaborator interface
//!
//! The pipeline only ever talks to a [`RecordStore`]: schema setup once
//! before ingestion, then one bulk insert per batch. The production
//! implementation lives in [`postgres`](super::postgres); the in-memory
//! store here backs dry runs and tests.

use std::sync::{Arc, Mutex};

use async_trait::async_trait;

use crate::Result;
use crate::app::models::MappedRecord;

/// Destination for decoded records
///
/// `bulk_insert` must be atomic per batch: either every record in the slice
/// is persisted or none is, so a failed flush leaves no partial state behind.
#[async_trait]
pub trait RecordStore: Send + Sync {
    /// Create the destination schema if it does not exist; idempotent
    async fn ensure_schema(&self) -> Result<()>;

    /// Persist one batch of records in their given order
    async fn bulk_insert(&self, records: &[MappedRecord]) -> Result<()>;
}

/// In-memory record store for dry runs and tests
#[derive(Debug, Clone, Default)]
pub struct MemoryStore {
    inner: Arc<Mutex<MemoryStoreInner>>,
}

#[derive(Debug, Default)]
struct MemoryStoreInner {
    records: Vec<MappedRecord>,
    insert_calls: usize,
}

impl MemoryStore {
    /// Create an empty in-memory store
    pub fn new() -> Self {
        Self::default()
    }

    /// All records persisted so far, in insertion order
    pub fn records(&self) -> Vec<MappedRecord> {
        self.lock().records.clone()
    }

    /// Number of bulk-insert calls made against this store
    pub fn insert_calls(&self) -> usize {
        self.lock().insert_calls
    }

    fn lock(&self) -> std::sync::MutexGuard<'_, MemoryStoreInner> {
        self.inner.lock().expect("memory store mutex poisoned")
    }
}

#[async_trait]
impl RecordStore for MemoryStore {
    async fn ensure_schema(&self) -> Result<()> {
        Ok(())
    }

    async fn bulk_insert(&self, records: &[MappedRecord]) -> Result<()> {
        let mut inner = self.lock();
        inner.insert_calls += 1;
        inner.records.extend_from_slice(records);
        Ok(())
    }
}
