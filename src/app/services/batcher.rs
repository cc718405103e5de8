//! Bounded batching of mapped records for bulk persistence

use tracing::debug;

use crate::Result;
use crate::app::adapters::store::RecordStore;
use crate::app::models::MappedRecord;

/// Accumulates mapped records and flushes them in bounded batches
///
/// `add` triggers a synchronous flush the moment the batch reaches capacity,
/// so at most one bulk insert is ever in flight. On a failed flush the
/// pending batch is preserved unmodified and the error propagates; nothing
/// already decoded is lost. The caller must call `flush` once more after the
/// input is exhausted to persist a final partial batch.
pub struct Batcher<'a> {
    store: &'a dyn RecordStore,
    capacity: usize,
    pending: Vec<MappedRecord>,
    total_flushed: u64,
}

impl<'a> Batcher<'a> {
    /// Create an empty batcher with the given capacity
    ///
    /// Capacity must be positive; config validation enforces this upstream.
    pub fn new(store: &'a dyn RecordStore, capacity: usize) -> Self {
        Self {
            store,
            capacity,
            pending: Vec::with_capacity(capacity),
            total_flushed: 0,
        }
    }

    /// Append a record, flushing when the batch reaches capacity
    pub async fn add(&mut self, record: MappedRecord) -> Result<()> {
        self.pending.push(record);
        if self.pending.len() >= self.capacity {
            self.flush().await?;
        }
        Ok(())
    }

    /// Persist the pending batch with one bulk insert
    ///
    /// A no-op on an empty batch. The batch is cleared and the running total
    /// bumped only after the insert succeeds.
    pub async fn flush(&mut self) -> Result<()> {
        if self.pending.is_empty() {
            return Ok(());
        }

        self.store.bulk_insert(&self.pending).await?;

        self.total_flushed += self.pending.len() as u64;
        debug!(
            "Flushed batch of {} records ({} total)",
            self.pending.len(),
            self.total_flushed
        );
        self.pending.clear();
        Ok(())
    }

    /// Records currently waiting in the batch
    pub fn pending_len(&self) -> usize {
        self.pending.len()
    }

    /// Records persisted across all successful flushes
    pub fn total_flushed(&self) -> u64 {
        self.total_flushed
    }
}
