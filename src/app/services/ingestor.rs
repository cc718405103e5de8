//! Ingestion pipeline orchestration
//!
//! Drives the whole run: physical lines stream out of the file, complete
//! logical records stream out of the accumulator, the first record fixes the
//! header schema, and every following record is mapped, tallied, and batched.
//! Processing is strictly sequential; the only await points are line reads
//! and batch flushes, so at most one flush is ever outstanding.

use std::path::Path;

use tokio::fs::File;
use tokio::io::{AsyncBufReadExt, BufReader};
use tracing::{debug, info, warn};

use crate::app::adapters::store::RecordStore;
use crate::app::models::IngestReport;
use crate::app::services::age_stats::AgeCounters;
use crate::app::services::batcher::Batcher;
use crate::app::services::csv_reader::{RecordAccumulator, tokenize};
use crate::app::services::record_mapper::{HeaderSchema, map_record};
use crate::{Error, Result};

/// One-file ingestion pipeline bound to a record store
///
/// All run state (header schema, age tallies, pending batch) lives inside
/// `run`, so independent pipelines can ingest concurrently against the same
/// store without sharing anything.
pub struct IngestPipeline {
    store: Box<dyn RecordStore>,
    batch_size: usize,
}

impl IngestPipeline {
    /// Create a pipeline writing batches of `batch_size` to `store`
    pub fn new(store: Box<dyn RecordStore>, batch_size: usize) -> Self {
        Self { store, batch_size }
    }

    /// Ingest one roster CSV file and report the outcome
    ///
    /// Ensures the destination schema exists, then streams the file through
    /// the record pipeline. Fails fast on a bad header, an unparsable age, or
    /// a rejected batch; the first error aborts the run.
    pub async fn run(&self, csv_path: &Path) -> Result<IngestReport> {
        info!("Ingesting roster file: {}", csv_path.display());

        self.store.ensure_schema().await?;

        let file = File::open(csv_path).await.map_err(|e| {
            if e.kind() == std::io::ErrorKind::NotFound {
                Error::file_not_found(csv_path.display().to_string())
            } else {
                Error::io(format!("failed to open {}", csv_path.display()), e)
            }
        })?;
        let mut lines = BufReader::new(file).lines();

        let mut accumulator = RecordAccumulator::new();
        let mut schema: Option<HeaderSchema> = None;
        let mut counters = AgeCounters::default();
        let mut batcher = Batcher::new(self.store.as_ref(), self.batch_size);

        while let Some(line) = lines
            .next_line()
            .await
            .map_err(|e| Error::io("failed to read roster file", e))?
        {
            let Some(record) = accumulator.push_line(&line) else {
                continue;
            };

            let fields = tokenize(&record);

            match &schema {
                None => {
                    let validated = HeaderSchema::validate(&fields)?;
                    debug!("Validated header with {} columns", validated.len());
                    schema = Some(validated);
                }
                Some(schema) => {
                    let record_number = batcher.total_flushed() + batcher.pending_len() as u64 + 1;
                    let mapped = map_record(schema, &fields, record_number)?;
                    counters.record(mapped.age);
                    batcher.add(mapped).await?;
                }
            }
        }

        // Lines buffered inside an unterminated quoted field at EOF are
        // dropped, not surfaced as an error. Known quirk of the format
        // handling; callers may feed files that end this way.
        if let Some(residual) = accumulator.residual() {
            warn!(
                "Discarding {} buffered bytes from an unterminated quoted record at end of file",
                residual.len()
            );
        }

        batcher.flush().await?;

        let report = IngestReport {
            total_processed: batcher.total_flushed(),
            age_counters: counters,
        };
        info!("Ingestion complete: {} records", report.total_processed);
        Ok(report)
    }

    /// The store this pipeline writes to
    pub fn store(&self) -> &dyn RecordStore {
        self.store.as_ref()
    }
}
