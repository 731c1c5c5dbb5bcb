use serde_json::Value as JsonValue;
use tracing::{info, warn};

use crate::store::RecordStore;
use crate::{Result, StoreError};

/// One row that could not be persisted, by position in the input sequence.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WriteFailure {
    pub index: usize,
    pub reason: String,
}

/// Aggregate result of a batched insert run.
#[derive(Debug, Clone, Default)]
pub struct WriteOutcome {
    pub attempted: usize,
    pub succeeded: usize,
    pub failures: Vec<WriteFailure>,
}

impl WriteOutcome {
    pub fn all_ok(&self) -> bool {
        self.failures.is_empty() && self.succeeded == self.attempted
    }
}

/// Insert `rows` into `table` in contiguous batches of `batch_size`,
/// strictly in order, one request at a time.
///
/// A rejected batch is not retried as a unit: every row in it is
/// resubmitted individually so a single bad row cannot sink its
/// neighbours. Individual rejections are recorded and the run continues
/// to the end of the input. There is no backoff and no retry-with-delay.
pub async fn insert_batched<S: RecordStore + ?Sized>(
    store: &S,
    table: &str,
    rows: &[JsonValue],
    batch_size: usize,
) -> Result<WriteOutcome> {
    if batch_size == 0 {
        return Err(StoreError::InvalidBatchSize(batch_size));
    }

    let total = rows.len();
    let mut outcome = WriteOutcome {
        attempted: total,
        ..Default::default()
    };

    for (batch_no, batch) in rows.chunks(batch_size).enumerate() {
        let offset = batch_no * batch_size;

        match store.insert_many(table, batch).await {
            Ok(()) => {
                outcome.succeeded += batch.len();
                info!(table, "inserted {}/{} rows", outcome.succeeded, total);
            }
            Err(e) => {
                warn!(
                    table,
                    "batch {} rejected ({e}), retrying its {} rows individually",
                    batch_no + 1,
                    batch.len()
                );
                for (i, row) in batch.iter().enumerate() {
                    match store.insert_one(table, row).await {
                        Ok(()) => outcome.succeeded += 1,
                        Err(row_err) => {
                            warn!(table, "row {} rejected: {row_err}", offset + i);
                            outcome.failures.push(WriteFailure {
                                index: offset + i,
                                reason: row_err.to_string(),
                            });
                        }
                    }
                }
            }
        }
    }

    Ok(outcome)
}
