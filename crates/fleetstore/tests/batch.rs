use std::sync::Mutex;

use async_trait::async_trait;
use serde_json::{json, Value as JsonValue};

use fleetstore::{insert_batched, RecordStore, Result, StoreError};

#[derive(Debug, Clone, PartialEq, Eq)]
enum Call {
    Many { len: usize },
    One { id: i64 },
}

/// In-memory store that rejects any write touching `reject_id` and keeps
/// a log of every request it saw, in order.
struct MockStore {
    reject_id: Option<i64>,
    calls: Mutex<Vec<Call>>,
}

impl MockStore {
    fn new(reject_id: Option<i64>) -> Self {
        Self {
            reject_id,
            calls: Mutex::new(Vec::new()),
        }
    }

    fn calls(&self) -> Vec<Call> {
        self.calls.lock().unwrap().clone()
    }

    fn rejects(&self, row: &JsonValue) -> bool {
        match self.reject_id {
            Some(id) => row["id"].as_i64() == Some(id),
            None => false,
        }
    }
}

#[async_trait]
impl RecordStore for MockStore {
    async fn select(&self, _table: &str, _columns: &str) -> Result<Vec<JsonValue>> {
        Ok(Vec::new())
    }

    async fn insert_many(&self, _table: &str, rows: &[JsonValue]) -> Result<()> {
        self.calls.lock().unwrap().push(Call::Many { len: rows.len() });
        if rows.iter().any(|r| self.rejects(r)) {
            return Err(StoreError::Rejected {
                status: 409,
                message: "duplicate key value violates unique constraint".into(),
            });
        }
        Ok(())
    }

    async fn insert_one(&self, _table: &str, row: &JsonValue) -> Result<()> {
        self.calls.lock().unwrap().push(Call::One {
            id: row["id"].as_i64().unwrap(),
        });
        if self.rejects(row) {
            return Err(StoreError::Rejected {
                status: 409,
                message: "duplicate key value violates unique constraint".into(),
            });
        }
        Ok(())
    }
}

fn rows(n: usize) -> Vec<JsonValue> {
    (0..n as i64).map(|i| json!({ "id": i })).collect()
}

#[tokio::test]
async fn clean_input_inserts_in_batches_only() {
    let store = MockStore::new(None);
    let outcome = insert_batched(&store, "T", &rows(250), 100).await.unwrap();

    assert_eq!(outcome.attempted, 250);
    assert_eq!(outcome.succeeded, 250);
    assert!(outcome.all_ok());
    // Three batch requests, last one short, no per-row fallback.
    assert_eq!(
        store.calls(),
        vec![
            Call::Many { len: 100 },
            Call::Many { len: 100 },
            Call::Many { len: 50 }
        ]
    );
}

#[tokio::test]
async fn poisoned_row_degrades_only_its_batch_and_run_continues() {
    // Row 120 lands in the second batch of [0,100), [100,200), [200,250).
    let store = MockStore::new(Some(120));
    let outcome = insert_batched(&store, "T", &rows(250), 100).await.unwrap();

    assert_eq!(outcome.attempted, 250);
    assert_eq!(outcome.succeeded, 249);
    assert_eq!(outcome.failures.len(), 1);
    assert_eq!(outcome.failures[0].index, 120);
    assert!(!outcome.all_ok());

    let calls = store.calls();
    // Batch 1 ok, batch 2 rejected then retried row by row, batch 3 still runs.
    assert_eq!(calls[0], Call::Many { len: 100 });
    assert_eq!(calls[1], Call::Many { len: 100 });
    let singles: Vec<_> = calls[2..102]
        .iter()
        .map(|c| match c {
            Call::One { id } => *id,
            other => panic!("expected per-row insert, got {other:?}"),
        })
        .collect();
    assert_eq!(singles, (100..200).collect::<Vec<i64>>());
    assert_eq!(calls[102], Call::Many { len: 50 });
    assert_eq!(calls.len(), 103);
}

#[tokio::test]
async fn batch_size_one_matches_the_fallback_outcome() {
    let store = MockStore::new(Some(120));
    let outcome = insert_batched(&store, "T", &rows(250), 1).await.unwrap();

    // Same per-row outcome as the fallback path of a larger batch size.
    assert_eq!(outcome.succeeded, 249);
    assert_eq!(outcome.failures.len(), 1);
    assert_eq!(outcome.failures[0].index, 120);
}

#[tokio::test]
async fn zero_batch_size_is_rejected_before_any_request() {
    let store = MockStore::new(None);
    let err = insert_batched(&store, "T", &rows(10), 0).await.unwrap_err();

    assert!(matches!(err, StoreError::InvalidBatchSize(0)));
    assert!(store.calls().is_empty());
}

#[tokio::test]
async fn empty_input_is_a_noop() {
    let store = MockStore::new(None);
    let outcome = insert_batched(&store, "T", &[], 100).await.unwrap();

    assert_eq!(outcome.attempted, 0);
    assert_eq!(outcome.succeeded, 0);
    assert!(outcome.all_ok());
    assert!(store.calls().is_empty());
}
