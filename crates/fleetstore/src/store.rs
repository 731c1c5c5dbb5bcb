use async_trait::async_trait;
use serde_json::Value as JsonValue;

use crate::Result;

/// Remote store seam. Rows travel as flat JSON objects; the store decides
/// what a rejection looks like (constraint violation, auth, ...).
#[async_trait]
pub trait RecordStore: Send + Sync {
    /// Select rows from `table`, narrowed to the given comma-separated
    /// column projection.
    async fn select(&self, table: &str, columns: &str) -> Result<Vec<JsonValue>>;

    /// Insert many rows in one request. Rejection of any row fails the
    /// whole request.
    async fn insert_many(&self, table: &str, rows: &[JsonValue]) -> Result<()>;

    /// Insert a single row.
    async fn insert_one(&self, table: &str, row: &JsonValue) -> Result<()>;
}
