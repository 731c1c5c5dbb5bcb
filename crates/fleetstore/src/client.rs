use async_trait::async_trait;
use serde_json::Value as JsonValue;

use crate::store::RecordStore;
use crate::{Result, StoreError};

/// PostgREST-backed store client.
///
/// Supabase exposes every table under `/rest/v1/<table>`; reads are GETs
/// with a `select` projection, writes are POSTs with a JSON body. The same
/// key goes into both the `apikey` header and the bearer token.
pub struct RestStore {
    base_url: String,
    api_key: String,
    client: reqwest::Client,
}

impl RestStore {
    pub fn new(base_url: impl Into<String>, api_key: impl Into<String>) -> Self {
        Self {
            base_url: base_url.into(),
            api_key: api_key.into(),
            client: reqwest::Client::new(),
        }
    }

    fn endpoint(&self, table: &str) -> String {
        format!("{}/rest/v1/{}", self.base_url.trim_end_matches('/'), table)
    }

    /// Map non-2xx responses to `StoreError::Rejected`, keeping the body
    /// (PostgREST puts the constraint violation details there).
    async fn check(resp: reqwest::Response) -> Result<reqwest::Response> {
        let status = resp.status();
        if status.is_success() {
            return Ok(resp);
        }
        let message = resp.text().await.unwrap_or_default();
        Err(StoreError::Rejected {
            status: status.as_u16(),
            message,
        })
    }
}

#[async_trait]
impl RecordStore for RestStore {
    async fn select(&self, table: &str, columns: &str) -> Result<Vec<JsonValue>> {
        let resp = self
            .client
            .get(self.endpoint(table))
            .query(&[("select", columns)])
            .header("apikey", &self.api_key)
            .bearer_auth(&self.api_key)
            .send()
            .await?;

        let rows = Self::check(resp).await?.json::<Vec<JsonValue>>().await?;
        Ok(rows)
    }

    async fn insert_many(&self, table: &str, rows: &[JsonValue]) -> Result<()> {
        let resp = self
            .client
            .post(self.endpoint(table))
            .header("apikey", &self.api_key)
            .bearer_auth(&self.api_key)
            .header("Prefer", "return=minimal")
            .json(&rows)
            .send()
            .await?;

        Self::check(resp).await?;
        Ok(())
    }

    async fn insert_one(&self, table: &str, row: &JsonValue) -> Result<()> {
        let resp = self
            .client
            .post(self.endpoint(table))
            .header("apikey", &self.api_key)
            .bearer_auth(&self.api_key)
            .header("Prefer", "return=minimal")
            .json(row)
            .send()
            .await?;

        Self::check(resp).await?;
        Ok(())
    }
}
