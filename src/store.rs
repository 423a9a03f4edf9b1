use async_trait::async_trait;
use serde::Serialize;

/// Table that receives one row per logged event.
pub const LOG_TABLE: &str = "logs";

/// A row in the `logs` table.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct LogRecord {
    pub user_id: Option<serde_json::Value>,
    pub action: Option<serde_json::Value>,
    pub spot_id: Option<serde_json::Value>,
    pub timestamp: String,
}

/// Any failure talking to the store. Network, auth and constraint errors all
/// land here; only the message differs.
#[derive(Debug, Clone, PartialEq)]
pub struct StoreError {
    pub message: String,
}

impl std::fmt::Display for StoreError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.message)
    }
}

impl std::error::Error for StoreError {}

impl From<String> for StoreError {
    fn from(s: String) -> Self {
        StoreError { message: s }
    }
}

impl From<&str> for StoreError {
    fn from(s: &str) -> Self {
        StoreError {
            message: s.to_string(),
        }
    }
}

#[async_trait]
pub trait LogStore: Send + Sync {
    /// Append one record. A single attempt, never retried.
    async fn insert(&self, record: &LogRecord) -> Result<(), StoreError>;
}

/// Inserts rows through the Supabase REST (PostgREST) interface.
pub struct SupabaseStore {
    client: reqwest::Client,
    base_url: String,
    key: String,
}

impl SupabaseStore {
    pub fn new(base_url: &str, key: &str) -> Result<Self, StoreError> {
        // No request timeout: an insert waits for the store or the transport to give up.
        let client = reqwest::Client::builder()
            .build()
            .map_err(|e| StoreError::from(format!("Failed to build HTTP client: {e}")))?;

        Ok(Self {
            client,
            base_url: base_url.trim_end_matches('/').to_string(),
            key: key.to_string(),
        })
    }

    fn table_url(&self, table: &str) -> String {
        format!("{}/rest/v1/{table}", self.base_url)
    }
}

#[async_trait]
impl LogStore for SupabaseStore {
    async fn insert(&self, record: &LogRecord) -> Result<(), StoreError> {
        let resp = self
            .client
            .post(self.table_url(LOG_TABLE))
            .header("apikey", &self.key)
            .bearer_auth(&self.key)
            .header("Prefer", "return=minimal")
            .json(record)
            .send()
            .await
            .map_err(|e| StoreError::from(e.to_string()))?;

        let status = resp.status();
        if status.is_success() {
            return Ok(());
        }

        let body = resp.text().await.unwrap_or_default();
        Err(StoreError::from(error_message(status, &body)))
    }
}

/// PostgREST reports failures as `{"message": ..., "code": ..., "details": ..., "hint": ...}`.
/// Fall back to the raw body, then to the status line.
fn error_message(status: reqwest::StatusCode, body: &str) -> String {
    let from_json = serde_json::from_str::<serde_json::Value>(body)
        .ok()
        .and_then(|v| v.get("message").and_then(|m| m.as_str()).map(|s| s.to_string()))
        .filter(|s| !s.is_empty());

    if let Some(message) = from_json {
        return message;
    }

    let body = body.trim();
    if !body.is_empty() {
        return body.chars().take(1024).collect();
    }

    status.to_string()
}
