use std::sync::Arc;

use serde::Deserialize;

use crate::store::{LogRecord, LogStore, StoreError};
use crate::time::Clock;

/// An interaction event as sent by the frontend.
///
/// Every field is optional and accepts any JSON value. Unknown fields,
/// including a client-side `timestamp`, are dropped.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct LogEvent {
    pub user_id: Option<serde_json::Value>,
    pub action: Option<serde_json::Value>,
    pub spot_id: Option<serde_json::Value>,
}

impl LogEvent {
    /// Parse a request body without ever rejecting it. Anything that is not a
    /// JSON object becomes an event with no fields set.
    pub fn from_body(body: &[u8]) -> Self {
        match serde_json::from_slice::<serde_json::Value>(body) {
            Ok(value @ serde_json::Value::Object(_)) => {
                serde_json::from_value(value).unwrap_or_default()
            }
            Ok(_) | Err(_) => {
                tracing::debug!("Log body is not a JSON object, recording empty event");
                LogEvent::default()
            }
        }
    }
}

pub struct EventLogger {
    store: Arc<dyn LogStore>,
    clock: Arc<dyn Clock>,
}

impl EventLogger {
    pub fn new(store: Arc<dyn LogStore>, clock: Arc<dyn Clock>) -> Self {
        Self { store, clock }
    }

    /// Stamp the event with the server's Tokyo time and persist it once.
    pub async fn log_event(&self, event: LogEvent) -> Result<(), StoreError> {
        let timestamp = self.clock.tokyo_timestamp();

        tracing::info!(action = ?event.action, %timestamp, "Log event received");

        let record = LogRecord {
            user_id: event.user_id,
            action: event.action,
            spot_id: event.spot_id,
            timestamp,
        };

        match self.store.insert(&record).await {
            Ok(()) => {
                tracing::info!("Log event stored");
                Ok(())
            }
            Err(e) => {
                tracing::error!("Failed to store log event: {e}");
                Err(e)
            }
        }
    }
}
