use axum::body::Bytes;
use axum::extract::State;
use axum::Json;
use serde_json::{json, Value};

use crate::error::AppError;
use crate::events::LogEvent;
use crate::state::SharedState;

/// Accepts any body. The content type is not checked and missing fields are
/// stored as null.
pub async fn create(
    State(state): State<SharedState>,
    body: Bytes,
) -> Result<Json<Value>, AppError> {
    let event = LogEvent::from_body(&body);

    state.logger.log_event(event).await?;

    Ok(Json(json!({ "status": "ok" })))
}
