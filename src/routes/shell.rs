use axum::extract::{Request, State};
use axum::http::{header, Method, StatusCode};
use axum::response::{IntoResponse, Response};
use tower::ServiceExt;
use tower_http::services::ServeFile;

use crate::state::SharedState;

/// Method fallback for API paths: GET and HEAD get the app shell like any
/// other unmatched page, everything else is refused.
pub async fn other_method(State(state): State<SharedState>, req: Request) -> Response {
    if req.method() == Method::GET || req.method() == Method::HEAD {
        return serve(&state, req).await;
    }

    (StatusCode::METHOD_NOT_ALLOWED, [(header::ALLOW, "POST")]).into_response()
}

async fn serve(state: &SharedState, req: Request) -> Response {
    let shell = ServeFile::new(state.config.public_dir.join("index.html"));
    match shell.oneshot(req).await {
        Ok(resp) => resp.into_response(),
        Err(never) => match never {},
    }
}
