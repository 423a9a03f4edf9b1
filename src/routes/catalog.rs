use axum::extract::State;
use axum::http::header;
use axum::response::{IntoResponse, Response};

use crate::catalog::CatalogKind;
use crate::state::SharedState;

pub async fn regions(State(state): State<SharedState>) -> Response {
    document(&state, CatalogKind::Regions)
}

pub async fn pois(State(state): State<SharedState>) -> Response {
    document(&state, CatalogKind::Pois)
}

pub async fn courses(State(state): State<SharedState>) -> Response {
    document(&state, CatalogKind::Courses)
}

fn document(state: &SharedState, kind: CatalogKind) -> Response {
    (
        [(header::CONTENT_TYPE, "application/json")],
        state.catalog.get(kind).clone(),
    )
        .into_response()
}
