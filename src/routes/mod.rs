pub mod catalog;
pub mod log;
pub mod shell;

use axum::routing::{get, post};
use axum::Router;

use crate::state::SharedState;

// Each path also answers with a trailing slash.
pub fn api_routes() -> Router<SharedState> {
    Router::new()
        // Catalog
        .route("/api/regions", get(catalog::regions))
        .route("/api/regions/", get(catalog::regions))
        .route("/api/pois", get(catalog::pois))
        .route("/api/pois/", get(catalog::pois))
        .route("/api/courses", get(catalog::courses))
        .route("/api/courses/", get(catalog::courses))
        // Event log; a GET here is just another page of the app
        .route("/api/log", post(log::create).fallback(shell::other_method))
        .route("/api/log/", post(log::create).fallback(shell::other_method))
}
