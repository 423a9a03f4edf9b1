pub mod catalog;
pub mod config;
pub mod error;
pub mod events;
pub mod routes;
pub mod state;
pub mod store;
pub mod time;

use std::sync::Arc;

use axum::extract::DefaultBodyLimit;
use axum::http::{HeaderName, HeaderValue};
use axum::Router;
use tower::ServiceBuilder;
use tower_http::services::{ServeDir, ServeFile};
use tower_http::set_header::SetResponseHeaderLayer;
use tower_http::trace::TraceLayer;

use crate::catalog::Catalog;
use crate::config::Config;
use crate::events::EventLogger;
use crate::state::{AppState, SharedState};

pub fn build_app(config: Config, catalog: Catalog, logger: EventLogger) -> Router {
    // Anything the API does not claim is a static asset, or else the SPA shell.
    let shell = ServeFile::new(config.public_dir.join("index.html"));
    let assets = ServeDir::new(&config.public_dir).fallback(shell);

    let body_limit = config.max_body_size;

    let state: SharedState = Arc::new(AppState {
        config,
        catalog,
        logger,
    });

    Router::new()
        .merge(routes::api_routes())
        .route("/health", axum::routing::get(health))
        .fallback_service(assets)
        .layer(
            ServiceBuilder::new()
                .layer(TraceLayer::new_for_http())
                .layer(DefaultBodyLimit::max(body_limit))
                .layer(SetResponseHeaderLayer::overriding(
                    HeaderName::from_static("x-content-type-options"),
                    HeaderValue::from_static("nosniff"),
                )),
        )
        .with_state(state)
}

async fn health() -> &'static str {
    "ok"
}
