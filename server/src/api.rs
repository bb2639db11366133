//! HTTP routes for the proxy
//!
//! Every `GET` other than `/health` answers with the current departure report.
//! The response is always `200`; failures travel inside the JSON body so the
//! device has a single decoding path.

use std::sync::Arc;

use axum::extract::State;
use axum::http::Uri;
use axum::response::IntoResponse;
use axum::routing::get;
use axum::{Json, Router};
use serde_json::json;
use tower_http::trace::TraceLayer;
use tracing::info;

use crate::bart::DepartureSource;

/// Shared handler state.
#[derive(Clone)]
pub struct AppState {
    pub source: Arc<dyn DepartureSource>,
}

impl AppState {
    pub fn new(source: Arc<dyn DepartureSource>) -> Self { Self { source } }
}

/// Build the router
pub fn build_router(state: AppState) -> Router {
    Router::new()
        .route("/health", get(health_check))
        .route("/", get(departures))
        .route("/*path", get(departures))
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

/// Departure report for any path
async fn departures(
    State(state): State<AppState>,
    uri: Uri,
) -> impl IntoResponse {
    let report = state.source.report().await;
    info!(path = %uri.path(), error = report.is_error(), "Served departures");
    Json(report)
}

/// Liveness probe. Does not touch the upstream API.
async fn health_check() -> impl IntoResponse {
    Json(json!({
        "status": "UP",
        "version": env!("CARGO_PKG_VERSION"),
    }))
}
