//! Buildscope API /v1: JSON endpoints over the analysis engine.

pub mod handlers;

use std::sync::Arc;

use axum::extract::DefaultBodyLimit;
use axum::routing::{get, post};
use axum::Router;
use buildscope_decode::BuildPipeline;
use tower_http::trace::TraceLayer;

/// Request-body ceiling at the transport edge. The decoder enforces the
/// matching ceiling on the inflated payload itself.
pub const MAX_BODY_BYTES: usize = 1024 * 1024;

pub struct AppState {
    pub pipeline: BuildPipeline,
}

pub fn create_app(pipeline: BuildPipeline) -> Router {
    let state = Arc::new(AppState { pipeline });
    Router::new()
        .route("/v1/parse", post(handlers::parse))
        .route("/v1/analyze", post(handlers::analyze))
        .route("/v1/suggest", post(handlers::suggest))
        .route("/v1/cache/stats", get(handlers::cache_stats))
        .route("/v1/cache/invalidate", post(handlers::cache_invalidate))
        .route("/v1/health", get(handlers::health))
        .layer(DefaultBodyLimit::max(MAX_BODY_BYTES))
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}
