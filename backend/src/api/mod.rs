//! API module
//!
//! Contains the HTTP router and request handlers

pub mod health;
pub mod lookup;
pub mod middleware;

use crate::state::AppState;
use axum::{routing::get, Router};
use std::path::Path;
use tower_http::{cors::CorsLayer, services::ServeDir, trace::TraceLayer};

/// Build the application router
///
/// API routes live under `/api`; every other path is served from `public_dir`.
pub fn router(state: AppState, public_dir: impl AsRef<Path>) -> Router {
    Router::new()
        .route("/api/health", get(health::health_check))
        .route("/api/lookup", get(lookup::lookup))
        .fallback_service(ServeDir::new(public_dir.as_ref()))
        // Middleware (order matters - request_id should be first)
        .layer(axum::middleware::from_fn(middleware::request_id_middleware))
        .layer(
            TraceLayer::new_for_http().make_span_with(|request: &axum::http::Request<_>| {
                tracing::info_span!(
                    "http_request",
                    method = %request.method(),
                    uri = %request.uri(),
                )
            }),
        )
        .layer(CorsLayer::permissive())
        .with_state(state)
}
