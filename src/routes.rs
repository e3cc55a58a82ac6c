//! Top-level router configuration.
//!
//! # Route Structure
//!
//! - `POST /api/shorten/`  - Create or fetch a short URL
//! - `GET  /health`        - Health check (store connectivity)
//! - `GET  /{short_code}`  - Redirect to the long URL
//!
//! Trailing slashes are trimmed before routing, so `/api/shorten` and
//! `/api/shorten/` reach the same handler.

use crate::api;
use crate::api::handlers::{health_handler, redirect_handler};
use crate::api::middleware::tracing;
use crate::state::AppState;
use axum::Router;
use axum::routing::get;
use tower::Layer;
use tower_http::normalize_path::{NormalizePath, NormalizePathLayer};

/// Constructs the application router with all routes and middleware.
///
/// The path normalization has to wrap the router rather than be added with
/// `Router::layer`, which only runs after a route has matched.
pub fn app_router(state: AppState) -> NormalizePath<Router> {
    let router = Router::new()
        .route("/health", get(health_handler))
        .route("/{short_code}", get(redirect_handler))
        .nest("/api", api::routes::api_routes())
        .with_state(state)
        .layer(tracing::layer());

    NormalizePathLayer::trim_trailing_slash().layer(router)
}
