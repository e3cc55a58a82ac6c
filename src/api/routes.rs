//! API route configuration.

use crate::api::handlers::shorten_handler;
use crate::state::AppState;
use axum::{Router, routing::post};

/// API routes, nested under `/api`.
///
/// # Endpoints
///
/// - `POST /shorten` - Create or fetch the short URL for a long URL
pub fn api_routes() -> Router<AppState> {
    Router::new().route("/shorten", post(shorten_handler))
}
