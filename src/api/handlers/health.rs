//! Handler for health check endpoint.

use axum::{Json, extract::State, http::StatusCode};

use crate::api::dto::health::{
    ComponentCheck, ComponentStatus, HealthChecks, HealthResponse, ServiceStatus,
};
use crate::state::AppState;

/// Reports whether the mapping store is reachable.
///
/// # Endpoint
///
/// `GET /health`
///
/// # Response Codes
///
/// - **200 OK**: store reachable
/// - **503 Service Unavailable**: store check failed
///
/// ```json
/// {
///   "status": "healthy",
///   "version": "0.1.0",
///   "checks": { "database": { "status": "ok" } }
/// }
/// ```
pub async fn health_handler(State(state): State<AppState>) -> (StatusCode, Json<HealthResponse>) {
    let database = match state.shortener_service.ping_store().await {
        Ok(()) => ComponentCheck {
            status: ComponentStatus::Ok,
            message: None,
        },
        Err(e) => ComponentCheck {
            status: ComponentStatus::Error,
            message: Some(e.to_string()),
        },
    };

    let (code, status) = match database.status {
        ComponentStatus::Ok => (StatusCode::OK, ServiceStatus::Healthy),
        ComponentStatus::Error => (StatusCode::SERVICE_UNAVAILABLE, ServiceStatus::Degraded),
    };

    let response = HealthResponse {
        status,
        version: env!("CARGO_PKG_VERSION"),
        checks: HealthChecks { database },
    };

    (code, Json(response))
}
