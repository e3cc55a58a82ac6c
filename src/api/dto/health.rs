//! DTOs for health check endpoint.

use serde::Serialize;

/// Overall service state.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum ServiceStatus {
    Healthy,
    Degraded,
}

/// State of a single dependency.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum ComponentStatus {
    Ok,
    Error,
}

#[derive(Debug, Serialize)]
pub struct HealthResponse {
    pub status: ServiceStatus,
    pub version: &'static str,
    pub checks: HealthChecks,
}

#[derive(Debug, Serialize)]
pub struct HealthChecks {
    pub database: ComponentCheck,
}

#[derive(Debug, Serialize)]
pub struct ComponentCheck {
    pub status: ComponentStatus,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,
}
