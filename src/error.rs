//! Application error type and its HTTP mapping.
//!
//! Every failure that can reach a client is an [`AppError`]. Handlers return
//! `Result<_, AppError>` and axum turns the error into a JSON body via
//! [`IntoResponse`]:
//!
//! ```json
//! { "error": "long_url is required", "code": "missing_field" }
//! ```
//!
//! `details` is included only when it carries information.

use axum::{
    Json,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use serde::Serialize;
use serde_json::{Map, Value, json};
use validator::ValidationErrors;

/// Errors surfaced by the service layer and HTTP handlers.
#[derive(Debug, thiserror::Error)]
pub enum AppError {
    /// A required request field is absent, `null` or empty.
    #[error("{field} is required")]
    MissingField { field: &'static str },

    /// The request was rejected by input validation.
    #[error("{message}")]
    Validation { message: String, details: Value },

    /// The requested resource does not exist.
    #[error("{message}")]
    NotFound { message: String, details: Value },

    /// No free short code was found within the configured attempt budget.
    #[error("Could not allocate a short code, try again")]
    CodeSpaceExhausted { attempts: usize },

    /// Store or other server-side failure.
    #[error("{message}")]
    Internal { message: String, details: Value },
}

/// JSON body written for every error response.
#[derive(Debug, Serialize)]
pub struct ErrorBody {
    pub error: String,
    pub code: &'static str,
    #[serde(skip_serializing_if = "is_empty_details")]
    pub details: Value,
}

fn is_empty_details(details: &Value) -> bool {
    match details {
        Value::Null => true,
        Value::Object(map) => map.is_empty(),
        _ => false,
    }
}

impl AppError {
    pub fn missing_field(field: &'static str) -> Self {
        Self::MissingField { field }
    }

    pub fn bad_request(message: impl Into<String>, details: Value) -> Self {
        Self::Validation {
            message: message.into(),
            details,
        }
    }

    pub fn not_found(message: impl Into<String>, details: Value) -> Self {
        Self::NotFound {
            message: message.into(),
            details,
        }
    }

    pub fn internal(message: impl Into<String>, details: Value) -> Self {
        Self::Internal {
            message: message.into(),
            details,
        }
    }

    /// HTTP status for this error.
    pub fn status_code(&self) -> StatusCode {
        match self {
            AppError::MissingField { .. } | AppError::Validation { .. } => StatusCode::BAD_REQUEST,
            AppError::NotFound { .. } => StatusCode::NOT_FOUND,
            AppError::CodeSpaceExhausted { .. } => StatusCode::SERVICE_UNAVAILABLE,
            AppError::Internal { .. } => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    /// Machine-readable error code.
    pub fn code(&self) -> &'static str {
        match self {
            AppError::MissingField { .. } => "missing_field",
            AppError::Validation { .. } => "validation_error",
            AppError::NotFound { .. } => "not_found",
            AppError::CodeSpaceExhausted { .. } => "code_space_exhausted",
            AppError::Internal { .. } => "internal_error",
        }
    }

    /// Builds the response body for this error.
    pub fn to_error_body(&self) -> ErrorBody {
        let details = match self {
            AppError::Validation { details, .. }
            | AppError::NotFound { details, .. }
            | AppError::Internal { details, .. } => details.clone(),
            AppError::CodeSpaceExhausted { attempts } => json!({ "attempts": attempts }),
            AppError::MissingField { .. } => Value::Null,
        };

        ErrorBody {
            error: self.to_string(),
            code: self.code(),
            details,
        }
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        (self.status_code(), Json(self.to_error_body())).into_response()
    }
}

impl From<sqlx::Error> for AppError {
    fn from(e: sqlx::Error) -> Self {
        tracing::error!("Database error: {}", e);
        AppError::internal("Database error", json!({}))
    }
}

impl From<ValidationErrors> for AppError {
    fn from(errors: ValidationErrors) -> Self {
        let mut fields = Map::new();

        for (field, field_errors) in errors.field_errors() {
            let messages: Vec<Value> = field_errors
                .iter()
                .map(|e| {
                    let message = e
                        .message
                        .as_ref()
                        .map(|m| m.to_string())
                        .unwrap_or_else(|| e.code.to_string());
                    Value::String(message)
                })
                .collect();
            fields.insert(field.to_string(), Value::Array(messages));
        }

        AppError::bad_request("Validation failed", Value::Object(fields))
    }
}
