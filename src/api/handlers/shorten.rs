//! Handler for the shortening endpoint.

use axum::{
    Json,
    extract::{State, rejection::JsonRejection},
    http::StatusCode,
};
use serde_json::json;
use validator::Validate;

use crate::api::dto::shorten::{ShortUrlResponse, ShortenRequest};
use crate::error::AppError;
use crate::state::AppState;

/// Returns the short URL mapping for a long URL, creating it if needed.
///
/// # Endpoint
///
/// `POST /api/shorten/`
///
/// # Request Body
///
/// ```json
/// { "long_url": "https://example.com" }
/// ```
///
/// # Response
///
/// `201 Created` for a new mapping, `200 OK` if the URL was already shortened:
///
/// ```json
/// { "id": 1, "long_url": "https://example.com", "short_code": "aZ3kP9qX" }
/// ```
///
/// # Errors
///
/// - 400 `{"error": "long_url is required"}` if `long_url` is missing or empty
/// - 400 with field-level details if validation fails or the body is not JSON
/// - 503 if no free short code could be allocated
pub async fn shorten_handler(
    State(state): State<AppState>,
    payload: Result<Json<ShortenRequest>, JsonRejection>,
) -> Result<(StatusCode, Json<ShortUrlResponse>), AppError> {
    let Json(payload) = payload.map_err(|rejection| {
        AppError::bad_request(
            "Invalid request body",
            json!({ "reason": rejection.body_text() }),
        )
    })?;

    payload.validate()?;

    let shortened = state.shortener_service.shorten(payload.long_url).await?;

    let status = if shortened.is_created() {
        StatusCode::CREATED
    } else {
        StatusCode::OK
    };

    Ok((status, Json(shortened.into_short_url().into())))
}
