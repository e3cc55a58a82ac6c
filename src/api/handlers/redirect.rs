//! Handler for short URL redirect.

use axum::{
    extract::{Path, State},
    http::{HeaderValue, StatusCode, header},
    response::{IntoResponse, Response},
};
use serde_json::json;

use crate::error::AppError;
use crate::state::AppState;

/// Redirects a short code to its long URL.
///
/// # Endpoint
///
/// `GET /{short_code}`
///
/// Responds `302 Found` with the stored `long_url` as `Location`, byte for
/// byte.
///
/// # Errors
///
/// Returns 404 Not Found if the short code doesn't exist.
pub async fn redirect_handler(
    Path(short_code): Path<String>,
    State(state): State<AppState>,
) -> Result<Response, AppError> {
    let short_url = state.shortener_service.resolve(&short_code).await?;

    let location = HeaderValue::from_str(&short_url.long_url).map_err(|_| {
        AppError::internal(
            "Stored URL is not a valid redirect target",
            json!({ "short_code": short_code }),
        )
    })?;

    Ok((StatusCode::FOUND, [(header::LOCATION, location)]).into_response())
}
