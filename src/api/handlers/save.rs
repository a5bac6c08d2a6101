//! Handler for the save URL endpoint.

use axum::{Json, extract::State, http::StatusCode};
use validator::Validate;

use crate::api::dto::save::{SaveRequest, SaveResponse};
use crate::error::AppError;
use crate::state::AppState;

/// Saves a URL under a short alias.
///
/// # Endpoint
///
/// `POST /api/url`
///
/// # Request Body
///
/// ```json
/// {
///   "url": "https://example.com",
///   "alias": "ex1"  // optional
/// }
/// ```
///
/// When no alias is supplied, a random 6-character alias is generated.
///
/// # Response
///
/// `201 Created` with:
///
/// ```json
/// {
///   "id": 1,
///   "alias": "ex1",
///   "short_url": "http://localhost:3000/ex1"
/// }
/// ```
///
/// # Errors
///
/// Returns 400 Bad Request if validation fails.
/// Returns 409 Conflict if the alias is already taken.
pub async fn save_handler(
    State(state): State<AppState>,
    Json(payload): Json<SaveRequest>,
) -> Result<(StatusCode, Json<SaveResponse>), AppError> {
    payload.validate()?;

    let record = state
        .url_service
        .save_url(payload.url, payload.alias)
        .await?;

    let short_url = state.url_service.short_url(&record.alias);

    Ok((
        StatusCode::CREATED,
        Json(SaveResponse {
            id: record.id,
            alias: record.alias,
            short_url,
        }),
    ))
}
