//! Handler for the delete URL endpoint.

use axum::{
    extract::{Path, State},
    http::StatusCode,
};

use crate::error::AppError;
use crate::state::AppState;

/// Deletes the mapping stored under an alias.
///
/// # Endpoint
///
/// `DELETE /api/url/{alias}`
///
/// # Response
///
/// `204 No Content` on success.
///
/// # Errors
///
/// Returns 404 Not Found if the alias doesn't exist.
pub async fn delete_handler(
    Path(alias): Path<String>,
    State(state): State<AppState>,
) -> Result<StatusCode, AppError> {
    state.url_service.delete(&alias).await?;

    Ok(StatusCode::NO_CONTENT)
}
