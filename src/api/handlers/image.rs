//! Handler serving QR code images.

use axum::{
    extract::{Path, State},
    http::header,
    response::IntoResponse,
};

use crate::error::AppError;
use crate::state::AppState;

/// Returns the PNG image for a QR code.
///
/// # Endpoint
///
/// `GET /qr/{id}`
///
/// The image encodes `{BASE_URL}/r/{id}` and never changes for a given
/// identifier, regardless of edits to the target URL. Inactive codes still
/// get an image.
///
/// # Errors
///
/// Returns 404 Not Found if the identifier is unknown.
pub async fn image_handler(
    Path(id): Path<String>,
    State(state): State<AppState>,
) -> Result<impl IntoResponse, AppError> {
    state.registry.get_existing(&id).await?;

    let png = state.images.render(&id)?;

    Ok(([(header::CONTENT_TYPE, "image/png")], png))
}
