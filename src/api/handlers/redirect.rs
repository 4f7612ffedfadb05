//! Handler for QR code scans.

use axum::{
    extract::{Path, State},
    response::{IntoResponse, Redirect},
};

use crate::error::AppError;
use crate::state::AppState;

/// Redirects a scanned QR code to its current target.
///
/// # Endpoint
///
/// `GET /r/{id}`
///
/// # Request Flow
///
/// 1. Resolve the identifier (must exist and be active)
/// 2. Record the scan
/// 3. Return 307 Temporary Redirect
///
/// Always 307: the target may change between scans.
///
/// # Errors
///
/// Returns 404 Not Found if the identifier is unknown or inactive.
pub async fn redirect_handler(
    Path(id): Path<String>,
    State(state): State<AppState>,
) -> Result<impl IntoResponse, AppError> {
    let target_url = state.resolver.resolve(&id).await?;
    Ok(Redirect::temporary(&target_url))
}
