//! Handlers for the JSON QR code API (list, create, read, update, delete).

use axum::{
    Json,
    extract::{Path, State},
    http::StatusCode,
};
use tracing::info;
use validator::Validate;

use crate::api::dto::qr_code::{
    CreateQrRequest, MessageResponse, QrCodeListResponse, QrCodeResponse, UpdateQrRequest,
};
use crate::application::services::QrCodeChanges;
use crate::error::AppError;
use crate::state::AppState;

/// Title given to codes created without one.
pub const DEFAULT_TITLE: &str = "Untitled";

/// Lists every registered QR code, oldest first.
///
/// # Endpoint
///
/// `GET /` and `GET /api/qr`
pub async fn list_handler(
    State(state): State<AppState>,
) -> Result<Json<QrCodeListResponse>, AppError> {
    let all = state.registry.list_all().await?;

    let items: Vec<QrCodeResponse> = all
        .into_iter()
        .map(|qr| QrCodeResponse::from_entity(qr, &state.images))
        .collect();

    Ok(Json(QrCodeListResponse {
        total: items.len(),
        items,
    }))
}

/// Creates a QR code.
///
/// # Endpoint
///
/// `POST /api/qr`
///
/// # Request Body
///
/// ```json
/// { "title": "Menu", "target_url": "example.com/menu" }
/// ```
///
/// # Errors
///
/// Returns 400 Bad Request if validation fails.
pub async fn create_handler(
    State(state): State<AppState>,
    Json(payload): Json<CreateQrRequest>,
) -> Result<(StatusCode, Json<QrCodeResponse>), AppError> {
    payload.validate()?;

    let title = payload
        .title
        .filter(|t| !t.is_empty())
        .unwrap_or_else(|| DEFAULT_TITLE.to_string());
    let qr = state.registry.create(title, &payload.target_url).await?;
    info!(id = %qr.id, target = %qr.target_url, "QR code created");

    Ok((
        StatusCode::CREATED,
        Json(QrCodeResponse::from_entity(qr, &state.images)),
    ))
}

/// Returns the stored data for one QR code.
///
/// # Endpoint
///
/// `GET /api/qr/{id}`
///
/// # Errors
///
/// Returns 404 Not Found if the identifier is unknown.
pub async fn get_handler(
    Path(id): Path<String>,
    State(state): State<AppState>,
) -> Result<Json<QrCodeResponse>, AppError> {
    let qr = state.registry.get_existing(&id).await?;
    Ok(Json(QrCodeResponse::from_entity(qr, &state.images)))
}

/// Partially updates a QR code.
///
/// # Endpoint
///
/// `PATCH /api/qr/{id}`
///
/// # Request Body
///
/// All fields are optional. Only provided fields are changed.
///
/// ```json
/// { "title": "Dinner menu", "target_url": "https://example.com/dinner", "is_active": false }
/// ```
///
/// # Errors
///
/// Returns 400 Bad Request if validation fails.
/// Returns 404 Not Found if the identifier is unknown.
pub async fn update_handler(
    Path(id): Path<String>,
    State(state): State<AppState>,
    Json(payload): Json<UpdateQrRequest>,
) -> Result<Json<QrCodeResponse>, AppError> {
    payload.validate()?;

    let changes = QrCodeChanges {
        title: payload.title,
        target_url: payload.target_url,
        is_active: payload.is_active,
    };

    let qr = state.registry.apply_changes(&id, changes).await?;
    info!(id = %qr.id, target = %qr.target_url, active = qr.is_active, "QR code updated");

    Ok(Json(QrCodeResponse::from_entity(qr, &state.images)))
}

/// Permanently deletes a QR code.
///
/// # Endpoint
///
/// `DELETE /delete/{id}` and `DELETE /api/qr/{id}`
///
/// Printed copies of the code stop working immediately. The identifier is
/// retired and never handed out again.
///
/// # Errors
///
/// Returns 404 Not Found if the identifier is unknown.
pub async fn delete_handler(
    Path(id): Path<String>,
    State(state): State<AppState>,
) -> Result<Json<MessageResponse>, AppError> {
    if !state.registry.delete(&id).await? {
        return Err(AppError::qr_not_found(&id));
    }

    info!(id = %id, "QR code deleted");

    Ok(Json(MessageResponse {
        message: "QR code deleted successfully".to_string(),
    }))
}
