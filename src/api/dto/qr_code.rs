//! DTOs for the JSON QR code API.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use validator::Validate;

use crate::application::services::ImageService;
use crate::domain::entities::QrCode;

/// Request body for `POST /api/qr`.
#[derive(Debug, Deserialize, Validate)]
pub struct CreateQrRequest {
    /// Human label; defaults to `"Untitled"` when absent.
    #[validate(length(max = 200, message = "Title must be at most 200 characters"))]
    pub title: Option<String>,

    /// Destination URL. A missing scheme is filled in with `https://`.
    #[validate(length(min = 1, max = 2048, message = "Target URL must be 1-2048 characters"))]
    pub target_url: String,
}

/// Request body for `PATCH /api/qr/{id}`.
///
/// All fields are optional; only provided fields are changed. An empty
/// `title` is treated as absent.
#[derive(Debug, Deserialize, Validate)]
pub struct UpdateQrRequest {
    #[validate(length(max = 200, message = "Title must be at most 200 characters"))]
    pub title: Option<String>,

    #[validate(length(min = 1, max = 2048, message = "Target URL must be 1-2048 characters"))]
    pub target_url: Option<String>,

    /// Enables or disables redirects for this code.
    pub is_active: Option<bool>,
}

/// JSON representation of a QR code.
#[derive(Debug, Serialize)]
pub struct QrCodeResponse {
    pub id: String,
    pub title: String,
    pub target_url: String,
    pub scan_count: u64,
    pub created_at: DateTime<Utc>,
    pub updated_at: Option<DateTime<Utc>>,
    pub last_scanned_at: Option<DateTime<Utc>>,
    pub is_active: bool,
    /// The link encoded in the QR image.
    pub redirect_link: String,
    /// Relative path of the PNG image.
    pub image_url: String,
}

impl QrCodeResponse {
    pub fn from_entity(qr: QrCode, images: &ImageService) -> Self {
        Self {
            redirect_link: images.redirect_link(&qr.id),
            image_url: format!("/qr/{}", qr.id),
            id: qr.id,
            title: qr.title,
            target_url: qr.target_url,
            scan_count: qr.scan_count,
            created_at: qr.created_at,
            updated_at: qr.updated_at,
            last_scanned_at: qr.last_scanned_at,
            is_active: qr.is_active,
        }
    }
}

/// Listing of every registered QR code.
#[derive(Debug, Serialize)]
pub struct QrCodeListResponse {
    pub total: usize,
    pub items: Vec<QrCodeResponse>,
}

/// Confirmation body returned by deletions.
#[derive(Debug, Serialize)]
pub struct MessageResponse {
    pub message: String,
}
