//! QR code registry: creation, editing, lookup and deletion.

use std::sync::Arc;

use chrono::Utc;
use serde_json::json;
use tracing::debug;

use crate::domain::entities::{NewQrCode, QrCode, QrCodePatch};
use crate::domain::repositories::QrRepository;
use crate::error::AppError;
use crate::utils::code_generator::generate_id;
use crate::utils::url_normalizer::normalize_target_url;

/// Field changes accepted by [`RegistryService::apply_changes`].
///
/// `None` leaves the field as is. An empty `title` also counts as "no change".
#[derive(Debug, Clone, Default)]
pub struct QrCodeChanges {
    pub title: Option<String>,
    pub target_url: Option<String>,
    pub is_active: Option<bool>,
}

/// The single mutation surface for QR code records.
///
/// Owns identifier generation and target URL normalization; storage and its
/// locking discipline are delegated to the repository.
pub struct RegistryService<R: QrRepository> {
    repository: Arc<R>,
}

impl<R: QrRepository> RegistryService<R> {
    pub fn new(repository: Arc<R>) -> Self {
        Self { repository }
    }

    /// Registers a new QR code.
    ///
    /// The identifier is freshly generated; `target_url` is normalized to
    /// carry a scheme. The record starts active with zero scans.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Internal`] only if no free identifier could be
    /// generated.
    pub async fn create(&self, title: String, target_url: &str) -> Result<QrCode, AppError> {
        const MAX_ATTEMPTS: usize = 10;

        let target_url = normalize_target_url(target_url);

        for _ in 0..MAX_ATTEMPTS {
            let new_qr = NewQrCode {
                id: generate_id()?,
                title: title.clone(),
                target_url: target_url.clone(),
                created_at: Utc::now(),
            };

            match self.repository.insert(new_qr).await {
                Ok(qr) => return Ok(qr),
                Err(AppError::Conflict { details, .. }) => {
                    debug!(?details, "Identifier collision, retrying");
                }
                Err(e) => return Err(e),
            }
        }

        Err(AppError::internal(
            "Failed to generate unique identifier",
            json!({ "reason": "Too many collisions" }),
        ))
    }

    /// Replaces the target URL and, if non-empty, the title.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::NotFound`] if `id` is unknown.
    pub async fn update(&self, id: &str, title: &str, target_url: &str) -> Result<QrCode, AppError> {
        self.apply_changes(
            id,
            QrCodeChanges {
                title: Some(title.to_string()),
                target_url: Some(target_url.to_string()),
                is_active: None,
            },
        )
        .await
    }

    /// Opens or closes the activation gate checked on every scan.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::NotFound`] if `id` is unknown.
    pub async fn set_active(&self, id: &str, is_active: bool) -> Result<QrCode, AppError> {
        self.apply_changes(
            id,
            QrCodeChanges {
                is_active: Some(is_active),
                ..Default::default()
            },
        )
        .await
    }

    /// Applies an arbitrary combination of field changes.
    ///
    /// Scan counters and `created_at` are never affected.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::NotFound`] if `id` is unknown.
    pub async fn apply_changes(&self, id: &str, changes: QrCodeChanges) -> Result<QrCode, AppError> {
        let patch = QrCodePatch {
            title: changes.title.filter(|t| !t.is_empty()),
            target_url: changes.target_url.as_deref().map(normalize_target_url),
            is_active: changes.is_active,
            updated_at: Utc::now(),
        };

        self.repository.update(id, patch).await
    }

    /// Looks up a QR code without side effects.
    pub async fn get(&self, id: &str) -> Result<Option<QrCode>, AppError> {
        self.repository.find_by_id(id).await
    }

    /// Looks up a QR code, failing when it does not exist.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::NotFound`] if `id` is unknown.
    pub async fn get_existing(&self, id: &str) -> Result<QrCode, AppError> {
        self.get(id).await?.ok_or_else(|| AppError::qr_not_found(id))
    }

    /// Permanently removes a QR code. Returns whether anything was removed.
    pub async fn delete(&self, id: &str) -> Result<bool, AppError> {
        self.repository.delete(id).await
    }

    /// Snapshot of all QR codes, oldest first.
    pub async fn list_all(&self) -> Result<Vec<QrCode>, AppError> {
        self.repository.list().await
    }

    /// Counts one scan and returns the target it resolved to.
    ///
    /// Unknown and inactive identifiers are ignored and yield `None`. The
    /// activation check and the increment happen in one repository step.
    pub async fn record_scan(&self, id: &str) -> Result<Option<String>, AppError> {
        let target = self.repository.scan_if_active(id, Utc::now()).await?;
        if target.is_none() {
            debug!(id, "Scan for unknown or inactive QR code ignored");
        }
        Ok(target)
    }
}
