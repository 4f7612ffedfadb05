//! Repository trait for QR code data access.

use crate::domain::entities::{NewQrCode, QrCode, QrCodePatch};
use crate::error::AppError;
use async_trait::async_trait;
use chrono::{DateTime, Utc};

/// Repository interface for the QR code table.
///
/// Every method is a single atomic step against the underlying store:
/// implementations must not let two concurrent mutations of the same record
/// interleave (a lost scan increment is a bug).
///
/// # Implementations
///
/// - [`crate::infrastructure::persistence::MemoryQrRepository`] - process-memory table
/// - Test mocks available with `cfg(test)`
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait QrRepository: Send + Sync {
    /// Inserts a new QR code.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Conflict`] if the identifier is already taken.
    async fn insert(&self, new_qr: NewQrCode) -> Result<QrCode, AppError>;

    /// Finds a QR code by identifier.
    async fn find_by_id(&self, id: &str) -> Result<Option<QrCode>, AppError>;

    /// Returns a snapshot of every stored QR code, oldest first.
    async fn list(&self) -> Result<Vec<QrCode>, AppError>;

    /// Partially updates a QR code.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::NotFound`] if no record has this identifier.
    async fn update(&self, id: &str, patch: QrCodePatch) -> Result<QrCode, AppError>;

    /// Removes a QR code permanently.
    ///
    /// Returns `Ok(true)` if a record was removed, `Ok(false)` if none existed.
    async fn delete(&self, id: &str) -> Result<bool, AppError>;

    /// Counts one scan if the QR code exists and is active.
    ///
    /// The lookup, the activation check and the increment are one step:
    /// a concurrent deactivation either lands before (no scan, `Ok(None)`)
    /// or after (scan counted against the still-active record).
    ///
    /// Returns the target URL the scan resolved to, or `Ok(None)` without
    /// side effects if the identifier is unknown or inactive.
    async fn scan_if_active(
        &self,
        id: &str,
        scanned_at: DateTime<Utc>,
    ) -> Result<Option<String>, AppError>;
}
