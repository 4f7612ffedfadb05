//! Redirect resolution for scanned QR codes.

use std::sync::Arc;

use tracing::debug;

use crate::application::services::RegistryService;
use crate::domain::repositories::QrRepository;
use crate::error::AppError;

/// Resolves scanned identifiers to their current destination.
///
/// A scan is counted only when resolution succeeds. Unknown and deactivated
/// identifiers are rejected with the same [`AppError::NotFound`], so callers
/// cannot tell the two apart.
pub struct ResolverService<R: QrRepository> {
    registry: Arc<RegistryService<R>>,
}

impl<R: QrRepository> ResolverService<R> {
    pub fn new(registry: Arc<RegistryService<R>>) -> Self {
        Self { registry }
    }

    /// Returns the target URL for `id` and records one scan.
    ///
    /// The activation check and the scan are a single registry step, so a
    /// concurrent deactivation never lets a scan through on a disabled code.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::NotFound`] if `id` is unknown or inactive; no scan
    /// is recorded in that case.
    pub async fn resolve(&self, id: &str) -> Result<String, AppError> {
        let target_url = self
            .registry
            .record_scan(id)
            .await?
            .ok_or_else(|| AppError::qr_not_found(id))?;

        metrics::counter!("qr_scans_total").increment(1);
        debug!(id, target = %target_url, "QR code scanned");

        Ok(target_url)
    }
}
