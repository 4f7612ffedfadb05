//! QR code entity representing one dynamic redirect mapping.

use chrono::{DateTime, Utc};
use serde::Serialize;

/// A registered QR code and its current redirect target.
///
/// The identifier is what gets encoded (inside the canonical redirect link)
/// into the QR image, so it never changes. Everything the image points at,
/// namely `target_url`, can be edited freely afterwards.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct QrCode {
    pub id: String,
    pub title: String,
    pub target_url: String,
    pub scan_count: u64,
    pub created_at: DateTime<Utc>,
    pub updated_at: Option<DateTime<Utc>>,
    pub last_scanned_at: Option<DateTime<Utc>>,
    pub is_active: bool,
}

impl QrCode {
    /// Builds a freshly registered record: no scans, active, never updated.
    pub fn from_new(new_qr: NewQrCode) -> Self {
        Self {
            id: new_qr.id,
            title: new_qr.title,
            target_url: new_qr.target_url,
            scan_count: 0,
            created_at: new_qr.created_at,
            updated_at: None,
            last_scanned_at: None,
            is_active: true,
        }
    }

    /// Applies a partial update in place.
    ///
    /// `scan_count`, `created_at` and `last_scanned_at` are never touched here.
    pub fn apply(&mut self, patch: QrCodePatch) {
        if let Some(title) = patch.title {
            self.title = title;
        }
        if let Some(target_url) = patch.target_url {
            self.target_url = target_url;
        }
        if let Some(is_active) = patch.is_active {
            self.is_active = is_active;
        }
        self.updated_at = Some(patch.updated_at);
    }

    /// Counts one successful scan.
    pub fn register_scan(&mut self, scanned_at: DateTime<Utc>) {
        self.scan_count += 1;
        self.last_scanned_at = Some(scanned_at);
    }
}

/// Input data for registering a new QR code.
///
/// `target_url` is expected to be normalized already.
#[derive(Debug, Clone)]
pub struct NewQrCode {
    pub id: String,
    pub title: String,
    pub target_url: String,
    pub created_at: DateTime<Utc>,
}

/// Partial update for an existing QR code.
///
/// `None` fields are left unchanged.
#[derive(Debug, Clone)]
pub struct QrCodePatch {
    pub title: Option<String>,
    pub target_url: Option<String>,
    pub is_active: Option<bool>,
    pub updated_at: DateTime<Utc>,
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Duration;

    fn new_qr(id: &str) -> NewQrCode {
        NewQrCode {
            id: id.to_string(),
            title: "Menu".to_string(),
            target_url: "https://example.com".to_string(),
            created_at: Utc::now(),
        }
    }

    #[test]
    fn test_from_new_starts_clean() {
        let qr = QrCode::from_new(new_qr("abc12345"));

        assert_eq!(qr.id, "abc12345");
        assert_eq!(qr.scan_count, 0);
        assert!(qr.is_active);
        assert!(qr.updated_at.is_none());
        assert!(qr.last_scanned_at.is_none());
    }

    #[test]
    fn test_apply_only_touches_provided_fields() {
        let mut qr = QrCode::from_new(new_qr("abc12345"));
        let created_at = qr.created_at;
        let now = Utc::now();

        qr.apply(QrCodePatch {
            title: None,
            target_url: Some("https://new.example.com".to_string()),
            is_active: None,
            updated_at: now,
        });

        assert_eq!(qr.title, "Menu");
        assert_eq!(qr.target_url, "https://new.example.com");
        assert!(qr.is_active);
        assert_eq!(qr.created_at, created_at);
        assert_eq!(qr.updated_at, Some(now));
    }

    #[test]
    fn test_apply_can_deactivate() {
        let mut qr = QrCode::from_new(new_qr("abc12345"));

        qr.apply(QrCodePatch {
            title: None,
            target_url: None,
            is_active: Some(false),
            updated_at: Utc::now(),
        });

        assert!(!qr.is_active);
    }

    #[test]
    fn test_register_scan() {
        let mut qr = QrCode::from_new(new_qr("abc12345"));
        let first = Utc::now();
        let second = first + Duration::seconds(5);

        qr.register_scan(first);
        qr.register_scan(second);

        assert_eq!(qr.scan_count, 2);
        assert_eq!(qr.last_scanned_at, Some(second));
    }
}
