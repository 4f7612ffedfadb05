//! QR image production for registered identifiers.

use serde_json::json;

use crate::error::AppError;
use crate::utils::qr_render::render_png;

/// Path prefix of the public redirect endpoint.
pub const REDIRECT_PATH_PREFIX: &str = "/r/";

/// Renders the QR image for an identifier.
///
/// The image encodes the canonical redirect link, never the target URL, so
/// it stays valid when the target is edited. Rendering is stateless; callers
/// check that the identifier exists before asking for an image.
#[derive(Debug, Clone)]
pub struct ImageService {
    base_url: String,
}

impl ImageService {
    /// Creates an image service for links under `base_url`.
    ///
    /// Trailing slashes on `base_url` are ignored.
    pub fn new(base_url: impl Into<String>) -> Self {
        let base_url = base_url.into().trim_end_matches('/').to_string();
        Self { base_url }
    }

    /// The link a scanner lands on: `base_url + "/r/" + id`.
    pub fn redirect_link(&self, id: &str) -> String {
        format!("{}{}{}", self.base_url, REDIRECT_PATH_PREFIX, id)
    }

    /// Renders the redirect link for `id` as PNG bytes.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Internal`] if encoding fails.
    pub fn render(&self, id: &str) -> Result<Vec<u8>, AppError> {
        let link = self.redirect_link(id);

        render_png(&link).map_err(|e| {
            AppError::internal(
                "Failed to render QR image",
                json!({ "id": id, "reason": e.to_string() }),
            )
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_redirect_link() {
        let service = ImageService::new("https://qr.example.com");
        assert_eq!(
            service.redirect_link("abc12345"),
            "https://qr.example.com/r/abc12345"
        );
    }

    #[test]
    fn test_trailing_slash_ignored() {
        let service = ImageService::new("https://qr.example.com/");
        assert_eq!(
            service.redirect_link("abc12345"),
            "https://qr.example.com/r/abc12345"
        );
    }

    #[test]
    fn test_render_depends_on_base_url() {
        let a = ImageService::new("https://a.example.com").render("abc12345").unwrap();
        let b = ImageService::new("https://b.example.com").render("abc12345").unwrap();
        assert_ne!(a, b);
    }

    #[test]
    fn test_render_is_stable_per_id() {
        let service = ImageService::new("https://qr.example.com");
        assert_eq!(
            service.render("abc12345").unwrap(),
            service.render("abc12345").unwrap()
        );
    }
}
