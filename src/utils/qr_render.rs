//! QR matrix rendering to PNG.
//!
//! Thin wrapper over the `qrcode` encoder and the `image` PNG writer. The
//! rendering parameters are fixed so that the same payload always yields the
//! same bytes.

use std::io::Cursor;

use image::{ImageFormat, Luma};
use qrcode::{EcLevel, QrCode};

/// Error correction level used for every image.
pub const ERROR_CORRECTION: EcLevel = EcLevel::L;

/// Edge length of one QR module in pixels.
pub const MODULE_SIZE_PX: u32 = 10;

/// Quiet-zone width in modules added around the matrix by the encoder.
pub const BORDER_MODULES: u32 = 4;

#[derive(Debug, thiserror::Error)]
pub enum RenderError {
    #[error("QR encoding failed: {0}")]
    Encode(#[from] qrcode::types::QrError),

    #[error("PNG encoding failed: {0}")]
    Png(#[from] image::ImageError),
}

/// Encodes `payload` as a black-on-white QR code and returns PNG bytes.
///
/// The smallest QR version that fits the payload is chosen automatically.
pub fn render_png(payload: &str) -> Result<Vec<u8>, RenderError> {
    let code = QrCode::with_error_correction_level(payload.as_bytes(), ERROR_CORRECTION)?;

    let image = code
        .render::<Luma<u8>>()
        .quiet_zone(true)
        .module_dimensions(MODULE_SIZE_PX, MODULE_SIZE_PX)
        .dark_color(Luma([0u8]))
        .light_color(Luma([255u8]))
        .build();

    let mut buffer = Cursor::new(Vec::new());
    image.write_to(&mut buffer, ImageFormat::Png)?;

    Ok(buffer.into_inner())
}
