//! QR code identifier generation.
//!
//! Identifiers are random, URL-safe and short enough to keep the encoded
//! redirect link (and therefore the QR matrix) small.

use crate::error::AppError;
use base64::Engine as _;
use serde_json::json;

/// Random bytes per identifier; 6 bytes encode to exactly 8 base64 characters.
const ID_LENGTH_BYTES: usize = 6;

/// Length of a generated identifier.
pub const ID_LENGTH: usize = 8;

/// Generates a random identifier from the OS entropy source.
///
/// Output is URL-safe base64 without padding, so it can be used verbatim as a
/// path segment.
///
/// # Errors
///
/// Returns [`AppError::Internal`] if the system random number generator fails.
pub fn generate_id() -> Result<String, AppError> {
    let mut buffer = [0u8; ID_LENGTH_BYTES];

    getrandom::fill(&mut buffer).map_err(|e| {
        AppError::internal(
            "Failed to generate random identifier",
            json!({ "reason": e.to_string() }),
        )
    })?;

    Ok(base64::engine::general_purpose::URL_SAFE_NO_PAD.encode(buffer))
}
