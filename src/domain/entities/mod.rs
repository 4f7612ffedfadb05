//! Core domain entities.
//!
//! - [`QrCode`] - a registered QR code and its redirect target
//!
//! Creation and partial updates use separate input structs
//! ([`NewQrCode`], [`QrCodePatch`]) in the same style.

pub mod qr_code;

pub use qr_code::{NewQrCode, QrCode, QrCodePatch};
