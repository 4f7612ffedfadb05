//! Utility functions shared by the services.
//!
//! - [`code_generator`] - Random identifier generation
//! - [`url_normalizer`] - Target URL scheme coercion
//! - [`qr_render`] - QR matrix to PNG rendering

pub mod code_generator;
pub mod qr_render;
pub mod url_normalizer;
