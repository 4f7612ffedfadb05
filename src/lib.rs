//! # Dynamic QR
//!
//! A dynamic QR code service built with Axum: each printed code encodes a
//! stable redirect link, while the destination behind it stays editable.
//!
//! ## Architecture
//!
//! This crate follows Clean Architecture principles with clear layer separation:
//!
//! - **Domain Layer** ([`domain`]) - QR code entity and repository trait
//! - **Application Layer** ([`application`]) - Registry, resolver and image services
//! - **Infrastructure Layer** ([`infrastructure`]) - In-memory registry storage
//! - **API Layer** ([`api`]) - JSON API, form endpoints, DTOs and middleware
//!
//! ## Features
//!
//! - Stable 8-character identifiers, never reused
//! - Editable targets behind a fixed `/r/{id}` link
//! - Scan counting with last-scan timestamps
//! - Activation toggle that disables redirects without deleting
//! - Deterministic PNG rendering
//!
//! ## Quick Start
//!
//! ```bash
//! export BASE_URL="https://qr.example.com"
//! cargo run
//! ```
//!
//! ## Configuration
//!
//! Service configuration is loaded from environment variables via [`config::Config`].
//! See [`config`] module for available options.

pub mod api;
pub mod application;
pub mod domain;
pub mod error;
pub mod infrastructure;
pub mod state;
pub mod utils;

pub mod config;
pub mod server;

pub mod routes;

pub use error::AppError;
pub use state::AppState;

/// Commonly used types for external consumers.
///
/// Re-exports frequently used types to simplify imports for library users
/// and integration tests.
pub mod prelude {
    pub use crate::application::services::{ImageService, RegistryService, ResolverService};
    pub use crate::domain::entities::{NewQrCode, QrCode, QrCodePatch};
    pub use crate::error::AppError;
    pub use crate::infrastructure::persistence::MemoryQrRepository;
    pub use crate::state::AppState;
}
