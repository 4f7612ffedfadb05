//! Application layer services implementing business logic.
//!
//! Services consume the repository trait and expose a small API to the HTTP
//! handlers.
//!
//! # Available Services
//!
//! - [`services::registry_service::RegistryService`] - Create, edit, look up and delete QR codes
//! - [`services::resolver_service::ResolverService`] - Resolve scans and count them
//! - [`services::image_service::ImageService`] - Render the QR image for an identifier

pub mod services;
