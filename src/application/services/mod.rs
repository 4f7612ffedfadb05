//! Business logic services for the application layer.

pub mod image_service;
pub mod registry_service;
pub mod resolver_service;

pub use image_service::ImageService;
pub use registry_service::{QrCodeChanges, RegistryService};
pub use resolver_service::ResolverService;
