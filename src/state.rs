//! Shared application state injected into every handler.

use std::sync::Arc;

use crate::application::services::{ImageService, RegistryService, ResolverService};
use crate::infrastructure::persistence::MemoryQrRepository;

/// Registry service bound to the in-memory table.
pub type Registry = RegistryService<MemoryQrRepository>;

/// Resolver service bound to the in-memory table.
pub type Resolver = ResolverService<MemoryQrRepository>;

/// Handles to the services behind the HTTP layer.
///
/// Cheap to clone: every field is reference-counted, and all clones share the
/// same QR code table.
#[derive(Clone)]
pub struct AppState {
    pub registry: Arc<Registry>,
    pub resolver: Arc<Resolver>,
    pub images: Arc<ImageService>,
}

impl AppState {
    /// Wires the services around one repository instance.
    pub fn new(repository: Arc<MemoryQrRepository>, base_url: &str) -> Self {
        let registry = Arc::new(RegistryService::new(repository));
        let resolver = Arc::new(ResolverService::new(registry.clone()));
        let images = Arc::new(ImageService::new(base_url));

        Self {
            registry,
            resolver,
            images,
        }
    }
}
