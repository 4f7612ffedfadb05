//! Domain layer: entities and repository contracts.
//!
//! - [`entities`] - Core data structures
//! - [`repositories`] - Data access trait definitions
//!
//! The domain layer has no dependency on HTTP or storage details. Business
//! rules (normalization, identifier generation, the scan-on-success policy)
//! live in [`crate::application::services`].

pub mod entities;
pub mod repositories;
