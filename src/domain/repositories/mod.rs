//! Repository trait definitions for the domain layer.
//!
//! Traits here define the data-access contract; the implementation lives in
//! `crate::infrastructure::persistence`. Mocks are generated with `mockall`
//! for service unit tests.

pub mod qr_repository;

pub use qr_repository::QrRepository;

#[cfg(test)]
pub use qr_repository::MockQrRepository;
