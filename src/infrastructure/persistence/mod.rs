//! Storage implementations of the repository traits.
//!
//! Records live in process memory only; a restart starts from an empty table.

mod memory_qr_repository;

pub use memory_qr_repository::MemoryQrRepository;
