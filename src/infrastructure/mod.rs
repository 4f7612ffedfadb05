//! Infrastructure layer implementing the domain's repository contracts.
//!
//! - [`persistence`] - In-memory QR code table

pub mod persistence;
