//! Data Transfer Objects for requests and responses.
//!
//! JSON bodies are validated with `validator`; browser forms are accepted as
//! submitted.

pub mod form;
pub mod qr_code;
