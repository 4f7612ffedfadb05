//! HTTP request handlers.
//!
//! Each handler module corresponds to a logical grouping of endpoints.

pub mod forms;
pub mod image;
pub mod qr_codes;
pub mod redirect;

pub use forms::{create_form_handler, update_form_handler};
pub use image::image_handler;
pub use qr_codes::{create_handler, delete_handler, get_handler, list_handler, update_handler};
pub use redirect::redirect_handler;
