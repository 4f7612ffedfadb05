//! Handlers for the browser form posts.
//!
//! Both answer with `303 See Other` back to the listing, so a browser reload
//! does not resubmit the form.

use axum::{
    Form,
    extract::{Path, State},
    response::Redirect,
};
use tracing::info;

use crate::api::dto::form::QrForm;
use crate::api::handlers::qr_codes::DEFAULT_TITLE;
use crate::error::AppError;
use crate::state::AppState;

/// Path of the listing the forms return to.
const LISTING_PATH: &str = "/";

/// Creates a QR code from a submitted form.
///
/// # Endpoint
///
/// `POST /create` (`application/x-www-form-urlencoded`: `title`, `redirect_url`)
///
/// The URL is not validated; a missing scheme becomes `https://`.
pub async fn create_form_handler(
    State(state): State<AppState>,
    Form(form): Form<QrForm>,
) -> Result<Redirect, AppError> {
    let title = form.title.unwrap_or_else(|| DEFAULT_TITLE.to_string());
    let qr = state.registry.create(title, &form.redirect_url).await?;
    info!(id = %qr.id, target = %qr.target_url, "QR code created");

    Ok(Redirect::to(LISTING_PATH))
}

/// Updates a QR code from a submitted form.
///
/// # Endpoint
///
/// `POST /update/{id}` (`application/x-www-form-urlencoded`: `title`, `redirect_url`)
///
/// An empty title keeps the current one.
///
/// # Errors
///
/// Returns 404 Not Found if the identifier is unknown.
pub async fn update_form_handler(
    Path(id): Path<String>,
    State(state): State<AppState>,
    Form(form): Form<QrForm>,
) -> Result<Redirect, AppError> {
    let title = form.title.unwrap_or_default();
    let qr = state
        .registry
        .update(&id, &title, &form.redirect_url)
        .await?;
    info!(id = %qr.id, target = %qr.target_url, "QR code updated");

    Ok(Redirect::to(LISTING_PATH))
}
