//! API route configuration.

use crate::api::handlers::{
    create_form_handler, create_handler, delete_handler, get_handler, image_handler,
    list_handler, redirect_handler, update_form_handler, update_handler,
};
use crate::state::AppState;
use axum::{
    Router,
    routing::{delete, get, post},
};

/// Public scan and image routes.
///
/// # Endpoints
///
/// - `GET /r/{id}`  - Redirect a scan to the current target
/// - `GET /qr/{id}` - PNG image encoding the redirect link
pub fn public_routes() -> Router<AppState> {
    Router::new()
        .route("/r/{id}", get(redirect_handler))
        .route("/qr/{id}", get(image_handler))
}

/// Browser form routes.
///
/// # Endpoints
///
/// - `GET    /`            - Listing (JSON)
/// - `POST   /create`      - Create from form, 303 to `/`
/// - `POST   /update/{id}` - Update from form, 303 to `/`
/// - `DELETE /delete/{id}` - Delete
pub fn form_routes() -> Router<AppState> {
    Router::new()
        .route("/", get(list_handler))
        .route("/create", post(create_form_handler))
        .route("/update/{id}", post(update_form_handler))
        .route("/delete/{id}", delete(delete_handler))
}

/// JSON API routes, nested under `/api`.
///
/// # Endpoints
///
/// - `GET    /qr`      - List all QR codes
/// - `POST   /qr`      - Create a QR code
/// - `GET    /qr/{id}` - Read one QR code
/// - `PATCH  /qr/{id}` - Partially update (title, target, activation)
/// - `DELETE /qr/{id}` - Delete
pub fn api_routes() -> Router<AppState> {
    Router::new()
        .route("/qr", get(list_handler).post(create_handler))
        .route(
            "/qr/{id}",
            get(get_handler)
                .patch(update_handler)
                .delete(delete_handler),
        )
}
