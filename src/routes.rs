//! Top-level router configuration.
//!
//! # Route Structure
//!
//! - `GET  /r/{id}`   - Scan redirect (public)
//! - `GET  /qr/{id}`  - QR image (public)
//! - `/`, `/create`, `/update/{id}`, `/delete/{id}` - Browser form surface
//! - `/api/*`         - JSON API
//!
//! # Middleware
//!
//! - **Tracing** - Structured request/response logging
//! - **Path normalization** - Trailing slash handling

use crate::api;
use crate::api::middleware::tracing;
use crate::state::AppState;
use axum::Router;
use tower::Layer;
use tower_http::normalize_path::{NormalizePath, NormalizePathLayer};

/// Builds the router with all routes and the tracing layer.
///
/// Used directly by integration tests; production wraps it with
/// [`app_router`].
pub fn build_router(state: AppState) -> Router {
    Router::new()
        .merge(api::routes::public_routes())
        .merge(api::routes::form_routes())
        .nest("/api", api::routes::api_routes())
        .with_state(state)
        .layer(tracing::layer())
}

/// Constructs the application service: [`build_router`] plus trailing-slash
/// normalization, which has to wrap the router to run before route matching.
pub fn app_router(state: AppState) -> NormalizePath<Router> {
    NormalizePathLayer::trim_trailing_slash().layer(build_router(state))
}
