#![allow(dead_code)]

use axum_test::TestServer;
use dynamic_qr::domain::entities::QrCode;
use dynamic_qr::infrastructure::persistence::MemoryQrRepository;
use dynamic_qr::routes::build_router;
use dynamic_qr::state::AppState;
use std::sync::Arc;

pub const BASE_URL: &str = "https://qr.example.com";

pub fn create_test_state() -> AppState {
    AppState::new(Arc::new(MemoryQrRepository::new()), BASE_URL)
}

/// Full router backed by `state`, so tests can seed and inspect the registry.
pub fn make_server(state: &AppState) -> TestServer {
    TestServer::new(build_router(state.clone())).unwrap()
}

pub async fn create_test_qr(state: &AppState, title: &str, target: &str) -> QrCode {
    state
        .registry
        .create(title.to_string(), target)
        .await
        .unwrap()
}

pub async fn create_inactive_qr(state: &AppState, title: &str, target: &str) -> QrCode {
    let qr = create_test_qr(state, title, target).await;
    state.registry.set_active(&qr.id, false).await.unwrap()
}

pub async fn fetch(state: &AppState, id: &str) -> Option<QrCode> {
    state.registry.get(id).await.unwrap()
}
