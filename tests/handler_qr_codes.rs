mod common;

use serde_json::{Value, json};

#[tokio::test]
async fn test_create_qr_success() {
    let state = common::create_test_state();
    let server = common::make_server(&state);

    let response = server
        .post("/api/qr")
        .json(&json!({ "title": "Menu", "target_url": "example.com/menu" }))
        .await;

    assert_eq!(response.status_code(), 201);

    let body: Value = response.json();
    let id = body["id"].as_str().unwrap();
    assert_eq!(id.len(), 8);
    assert_eq!(body["title"], "Menu");
    assert_eq!(body["target_url"], "https://example.com/menu");
    assert_eq!(body["scan_count"], 0);
    assert_eq!(body["is_active"], true);
    assert!(body["last_scanned_at"].is_null());
    assert_eq!(
        body["redirect_link"],
        format!("{}/r/{}", common::BASE_URL, id)
    );
    assert_eq!(body["image_url"], format!("/qr/{id}"));
}

#[tokio::test]
async fn test_create_qr_default_title() {
    let state = common::create_test_state();
    let server = common::make_server(&state);

    let response = server
        .post("/api/qr")
        .json(&json!({ "target_url": "https://example.com" }))
        .await;

    assert_eq!(response.status_code(), 201);
    let body: Value = response.json();
    assert_eq!(body["title"], "Untitled");

    let body: Value = server
        .post("/api/qr")
        .json(&json!({ "title": "", "target_url": "https://example.com" }))
        .await
        .json();
    assert_eq!(body["title"], "Untitled");
}

#[tokio::test]
async fn test_create_qr_empty_target_rejected() {
    let state = common::create_test_state();
    let server = common::make_server(&state);

    let response = server
        .post("/api/qr")
        .json(&json!({ "title": "Menu", "target_url": "" }))
        .await;

    response.assert_status_bad_request();
    let body: Value = response.json();
    assert_eq!(body["error"]["code"], "validation_error");
    assert!(state.registry.list_all().await.unwrap().is_empty());
}

#[tokio::test]
async fn test_create_qr_identifiers_unique() {
    let state = common::create_test_state();
    let server = common::make_server(&state);

    let mut ids = std::collections::HashSet::new();
    for i in 0..20 {
        let body: Value = server
            .post("/api/qr")
            .json(&json!({ "target_url": format!("https://example.com/{i}") }))
            .await
            .json();
        ids.insert(body["id"].as_str().unwrap().to_string());
    }

    assert_eq!(ids.len(), 20);
}

#[tokio::test]
async fn test_get_qr_success() {
    let state = common::create_test_state();
    let server = common::make_server(&state);
    let qr = common::create_test_qr(&state, "Menu", "https://example.com").await;

    let response = server.get(&format!("/api/qr/{}", qr.id)).await;

    response.assert_status_ok();
    let body: Value = response.json();
    assert_eq!(body["id"], qr.id.as_str());
    assert_eq!(body["title"], "Menu");
}

#[tokio::test]
async fn test_get_qr_inactive_still_visible() {
    let state = common::create_test_state();
    let server = common::make_server(&state);
    let qr = common::create_inactive_qr(&state, "Paused", "https://example.com").await;

    let response = server.get(&format!("/api/qr/{}", qr.id)).await;

    response.assert_status_ok();
    let body: Value = response.json();
    assert_eq!(body["is_active"], false);
}

#[tokio::test]
async fn test_get_qr_not_found() {
    let state = common::create_test_state();
    let server = common::make_server(&state);

    let response = server.get("/api/qr/notfound").await;

    response.assert_status_not_found();
    let body: Value = response.json();
    assert_eq!(body["error"]["code"], "not_found");
    assert_eq!(body["error"]["details"]["id"], "notfound");
}

#[tokio::test]
async fn test_patch_qr_partial_update() {
    let state = common::create_test_state();
    let server = common::make_server(&state);
    let qr = common::create_test_qr(&state, "Menu", "https://example.com/lunch").await;

    let response = server
        .patch(&format!("/api/qr/{}", qr.id))
        .json(&json!({ "target_url": "example.com/dinner" }))
        .await;

    response.assert_status_ok();
    let body: Value = response.json();
    assert_eq!(body["title"], "Menu");
    assert_eq!(body["target_url"], "https://example.com/dinner");
    assert!(!body["updated_at"].is_null());
}

#[tokio::test]
async fn test_patch_qr_deactivate() {
    let state = common::create_test_state();
    let server = common::make_server(&state);
    let qr = common::create_test_qr(&state, "Menu", "https://example.com").await;

    let response = server
        .patch(&format!("/api/qr/{}", qr.id))
        .json(&json!({ "is_active": false }))
        .await;

    response.assert_status_ok();
    let body: Value = response.json();
    assert_eq!(body["is_active"], false);

    server
        .get(&format!("/r/{}", qr.id))
        .await
        .assert_status_not_found();
}

#[tokio::test]
async fn test_patch_qr_not_found() {
    let state = common::create_test_state();
    let server = common::make_server(&state);

    let response = server
        .patch("/api/qr/notfound")
        .json(&json!({ "title": "X" }))
        .await;

    response.assert_status_not_found();
}

#[tokio::test]
async fn test_delete_qr_success() {
    let state = common::create_test_state();
    let server = common::make_server(&state);
    let qr = common::create_test_qr(&state, "Menu", "https://example.com").await;

    let response = server.delete(&format!("/api/qr/{}", qr.id)).await;

    response.assert_status_ok();
    let body: Value = response.json();
    assert_eq!(body["message"], "QR code deleted successfully");

    server
        .get(&format!("/api/qr/{}", qr.id))
        .await
        .assert_status_not_found();
    server
        .delete(&format!("/api/qr/{}", qr.id))
        .await
        .assert_status_not_found();
}

#[tokio::test]
async fn test_list_qr_ordered_by_creation() {
    let state = common::create_test_state();
    let server = common::make_server(&state);
    let first = common::create_test_qr(&state, "First", "https://example.com/1").await;
    let second = common::create_test_qr(&state, "Second", "https://example.com/2").await;
    let third = common::create_test_qr(&state, "Third", "https://example.com/3").await;
    state.registry.delete(&second.id).await.unwrap();

    let response = server.get("/api/qr").await;

    response.assert_status_ok();
    let body: Value = response.json();
    assert_eq!(body["total"], 2);
    assert_eq!(body["items"][0]["id"], first.id.as_str());
    assert_eq!(body["items"][1]["id"], third.id.as_str());
}

#[tokio::test]
async fn test_list_qr_empty() {
    let state = common::create_test_state();
    let server = common::make_server(&state);

    let body: Value = server.get("/api/qr").await.json();

    assert_eq!(body["total"], 0);
    assert_eq!(body["items"], json!([]));
}
