mod helpers;

use helpers::{setup_test_app, ADMIN_KEY};
use multiup_core::UploadStrategy;
use serde_json::Value;

#[tokio::test]
async fn test_get_create_without_provider_lists_providers() {
    let app = setup_test_app(UploadStrategy::Validated);

    let response = app
        .client()
        .get("/admin/media/create")
        .authorization_bearer(ADMIN_KEY)
        .await;

    assert_eq!(response.status_code(), 200);
    let body: Value = response.json();
    assert_eq!(body["action"], "create");
    assert_eq!(body["context"], "default");
    let names: Vec<&str> = body["providers"]
        .as_array()
        .unwrap()
        .iter()
        .map(|p| p["name"].as_str().unwrap())
        .collect();
    assert_eq!(names, vec!["image", "video", "file"]);
    assert_eq!(app.write_count(), 0);
}

#[tokio::test]
async fn test_get_create_with_explicit_context() {
    let app = setup_test_app(UploadStrategy::Validated);

    let response = app
        .client()
        .get("/admin/media/create")
        .add_query_param("context", "gallery")
        .authorization_bearer(ADMIN_KEY)
        .await;

    assert_eq!(response.status_code(), 200);
    let body: Value = response.json();
    assert_eq!(body["context"], "gallery");
    assert!(!body["providers"].as_array().unwrap().is_empty());
}

#[tokio::test]
async fn test_get_create_with_unknown_context_lists_nothing() {
    let app = setup_test_app(UploadStrategy::Validated);

    let response = app
        .client()
        .get("/admin/media/create")
        .add_query_param("context", "nowhere")
        .authorization_bearer(ADMIN_KEY)
        .await;

    assert_eq!(response.status_code(), 200);
    let body: Value = response.json();
    assert!(body["providers"].as_array().unwrap().is_empty());
}

#[tokio::test]
async fn test_get_create_with_provider_delegates_to_generic_flow() {
    let app = setup_test_app(UploadStrategy::Validated);

    let response = app
        .client()
        .get("/admin/media/create")
        .add_query_param("provider", "image")
        .authorization_bearer(ADMIN_KEY)
        .await;

    assert_eq!(response.status_code(), 303);
    assert_eq!(
        response.header("location"),
        "http://localhost:3000/admin/media/new"
    );
}

#[tokio::test]
async fn test_post_create_delegates_to_generic_flow() {
    let app = setup_test_app(UploadStrategy::Validated);

    let response = app
        .client()
        .post("/admin/media/create")
        .authorization_bearer(ADMIN_KEY)
        .await;

    assert_eq!(response.status_code(), 303);
}
