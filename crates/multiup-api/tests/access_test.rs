mod helpers;

use axum_test::multipart::{MultipartForm, Part};
use helpers::{png_fixture, setup_test_app, VIEWER_KEY};
use multiup_core::UploadStrategy;
use serde_json::Value;

#[tokio::test]
async fn test_missing_key_is_unauthorized() {
    let app = setup_test_app(UploadStrategy::Validated);

    let response = app.client().get("/admin/media/create").await;
    assert_eq!(response.status_code(), 401);

    let response = app
        .client()
        .get("/admin/media/multi-upload")
        .add_query_param("provider", "image")
        .await;
    assert_eq!(response.status_code(), 401);
}

#[tokio::test]
async fn test_wrong_key_is_unauthorized() {
    let app = setup_test_app(UploadStrategy::Validated);

    let response = app
        .client()
        .get("/admin/media/create")
        .authorization_bearer("not-the-key")
        .await;

    assert_eq!(response.status_code(), 401);
}

#[tokio::test]
async fn test_viewer_key_cannot_create() {
    let app = setup_test_app(UploadStrategy::Validated);

    let response = app
        .client()
        .get("/admin/media/create")
        .authorization_bearer(VIEWER_KEY)
        .await;

    assert_eq!(response.status_code(), 403);
    let body: Value = response.json();
    assert_eq!(body["code"], "ACCESS_DENIED");
}

#[tokio::test]
async fn test_viewer_key_cannot_upload() {
    let app = setup_test_app(UploadStrategy::Validated);

    let part = Part::bytes(png_fixture())
        .file_name("cat.png")
        .mime_type("image/png");
    let response = app
        .client()
        .post("/admin/media/multi-upload")
        .add_query_param("provider", "image")
        .authorization_bearer(VIEWER_KEY)
        .multipart(MultipartForm::new().add_part("file", part))
        .await;

    assert_eq!(response.status_code(), 403);
    assert_eq!(app.write_count(), 0);
}
