use std::sync::Arc;

use axum_test::TestServer;
use multiup_api::setup::routes::build_router;
use multiup_api::state::AppState;
use multiup_core::{provider, Config, UploadStrategy};
use multiup_db::{MediaStore, MemoryMediaStore};

pub const ADMIN_KEY: &str = "test-admin-key";
pub const VIEWER_KEY: &str = "test-viewer-key";

/// Test application state
pub struct TestApp {
    pub server: TestServer,
    pub store: Arc<MemoryMediaStore>,
}

impl TestApp {
    pub fn client(&self) -> &TestServer {
        &self.server
    }

    /// Persistence writes performed so far.
    pub fn write_count(&self) -> usize {
        self.store.write_count()
    }
}

pub fn test_config(strategy: UploadStrategy) -> Config {
    Config {
        server_port: 0,
        database_url: "postgresql://localhost/multiup-test".to_string(),
        admin_api_key: ADMIN_KEY.to_string(),
        viewer_api_key: Some(VIEWER_KEY.to_string()),
        public_base_url: "http://localhost:3000/media".to_string(),
        admin_base_url: "http://localhost:3000/admin".to_string(),
        max_upload_filesize: 1024,
        redirect_to: Some("list".to_string()),
        upload_strategy: strategy,
        contexts: vec!["default".to_string(), "gallery".to_string()],
        image_allowed_extensions: vec!["jpg".to_string(), "png".to_string()],
        image_allowed_content_types: vec!["image/jpeg".to_string(), "image/png".to_string()],
        video_allowed_extensions: vec!["mp4".to_string()],
        video_allowed_content_types: vec!["video/mp4".to_string()],
    }
}

/// Setup a test application backed by the in-memory store.
pub fn setup_test_app(strategy: UploadStrategy) -> TestApp {
    let config = test_config(strategy);
    let providers = provider::create_pool(&config);
    let store = Arc::new(MemoryMediaStore::new());
    let shared: Arc<dyn MediaStore> = store.clone();
    let state = Arc::new(AppState::new(config, providers, shared));
    let server = TestServer::new(build_router(state)).expect("test server");
    TestApp { server, store }
}

/// A 1x1 PNG, valid enough for upload fixtures.
pub fn png_fixture() -> Vec<u8> {
    vec![
        0x89, 0x50, 0x4E, 0x47, 0x0D, 0x0A, 0x1A, 0x0A, // PNG signature
        0x00, 0x00, 0x00, 0x0D, 0x49, 0x48, 0x44, 0x52, // IHDR chunk
        0x00, 0x00, 0x00, 0x01, 0x00, 0x00, 0x00, 0x01, // 1x1 dimensions
        0x08, 0x02, 0x00, 0x00, 0x00, 0x90, 0x77, 0x53, 0xDE, 0x00, 0x00, 0x00, 0x0C, 0x49,
        0x44, 0x41, 0x54, 0x08, 0xD7, 0x63, 0xF8, 0x00, 0x00, 0x00, 0x00, 0x01, 0x00, 0x01,
        0x00, 0x18, 0xDD, 0x8D, 0x89, 0x00, 0x00, 0x00, 0x00, 0x49, 0x45, 0x4E, 0x44, 0xAE,
        0x42, 0x60, 0x82,
    ]
}
