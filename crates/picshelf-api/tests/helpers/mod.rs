#![allow(dead_code)]

pub mod fixtures;

use axum_test::multipart::{MultipartForm, Part};
use axum_test::TestServer;
use picshelf_api::setup::{build_state, routes::setup_routes};
use picshelf_api::AppState;
use picshelf_core::models::UploadRecord;
use picshelf_core::Config;
use std::path::{Path, PathBuf};
use std::sync::Arc;
use tempfile::TempDir;

/// Test application backed by a private temporary directory
pub struct TestApp {
    pub server: TestServer,
    pub state: Arc<AppState>,
    pub _temp_dir: TempDir,
}

impl TestApp {
    /// Get the HTTP test client
    pub fn client(&self) -> &TestServer {
        &self.server
    }

    pub fn upload_dir(&self) -> &Path {
        &self.state.config.upload_dir
    }

    pub fn thumbs_dir(&self) -> PathBuf {
        self.state.config.thumbnail_dir()
    }

    pub fn ledger_path(&self) -> &Path {
        &self.state.config.metadata_file
    }

    /// Ledger contents as currently on disk
    pub fn ledger_on_disk(&self) -> Vec<UploadRecord> {
        let raw = std::fs::read_to_string(self.ledger_path()).expect("Failed to read ledger");
        serde_json::from_str(&raw).expect("Ledger is not valid JSON")
    }

    /// Number of full-size files written
    pub fn stored_image_count(&self) -> usize {
        count_files(self.upload_dir())
    }

    pub fn stored_thumbnail_count(&self) -> usize {
        count_files(&self.thumbs_dir())
    }
}

fn count_files(dir: &Path) -> usize {
    std::fs::read_dir(dir)
        .expect("Failed to read directory")
        .filter_map(Result::ok)
        .filter(|e| e.path().is_file())
        .count()
}

/// Setup a test application with default limits
pub async fn setup_test_app() -> TestApp {
    setup_test_app_with(|_| {}).await
}

/// Setup a test application, adjusting the configuration first
pub async fn setup_test_app_with(customize: impl FnOnce(&mut Config)) -> TestApp {
    let temp_dir = TempDir::new().expect("Failed to create temp dir");

    let mut config = Config {
        upload_dir: temp_dir.path().join("uploads"),
        metadata_file: temp_dir.path().join("images.json"),
        ..Config::default()
    };
    customize(&mut config);

    let state = build_state(config.clone())
        .await
        .expect("Failed to build application state");
    let app = setup_routes(&config, state.clone());

    let server = TestServer::new(app.into_make_service()).expect("Failed to create test server");

    TestApp {
        server,
        state,
        _temp_dir: temp_dir,
    }
}

/// Build a multipart form with one `images` part per entry of (filename, mime, bytes)
pub fn images_form(files: Vec<(&str, &str, Vec<u8>)>) -> MultipartForm {
    files
        .into_iter()
        .fold(MultipartForm::new(), |form, (name, mime, data)| {
            form.add_part(
                "images",
                Part::bytes(data).file_name(name).mime_type(mime),
            )
        })
}
