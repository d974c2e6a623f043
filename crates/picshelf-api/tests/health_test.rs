mod helpers;

use axum::http::StatusCode;
use helpers::setup_test_app;

#[tokio::test]
async fn test_health_check_healthy() {
    let app = setup_test_app().await;

    let response = app.client().get("/health").await;

    response.assert_status_ok();
    let body: serde_json::Value = response.json();
    assert_eq!(body["status"], "healthy");
    assert_eq!(body["ledger"], "healthy");
    assert_eq!(body["storage"], "healthy");
}

#[tokio::test]
async fn test_health_check_reports_missing_storage() {
    let app = setup_test_app().await;
    std::fs::remove_dir_all(app.thumbs_dir()).unwrap();

    let response = app.client().get("/health").await;

    response.assert_status(StatusCode::SERVICE_UNAVAILABLE);
    let body: serde_json::Value = response.json();
    assert_eq!(body["status"], "unhealthy");
    assert_eq!(body["ledger"], "healthy");
}

#[tokio::test]
async fn test_liveness_check() {
    let app = setup_test_app().await;

    let response = app.client().get("/live").await;

    response.assert_status_ok();
    let body: serde_json::Value = response.json();
    assert_eq!(body["status"], "alive");
}

#[tokio::test]
async fn test_openapi_document_lists_endpoints() {
    let app = setup_test_app().await;

    let response = app.client().get("/api/openapi.json").await;

    response.assert_status_ok();
    let body: serde_json::Value = response.json();
    assert!(body["paths"].get("/upload").is_some());
    assert!(body["paths"].get("/images").is_some());
}
