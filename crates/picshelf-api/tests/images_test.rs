mod helpers;

use helpers::fixtures::png;
use helpers::{images_form, setup_test_app};
use picshelf_core::models::UploadRecord;

#[tokio::test]
async fn test_list_images_empty() {
    let app = setup_test_app().await;

    let response = app.client().get("/images").await;

    response.assert_status_ok();
    let data: serde_json::Value = response.json();
    assert_eq!(data, serde_json::json!([]));
}

#[tokio::test]
async fn test_list_images_uses_record_shape() {
    let app = setup_test_app().await;
    app.client()
        .post("/upload")
        .multipart(images_form(vec![("sunset.png", "image/png", png(30, 20))]))
        .await
        .assert_status_ok();

    let data: serde_json::Value = app.client().get("/images").await.json();
    let entry = &data[0];
    for field in [
        "id",
        "filename",
        "thumb",
        "originalName",
        "mime",
        "size",
        "width",
        "height",
        "createdAt",
    ] {
        assert!(entry.get(field).is_some(), "missing field {}", field);
    }
    assert_eq!(entry["originalName"], "sunset.png");
    assert_eq!(entry["width"], 30);
    assert_eq!(entry["height"], 20);
}

#[tokio::test]
async fn test_list_images_is_stable_between_uploads() {
    let app = setup_test_app().await;
    app.client()
        .post("/upload")
        .multipart(images_form(vec![("x.png", "image/png", png(5, 5))]))
        .await
        .assert_status_ok();

    let first: Vec<UploadRecord> = app.client().get("/images").await.json();
    let second: Vec<UploadRecord> = app.client().get("/images").await.json();
    assert_eq!(first, second);
    assert_eq!(first.len(), 1);
}

#[tokio::test]
async fn test_list_images_reads_existing_ledger() {
    let app = setup_test_app().await;
    std::fs::write(
        app.ledger_path(),
        r#"[{
            "id": "6b1d4c8e-1f7a-4f52-8c0e-2d6f3f1d9a01",
            "filename": "0a1b2c3d4e5f60718293a4b5.jpg",
            "thumb": "thumb-0a1b2c3d4e5f60718293a4b5.jpg",
            "originalName": "old.jpg",
            "mime": "image/jpeg",
            "size": 1000,
            "width": null,
            "height": null,
            "createdAt": "2023-11-05T08:30:00.000Z"
        }]"#,
    )
    .unwrap();

    let records: Vec<UploadRecord> = app.client().get("/images").await.json();
    assert_eq!(records.len(), 1);
    assert_eq!(records[0].original_name, "old.jpg");
    assert_eq!(records[0].dimensions(), None);
}

#[tokio::test]
async fn test_responses_carry_security_headers_and_request_id() {
    let app = setup_test_app().await;

    let response = app.client().get("/images").await;

    assert_eq!(response.header("X-Content-Type-Options"), "nosniff");
    assert!(response.maybe_header("X-Request-ID").is_some());
}
