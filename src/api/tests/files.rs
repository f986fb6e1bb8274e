use super::*;
use crate::types::FileInfo;

#[tokio::test]
async fn test_list_files_empty() {
    let (gateway, _temp_dir) = create_test_state().await;
    let app = test_router(gateway);

    let response = app
        .oneshot(Request::builder().uri("/files").body(Body::empty()).unwrap())
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::OK);

    let body = axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .unwrap();
    let files: Vec<FileInfo> = serde_json::from_slice(&body).unwrap();
    assert!(files.is_empty());
}

#[tokio::test]
async fn test_list_files_returns_metadata_without_archive_names() {
    let (gateway, _temp_dir) = create_test_state().await;
    seed_file(&gateway, "one.txt", "arch-one.txt", "text/plain", b"1").await;
    seed_file(&gateway, "two.png", "arch-two.png", "image/png", b"22").await;

    let app = test_router(gateway);
    let response = app
        .oneshot(Request::builder().uri("/files").body(Body::empty()).unwrap())
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::OK);

    let body = axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .unwrap();
    let files: Vec<FileInfo> = serde_json::from_slice(&body).unwrap();

    assert_eq!(files.len(), 2);
    // Newest first
    assert_eq!(files[0].original_filename, "two.png");
    assert_eq!(files[1].original_filename, "one.txt");

    // Internal storage names never appear on the wire
    let raw = String::from_utf8(body.to_vec()).unwrap();
    assert!(!raw.contains("arch-one.txt"));
    assert!(!raw.contains("arch-two.png"));
}

#[tokio::test]
async fn test_get_file_returns_metadata() {
    let (gateway, _temp_dir) = create_test_state().await;
    let id = seed_file(&gateway, "réport.pdf", "arch.pdf", "application/pdf", b"pdf").await;

    let app = test_router(gateway);
    let response = app
        .oneshot(
            Request::builder()
                .uri(format!("/files/{id}"))
                .body(Body::empty())
                .unwrap(),
        )
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::OK);

    let body = axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .unwrap();
    let info: FileInfo = serde_json::from_slice(&body).unwrap();

    assert_eq!(info.id, id);
    assert_eq!(info.original_filename, "réport.pdf");
    assert_eq!(info.mime_browser, "application/pdf");
    assert_eq!(info.size_bytes, 3);
}

#[tokio::test]
async fn test_get_file_missing_returns_404_envelope() {
    let (gateway, _temp_dir) = create_test_state().await;
    let app = test_router(gateway);

    let response = app
        .oneshot(
            Request::builder()
                .uri("/files/12345")
                .body(Body::empty())
                .unwrap(),
        )
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::NOT_FOUND);

    let body = axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .unwrap();
    let json: serde_json::Value = serde_json::from_slice(&body).unwrap();
    assert_eq!(json["error"]["code"], "file_not_found");
    assert_eq!(json["error"]["details"]["file_id"], 12345);
}
