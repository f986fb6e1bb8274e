use super::*;
use crate::gateway::test_helpers::{create_test_gateway, seed_file};
use axum::body::Body;
use axum::http::{Request, StatusCode};
use std::time::Duration;
use tower::ServiceExt;

mod files;

/// Helper to create a test FileGateway instance wrapped in Arc
async fn create_test_state() -> (Arc<FileGateway>, tempfile::TempDir) {
    let (gateway, temp_dir) = create_test_gateway().await;
    (Arc::new(gateway), temp_dir)
}

/// Build a router over a test gateway with its default config
fn test_router(gateway: Arc<FileGateway>) -> Router {
    let config = gateway.config.clone();
    create_router(gateway, config)
}

#[tokio::test]
async fn test_api_server_spawns() {
    let (gateway, _temp_dir) = create_test_state().await;

    // Use a random available port for testing
    let mut config = (*gateway.config).clone();
    config.server.api.bind_address = "127.0.0.1:0".parse().unwrap(); // Port 0 = OS assigns a free port
    let config = Arc::new(config);

    // Spawn the API server
    let api_handle = tokio::spawn({
        let gateway = gateway.clone();
        let config = config.clone();
        async move { start_api_server(gateway, config).await }
    });

    // Give it a moment to start
    tokio::time::sleep(Duration::from_millis(100)).await;

    // Abort the server task
    api_handle.abort();

    // The test passes if we got here without panicking
}

#[tokio::test]
async fn test_health_endpoint() {
    let (gateway, _temp_dir) = create_test_state().await;
    let app = test_router(gateway);

    let response = app
        .oneshot(
            Request::builder()
                .uri("/health")
                .body(Body::empty())
                .unwrap(),
        )
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::OK);

    let body = axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .unwrap();
    let json: serde_json::Value = serde_json::from_slice(&body).unwrap();

    assert_eq!(json["status"], "ok");
    assert_eq!(json["version"], env!("CARGO_PKG_VERSION"));
}

#[tokio::test]
async fn test_cors_enabled() {
    let (gateway, _temp_dir) = create_test_state().await;

    // Config with CORS enabled (default)
    let mut config = (*gateway.config).clone();
    config.server.api.cors_enabled = true;
    config.server.api.cors_origins = vec!["*".to_string()];
    let app = create_router(gateway, Arc::new(config));

    let request = Request::builder()
        .uri("/health")
        .header("Origin", "http://localhost:3000")
        .body(Body::empty())
        .unwrap();

    let response = app.oneshot(request).await.unwrap();

    assert_eq!(response.status(), StatusCode::OK);
    assert!(
        response.headers().contains_key("access-control-allow-origin"),
        "CORS header should be present when CORS is enabled"
    );
}

#[tokio::test]
async fn test_authentication_with_api_key() {
    let (gateway, _temp_dir) = create_test_state().await;

    let mut config = (*gateway.config).clone();
    config.server.api.api_key = Some("test-secret-key".to_string());
    let app = create_router(gateway, Arc::new(config));

    // Request without API key should return 401
    let response = app
        .clone()
        .oneshot(
            Request::builder()
                .uri("/health")
                .body(Body::empty())
                .unwrap(),
        )
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::UNAUTHORIZED);

    // Request with valid API key should succeed
    let response = app
        .clone()
        .oneshot(
            Request::builder()
                .uri("/health")
                .header("X-Api-Key", "test-secret-key")
                .body(Body::empty())
                .unwrap(),
        )
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::OK);

    // Request with invalid API key should return 401
    let response = app
        .oneshot(
            Request::builder()
                .uri("/health")
                .header("X-Api-Key", "wrong-key")
                .body(Body::empty())
                .unwrap(),
        )
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::UNAUTHORIZED);
}

#[tokio::test]
async fn test_authentication_disabled_by_default() {
    let (gateway, _temp_dir) = create_test_state().await;
    let app = test_router(gateway);

    // Request without API key should succeed when authentication is disabled
    let response = app
        .oneshot(
            Request::builder()
                .uri("/health")
                .body(Body::empty())
                .unwrap(),
        )
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::OK);
}

#[tokio::test]
async fn test_openapi_json_endpoint() {
    let (gateway, _temp_dir) = create_test_state().await;
    let app = test_router(gateway);

    let response = app
        .oneshot(
            Request::builder()
                .uri("/openapi.json")
                .body(Body::empty())
                .unwrap(),
        )
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::OK);

    let body = axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .unwrap();
    let json: serde_json::Value =
        serde_json::from_slice(&body).expect("Response should be valid JSON");

    assert!(json.get("openapi").is_some(), "Should have 'openapi' field");
    assert!(json.get("info").is_some(), "Should have 'info' field");
    assert!(json.get("paths").is_some(), "Should have 'paths' field");
    assert_eq!(json["info"]["title"], "filegate REST API");
}

#[tokio::test]
async fn test_swagger_ui_enabled() {
    let (gateway, _temp_dir) = create_test_state().await;

    let mut config = (*gateway.config).clone();
    config.server.api.swagger_ui = true;
    let app = create_router(gateway, Arc::new(config));

    let response = app
        .oneshot(
            Request::builder()
                .uri("/swagger-ui/")
                .body(Body::empty())
                .unwrap(),
        )
        .await
        .unwrap();

    assert_eq!(
        response.status(),
        StatusCode::OK,
        "Swagger UI should be accessible when enabled"
    );
}

#[tokio::test]
async fn test_swagger_ui_disabled() {
    let (gateway, _temp_dir) = create_test_state().await;

    let mut config = (*gateway.config).clone();
    config.server.api.swagger_ui = false;
    let app = create_router(gateway, Arc::new(config));

    let response = app
        .oneshot(
            Request::builder()
                .uri("/swagger-ui/")
                .body(Body::empty())
                .unwrap(),
        )
        .await
        .unwrap();

    assert_eq!(
        response.status(),
        StatusCode::NOT_FOUND,
        "Swagger UI should not be accessible when disabled"
    );
}
