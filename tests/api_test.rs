//! Router-level tests for the backend endpoints.
//!
//! Upstream-failure cases point the Spotify endpoint URLs at an unroutable
//! local port so the handlers exercise their network-error path without
//! touching the real API.

use std::sync::Arc;

use axum::{
    body::Body,
    http::{Request, StatusCode, header},
};
use serde_json::Value;
use tower::util::ServiceExt; // for `oneshot` method

use moodify_backend::config::Config;
use moodify_backend::server::build_router;
use moodify_backend::spotify::auth::AUTH_SCOPES;

// Test helper: configuration with upstream endpoints nobody listens on
fn test_config() -> Config {
    Config {
        client_id: "test-client-id".to_string(),
        client_secret: "test-client-secret".to_string(),
        redirect_uri: "http://127.0.0.1:5000/callback".to_string(),
        frontend_url: "http://localhost:5173".to_string(),
        port: 5000,
        auth_url: "https://accounts.spotify.com/authorize".to_string(),
        token_url: "http://127.0.0.1:9/api/token".to_string(),
        api_url: "http://127.0.0.1:9/v1".to_string(),
    }
}

fn setup_app() -> axum::Router {
    build_router(Arc::new(test_config()))
}

fn test_request(uri: &str) -> Request<Body> {
    Request::builder()
        .method("GET")
        .uri(uri)
        .body(Body::empty())
        .unwrap()
}

// Test helper: extract the response body as a string
async fn extract_body(body: Body) -> String {
    let bytes = axum::body::to_bytes(body, usize::MAX)
        .await
        .expect("Should read body");
    String::from_utf8(bytes.to_vec()).expect("Should be UTF-8")
}

// Test helper: extract the response body as JSON
async fn extract_json(body: Body) -> Value {
    let bytes = axum::body::to_bytes(body, usize::MAX)
        .await
        .expect("Should read body");
    serde_json::from_slice(&bytes).expect("Should parse JSON")
}

#[tokio::test]
async fn test_health_endpoint() {
    let app = setup_app();

    let response = app.oneshot(test_request("/health")).await.unwrap();
    assert_eq!(response.status(), StatusCode::OK);

    let body = extract_json(response.into_body()).await;
    assert_eq!(body["status"], "ok");
    assert!(body["version"].is_string());
}

#[tokio::test]
async fn test_login_redirects_to_spotify() {
    let app = setup_app();

    let response = app.oneshot(test_request("/login")).await.unwrap();
    assert_eq!(response.status(), StatusCode::FOUND);

    let location = response
        .headers()
        .get(header::LOCATION)
        .expect("Should carry a Location header")
        .to_str()
        .unwrap();

    assert!(location.starts_with("https://accounts.spotify.com/authorize?response_type=code"));
    assert!(location.contains("client_id=test-client-id"));
    assert!(location.contains("redirect_uri=http%3A%2F%2F127.0.0.1%3A5000%2Fcallback"));

    // All twelve scopes, space-joined then percent-encoded
    for scope in AUTH_SCOPES {
        assert!(location.contains(scope), "missing scope {}", scope);
    }
    assert!(location.contains("%20"));
}

#[tokio::test]
async fn test_callback_without_code_returns_500() {
    let app = setup_app();

    // No `code` parameter: the empty code is still forwarded upstream,
    // which fails here, and the handler must not panic
    let response = app.oneshot(test_request("/callback")).await.unwrap();
    assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);

    let body = extract_body(response.into_body()).await;
    assert_eq!(body, "Failed to retrieve access token");
}

#[tokio::test]
async fn test_callback_upstream_failure_returns_500() {
    let app = setup_app();

    let response = app
        .oneshot(test_request("/callback?code=AQDummyCode"))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);
    let body = extract_body(response.into_body()).await;
    assert_eq!(body, "Failed to retrieve access token");
}

#[tokio::test]
async fn test_refresh_token_upstream_failure_returns_500_json() {
    let app = setup_app();

    let response = app
        .oneshot(test_request("/refresh_token?refresh_token=AQDummyRefresh"))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);

    let body = extract_json(response.into_body()).await;
    assert_eq!(body["error"], "Failed to refresh access token");
}

#[tokio::test]
async fn test_refresh_token_without_parameter_does_not_panic() {
    let app = setup_app();

    let response = app.oneshot(test_request("/refresh_token")).await.unwrap();

    // Absence is not validated locally; the upstream failure surfaces as 500
    assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);
    let body = extract_json(response.into_body()).await;
    assert_eq!(body["error"], "Failed to refresh access token");
}

#[tokio::test]
async fn test_recommendations_upstream_failure_returns_500_json() {
    let app = setup_app();

    let response = app
        .oneshot(test_request(
            "/recommendations?access_token=token&emotion=sad",
        ))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);

    let body = extract_json(response.into_body()).await;
    assert_eq!(body["error"], "Failed to retrieve recommendations");
}

#[tokio::test]
async fn test_cross_origin_requests_are_allowed() {
    let app = setup_app();

    let request = Request::builder()
        .method("GET")
        .uri("/health")
        .header(header::ORIGIN, "http://localhost:5173")
        .body(Body::empty())
        .unwrap();

    let response = app.oneshot(request).await.unwrap();
    assert_eq!(response.status(), StatusCode::OK);

    let allow_origin = response
        .headers()
        .get(header::ACCESS_CONTROL_ALLOW_ORIGIN)
        .expect("Should carry a CORS allow-origin header");
    assert_eq!(allow_origin, "*");
}
