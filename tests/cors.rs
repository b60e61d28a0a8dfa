//! Integration tests for the configurable CORS policy
//!
//! The default policy is fully open (any origin, with credentials); an
//! explicit origin list restricts which origins receive CORS headers.

use axum::{
    Router,
    body::Body,
    http::{Request, StatusCode},
};
use llm_echo::{
    config::{Config, CorsConfig},
    handlers::{self, AppState},
};
use tower::ServiceExt;

fn open_app() -> Router {
    handlers::app(AppState::new(Config::default())).expect("should build app")
}

fn restricted_app(origin: &str) -> Router {
    let config = Config {
        cors: CorsConfig {
            allowed_origins: vec![origin.to_string()],
            allow_credentials: false,
        },
        ..Config::default()
    };
    handlers::app(AppState::new(config)).expect("should build app")
}

fn preflight(origin: &str) -> Request<Body> {
    Request::builder()
        .method("OPTIONS")
        .uri("/chat")
        .header("origin", origin)
        .header("access-control-request-method", "POST")
        .header("access-control-request-headers", "content-type")
        .body(Body::empty())
        .unwrap()
}

#[tokio::test]
async fn test_open_policy_mirrors_any_origin() {
    let response = open_app()
        .oneshot(preflight("http://example.com"))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::OK);
    assert_eq!(
        response
            .headers()
            .get("access-control-allow-origin")
            .expect("preflight should allow the origin"),
        "http://example.com"
    );
    assert_eq!(
        response
            .headers()
            .get("access-control-allow-credentials")
            .expect("open policy should allow credentials"),
        "true"
    );
}

#[tokio::test]
async fn test_open_policy_mirrors_requested_method_and_headers() {
    let response = open_app()
        .oneshot(preflight("http://localhost:5173"))
        .await
        .unwrap();

    let allow_methods = response
        .headers()
        .get("access-control-allow-methods")
        .expect("preflight should allow the requested method");
    assert!(allow_methods.to_str().unwrap().contains("POST"));

    let allow_headers = response
        .headers()
        .get("access-control-allow-headers")
        .expect("preflight should allow the requested headers");
    assert!(allow_headers.to_str().unwrap().contains("content-type"));
}

#[tokio::test]
async fn test_open_policy_adds_origin_on_simple_requests() {
    let response = open_app()
        .oneshot(
            Request::builder()
                .uri("/")
                .header("origin", "http://example.com")
                .body(Body::empty())
                .unwrap(),
        )
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::OK);
    assert_eq!(
        response
            .headers()
            .get("access-control-allow-origin")
            .expect("simple request should carry CORS headers"),
        "http://example.com"
    );
}

#[tokio::test]
async fn test_restricted_policy_allows_listed_origin() {
    let response = restricted_app("http://localhost:3000")
        .oneshot(preflight("http://localhost:3000"))
        .await
        .unwrap();

    assert_eq!(
        response
            .headers()
            .get("access-control-allow-origin")
            .expect("listed origin should be allowed"),
        "http://localhost:3000"
    );
}

#[tokio::test]
async fn test_restricted_policy_omits_headers_for_other_origins() {
    let response = restricted_app("http://localhost:3000")
        .oneshot(preflight("http://evil.example"))
        .await
        .unwrap();

    assert!(
        response
            .headers()
            .get("access-control-allow-origin")
            .is_none(),
        "unlisted origin must not receive CORS headers"
    );
}
