//! Integration tests for routing errors, malformed bodies, health, and CORS.

mod helpers;

use axum::body::Body;
use http::{Request, StatusCode};
use serde_json::json;

#[tokio::test]
async fn test_unknown_route_is_not_found() {
    let app = helpers::TestApp::new();

    let response = app.request("GET", "/nope", None).await;

    assert_eq!(
        response.body,
        json!({"success": false, "error": 404, "message": "resource not found"})
    );
    assert_eq!(response.status, StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn test_wrong_method_is_not_allowed() {
    let app = helpers::TestApp::new();

    let response = app.request("PUT", "/questions", None).await;
    response.assert_error(StatusCode::METHOD_NOT_ALLOWED, "method not allowed");

    let response = app.request("GET", "/quizzes", None).await;
    response.assert_error(StatusCode::METHOD_NOT_ALLOWED, "method not allowed");

    let response = app.request("GET", "/questions/1", None).await;
    response.assert_error(StatusCode::METHOD_NOT_ALLOWED, "method not allowed");
}

#[tokio::test]
async fn test_malformed_json_is_bad_request() {
    let app = helpers::TestApp::new();

    let response = app.request_raw("POST", "/questions", "{not json").await;
    response.assert_error(StatusCode::BAD_REQUEST, "bad request");

    let response = app.request_raw("POST", "/search", "").await;
    response.assert_error(StatusCode::BAD_REQUEST, "bad request");
}

#[tokio::test]
async fn test_health() {
    let app = helpers::TestApp::new();

    let response = app.request("GET", "/health", None).await;

    assert_eq!(response.status, StatusCode::OK);
    assert_eq!(response.body["success"], true);
    assert_eq!(response.body["status"], "ok");
    assert!(response.body["version"].is_string());
}

#[tokio::test]
async fn test_cors_preflight() {
    let app = helpers::TestApp::new();

    let req = Request::builder()
        .method("OPTIONS")
        .uri("/questions")
        .header("Origin", "http://localhost:3000")
        .header("Access-Control-Request-Method", "POST")
        .header("Access-Control-Request-Headers", "content-type")
        .body(Body::empty())
        .expect("Failed to build request");

    let response = app.send(req).await;

    assert_eq!(response.status(), StatusCode::OK);
    let headers = response.headers();
    assert_eq!(headers["access-control-allow-origin"], "*");
    let methods = headers["access-control-allow-methods"]
        .to_str()
        .expect("methods header is ascii");
    assert!(methods.contains("PATCH"));
    assert!(methods.contains("DELETE"));
}

#[tokio::test]
async fn test_cors_headers_on_simple_request() {
    let app = helpers::TestApp::new();

    let req = Request::builder()
        .method("GET")
        .uri("/categories")
        .header("Origin", "http://localhost:3000")
        .body(Body::empty())
        .expect("Failed to build request");

    let response = app.send(req).await;

    assert_eq!(response.status(), StatusCode::OK);
    assert_eq!(response.headers()["access-control-allow-origin"], "*");
}
