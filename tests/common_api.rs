//! Integration tests for the index, operational and documentation routes.

mod common;

use axum::http::{header, Method, StatusCode};
use common::{body_bytes, build_test_app, call, send};

#[tokio::test]
async fn index_points_at_documentation() {
    let app = build_test_app().await;
    let (status, body) = call(&app, Method::GET, "/", None).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["message"], "Welcome to the Purpose Management API");
    assert_eq!(body["documentation"], "http://localhost:8000/api/docs");
}

#[tokio::test]
async fn health_and_ready_report_ok() {
    let app = build_test_app().await;
    let (status, body) = call(&app, Method::GET, "/health", None).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["status"], "ok");

    let (status, body) = call(&app, Method::GET, "/ready", None).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["database"], "ok");

    let (status, body) = call(&app, Method::GET, "/version", None).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["name"], "purpose-registry");
}

#[tokio::test]
async fn openapi_document_is_served() {
    let app = build_test_app().await;
    let (status, doc) = call(&app, Method::GET, "/api/openapi.json", None).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(doc["info"]["title"], "Purpose Management API");
    assert!(doc["paths"]["/purposes/{id}"]["delete"].is_object());
    assert!(doc["components"]["schemas"]["Purpose"].is_object());
}

#[tokio::test]
async fn docs_page_is_html() {
    let app = build_test_app().await;
    let response = send(&app, Method::GET, "/api/docs", None).await;
    assert_eq!(response.status(), StatusCode::OK);
    let content_type = response.headers()[header::CONTENT_TYPE].to_str().unwrap().to_string();
    assert!(content_type.starts_with("text/html"));
    let html = String::from_utf8(body_bytes(response).await).unwrap();
    assert!(html.contains("/api/openapi.json"));
}

#[tokio::test]
async fn unknown_route_returns_404() {
    let app = build_test_app().await;
    let response = send(&app, Method::GET, "/nope", None).await;
    assert_eq!(response.status(), StatusCode::NOT_FOUND);
}
