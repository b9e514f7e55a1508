//! Shared helpers for driving the full router in-process.

#![allow(dead_code)]

use axum::body::Body;
use axum::http::{header, Method, Request, Response, StatusCode};
use axum::Router;
use http_body_util::BodyExt;
use purpose_registry::{app, AppState, PurposeStore, Settings};
use serde_json::Value;
use std::path::Path;
use tower::ServiceExt;

/// Router backed by a fresh in-memory database.
pub async fn build_test_app() -> Router {
    build_app_with(Settings {
        database_url: "sqlite::memory:".into(),
        ..Settings::default()
    })
    .await
}

/// Router backed by a database file with a multi-connection pool.
pub async fn build_file_app(path: &Path) -> Router {
    build_app_with(Settings {
        database_url: format!("sqlite://{}", path.display()),
        max_connections: 5,
        ..Settings::default()
    })
    .await
}

async fn build_app_with(settings: Settings) -> Router {
    let store = PurposeStore::connect(&settings).await.unwrap();
    store.ensure_schema().await.unwrap();
    app(AppState::new(store), &settings)
}

pub async fn send(app: &Router, method: Method, uri: &str, body: Option<Value>) -> Response<Body> {
    let mut builder = Request::builder().method(method).uri(uri).header(header::HOST, "localhost:8000");
    let body = match body {
        Some(json) => {
            builder = builder.header(header::CONTENT_TYPE, "application/json");
            Body::from(json.to_string())
        }
        None => Body::empty(),
    };
    app.clone().oneshot(builder.body(body).unwrap()).await.unwrap()
}

pub async fn send_raw(app: &Router, method: Method, uri: &str, content_type: &str, body: &str) -> Response<Body> {
    let request = Request::builder()
        .method(method)
        .uri(uri)
        .header(header::CONTENT_TYPE, content_type)
        .body(Body::from(body.to_string()))
        .unwrap();
    app.clone().oneshot(request).await.unwrap()
}

pub async fn body_bytes(response: Response<Body>) -> Vec<u8> {
    response.into_body().collect().await.unwrap().to_bytes().to_vec()
}

pub async fn body_json(response: Response<Body>) -> Value {
    serde_json::from_slice(&body_bytes(response).await).unwrap()
}

/// Send and return status plus parsed JSON body.
pub async fn call(app: &Router, method: Method, uri: &str, body: Option<Value>) -> (StatusCode, Value) {
    let response = send(app, method, uri, body).await;
    let status = response.status();
    (status, body_json(response).await)
}

/// Create a purpose and return its JSON representation.
pub async fn create(app: &Router, body: Value) -> Value {
    let (status, json) = call(app, Method::POST, "/purposes", Some(body)).await;
    assert_eq!(status, StatusCode::CREATED, "create failed: {}", json);
    json
}
