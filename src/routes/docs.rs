//! Documentation routes: OpenAPI document and viewer page.

use crate::openapi::{docs_page, openapi_json, DOCS_PATH, OPENAPI_PATH};
use axum::{routing::get, Router};

pub fn docs_routes() -> Router {
    Router::new()
        .route(OPENAPI_PATH, get(openapi_json))
        .route(DOCS_PATH, get(docs_page))
}
