//! `GET /`: welcome message pointing at the documentation page.

use crate::response::{index_body, IndexBody};
use axum::{
    http::{header, HeaderMap},
    Json,
};

const FORWARDED_PROTO: &str = "x-forwarded-proto";

/// Base URL of the incoming request, from `Host` and `X-Forwarded-Proto`.
fn base_url(headers: &HeaderMap) -> String {
    let host = headers
        .get(header::HOST)
        .and_then(|v| v.to_str().ok())
        .unwrap_or("localhost");
    let scheme = headers
        .get(FORWARDED_PROTO)
        .and_then(|v| v.to_str().ok())
        .unwrap_or("http");
    format!("{}://{}", scheme, host)
}

/// Home endpoint
///
/// Returns basic API information.
#[utoipa::path(
    get,
    path = "/",
    tag = "root",
    responses(
        (status = 200, description = "Welcome message with links to documentation", body = IndexBody)
    )
)]
pub async fn index(headers: HeaderMap) -> Json<IndexBody> {
    Json(index_body(&base_url(&headers)))
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::http::HeaderValue;

    #[test]
    fn base_url_uses_host_and_forwarded_proto() {
        let mut headers = HeaderMap::new();
        assert_eq!(base_url(&headers), "http://localhost");
        headers.insert(header::HOST, HeaderValue::from_static("api.example.com"));
        headers.insert(FORWARDED_PROTO, HeaderValue::from_static("https"));
        assert_eq!(base_url(&headers), "https://api.example.com");
    }
}
