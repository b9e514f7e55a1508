//! Route assembly.

mod common;
mod docs;
mod purpose;

pub use common::common_routes;
pub use docs::docs_routes;
pub use purpose::purpose_routes;

use crate::config::Settings;
use crate::state::AppState;
use axum::extract::DefaultBodyLimit;
use axum::Router;
use tower::ServiceBuilder;
use tower_http::trace::TraceLayer;

/// Full application: every route plus request tracing and a body size limit.
/// The limit is enforced by the JSON extractor, so oversized bodies get the
/// same `{message}` error shape as every other failure.
pub fn app(state: AppState, settings: &Settings) -> Router {
    Router::new()
        .merge(common_routes(state.clone()))
        .merge(purpose_routes(state))
        .merge(docs_routes())
        .layer(
            ServiceBuilder::new()
                .layer(TraceLayer::new_for_http())
                .layer(DefaultBodyLimit::max(settings.max_body_bytes)),
        )
}
