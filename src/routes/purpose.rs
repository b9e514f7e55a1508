//! Purpose CRUD routes.

use crate::handlers::purpose::{create, delete, list, read, update};
use crate::state::AppState;
use axum::{routing::get, Router};

pub fn purpose_routes(state: AppState) -> Router {
    Router::new()
        .route("/purposes", get(list).post(create))
        .route("/purposes/:id", get(read).put(update).delete(delete))
        .with_state(state)
}
