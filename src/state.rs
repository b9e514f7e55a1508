//! Shared application state for all routes.

use crate::store::PurposeStore;

#[derive(Clone)]
pub struct AppState {
    pub store: PurposeStore,
}

impl AppState {
    pub fn new(store: PurposeStore) -> Self {
        AppState { store }
    }
}
