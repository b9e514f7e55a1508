//! Purpose registry: REST API for managing the reasons sensitive data is retained.

pub mod config;
pub mod error;
pub mod extractors;
pub mod handlers;
pub mod model;
pub mod openapi;
pub mod response;
pub mod routes;
pub mod seed;
pub mod service;
pub mod state;
pub mod store;

pub use config::Settings;
pub use error::{AppError, ConfigError};
pub use model::{ListFilter, NewPurpose, Purpose, PurposeChanges};
pub use openapi::ApiDoc;
pub use routes::{app, common_routes, docs_routes, purpose_routes};
pub use seed::{seed_if_empty, SeedOutcome};
pub use state::AppState;
pub use store::PurposeStore;
