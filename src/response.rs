//! Response bodies shared by handlers and the error mapping.

use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

/// `{message}` body used for every error response.
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct MessageBody {
    #[schema(example = "Purpose with ID 1 not found")]
    pub message: String,
}

/// Body of `GET /`.
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct IndexBody {
    #[schema(example = "Welcome to the Purpose Management API")]
    pub message: String,
    #[schema(example = "http://localhost:8000/api/docs")]
    pub documentation: String,
}

pub const WELCOME_MESSAGE: &str = "Welcome to the Purpose Management API";

pub fn index_body(base_url: &str) -> IndexBody {
    IndexBody {
        message: WELCOME_MESSAGE.to_string(),
        documentation: format!("{}/api/docs", base_url.trim_end_matches('/')),
    }
}
