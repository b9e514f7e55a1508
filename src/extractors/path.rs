//! `{id}` path segment extractor for purpose routes.

use crate::error::AppError;
use async_trait::async_trait;
use axum::{
    extract::{FromRequestParts, Path},
    http::request::Parts,
};

/// Purpose id from the path, keeping the raw segment for not-found messages.
///
/// A segment that cannot be decoded is a 400; one that decodes but is not an
/// integer can never match a row and is a 404.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct PurposeId {
    pub id: i64,
    pub raw: String,
}

impl PurposeId {
    pub fn parse(raw: String) -> Result<Self, AppError> {
        match raw.parse() {
            Ok(id) => Ok(PurposeId { id, raw }),
            Err(_) => Err(AppError::NotFound(raw)),
        }
    }

    pub fn not_found(self) -> AppError {
        AppError::NotFound(self.raw)
    }
}

#[async_trait]
impl<S> FromRequestParts<S> for PurposeId
where
    S: Send + Sync,
{
    type Rejection = AppError;

    async fn from_request_parts(parts: &mut Parts, state: &S) -> Result<Self, Self::Rejection> {
        let Path(raw) = Path::<String>::from_request_parts(parts, state)
            .await
            .map_err(|rejection| AppError::BadRequest(rejection.body_text()))?;
        PurposeId::parse(raw)
    }
}
