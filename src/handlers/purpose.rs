//! Purpose CRUD handlers: create, list, read, update, delete.

use crate::error::AppError;
use crate::extractors::{JsonBody, PurposeId};
use crate::model::{ListFilter, Purpose, PurposeCreate, PurposeUpdate, DEFAULT_LIMIT, DEFAULT_SKIP};
use crate::response::MessageBody;
use crate::service::RequestValidator;
use crate::state::AppState;
use axum::{
    extract::{Query, State},
    http::StatusCode,
    Json,
};
use std::collections::HashMap;

/// Build the list filter from raw query parameters.
///
/// `is_active` is compared as a string: `true` in any case selects active
/// purposes, any other value selects inactive ones. Unparsable or negative
/// `skip`/`limit` fall back to their defaults.
pub fn list_filter(params: &HashMap<String, String>) -> ListFilter {
    let non_negative = |key: &str, default: i64| {
        params
            .get(key)
            .and_then(|v| v.trim().parse::<i64>().ok())
            .filter(|n| *n >= 0)
            .unwrap_or(default)
    };
    ListFilter {
        name_contains: params.get("name").filter(|v| !v.is_empty()).cloned(),
        is_active: params.get("is_active").map(|v| v.to_lowercase() == "true"),
        skip: non_negative("skip", DEFAULT_SKIP),
        limit: non_negative("limit", DEFAULT_LIMIT),
    }
}

/// Create a new purpose
#[utoipa::path(
    post,
    path = "/purposes",
    tag = "purposes",
    request_body = PurposeCreate,
    responses(
        (status = 201, description = "Purpose created successfully", body = Purpose),
        (status = 409, description = "Purpose with this name already exists", body = MessageBody),
        (status = 400, description = "Invalid input", body = MessageBody)
    )
)]
pub async fn create(
    State(state): State<AppState>,
    JsonBody(body): JsonBody<PurposeCreate>,
) -> Result<(StatusCode, Json<Purpose>), AppError> {
    let new = RequestValidator::validate_create(body)?;
    let purpose = state.store.create(&new).await.map_err(|e| match e {
        AppError::Db(err) => AppError::BadRequest(err.to_string()),
        other => other,
    })?;
    Ok((StatusCode::CREATED, Json(purpose)))
}

/// Get all purposes with optional filtering
#[utoipa::path(
    get,
    path = "/purposes",
    tag = "purposes",
    params(
        ("name" = Option<String>, Query, description = "Filter purposes by name (partial match)"),
        ("is_active" = Option<bool>, Query, description = "Filter purposes by active status"),
        ("skip" = Option<i64>, Query, description = "Number of records to skip (for pagination)"),
        ("limit" = Option<i64>, Query, description = "Maximum number of records to return")
    ),
    responses(
        (status = 200, description = "A list of purposes", body = [Purpose])
    )
)]
pub async fn list(
    State(state): State<AppState>,
    Query(params): Query<HashMap<String, String>>,
) -> Result<Json<Vec<Purpose>>, AppError> {
    let filter = list_filter(&params);
    let purposes = state.store.list(&filter).await?;
    Ok(Json(purposes))
}

/// Get a specific purpose by ID
#[utoipa::path(
    get,
    path = "/purposes/{id}",
    tag = "purposes",
    params(("id" = i64, Path, description = "ID of the purpose to retrieve")),
    responses(
        (status = 200, description = "Purpose details", body = Purpose),
        (status = 404, description = "Purpose not found", body = MessageBody)
    )
)]
pub async fn read(
    State(state): State<AppState>,
    purpose_id: PurposeId,
) -> Result<Json<Purpose>, AppError> {
    let purpose = state
        .store
        .get_by_id(purpose_id.id)
        .await?
        .ok_or_else(|| purpose_id.not_found())?;
    Ok(Json(purpose))
}

/// Update an existing purpose
#[utoipa::path(
    put,
    path = "/purposes/{id}",
    tag = "purposes",
    params(("id" = i64, Path, description = "ID of the purpose to update")),
    request_body = PurposeUpdate,
    responses(
        (status = 200, description = "Purpose updated successfully", body = Purpose),
        (status = 400, description = "Invalid input", body = MessageBody),
        (status = 404, description = "Purpose not found", body = MessageBody),
        (status = 409, description = "Purpose with this name already exists", body = MessageBody)
    )
)]
pub async fn update(
    State(state): State<AppState>,
    purpose_id: PurposeId,
    JsonBody(body): JsonBody<PurposeUpdate>,
) -> Result<Json<Purpose>, AppError> {
    let changes = RequestValidator::validate_update(body)?;
    let purpose = state
        .store
        .update(purpose_id.id, &changes)
        .await?
        .ok_or_else(|| purpose_id.not_found())?;
    Ok(Json(purpose))
}

/// Delete a purpose
#[utoipa::path(
    delete,
    path = "/purposes/{id}",
    tag = "purposes",
    params(("id" = i64, Path, description = "ID of the purpose to delete")),
    responses(
        (status = 200, description = "Purpose deleted successfully", body = Purpose),
        (status = 404, description = "Purpose not found", body = MessageBody)
    )
)]
pub async fn delete(
    State(state): State<AppState>,
    purpose_id: PurposeId,
) -> Result<Json<Purpose>, AppError> {
    let purpose = state
        .store
        .delete(purpose_id.id)
        .await?
        .ok_or_else(|| purpose_id.not_found())?;
    Ok(Json(purpose))
}
