//! # Generic CRUD Handlers
//!
//! One parametrized handler set shared by every CRUD-exposed entity. Each
//! entity mounts the same six endpoints under its own collection prefix via
//! [`routes`]:
//!
//! | Method | Path                                  | Handler           |
//! |--------|---------------------------------------|-------------------|
//! | POST   | `/{name}s/add{Name}`                  | [`create_one`]    |
//! | POST   | `/{name}s/add{Name}s`                 | [`create_many`]   |
//! | GET    | `/{name}s`                            | [`list_all`]      |
//! | GET    | `/{name}s/{name}ById/{id}`            | [`get_by_id`]     |
//! | PUT    | `/{name}s/update{Name}`               | [`update`]        |
//! | DELETE | `/{name}s/delete{Name}/{id}`          | [`delete_by_id`]  |
//!
//! For example `Department` mounts `/departments/addDepartment`,
//! `/departments/departmentById/{id}` and so on. Write payloads are plain
//! JSON objects; the repository binds exactly the fields each payload
//! carries.

use crate::error::ApiError;
use crate::repositories::CrudRepository;
use crate::resource::CrudResource;
use crate::server::AppState;
use axum::{
    Router,
    extract::{Path, State, rejection::JsonRejection},
    response::Json,
    routing::{delete, get, post, put},
};
use serde::{Deserialize, Serialize};
use serde_json::Value as JsonValue;

/// Confirmation body returned by delete endpoints
#[derive(Debug, Serialize, Deserialize)]
pub struct MessageResponse {
    pub message: String,
}

/// Path ids arrive as text. Anything that does not parse as an integer key
/// is a generic failure, not a lookup miss.
fn parse_id<R: CrudResource>(raw: &str) -> Result<i32, ApiError> {
    raw.parse::<i32>().map_err(|e| {
        tracing::error!("Failed to parse {} id {:?}: {}", R::NAME, raw, e);
        ApiError::internal()
    })
}

/// Create one record and return the stored row
pub async fn create_one<R: CrudResource>(
    State(state): State<AppState>,
    payload: Result<Json<JsonValue>, JsonRejection>,
) -> Result<Json<R::Model>, ApiError> {
    let Json(payload) = payload?;
    let repo = CrudRepository::<R>::new(&state.db);
    let model = repo.insert_one(&payload).await.map_err(|e| {
        tracing::error!("Failed to create {}: {:?}", R::NAME, e);
        ApiError::internal()
    })?;
    Ok(Json(model))
}

/// Create a batch of records in one transaction and return the stored rows
/// in payload order. Any failure rolls back the whole batch.
pub async fn create_many<R: CrudResource>(
    State(state): State<AppState>,
    payload: Result<Json<Vec<JsonValue>>, JsonRejection>,
) -> Result<Json<Vec<R::Model>>, ApiError> {
    let Json(payloads) = payload?;
    let repo = CrudRepository::<R>::new(&state.db);
    let models = repo.insert_many(&payloads).await.map_err(|e| {
        tracing::error!("Failed to create batch of {}s: {:?}", R::NAME, e);
        ApiError::internal()
    })?;
    Ok(Json(models))
}

/// List every record of the entity
pub async fn list_all<R: CrudResource>(
    State(state): State<AppState>,
) -> Result<Json<Vec<R::Model>>, ApiError> {
    let repo = CrudRepository::<R>::new(&state.db);
    let models = repo.find_all().await.map_err(|e| {
        tracing::error!("Failed to list {}s: {:?}", R::NAME, e);
        ApiError::internal()
    })?;
    Ok(Json(models))
}

/// Fetch one record by its path id
pub async fn get_by_id<R: CrudResource>(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<Json<R::Model>, ApiError> {
    let id = parse_id::<R>(&id)?;
    let repo = CrudRepository::<R>::new(&state.db);
    let model = repo
        .find_by_id(id)
        .await
        .map_err(|e| {
            tracing::error!("Failed to fetch {}: {:?}", R::NAME, e);
            ApiError::internal()
        })?
        .ok_or_else(|| ApiError::not_found(R::DISPLAY_NAME))?;
    Ok(Json(model))
}

/// Update the record whose id the payload carries, overwriting only the
/// fields present in the payload. A missing, non-integer, or unmatched id
/// reports the record as not found.
pub async fn update<R: CrudResource>(
    State(state): State<AppState>,
    payload: Result<Json<JsonValue>, JsonRejection>,
) -> Result<Json<R::Model>, ApiError> {
    let Json(payload) = payload?;
    let repo = CrudRepository::<R>::new(&state.db);
    let model = repo
        .update_from_payload(&payload)
        .await
        .map_err(|e| {
            tracing::error!("Failed to update {}: {:?}", R::NAME, e);
            ApiError::internal()
        })?
        .ok_or_else(|| ApiError::not_found(R::DISPLAY_NAME))?;
    Ok(Json(model))
}

/// Delete one record by its path id
pub async fn delete_by_id<R: CrudResource>(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<Json<MessageResponse>, ApiError> {
    let id = parse_id::<R>(&id)?;
    let repo = CrudRepository::<R>::new(&state.db);
    let removed = repo.delete_by_id(id).await.map_err(|e| {
        tracing::error!("Failed to delete {}: {:?}", R::NAME, e);
        ApiError::internal()
    })?;
    if !removed {
        return Err(ApiError::not_found(R::DISPLAY_NAME));
    }
    Ok(Json(MessageResponse {
        message: format!("{} deleted successfully", R::DISPLAY_NAME),
    }))
}

/// Build the canonical route family for one entity
pub fn routes<R: CrudResource>() -> Router<AppState> {
    let collection = format!("/{}s", R::NAME);
    Router::new()
        .route(&collection, get(list_all::<R>))
        .route(
            &format!("{collection}/add{}", R::NAME_PASCAL),
            post(create_one::<R>),
        )
        .route(
            &format!("{collection}/add{}s", R::NAME_PASCAL),
            post(create_many::<R>),
        )
        .route(
            &format!("{collection}/{}ById/{{id}}", R::NAME),
            get(get_by_id::<R>),
        )
        .route(
            &format!("{collection}/update{}", R::NAME_PASCAL),
            put(update::<R>),
        )
        .route(
            &format!("{collection}/delete{}/{{id}}", R::NAME_PASCAL),
            delete(delete_by_id::<R>),
        )
}
