//! Repository API handlers.
//!
//! Handlers behind `/repositories/:id` run after
//! [`require_existing_repository`](crate::middleware::require_existing_repository),
//! but the registry lock is released between the gate and the handler, so
//! each handler checks the id again under the lock it mutates with.

use axum::{
    extract::{rejection::JsonRejection, Path, State},
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use repo_registry::{validate_existing_id, RegistryError, Repository, UpdateRepository};

use crate::error::ApiError;
use crate::middleware::ValidatedRepository;
use crate::AppState;

/// Read an update body, treating a request without a JSON body as `{}`.
///
/// Malformed JSON and mistyped fields are still rejected by the extractor.
fn update_body(
    payload: Result<Json<UpdateRepository>, JsonRejection>,
) -> Result<UpdateRepository, Response> {
    match payload {
        Ok(Json(update)) => Ok(update),
        Err(JsonRejection::MissingJsonContentType(_)) => Ok(UpdateRepository::default()),
        Err(rejection) => Err(rejection.into_response()),
    }
}

fn into_error_response(err: RegistryError) -> Response {
    ApiError::from(err).into_response()
}

/// List all repositories in creation order.
///
/// # Endpoint
///
/// `GET /repositories`
///
/// # Response
///
/// - `200 OK`: JSON array of repository objects
pub async fn list_repositories(State(state): State<AppState>) -> Json<Vec<Repository>> {
    let repositories = state.registry().list().to_vec();
    Json(repositories)
}

/// Create a repository.
///
/// # Endpoint
///
/// `POST /repositories`
///
/// # Response
///
/// - `200 OK`: the created repository, with a fresh id and zero likes
/// - `400 Bad Request`: `{"error": "Invalid params"}`
pub async fn create_repository(
    State(state): State<AppState>,
    ValidatedRepository(new): ValidatedRepository,
) -> Json<Repository> {
    let repository = state.registry().create(new);
    tracing::info!(id = %repository.id, title = %repository.title, "Created repository");
    Json(repository)
}

/// Update the title, url, or techs of a repository.
///
/// Only fields with a non-empty value are applied; `likes` is never changed.
///
/// # Endpoint
///
/// `PUT /repositories/:id`
///
/// # Response
///
/// A request without a JSON body updates nothing and returns the record.
///
/// - `200 OK`: the updated repository
/// - `400 Bad Request`: `{"error": "Repository not found."}`
pub async fn update_repository(
    State(state): State<AppState>,
    Path(raw_id): Path<String>,
    payload: Result<Json<UpdateRepository>, JsonRejection>,
) -> Result<Json<Repository>, Response> {
    let update = update_body(payload)?;
    let repository = {
        let mut registry = state.registry();
        let id = validate_existing_id(&registry, &raw_id).map_err(into_error_response)?;
        registry.update(&id, update).map_err(into_error_response)?
    };
    tracing::info!(id = %repository.id, "Updated repository");
    Ok(Json(repository))
}

/// Delete a repository.
///
/// # Endpoint
///
/// `DELETE /repositories/:id`
///
/// # Response
///
/// - `204 No Content`
/// - `400 Bad Request`: `{"error": "Repository not found."}`
pub async fn delete_repository(
    State(state): State<AppState>,
    Path(raw_id): Path<String>,
) -> Result<StatusCode, ApiError> {
    let removed = {
        let mut registry = state.registry();
        let id = validate_existing_id(&registry, &raw_id)?;
        registry.delete(&id)?
    };
    tracing::info!(id = %removed.id, "Deleted repository");
    Ok(StatusCode::NO_CONTENT)
}

/// Add one like to a repository.
///
/// # Endpoint
///
/// `POST /repositories/:id/like`
///
/// # Response
///
/// - `200 OK`: the repository with its incremented like count
/// - `400 Bad Request`: `{"error": "Repository not found."}`
pub async fn like_repository(
    State(state): State<AppState>,
    Path(raw_id): Path<String>,
) -> Result<Json<Repository>, ApiError> {
    let repository = {
        let mut registry = state.registry();
        let id = validate_existing_id(&registry, &raw_id)?;
        registry.like(&id)?
    };
    tracing::info!(id = %repository.id, likes = repository.likes, "Liked repository");
    Ok(Json(repository))
}
