/// Project CRUD endpoints
///
/// Listing and creation are scoped to the caller; detail reads pass the
/// access gate, mutations require ownership. Not-found and access-denied are
/// always distinguished: an absent project is 404 regardless of who asks.

use crate::{
    api::{error::ApiError, extract::CurrentUser, AppState},
    brand::types::{InsertProject, UpdateProject},
    brand::{Project, ProjectWithDetails},
};
use axum::{
    extract::{Path, State},
    http::StatusCode,
    response::Json,
    routing::{delete, get, post, put},
    Router,
};

/// Create project CRUD routes
pub fn create_project_routes() -> Router<AppState> {
    Router::new()
        .route("/api/projects", get(list_projects))
        .route("/api/projects", post(create_project))
        .route("/api/projects/{id}", get(get_project))
        .route("/api/projects/{id}", put(update_project))
        .route("/api/projects/{id}", delete(delete_project))
}

/// List the caller's projects, most recently modified first
///
/// GET /api/projects
async fn list_projects(
    State(state): State<AppState>,
    CurrentUser(user): CurrentUser,
) -> Result<Json<Vec<Project>>, ApiError> {
    let projects = state.storage.list_projects_by_user(user.id).await?;
    Ok(Json(projects))
}

/// Create a project owned by the caller
///
/// POST /api/projects
async fn create_project(
    State(state): State<AppState>,
    CurrentUser(user): CurrentUser,
    Json(payload): Json<InsertProject>,
) -> Result<(StatusCode, Json<Project>), ApiError> {
    payload.validate()?;
    let project = state.storage.create_project(user.id, &payload).await?;
    tracing::info!("User {} created project {} ({})", user.id, project.id, project.name);
    Ok((StatusCode::CREATED, Json(project)))
}

/// Fetch the full project aggregate
///
/// GET /api/projects/:id
async fn get_project(
    State(state): State<AppState>,
    CurrentUser(user): CurrentUser,
    Path(id): Path<i64>,
) -> Result<Json<ProjectWithDetails>, ApiError> {
    let details = state
        .storage
        .get_project_with_details(id)
        .await?
        .ok_or(ApiError::NotFound("Project"))?;
    state.policy.require_access(user.id, &details.project).await?;
    Ok(Json(details))
}

/// Apply a partial update to an owned project
///
/// PUT /api/projects/:id
async fn update_project(
    State(state): State<AppState>,
    CurrentUser(user): CurrentUser,
    Path(id): Path<i64>,
    Json(payload): Json<UpdateProject>,
) -> Result<Json<Project>, ApiError> {
    payload.validate()?;

    let project = state
        .storage
        .get_project(id)
        .await?
        .ok_or(ApiError::NotFound("Project"))?;
    state.policy.require_owner(user.id, &project)?;

    let updated = state
        .storage
        .update_project(id, &payload)
        .await?
        .ok_or(ApiError::NotFound("Project"))?;
    Ok(Json(updated))
}

/// Delete an owned project and its dependent rows
///
/// DELETE /api/projects/:id
async fn delete_project(
    State(state): State<AppState>,
    CurrentUser(user): CurrentUser,
    Path(id): Path<i64>,
) -> Result<StatusCode, ApiError> {
    let project = state
        .storage
        .get_project(id)
        .await?
        .ok_or(ApiError::NotFound("Project"))?;
    state.policy.require_owner(user.id, &project)?;

    if !state.storage.delete_project(id).await? {
        return Err(ApiError::NotFound("Project"));
    }
    tracing::info!("User {} deleted project {}", user.id, id);
    Ok(StatusCode::NO_CONTENT)
}
