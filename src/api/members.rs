/// Project membership endpoints
///
/// Only the owner manages the member list. Roles are validated and stored;
/// they do not grant write rights anywhere in the API.

use crate::{
    api::{error::ApiError, extract::CurrentUser, AppState},
    brand::types::{InsertProjectMember, UpdateMemberRole},
    brand::{MemberWithUser, ProjectMember},
};
use axum::{
    extract::{Path, State},
    http::StatusCode,
    response::Json,
    routing::{delete, get, post, put},
    Router,
};

/// Create membership routes
pub fn create_member_routes() -> Router<AppState> {
    Router::new()
        .route("/api/projects/{id}/members", get(list_members))
        .route("/api/projects/{id}/members", post(add_member))
        .route("/api/projects/{id}/members/{user_id}", put(update_member_role))
        .route("/api/projects/{id}/members/{user_id}", delete(remove_member))
}

/// List a project's members with their public identities
///
/// GET /api/projects/:id/members
async fn list_members(
    State(state): State<AppState>,
    CurrentUser(user): CurrentUser,
    Path(project_id): Path<i64>,
) -> Result<Json<Vec<MemberWithUser>>, ApiError> {
    let project = state
        .storage
        .get_project(project_id)
        .await?
        .ok_or(ApiError::NotFound("Project"))?;
    state.policy.require_access(user.id, &project).await?;

    let members = state.storage.list_project_members(project_id).await?;
    Ok(Json(members))
}

/// Invite a user to an owned project
///
/// POST /api/projects/:id/members
async fn add_member(
    State(state): State<AppState>,
    CurrentUser(user): CurrentUser,
    Path(project_id): Path<i64>,
    Json(payload): Json<InsertProjectMember>,
) -> Result<(StatusCode, Json<ProjectMember>), ApiError> {
    payload.validate()?;

    let project = state
        .storage
        .get_project(project_id)
        .await?
        .ok_or(ApiError::NotFound("Project"))?;
    state.policy.require_owner(user.id, &project)?;

    if state.storage.get_user(payload.user_id).await?.is_none() {
        return Err(ApiError::NotFound("User"));
    }
    if state
        .storage
        .get_project_member(project_id, payload.user_id)
        .await?
        .is_some()
    {
        return Err(ApiError::Conflict("User is already a member".to_string()));
    }

    let member = state.storage.add_project_member(project_id, &payload).await?;
    tracing::info!(
        "User {} invited user {} to project {} as {}",
        user.id,
        member.user_id,
        project_id,
        member.role
    );
    Ok((StatusCode::CREATED, Json(member)))
}

/// Change a member's stored role
///
/// PUT /api/projects/:id/members/:userId
async fn update_member_role(
    State(state): State<AppState>,
    CurrentUser(user): CurrentUser,
    Path((project_id, member_user_id)): Path<(i64, i64)>,
    Json(payload): Json<UpdateMemberRole>,
) -> Result<Json<ProjectMember>, ApiError> {
    payload.validate()?;

    let project = state
        .storage
        .get_project(project_id)
        .await?
        .ok_or(ApiError::NotFound("Project"))?;
    state.policy.require_owner(user.id, &project)?;

    let member = state
        .storage
        .update_project_member_role(project_id, member_user_id, &payload.role)
        .await?
        .ok_or(ApiError::NotFound("Member"))?;
    Ok(Json(member))
}

/// Remove a member from an owned project
///
/// DELETE /api/projects/:id/members/:userId
async fn remove_member(
    State(state): State<AppState>,
    CurrentUser(user): CurrentUser,
    Path((project_id, member_user_id)): Path<(i64, i64)>,
) -> Result<StatusCode, ApiError> {
    let project = state
        .storage
        .get_project(project_id)
        .await?
        .ok_or(ApiError::NotFound("Project"))?;
    state.policy.require_owner(user.id, &project)?;

    if !state
        .storage
        .remove_project_member(project_id, member_user_id)
        .await?
    {
        return Err(ApiError::NotFound("Member"));
    }
    Ok(StatusCode::NO_CONTENT)
}
