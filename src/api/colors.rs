/// Brand color endpoints
///
/// Creation is nested under the project; update/delete address the color row
/// directly but still resolve its parent project and require ownership.

use crate::{
    api::{error::ApiError, extract::CurrentUser, AppState},
    brand::types::{InsertBrandColor, UpdateBrandColor},
    brand::BrandColor,
};
use axum::{
    extract::{Path, State},
    http::StatusCode,
    response::Json,
    routing::{delete, get, post, put},
    Router,
};

/// Create brand color routes
pub fn create_color_routes() -> Router<AppState> {
    Router::new()
        .route("/api/projects/{id}/colors", get(list_colors))
        .route("/api/projects/{id}/colors", post(create_color))
        .route("/api/colors/{id}", put(update_color))
        .route("/api/colors/{id}", delete(delete_color))
}

/// List a project's colors in display order
///
/// GET /api/projects/:id/colors
async fn list_colors(
    State(state): State<AppState>,
    CurrentUser(user): CurrentUser,
    Path(project_id): Path<i64>,
) -> Result<Json<Vec<BrandColor>>, ApiError> {
    let project = state
        .storage
        .get_project(project_id)
        .await?
        .ok_or(ApiError::NotFound("Project"))?;
    state.policy.require_access(user.id, &project).await?;

    let colors = state.storage.list_project_colors(project_id).await?;
    Ok(Json(colors))
}

/// Add a color to an owned project
///
/// POST /api/projects/:id/colors
async fn create_color(
    State(state): State<AppState>,
    CurrentUser(user): CurrentUser,
    Path(project_id): Path<i64>,
    Json(payload): Json<InsertBrandColor>,
) -> Result<(StatusCode, Json<BrandColor>), ApiError> {
    payload.validate()?;

    let project = state
        .storage
        .get_project(project_id)
        .await?
        .ok_or(ApiError::NotFound("Project"))?;
    state.policy.require_owner(user.id, &project)?;

    let color = state.storage.create_brand_color(project_id, &payload).await?;
    Ok((StatusCode::CREATED, Json(color)))
}

/// Update a color on an owned project
///
/// PUT /api/colors/:id
async fn update_color(
    State(state): State<AppState>,
    CurrentUser(user): CurrentUser,
    Path(id): Path<i64>,
    Json(payload): Json<UpdateBrandColor>,
) -> Result<Json<BrandColor>, ApiError> {
    payload.validate()?;

    let color = state
        .storage
        .get_brand_color(id)
        .await?
        .ok_or(ApiError::NotFound("Color"))?;
    let project = state
        .storage
        .get_project(color.project_id)
        .await?
        .ok_or(ApiError::NotFound("Project"))?;
    state.policy.require_owner(user.id, &project)?;

    let updated = state
        .storage
        .update_brand_color(id, &payload)
        .await?
        .ok_or(ApiError::NotFound("Color"))?;
    Ok(Json(updated))
}

/// Delete a color from an owned project
///
/// DELETE /api/colors/:id
async fn delete_color(
    State(state): State<AppState>,
    CurrentUser(user): CurrentUser,
    Path(id): Path<i64>,
) -> Result<StatusCode, ApiError> {
    let color = state
        .storage
        .get_brand_color(id)
        .await?
        .ok_or(ApiError::NotFound("Color"))?;
    let project = state
        .storage
        .get_project(color.project_id)
        .await?
        .ok_or(ApiError::NotFound("Project"))?;
    state.policy.require_owner(user.id, &project)?;

    if !state.storage.delete_brand_color(id).await? {
        return Err(ApiError::NotFound("Color"));
    }
    Ok(StatusCode::NO_CONTENT)
}
