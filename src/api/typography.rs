/// Brand typography endpoints
///
/// Same shape as the color routes: creation nested under the project,
/// update/delete by row id with the parent project's ownership gate applied.

use crate::{
    api::{error::ApiError, extract::CurrentUser, AppState},
    brand::types::{InsertBrandTypography, UpdateBrandTypography},
    brand::BrandTypography,
};
use axum::{
    extract::{Path, State},
    http::StatusCode,
    response::Json,
    routing::{delete, get, post, put},
    Router,
};

/// Create typography routes
pub fn create_typography_routes() -> Router<AppState> {
    Router::new()
        .route("/api/projects/{id}/typography", get(list_typography))
        .route("/api/projects/{id}/typography", post(create_typography))
        .route("/api/typography/{id}", put(update_typography))
        .route("/api/typography/{id}", delete(delete_typography))
}

/// List a project's typography entries
///
/// GET /api/projects/:id/typography
async fn list_typography(
    State(state): State<AppState>,
    CurrentUser(user): CurrentUser,
    Path(project_id): Path<i64>,
) -> Result<Json<Vec<BrandTypography>>, ApiError> {
    let project = state
        .storage
        .get_project(project_id)
        .await?
        .ok_or(ApiError::NotFound("Project"))?;
    state.policy.require_access(user.id, &project).await?;

    let typography = state.storage.list_project_typography(project_id).await?;
    Ok(Json(typography))
}

/// Add a typography entry to an owned project
///
/// POST /api/projects/:id/typography
async fn create_typography(
    State(state): State<AppState>,
    CurrentUser(user): CurrentUser,
    Path(project_id): Path<i64>,
    Json(payload): Json<InsertBrandTypography>,
) -> Result<(StatusCode, Json<BrandTypography>), ApiError> {
    payload.validate()?;

    let project = state
        .storage
        .get_project(project_id)
        .await?
        .ok_or(ApiError::NotFound("Project"))?;
    state.policy.require_owner(user.id, &project)?;

    let typography = state
        .storage
        .create_brand_typography(project_id, &payload)
        .await?;
    Ok((StatusCode::CREATED, Json(typography)))
}

/// Update a typography entry on an owned project
///
/// PUT /api/typography/:id
async fn update_typography(
    State(state): State<AppState>,
    CurrentUser(user): CurrentUser,
    Path(id): Path<i64>,
    Json(payload): Json<UpdateBrandTypography>,
) -> Result<Json<BrandTypography>, ApiError> {
    payload.validate()?;

    let typography = state
        .storage
        .get_brand_typography(id)
        .await?
        .ok_or(ApiError::NotFound("Typography"))?;
    let project = state
        .storage
        .get_project(typography.project_id)
        .await?
        .ok_or(ApiError::NotFound("Project"))?;
    state.policy.require_owner(user.id, &project)?;

    let updated = state
        .storage
        .update_brand_typography(id, &payload)
        .await?
        .ok_or(ApiError::NotFound("Typography"))?;
    Ok(Json(updated))
}

/// Delete a typography entry from an owned project
///
/// DELETE /api/typography/:id
async fn delete_typography(
    State(state): State<AppState>,
    CurrentUser(user): CurrentUser,
    Path(id): Path<i64>,
) -> Result<StatusCode, ApiError> {
    let typography = state
        .storage
        .get_brand_typography(id)
        .await?
        .ok_or(ApiError::NotFound("Typography"))?;
    let project = state
        .storage
        .get_project(typography.project_id)
        .await?
        .ok_or(ApiError::NotFound("Project"))?;
    state.policy.require_owner(user.id, &project)?;

    if !state.storage.delete_brand_typography(id).await? {
        return Err(ApiError::NotFound("Typography"));
    }
    Ok(StatusCode::NO_CONTENT)
}
