/// Export endpoints
///
/// Download a project's brand data as a CSS variables file or a JSON
/// document. Both are attachments named after the project.

use crate::{
    api::{error::ApiError, extract::CurrentUser, AppState},
    export::{render_css, BrandExport},
};
use axum::{
    extract::{Path, State},
    http::header::{CONTENT_DISPOSITION, CONTENT_TYPE},
    response::{IntoResponse, Json},
    routing::get,
    Router,
};

/// Create export routes
pub fn create_export_routes() -> Router<AppState> {
    Router::new()
        .route("/api/projects/{id}/export/css", get(export_css))
        .route("/api/projects/{id}/export/json", get(export_json))
}

/// Download the CSS variables document
///
/// GET /api/projects/:id/export/css
async fn export_css(
    State(state): State<AppState>,
    CurrentUser(_user): CurrentUser,
    Path(id): Path<i64>,
) -> Result<impl IntoResponse, ApiError> {
    let details = state
        .storage
        .get_project_with_details(id)
        .await?
        .ok_or(ApiError::NotFound("Project"))?;

    let css = render_css(&details);
    Ok((
        [
            (CONTENT_TYPE, "text/css".to_string()),
            (
                CONTENT_DISPOSITION,
                format!("attachment; filename=\"{}-variables.css\"", details.project.name),
            ),
        ],
        css,
    ))
}

/// Download the JSON brand document
///
/// GET /api/projects/:id/export/json
async fn export_json(
    State(state): State<AppState>,
    CurrentUser(_user): CurrentUser,
    Path(id): Path<i64>,
) -> Result<impl IntoResponse, ApiError> {
    let details = state
        .storage
        .get_project_with_details(id)
        .await?
        .ok_or(ApiError::NotFound("Project"))?;

    let export = BrandExport::from_details(&details);
    Ok((
        [(
            CONTENT_DISPOSITION,
            format!("attachment; filename=\"{}-brand.json\"", details.project.name),
        )],
        Json(export),
    ))
}
