/// Logo upload endpoint
///
/// Accepts a multipart `logo` field, enforces the image-type allowlist and
/// the 5MB cap, and stores the file under a generated name. Files are served
/// back statically from /uploads/<name>.

use crate::{
    api::{error::ApiError, extract::CurrentUser, AppState},
    brand::types::FieldError,
};
use axum::{
    extract::{Multipart, State},
    response::Json,
    routing::post,
    Router,
};
use serde_json::{json, Value};
use std::path::Path;

/// File extensions accepted for logo uploads
const ALLOWED_EXTENSIONS: [&str; 5] = ["jpeg", "jpg", "png", "svg", "webp"];

/// MIME types accepted for logo uploads
const ALLOWED_MIME_TYPES: [&str; 4] =
    ["image/jpeg", "image/png", "image/svg+xml", "image/webp"];

/// Create the upload route
pub fn create_upload_routes() -> Router<AppState> {
    Router::new().route("/api/upload", post(upload_logo))
}

fn upload_error(message: &str) -> ApiError {
    ApiError::Validation(vec![FieldError {
        field: "logo",
        message: message.to_string(),
    }])
}

fn file_extension(filename: &str) -> Option<String> {
    Path::new(filename)
        .extension()
        .and_then(|ext| ext.to_str())
        .map(|ext| ext.to_lowercase())
}

/// Store an uploaded logo and return its public URL
///
/// POST /api/upload (multipart/form-data, field `logo`)
async fn upload_logo(
    State(state): State<AppState>,
    CurrentUser(user): CurrentUser,
    mut multipart: Multipart,
) -> Result<Json<Value>, ApiError> {
    while let Some(field) = multipart
        .next_field()
        .await
        .map_err(|_| upload_error("Malformed multipart body"))?
    {
        if field.name() != Some("logo") {
            continue;
        }

        let filename = field
            .file_name()
            .map(|name| name.to_string())
            .ok_or_else(|| upload_error("Missing filename"))?;
        let extension = file_extension(&filename)
            .filter(|ext| ALLOWED_EXTENSIONS.contains(&ext.as_str()))
            .ok_or_else(|| upload_error("Only image files are allowed"))?;

        let content_type = field
            .content_type()
            .map(|mime| mime.to_string())
            .ok_or_else(|| upload_error("Missing content type"))?;
        if !ALLOWED_MIME_TYPES.contains(&content_type.as_str()) {
            return Err(upload_error("Only image files are allowed"));
        }

        let bytes = field
            .bytes()
            .await
            .map_err(|_| upload_error("Upload too large or interrupted"))?;
        if bytes.len() > state.config.uploads.max_bytes {
            return Err(upload_error("File exceeds the 5MB limit"));
        }

        let stored_name = format!(
            "{}-{}.{}",
            chrono::Utc::now().timestamp_millis(),
            uuid::Uuid::new_v4().simple(),
            extension
        );
        let path = Path::new(&state.config.uploads.dir).join(&stored_name);
        tokio::fs::write(&path, &bytes)
            .await
            .map_err(|e| anyhow::anyhow!("Failed to store upload '{}': {}", path.display(), e))?;

        tracing::info!(
            "User {} uploaded {} ({} bytes) as {}",
            user.id,
            filename,
            bytes.len(),
            stored_name
        );
        return Ok(Json(json!({ "url": format!("/uploads/{stored_name}") })));
    }

    Err(upload_error("No file uploaded"))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn extensions_are_lowercased_and_checked() {
        assert_eq!(file_extension("Logo.PNG"), Some("png".to_string()));
        assert_eq!(file_extension("archive.tar.gz"), Some("gz".to_string()));
        assert_eq!(file_extension("noext"), None);
    }
}
