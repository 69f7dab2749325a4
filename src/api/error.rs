/// API error taxonomy and HTTP mapping
///
/// One enum covers every failure a handler can surface. Validation failures
/// carry their field-level errors onto the wire; unexpected failures are
/// logged server-side and answered with a generic message.

use crate::brand::types::FieldError;
use axum::{
    http::StatusCode,
    response::{IntoResponse, Json, Response},
};
use serde_json::json;

#[derive(Debug, thiserror::Error)]
pub enum ApiError {
    /// No valid session on the request
    #[error("Authentication required")]
    AuthenticationRequired,
    /// Login attempt with a bad username or password
    #[error("Invalid username or password")]
    InvalidCredentials,
    /// Authenticated but failed the ownership/membership gate
    #[error("Access denied")]
    AccessDenied,
    /// The named entity does not exist
    #[error("{0} not found")]
    NotFound(&'static str),
    /// Request body failed schema validation
    #[error("Validation error")]
    Validation(Vec<FieldError>),
    /// Uniqueness conflict (duplicate username/email/membership)
    #[error("{0}")]
    Conflict(String),
    /// Persistence or runtime failure; details stay server-side
    #[error("Internal server error")]
    Internal(anyhow::Error),
}

impl From<anyhow::Error> for ApiError {
    fn from(err: anyhow::Error) -> Self {
        ApiError::Internal(err)
    }
}

impl From<Vec<FieldError>> for ApiError {
    fn from(errors: Vec<FieldError>) -> Self {
        ApiError::Validation(errors)
    }
}

impl ApiError {
    pub fn status(&self) -> StatusCode {
        match self {
            ApiError::AuthenticationRequired | ApiError::InvalidCredentials => {
                StatusCode::UNAUTHORIZED
            }
            ApiError::AccessDenied => StatusCode::FORBIDDEN,
            ApiError::NotFound(_) => StatusCode::NOT_FOUND,
            ApiError::Validation(_) => StatusCode::BAD_REQUEST,
            ApiError::Conflict(_) => StatusCode::CONFLICT,
            ApiError::Internal(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let status = self.status();
        let body = match &self {
            ApiError::Validation(errors) => json!({
                "message": "Validation error",
                "errors": errors,
            }),
            ApiError::Internal(err) => {
                tracing::error!("Request failed: {:#}", err);
                json!({ "message": "Internal server error" })
            }
            other => json!({ "message": other.to_string() }),
        };
        (status, Json(body)).into_response()
    }
}
