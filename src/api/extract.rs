/// Authenticated-identity extractor
///
/// Resolves the session cookie to a full user row. Handlers that take
/// `CurrentUser` reject unauthenticated requests with 401 before any project
/// or gate logic runs.

use crate::{api::error::ApiError, api::AppState, auth::SESSION_COOKIE, brand::User};
use axum::{
    extract::FromRequestParts,
    http::{header::COOKIE, request::Parts, HeaderMap},
};

/// The user identified by the request's session cookie
#[derive(Debug, Clone)]
pub struct CurrentUser(pub User);

/// Pull the session token out of the Cookie header, if present
pub fn session_token(headers: &HeaderMap) -> Option<String> {
    let cookies = headers.get(COOKIE)?.to_str().ok()?;
    cookies.split(';').find_map(|pair| {
        pair.trim()
            .strip_prefix(SESSION_COOKIE)?
            .strip_prefix('=')
            .map(|token| token.to_string())
    })
}

impl FromRequestParts<AppState> for CurrentUser {
    type Rejection = ApiError;

    async fn from_request_parts(
        parts: &mut Parts,
        state: &AppState,
    ) -> Result<Self, Self::Rejection> {
        let token =
            session_token(&parts.headers).ok_or(ApiError::AuthenticationRequired)?;
        let user_id = state
            .sessions
            .validate(&token)
            .await
            .ok_or(ApiError::AuthenticationRequired)?;
        // The session may outlive the account only transiently; treat a
        // missing row the same as no session.
        let user = state
            .storage
            .get_user(user_id)
            .await?
            .ok_or(ApiError::AuthenticationRequired)?;
        Ok(CurrentUser(user))
    }
}
