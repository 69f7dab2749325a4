/// Account and session endpoints
///
/// Registration, login, logout and the current-user probe. Successful
/// register/login responses carry the session cookie; user bodies never
/// include the credential hash.

use crate::{
    api::{
        error::ApiError,
        extract::{session_token, CurrentUser},
        AppState,
    },
    auth::{password, SESSION_COOKIE},
    brand::types::{Credentials, InsertUser},
    brand::User,
};
use axum::{
    extract::State,
    http::{header::SET_COOKIE, HeaderMap, StatusCode},
    response::{IntoResponse, Json},
    routing::{get, post},
    Router,
};

/// Create account and session routes
pub fn create_user_routes() -> Router<AppState> {
    Router::new()
        .route("/api/register", post(register))
        .route("/api/login", post(login))
        .route("/api/logout", post(logout))
        .route("/api/user", get(current_user))
}

fn session_cookie(token: &str, max_age_secs: u64) -> String {
    format!("{SESSION_COOKIE}={token}; HttpOnly; SameSite=Lax; Path=/; Max-Age={max_age_secs}")
}

fn clear_session_cookie() -> String {
    format!("{SESSION_COOKIE}=; HttpOnly; SameSite=Lax; Path=/; Max-Age=0")
}

/// Register a new account and log it in
///
/// POST /api/register
async fn register(
    State(state): State<AppState>,
    Json(payload): Json<InsertUser>,
) -> Result<impl IntoResponse, ApiError> {
    payload.validate()?;

    if state
        .storage
        .get_user_by_username(&payload.username)
        .await?
        .is_some()
    {
        return Err(ApiError::Conflict("Username already exists".to_string()));
    }
    if state
        .storage
        .get_user_by_email(&payload.email)
        .await?
        .is_some()
    {
        return Err(ApiError::Conflict("Email already exists".to_string()));
    }

    let hash = password::hash_password(&payload.password)?;
    let user = state
        .storage
        .create_user(&payload.username, &hash, &payload.email, &payload.name)
        .await?;

    let session = state.sessions.issue(user.id).await;
    tracing::info!("Registered user {} ({})", user.id, user.username);

    Ok((
        StatusCode::CREATED,
        [(
            SET_COOKIE,
            session_cookie(&session.token, state.sessions.ttl().as_secs()),
        )],
        Json(user),
    ))
}

/// Authenticate and open a session
///
/// POST /api/login
async fn login(
    State(state): State<AppState>,
    Json(payload): Json<Credentials>,
) -> Result<impl IntoResponse, ApiError> {
    let user: User = state
        .storage
        .get_user_by_username(&payload.username)
        .await?
        .ok_or(ApiError::InvalidCredentials)?;

    if !password::verify_password(&user.password, &payload.password) {
        return Err(ApiError::InvalidCredentials);
    }

    let session = state.sessions.issue(user.id).await;
    tracing::info!("User {} logged in", user.id);

    Ok((
        [(
            SET_COOKIE,
            session_cookie(&session.token, state.sessions.ttl().as_secs()),
        )],
        Json(user),
    ))
}

/// Close the current session
///
/// POST /api/logout
async fn logout(
    State(state): State<AppState>,
    headers: HeaderMap,
) -> Result<impl IntoResponse, ApiError> {
    let token = session_token(&headers).ok_or(ApiError::AuthenticationRequired)?;
    if !state.sessions.revoke(&token).await {
        return Err(ApiError::AuthenticationRequired);
    }
    Ok((
        StatusCode::NO_CONTENT,
        [(SET_COOKIE, clear_session_cookie())],
    ))
}

/// Return the authenticated user's profile
///
/// GET /api/user
async fn current_user(CurrentUser(user): CurrentUser) -> Json<User> {
    Json(user)
}
