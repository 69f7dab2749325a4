/// Server setup and initialization
///
/// Wires together all components: storage, sessions, the access policy and
/// HTTP routes. Provides the application factory used by main and by tests.

use crate::{
    api::{
        colors::create_color_routes, exports::create_export_routes,
        members::create_member_routes, projects::create_project_routes,
        typography::create_typography_routes, uploads::create_upload_routes,
        users::create_user_routes, AppState,
    },
    auth::SessionManager,
    brand::BrandStorage,
    config::Config,
    policy::AccessPolicy,
};
use anyhow::Result;
use axum::{extract::DefaultBodyLimit, routing::get, Router};
use std::sync::Arc;
use std::time::Duration;
use tokio::net::TcpListener;
use tower_http::services::ServeDir;

/// Assemble the router over an already-opened storage handle
///
/// Split out from [`create_app`] so tests can run against in-memory storage
/// and a temporary upload directory.
pub fn build_app(storage: BrandStorage, config: Config) -> Router {
    let sessions = Arc::new(SessionManager::new(Duration::from_secs(
        config.session.ttl_secs,
    )));
    let policy = AccessPolicy::new(storage.clone());
    let upload_dir = config.uploads.dir.clone();
    // Leave headroom above the file cap for multipart framing
    let body_limit = config.uploads.max_bytes + 1024 * 1024;

    let state = AppState {
        storage,
        sessions,
        policy,
        config: Arc::new(config),
    };

    Router::new()
        .route("/healthz", get(health_check))
        .merge(create_user_routes())
        .merge(create_project_routes())
        .merge(create_color_routes())
        .merge(create_typography_routes())
        .merge(create_member_routes())
        .merge(create_export_routes())
        .merge(create_upload_routes().layer(DefaultBodyLimit::max(body_limit)))
        .nest_service("/uploads", ServeDir::new(upload_dir))
        .with_state(state)
}

/// Create the main Axum application with all routes
///
/// Opens the database (creating the schema if needed) and ensures the upload
/// directory exists before wiring the routers.
pub async fn create_app(config: Config) -> Result<Router> {
    tracing::info!("Opening database at {}", config.database.path);
    let storage = BrandStorage::open(&config.database.path).await?;

    tracing::info!("Ensuring upload directory exists: {}", config.uploads.dir);
    std::fs::create_dir_all(&config.uploads.dir).map_err(|e| {
        anyhow::anyhow!("Failed to create upload directory '{}': {}", config.uploads.dir, e)
    })?;

    Ok(build_app(storage, config))
}

/// Start the HTTP server with the given configuration
pub async fn start_server(config: Config) -> Result<()> {
    // Initialize tracing subscriber for logging
    tracing_subscriber::fmt()
        .with_target(false)
        .with_level(true)
        .init();

    tracing::info!("Starting brandkit server...");

    let bind_addr = format!("{}:{}", config.server.host, config.server.port);
    let app = create_app(config).await?;

    let listener = TcpListener::bind(&bind_addr).await?;
    tracing::info!("Server listening on http://{}", bind_addr);

    axum::serve(listener, app.into_make_service()).await?;

    Ok(())
}

/// Health check endpoint handler
async fn health_check() -> &'static str {
    "ok"
}
