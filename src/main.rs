/// brandkit: brand-asset management backend
///
/// Main entry point for the brandkit server. Initializes configuration and
/// starts the HTTP server.

use brandkit::{config::Config, server::start_server};

/// Application entry point
///
/// Initializes the server with default configuration and starts listening.
/// The server provides:
/// - Account and session API at /api/register, /api/login, /api/logout, /api/user
/// - Project management API at /api/projects/*
/// - Palette, typography and membership APIs nested under projects
/// - Logo uploads at /api/upload, served back from /uploads/*
/// - CSS/JSON exports at /api/projects/{id}/export/*
/// - Health check at /healthz
#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    // Load configuration (defaults plus BRANDKIT_* environment overrides)
    let config = Config::default();

    // Start the server
    start_server(config).await?;

    Ok(())
}
