/// Configuration management for the brandkit server
///
/// Handles server binding, database location, upload storage and session policy.

use serde::{Deserialize, Serialize};

/// Main application configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Config {
    /// Server configuration
    pub server: ServerConfig,
    /// Database configuration
    pub database: DatabaseConfig,
    /// Uploaded-file storage configuration
    pub uploads: UploadConfig,
    /// Session policy
    pub session: SessionConfig,
}

/// HTTP server configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ServerConfig {
    /// Server bind address (e.g., "0.0.0.0")
    pub host: String,
    /// Server port number
    pub port: u16,
}

/// SQLite database configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DatabaseConfig {
    /// Path to the SQLite database file (default: "data/brandkit.db")
    pub path: String,
}

/// Logo upload storage configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct UploadConfig {
    /// Directory uploaded logos are written to and served from (default: "uploads")
    pub dir: String,
    /// Maximum accepted file size in bytes (default: 5MB)
    pub max_bytes: usize,
}

/// Session lifetime configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SessionConfig {
    /// Session time-to-live in seconds (default: 7 days)
    pub ttl_secs: u64,
}

impl Default for Config {
    /// Default configuration with ENV_VAR support for container deployment
    fn default() -> Self {
        Self {
            server: ServerConfig {
                host: std::env::var("BRANDKIT_HOST").unwrap_or_else(|_| "0.0.0.0".to_string()),
                port: std::env::var("BRANDKIT_PORT")
                    .unwrap_or_else(|_| "3000".to_string())
                    .parse()
                    .unwrap_or(3000),
            },
            database: DatabaseConfig {
                path: std::env::var("BRANDKIT_DATABASE_PATH")
                    .unwrap_or_else(|_| "data/brandkit.db".to_string()),
            },
            uploads: UploadConfig {
                dir: std::env::var("BRANDKIT_UPLOAD_DIR")
                    .unwrap_or_else(|_| "uploads".to_string()),
                max_bytes: 5 * 1024 * 1024,
            },
            session: SessionConfig {
                ttl_secs: std::env::var("BRANDKIT_SESSION_TTL_SECS")
                    .unwrap_or_else(|_| "604800".to_string())
                    .parse()
                    .unwrap_or(604_800),
            },
        }
    }
}
