/// brandkit: brand-asset management backend
///
/// This library provides the HTTP API for managing brand projects: color
/// palettes, typography choices, team membership, logo uploads and CSS/JSON
/// exports, over SQLite storage with session-cookie authentication.

// Core configuration and setup
pub mod config;

// Brand domain layer - entities, DTOs and SQLite persistence
pub mod brand;

// Session and identity layer - password hashing and session tokens
pub mod auth;

// Project access policy - the single authorization gate
pub mod policy;

// Export formatters - pure transforms to CSS and JSON documents
pub mod export;

// HTTP API layer - REST endpoints and error taxonomy
pub mod api;

// Server setup and initialization
pub mod server;

// Re-export commonly used types for external consumers
pub use brand::{BrandStorage, Project, ProjectWithDetails, User};
pub use config::Config;
pub use policy::AccessPolicy;
pub use server::{build_app, create_app, start_server};
