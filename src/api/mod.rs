/// HTTP API layer - REST endpoints for accounts, projects, palettes,
/// typography, membership, uploads and exports
///
/// Each submodule exposes a router factory; server.rs merges them over one
/// shared application state.

pub mod colors;
pub mod error;
pub mod exports;
pub mod extract;
pub mod members;
pub mod projects;
pub mod typography;
pub mod uploads;
pub mod users;

use crate::{auth::SessionManager, brand::BrandStorage, config::Config, policy::AccessPolicy};
use std::sync::Arc;

/// Application state containing shared resources
///
/// Everything handlers need is injected here; there are no module-level
/// singletons.
#[derive(Clone)]
pub struct AppState {
    /// SQLite-backed persistence
    pub storage: BrandStorage,
    /// Session token table
    pub sessions: Arc<SessionManager>,
    /// Project authorization gate
    pub policy: AccessPolicy,
    /// Runtime configuration (upload dir, limits)
    pub config: Arc<Config>,
}
