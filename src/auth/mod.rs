/// Session and identity layer
///
/// Argon2 password hashing plus an in-process session manager. The manager is
/// injected through application state rather than held in a global.

pub mod password;
pub mod session;

pub use session::{Session, SessionManager};

/// Name of the session cookie issued at login/registration
pub const SESSION_COOKIE: &str = "brandkit_session";
