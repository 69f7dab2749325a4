/// In-process session store
///
/// Maps opaque bearer tokens (carried in the session cookie) to user ids with
/// a fixed TTL. Expired entries are dropped lazily on validation.

use base64::Engine;
use std::collections::HashMap;
use std::time::{Duration, Instant};
use tokio::sync::RwLock;

/// An issued session
#[derive(Debug, Clone)]
pub struct Session {
    /// Opaque token placed in the session cookie
    pub token: String,
    /// The authenticated user
    pub user_id: i64,
    pub issued_at: Instant,
    pub expires_at: Instant,
}

/// Session manager with an in-memory token table
///
/// Injected via application state; one instance per server.
#[derive(Debug)]
pub struct SessionManager {
    ttl: Duration,
    sessions: RwLock<HashMap<String, Session>>,
}

/// 256-bit random token, base64url without padding
fn generate_token() -> String {
    let mut buf = [0u8; 32];
    let _ = getrandom::getrandom(&mut buf);
    base64::engine::general_purpose::URL_SAFE_NO_PAD.encode(buf)
}

impl SessionManager {
    pub fn new(ttl: Duration) -> Self {
        Self {
            ttl,
            sessions: RwLock::new(HashMap::new()),
        }
    }

    /// Issue a fresh session for `user_id`
    pub async fn issue(&self, user_id: i64) -> Session {
        let now = Instant::now();
        let session = Session {
            token: generate_token(),
            user_id,
            issued_at: now,
            expires_at: now + self.ttl,
        };
        self.sessions
            .write()
            .await
            .insert(session.token.clone(), session.clone());
        tracing::debug!("session.issue user={} ttl_secs={}", user_id, self.ttl.as_secs());
        session
    }

    /// Resolve a token to its user id; expired tokens are removed
    pub async fn validate(&self, token: &str) -> Option<i64> {
        let now = Instant::now();
        let expired = {
            let sessions = self.sessions.read().await;
            match sessions.get(token) {
                Some(session) if session.expires_at > now => return Some(session.user_id),
                Some(_) => true,
                None => false,
            }
        };
        if expired {
            self.sessions.write().await.remove(token);
        }
        None
    }

    /// Revoke a token (logout). Returns whether it existed.
    pub async fn revoke(&self, token: &str) -> bool {
        let removed = self.sessions.write().await.remove(token).is_some();
        if removed {
            tracing::debug!("session.revoke");
        }
        removed
    }

    /// Max-Age value for the session cookie
    pub fn ttl(&self) -> Duration {
        self.ttl
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn issue_and_validate() {
        let manager = SessionManager::new(Duration::from_secs(60));
        let session = manager.issue(42).await;
        assert_eq!(manager.validate(&session.token).await, Some(42));
        assert_eq!(manager.validate("unknown-token").await, None);
    }

    #[tokio::test]
    async fn revoked_tokens_stop_validating() {
        let manager = SessionManager::new(Duration::from_secs(60));
        let session = manager.issue(7).await;
        assert!(manager.revoke(&session.token).await);
        assert!(!manager.revoke(&session.token).await);
        assert_eq!(manager.validate(&session.token).await, None);
    }

    #[tokio::test]
    async fn expired_tokens_are_dropped() {
        let manager = SessionManager::new(Duration::from_secs(0));
        let session = manager.issue(7).await;
        assert_eq!(manager.validate(&session.token).await, None);
    }

    #[tokio::test]
    async fn tokens_are_unique() {
        let manager = SessionManager::new(Duration::from_secs(60));
        let a = manager.issue(1).await;
        let b = manager.issue(1).await;
        assert_ne!(a.token, b.token);
    }
}
