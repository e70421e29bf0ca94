//! In-memory session store for exchanged token pairs.
//!
//! ARCHITECTURE
//! ============
//! The browser only ever holds an opaque session token in an HttpOnly cookie.
//! The ID and access tokens stay on the server until the client asks for them
//! through `/api/auth/tokens`.
//!
//! TRADE-OFFS
//! ==========
//! Sessions live only as long as the process. A restart signs everyone out,
//! which is acceptable for a demonstration client.

use std::collections::HashMap;
use std::fmt::Write;
use std::sync::Arc;

use rand::Rng;
use time::{Duration, OffsetDateTime};
use tokio::sync::RwLock;

pub(crate) fn bytes_to_hex(bytes: &[u8]) -> String {
    let mut s = String::with_capacity(bytes.len() * 2);
    for b in bytes {
        let _ = write!(s, "{b:02x}");
    }
    s
}

/// Generate a cryptographically random 32-byte hex token.
#[must_use]
pub fn generate_token() -> String {
    let bytes: [u8; 32] = rand::rng().random();
    bytes_to_hex(&bytes)
}

/// Upper bound on a session's lifetime, whatever the provider's `expires_in` says.
pub const MAX_SESSION_SECS: i64 = 24 * 60 * 60;

/// Token pair and identity produced by a completed code exchange.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StoredSession {
    pub username: String,
    pub id_token: String,
    pub access_token: String,
    pub expires_at: OffsetDateTime,
}

impl StoredSession {
    /// Build a session expiring `expires_in_secs` from now, clamped to
    /// `0..=MAX_SESSION_SECS`.
    #[must_use]
    pub fn new(username: String, id_token: String, access_token: String, expires_in_secs: i64) -> Self {
        let lifetime = Duration::seconds(expires_in_secs.clamp(0, MAX_SESSION_SECS));
        Self { username, id_token, access_token, expires_at: OffsetDateTime::now_utc() + lifetime }
    }

    #[must_use]
    pub fn is_expired(&self, now: OffsetDateTime) -> bool {
        self.expires_at <= now
    }
}

/// Shared session map. Clone is cheap; all clones see the same sessions.
#[derive(Clone, Default)]
pub struct SessionStore {
    inner: Arc<RwLock<HashMap<String, StoredSession>>>,
}

impl SessionStore {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Store a session, returning the cookie token that refers to it.
    /// Expired sessions nobody looked up again are swept here.
    pub async fn create(&self, session: StoredSession) -> String {
        let token = generate_token();
        let now = OffsetDateTime::now_utc();
        let mut sessions = self.inner.write().await;
        sessions.retain(|_, existing| !existing.is_expired(now));
        sessions.insert(token.clone(), session);
        token
    }

    /// Look up a live session. Expired sessions are evicted and reported as absent.
    pub async fn get(&self, token: &str) -> Option<StoredSession> {
        let now = OffsetDateTime::now_utc();
        {
            let sessions = self.inner.read().await;
            match sessions.get(token) {
                None => return None,
                Some(session) if !session.is_expired(now) => return Some(session.clone()),
                Some(_) => {}
            }
        }
        self.inner.write().await.remove(token);
        None
    }

    /// Remove a session. Returns whether one was present.
    pub async fn remove(&self, token: &str) -> bool {
        self.inner.write().await.remove(token).is_some()
    }
}

#[cfg(test)]
#[path = "session_test.rs"]
mod tests;
