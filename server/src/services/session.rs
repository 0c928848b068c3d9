//! Server-side session store.
//!
//! ARCHITECTURE
//! ============
//! The browser holds only an opaque random token in an HttpOnly cookie. The
//! backend's access/refresh pair and the provider token stay in this
//! in-memory map keyed by that token.
//!
//! TRADE-OFFS
//! ==========
//! Sessions do not survive a restart; users sign in again. A background
//! sweeper drops sessions idle longer than the configured TTL.

#[cfg(test)]
#[path = "session_test.rs"]
mod tests;

use std::collections::HashMap;
use std::fmt::Write;
use std::sync::Arc;
use std::time::{Duration, Instant};

use rand::Rng;
use tokio::sync::RwLock;
use tokio::task::JoinHandle;
use tourvisto_ui::net::types::SessionTokens;

use crate::supabase::types::RefreshedSession;

/// Access tokens this close to expiry are refreshed before use.
pub const REFRESH_MARGIN_SECS: i64 = 60;

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

/// Backend credentials held for one browser session.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StoredSession {
    pub user_id: String,
    pub access_token: String,
    pub refresh_token: String,
    /// Unix timestamp at which `access_token` expires, when known.
    pub expires_at: Option<i64>,
    pub provider_token: Option<String>,
    last_seen: Instant,
}

impl StoredSession {
    #[must_use]
    pub fn new(user_id: &str, tokens: &SessionTokens, now_unix: i64) -> Self {
        Self {
            user_id: user_id.to_owned(),
            access_token: tokens.access_token.clone(),
            refresh_token: tokens.refresh_token.clone(),
            expires_at: expiry(tokens.expires_at, tokens.expires_in, now_unix),
            provider_token: tokens.provider_token.clone().filter(|t| !t.is_empty()),
            last_seen: Instant::now(),
        }
    }

    /// True when the access token expires within [`REFRESH_MARGIN_SECS`].
    #[must_use]
    pub fn needs_refresh(&self, now_unix: i64) -> bool {
        self.expires_at
            .is_some_and(|at| at - REFRESH_MARGIN_SECS <= now_unix)
    }

    fn apply_refresh(&mut self, refreshed: &RefreshedSession, now_unix: i64) {
        self.access_token.clone_from(&refreshed.access_token);
        self.refresh_token.clone_from(&refreshed.refresh_token);
        self.expires_at = expiry(refreshed.expires_at, refreshed.expires_in, now_unix);
    }
}

fn expiry(expires_at: Option<i64>, expires_in: Option<i64>, now_unix: i64) -> Option<i64> {
    expires_at.or_else(|| expires_in.map(|secs| now_unix + secs))
}

/// Shared map of session token to [`StoredSession`].
#[derive(Clone)]
pub struct SessionStore {
    inner: Arc<RwLock<HashMap<String, StoredSession>>>,
    ttl: Duration,
}

impl SessionStore {
    #[must_use]
    pub fn new(ttl: Duration) -> Self {
        Self { inner: Arc::new(RwLock::new(HashMap::new())), ttl }
    }

    #[must_use]
    pub fn ttl(&self) -> Duration {
        self.ttl
    }

    /// Store `session` under a fresh token and return the token.
    pub async fn create(&self, session: StoredSession) -> String {
        let token = generate_token();
        self.inner.write().await.insert(token.clone(), session);
        token
    }

    /// Look up a live session and mark it as seen.
    pub async fn get(&self, token: &str) -> Option<StoredSession> {
        let mut sessions = self.inner.write().await;
        let session = sessions.get_mut(token)?;
        if session.last_seen.elapsed() > self.ttl {
            sessions.remove(token);
            return None;
        }
        session.last_seen = Instant::now();
        Some(session.clone())
    }

    /// Whether `token` names a live session, without touching it.
    pub async fn contains(&self, token: &str) -> bool {
        self.inner
            .read()
            .await
            .get(token)
            .is_some_and(|s| s.last_seen.elapsed() <= self.ttl)
    }

    /// Replace the token pair after a refresh; returns the updated session.
    pub async fn apply_refresh(&self, token: &str, refreshed: &RefreshedSession, now_unix: i64) -> Option<StoredSession> {
        let mut sessions = self.inner.write().await;
        let session = sessions.get_mut(token)?;
        session.apply_refresh(refreshed, now_unix);
        Some(session.clone())
    }

    pub async fn remove(&self, token: &str) -> Option<StoredSession> {
        self.inner.write().await.remove(token)
    }

    /// Drop sessions idle longer than the TTL as of `now`; returns how many.
    pub async fn sweep(&self, now: Instant) -> usize {
        let mut sessions = self.inner.write().await;
        let before = sessions.len();
        sessions.retain(|_, s| now.saturating_duration_since(s.last_seen) <= self.ttl);
        before - sessions.len()
    }

    pub async fn session_count(&self) -> usize {
        self.inner.read().await.len()
    }
}

/// Spawn the idle-session sweeper. Returns a handle for shutdown.
pub fn spawn_session_sweeper(store: SessionStore, interval: Duration) -> JoinHandle<()> {
    tracing::info!(interval_secs = interval.as_secs(), ttl_secs = store.ttl().as_secs(), "session sweeper configured");
    tokio::spawn(async move {
        loop {
            tokio::time::sleep(interval).await;
            let removed = store.sweep(Instant::now()).await;
            if removed > 0 {
                tracing::debug!(removed, "expired sessions swept");
            }
        }
    })
}
