//! Sign-in flow: OAuth redirect, session exchange, refresh, and sign-out.
//!
//! SYSTEM CONTEXT
//! ==============
//! The hosted auth service runs the OAuth dance and redirects back to
//! `/auth-callback` with tokens in the URL fragment. The callback page posts
//! those tokens here; they are verified against the auth API and parked in
//! the [`SessionStore`](super::session::SessionStore) behind an opaque token.

#[cfg(test)]
#[path = "auth_test.rs"]
mod tests;

use std::str::FromStr;

use tourvisto_ui::net::types::{CurrentUser, SessionTokens};

use super::ServiceError;
use super::session::StoredSession;
use crate::state::AppState;
use crate::supabase::auth::authorize_url;
use crate::supabase::types::AuthUser;

/// Query parameters forwarded to the upstream provider: ask for a refresh
/// token and always show the consent screen.
pub const PROVIDER_QUERY_PARAMS: &[(&str, &str)] = &[("access_type", "offline"), ("prompt", "consent")];

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OAuthProvider {
    Google,
    Github,
    Facebook,
    Twitter,
}

impl OAuthProvider {
    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Google => "google",
            Self::Github => "github",
            Self::Facebook => "facebook",
            Self::Twitter => "twitter",
        }
    }
}

impl FromStr for OAuthProvider {
    type Err = ServiceError;

    fn from_str(raw: &str) -> Result<Self, Self::Err> {
        match raw.trim().to_ascii_lowercase().as_str() {
            "google" => Ok(Self::Google),
            "github" => Ok(Self::Github),
            "facebook" => Ok(Self::Facebook),
            "twitter" => Ok(Self::Twitter),
            _ => Err(ServiceError::UnknownProvider(raw.to_owned())),
        }
    }
}

/// The request's session after any token refresh.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ActiveSession {
    pub token: String,
    pub session: StoredSession,
}

impl ActiveSession {
    #[must_use]
    pub fn access_token(&self) -> &str {
        &self.session.access_token
    }
}

/// Authorize URL for `provider`, returning to this site's callback page.
///
/// # Errors
///
/// [`ServiceError::UnknownProvider`] for providers outside [`OAuthProvider`].
pub fn sign_in_url(state: &AppState, provider: &str) -> Result<String, ServiceError> {
    let provider: OAuthProvider = provider.parse()?;
    Ok(authorize_url(
        state.backend.auth_base_url(),
        provider.as_str(),
        &state.config.callback_url(),
        PROVIDER_QUERY_PARAMS,
    ))
}

/// Identity summary returned to the browser.
#[must_use]
pub fn current_user(user: &AuthUser) -> CurrentUser {
    let name = user.display_name();
    CurrentUser {
        id: user.id.clone(),
        email: user.email.clone(),
        name: (!name.is_empty()).then_some(name),
        avatar_url: user.metadata_picture().map(str::to_owned),
    }
}

/// Verify callback tokens and open a server session.
///
/// Returns the new session token and the signed-in identity.
///
/// # Errors
///
/// - [`ServiceError::Validation`] when either token is blank
/// - [`ServiceError::Unauthorized`] when the auth API rejects the access token
/// - [`ServiceError::Backend`] when the auth API cannot be reached
pub async fn establish_session(
    state: &AppState,
    tokens: &SessionTokens,
    now_unix: i64,
) -> Result<(String, CurrentUser), ServiceError> {
    if tokens.access_token.trim().is_empty() || tokens.refresh_token.trim().is_empty() {
        return Err(ServiceError::Validation("access and refresh tokens are required".to_owned()));
    }

    let user = match state.backend.get_user(&tokens.access_token).await {
        Ok(user) => user,
        Err(e) if e.is_unauthorized() => {
            tracing::warn!(error = %e, "callback tokens rejected");
            return Err(ServiceError::Unauthorized);
        }
        Err(e) => return Err(e.into()),
    };

    let token = state
        .sessions
        .create(StoredSession::new(&user.id, tokens, now_unix))
        .await;
    tracing::info!(user_id = %user.id, "session established");
    Ok((token, current_user(&user)))
}

/// Resolve a session cookie, refreshing the access token when it is about
/// to expire. A rejected refresh drops the session.
///
/// # Errors
///
/// [`ServiceError::Backend`] when the refresh call fails for reasons other
/// than a rejected refresh token.
pub async fn resolve_session(state: &AppState, token: &str, now_unix: i64) -> Result<Option<ActiveSession>, ServiceError> {
    let Some(session) = state.sessions.get(token).await else {
        return Ok(None);
    };
    if !session.needs_refresh(now_unix) {
        return Ok(Some(ActiveSession { token: token.to_owned(), session }));
    }

    match state.backend.refresh_session(&session.refresh_token).await {
        Ok(refreshed) => {
            let updated = state.sessions.apply_refresh(token, &refreshed, now_unix).await;
            tracing::debug!(user_id = %session.user_id, "access token refreshed");
            Ok(updated.map(|session| ActiveSession { token: token.to_owned(), session }))
        }
        Err(e) if e.is_unauthorized() => {
            tracing::warn!(user_id = %session.user_id, error = %e, "refresh rejected; dropping session");
            state.sessions.remove(token).await;
            Ok(None)
        }
        Err(e) => Err(e.into()),
    }
}

/// Auth user behind an active session; `None` when the token was revoked.
///
/// # Errors
///
/// [`ServiceError::Backend`] when the auth API cannot be reached.
pub async fn get_current_user(state: &AppState, active: &ActiveSession) -> Result<Option<AuthUser>, ServiceError> {
    match state.backend.get_user(active.access_token()).await {
        Ok(user) => Ok(Some(user)),
        Err(e) if e.is_unauthorized() => {
            state.sessions.remove(&active.token).await;
            Ok(None)
        }
        Err(e) => Err(e.into()),
    }
}

/// Drop the server session and revoke it upstream (best-effort).
///
/// Returns `true` when a session existed.
pub async fn logout_user(state: &AppState, token: Option<&str>) -> bool {
    let Some(token) = token.filter(|t| !t.is_empty()) else {
        return false;
    };
    let Some(session) = state.sessions.remove(token).await else {
        return false;
    };
    if let Err(e) = state.backend.sign_out(&session.access_token).await {
        tracing::warn!(user_id = %session.user_id, error = %e, "upstream sign-out failed");
    }
    tracing::info!(user_id = %session.user_id, "signed out");
    true
}
