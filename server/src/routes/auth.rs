//! Auth routes: OAuth redirect, callback session exchange, bootstrap, logout.

use axum::extract::{FromRef, Path, State};
use axum::http::StatusCode;
use axum::http::request::Parts;
use axum::response::{IntoResponse, Json, Redirect, Response};
use axum_extra::extract::cookie::{Cookie, CookieJar, SameSite};
use time::{Duration, OffsetDateTime};
use tourvisto_ui::net::types::{BootstrapOutcome, CurrentUser, SessionTokens};

use super::error::ApiFailure;
use crate::config::AppConfig;
use crate::services::ServiceError;
use crate::services::auth::{self as auth_svc, ActiveSession};
use crate::services::bootstrap::run_bootstrap;
use crate::state::AppState;

pub const SESSION_COOKIE: &str = "tourvisto_session";

fn now_unix() -> i64 {
    OffsetDateTime::now_utc().unix_timestamp()
}

/// HttpOnly session cookie living as long as an idle session.
pub(crate) fn session_cookie(config: &AppConfig, token: String) -> Cookie<'static> {
    let max_age = Duration::try_from(config.session_ttl).unwrap_or(Duration::MAX);
    Cookie::build((SESSION_COOKIE, token))
        .path("/")
        .http_only(true)
        .same_site(SameSite::Lax)
        .secure(config.cookie_secure)
        .max_age(max_age)
        .build()
}

pub(crate) fn clear_session_cookie(config: &AppConfig) -> Cookie<'static> {
    Cookie::build((SESSION_COOKIE, ""))
        .path("/")
        .http_only(true)
        .same_site(SameSite::Lax)
        .secure(config.cookie_secure)
        .max_age(Duration::ZERO)
        .build()
}

fn cookie_token(jar: &CookieJar) -> Option<&str> {
    jar.get(SESSION_COOKIE)
        .map(Cookie::value)
        .filter(|token| !token.is_empty())
}

async fn session_from_jar(state: &AppState, jar: &CookieJar) -> Result<Option<ActiveSession>, ServiceError> {
    match cookie_token(jar) {
        Some(token) => auth_svc::resolve_session(state, token, now_unix()).await,
        None => Ok(None),
    }
}

// =============================================================================
// AUTH EXTRACTOR
// =============================================================================

/// Live session behind the request's cookie.
/// Use as a handler parameter to require authentication.
pub struct AuthSession(pub ActiveSession);

impl<S> axum::extract::FromRequestParts<S> for AuthSession
where
    AppState: FromRef<S>,
    S: Send + Sync,
{
    type Rejection = ApiFailure;

    async fn from_request_parts(parts: &mut Parts, state: &S) -> Result<Self, Self::Rejection> {
        let jar = CookieJar::from_headers(&parts.headers);
        let app_state = AppState::from_ref(state);
        let active = session_from_jar(&app_state, &jar)
            .await?
            .ok_or(ServiceError::Unauthorized)?;
        Ok(Self(active))
    }
}

// =============================================================================
// HANDLERS
// =============================================================================

/// `GET /auth/{provider}`: start the OAuth flow. Any current session is
/// signed out first.
pub async fn oauth_redirect(
    State(state): State<AppState>,
    Path(provider): Path<String>,
    jar: CookieJar,
) -> Result<Response, ApiFailure> {
    let url = auth_svc::sign_in_url(&state, &provider)?;
    let jar = if auth_svc::logout_user(&state, cookie_token(&jar)).await {
        jar.add(clear_session_cookie(&state.config))
    } else {
        jar
    };
    Ok((jar, Redirect::temporary(&url)).into_response())
}

/// `POST /api/auth/session`: trade callback tokens for a session cookie.
pub async fn create_session(
    State(state): State<AppState>,
    jar: CookieJar,
    Json(tokens): Json<SessionTokens>,
) -> Result<(CookieJar, Json<CurrentUser>), ApiFailure> {
    if let Some(previous) = cookie_token(&jar) {
        state.sessions.remove(previous).await;
    }
    let (token, user) = auth_svc::establish_session(&state, &tokens, now_unix()).await?;
    let jar = jar.add(session_cookie(&state.config, token));
    Ok((jar, Json(user)))
}

/// `GET /api/auth/me`: the signed-in identity.
pub async fn me(State(state): State<AppState>, AuthSession(active): AuthSession) -> Result<Json<CurrentUser>, ApiFailure> {
    let user = auth_svc::get_current_user(&state, &active)
        .await?
        .ok_or(ServiceError::Unauthorized)?;
    Ok(Json(auth_svc::current_user(&user)))
}

/// `GET /api/auth/bootstrap`: admin layout loader.
///
/// A missing or dead session is an outcome (redirect to sign-in), not a 401,
/// and the stale cookie is cleared. A session that cannot be checked because
/// the auth API failed is dropped as well.
pub async fn bootstrap(State(state): State<AppState>, jar: CookieJar) -> (CookieJar, Json<BootstrapOutcome>) {
    let active = match session_from_jar(&state, &jar).await {
        Ok(active) => active,
        Err(e) => {
            tracing::error!(error = %e, "session check failed during bootstrap");
            if let Some(token) = cookie_token(&jar) {
                state.sessions.remove(token).await;
            }
            None
        }
    };
    let outcome = run_bootstrap(&state, active.as_ref(), OffsetDateTime::now_utc()).await;

    let stale = cookie_token(&jar).is_some()
        && match &active {
            None => true,
            Some(active) => !state.sessions.contains(&active.token).await,
        };
    let jar = if stale { jar.add(clear_session_cookie(&state.config)) } else { jar };
    (jar, Json(outcome))
}

/// `POST /api/auth/logout`: drop the session and clear the cookie.
pub async fn logout(State(state): State<AppState>, jar: CookieJar) -> impl IntoResponse {
    let signed_out = auth_svc::logout_user(&state, cookie_token(&jar)).await;
    let jar = jar.add(clear_session_cookie(&state.config));
    let status = if signed_out { StatusCode::NO_CONTENT } else { StatusCode::UNAUTHORIZED };
    (jar, status)
}
