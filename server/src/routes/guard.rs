//! Page guard applied before server-side rendering.
//!
//! The redirect rule itself lives in the UI crate so the browser applies the
//! same decision after hydration.

use axum::extract::{Request, State};
use axum::middleware::Next;
use axum::response::{IntoResponse, Redirect, Response};
use axum_extra::extract::cookie::{Cookie, CookieJar};
use tourvisto_ui::util::auth::guard_redirect;

use super::auth::SESSION_COOKIE;
use crate::state::AppState;

pub async fn page_guard(State(state): State<AppState>, jar: CookieJar, request: Request, next: Next) -> Response {
    let has_session = match jar.get(SESSION_COOKIE).map(Cookie::value) {
        Some(token) if !token.is_empty() => state.sessions.contains(token).await,
        _ => false,
    };
    if let Some(to) = guard_redirect(request.uri().path(), has_session) {
        tracing::debug!(path = %request.uri().path(), %to, "page guard redirect");
        return Redirect::temporary(to).into_response();
    }
    next.run(request).await
}
