//! Shared auth helpers for route guards and the OAuth callback.
//!
//! SYSTEM CONTEXT
//! ==============
//! The server applies [`guard_redirect`] before rendering a page, and the
//! browser applies the same rule after hydration, so both sides agree on which
//! paths need a session. The callback page uses [`parse_callback_fragment`] to
//! lift tokens out of the URL fragment the identity provider redirects to.

#[cfg(test)]
#[path = "auth_test.rs"]
mod auth_test;

use leptos::prelude::*;
use leptos_router::NavigateOptions;

use crate::net::api::SESSION_LOST;
use crate::net::types::SessionTokens;
use crate::state::auth::AuthState;

pub const SIGN_IN_PATH: &str = "/sign-in";
pub const CALLBACK_PATH: &str = "/auth-callback";
pub const DASHBOARD_PATH: &str = "/dashboard";

/// Decide whether a page request must be redirected before rendering.
///
/// - the callback page is never redirected; it finishes sign-in itself
/// - a signed-in visitor of the sign-in page goes to the dashboard
/// - an anonymous visitor of any dashboard page goes to sign-in
#[must_use]
pub fn guard_redirect(path: &str, has_session: bool) -> Option<&'static str> {
    let path = normalize_path(path);
    if path == CALLBACK_PATH {
        return None;
    }
    if path == SIGN_IN_PATH {
        return has_session.then_some(DASHBOARD_PATH);
    }
    if is_dashboard_path(path) && !has_session {
        return Some(SIGN_IN_PATH);
    }
    None
}

fn normalize_path(path: &str) -> &str {
    let path = path.split(['?', '#']).next().unwrap_or_default();
    if path.len() > 1 { path.trim_end_matches('/') } else { path }
}

fn is_dashboard_path(path: &str) -> bool {
    path == DASHBOARD_PATH
        || path
            .strip_prefix(DASHBOARD_PATH)
            .is_some_and(|rest| rest.starts_with('/'))
}

/// True once auth has loaded and no profile is present.
#[must_use]
pub fn should_redirect_unauth(state: &AuthState) -> bool {
    !state.loading && state.user.is_none()
}

/// Auth state after a guarded API call failed with `message`.
///
/// A lost session (signed out elsewhere, expired) clears the profile so
/// [`install_unauth_redirect`] sends the browser to sign-in; any other
/// failure leaves auth alone and returns `None`.
#[must_use]
pub fn auth_after_failure(message: &str) -> Option<AuthState> {
    (message == SESSION_LOST).then(|| AuthState { user: None, loading: false })
}

/// Pass an API result through, applying [`auth_after_failure`] to the shared
/// auth signal on error.
pub fn track_session<T>(auth: RwSignal<AuthState>, result: Result<T, String>) -> Result<T, String> {
    if let Err(message) = &result {
        if let Some(next) = auth_after_failure(message) {
            auth.set(next);
        }
    }
    result
}

/// Redirect to `/sign-in` whenever auth has loaded and no profile is present.
pub fn install_unauth_redirect<F>(auth: RwSignal<AuthState>, navigate: F)
where
    F: Fn(&str, NavigateOptions) + Clone + 'static,
{
    let navigate = navigate.clone();
    Effect::new(move || {
        if should_redirect_unauth(&auth.get()) {
            navigate(SIGN_IN_PATH, NavigateOptions::default());
        }
    });
}

/// Parse the implicit-flow fragment (`#access_token=...&refresh_token=...`).
///
/// Returns `Ok(None)` when the fragment carries no tokens at all, and an error
/// when the provider reported one or the token pair is incomplete.
///
/// # Errors
///
/// Returns the provider's `error_description` (or `error`) when present, or a
/// message naming the missing token.
pub fn parse_callback_fragment(fragment: &str) -> Result<Option<SessionTokens>, String> {
    let fragment = fragment.trim_start_matches('#');
    if fragment.is_empty() {
        return Ok(None);
    }

    let mut tokens = SessionTokens::default();
    let mut error = None;
    let mut error_description = None;

    for pair in fragment.split('&').filter(|p| !p.is_empty()) {
        let (key, raw) = pair.split_once('=').unwrap_or((pair, ""));
        let value = decode_component(raw);
        match key {
            "access_token" => tokens.access_token = value,
            "refresh_token" => tokens.refresh_token = value,
            "expires_in" => tokens.expires_in = value.parse().ok(),
            "expires_at" => tokens.expires_at = value.parse().ok(),
            "provider_token" if !value.is_empty() => tokens.provider_token = Some(value),
            "error" => error = Some(value),
            "error_description" => error_description = Some(value),
            _ => {}
        }
    }

    if let Some(message) = error_description.or(error) {
        return Err(message);
    }
    if tokens.access_token.is_empty() && tokens.refresh_token.is_empty() {
        return Ok(None);
    }
    if tokens.access_token.is_empty() {
        return Err("missing access token".to_owned());
    }
    if tokens.refresh_token.is_empty() {
        return Err("missing refresh token".to_owned());
    }
    Ok(Some(tokens))
}

fn decode_component(raw: &str) -> String {
    let spaced = raw.replace('+', " ");
    urlencoding::decode(&spaced).map_or(spaced.clone(), std::borrow::Cow::into_owned)
}

/// Send the browser to `path` with a full page load.
///
/// Used where the server must see the new cookie state (after sign-in and
/// sign-out) rather than a client-side route change.
pub fn hard_redirect(path: &str) {
    #[cfg(feature = "hydrate")]
    {
        if let Some(window) = web_sys::window() {
            let _ = window.location().set_href(path);
        }
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = path;
    }
}
