//! REST API helpers for communicating with the server.
//!
//! Client-side (hydrate): real HTTP calls via `gloo-net`.
//! Server-side (SSR): stubs returning `None`/error since these loaders only
//! run after hydration; the server renders each page's fallback instead.
//!
//! ERROR HANDLING
//! ==============
//! Callers get `Option`/`Result<_, String>` outputs instead of panics so a
//! failed backend round-trip becomes an error banner, not a crashed page.

#![allow(clippy::unused_async)]

#[cfg(test)]
#[path = "api_test.rs"]
mod api_test;

use super::types::{BootstrapOutcome, CreateTripRequest, CurrentUser, DashboardSummary, SessionTokens, Trip, TripsPage, UsersPage};

#[cfg(any(test, feature = "hydrate"))]
fn users_endpoint(limit: u32, offset: u32) -> String {
    format!("/api/users?limit={limit}&offset={offset}")
}

#[cfg(any(test, feature = "hydrate"))]
fn trips_endpoint(limit: u32, offset: u32) -> String {
    format!("/api/trips?limit={limit}&offset={offset}")
}

#[cfg(any(test, feature = "hydrate"))]
fn request_failed_message(what: &str, status: u16) -> String {
    format!("{what} failed: {status}")
}

/// Error message for a guarded call rejected with 401. Pages treat it as a
/// lost session rather than a load failure.
pub const SESSION_LOST: &str = "Your session has ended. Please sign in again.";

/// A 401 becomes [`SESSION_LOST`]; otherwise prefer the server's
/// `{"error": ...}` body, falling back to the status line.
#[cfg(any(test, feature = "hydrate"))]
fn failure_message(status: u16, body_error: Option<String>, what: &str) -> String {
    if status == 401 {
        return SESSION_LOST.to_owned();
    }
    body_error
        .filter(|error| !error.is_empty())
        .unwrap_or_else(|| request_failed_message(what, status))
}

#[cfg(feature = "hydrate")]
async fn error_from_response(resp: gloo_net::http::Response, what: &str) -> String {
    let status = resp.status();
    let body_error = resp
        .json::<super::types::ApiError>()
        .await
        .ok()
        .map(|body| body.error);
    failure_message(status, body_error, what)
}

#[cfg(feature = "hydrate")]
async fn get_json<T: serde::de::DeserializeOwned>(url: &str, what: &str) -> Result<T, String> {
    let resp = gloo_net::http::Request::get(url)
        .send()
        .await
        .map_err(|e| e.to_string())?;
    if !resp.ok() {
        return Err(error_from_response(resp, what).await);
    }
    resp.json::<T>().await.map_err(|e| e.to_string())
}

#[cfg(feature = "hydrate")]
async fn post_json<B: serde::Serialize, T: serde::de::DeserializeOwned>(url: &str, body: &B, what: &str) -> Result<T, String> {
    let resp = gloo_net::http::Request::post(url)
        .json(body)
        .map_err(|e| e.to_string())?
        .send()
        .await
        .map_err(|e| e.to_string())?;
    if !resp.ok() {
        return Err(error_from_response(resp, what).await);
    }
    resp.json::<T>().await.map_err(|e| e.to_string())
}

/// Fetch the signed-in identity from `/api/auth/me`.
/// Returns `None` if not authenticated or on the server.
pub async fn fetch_current_user() -> Option<CurrentUser> {
    #[cfg(feature = "hydrate")]
    {
        let resp = gloo_net::http::Request::get("/api/auth/me")
            .send()
            .await
            .ok()?;
        if !resp.ok() {
            return None;
        }
        resp.json::<CurrentUser>().await.ok()
    }
    #[cfg(not(feature = "hydrate"))]
    {
        None
    }
}

/// Hand the OAuth callback tokens to `POST /api/auth/session`, which sets the
/// session cookie.
///
/// # Errors
///
/// Returns an error string if the server rejects the tokens.
pub async fn establish_session(tokens: &SessionTokens) -> Result<CurrentUser, String> {
    #[cfg(feature = "hydrate")]
    {
        post_json("/api/auth/session", tokens, "session exchange").await
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = tokens;
        Err("not available on server".to_owned())
    }
}

/// Run the admin layout loader via `GET /api/auth/bootstrap`.
///
/// A 401 is reported as a redirect to `/sign-in`, matching the server guard.
///
/// # Errors
///
/// Returns an error string if the request fails for any other reason.
pub async fn fetch_bootstrap() -> Result<BootstrapOutcome, String> {
    #[cfg(feature = "hydrate")]
    {
        let resp = gloo_net::http::Request::get("/api/auth/bootstrap")
            .send()
            .await
            .map_err(|e| e.to_string())?;
        if resp.status() == 401 {
            return Ok(BootstrapOutcome::Redirect { to: "/sign-in".to_owned() });
        }
        if !resp.ok() {
            return Err(error_from_response(resp, "bootstrap").await);
        }
        resp.json::<BootstrapOutcome>()
            .await
            .map_err(|e| e.to_string())
    }
    #[cfg(not(feature = "hydrate"))]
    {
        Err("not available on server".to_owned())
    }
}

/// Sign out via `POST /api/auth/logout`. Returns whether the server confirmed.
pub async fn logout() -> bool {
    #[cfg(feature = "hydrate")]
    {
        gloo_net::http::Request::post("/api/auth/logout")
            .send()
            .await
            .is_ok_and(|resp| resp.ok())
    }
    #[cfg(not(feature = "hydrate"))]
    {
        false
    }
}

/// Fetch one page of profiles from `/api/users`.
///
/// # Errors
///
/// Returns the server's error message if the profile query fails.
pub async fn fetch_users(limit: u32, offset: u32) -> Result<UsersPage, String> {
    #[cfg(feature = "hydrate")]
    {
        let page: UsersPage = get_json(&users_endpoint(limit, offset), "user list").await?;
        match page.error {
            Some(message) => Err(message),
            None => Ok(page),
        }
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = (limit, offset);
        Err("not available on server".to_owned())
    }
}

/// Fetch stats and recent trips from `/api/dashboard`.
///
/// # Errors
///
/// Returns the server's error message if either backend query fails.
pub async fn fetch_dashboard() -> Result<DashboardSummary, String> {
    #[cfg(feature = "hydrate")]
    {
        get_json("/api/dashboard", "dashboard").await
    }
    #[cfg(not(feature = "hydrate"))]
    {
        Err("not available on server".to_owned())
    }
}

/// Fetch one page of trips from `/api/trips`.
///
/// # Errors
///
/// Returns the server's error message if the trip query fails.
pub async fn fetch_trips(limit: u32, offset: u32) -> Result<TripsPage, String> {
    #[cfg(feature = "hydrate")]
    {
        get_json(&trips_endpoint(limit, offset), "trip list").await
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = (limit, offset);
        Err("not available on server".to_owned())
    }
}

/// Create a trip via `POST /api/trips`.
///
/// # Errors
///
/// Returns the validation or backend error message reported by the server.
pub async fn create_trip(request: &CreateTripRequest) -> Result<Trip, String> {
    #[cfg(feature = "hydrate")]
    {
        post_json("/api/trips", request, "create trip").await
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = request;
        Err("not available on server".to_owned())
    }
}
