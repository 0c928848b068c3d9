//! Router assembly.
//!
//! SYSTEM CONTEXT
//! ==============
//! One Axum router carries the JSON API used by the browser, the OAuth
//! redirect, and Leptos SSR for every page. Pages pass through the session
//! guard before rendering; API routes enforce the session per handler via the
//! [`AuthSession`](auth::AuthSession) extractor.

pub mod auth;
pub mod dashboard;
pub mod error;
pub mod guard;
pub mod trips;
pub mod users;


use std::path::PathBuf;

use axum::Router;
use axum::http::StatusCode;
use axum::routing::{get, post};
use leptos::prelude::*;
use leptos_axum::{LeptosRoutes, generate_route_list};
use serde::Deserialize;
use tower_http::cors::{Any, CorsLayer};
use tower_http::services::ServeDir;
use tower_http::trace::TraceLayer;

use crate::state::AppState;

/// `?limit&offset` paging parameters.
#[derive(Debug, Default, Deserialize)]
pub struct PageQuery {
    pub limit: Option<u32>,
    pub offset: Option<u32>,
}

/// JSON API and OAuth entry point.
pub(crate) fn api_routes(state: AppState) -> Router {
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    Router::new()
        .route("/auth/{provider}", get(auth::oauth_redirect))
        .route("/api/auth/session", post(auth::create_session))
        .route("/api/auth/me", get(auth::me))
        .route("/api/auth/bootstrap", get(auth::bootstrap))
        .route("/api/auth/logout", post(auth::logout))
        .route("/api/users", get(users::list_users))
        .route("/api/users/test-profile", post(users::create_test_profile))
        .route("/api/dashboard", get(dashboard::summary))
        .route("/api/trips", get(trips::list_trips).post(trips::create_trip))
        .route("/healthz", get(healthz))
        .layer(cors)
        .with_state(state)
}

/// API routes + guarded Leptos SSR pages + static assets.
///
/// # Errors
///
/// Returns an error if the Leptos configuration cannot be loaded (missing or
/// malformed `[[workspace.metadata.leptos]]` section).
pub fn leptos_app(state: AppState) -> Result<Router, String> {
    let conf = get_configuration(None).map_err(|e| format!("leptos configuration: {e}"))?;
    let leptos_options = conf.leptos_options;
    let routes = generate_route_list(tourvisto_ui::app::App);

    let pages = Router::new()
        .leptos_routes(&leptos_options, routes, {
            let opts = leptos_options.clone();
            move || tourvisto_ui::app::shell(opts.clone())
        })
        .with_state(leptos_options.clone())
        .layer(axum::middleware::from_fn_with_state(state.clone(), guard::page_guard));

    // cargo-leptos copies `public/` and the compiled bundle under the site root.
    let site_root = PathBuf::from(leptos_options.site_root.as_ref());

    Ok(api_routes(state)
        .merge(pages)
        .nest_service("/pkg", ServeDir::new(site_root.join("pkg")))
        .fallback_service(ServeDir::new(site_root))
        .layer(TraceLayer::new_for_http()))
}

async fn healthz() -> StatusCode {
    StatusCode::OK
}
