//! User profile routes.

use axum::extract::{Query, State};
use axum::http::StatusCode;
use axum::response::Json;
use time::OffsetDateTime;
use tourvisto_ui::net::types::{ProfileCreation, UsersPage};

use super::PageQuery;
use super::auth::AuthSession;
use super::error::ApiFailure;
use crate::services::{auth as auth_svc, profiles};
use crate::state::AppState;

/// `GET /api/users?limit&offset`: one page of profiles.
///
/// Without `limit` every profile is returned, and a backend failure is
/// reported in the page's `error` field instead of the status code.
pub async fn list_users(
    State(state): State<AppState>,
    AuthSession(active): AuthSession,
    Query(page): Query<PageQuery>,
) -> Result<Json<UsersPage>, ApiFailure> {
    let backend = state.backend.as_ref();
    let users = match page.limit {
        Some(limit) => profiles::get_all_users(backend, active.access_token(), limit, page.offset.unwrap_or(0)).await?,
        None => profiles::get_profiles(backend, active.access_token()).await,
    };
    Ok(Json(users))
}

/// `POST /api/users/test-profile`: insert a profile for the signed-in user,
/// or a synthetic one when the identity cannot be loaded.
pub async fn create_test_profile(
    State(state): State<AppState>,
    AuthSession(active): AuthSession,
) -> (StatusCode, Json<ProfileCreation>) {
    let user = match auth_svc::get_current_user(&state, &active).await {
        Ok(user) => user,
        Err(e) => {
            tracing::warn!(error = %e, "identity lookup failed; using a synthetic test profile");
            None
        }
    };
    let created = profiles::create_test_profile(
        state.backend.as_ref(),
        active.access_token(),
        user.as_ref(),
        OffsetDateTime::now_utc(),
    )
    .await;
    let status = if created.error.is_some() { StatusCode::BAD_GATEWAY } else { StatusCode::CREATED };
    (status, Json(created))
}
