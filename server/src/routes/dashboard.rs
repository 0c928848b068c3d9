//! Dashboard route.

use axum::extract::State;
use axum::response::Json;
use time::OffsetDateTime;
use tourvisto_ui::net::types::DashboardSummary;

use super::auth::AuthSession;
use super::error::ApiFailure;
use crate::services::dashboard::load_dashboard;
use crate::state::AppState;

/// `GET /api/dashboard`: stats cards and the latest trips.
pub async fn summary(
    State(state): State<AppState>,
    AuthSession(active): AuthSession,
) -> Result<Json<DashboardSummary>, ApiFailure> {
    let summary = load_dashboard(state.backend.as_ref(), active.access_token(), OffsetDateTime::now_utc()).await?;
    Ok(Json(summary))
}
