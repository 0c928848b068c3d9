//! Trip routes.

use axum::extract::{Query, State};
use axum::http::StatusCode;
use axum::response::Json;
use time::OffsetDateTime;
use tourvisto_ui::constants::TRIPS_PAGE_SIZE;
use tourvisto_ui::net::types::{CreateTripRequest, Trip, TripsPage};

use super::PageQuery;
use super::auth::AuthSession;
use super::error::ApiFailure;
use crate::services::trips;
use crate::state::AppState;

/// `GET /api/trips?limit&offset`: trips newest first.
pub async fn list_trips(
    State(state): State<AppState>,
    AuthSession(active): AuthSession,
    Query(page): Query<PageQuery>,
) -> Result<Json<TripsPage>, ApiFailure> {
    let trips = trips::list_trips(
        state.backend.as_ref(),
        active.access_token(),
        page.limit.unwrap_or(TRIPS_PAGE_SIZE),
        page.offset.unwrap_or(0),
    )
    .await?;
    Ok(Json(trips))
}

/// `POST /api/trips`: validate and insert a trip.
pub async fn create_trip(
    State(state): State<AppState>,
    AuthSession(active): AuthSession,
    Json(request): Json<CreateTripRequest>,
) -> Result<(StatusCode, Json<Trip>), ApiFailure> {
    let trip = trips::create_trip(state.backend.as_ref(), active.access_token(), &request, OffsetDateTime::now_utc()).await?;
    Ok((StatusCode::CREATED, Json(trip)))
}
