//! Trip listing and creation.

#[cfg(test)]
#[path = "trips_test.rs"]
mod tests;

use time::OffsetDateTime;
use tourvisto_ui::net::types::{CreateTripRequest, ItineraryStop, NewTrip, Trip, TripsPage};
use tourvisto_ui::util::trip_form::validate_request;

use super::backend::Backend;
use super::profiles::MAX_PAGE_SIZE;
use super::{ServiceError, timestamp};

/// Trips newest first, with the exact total.
///
/// # Errors
///
/// [`ServiceError::Backend`] when the table API fails.
pub async fn list_trips(
    backend: &dyn Backend,
    access_token: &str,
    limit: u32,
    offset: u32,
) -> Result<TripsPage, ServiceError> {
    let limit = limit.clamp(1, MAX_PAGE_SIZE);
    let page = backend.list_trips(access_token, offset, limit).await?;
    Ok(TripsPage { trips: page.rows, total: page.total })
}

/// `"1200"` and `"1,200.50"` become `"$1200"` and `"$1,200.50"`; anything
/// else is kept as typed.
#[must_use]
pub fn normalize_price(raw: &str) -> String {
    let price = raw.trim();
    let numeric = !price.is_empty() && price.chars().all(|c| c.is_ascii_digit() || c == ',' || c == '.');
    if numeric { format!("${price}") } else { price.to_owned() }
}

/// Validate a request and turn it into the row to insert.
///
/// # Errors
///
/// [`ServiceError::Validation`] naming the first invalid field.
pub fn build_new_trip(request: &CreateTripRequest, now: OffsetDateTime) -> Result<NewTrip, ServiceError> {
    validate_request(request).map_err(ServiceError::Validation)?;

    let itinerary = request
        .itinerary
        .iter()
        .map(|stop| stop.trim())
        .filter(|stop| !stop.is_empty())
        .zip(1_u32..)
        .map(|(location, day)| ItineraryStop { day: Some(day), location: location.to_owned() })
        .collect();
    let description = request.description.trim();

    Ok(NewTrip {
        name: request.name.trim().to_owned(),
        description: (!description.is_empty()).then(|| description.to_owned()),
        country: request.country.trim().to_owned(),
        duration: request.duration,
        image_urls: request.image_urls.clone(),
        itinerary,
        tags: request.tags.clone(),
        estimated_price: normalize_price(&request.estimated_price),
        created_at: timestamp(now),
    })
}

/// Validate and insert a trip, returning the stored row.
///
/// # Errors
///
/// [`ServiceError::Validation`] for bad input, [`ServiceError::Backend`]
/// when the insert fails.
pub async fn create_trip(
    backend: &dyn Backend,
    access_token: &str,
    request: &CreateTripRequest,
    now: OffsetDateTime,
) -> Result<Trip, ServiceError> {
    let new_trip = build_new_trip(request, now)?;
    let trip = backend.insert_trip(access_token, &new_trip).await?;
    tracing::info!(trip_id = %trip.id, name = %trip.name, "trip created");
    Ok(trip)
}
