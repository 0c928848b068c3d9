use time::macros::datetime;

use super::*;
use crate::state::test_helpers::MockBackend;

const NOW: OffsetDateTime = datetime!(2025-03-15 12:00:00 UTC);

fn request() -> CreateTripRequest {
    CreateTripRequest {
        name: " Kyoto in Bloom ".to_owned(),
        country: "Japan".to_owned(),
        duration: 6,
        description: "  ".to_owned(),
        tags: vec!["Culture".to_owned()],
        estimated_price: "1,850".to_owned(),
        image_urls: vec!["https://img/kyoto.jpg".to_owned()],
        itinerary: vec!["Kyoto".to_owned(), " ".to_owned(), "Nara".to_owned()],
    }
}

fn trip(id: &str, created_at: &str) -> Trip {
    Trip { id: id.to_owned(), name: format!("Trip {id}"), created_at: Some(created_at.to_owned()), ..Trip::default() }
}

#[test]
fn normalize_price_prefixes_plain_numbers() {
    assert_eq!(normalize_price("1200"), "$1200");
    assert_eq!(normalize_price(" 1,200.50 "), "$1,200.50");
    assert_eq!(normalize_price("$900"), "$900");
    assert_eq!(normalize_price("about 900 EUR"), "about 900 EUR");
    assert_eq!(normalize_price(""), "");
}

#[test]
fn build_new_trip_numbers_stops_and_trims() {
    let new_trip = build_new_trip(&request(), NOW).unwrap();
    assert_eq!(new_trip.name, "Kyoto in Bloom");
    assert_eq!(new_trip.description, None);
    assert_eq!(new_trip.estimated_price, "$1,850");
    assert_eq!(
        new_trip.itinerary,
        vec![
            ItineraryStop { day: Some(1), location: "Kyoto".to_owned() },
            ItineraryStop { day: Some(2), location: "Nara".to_owned() },
        ]
    );
    assert_eq!(new_trip.created_at, "2025-03-15T12:00:00Z");
}

#[test]
fn build_new_trip_rejects_invalid_input() {
    let bad = CreateTripRequest { duration: 45, ..request() };
    assert!(matches!(build_new_trip(&bad, NOW), Err(ServiceError::Validation(m)) if m.contains("Duration")));
}

#[tokio::test]
async fn create_trip_inserts_row() {
    let backend = MockBackend::new();
    let created = create_trip(&backend, "tok", &request(), NOW).await.unwrap();
    assert_eq!(created.id, "1");
    assert_eq!(created.first_location(), "Kyoto");
    assert_eq!(backend.trips.lock().unwrap().len(), 1);
}

#[tokio::test]
async fn create_trip_backend_failure() {
    let backend = MockBackend::new();
    backend.fail_inserts_with("42501");
    assert!(matches!(create_trip(&backend, "tok", &request(), NOW).await, Err(ServiceError::Backend(_))));
}

#[tokio::test]
async fn list_trips_newest_first() {
    let backend = MockBackend::new()
        .with_trip(trip("a", "2025-01-01T00:00:00Z"))
        .with_trip(trip("b", "2025-03-01T00:00:00Z"))
        .with_trip(trip("c", "2025-02-01T00:00:00Z"));

    let page = list_trips(&backend, "tok", 2, 0).await.unwrap();
    assert_eq!(page.total, 3);
    let ids: Vec<_> = page.trips.iter().map(|t| t.id.as_str()).collect();
    assert_eq!(ids, vec!["b", "c"]);
}
