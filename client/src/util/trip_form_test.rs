use super::*;

fn filled_form() -> TripForm {
    TripForm {
        name: "  Alpine Escape ".to_owned(),
        country: "Switzerland".to_owned(),
        duration: "5".to_owned(),
        description: "Lakes and peaks".to_owned(),
        tags: "Mountains, Luxury,, ".to_owned(),
        estimated_price: "$2,400".to_owned(),
        image_urls: "https://img.example/a.jpg\n\n/assets/images/b.jpg\n".to_owned(),
        itinerary: "Zurich\nLucerne\n  \nZermatt".to_owned(),
    }
}

#[test]
fn parses_lists_and_trims_fields() {
    let request = filled_form().to_request().unwrap();
    assert_eq!(request.name, "Alpine Escape");
    assert_eq!(request.duration, 5);
    assert_eq!(request.tags, vec!["Mountains", "Luxury"]);
    assert_eq!(request.image_urls, vec!["https://img.example/a.jpg", "/assets/images/b.jpg"]);
    assert_eq!(request.itinerary, vec!["Zurich", "Lucerne", "Zermatt"]);
}

#[test]
fn name_and_country_are_required() {
    let form = TripForm { name: "   ".to_owned(), ..filled_form() };
    assert_eq!(form.to_request(), Err("Trip name is required".to_owned()));

    let form = TripForm { country: String::new(), ..filled_form() };
    assert_eq!(form.to_request(), Err("Country is required".to_owned()));
}

#[test]
fn duration_must_be_in_range() {
    for bad in ["0", "31", "abc", ""] {
        let form = TripForm { duration: bad.to_owned(), ..filled_form() };
        assert_eq!(
            form.to_request(),
            Err("Duration must be between 1 and 30 days".to_owned()),
            "{bad}"
        );
    }
    let form = TripForm { duration: "30".to_owned(), ..filled_form() };
    assert!(form.to_request().is_ok());
}

#[test]
fn itinerary_needs_a_stop() {
    let form = TripForm { itinerary: "\n  \n".to_owned(), ..filled_form() };
    assert_eq!(form.to_request(), Err("Add at least one itinerary stop".to_owned()));
}

#[test]
fn image_urls_must_be_absolute_or_rooted() {
    let form = TripForm { image_urls: "ftp://x/y.png".to_owned(), ..filled_form() };
    assert_eq!(form.to_request(), Err("Invalid image URL: ftp://x/y.png".to_owned()));
}

#[test]
fn validate_request_rejects_blank_stops_only() {
    let request = CreateTripRequest {
        name: "Trip".to_owned(),
        country: "Peru".to_owned(),
        duration: 3,
        itinerary: vec![" ".to_owned()],
        ..CreateTripRequest::default()
    };
    assert!(validate_request(&request).is_err());
}

#[test]
fn set_field_touches_only_that_field() {
    let mut form = filled_form();
    form.set_field(TripField::Country, "Italy".to_owned());
    assert_eq!(form.field(TripField::Country), "Italy");
    assert_eq!(form.country, "Italy");
    assert_eq!(TripForm { country: "Switzerland".to_owned(), ..form.clone() }, filled_form());
}

#[test]
fn field_reads_each_input() {
    let form = filled_form();
    assert_eq!(form.field(TripField::Duration), "5");
    assert_eq!(form.field(TripField::EstimatedPrice), "$2,400");
    assert_eq!(form.field(TripField::Itinerary), form.itinerary);
}
