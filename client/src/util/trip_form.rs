//! Trip creation input: form parsing and validation.
//!
//! SYSTEM CONTEXT
//! ==============
//! The create-trip page parses raw form fields with [`TripForm::to_request`]
//! for immediate feedback. The server runs [`validate_request`] again on every
//! `POST /api/trips` before inserting, so a hand-crafted request gets the same
//! answer as the form.

#[cfg(test)]
#[path = "trip_form_test.rs"]
mod trip_form_test;

use crate::net::types::CreateTripRequest;

pub const MIN_DURATION_DAYS: u32 = 1;
pub const MAX_DURATION_DAYS: u32 = 30;

/// Raw field values as typed into the create-trip form.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct TripForm {
    pub name: String,
    pub country: String,
    pub duration: String,
    pub description: String,
    /// Comma separated.
    pub tags: String,
    pub estimated_price: String,
    /// One URL per line.
    pub image_urls: String,
    /// One stop location per line.
    pub itinerary: String,
}

/// One editable text field of [`TripForm`].
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum TripField {
    Name,
    Country,
    Duration,
    Description,
    Tags,
    EstimatedPrice,
    ImageUrls,
    Itinerary,
}

impl TripForm {
    #[must_use]
    pub fn field(&self, field: TripField) -> &str {
        match field {
            TripField::Name => &self.name,
            TripField::Country => &self.country,
            TripField::Duration => &self.duration,
            TripField::Description => &self.description,
            TripField::Tags => &self.tags,
            TripField::EstimatedPrice => &self.estimated_price,
            TripField::ImageUrls => &self.image_urls,
            TripField::Itinerary => &self.itinerary,
        }
    }

    pub fn set_field(&mut self, field: TripField, value: String) {
        let slot = match field {
            TripField::Name => &mut self.name,
            TripField::Country => &mut self.country,
            TripField::Duration => &mut self.duration,
            TripField::Description => &mut self.description,
            TripField::Tags => &mut self.tags,
            TripField::EstimatedPrice => &mut self.estimated_price,
            TripField::ImageUrls => &mut self.image_urls,
            TripField::Itinerary => &mut self.itinerary,
        };
        *slot = value;
    }

    /// Parse and validate the form into an API request.
    ///
    /// # Errors
    ///
    /// Returns a user-facing message naming the first invalid field.
    pub fn to_request(&self) -> Result<CreateTripRequest, String> {
        let duration = self
            .duration
            .trim()
            .parse::<u32>()
            .map_err(|_| duration_message())?;

        let request = CreateTripRequest {
            name: self.name.trim().to_owned(),
            country: self.country.trim().to_owned(),
            duration,
            description: self.description.trim().to_owned(),
            tags: split_list(&self.tags, ','),
            estimated_price: self.estimated_price.trim().to_owned(),
            image_urls: split_list(&self.image_urls, '\n'),
            itinerary: split_list(&self.itinerary, '\n'),
        };
        validate_request(&request)?;
        Ok(request)
    }
}

fn split_list(raw: &str, separator: char) -> Vec<String> {
    raw.split(separator)
        .map(str::trim)
        .filter(|item| !item.is_empty())
        .map(str::to_owned)
        .collect()
}

fn duration_message() -> String {
    format!("Duration must be between {MIN_DURATION_DAYS} and {MAX_DURATION_DAYS} days")
}

/// Check a trip request before it reaches the backend.
///
/// # Errors
///
/// Returns a user-facing message naming the first invalid field.
pub fn validate_request(request: &CreateTripRequest) -> Result<(), String> {
    if request.name.trim().is_empty() {
        return Err("Trip name is required".to_owned());
    }
    if request.country.trim().is_empty() {
        return Err("Country is required".to_owned());
    }
    if !(MIN_DURATION_DAYS..=MAX_DURATION_DAYS).contains(&request.duration) {
        return Err(duration_message());
    }
    if request.itinerary.iter().all(|stop| stop.trim().is_empty()) {
        return Err("Add at least one itinerary stop".to_owned());
    }
    if let Some(bad) = request.image_urls.iter().find(|url| !is_image_url(url)) {
        return Err(format!("Invalid image URL: {bad}"));
    }
    Ok(())
}

fn is_image_url(url: &str) -> bool {
    url.starts_with("http://") || url.starts_with("https://") || url.starts_with('/')
}
