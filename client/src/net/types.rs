//! Shared wire DTOs for the browser/server boundary.
//!
//! DESIGN
//! ======
//! The server crate depends on this crate (with `ssr`) and reuses these types
//! for both its JSON API and the rows it reads from the hosted backend, so the
//! browser and server never drift on field names. Row types are lenient on
//! input (missing columns default, ids may be numbers or strings) because the
//! backend tables are owned elsewhere.

#[cfg(test)]
#[path = "types_test.rs"]
mod types_test;

use serde::de::Error as _;
use serde::{Deserialize, Deserializer, Serialize};

/// Avatar used when a profile row has neither `image_url` nor `avatar`.
pub const DEFAULT_AVATAR_URL: &str = "/assets/images/default-avatar.png";

// =============================================================================
// PROFILES
// =============================================================================

/// Role flag stored in the `status` column of a profile.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ProfileStatus {
    /// Dashboard administrator.
    Admin,
    /// Regular traveller account; not allowed into the admin layout.
    User,
    /// Any value this build does not recognize.
    #[default]
    #[serde(other)]
    Unknown,
}

impl ProfileStatus {
    /// Lowercase label as stored in the backend.
    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Admin => "admin",
            Self::User => "user",
            Self::Unknown => "unknown",
        }
    }
}

/// Application-level user record (the `profiles` table).
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct Profile {
    /// Row identifier; equals the auth user id for self-created profiles.
    #[serde(default, deserialize_with = "deserialize_id")]
    pub id: String,
    /// Identity-provider user id.
    #[serde(default)]
    pub user_id: String,
    /// Display name.
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub email: String,
    #[serde(default)]
    pub status: ProfileStatus,
    /// Profile picture URL, if one was captured at sign-up.
    #[serde(default)]
    pub image_url: Option<String>,
    /// Legacy picture column still present on older rows.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub avatar: Option<String>,
    /// ISO 8601 timestamp of profile creation.
    #[serde(default)]
    pub joined_at: Option<String>,
}

impl Profile {
    /// Resolve the picture to show: `image_url`, then `avatar`, then the default.
    #[must_use]
    pub fn avatar_url(&self) -> &str {
        self.image_url
            .as_deref()
            .filter(|url| !url.trim().is_empty())
            .or_else(|| self.avatar.as_deref().filter(|url| !url.trim().is_empty()))
            .unwrap_or(DEFAULT_AVATAR_URL)
    }

    #[must_use]
    pub fn is_admin(&self) -> bool {
        self.status == ProfileStatus::Admin
    }
}

/// Insert payload for a new profile row.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct NewProfile {
    pub id: String,
    pub user_id: String,
    pub email: String,
    pub name: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub image_url: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub joined_at: Option<String>,
    pub status: ProfileStatus,
}

/// One page of profiles plus the exact row count.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct UsersPage {
    pub users: Vec<Profile>,
    pub total: u64,
    /// Set by the unpaged listing when the backend query failed.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}

/// Result of the create-test-profile admin action.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct ProfileCreation {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub profile: Option<Profile>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}

// =============================================================================
// TRIPS
// =============================================================================

/// One stop of a trip itinerary.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ItineraryStop {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub day: Option<u32>,
    #[serde(default)]
    pub location: String,
}

/// A trip row (the `trips` table).
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct Trip {
    #[serde(deserialize_with = "deserialize_id")]
    pub id: String,
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default)]
    pub country: Option<String>,
    /// Length in days.
    #[serde(default)]
    pub duration: Option<u32>,
    #[serde(default)]
    pub image_urls: Vec<String>,
    #[serde(default)]
    pub itinerary: Vec<ItineraryStop>,
    #[serde(default)]
    pub tags: Vec<String>,
    /// Display price, e.g. `"$1,200"`. Numeric columns are rendered as-is.
    #[serde(default, deserialize_with = "deserialize_price")]
    pub estimated_price: String,
    /// ISO 8601 creation timestamp.
    #[serde(default)]
    pub created_at: Option<String>,
}

impl Trip {
    /// Card image: the first image URL, if any.
    #[must_use]
    pub fn cover_image(&self) -> Option<&str> {
        self.image_urls.first().map(String::as_str)
    }

    /// Card location: the first itinerary stop's location, or empty.
    #[must_use]
    pub fn first_location(&self) -> &str {
        self.itinerary
            .first()
            .map_or("", |stop| stop.location.as_str())
    }
}

/// Insert payload for a new trip row.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct NewTrip {
    pub name: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    pub country: String,
    pub duration: u32,
    pub image_urls: Vec<String>,
    pub itinerary: Vec<ItineraryStop>,
    pub tags: Vec<String>,
    pub estimated_price: String,
    pub created_at: String,
}

/// Trip form submission sent by the create-trip page.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct CreateTripRequest {
    pub name: String,
    pub country: String,
    pub duration: u32,
    #[serde(default)]
    pub description: String,
    #[serde(default)]
    pub tags: Vec<String>,
    #[serde(default)]
    pub estimated_price: String,
    #[serde(default)]
    pub image_urls: Vec<String>,
    /// Stop locations in visiting order.
    #[serde(default)]
    pub itinerary: Vec<String>,
}

/// One page of trips plus the exact row count.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct TripsPage {
    pub trips: Vec<Trip>,
    pub total: u64,
}

// =============================================================================
// DASHBOARD
// =============================================================================

/// Counts for the current and previous calendar month.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct MonthlyCount {
    pub current_month: u64,
    pub last_month: u64,
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct DashboardStats {
    pub total_users: u64,
    pub users_joined: MonthlyCount,
    pub total_trips: u64,
    pub trips_created: MonthlyCount,
    /// Total profiles with the `user` role.
    pub active_users: u64,
    /// `user`-role profiles by join month.
    pub active_users_joined: MonthlyCount,
}

/// Everything the dashboard page renders.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct DashboardSummary {
    pub stats: DashboardStats,
    /// Most recent trips (at most four).
    pub trips: Vec<Trip>,
}

// =============================================================================
// AUTH
// =============================================================================

/// Tokens handed back by the identity provider in the callback URL fragment.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SessionTokens {
    pub access_token: String,
    pub refresh_token: String,
    /// Lifetime of `access_token` in seconds.
    #[serde(default)]
    pub expires_in: Option<i64>,
    /// Unix timestamp at which `access_token` expires.
    #[serde(default)]
    pub expires_at: Option<i64>,
    /// Upstream provider token (e.g. Google), used for the profile picture.
    #[serde(default)]
    pub provider_token: Option<String>,
}

/// Identity-provider user as returned by `/api/auth/me`.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct CurrentUser {
    pub id: String,
    #[serde(default)]
    pub email: Option<String>,
    #[serde(default)]
    pub name: Option<String>,
    #[serde(default)]
    pub avatar_url: Option<String>,
}

/// Outcome of the admin layout loader.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(tag = "outcome", rename_all = "snake_case")]
pub enum BootstrapOutcome {
    /// Render the layout for this profile.
    Ready { profile: Profile },
    /// Leave the layout for another route.
    Redirect { to: String },
    /// The session is valid but no profile could be loaded or created.
    Failed { message: String },
}

/// JSON error body returned by every failing API route.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct ApiError {
    pub error: String,
}

// =============================================================================
// LENIENT DESERIALIZERS
// =============================================================================

fn deserialize_id<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    match serde_json::Value::deserialize(deserializer)? {
        serde_json::Value::String(s) => Ok(s),
        serde_json::Value::Number(n) => Ok(n.to_string()),
        serde_json::Value::Null => Ok(String::new()),
        other => Err(D::Error::custom(format!("expected string or number id, got {other}"))),
    }
}

fn deserialize_price<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    match serde_json::Value::deserialize(deserializer)? {
        serde_json::Value::String(s) => Ok(s),
        serde_json::Value::Number(n) => Ok(format!("${n}")),
        serde_json::Value::Null => Ok(String::new()),
        other => Err(D::Error::custom(format!("expected string or number price, got {other}"))),
    }
}
