//! Shared application state.
//!
//! DESIGN
//! ======
//! `AppState` is injected into Axum handlers via the `State` extractor. It
//! holds the backend seam, the in-memory session store, and the parsed
//! configuration. Clone is required by Axum; every field is cheap to clone.

use std::sync::Arc;

use crate::config::AppConfig;
use crate::services::backend::Backend;
use crate::services::session::SessionStore;

#[derive(Clone)]
pub struct AppState {
    pub backend: Arc<dyn Backend>,
    pub sessions: SessionStore,
    pub config: Arc<AppConfig>,
}

impl AppState {
    #[must_use]
    pub fn new(backend: Arc<dyn Backend>, config: AppConfig) -> Self {
        Self { backend, sessions: SessionStore::new(config.session_ttl), config: Arc::new(config) }
    }
}

// =============================================================================
// TEST HELPERS
// =============================================================================

#[cfg(test)]
pub mod test_helpers {
    use std::collections::HashMap;
    use std::sync::Mutex;
    use std::time::Duration;

    use async_trait::async_trait;
    use tourvisto_ui::net::types::{NewProfile, NewTrip, Profile, ProfileStatus, SessionTokens, Trip};

    use super::*;
    use crate::config::{SupabaseConfig, Timeouts};
    use crate::services::backend::{Page, Table};
    use crate::services::session::StoredSession;
    use crate::supabase::SupabaseError;
    use crate::supabase::rest::{Filter, FilterOp};
    use crate::supabase::types::{AuthUser, RefreshedSession, UserMetadata};

    /// In-memory [`Backend`] with failure switches.
    #[derive(Default)]
    pub struct MockBackend {
        /// Access token to auth user.
        pub users: Mutex<HashMap<String, AuthUser>>,
        /// Refresh token to the pair handed out for it.
        pub refreshes: Mutex<HashMap<String, RefreshedSession>>,
        pub profiles: Mutex<Vec<Profile>>,
        pub trips: Mutex<Vec<Trip>>,
        pub signed_out: Mutex<Vec<String>>,
        pub picture: Option<String>,
        /// Table API error code returned by every read.
        pub fail_reads: Mutex<Option<String>>,
        /// Table API error code returned by every insert.
        pub fail_inserts: Mutex<Option<String>>,
        /// Auth API status returned by every refresh.
        pub fail_refresh: Mutex<Option<u16>>,
    }

    impl MockBackend {
        #[must_use]
        pub fn new() -> Self {
            Self::default()
        }

        #[must_use]
        pub fn with_user(self, access_token: &str, user: AuthUser) -> Self {
            self.users.lock().unwrap().insert(access_token.to_owned(), user);
            self
        }

        #[must_use]
        pub fn with_profile(self, profile: Profile) -> Self {
            self.profiles.lock().unwrap().push(profile);
            self
        }

        #[must_use]
        pub fn with_trip(self, trip: Trip) -> Self {
            self.trips.lock().unwrap().push(trip);
            self
        }

        pub fn fail_reads_with(&self, code: &str) {
            *self.fail_reads.lock().unwrap() = Some(code.to_owned());
        }

        pub fn fail_inserts_with(&self, code: &str) {
            *self.fail_inserts.lock().unwrap() = Some(code.to_owned());
        }

        pub fn fail_refresh_with(&self, status: u16) {
            *self.fail_refresh.lock().unwrap() = Some(status);
        }

        fn read_guard(&self) -> Result<(), SupabaseError> {
            match self.fail_reads.lock().unwrap().clone() {
                Some(code) => Err(rest_error(&code)),
                None => Ok(()),
            }
        }

        fn insert_guard(&self) -> Result<(), SupabaseError> {
            match self.fail_inserts.lock().unwrap().clone() {
                Some(code) => Err(rest_error(&code)),
                None => Ok(()),
            }
        }
    }

    fn rest_error(code: &str) -> SupabaseError {
        let message = if code == crate::supabase::error::FOREIGN_KEY_VIOLATION {
            "violates foreign key constraint \"profiles_id_fkey\"".to_owned()
        } else {
            format!("mock failure {code}")
        };
        SupabaseError::Rest { status: 400, code: Some(code.to_owned()), message, details: None }
    }

    fn unauthorized() -> SupabaseError {
        SupabaseError::Auth { status: 401, message: "invalid JWT".to_owned() }
    }

    fn matches(row: &serde_json::Value, filters: &[Filter]) -> bool {
        filters.iter().all(|f| {
            let value = match row.get(f.column) {
                Some(serde_json::Value::String(s)) => s.clone(),
                Some(serde_json::Value::Null) | None => return false,
                Some(other) => other.to_string(),
            };
            match f.op {
                FilterOp::Eq => value == f.value,
                FilterOp::Gte => value >= f.value,
                FilterOp::Lt => value < f.value,
            }
        })
    }

    fn window<T: Clone>(rows: &[T], offset: u32, limit: u32) -> Vec<T> {
        rows.iter()
            .skip(offset as usize)
            .take(limit as usize)
            .cloned()
            .collect()
    }

    #[async_trait]
    impl Backend for MockBackend {
        fn auth_base_url(&self) -> &str {
            "https://project.supabase.test"
        }

        async fn get_user(&self, access_token: &str) -> Result<AuthUser, SupabaseError> {
            self.users
                .lock()
                .unwrap()
                .get(access_token)
                .cloned()
                .ok_or_else(unauthorized)
        }

        async fn refresh_session(&self, refresh_token: &str) -> Result<RefreshedSession, SupabaseError> {
            if let Some(status) = *self.fail_refresh.lock().unwrap() {
                return Err(SupabaseError::Auth { status, message: "upstream down".to_owned() });
            }
            self.refreshes
                .lock()
                .unwrap()
                .get(refresh_token)
                .cloned()
                .ok_or_else(|| SupabaseError::Auth { status: 400, message: "Invalid Refresh Token".to_owned() })
        }

        async fn sign_out(&self, access_token: &str) -> Result<(), SupabaseError> {
            self.signed_out.lock().unwrap().push(access_token.to_owned());
            Ok(())
        }

        async fn find_profiles(&self, _access_token: &str, user_id: &str) -> Result<Page<Profile>, SupabaseError> {
            self.read_guard()?;
            let rows: Vec<Profile> = self
                .profiles
                .lock()
                .unwrap()
                .iter()
                .filter(|p| p.user_id == user_id)
                .cloned()
                .collect();
            let total = rows.len() as u64;
            Ok(Page { rows, total })
        }

        async fn list_profiles(&self, _access_token: &str, range: Option<(u32, u32)>) -> Result<Page<Profile>, SupabaseError> {
            self.read_guard()?;
            let all = self.profiles.lock().unwrap().clone();
            let total = all.len() as u64;
            let rows = match range {
                Some((offset, limit)) => window(&all, offset, limit),
                None => all,
            };
            Ok(Page { rows, total })
        }

        async fn insert_profile(&self, _access_token: &str, profile: &NewProfile) -> Result<Profile, SupabaseError> {
            self.insert_guard()?;
            let stored = Profile {
                id: profile.id.clone(),
                user_id: profile.user_id.clone(),
                name: profile.name.clone(),
                email: profile.email.clone(),
                status: profile.status,
                image_url: profile.image_url.clone(),
                avatar: None,
                joined_at: profile.joined_at.clone(),
            };
            self.profiles.lock().unwrap().push(stored.clone());
            Ok(stored)
        }

        async fn list_trips(&self, _access_token: &str, offset: u32, limit: u32) -> Result<Page<Trip>, SupabaseError> {
            self.read_guard()?;
            let mut all = self.trips.lock().unwrap().clone();
            all.sort_by(|a, b| b.created_at.cmp(&a.created_at));
            let total = all.len() as u64;
            Ok(Page { rows: window(&all, offset, limit), total })
        }

        async fn insert_trip(&self, _access_token: &str, trip: &NewTrip) -> Result<Trip, SupabaseError> {
            self.insert_guard()?;
            let mut trips = self.trips.lock().unwrap();
            let stored = Trip {
                id: (trips.len() + 1).to_string(),
                name: trip.name.clone(),
                description: trip.description.clone(),
                country: Some(trip.country.clone()),
                duration: Some(trip.duration),
                image_urls: trip.image_urls.clone(),
                itinerary: trip.itinerary.clone(),
                tags: trip.tags.clone(),
                estimated_price: trip.estimated_price.clone(),
                created_at: Some(trip.created_at.clone()),
            };
            trips.push(stored.clone());
            Ok(stored)
        }

        async fn count(&self, _access_token: &str, table: Table, filters: &[Filter]) -> Result<u64, SupabaseError> {
            self.read_guard()?;
            let rows: Vec<serde_json::Value> = match table {
                Table::Profiles => self
                    .profiles
                    .lock()
                    .unwrap()
                    .iter()
                    .map(|p| serde_json::to_value(p).unwrap())
                    .collect(),
                Table::Trips => self
                    .trips
                    .lock()
                    .unwrap()
                    .iter()
                    .map(|t| serde_json::to_value(t).unwrap())
                    .collect(),
            };
            Ok(rows.iter().filter(|row| matches(row, filters)).count() as u64)
        }

        async fn provider_picture(&self, provider_token: &str) -> Option<String> {
            if provider_token.is_empty() { None } else { self.picture.clone() }
        }
    }

    // =========================================================================
    // fixtures
    // =========================================================================

    #[must_use]
    pub fn test_config() -> AppConfig {
        AppConfig {
            supabase: SupabaseConfig {
                url: "https://project.supabase.test".to_owned(),
                anon_key: "anon".to_owned(),
                users_table: "profiles".to_owned(),
                trips_table: "trips".to_owned(),
                timeouts: Timeouts { request_secs: 5, connect_secs: 1 },
            },
            site_url: "http://localhost:3000".to_owned(),
            port: 3000,
            cookie_secure: false,
            session_ttl: Duration::from_secs(3600),
        }
    }

    #[must_use]
    pub fn test_app_state(backend: MockBackend) -> (AppState, Arc<MockBackend>) {
        let backend = Arc::new(backend);
        let state = AppState::new(backend.clone(), test_config());
        (state, backend)
    }

    #[must_use]
    pub fn auth_user(id: &str, email: &str) -> AuthUser {
        AuthUser { id: id.to_owned(), email: Some(email.to_owned()), user_metadata: UserMetadata::default() }
    }

    #[must_use]
    pub fn profile(id: &str, status: ProfileStatus) -> Profile {
        Profile {
            id: id.to_owned(),
            user_id: id.to_owned(),
            name: format!("User {id}"),
            email: format!("{id}@example.com"),
            status,
            ..Profile::default()
        }
    }

    #[must_use]
    pub fn session_tokens(access_token: &str) -> SessionTokens {
        SessionTokens {
            access_token: access_token.to_owned(),
            refresh_token: format!("{access_token}-refresh"),
            expires_in: Some(3600),
            ..SessionTokens::default()
        }
    }

    /// Seed a session for `access_token` and return its cookie token.
    pub async fn seed_session(state: &AppState, user_id: &str, access_token: &str) -> String {
        state
            .sessions
            .create(StoredSession::new(user_id, &session_tokens(access_token), now_unix()))
            .await
    }

    #[must_use]
    pub fn now_unix() -> i64 {
        time::OffsetDateTime::now_utc().unix_timestamp()
    }
}
