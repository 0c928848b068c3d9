//! Backend seam between services and the hosted backend.
//!
//! DESIGN
//! ======
//! `AppState` holds an `Arc<dyn Backend>`. Production wires
//! [`SupabaseBackend`]; tests use an in-memory implementation. Every data call
//! takes the caller's access token so the backend's row-level security sees
//! the signed-in user.

use async_trait::async_trait;
use tourvisto_ui::net::types::{NewProfile, NewTrip, Profile, Trip};

use super::avatar::ProviderPictures;
use crate::config::SupabaseConfig;
use crate::supabase::rest::{Filter, SelectQuery};
use crate::supabase::types::{AuthUser, RefreshedSession};
use crate::supabase::{SupabaseClient, SupabaseError};

/// Tables the services read and write.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Table {
    Profiles,
    Trips,
}

/// One page of rows plus the exact total.
#[derive(Debug, Clone, PartialEq)]
pub struct Page<T> {
    pub rows: Vec<T>,
    pub total: u64,
}

#[async_trait]
pub trait Backend: Send + Sync {
    /// Base URL used for the OAuth authorize redirect.
    fn auth_base_url(&self) -> &str;

    async fn get_user(&self, access_token: &str) -> Result<AuthUser, SupabaseError>;

    async fn refresh_session(&self, refresh_token: &str) -> Result<RefreshedSession, SupabaseError>;

    async fn sign_out(&self, access_token: &str) -> Result<(), SupabaseError>;

    /// Profile rows with `user_id == user_id`.
    async fn find_profiles(&self, access_token: &str, user_id: &str) -> Result<Page<Profile>, SupabaseError>;

    /// All profiles, or one `(offset, limit)` window of them.
    async fn list_profiles(&self, access_token: &str, window: Option<(u32, u32)>) -> Result<Page<Profile>, SupabaseError>;

    async fn insert_profile(&self, access_token: &str, profile: &NewProfile) -> Result<Profile, SupabaseError>;

    /// Trips, newest first.
    async fn list_trips(&self, access_token: &str, offset: u32, limit: u32) -> Result<Page<Trip>, SupabaseError>;

    async fn insert_trip(&self, access_token: &str, trip: &NewTrip) -> Result<Trip, SupabaseError>;

    async fn count(&self, access_token: &str, table: Table, filters: &[Filter]) -> Result<u64, SupabaseError>;

    /// Upstream provider picture for `provider_token`; `None` on any failure.
    async fn provider_picture(&self, provider_token: &str) -> Option<String>;
}

/// [`Backend`] over the Supabase REST and auth APIs.
pub struct SupabaseBackend {
    client: SupabaseClient,
    pictures: ProviderPictures,
    users_table: String,
    trips_table: String,
}

impl SupabaseBackend {
    /// # Errors
    ///
    /// Returns [`SupabaseError::ClientBuild`] if the HTTP client fails to build.
    pub fn new(config: &SupabaseConfig) -> Result<Self, SupabaseError> {
        let client = SupabaseClient::new(config)?;
        let pictures = ProviderPictures::new(client.http().clone());
        Ok(Self {
            client,
            pictures,
            users_table: config.users_table.clone(),
            trips_table: config.trips_table.clone(),
        })
    }

    fn table(&self, table: Table) -> &str {
        match table {
            Table::Profiles => &self.users_table,
            Table::Trips => &self.trips_table,
        }
    }
}

#[async_trait]
impl Backend for SupabaseBackend {
    fn auth_base_url(&self) -> &str {
        self.client.base_url()
    }

    async fn get_user(&self, access_token: &str) -> Result<AuthUser, SupabaseError> {
        self.client.get_user(access_token).await
    }

    async fn refresh_session(&self, refresh_token: &str) -> Result<RefreshedSession, SupabaseError> {
        self.client.refresh_session(refresh_token).await
    }

    async fn sign_out(&self, access_token: &str) -> Result<(), SupabaseError> {
        self.client.sign_out(access_token).await
    }

    async fn find_profiles(&self, access_token: &str, user_id: &str) -> Result<Page<Profile>, SupabaseError> {
        let query = SelectQuery::default()
            .filter(Filter::eq("user_id", user_id))
            .exact_count();
        let rows = self
            .client
            .select::<Profile>(access_token, self.table(Table::Profiles), &query)
            .await?;
        let total = rows.total.unwrap_or(rows.rows.len() as u64);
        Ok(Page { rows: rows.rows, total })
    }

    async fn list_profiles(&self, access_token: &str, window: Option<(u32, u32)>) -> Result<Page<Profile>, SupabaseError> {
        let mut query = SelectQuery::default().exact_count();
        if let Some((offset, limit)) = window {
            query = query.range(offset, limit);
        }
        let rows = self
            .client
            .select::<Profile>(access_token, self.table(Table::Profiles), &query)
            .await?;
        let total = rows.total.unwrap_or(rows.rows.len() as u64);
        Ok(Page { rows: rows.rows, total })
    }

    async fn insert_profile(&self, access_token: &str, profile: &NewProfile) -> Result<Profile, SupabaseError> {
        self.client
            .insert_single(access_token, self.table(Table::Profiles), profile)
            .await
    }

    async fn list_trips(&self, access_token: &str, offset: u32, limit: u32) -> Result<Page<Trip>, SupabaseError> {
        let query = SelectQuery::default()
            .order_desc("created_at")
            .range(offset, limit)
            .exact_count();
        let rows = self
            .client
            .select::<Trip>(access_token, self.table(Table::Trips), &query)
            .await?;
        let total = rows.total.unwrap_or(rows.rows.len() as u64);
        Ok(Page { rows: rows.rows, total })
    }

    async fn insert_trip(&self, access_token: &str, trip: &NewTrip) -> Result<Trip, SupabaseError> {
        self.client
            .insert_single(access_token, self.table(Table::Trips), trip)
            .await
    }

    async fn count(&self, access_token: &str, table: Table, filters: &[Filter]) -> Result<u64, SupabaseError> {
        self.client
            .count(access_token, self.table(table), filters)
            .await
    }

    async fn provider_picture(&self, provider_token: &str) -> Option<String> {
        self.pictures.lookup(provider_token).await
    }
}
