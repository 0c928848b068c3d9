//! Typed client for the hosted backend (Supabase).
//!
//! SYSTEM CONTEXT
//! ==============
//! Every record lives in the hosted backend. This module speaks its two HTTP
//! surfaces: the PostgREST table API under `/rest/v1` and the auth API under
//! `/auth/v1`. Requests carry the project's anon key in `apikey` and the
//! caller's access token as a bearer token, so row-level security applies.
//!
//! ERROR HANDLING
//! ==============
//! All calls return [`SupabaseError`]; non-success bodies are decoded into
//! the backend's `{ code, message, details, hint }` shape where possible.

pub mod auth;
pub mod error;
pub mod rest;
pub mod types;

#[cfg(test)]
#[path = "client_test.rs"]
mod client_test;

use std::time::Duration;

pub use error::SupabaseError;

use crate::config::SupabaseConfig;

/// Shared HTTP client bound to one backend project.
#[derive(Clone)]
pub struct SupabaseClient {
    http: reqwest::Client,
    base_url: String,
    anon_key: String,
}

impl SupabaseClient {
    /// Build a client with the configured timeouts.
    ///
    /// # Errors
    ///
    /// Returns [`SupabaseError::ClientBuild`] if the HTTP client fails to build.
    pub fn new(config: &SupabaseConfig) -> Result<Self, SupabaseError> {
        let http = reqwest::Client::builder()
            .timeout(Duration::from_secs(config.timeouts.request_secs))
            .connect_timeout(Duration::from_secs(config.timeouts.connect_secs))
            .build()
            .map_err(|e| SupabaseError::ClientBuild(e.to_string()))?;
        Ok(Self::with_http(http, &config.url, &config.anon_key))
    }

    #[must_use]
    pub fn with_http(http: reqwest::Client, base_url: &str, anon_key: &str) -> Self {
        Self { http, base_url: base_url.trim_end_matches('/').to_owned(), anon_key: anon_key.to_owned() }
    }

    #[must_use]
    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// Underlying HTTP client, shared with other outbound lookups.
    #[must_use]
    pub fn http(&self) -> &reqwest::Client {
        &self.http
    }

    fn endpoint(&self, path: &str) -> String {
        format!("{}{path}", self.base_url)
    }

    /// Attach `apikey` and the bearer token. Anonymous calls use the anon key
    /// as the bearer too.
    fn authorized(&self, builder: reqwest::RequestBuilder, access_token: Option<&str>) -> reqwest::RequestBuilder {
        let bearer = access_token.unwrap_or(&self.anon_key);
        builder
            .header("apikey", &self.anon_key)
            .header(reqwest::header::AUTHORIZATION, format!("Bearer {bearer}"))
    }
}
