//! Domain services used by the HTTP routes.
//!
//! ARCHITECTURE
//! ============
//! Service modules own the sign-in flow, profile and trip rules, and dashboard
//! aggregation. They reach the hosted backend only through the [`Backend`]
//! trait, so route handlers stay focused on HTTP translation and cookies, and
//! tests swap in an in-memory backend.
//!
//! [`Backend`]: backend::Backend

pub mod auth;
pub mod avatar;
pub mod backend;
pub mod bootstrap;
pub mod dashboard;
pub mod profiles;
pub mod session;
pub mod trips;

use time::OffsetDateTime;
use time::format_description::well_known::Rfc3339;

use crate::supabase::SupabaseError;

/// RFC 3339 form of `at`, as stored in timestamp columns.
pub(crate) fn timestamp(at: OffsetDateTime) -> String {
    at.format(&Rfc3339).unwrap_or_default()
}

#[derive(Debug, thiserror::Error)]
pub enum ServiceError {
    #[error(transparent)]
    Backend(#[from] SupabaseError),
    #[error("not signed in")]
    Unauthorized,
    #[error("{0}")]
    Validation(String),
    #[error("unsupported sign-in provider: {0}")]
    UnknownProvider(String),
}
