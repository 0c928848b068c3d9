//! Profile lookup, creation, and listing.
//!
//! ERROR HANDLING
//! ==============
//! Lookup and creation log backend failures and return `None`; the bootstrap
//! loader decides what a missing profile means. The paged listing propagates
//! errors, while the full listing folds them into the page's `error` field.

#[cfg(test)]
#[path = "profiles_test.rs"]
mod tests;

use time::OffsetDateTime;
use tourvisto_ui::net::types::{NewProfile, Profile, ProfileCreation, ProfileStatus, UsersPage};

use super::backend::Backend;
use super::{ServiceError, timestamp};
use crate::supabase::types::AuthUser;

/// Foreign key from `profiles.id` to the auth users table.
pub const PROFILES_ID_FKEY: &str = "profiles_id_fkey";

pub const MAX_PAGE_SIZE: u32 = 100;

/// First profile whose `user_id` matches, or `None` (also on errors).
pub async fn get_existing_user(backend: &dyn Backend, access_token: &str, user_id: &str) -> Option<Profile> {
    match backend.find_profiles(access_token, user_id).await {
        Ok(page) if page.total == 0 => None,
        Ok(page) => page.rows.into_iter().next(),
        Err(e) => {
            tracing::error!(%user_id, error = %e, "profile lookup failed");
            None
        }
    }
}

/// Insert payload for a self-created profile. New profiles are admins.
#[must_use]
pub fn build_new_profile(user: &AuthUser, picture: Option<String>, now: OffsetDateTime) -> NewProfile {
    NewProfile {
        id: user.id.clone(),
        user_id: user.id.clone(),
        email: user.email.clone().unwrap_or_default(),
        name: user.display_name(),
        image_url: picture.or_else(|| user.metadata_picture().map(str::to_owned)),
        joined_at: Some(timestamp(now)),
        status: ProfileStatus::Admin,
    }
}

/// Create the profile row for `user`.
///
/// The picture comes from the upstream provider when a provider token is
/// available, else from the auth user's metadata.
pub async fn store_user_data(
    backend: &dyn Backend,
    access_token: &str,
    user: &AuthUser,
    provider_token: Option<&str>,
    now: OffsetDateTime,
) -> Option<Profile> {
    let picture = match provider_token {
        Some(token) => backend.provider_picture(token).await,
        None => None,
    };
    let new_profile = build_new_profile(user, picture, now);

    match backend.insert_profile(access_token, &new_profile).await {
        Ok(profile) => {
            tracing::info!(user_id = %user.id, "profile created");
            Some(profile)
        }
        Err(e) if e.is_foreign_key_violation(PROFILES_ID_FKEY) => {
            tracing::error!(
                user_id = %user.id,
                error = %e,
                "profile id does not reference an auth user; check the {PROFILES_ID_FKEY} constraint"
            );
            None
        }
        Err(e) => {
            tracing::error!(user_id = %user.id, error = %e, "profile creation failed");
            None
        }
    }
}

/// One page of profiles with the exact total.
///
/// # Errors
///
/// [`ServiceError::Backend`] when the table API fails.
pub async fn get_all_users(
    backend: &dyn Backend,
    access_token: &str,
    limit: u32,
    offset: u32,
) -> Result<UsersPage, ServiceError> {
    let limit = limit.clamp(1, MAX_PAGE_SIZE);
    let page = backend.list_profiles(access_token, Some((offset, limit))).await?;
    if page.total == 0 {
        return Ok(UsersPage::default());
    }
    Ok(UsersPage { users: page.rows, total: page.total, error: None })
}

/// Every profile with the picture fallback applied.
pub async fn get_profiles(backend: &dyn Backend, access_token: &str) -> UsersPage {
    match backend.list_profiles(access_token, None).await {
        Ok(page) => {
            let users = page
                .rows
                .into_iter()
                .map(|mut p| {
                    p.image_url = Some(p.avatar_url().to_owned());
                    p
                })
                .collect();
            UsersPage { users, total: page.total, error: None }
        }
        Err(e) => {
            tracing::error!(error = %e, "profile listing failed");
            UsersPage { users: Vec::new(), total: 0, error: Some(e.to_string()) }
        }
    }
}

/// Insert an admin profile for `user`, or a synthetic test profile.
pub async fn create_test_profile(
    backend: &dyn Backend,
    access_token: &str,
    user: Option<&AuthUser>,
    now: OffsetDateTime,
) -> ProfileCreation {
    let new_profile = match user {
        Some(user) => build_new_profile(user, None, now),
        None => {
            let id = format!("test-{}", now.unix_timestamp_nanos() / 1_000_000);
            NewProfile {
                id: id.clone(),
                user_id: id,
                email: "test@example.com".to_owned(),
                name: "Test User".to_owned(),
                image_url: None,
                joined_at: Some(timestamp(now)),
                status: ProfileStatus::Admin,
            }
        }
    };

    match backend.insert_profile(access_token, &new_profile).await {
        Ok(profile) => ProfileCreation { profile: Some(profile), error: None },
        Err(e) => {
            tracing::error!(profile_id = %new_profile.id, error = %e, "test profile creation failed");
            ProfileCreation { profile: None, error: Some(e.to_string()) }
        }
    }
}
