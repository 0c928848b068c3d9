//! Auth API: authorize redirect, user lookup, token refresh, sign-out.

#[cfg(test)]
#[path = "auth_test.rs"]
mod auth_test;

use super::error::auth_error;
use super::types::{AuthUser, RefreshedSession};
use super::{SupabaseClient, SupabaseError};

/// Build `{base}/auth/v1/authorize?provider=..&redirect_to=..&extra..`.
///
/// Extra pairs are forwarded to the upstream provider unchanged.
#[must_use]
pub fn authorize_url(base_url: &str, provider: &str, redirect_to: &str, extra: &[(&str, &str)]) -> String {
    let mut url = format!(
        "{}/auth/v1/authorize?provider={}&redirect_to={}",
        base_url.trim_end_matches('/'),
        urlencoding::encode(provider),
        urlencoding::encode(redirect_to)
    );
    for (key, value) in extra {
        url.push('&');
        url.push_str(&urlencoding::encode(key));
        url.push('=');
        url.push_str(&urlencoding::encode(value));
    }
    url
}

impl SupabaseClient {
    #[must_use]
    pub fn authorize_url(&self, provider: &str, redirect_to: &str, extra: &[(&str, &str)]) -> String {
        authorize_url(&self.base_url, provider, redirect_to, extra)
    }

    /// Resolve an access token to its auth user.
    ///
    /// # Errors
    ///
    /// [`SupabaseError::Auth`] with status 401 when the token is invalid or
    /// expired; other variants on transport or decode failures.
    pub async fn get_user(&self, access_token: &str) -> Result<AuthUser, SupabaseError> {
        let resp = self
            .authorized(self.http.get(self.endpoint("/auth/v1/user")), Some(access_token))
            .send()
            .await?;
        if !resp.status().is_success() {
            return Err(auth_error(resp).await);
        }
        resp.json::<AuthUser>()
            .await
            .map_err(|e| SupabaseError::Decode(e.to_string()))
    }

    /// Trade a refresh token for a new token pair.
    ///
    /// # Errors
    ///
    /// [`SupabaseError::Auth`] when the refresh token was revoked or reused.
    pub async fn refresh_session(&self, refresh_token: &str) -> Result<RefreshedSession, SupabaseError> {
        let resp = self
            .authorized(self.http.post(self.endpoint("/auth/v1/token")), None)
            .query(&[("grant_type", "refresh_token")])
            .json(&serde_json::json!({ "refresh_token": refresh_token }))
            .send()
            .await?;
        if !resp.status().is_success() {
            return Err(auth_error(resp).await);
        }
        resp.json::<RefreshedSession>()
            .await
            .map_err(|e| SupabaseError::Decode(e.to_string()))
    }

    /// Revoke the session behind `access_token`.
    ///
    /// # Errors
    ///
    /// Returns [`SupabaseError`] when the auth API rejects the call.
    pub async fn sign_out(&self, access_token: &str) -> Result<(), SupabaseError> {
        let resp = self
            .authorized(self.http.post(self.endpoint("/auth/v1/logout")), Some(access_token))
            .send()
            .await?;
        if !resp.status().is_success() {
            return Err(auth_error(resp).await);
        }
        Ok(())
    }
}
