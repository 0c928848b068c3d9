//! Auth API payloads.

use serde::{Deserialize, Serialize};

/// Free-form metadata the identity provider attached to the auth user.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct UserMetadata {
    #[serde(default)]
    pub name: Option<String>,
    #[serde(default)]
    pub full_name: Option<String>,
    #[serde(default)]
    pub picture: Option<String>,
    #[serde(default)]
    pub avatar_url: Option<String>,
}

/// Auth user record (`GET /auth/v1/user`).
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct AuthUser {
    pub id: String,
    #[serde(default)]
    pub email: Option<String>,
    #[serde(default)]
    pub user_metadata: UserMetadata,
}

impl AuthUser {
    /// `metadata.name`, then `metadata.full_name`, then the email local part.
    #[must_use]
    pub fn display_name(&self) -> String {
        let meta = &self.user_metadata;
        meta.name
            .as_deref()
            .or(meta.full_name.as_deref())
            .map(str::trim)
            .filter(|n| !n.is_empty())
            .map_or_else(|| email_local_part(self.email.as_deref().unwrap_or_default()), str::to_owned)
    }

    /// Picture URL from the provider metadata, if any.
    #[must_use]
    pub fn metadata_picture(&self) -> Option<&str> {
        let meta = &self.user_metadata;
        meta.picture
            .as_deref()
            .or(meta.avatar_url.as_deref())
            .filter(|p| !p.trim().is_empty())
    }
}

fn email_local_part(email: &str) -> String {
    email.split('@').next().unwrap_or_default().to_owned()
}

/// Token pair returned by `POST /auth/v1/token?grant_type=refresh_token`.
#[derive(Clone, Debug, PartialEq, Eq, Deserialize)]
pub struct RefreshedSession {
    pub access_token: String,
    pub refresh_token: String,
    #[serde(default)]
    pub expires_in: Option<i64>,
    #[serde(default)]
    pub expires_at: Option<i64>,
}
