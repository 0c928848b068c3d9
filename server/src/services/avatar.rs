//! Profile picture lookup through the upstream identity provider.
//!
//! With the provider token from the OAuth callback, ask the Google People API
//! for the account photo and fall back to the OAuth2 userinfo `picture`. Any
//! failure yields `None`; a missing picture never blocks sign-in.

#[cfg(test)]
#[path = "avatar_test.rs"]
mod avatar_test;

use serde::Deserialize;

pub const PEOPLE_API_URL: &str = "https://people.googleapis.com/v1/people/me?personFields=photos";
pub const USERINFO_URL: &str = "https://www.googleapis.com/oauth2/v3/userinfo";

#[derive(Debug, Default, Deserialize)]
struct PeopleResponse {
    #[serde(default)]
    photos: Vec<Photo>,
}

#[derive(Debug, Deserialize)]
struct Photo {
    #[serde(default)]
    url: Option<String>,
}

#[derive(Debug, Default, Deserialize)]
struct UserInfo {
    #[serde(default)]
    picture: Option<String>,
}

#[derive(Clone)]
pub struct ProviderPictures {
    http: reqwest::Client,
    people_url: String,
    userinfo_url: String,
}

impl ProviderPictures {
    #[must_use]
    pub fn new(http: reqwest::Client) -> Self {
        Self::with_endpoints(http, PEOPLE_API_URL, USERINFO_URL)
    }

    #[must_use]
    pub fn with_endpoints(http: reqwest::Client, people_url: &str, userinfo_url: &str) -> Self {
        Self { http, people_url: people_url.to_owned(), userinfo_url: userinfo_url.to_owned() }
    }

    pub async fn lookup(&self, provider_token: &str) -> Option<String> {
        let token = provider_token.trim();
        if token.is_empty() {
            return None;
        }
        if let Some(url) = self.people_photo(token).await {
            return Some(url);
        }
        self.userinfo_picture(token).await
    }

    async fn people_photo(&self, token: &str) -> Option<String> {
        let body: PeopleResponse = self.fetch(&self.people_url, token).await?;
        body.photos
            .into_iter()
            .find_map(|p| p.url.filter(|u| !u.is_empty()))
    }

    async fn userinfo_picture(&self, token: &str) -> Option<String> {
        let body: UserInfo = self.fetch(&self.userinfo_url, token).await?;
        body.picture.filter(|u| !u.is_empty())
    }

    async fn fetch<T: serde::de::DeserializeOwned>(&self, url: &str, token: &str) -> Option<T> {
        let resp = match self.http.get(url).bearer_auth(token).send().await {
            Ok(resp) => resp,
            Err(e) => {
                tracing::warn!(error = %e, %url, "provider picture request failed");
                return None;
            }
        };
        if !resp.status().is_success() {
            tracing::debug!(status = resp.status().as_u16(), %url, "provider picture lookup declined");
            return None;
        }
        resp.json::<T>().await.ok()
    }
}
