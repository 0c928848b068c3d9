//! Server configuration parsed from environment variables.
//!
//! DESIGN
//! ======
//! Parsing goes through a lookup function so tests can supply a map instead
//! of mutating the process environment. `from_env` is the production entry.

#[cfg(test)]
#[path = "config_test.rs"]
mod tests;

use std::time::Duration;

pub const DEFAULT_USERS_TABLE: &str = "profiles";
pub const DEFAULT_TRIPS_TABLE: &str = "trips";
pub const DEFAULT_REQUEST_TIMEOUT_SECS: u64 = 30;
pub const DEFAULT_CONNECT_TIMEOUT_SECS: u64 = 10;
pub const DEFAULT_SITE_URL: &str = "http://localhost:3000";
pub const DEFAULT_PORT: u16 = 3000;
pub const DEFAULT_SESSION_TTL_SECS: u64 = 7 * 24 * 60 * 60;

#[derive(Debug, thiserror::Error, PartialEq, Eq)]
pub enum ConfigError {
    #[error("missing required env var {0}")]
    Missing(&'static str),
    #[error("invalid value for {var}: {value:?}")]
    Invalid { var: &'static str, value: String },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Timeouts {
    pub request_secs: u64,
    pub connect_secs: u64,
}

/// Hosted backend connection settings.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SupabaseConfig {
    /// Project base URL without a trailing slash.
    pub url: String,
    pub anon_key: String,
    pub users_table: String,
    pub trips_table: String,
    pub timeouts: Timeouts,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AppConfig {
    pub supabase: SupabaseConfig,
    /// Public origin of this server; the OAuth callback is built from it.
    pub site_url: String,
    pub port: u16,
    pub cookie_secure: bool,
    /// Idle lifetime of a server session.
    pub session_ttl: Duration,
}

impl AppConfig {
    /// Build typed config from the process environment.
    ///
    /// Required: `SUPABASE_URL`, `SUPABASE_ANON_KEY`.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError`] when a required variable is missing or a value
    /// does not parse.
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Build typed config from an arbitrary key lookup.
    ///
    /// # Errors
    ///
    /// See [`AppConfig::from_env`].
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let url = required(&lookup, "SUPABASE_URL")?
            .trim_end_matches('/')
            .to_owned();
        let anon_key = required(&lookup, "SUPABASE_ANON_KEY")?;

        let supabase = SupabaseConfig {
            url,
            anon_key,
            users_table: lookup("SUPABASE_USERS_TABLE").unwrap_or_else(|| DEFAULT_USERS_TABLE.to_owned()),
            trips_table: lookup("SUPABASE_TRIPS_TABLE").unwrap_or_else(|| DEFAULT_TRIPS_TABLE.to_owned()),
            timeouts: Timeouts {
                request_secs: env_parse(&lookup, "SUPABASE_REQUEST_TIMEOUT_SECS", DEFAULT_REQUEST_TIMEOUT_SECS)?,
                connect_secs: env_parse(&lookup, "SUPABASE_CONNECT_TIMEOUT_SECS", DEFAULT_CONNECT_TIMEOUT_SECS)?,
            },
        };

        let site_url = lookup("SITE_URL")
            .unwrap_or_else(|| DEFAULT_SITE_URL.to_owned())
            .trim_end_matches('/')
            .to_owned();
        let cookie_secure = match lookup("COOKIE_SECURE") {
            Some(raw) => parse_bool(&raw).ok_or(ConfigError::Invalid { var: "COOKIE_SECURE", value: raw })?,
            None => site_url.starts_with("https://"),
        };

        Ok(Self {
            supabase,
            site_url,
            port: env_parse(&lookup, "PORT", DEFAULT_PORT)?,
            cookie_secure,
            session_ttl: Duration::from_secs(env_parse(&lookup, "SESSION_TTL_SECS", DEFAULT_SESSION_TTL_SECS)?),
        })
    }

    /// Where the identity provider sends the browser after sign-in.
    #[must_use]
    pub fn callback_url(&self) -> String {
        format!("{}/auth-callback", self.site_url)
    }
}

fn required<F>(lookup: &F, var: &'static str) -> Result<String, ConfigError>
where
    F: Fn(&str) -> Option<String>,
{
    lookup(var)
        .map(|v| v.trim().to_owned())
        .filter(|v| !v.is_empty())
        .ok_or(ConfigError::Missing(var))
}

fn env_parse<F, T>(lookup: &F, var: &'static str, default: T) -> Result<T, ConfigError>
where
    F: Fn(&str) -> Option<String>,
    T: std::str::FromStr,
{
    match lookup(var) {
        None => Ok(default),
        Some(raw) => raw
            .trim()
            .parse::<T>()
            .map_err(|_| ConfigError::Invalid { var, value: raw }),
    }
}

pub(crate) fn parse_bool(raw: &str) -> Option<bool> {
    match raw.trim().to_ascii_lowercase().as_str() {
        "1" | "true" | "yes" | "on" => Some(true),
        "0" | "false" | "no" | "off" => Some(false),
        _ => None,
    }
}
