//! Errors raised by the hosted backend client.

use serde::Deserialize;

/// PostgREST error code for a foreign-key violation.
pub const FOREIGN_KEY_VIOLATION: &str = "23503";

#[derive(Debug, thiserror::Error)]
pub enum SupabaseError {
    /// The HTTP client could not be constructed.
    #[error("HTTP client build failed: {0}")]
    ClientBuild(String),

    /// The request never produced a response (DNS, TLS, timeout, ...).
    #[error("request failed: {0}")]
    Request(#[from] reqwest::Error),

    /// The table API answered with a non-success status.
    #[error("table API error {status}: {message}")]
    Rest {
        status: u16,
        code: Option<String>,
        message: String,
        details: Option<String>,
    },

    /// The auth API answered with a non-success status.
    #[error("auth API error {status}: {message}")]
    Auth { status: u16, message: String },

    /// A success response carried an unexpected body.
    #[error("unexpected response: {0}")]
    Decode(String),
}

impl SupabaseError {
    /// True when the access token was rejected and a refresh or a new
    /// sign-in is needed.
    #[must_use]
    pub fn is_unauthorized(&self) -> bool {
        match self {
            Self::Auth { status, .. } => matches!(status, 400 | 401 | 403),
            Self::Rest { status, code, .. } => *status == 401 || code.as_deref() == Some("PGRST301"),
            _ => false,
        }
    }

    #[must_use]
    pub fn code(&self) -> Option<&str> {
        match self {
            Self::Rest { code, .. } => code.as_deref(),
            _ => None,
        }
    }

    /// True for a foreign-key violation mentioning `constraint`.
    #[must_use]
    pub fn is_foreign_key_violation(&self, constraint: &str) -> bool {
        match self {
            Self::Rest { code: Some(code), message, details, .. } => {
                code == FOREIGN_KEY_VIOLATION
                    && (message.contains(constraint) || details.as_deref().is_some_and(|d| d.contains(constraint)))
            }
            _ => false,
        }
    }
}

/// `{ code, message, details, hint }` body of a table API failure.
#[derive(Debug, Default, Deserialize)]
pub(crate) struct RestErrorBody {
    #[serde(default)]
    pub code: Option<String>,
    #[serde(default)]
    pub message: Option<String>,
    #[serde(default)]
    pub details: Option<String>,
    #[serde(default)]
    pub hint: Option<String>,
}

/// Auth API failures come in several shapes depending on the endpoint.
#[derive(Debug, Default, Deserialize)]
pub(crate) struct AuthErrorBody {
    #[serde(default)]
    pub error_description: Option<String>,
    #[serde(default)]
    pub msg: Option<String>,
    #[serde(default)]
    pub message: Option<String>,
    #[serde(default)]
    pub error: Option<String>,
}

impl AuthErrorBody {
    pub(crate) fn into_message(self) -> Option<String> {
        self.error_description
            .or(self.msg)
            .or(self.message)
            .or(self.error)
    }
}

pub(crate) async fn rest_error(resp: reqwest::Response) -> SupabaseError {
    let status = resp.status().as_u16();
    let text = resp.text().await.unwrap_or_default();
    let body: RestErrorBody = serde_json::from_str(&text).unwrap_or_default();
    let mut message = body.message.unwrap_or(text);
    if let Some(hint) = body.hint.filter(|h| !h.is_empty()) {
        message = format!("{message} (hint: {hint})");
    }
    SupabaseError::Rest { status, code: body.code, message, details: body.details }
}

pub(crate) async fn auth_error(resp: reqwest::Response) -> SupabaseError {
    let status = resp.status().as_u16();
    let text = resp.text().await.unwrap_or_default();
    let message = serde_json::from_str::<AuthErrorBody>(&text)
        .ok()
        .and_then(AuthErrorBody::into_message)
        .unwrap_or(text);
    SupabaseError::Auth { status, message }
}
