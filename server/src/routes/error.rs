//! HTTP translation of service errors.

use axum::http::StatusCode;
use axum::response::{IntoResponse, Json, Response};
use tourvisto_ui::net::types::ApiError;

use crate::services::ServiceError;

/// Handler error: a [`ServiceError`] rendered as `{"error": "..."}`.
#[derive(Debug)]
pub struct ApiFailure(pub ServiceError);

impl From<ServiceError> for ApiFailure {
    fn from(error: ServiceError) -> Self {
        Self(error)
    }
}

impl ApiFailure {
    #[must_use]
    pub fn status(&self) -> StatusCode {
        match &self.0 {
            ServiceError::Backend(e) if e.is_unauthorized() => StatusCode::UNAUTHORIZED,
            ServiceError::Backend(_) => StatusCode::BAD_GATEWAY,
            ServiceError::Unauthorized => StatusCode::UNAUTHORIZED,
            ServiceError::Validation(_) => StatusCode::UNPROCESSABLE_ENTITY,
            ServiceError::UnknownProvider(_) => StatusCode::BAD_REQUEST,
        }
    }
}

impl IntoResponse for ApiFailure {
    fn into_response(self) -> Response {
        let status = self.status();
        if status.is_server_error() {
            tracing::error!(error = %self.0, %status, "request failed");
        } else {
            tracing::warn!(error = %self.0, %status, "request rejected");
        }
        (status, Json(ApiError { error: self.0.to_string() })).into_response()
    }
}
