//! Error type shared by the API handlers.
//!
//! Validation failures are shown to the caller as-is. Store failures are
//! logged with full detail and the caller only gets a generic message.

use axum::Json;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use thiserror::Error;
use tracing::error;

use portfolio_types::api::AckResponse;

pub const MISSING_FIELDS: &str = "Name, email, and message are required";
pub const STORE_FAILED: &str = "Server error. Please try again later.";
pub const FETCH_FAILED: &str = "Error fetching messages";

#[derive(Debug, Error)]
pub enum ApiError {
    /// The caller left out a required field, or sent a body we could not read.
    #[error("{0}")]
    Validation(&'static str),

    /// The store could not be reached or the statement failed.
    #[error("{public}: {cause:#}")]
    Persistence {
        public: &'static str,
        cause: anyhow::Error,
    },
}

impl ApiError {
    pub fn missing_fields() -> Self {
        Self::Validation(MISSING_FIELDS)
    }

    pub fn store(cause: impl Into<anyhow::Error>) -> Self {
        Self::Persistence { public: STORE_FAILED, cause: cause.into() }
    }

    pub fn fetch(cause: impl Into<anyhow::Error>) -> Self {
        Self::Persistence { public: FETCH_FAILED, cause: cause.into() }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let (status, message) = match self {
            ApiError::Validation(m) => (StatusCode::BAD_REQUEST, m),
            ApiError::Persistence { public, cause } => {
                error!(error = %format!("{cause:#}"), "{}", public);
                (StatusCode::INTERNAL_SERVER_ERROR, public)
            }
        };

        (status, Json(AckResponse::failed(message))).into_response()
    }
}
