//! Error types for the HTTP service

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde_json::json;
use thiserror::Error;

pub type Result<T> = std::result::Result<T, Error>;

#[derive(Error, Debug)]
pub enum Error {
    #[error(transparent)]
    Catalog(#[from] bazaar_catalog::Error),

    #[error("Catalog source error: {0}")]
    Supplier(#[from] bazaar_registry_client::Error),

    #[error("Invalid extension id: {0}")]
    InvalidId(String),

    #[error("Bad request: {0}")]
    BadRequest(String),

    #[error("{0}")]
    RateLimited(String),

    #[error("Internal server error: {0}")]
    Internal(String),
}

impl Error {
    pub fn status(&self) -> StatusCode {
        match self {
            Error::Catalog(bazaar_catalog::Error::Validation { .. }) => StatusCode::BAD_REQUEST,
            Error::Catalog(bazaar_catalog::Error::NotFound(_)) => StatusCode::NOT_FOUND,
            Error::InvalidId(_) | Error::BadRequest(_) => StatusCode::BAD_REQUEST,
            Error::RateLimited(_) => StatusCode::TOO_MANY_REQUESTS,
            Error::Supplier(e) if e.is_malformed() => StatusCode::BAD_GATEWAY,
            Error::Supplier(_) => StatusCode::SERVICE_UNAVAILABLE,
            Error::Internal(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    /// Short, stable label for the `error` field of the response body.
    fn label(&self) -> &'static str {
        match self {
            Error::Catalog(bazaar_catalog::Error::Validation { .. }) => "Invalid search parameters",
            Error::Catalog(bazaar_catalog::Error::NotFound(_)) => "Extension not found",
            Error::InvalidId(_) => "Invalid extension id",
            Error::BadRequest(_) => "Bad request",
            Error::RateLimited(_) => "Rate limit exceeded",
            Error::Supplier(e) if e.is_malformed() => "Invalid catalog data",
            Error::Supplier(_) => "Catalog unavailable",
            Error::Internal(_) => "Internal server error",
        }
    }
}

impl IntoResponse for Error {
    fn into_response(self) -> Response {
        let status = self.status();

        let message = if status.is_server_error() {
            match &self {
                Error::Supplier(_) => tracing::warn!(error = %self, "Catalog supplier failed"),
                _ => tracing::error!(error = %self, "Internal error"),
            }
            match &self {
                // Supplier messages describe the upstream failure, not internals.
                Error::Supplier(_) => self.to_string(),
                _ => "Internal server error".to_string(),
            }
        } else {
            self.to_string()
        };

        let body = Json(json!({
            "error": self.label(),
            "message": message,
        }));

        (status, body).into_response()
    }
}
