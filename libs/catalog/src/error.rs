//! Error types for catalog queries

use thiserror::Error;

/// Result type alias
pub type Result<T> = std::result::Result<T, Error>;

/// Catalog query errors
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum Error {
    /// A request parameter was malformed or out of range.
    #[error("Invalid parameter '{param}': {reason}")]
    Validation { param: String, reason: String },

    #[error("Extension not found: {0}")]
    NotFound(String),
}

impl Error {
    pub(crate) fn validation(param: &str, reason: impl Into<String>) -> Self {
        Error::Validation {
            param: param.to_string(),
            reason: reason.into(),
        }
    }

    pub fn is_validation(&self) -> bool {
        matches!(self, Error::Validation { .. })
    }
}
