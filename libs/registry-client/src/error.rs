//! Error types for registry-client

use thiserror::Error;

/// Result type alias
pub type Result<T> = std::result::Result<T, Error>;

/// Supplier errors
#[derive(Error, Debug)]
pub enum Error {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON parse error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Invalid catalog: {0}")]
    InvalidCatalog(String),

    #[error("Metadata source unavailable: {0}")]
    Unavailable(String),
}

impl Error {
    /// The source answered, but with data that could not be used.
    pub fn is_malformed(&self) -> bool {
        matches!(self, Error::Json(_) | Error::InvalidCatalog(_))
    }
}
