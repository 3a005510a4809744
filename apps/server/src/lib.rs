//! Bazaar - extension marketplace search service
//!
//! Serves an extension catalog over HTTP:
//! - `GET /search` - filtered, sorted and paginated catalog search
//! - `GET /extension/:id` - a single extension with its detail fields
//! - `GET /categories` - record counts per extension type
//! - `GET /health` and `GET /metrics` for operations
//!
//! Query semantics live in `bazaar-catalog`; catalog data comes from a
//! `bazaar-registry-client` supplier.

pub mod api;
pub mod config;
pub mod error;
pub mod logging;
pub mod metrics;
pub mod rate_limit;
pub mod state;

pub use config::Config;
pub use error::{Error, Result};
pub use state::AppState;
