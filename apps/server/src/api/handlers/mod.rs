//! Request handlers for API endpoints
//!
//! Handlers extract request input, take one catalog snapshot from the
//! supplier, run the catalog operation against it and shape the JSON body.

pub mod extension;
pub mod metadata;
pub mod metrics;
pub mod search;

pub use extension::*;
pub use metadata::*;
pub use metrics::*;
pub use search::*;
