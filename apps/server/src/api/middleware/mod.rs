//! Middleware stack for the API

pub mod layers;
pub mod metrics;
pub mod rate_limit;
pub mod request_id;
pub mod security;

use axum::extract::{MatchedPath, Request};

pub use layers::{compression, cors, trace};
pub use metrics::metrics_middleware;
pub use rate_limit::rate_limit_middleware;
pub use request_id::request_id_middleware;
pub use security::security_headers_middleware;

/// Label used for requests that matched no route.
const UNMATCHED: &str = "unmatched";

/// Route template (`/extension/:id`) for span and metric labels, never the raw path.
fn route_template(req: &Request) -> String {
    req.extensions()
        .get::<MatchedPath>()
        .map(|p| p.as_str().to_owned())
        .unwrap_or_else(|| UNMATCHED.to_owned())
}
