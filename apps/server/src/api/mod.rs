//! API layer - routes, handlers, and middleware

pub mod handlers;
pub mod middleware;
pub mod routes;

use crate::state::AppState;
use axum::{
    extract::DefaultBodyLimit,
    middleware::{from_fn, from_fn_with_state},
    Router,
};

/// Build the full application router.
///
/// Layers run outermost first on the way in: body limit, request id span,
/// HTTP trace, CORS, compression, metrics, hardening headers, then the
/// per-client rate limit.
pub fn create_router(state: AppState) -> Router {
    let server = &state.config.server;
    let body_limit = DefaultBodyLimit::max(server.max_request_body_size);
    let cors = middleware::cors(&server.cors_origins);

    Router::new()
        .merge(routes::catalog_routes())
        .merge(routes::ops_routes())
        .with_state(state.clone())
        .layer(from_fn_with_state(state, middleware::rate_limit_middleware))
        .layer(from_fn(middleware::security_headers_middleware))
        .layer(from_fn(middleware::metrics_middleware))
        .layer(middleware::compression())
        .layer(cors)
        .layer(middleware::trace())
        .layer(from_fn(middleware::request_id_middleware))
        .layer(body_limit)
}
