//! Service info, liveness and Prometheus scrape routes

use crate::api::handlers;
use crate::state::AppState;
use axum::{http::StatusCode, routing::get, Router};

pub fn ops_routes() -> Router<AppState> {
    Router::new()
        .route("/", get(handlers::root))
        .route("/health", get(handlers::health_check))
        .route("/metrics", get(handlers::metrics_handler))
        .route("/favicon.ico", get(|| async { StatusCode::NO_CONTENT }))
}
