//! Catalog API routes

use crate::api::handlers;
use crate::state::AppState;
use axum::{routing::get, Router};

pub fn catalog_routes() -> Router<AppState> {
    Router::new()
        .route("/search", get(handlers::search_extensions))
        .route("/extension/:id", get(handlers::get_extension))
        .route("/categories", get(handlers::list_categories))
}
