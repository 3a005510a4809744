//! Service metadata handlers: health, root info and category counts

use crate::{state::AppState, Result};
use axum::{extract::State, response::IntoResponse, Json};
use bazaar_catalog::{category_counts, CategoryCount};
use serde::Serialize;
use serde_json::json;

/// Liveness only; does not consult the catalog.
pub async fn health_check() -> impl IntoResponse {
    Json(json!({
        "status": "healthy",
        "timestamp": chrono::Utc::now().to_rfc3339(),
        "version": env!("CARGO_PKG_VERSION"),
    }))
}

pub async fn root(State(state): State<AppState>) -> Result<impl IntoResponse> {
    let snapshot = state.supplier.snapshot().await?;
    Ok(Json(json!({
        "service": state.config.logging.service_name,
        "version": env!("CARGO_PKG_VERSION"),
        "extensions": snapshot.len(),
        "catalogLoadedAt": snapshot.loaded_at().to_rfc3339(),
    })))
}

#[derive(Debug, Serialize)]
pub struct CategoriesResponse {
    pub data: Vec<CategoryCount>,
}

/// `GET /categories`
pub async fn list_categories(State(state): State<AppState>) -> Result<Json<CategoriesResponse>> {
    let snapshot = state.supplier.snapshot().await?;
    Ok(Json(CategoriesResponse {
        data: category_counts(snapshot.records()),
    }))
}
