//! Catalog search handler
//!
//! `GET /search?search=&type=&sort=popular&limit=20&offset=0&sandbox=`

use crate::{metrics, state::AppState, Error, Result};
use axum::{
    extract::{rejection::QueryRejection, Query, State},
    Json,
};
use bazaar_catalog::{normalize, search_query, RawParams, SearchResult};

/// Search the catalog.
///
/// Parameters are validated before the supplier is consulted, so a malformed
/// request never touches the catalog source.
pub async fn search_extensions(
    State(state): State<AppState>,
    query: std::result::Result<Query<Vec<(String, String)>>, QueryRejection>,
) -> Result<Json<SearchResult>> {
    let Query(pairs) = query.map_err(|e| Error::BadRequest(e.body_text()))?;
    let raw = RawParams::from_pairs(pairs);

    let query = normalize(&raw).map_err(|e| {
        metrics::SEARCH_TOTAL.with_label_values(&["invalid"]).inc();
        tracing::debug!(error = %e, "Rejected search parameters");
        e
    })?;

    let snapshot = state.supplier.snapshot().await.map_err(|e| {
        metrics::SEARCH_TOTAL.with_label_values(&["unavailable"]).inc();
        e
    })?;
    metrics::CATALOG_RECORDS.set(snapshot.len() as i64);

    let result = search_query(snapshot.records(), &query);

    metrics::SEARCH_TOTAL.with_label_values(&["success"]).inc();
    metrics::SEARCH_MATCHES.observe(result.meta.total as f64);
    tracing::info!(
        search = query.search.as_deref().unwrap_or(""),
        extension_type = query.extension_type.map(|t| t.as_str()).unwrap_or(""),
        sandbox = ?query.sandbox,
        sort = %query.sort,
        limit = query.limit,
        offset = query.offset,
        total = result.meta.total,
        "Catalog search completed"
    );

    Ok(Json(result))
}
