//! Shared application state

use crate::config::Config;
use crate::rate_limit::RateLimiter;
use anyhow::Context;
use bazaar_registry_client::{CachedSupplier, FileSupplier, MetadataSupplier};
use std::sync::Arc;

/// State handed to every request handler.
///
/// Holds no catalog data itself: each request asks the supplier for the
/// current snapshot and runs entirely against that snapshot.
#[derive(Clone)]
pub struct AppState {
    pub config: Arc<Config>,
    pub supplier: Arc<dyn MetadataSupplier>,
    pub rate_limiter: Arc<RateLimiter>,
}

impl AppState {
    /// Build state from configuration, backed by the configured catalog file.
    ///
    /// The catalog is read once here so a missing or malformed file fails startup.
    pub async fn new(config: Config) -> anyhow::Result<Self> {
        let path = config
            .catalog
            .path
            .clone()
            .context("catalog.path is not configured")?;

        let supplier = CachedSupplier::new(
            FileSupplier::new(&path),
            config.catalog.refresh_interval(),
        );

        let snapshot = supplier
            .snapshot()
            .await
            .with_context(|| format!("Failed to load catalog from {}", path.display()))?;
        crate::metrics::CATALOG_RECORDS.set(snapshot.len() as i64);

        tracing::info!(
            path = %path.display(),
            records = snapshot.len(),
            refresh_seconds = config.catalog.refresh_seconds,
            "Catalog loaded"
        );

        Ok(Self::with_supplier(config, Arc::new(supplier)))
    }

    /// Build state around an existing supplier.
    pub fn with_supplier(config: Config, supplier: Arc<dyn MetadataSupplier>) -> Self {
        if config.rate_limit.enabled {
            tracing::info!(
                per_hour = config.rate_limit.requests_per_hour,
                per_day = config.rate_limit.requests_per_day,
                "Rate limiting enabled"
            );
        }

        Self {
            rate_limiter: Arc::new(RateLimiter::new(&config.rate_limit)),
            config: Arc::new(config),
            supplier,
        }
    }
}
