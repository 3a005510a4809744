//! Time-based snapshot caching

use crate::error::Result;
use crate::snapshot::CatalogSnapshot;
use crate::supplier::MetadataSupplier;
use async_trait::async_trait;
use std::sync::Arc;
use std::time::{Duration, Instant};
use tokio::sync::{Mutex, RwLock};

#[derive(Debug)]
struct Cached {
    snapshot: Arc<CatalogSnapshot>,
    /// `None` once invalidated.
    fetched_at: Option<Instant>,
}

/// Caches another supplier's snapshot for a fixed time-to-live.
///
/// Refreshes are serialized so a burst of requests on an expired entry
/// triggers a single fetch. When a refresh fails and an earlier snapshot
/// exists, the earlier snapshot keeps being served for another TTL and the
/// failure is logged.
pub struct CachedSupplier<S> {
    inner: S,
    ttl: Duration,
    cached: RwLock<Option<Cached>>,
    refresh: Mutex<()>,
}

impl<S: MetadataSupplier> CachedSupplier<S> {
    pub fn new(inner: S, ttl: Duration) -> Self {
        Self {
            inner,
            ttl,
            cached: RwLock::new(None),
            refresh: Mutex::new(()),
        }
    }

    /// Force the next call to fetch from the inner supplier.
    pub async fn invalidate(&self) {
        if let Some(cached) = self.cached.write().await.as_mut() {
            cached.fetched_at = None;
        }
    }

    async fn fresh(&self) -> Option<Arc<CatalogSnapshot>> {
        let cached = self.cached.read().await;
        cached.as_ref().and_then(|c| {
            let fetched_at = c.fetched_at?;
            (fetched_at.elapsed() < self.ttl).then(|| Arc::clone(&c.snapshot))
        })
    }
}

#[async_trait]
impl<S: MetadataSupplier> MetadataSupplier for CachedSupplier<S> {
    async fn snapshot(&self) -> Result<Arc<CatalogSnapshot>> {
        if let Some(snapshot) = self.fresh().await {
            return Ok(snapshot);
        }

        let _guard = self.refresh.lock().await;
        // Another caller may have refreshed while we waited.
        if let Some(snapshot) = self.fresh().await {
            return Ok(snapshot);
        }

        match self.inner.snapshot().await {
            Ok(snapshot) => {
                tracing::info!(records = snapshot.len(), "Catalog snapshot refreshed");
                *self.cached.write().await = Some(Cached {
                    snapshot: Arc::clone(&snapshot),
                    fetched_at: Some(Instant::now()),
                });
                Ok(snapshot)
            }
            Err(e) => {
                let mut cached = self.cached.write().await;
                match cached.as_mut() {
                    Some(stale) => {
                        // Retry no sooner than one TTL from now.
                        stale.fetched_at = Some(Instant::now());
                        tracing::warn!(
                            error = %e,
                            records = stale.snapshot.len(),
                            retry_in_secs = self.ttl.as_secs(),
                            "Catalog refresh failed, serving previous snapshot"
                        );
                        Ok(Arc::clone(&stale.snapshot))
                    }
                    None => Err(e),
                }
            }
        }
    }
}
