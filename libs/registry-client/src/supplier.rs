//! Metadata supplier abstraction

use crate::error::Result;
use crate::snapshot::CatalogSnapshot;
use async_trait::async_trait;
use std::sync::Arc;

/// Source of extension catalog snapshots.
///
/// Each call returns a self-consistent snapshot; callers run a whole query
/// against the snapshot they received even if the source changes meanwhile.
#[async_trait]
pub trait MetadataSupplier: Send + Sync {
    async fn snapshot(&self) -> Result<Arc<CatalogSnapshot>>;
}

#[async_trait]
impl<S: MetadataSupplier + ?Sized> MetadataSupplier for Arc<S> {
    async fn snapshot(&self) -> Result<Arc<CatalogSnapshot>> {
        (**self).snapshot().await
    }
}

/// Supplier that always returns the same snapshot.
#[derive(Debug, Clone)]
pub struct StaticSupplier {
    snapshot: Arc<CatalogSnapshot>,
}

impl StaticSupplier {
    pub fn new(snapshot: CatalogSnapshot) -> Self {
        Self {
            snapshot: Arc::new(snapshot),
        }
    }
}

#[async_trait]
impl MetadataSupplier for StaticSupplier {
    async fn snapshot(&self) -> Result<Arc<CatalogSnapshot>> {
        Ok(Arc::clone(&self.snapshot))
    }
}
