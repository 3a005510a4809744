//! Local JSON catalog supplier

use crate::error::{Error, Result};
use crate::snapshot::CatalogSnapshot;
use crate::supplier::MetadataSupplier;
use async_trait::async_trait;
use std::path::{Path, PathBuf};
use std::sync::Arc;

/// Reads a catalog JSON file on every call.
///
/// Wrap in [`CachedSupplier`](crate::CachedSupplier) to avoid re-reading the
/// file for each request.
#[derive(Debug, Clone)]
pub struct FileSupplier {
    path: PathBuf,
}

impl FileSupplier {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }
}

#[async_trait]
impl MetadataSupplier for FileSupplier {
    async fn snapshot(&self) -> Result<Arc<CatalogSnapshot>> {
        let bytes = tokio::fs::read(&self.path).await.map_err(|e| {
            if e.kind() == std::io::ErrorKind::NotFound {
                Error::Unavailable(format!("catalog file {} not found", self.path.display()))
            } else {
                Error::Io(e)
            }
        })?;

        let snapshot = CatalogSnapshot::from_json_slice(&bytes)?;
        tracing::debug!(
            path = %self.path.display(),
            records = snapshot.len(),
            "Loaded catalog file"
        );
        Ok(Arc::new(snapshot))
    }
}
