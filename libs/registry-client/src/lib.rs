//! Extension metadata suppliers
//!
//! The query engine in `bazaar-catalog` is pure; this crate is where catalog data
//! comes from. A [`MetadataSupplier`] hands out an immutable [`CatalogSnapshot`]
//! per call, so concurrent queries never observe a half-updated record set.
//!
//! # Examples
//!
//! ```rust,no_run
//! use bazaar_registry_client::{CachedSupplier, FileSupplier, MetadataSupplier};
//! use std::time::Duration;
//!
//! # async fn example() -> Result<(), Box<dyn std::error::Error>> {
//! let supplier = CachedSupplier::new(FileSupplier::new("catalog.json"), Duration::from_secs(300));
//! let snapshot = supplier.snapshot().await?;
//! println!("{} extensions", snapshot.len());
//! # Ok(())
//! # }
//! ```

pub mod cache;
pub mod error;
pub mod file;
pub mod models;
pub mod snapshot;
pub mod supplier;

pub use cache::CachedSupplier;
pub use error::{Error, Result};
pub use file::FileSupplier;
pub use models::{CatalogEntry, ExtensionDetails};
pub use snapshot::CatalogSnapshot;
pub use supplier::{MetadataSupplier, StaticSupplier};
