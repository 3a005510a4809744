//! Extension catalog query engine
//!
//! Searches an in-memory set of extension metadata records:
//!
//! - [`normalize()`] turns untyped request parameters into a [`SearchQuery`]
//! - [`filter()`] keeps records matching the query's predicates
//! - [`sort()`] orders them (stable)
//! - [`paginate()`] slices a page and computes [`PageMeta`]
//!
//! [`search()`] composes the four stages. Every function is pure over the record
//! slice it borrows, so concurrent queries against one snapshot need no locking.
//!
//! ```rust
//! use bazaar_catalog::{search, RawParams};
//!
//! let records: Vec<bazaar_catalog::ExtensionRecord> = Vec::new();
//! let page = search(&records, &RawParams::new().with("type", "theme")).unwrap();
//! assert_eq!(page.meta.total, 0);
//! ```

#![forbid(unsafe_code)]

mod error;
mod filter;
mod paginate;
mod query;
mod record;
mod search;
mod sort;

pub use error::{Error, Result};
pub use filter::{filter, matches_term};
pub use paginate::{paginate, PageMeta, SearchResult};
pub use query::{
    normalize, ParamValue, RawParams, SearchQuery, SortKey, DEFAULT_LIMIT, MAX_SEARCH_LEN,
};
pub use record::{Author, ExtensionRecord, ExtensionType, UnknownExtensionType};
pub use search::{category_counts, get_by_id, search, search_query, CategoryCount};
pub use sort::sort;
