//! Search pipeline and id lookup
//!
//! `search` runs the fixed sequence normalize -> filter -> sort -> paginate over a
//! borrowed snapshot. Nothing here keeps state between calls.

use crate::error::{Error, Result};
use crate::filter::filter;
use crate::paginate::{paginate, SearchResult};
use crate::query::{normalize, RawParams, SearchQuery};
use crate::record::{ExtensionRecord, ExtensionType};
use crate::sort::sort;
use serde::{Deserialize, Serialize};

/// Validate `raw` and run the query against `records`.
///
/// A validation failure is returned before any record is examined.
pub fn search(records: &[ExtensionRecord], raw: &RawParams) -> Result<SearchResult> {
    let query = normalize(raw)?;
    Ok(search_query(records, &query))
}

/// Run an already validated query.
pub fn search_query(records: &[ExtensionRecord], query: &SearchQuery) -> SearchResult {
    let mut matched = filter(records, query);
    sort(&mut matched, query.sort);
    let result = paginate(&matched, query.limit, query.offset);

    tracing::debug!(
        records = records.len(),
        total = result.meta.total,
        returned = result.data.len(),
        sort = %query.sort,
        "Catalog search executed"
    );

    result
}

/// Find the record whose id equals `id`.
pub fn get_by_id<'a>(records: &'a [ExtensionRecord], id: &str) -> Result<&'a ExtensionRecord> {
    records
        .iter()
        .find(|r| r.id == id)
        .ok_or_else(|| Error::NotFound(id.to_string()))
}

/// Number of records of one extension type.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct CategoryCount {
    #[serde(rename = "type")]
    pub extension_type: ExtensionType,
    pub count: usize,
}

/// Record counts for every extension type, in [`ExtensionType::ALL`] order.
/// Types with no records are reported with a zero count.
pub fn category_counts(records: &[ExtensionRecord]) -> Vec<CategoryCount> {
    ExtensionType::ALL
        .iter()
        .map(|&t| CategoryCount {
            extension_type: t,
            count: records.iter().filter(|r| r.extension_type == t).count(),
        })
        .collect()
}
