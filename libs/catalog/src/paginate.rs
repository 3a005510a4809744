//! Page slicing and result metadata

use crate::record::ExtensionRecord;
use serde::{Deserialize, Serialize};

/// Paging metadata for a [`SearchResult`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PageMeta {
    /// Matches before pagination.
    pub total: usize,
    pub limit: usize,
    pub offset: usize,
    pub has_next: bool,
}

/// One page of matching records.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SearchResult {
    pub data: Vec<ExtensionRecord>,
    pub meta: PageMeta,
}

/// Slice `records[offset..offset + limit]`, clamped to the available records.
///
/// `records` must already be filtered and ordered; this only counts and slices.
pub fn paginate(records: &[&ExtensionRecord], limit: usize, offset: usize) -> SearchResult {
    let total = records.len();
    let start = offset.min(total);
    let end = start.saturating_add(limit).min(total);

    SearchResult {
        data: records[start..end].iter().map(|r| (*r).clone()).collect(),
        meta: PageMeta {
            total,
            limit,
            offset,
            has_next: offset.saturating_add(limit) < total,
        },
    }
}
