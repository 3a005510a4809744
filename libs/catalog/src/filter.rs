//! Predicate filtering over a record set

use crate::query::SearchQuery;
use crate::record::ExtensionRecord;

/// Keep the records that satisfy every active predicate of `query`, in input order.
pub fn filter<'a>(records: &'a [ExtensionRecord], query: &SearchQuery) -> Vec<&'a ExtensionRecord> {
    if !query.has_filters() {
        return records.iter().collect();
    }

    let term = query.search.as_deref().map(str::to_lowercase);

    records
        .iter()
        .filter(|record| matches(record, term.as_deref(), query))
        .collect()
}

/// `term` must already be lowercased.
fn matches(record: &ExtensionRecord, term: Option<&str>, query: &SearchQuery) -> bool {
    if let Some(t) = query.extension_type {
        if record.extension_type != t {
            return false;
        }
    }
    if let Some(sandbox) = query.sandbox {
        if record.sandbox != sandbox {
            return false;
        }
    }
    match term {
        Some(term) => matches_term(record, term),
        None => true,
    }
}

/// Case-insensitive substring match on name, description or any keyword.
pub fn matches_term(record: &ExtensionRecord, term: &str) -> bool {
    let contains = |field: &str| field.to_lowercase().contains(term);

    contains(&record.name)
        || contains(&record.description)
        || record.keywords.iter().any(|k| contains(k))
}
