//! Immutable catalog snapshots

use crate::error::{Error, Result};
use crate::models::{CatalogDocument, CatalogEntry, ExtensionDetails};
use bazaar_catalog::ExtensionRecord;
use chrono::{DateTime, Utc};
use std::collections::{HashMap, HashSet};

/// The record set observed by one query, plus per-id detail fields.
///
/// Never mutated after construction. Suppliers share it behind an `Arc` and
/// replace the whole `Arc` when the source changes.
#[derive(Debug, Clone)]
pub struct CatalogSnapshot {
    records: Vec<ExtensionRecord>,
    details: HashMap<String, ExtensionDetails>,
    loaded_at: DateTime<Utc>,
}

impl CatalogSnapshot {
    /// Snapshot without detail fields. Fails on duplicate ids.
    pub fn new(records: Vec<ExtensionRecord>) -> Result<Self> {
        Self::from_entries(
            records
                .into_iter()
                .map(|record| CatalogEntry {
                    record,
                    details: ExtensionDetails::default(),
                })
                .collect(),
        )
    }

    /// Fails on duplicate ids.
    pub fn from_entries(entries: Vec<CatalogEntry>) -> Result<Self> {
        let mut seen = HashSet::with_capacity(entries.len());
        let mut records = Vec::with_capacity(entries.len());
        let mut details = HashMap::new();

        for entry in entries {
            if !seen.insert(entry.record.id.clone()) {
                return Err(Error::InvalidCatalog(format!(
                    "duplicate extension id '{}'",
                    entry.record.id
                )));
            }
            if !entry.details.is_empty() {
                details.insert(entry.record.id.clone(), entry.details);
            }
            records.push(entry.record);
        }

        Ok(Self {
            records,
            details,
            loaded_at: Utc::now(),
        })
    }

    /// Parse a catalog JSON document.
    pub fn from_json_slice(bytes: &[u8]) -> Result<Self> {
        let document: CatalogDocument = serde_json::from_slice(bytes)?;
        Self::from_entries(document.into_entries())
    }

    pub fn empty() -> Self {
        Self {
            records: Vec::new(),
            details: HashMap::new(),
            loaded_at: Utc::now(),
        }
    }

    pub fn records(&self) -> &[ExtensionRecord] {
        &self.records
    }

    pub fn details(&self, id: &str) -> Option<&ExtensionDetails> {
        self.details.get(id)
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    pub fn loaded_at(&self) -> DateTime<Utc> {
        self.loaded_at
    }
}
