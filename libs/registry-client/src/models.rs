//! Catalog data models

use bazaar_catalog::ExtensionRecord;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// Extended information shown on an extension's detail page.
///
/// Not searched; supplied alongside the record by the catalog source.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ExtensionDetails {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub readme: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub changelog: Option<String>,
    /// Package name to version requirement.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub dependencies: Option<BTreeMap<String, String>>,
    /// Screenshot URLs.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub screenshots: Option<Vec<String>>,
}

impl ExtensionDetails {
    pub fn is_empty(&self) -> bool {
        self == &Self::default()
    }
}

/// One entry of a catalog file: the searchable record plus its detail fields.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CatalogEntry {
    #[serde(flatten)]
    pub record: ExtensionRecord,
    #[serde(flatten)]
    pub details: ExtensionDetails,
}

/// Accepted catalog file layouts: a bare array or `{ "extensions": [...] }`.
#[derive(Debug, Clone, Deserialize)]
#[serde(untagged)]
pub(crate) enum CatalogDocument {
    List(Vec<CatalogEntry>),
    Wrapped { extensions: Vec<CatalogEntry> },
}

impl CatalogDocument {
    pub(crate) fn into_entries(self) -> Vec<CatalogEntry> {
        match self {
            CatalogDocument::List(entries) => entries,
            CatalogDocument::Wrapped { extensions } => extensions,
        }
    }
}
