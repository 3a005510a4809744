//! Shared fixtures for catalog integration tests

#![allow(dead_code)]

use bazaar_catalog::{Author, ExtensionRecord, ExtensionType};
use chrono::{DateTime, Utc};

fn at(ts: &str) -> DateTime<Utc> {
    DateTime::parse_from_rfc3339(ts)
        .expect("valid fixture timestamp")
        .with_timezone(&Utc)
}

#[allow(clippy::too_many_arguments)]
fn record(
    id: &str,
    name: &str,
    extension_type: ExtensionType,
    description: &str,
    author: (&str, &str),
    version: &str,
    downloads: u64,
    last_updated: &str,
    sandbox: bool,
    license: &str,
    keywords: &[&str],
) -> ExtensionRecord {
    ExtensionRecord {
        id: id.to_string(),
        name: name.to_string(),
        description: description.to_string(),
        extension_type,
        author: Author {
            name: author.0.to_string(),
            email: author.1.to_string(),
        },
        version: version.to_string(),
        downloads,
        last_updated: at(last_updated),
        sandbox,
        license: license.to_string(),
        repository: None,
        keywords: keywords.iter().map(|k| k.to_string()).collect(),
    }
}

/// The five sample extensions used throughout the scenarios.
pub fn sample_records() -> Vec<ExtensionRecord> {
    vec![
        record(
            "directus-extension-computed-interface",
            "Computed Interface",
            ExtensionType::Interface,
            "Automatically calculate field values based on other fields with support for templating and arithmetic operations.",
            ("rezo-zero", "dev@rezo-zero.com"),
            "1.2.0",
            12543,
            "2024-12-15T10:30:00Z",
            true,
            "MIT",
            &["directus-extension", "interface", "computed"],
        ),
        record(
            "directus-extension-simple-currency",
            "Simple Currency Field",
            ExtensionType::Interface,
            "A simple and efficient way to handle currency fields with multiple locale support.",
            ("joggienl", "joggie@example.com"),
            "1.0.4",
            8234,
            "2024-12-10T08:15:00Z",
            true,
            "MIT",
            &["directus-extension", "interface", "currency"],
        ),
        record(
            "directus-extension-gantt-layout",
            "Gantt Chart Layout",
            ExtensionType::Layout,
            "Display your data as a Gantt chart for project management and timeline visualization.",
            ("directus-community", "community@directus.io"),
            "2.1.0",
            15678,
            "2024-12-12T14:20:00Z",
            false,
            "MIT",
            &["directus-extension", "layout", "gantt", "project-management"],
        ),
        record(
            "directus-extension-pdf-viewer",
            "PDF Viewer Display",
            ExtensionType::Display,
            "View PDF files directly in the Data Studio without downloading them.",
            ("community-dev", "dev@community.com"),
            "1.3.2",
            9876,
            "2024-12-08T16:45:00Z",
            true,
            "Apache-2.0",
            &["directus-extension", "display", "pdf", "viewer"],
        ),
        record(
            "directus-extension-dark-theme",
            "Professional Dark Theme",
            ExtensionType::Theme,
            "A sleek dark theme for the Directus Data Studio with customizable accent colors.",
            ("theme-studio", "themes@studio.com"),
            "2.0.1",
            23456,
            "2024-12-14T11:30:00Z",
            false,
            "MIT",
            &["directus-extension", "theme", "dark", "ui"],
        ),
    ]
}

pub fn ids(records: &[ExtensionRecord]) -> Vec<&str> {
    records.iter().map(|r| r.id.as_str()).collect()
}
