//! Extension metadata records
//!
//! An [`ExtensionRecord`] is the unit being searched. Records are plain values:
//! the query stages borrow them and never modify them.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Kind of extension, as published in the registry.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ExtensionType {
    Interface,
    Display,
    Layout,
    Module,
    Panel,
    Theme,
    Hook,
    Endpoint,
    Operation,
}

impl ExtensionType {
    /// Every extension type, in registry order.
    pub const ALL: [ExtensionType; 9] = [
        ExtensionType::Interface,
        ExtensionType::Display,
        ExtensionType::Layout,
        ExtensionType::Module,
        ExtensionType::Panel,
        ExtensionType::Theme,
        ExtensionType::Hook,
        ExtensionType::Endpoint,
        ExtensionType::Operation,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            ExtensionType::Interface => "interface",
            ExtensionType::Display => "display",
            ExtensionType::Layout => "layout",
            ExtensionType::Module => "module",
            ExtensionType::Panel => "panel",
            ExtensionType::Theme => "theme",
            ExtensionType::Hook => "hook",
            ExtensionType::Endpoint => "endpoint",
            ExtensionType::Operation => "operation",
        }
    }
}

impl fmt::Display for ExtensionType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Error returned when a string names no known extension type.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UnknownExtensionType(pub String);

impl fmt::Display for UnknownExtensionType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "unknown extension type '{}'", self.0)
    }
}

impl std::error::Error for UnknownExtensionType {}

impl FromStr for ExtensionType {
    type Err = UnknownExtensionType;

    /// Exact, case-sensitive match against the lowercase type names.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        ExtensionType::ALL
            .iter()
            .copied()
            .find(|t| t.as_str() == s)
            .ok_or_else(|| UnknownExtensionType(s.to_string()))
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Author {
    pub name: String,
    pub email: String,
}

/// A catalog entry describing an installable extension.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ExtensionRecord {
    /// Unique within any record set handed to a single query.
    pub id: String,
    pub name: String,
    pub description: String,
    #[serde(rename = "type")]
    pub extension_type: ExtensionType,
    pub author: Author,
    /// Semantic version string; never interpreted here.
    pub version: String,
    pub downloads: u64,
    pub last_updated: DateTime<Utc>,
    pub sandbox: bool,
    pub license: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub repository: Option<String>,
    #[serde(default)]
    pub keywords: Vec<String>,
}
