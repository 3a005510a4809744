//! Search parameter parsing and validation
//!
//! Turns loosely typed request parameters (query-string text, JSON numbers or
//! booleans) into a typed [`SearchQuery`]. This is the only place parameters are
//! validated; every later stage trusts the query it is given.

use crate::error::{Error, Result};
use crate::record::ExtensionType;
use serde::{Deserialize, Serialize};
use std::borrow::Cow;
use std::collections::BTreeMap;
use std::fmt;
use std::str::FromStr;

/// Page size used when the request does not name one.
pub const DEFAULT_LIMIT: usize = 20;

/// Longest accepted search term, in characters, after trimming.
pub const MAX_SEARCH_LEN: usize = 100;

/// A single untyped parameter value.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(untagged)]
pub enum ParamValue {
    /// JSON `null`; never counts as supplied.
    Null,
    Bool(bool),
    Integer(i64),
    Number(f64),
    Text(String),
}

impl ParamValue {
    /// Text form of the value, exactly as supplied. Non-text values use their display form.
    fn text(&self) -> Cow<'_, str> {
        match self {
            ParamValue::Null => Cow::Borrowed(""),
            ParamValue::Text(s) => Cow::Borrowed(s),
            ParamValue::Bool(b) => Cow::Owned(b.to_string()),
            ParamValue::Integer(i) => Cow::Owned(i.to_string()),
            ParamValue::Number(n) => Cow::Owned(n.to_string()),
        }
    }

    fn is_blank(&self) -> bool {
        match self {
            ParamValue::Null => true,
            ParamValue::Text(s) => s.trim().is_empty(),
            _ => false,
        }
    }
}

impl From<&str> for ParamValue {
    fn from(value: &str) -> Self {
        ParamValue::Text(value.to_string())
    }
}

impl From<String> for ParamValue {
    fn from(value: String) -> Self {
        ParamValue::Text(value)
    }
}

impl From<bool> for ParamValue {
    fn from(value: bool) -> Self {
        ParamValue::Bool(value)
    }
}

impl From<i64> for ParamValue {
    fn from(value: i64) -> Self {
        ParamValue::Integer(value)
    }
}

impl From<i32> for ParamValue {
    fn from(value: i32) -> Self {
        ParamValue::Integer(value.into())
    }
}

impl From<f64> for ParamValue {
    fn from(value: f64) -> Self {
        ParamValue::Number(value)
    }
}

/// Raw request parameters keyed by name. A missing key means "not supplied".
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(transparent)]
pub struct RawParams(BTreeMap<String, ParamValue>);

impl RawParams {
    pub fn new() -> Self {
        Self::default()
    }

    /// Builder-style insert.
    pub fn with(mut self, key: impl Into<String>, value: impl Into<ParamValue>) -> Self {
        self.insert(key, value);
        self
    }

    pub fn insert(&mut self, key: impl Into<String>, value: impl Into<ParamValue>) {
        self.0.insert(key.into(), value.into());
    }

    pub fn get(&self, key: &str) -> Option<&ParamValue> {
        self.0.get(key)
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Build from decoded query-string pairs. When a key repeats, the last value wins.
    pub fn from_pairs<I, K, V>(pairs: I) -> Self
    where
        I: IntoIterator<Item = (K, V)>,
        K: Into<String>,
        V: Into<String>,
    {
        let mut params = Self::new();
        for (k, v) in pairs {
            params.insert(k.into(), ParamValue::Text(v.into()));
        }
        params
    }

    /// A value that counts as supplied: present and not an empty/whitespace-only string.
    fn supplied(&self, key: &str) -> Option<&ParamValue> {
        self.get(key).filter(|v| !v.is_blank())
    }
}

/// Result ordering.
///
/// `Popular` and `Downloads` are synonyms: both rank by download count, highest first.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SortKey {
    #[default]
    Popular,
    Recent,
    Downloads,
}

impl SortKey {
    pub const ALL: [SortKey; 3] = [SortKey::Popular, SortKey::Recent, SortKey::Downloads];

    pub fn as_str(&self) -> &'static str {
        match self {
            SortKey::Popular => "popular",
            SortKey::Recent => "recent",
            SortKey::Downloads => "downloads",
        }
    }
}

impl fmt::Display for SortKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for SortKey {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        SortKey::ALL
            .iter()
            .copied()
            .find(|k| k.as_str() == s)
            .ok_or_else(|| {
                Error::validation(
                    "sort",
                    format!("'{}' is not one of popular, recent, downloads", s),
                )
            })
    }
}

/// A validated search request.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SearchQuery {
    /// Trimmed, never empty.
    pub search: Option<String>,
    pub extension_type: Option<ExtensionType>,
    pub sandbox: Option<bool>,
    pub sort: SortKey,
    /// Always greater than zero.
    pub limit: usize,
    pub offset: usize,
}

impl Default for SearchQuery {
    fn default() -> Self {
        Self {
            search: None,
            extension_type: None,
            sandbox: None,
            sort: SortKey::default(),
            limit: DEFAULT_LIMIT,
            offset: 0,
        }
    }
}

impl SearchQuery {
    /// True when no predicate would exclude a record.
    pub fn has_filters(&self) -> bool {
        self.search.is_some() || self.extension_type.is_some() || self.sandbox.is_some()
    }
}

/// Validate raw parameters and apply defaults.
///
/// Unknown keys are ignored. A parameter whose value is null or an empty or
/// whitespace-only string is treated as absent. Only `search` is trimmed;
/// `type`, `sort` and `sandbox` must match their literals exactly.
pub fn normalize(raw: &RawParams) -> Result<SearchQuery> {
    let search = raw
        .supplied("search")
        .map(|v| parse_search(&v.text()))
        .transpose()?;

    let extension_type = raw
        .supplied("type")
        .map(|v| {
            let name = v.text();
            name.parse::<ExtensionType>().map_err(|_| {
                Error::validation(
                    "type",
                    format!("'{}' is not a known extension type", name),
                )
            })
        })
        .transpose()?;

    let sandbox = raw.supplied("sandbox").map(parse_sandbox).transpose()?;

    let sort = raw
        .supplied("sort")
        .map(|v| v.text().parse::<SortKey>())
        .transpose()?
        .unwrap_or_default();

    let limit = match raw.supplied("limit") {
        Some(v) => match parse_count("limit", v)? {
            0 => return Err(Error::validation("limit", "must be greater than zero")),
            n => n,
        },
        None => DEFAULT_LIMIT,
    };

    let offset = raw
        .supplied("offset")
        .map(|v| parse_count("offset", v))
        .transpose()?
        .unwrap_or(0);

    Ok(SearchQuery {
        search,
        extension_type,
        sandbox,
        sort,
        limit,
        offset,
    })
}

fn parse_search(text: &str) -> Result<String> {
    let term = text.trim();
    if term.chars().count() > MAX_SEARCH_LEN {
        return Err(Error::validation(
            "search",
            format!("must be at most {MAX_SEARCH_LEN} characters"),
        ));
    }
    Ok(term.to_string())
}

fn parse_sandbox(value: &ParamValue) -> Result<bool> {
    match value {
        ParamValue::Bool(b) => Ok(*b),
        ParamValue::Text(s) => match s.as_str() {
            "true" => Ok(true),
            "false" => Ok(false),
            other => Err(Error::validation(
                "sandbox",
                format!("expected 'true' or 'false', got '{}'", other),
            )),
        },
        other => Err(Error::validation(
            "sandbox",
            format!("expected a boolean, got {}", other.text()),
        )),
    }
}

/// Parse a non-negative integer from text, an integer or an integral float.
fn parse_count(param: &str, value: &ParamValue) -> Result<usize> {
    let invalid = || {
        Error::validation(
            param,
            format!("expected a non-negative integer, got '{}'", value.text()),
        )
    };

    match value {
        ParamValue::Text(s) => s.trim().parse::<usize>().map_err(|_| invalid()),
        ParamValue::Integer(i) => usize::try_from(*i).map_err(|_| invalid()),
        ParamValue::Number(n) => {
            if n.is_finite() && n.fract() == 0.0 && *n >= 0.0 && *n <= usize::MAX as f64 {
                Ok(*n as usize)
            } else {
                Err(invalid())
            }
        }
        ParamValue::Bool(_) | ParamValue::Null => Err(invalid()),
    }
}
