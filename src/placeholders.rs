//! Localized UI labels.
//!
//! Labels come from the site's placeholder sheet, one row per key with a
//! `Key` and a `Text` column. The sheet is fetched by the page bootstrap;
//! this module only turns its rows into a lookup that is handed to the
//! listing page when it is built.

use std::collections::HashMap;
use std::path::Path;
use std::sync::LazyLock;

use regex::Regex;
use serde::Deserialize;
use serde_json::Value;
use thiserror::Error;

use crate::site::Language;

static NON_ALNUM: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"[^0-9a-z]+").unwrap());

#[derive(Debug, Error)]
pub enum PlaceholderError {
    #[error("failed to read placeholders: {0}")]
    Io(#[from] std::io::Error),
    #[error("malformed placeholder sheet: {0}")]
    Json(#[from] serde_json::Error),
}

/// `"News Landing Category Filter"` -> `"newsLandingCategoryFilter"`.
pub fn to_camel_case(name: &str) -> String {
    let lowered = name.to_lowercase();
    let dashed = NON_ALNUM.replace_all(&lowered, "-");
    let mut out = String::with_capacity(dashed.len());
    let mut upper_next = false;
    for c in dashed.trim_matches('-').chars() {
        if c == '-' {
            upper_next = true;
        } else if upper_next {
            // only a dash before a letter is folded
            if c.is_ascii_lowercase() {
                out.push(c.to_ascii_uppercase());
            } else {
                out.push('-');
                out.push(c);
            }
            upper_next = false;
        } else {
            out.push(c);
        }
    }
    out
}

#[derive(Debug, Deserialize)]
struct SheetRow {
    #[serde(rename = "Key", default)]
    key: String,
    #[serde(rename = "Text", default)]
    text: String,
}

/// Label lookup for one language.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Placeholders {
    labels: HashMap<String, String>,
}

impl Placeholders {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with(mut self, key: &str, text: &str) -> Self {
        self.labels.insert(key.to_string(), text.to_string());
        self
    }

    /// Build from sheet rows; keys are camel-cased and rows without a key skipped.
    pub fn from_rows(rows: &[Value]) -> Result<Self, PlaceholderError> {
        let mut labels = HashMap::new();
        for row in rows {
            let row: SheetRow = serde_json::from_value(row.clone())?;
            if !row.key.is_empty() {
                labels.insert(to_camel_case(&row.key), row.text);
            }
        }
        Ok(Self { labels })
    }

    /// Parse a placeholders response. Multi-sheet responses are read from the
    /// sheet named after `language`; single-sheet responses from `data`.
    pub fn from_json(body: &str, language: Language) -> Result<Self, PlaceholderError> {
        let value: Value = serde_json::from_str(body)?;
        let rows = value
            .get(language.code())
            .and_then(|sheet| sheet.get("data"))
            .or_else(|| value.get("data"))
            .and_then(Value::as_array);
        match rows {
            Some(rows) => Self::from_rows(rows),
            None => Ok(Self::default()),
        }
    }

    pub fn load_file(path: &Path, language: Language) -> Result<Self, PlaceholderError> {
        let body = std::fs::read_to_string(path)?;
        Self::from_json(&body, language)
    }

    /// Label for `key`, empty when the sheet has none.
    pub fn get(&self, key: &str) -> &str {
        self.labels.get(key).map(String::as_str).unwrap_or("")
    }

    pub fn len(&self) -> usize {
        self.labels.len()
    }

    pub fn is_empty(&self) -> bool {
        self.labels.is_empty()
    }
}
