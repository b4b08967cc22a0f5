//! Index response shapes.
//!
//! A single-sheet index answers `{ total, offset, limit, data }`. A
//! multi-sheet index answers `{ ":names": [...], "<sheet>": { total, offset, limit, data } }`.

use serde::Deserialize;
use serde_json::Value;

use super::IndexError;
use crate::models::ContentItem;

/// One page of index rows plus the paging counters the server reported.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct IndexPage {
    #[serde(default)]
    pub total: Option<usize>,
    #[serde(default)]
    pub offset: Option<usize>,
    #[serde(default)]
    pub limit: Option<usize>,
    pub data: Vec<ContentItem>,
}

impl IndexPage {
    /// Whether rows remain after this page, which was requested at
    /// `requested_offset`. The server's own `offset` and `limit` echo is not
    /// trusted for paging.
    pub fn has_more(&self, requested_offset: usize) -> bool {
        let Some(total) = self.total else {
            return false;
        };
        !self.data.is_empty() && requested_offset + self.data.len() < total
    }

    /// Parse a response body, picking `sheet` out of a multi-sheet index.
    /// Without a sheet name the first entry of `:names` is used.
    pub fn from_json(body: &str, sheet: Option<&str>) -> Result<Self, IndexError> {
        let value: Value = serde_json::from_str(body)?;

        if value.get("data").is_some() {
            return Ok(serde_json::from_value(value)?);
        }

        let name = match sheet {
            Some(name) => name.to_string(),
            None => value
                .get(":names")
                .and_then(|names| names.get(0))
                .and_then(Value::as_str)
                .map(str::to_string)
                .ok_or_else(|| IndexError::MissingSheet(":names".to_string()))?,
        };

        let sheet_value = value
            .get(&name)
            .cloned()
            .ok_or(IndexError::MissingSheet(name))?;
        Ok(serde_json::from_value(sheet_value)?)
    }
}
