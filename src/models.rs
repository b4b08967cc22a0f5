//! Content index records.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Deserializer, Serialize};

/// Which landing page a collection belongs to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Section {
    News,
    Projects,
}

impl Section {
    /// Separator used inside multi-value `category` cells.
    pub fn category_separator(&self) -> char {
        match self {
            Section::News => ',',
            Section::Projects => '|',
        }
    }

    /// Separator used inside multi-value `location` cells.
    pub fn location_separator(&self) -> char {
        '|'
    }

    /// Whether this section exposes a location facet.
    pub fn has_location(&self) -> bool {
        matches!(self, Section::Projects)
    }

    /// File name of the index sheet for this section.
    pub fn index_file(&self) -> &'static str {
        match self {
            Section::News => "news-index.json",
            Section::Projects => "projects-index.json",
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Section::News => "news",
            Section::Projects => "projects",
        }
    }
}

impl fmt::Display for Section {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Section {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "news" => Ok(Section::News),
            "projects" => Ok(Section::Projects),
            other => Err(format!("unknown section: {other}")),
        }
    }
}

/// One row of the content index: a news article or a project page.
///
/// Every cell of the index is a string; cells missing from a row
/// deserialize to the empty string.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ContentItem {
    #[serde(deserialize_with = "null_as_empty")]
    pub path: String,
    #[serde(deserialize_with = "null_as_empty")]
    pub title: String,
    #[serde(deserialize_with = "null_as_empty")]
    pub description: String,
    #[serde(deserialize_with = "null_as_empty")]
    pub image: String,
    /// `dd.mm.yyyy`
    #[serde(deserialize_with = "null_as_empty")]
    pub date: String,
    /// Multi-value: `,` separated for news, `|` for projects.
    #[serde(deserialize_with = "null_as_empty")]
    pub category: String,
    #[serde(deserialize_with = "null_as_empty")]
    pub partner: String,
    /// Multi-value, `|` separated.
    #[serde(deserialize_with = "null_as_empty")]
    pub location: String,
    /// `"<start> → <end>"`
    #[serde(deserialize_with = "null_as_empty")]
    pub duration: String,
    #[serde(rename = "article-color", deserialize_with = "null_as_empty")]
    pub article_color: String,
    #[serde(deserialize_with = "null_as_empty")]
    pub layout: String,
}

/// A `null` cell reads the same as a missing one.
fn null_as_empty<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(Option::<String>::deserialize(deserializer)?.unwrap_or_default())
}

impl ContentItem {
    /// Raw value of a facet field by its index column name.
    pub fn field(&self, name: &str) -> &str {
        match name {
            "path" => &self.path,
            "title" => &self.title,
            "description" => &self.description,
            "image" => &self.image,
            "date" => &self.date,
            "category" => &self.category,
            "partner" => &self.partner,
            "location" => &self.location,
            "duration" => &self.duration,
            "article-color" => &self.article_color,
            "layout" => &self.layout,
            _ => "",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_missing_cells_default_to_empty() {
        let item: ContentItem =
            serde_json::from_value(serde_json::json!({"path": "/en/a", "title": "A"})).unwrap();
        assert_eq!(item.path, "/en/a");
        assert_eq!(item.category, "");
        assert_eq!(item.field("location"), "");
    }

    #[test]
    fn test_null_cells_default_to_empty() {
        let item: ContentItem = serde_json::from_value(serde_json::json!({
            "path": "/en/a",
            "image": null,
            "article-color": null
        }))
        .unwrap();
        assert_eq!(item.path, "/en/a");
        assert_eq!(item.image, "");
        assert_eq!(item.article_color, "");
    }

    #[test]
    fn test_article_color_column_name() {
        let item: ContentItem =
            serde_json::from_value(serde_json::json!({"article-color": "green"})).unwrap();
        assert_eq!(item.article_color, "green");
        assert_eq!(item.field("article-color"), "green");
    }

    #[test]
    fn test_section_parse() {
        assert_eq!("News".parse::<Section>().unwrap(), Section::News);
        assert_eq!("projects".parse::<Section>().unwrap(), Section::Projects);
        assert!("events".parse::<Section>().is_err());
    }
}
