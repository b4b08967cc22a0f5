//! Distinct facet values for the filter dropdowns.

use std::collections::BTreeSet;

use serde::Serialize;

use crate::models::{ContentItem, Section};

/// Sorted unique values of a multi-value field across a collection.
///
/// Tokens are trimmed and empty tokens dropped; a missing field counts as
/// the empty string.
pub fn extract_facets<'a, I>(items: I, field: &str, separator: char) -> Vec<String>
where
    I: IntoIterator<Item = &'a ContentItem>,
{
    let values: BTreeSet<&str> = items
        .into_iter()
        .flat_map(|item| item.field(field).split(separator))
        .map(str::trim)
        .filter(|token| !token.is_empty())
        .collect();
    values.into_iter().map(str::to_string).collect()
}

/// Dropdown values of one page, computed once after the index loads.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct Facets {
    pub categories: Vec<String>,
    /// Empty for sections without a location filter.
    pub locations: Vec<String>,
}

impl Facets {
    pub fn for_section(section: Section, items: &[ContentItem]) -> Self {
        let categories = extract_facets(items, "category", section.category_separator());
        let locations = if section.has_location() {
            extract_facets(items, "location", section.location_separator())
        } else {
            Vec::new()
        };
        Self {
            categories,
            locations,
        }
    }
}
