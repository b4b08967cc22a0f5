//! Filter predicates over a loaded collection.

use super::sort::sort_items;
use super::state::FilterState;
use crate::models::{ContentItem, Section};

/// Search terms shorter than this do not filter. Counted in characters, so a
/// single emoji is still too short to filter.
pub const MIN_SEARCH_LEN: usize = 2;

/// Raw-field containment. The raw field is the separator-joined cell, so a
/// partial value such as `"Educ"` still matches `"Education, Health"`.
fn contains_value(raw: &str, selected: Option<&str>) -> bool {
    match selected {
        None | Some("") => true,
        Some(value) => !raw.is_empty() && raw.contains(value),
    }
}

fn matches_search(section: Section, item: &ContentItem, needle: &str) -> bool {
    let hit = |field: &str| field.to_lowercase().contains(needle);
    match section {
        Section::News => hit(&item.title),
        Section::Projects => {
            hit(&item.title) || hit(&item.category) || hit(&item.location) || hit(&item.partner)
        }
    }
}

/// Items satisfying every active filter, in collection order.
pub fn apply_filters<'a>(
    section: Section,
    collection: &'a [ContentItem],
    state: &FilterState,
) -> Vec<&'a ContentItem> {
    let needle = state.search_term.to_lowercase();
    let search_active = state.search_term.chars().count() >= MIN_SEARCH_LEN;
    let location = if section.has_location() {
        state.selected_location.as_deref()
    } else {
        None
    };

    collection
        .iter()
        .filter(|item| contains_value(&item.category, state.selected_category.as_deref()))
        .filter(|item| contains_value(&item.location, location))
        .filter(|item| !search_active || matches_search(section, item, &needle))
        .collect()
}

/// Filtered and ordered subset to render.
pub fn visible_items<'a>(
    section: Section,
    collection: &'a [ContentItem],
    state: &FilterState,
) -> Vec<&'a ContentItem> {
    let mut items = apply_filters(section, collection, state);
    sort_items(section, &mut items, state.sort);
    items
}
