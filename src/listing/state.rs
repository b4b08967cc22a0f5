//! Per-page filter state and the dropdown state machine.

use serde::{Deserialize, Serialize};

use super::sort::SortDirection;

/// Current value of every filter dimension. Empty means inactive.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct FilterState {
    pub selected_category: Option<String>,
    pub selected_location: Option<String>,
    pub search_term: String,
    pub sort: SortDirection,
}

impl FilterState {
    pub fn select_category(&mut self, value: impl Into<String>) {
        self.selected_category = non_empty(value.into());
    }

    pub fn select_location(&mut self, value: impl Into<String>) {
        self.selected_location = non_empty(value.into());
    }

    pub fn set_search(&mut self, term: impl Into<String>) {
        self.search_term = term.into();
    }

    pub fn clear_search(&mut self) {
        self.search_term.clear();
    }

    /// "View all": every dimension inactive, default order.
    pub fn reset(&mut self) {
        *self = Self::default();
    }

    pub fn is_default(&self) -> bool {
        *self == Self::default()
    }
}

fn non_empty(value: String) -> Option<String> {
    if value.is_empty() {
        None
    } else {
        Some(value)
    }
}

/// Which dropdown is open. At most one at a time.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ActiveDropdown {
    #[default]
    None,
    Category,
    Location,
}

impl ActiveDropdown {
    /// Clicking a dropdown's input toggles it and closes the other one.
    pub fn toggle(self, target: ActiveDropdown) -> ActiveDropdown {
        if self == target {
            ActiveDropdown::None
        } else {
            target
        }
    }

    pub fn is_open(self, which: ActiveDropdown) -> bool {
        which != ActiveDropdown::None && self == which
    }
}
