//! The filter bar above a listing.

use super::view::{a, div, input, li, span, ul, Element};
use crate::listing::{ActiveDropdown, Facets, FilterState};
use crate::models::Section;
use crate::placeholders::Placeholders;

/// Everything the filter bar reflects.
pub struct FilterBar<'a> {
    pub section: Section,
    pub labels: &'a Placeholders,
    pub facets: &'a Facets,
    pub state: &'a FilterState,
    pub dropdown: ActiveDropdown,
    /// Show the most-recent / oldest-first controls.
    pub sort_controls: bool,
    /// Projects map link target.
    pub map_link: &'a str,
}

fn label_key(section: Section, name: &str) -> String {
    match section {
        Section::News => format!("newsLanding{name}Filter"),
        Section::Projects => format!("projectsLanding{name}Filter"),
    }
}

fn separator() -> Element {
    span().class("filter-separator").child(" | ")
}

fn dropdown(class: &str, values: &[String], open: bool) -> Element {
    let mut list = div().class(class).child(ul().children(
        values.iter().map(|value| li().child(value.as_str())),
    ));
    list.set_style("display", if open { "block" } else { "none" });
    list
}

impl FilterBar<'_> {
    fn label(&self, name: &str) -> &str {
        self.labels.get(&label_key(self.section, name))
    }

    fn facet_input(&self, class: &str, id: &str, label: &str, value: Option<&str>) -> Element {
        input()
            .class(class)
            .attr("id", id)
            .attr("placeholder", self.label(label))
            .attr("type", "text")
            .attr("autofill", "no")
            .attr("value", value.unwrap_or(""))
    }

    fn category_section(&self) -> Element {
        div()
            .class("category-section")
            .child(self.facet_input(
                "category-input",
                "filtercategories-selectized",
                "Category",
                self.state.selected_category.as_deref(),
            ))
            .child(dropdown(
                "category-dropdown",
                &self.facets.categories,
                self.dropdown.is_open(ActiveDropdown::Category),
            ))
    }

    fn location_section(&self) -> Element {
        div()
            .class("location-section")
            .child(self.facet_input(
                "location-input",
                "filterlocations-selectized",
                "Location",
                self.state.selected_location.as_deref(),
            ))
            .child(dropdown(
                "location-dropdown",
                &self.facets.locations,
                self.dropdown.is_open(ActiveDropdown::Location),
            ))
    }

    fn view_all(&self) -> Element {
        a().class("view-all")
            .attr("href", "#")
            .attr("id", "view-all")
            .child(self.label("View"))
    }

    fn search_input(&self) -> Element {
        input()
            .class("search-input")
            .attr("id", "filtersearch")
            .attr("placeholder", self.label("Search"))
            .attr("type", "text")
            .attr("minlength", "2")
            .attr("size", "10")
            .attr("value", self.state.search_term.as_str())
    }

    fn search_clear(&self) -> Element {
        a().class("btn-search-clear").attr("href", "#")
    }

    fn left(&self) -> Element {
        let left_class = format!("{}-listing-container-left", self.section);
        match self.section {
            Section::News => div()
                .class(left_class)
                .child(self.category_section())
                .child(separator())
                .child(self.view_all())
                .child(separator())
                .child(div().class("search-section").child(self.search_input()))
                .child(self.search_clear()),
            Section::Projects => div()
                .class(left_class)
                .child(self.category_section())
                .child(separator())
                .child(self.location_section())
                .child(separator())
                .child(self.view_all())
                .child(separator())
                .child(
                    div()
                        .class("search-section")
                        .child(self.search_input())
                        .child(self.search_clear()),
                ),
        }
    }

    fn right(&self) -> Element {
        let mut right = div().class(format!("{}-listing-container-right", self.section));
        if self.sort_controls {
            right = right
                .child(a().class("filter-top-btn").attr("href", "#"))
                .child(a().class("filter-bottom-btn").attr("href", "#"));
        }
        if self.section == Section::Projects {
            right = right.child(
                a().class("map-link-btn")
                    .attr("href", self.map_link)
                    .attr("id", "map-link")
                    .child("See Map"),
            );
        }
        right
    }

    pub fn view(&self) -> Element {
        div()
            .class("filter-container")
            .child(self.left())
            .child(self.right())
    }
}
