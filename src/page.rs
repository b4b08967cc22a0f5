//! A landing page instance: loaded collection, filter state and view.
//!
//! Every user interaction is a [`PageEvent`] handled by
//! [`ListingPage::dispatch`], which updates the filter state and the
//! dropdown state machine and re-renders the listing from the full
//! collection.

use std::sync::Arc;
use std::time::Duration;

use tokio::time::Instant;
use tracing::debug;

use crate::listing::{
    visible_items, ActiveDropdown, Debouncer, Facets, FilterState, SortDirection, SEARCH_DEBOUNCE,
};
use crate::models::{ContentItem, Section};
use crate::placeholders::Placeholders;
use crate::render::view::{div, Element};
use crate::render::{FilterBar, Listing};

/// Where a click landed.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ClickTarget {
    CategoryInput,
    LocationInput,
    CategoryOption(String),
    LocationOption(String),
    /// Inside an open dropdown but not on an option.
    DropdownBody,
    ViewAll,
    SearchClear,
    /// Most recent first.
    SortNewest,
    SortOldest,
    /// Anywhere else on the page, the search input included.
    Outside,
}

#[derive(Debug, Clone, PartialEq)]
pub enum PageEvent {
    Click(ClickTarget),
    /// Search term after the input went idle.
    Search(String),
    /// Raw keystroke in the search input. Applied by [`ListingPage::tick`]
    /// once the input has been idle for the debounce period.
    SearchInput { term: String, now: Instant },
    /// Intersection observation for the card at `index`.
    Intersect {
        index: usize,
        ratio: f64,
        scroll_y: f64,
    },
}

/// Per-page options that are not filter state.
#[derive(Debug, Clone)]
pub struct PageOptions {
    /// Expose the newest/oldest sort controls.
    pub sort_controls: bool,
    pub map_link: String,
    /// Idle time before typed search input re-filters.
    pub search_debounce: Duration,
}

impl PageOptions {
    pub fn for_section(section: Section) -> Self {
        Self {
            sort_controls: section == Section::News,
            map_link: String::new(),
            search_debounce: SEARCH_DEBOUNCE,
        }
    }
}

pub struct ListingPage {
    section: Section,
    items: Arc<[ContentItem]>,
    facets: Facets,
    labels: Placeholders,
    options: PageOptions,
    state: FilterState,
    dropdown: ActiveDropdown,
    listing: Listing,
    search_input: Debouncer<String>,
}

impl ListingPage {
    /// Build the page and render the full collection in default order.
    pub fn new(
        section: Section,
        items: impl Into<Arc<[ContentItem]>>,
        labels: Placeholders,
        options: PageOptions,
    ) -> Self {
        let items = items.into();
        let facets = Facets::for_section(section, &items);
        let search_input = Debouncer::new(options.search_debounce);
        let mut page = Self {
            section,
            items,
            facets,
            labels,
            options,
            state: FilterState::default(),
            dropdown: ActiveDropdown::None,
            listing: Listing::new(section),
            search_input,
        };
        page.refresh();
        page
    }

    pub fn section(&self) -> Section {
        self.section
    }

    pub fn items(&self) -> &[ContentItem] {
        &self.items
    }

    pub fn facets(&self) -> &Facets {
        &self.facets
    }

    pub fn state(&self) -> &FilterState {
        &self.state
    }

    pub fn dropdown(&self) -> ActiveDropdown {
        self.dropdown
    }

    pub fn listing(&self) -> &Listing {
        &self.listing
    }

    /// Items currently shown, in display order.
    pub fn visible(&self) -> Vec<&ContentItem> {
        visible_items(self.section, &self.items, &self.state)
    }

    /// Apply a whole filter state at once, e.g. from a query string.
    pub fn apply_state(&mut self, mut state: FilterState) {
        if !self.section.has_location() {
            state.selected_location = None;
        }
        if !self.options.sort_controls {
            state.sort = SortDirection::default();
        }
        self.state = state;
        self.dropdown = ActiveDropdown::None;
        self.refresh();
    }

    /// Handle one event. Returns whether the listing was re-rendered.
    pub fn dispatch(&mut self, event: PageEvent) -> bool {
        match event {
            PageEvent::Click(target) => self.click(target),
            PageEvent::Search(term) => {
                self.search_input.cancel();
                self.state.set_search(term);
                self.refresh();
                true
            }
            PageEvent::SearchInput { term, now } => {
                self.search_input.push(term, now);
                false
            }
            PageEvent::Intersect {
                index,
                ratio,
                scroll_y,
            } => {
                self.listing.observe(index, ratio, scroll_y);
                false
            }
        }
    }

    /// Apply typed search input whose idle period has elapsed by `now`.
    /// Returns whether the listing was re-rendered.
    pub fn tick(&mut self, now: Instant) -> bool {
        let Some(term) = self.search_input.poll(now) else {
            return false;
        };
        self.state.set_search(term);
        self.refresh();
        true
    }

    /// When pending search input becomes due, if any.
    pub fn search_deadline(&self) -> Option<Instant> {
        self.search_input.deadline()
    }

    fn click(&mut self, target: ClickTarget) -> bool {
        let has_location = self.section.has_location();
        match target {
            ClickTarget::CategoryInput => {
                self.dropdown = self.dropdown.toggle(ActiveDropdown::Category);
                false
            }
            ClickTarget::LocationInput if has_location => {
                self.dropdown = self.dropdown.toggle(ActiveDropdown::Location);
                false
            }
            ClickTarget::DropdownBody if self.dropdown != ActiveDropdown::None => false,
            ClickTarget::CategoryOption(value) => {
                self.dropdown = ActiveDropdown::None;
                self.state.select_category(value);
                self.refresh();
                true
            }
            ClickTarget::LocationOption(value) if has_location => {
                self.dropdown = ActiveDropdown::None;
                self.state.select_location(value);
                self.refresh();
                true
            }
            ClickTarget::ViewAll => {
                self.dropdown = ActiveDropdown::None;
                self.state.reset();
                self.search_input.cancel();
                self.refresh();
                true
            }
            ClickTarget::SearchClear => {
                self.dropdown = ActiveDropdown::None;
                self.state.clear_search();
                self.search_input.cancel();
                self.refresh();
                true
            }
            ClickTarget::SortNewest if self.options.sort_controls => {
                self.sort_by(SortDirection::Descending)
            }
            ClickTarget::SortOldest if self.options.sort_controls => {
                self.sort_by(SortDirection::Ascending)
            }
            _ => {
                self.dropdown = ActiveDropdown::None;
                false
            }
        }
    }

    fn sort_by(&mut self, direction: SortDirection) -> bool {
        self.dropdown = ActiveDropdown::None;
        self.state.sort = direction;
        self.refresh();
        true
    }

    fn refresh(&mut self) {
        let visible = visible_items(self.section, &self.items, &self.state);
        debug!(
            "Rendering {} of {} {} items",
            visible.len(),
            self.items.len(),
            self.section
        );
        self.listing.render(visible);
    }

    pub fn filter_bar(&self) -> Element {
        FilterBar {
            section: self.section,
            labels: &self.labels,
            facets: &self.facets,
            state: &self.state,
            dropdown: self.dropdown,
            sort_controls: self.options.sort_controls,
            map_link: &self.options.map_link,
        }
        .view()
    }

    /// Filter bar followed by the listing container.
    pub fn view(&self) -> Element {
        div()
            .class(format!("{}-landing", self.section))
            .child(self.filter_bar())
            .child(self.listing.view())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn news(path: &str, category: &str, date: &str, title: &str) -> ContentItem {
        ContentItem {
            path: path.to_string(),
            category: category.to_string(),
            date: date.to_string(),
            title: title.to_string(),
            ..Default::default()
        }
    }

    fn project(path: &str, category: &str, location: &str, duration: &str) -> ContentItem {
        ContentItem {
            path: path.to_string(),
            title: path.to_string(),
            category: category.to_string(),
            location: location.to_string(),
            duration: duration.to_string(),
            ..Default::default()
        }
    }

    fn news_page() -> ListingPage {
        let items = vec![
            news("/a", "Forests, Climate", "01.01.2024", "Tree planting"),
            news("/b", "Education", "15.06.2023", "School garden"),
            news("/c", "Climate", "20.03.2025", "Heat report"),
        ];
        ListingPage::new(
            Section::News,
            items,
            Placeholders::new(),
            PageOptions::for_section(Section::News),
        )
    }

    fn projects_page() -> ListingPage {
        let items = vec![
            project("/p1", "Forests|Water", "Peru|Chile", "2018 → 2021"),
            project("/p2", "Water", "Kenya", "2019 → 2022"),
            project("/p3", "Forests", "Kenya", "2019 →2024"),
        ];
        ListingPage::new(
            Section::Projects,
            items,
            Placeholders::new(),
            PageOptions::for_section(Section::Projects),
        )
    }

    #[test]
    fn test_initial_render_is_default_order() {
        let page = news_page();
        assert_eq!(page.listing().paths(), vec!["/c", "/a", "/b"]);
        assert_eq!(page.facets().categories, vec!["Climate", "Education", "Forests"]);
    }

    #[test]
    fn test_only_one_dropdown_open() {
        let mut page = projects_page();
        page.dispatch(PageEvent::Click(ClickTarget::CategoryInput));
        assert_eq!(page.dropdown(), ActiveDropdown::Category);
        page.dispatch(PageEvent::Click(ClickTarget::LocationInput));
        assert_eq!(page.dropdown(), ActiveDropdown::Location);
        page.dispatch(PageEvent::Click(ClickTarget::LocationInput));
        assert_eq!(page.dropdown(), ActiveDropdown::None);
    }

    #[test]
    fn test_outside_click_closes_without_touching_state() {
        let mut page = projects_page();
        page.dispatch(PageEvent::Click(ClickTarget::LocationOption("Kenya".into())));
        page.dispatch(PageEvent::Click(ClickTarget::CategoryInput));
        let before = page.state().clone();
        let rendered = page.dispatch(PageEvent::Click(ClickTarget::Outside));
        assert!(!rendered);
        assert_eq!(page.dropdown(), ActiveDropdown::None);
        assert_eq!(page.state(), &before);
    }

    #[test]
    fn test_dropdown_body_click_keeps_it_open() {
        let mut page = news_page();
        page.dispatch(PageEvent::Click(ClickTarget::CategoryInput));
        page.dispatch(PageEvent::Click(ClickTarget::DropdownBody));
        assert_eq!(page.dropdown(), ActiveDropdown::Category);
    }

    #[test]
    fn test_selection_closes_dropdown_and_composes() {
        let mut page = projects_page();
        page.dispatch(PageEvent::Click(ClickTarget::CategoryInput));
        assert!(page.dispatch(PageEvent::Click(ClickTarget::CategoryOption(
            "Forests".into()
        ))));
        assert_eq!(page.dropdown(), ActiveDropdown::None);
        assert_eq!(page.listing().paths(), vec!["/p3", "/p1"]);

        page.dispatch(PageEvent::Click(ClickTarget::LocationOption("Kenya".into())));
        assert_eq!(page.listing().paths(), vec!["/p3"]);
    }

    #[test]
    fn test_search_is_additive_and_clearable() {
        let mut page = news_page();
        page.dispatch(PageEvent::Click(ClickTarget::CategoryOption("Climate".into())));
        assert_eq!(page.listing().paths(), vec!["/c", "/a"]);

        page.dispatch(PageEvent::Search("tree".into()));
        assert_eq!(page.listing().paths(), vec!["/a"]);

        page.dispatch(PageEvent::Search("t".into()));
        assert_eq!(page.listing().paths(), vec!["/c", "/a"]);

        page.dispatch(PageEvent::Search("heat".into()));
        page.dispatch(PageEvent::Click(ClickTarget::SearchClear));
        assert_eq!(page.state().search_term, "");
        assert_eq!(page.state().selected_category.as_deref(), Some("Climate"));
        assert_eq!(page.listing().paths(), vec!["/c", "/a"]);
    }

    #[tokio::test(start_paused = true)]
    async fn test_typed_search_waits_for_idle_input() {
        let mut page = news_page();
        let period = SEARCH_DEBOUNCE;

        for term in ["t", "tr", "tre"] {
            let rendered = page.dispatch(PageEvent::SearchInput {
                term: term.to_string(),
                now: Instant::now(),
            });
            assert!(!rendered);
            tokio::time::advance(Duration::from_millis(100)).await;
            assert!(!page.tick(Instant::now()));
        }
        assert_eq!(page.listing().paths(), vec!["/c", "/a", "/b"]);

        tokio::time::advance(period - Duration::from_millis(150)).await;
        assert!(!page.tick(Instant::now()));
        tokio::time::advance(Duration::from_millis(50)).await;
        assert!(page.tick(Instant::now()));
        assert_eq!(page.state().search_term, "tre");
        assert_eq!(page.listing().paths(), vec!["/a"]);

        assert!(page.search_deadline().is_none());
        assert!(!page.tick(Instant::now()));
    }

    #[tokio::test(start_paused = true)]
    async fn test_clear_search_drops_pending_input() {
        let mut page = news_page();
        page.dispatch(PageEvent::SearchInput {
            term: "heat".to_string(),
            now: Instant::now(),
        });
        page.dispatch(PageEvent::Click(ClickTarget::SearchClear));
        tokio::time::advance(SEARCH_DEBOUNCE).await;
        assert!(!page.tick(Instant::now()));
        assert_eq!(page.listing().len(), 3);
    }

    #[test]
    fn test_view_all_restores_everything() {
        let mut page = news_page();
        page.dispatch(PageEvent::Click(ClickTarget::SortOldest));
        page.dispatch(PageEvent::Click(ClickTarget::CategoryOption("Education".into())));
        page.dispatch(PageEvent::Search("school".into()));
        page.dispatch(PageEvent::Click(ClickTarget::ViewAll));
        assert!(page.state().is_default());
        assert_eq!(page.listing().paths(), vec!["/c", "/a", "/b"]);
    }

    #[test]
    fn test_sort_controls() {
        let mut page = news_page();
        page.dispatch(PageEvent::Click(ClickTarget::SortOldest));
        assert_eq!(page.listing().paths(), vec!["/b", "/a", "/c"]);
        page.dispatch(PageEvent::Click(ClickTarget::SortNewest));
        assert_eq!(page.listing().paths(), vec!["/c", "/a", "/b"]);
    }

    #[test]
    fn test_projects_sort_is_gated() {
        let mut page = projects_page();
        assert_eq!(page.listing().paths(), vec!["/p3", "/p2", "/p1"]);
        assert!(!page.dispatch(PageEvent::Click(ClickTarget::SortOldest)));
        assert_eq!(page.state().sort, SortDirection::Descending);

        let mut options = PageOptions::for_section(Section::Projects);
        options.sort_controls = true;
        let mut page = ListingPage::new(
            Section::Projects,
            page.items().to_vec(),
            Placeholders::new(),
            options,
        );
        page.dispatch(PageEvent::Click(ClickTarget::SortOldest));
        assert_eq!(page.listing().paths(), vec!["/p1", "/p2", "/p3"]);
    }

    #[test]
    fn test_news_has_no_location_filter() {
        let mut page = news_page();
        assert!(!page.dispatch(PageEvent::Click(ClickTarget::LocationOption("Kenya".into()))));
        assert_eq!(page.state().selected_location, None);
        page.dispatch(PageEvent::Click(ClickTarget::LocationInput));
        assert_eq!(page.dropdown(), ActiveDropdown::None);
    }

    #[test]
    fn test_apply_state_respects_section() {
        let mut page = projects_page();
        page.apply_state(FilterState {
            selected_location: Some("Peru".into()),
            sort: SortDirection::Ascending,
            ..Default::default()
        });
        assert_eq!(page.listing().paths(), vec!["/p1"]);
        assert_eq!(page.state().sort, SortDirection::Descending);
    }

    #[test]
    fn test_intersect_reveals_card() {
        let mut page = news_page();
        let rendered = page.dispatch(PageEvent::Intersect {
            index: 0,
            ratio: 0.3,
            scroll_y: 120.0,
        });
        assert!(!rendered);
        assert!(page.listing().cards()[0].reveal.is_visible());
        assert!(!page.listing().cards()[1].reveal.is_visible());
    }

    #[test]
    fn test_empty_collection_renders_empty_listing() {
        let page = ListingPage::new(
            Section::Projects,
            Vec::<ContentItem>::new(),
            Placeholders::new(),
            PageOptions::for_section(Section::Projects),
        );
        assert!(page.listing().is_empty());
        assert!(page.view().find_class("projects-listing").is_some());
    }
}
