//! The in-memory listing engine: facets, filters, ordering and search debounce.

pub mod debounce;
pub mod facets;
pub mod filter;
pub mod sort;
pub mod state;

pub use debounce::{spawn_debounced, Debouncer, SEARCH_DEBOUNCE};
pub use facets::{extract_facets, Facets};
pub use filter::{apply_filters, visible_items, MIN_SEARCH_LEN};
pub use sort::{sort_items, SortDirection};
pub use state::{ActiveDropdown, FilterState};
