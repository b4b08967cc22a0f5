//! Listings engine for the foundation websites.
//!
//! Loads the flattened news and projects content index, derives facet values,
//! and keeps the category / location / search / sort filters of a landing page
//! in sync with a typed view model of the listing.

pub mod config;
pub mod index;
pub mod listing;
pub mod models;
pub mod page;
pub mod placeholders;
pub mod render;
pub mod server;
pub mod site;

pub use models::{ContentItem, Section};
pub use page::{ClickTarget, ListingPage, PageEvent};
pub use site::{Language, SiteVariant};
