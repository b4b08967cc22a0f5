//! View model for landing pages: cards, listing container, filter bar.
//!
//! Render functions build their own subtree and never look outside it.

pub mod cards;
pub mod description;
pub mod filter_bar;
pub mod listing;
pub mod reveal;
pub mod templates;
pub mod view;

pub use filter_bar::FilterBar;
pub use listing::{Listing, ListingCard};
pub use reveal::Reveal;
pub use view::{Element, Node};
