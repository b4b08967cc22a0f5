//! The listing container and its cards.

use super::cards::card;
use super::reveal::Reveal;
use super::view::{div, Element};
use crate::models::{ContentItem, Section};

/// One rendered card together with its reveal state.
#[derive(Debug, Clone)]
pub struct ListingCard {
    pub path: String,
    pub card: Element,
    pub reveal: Reveal,
}

/// Owns the cards shown in `.news-listing` / `.projects-listing`.
#[derive(Debug, Clone)]
pub struct Listing {
    section: Section,
    cards: Vec<ListingCard>,
    scroll_y: f64,
}

impl Listing {
    pub fn new(section: Section) -> Self {
        Self {
            section,
            cards: Vec::new(),
            scroll_y: 0.0,
        }
    }

    pub fn class_name(&self) -> &'static str {
        match self.section {
            Section::News => "news-listing",
            Section::Projects => "projects-listing",
        }
    }

    /// Drop the current cards and append one per item, in the given order.
    pub fn render<'a, I>(&mut self, items: I)
    where
        I: IntoIterator<Item = &'a ContentItem>,
    {
        self.cards.clear();
        let scroll_y = self.scroll_y;
        let section = self.section;
        self.cards.extend(items.into_iter().map(|item| ListingCard {
            path: item.path.clone(),
            card: card(section, item),
            reveal: Reveal::new(scroll_y),
        }));
    }

    pub fn cards(&self) -> &[ListingCard] {
        &self.cards
    }

    pub fn paths(&self) -> Vec<&str> {
        self.cards.iter().map(|c| c.path.as_str()).collect()
    }

    pub fn len(&self) -> usize {
        self.cards.len()
    }

    pub fn is_empty(&self) -> bool {
        self.cards.is_empty()
    }

    /// Feed an intersection observation for the card at `index`.
    pub fn observe(&mut self, index: usize, intersection_ratio: f64, scroll_y: f64) {
        self.scroll_y = scroll_y;
        if let Some(card) = self.cards.get_mut(index) {
            card.reveal.observe(intersection_ratio, scroll_y);
        }
    }

    /// `.{section}-listing-container > .{section}-listing > wrapped cards`.
    pub fn view(&self) -> Element {
        let container_class = format!("{}-container", self.class_name());
        div().class(container_class).child(
            div()
                .class(self.class_name())
                .children(self.cards.iter().map(|c| c.reveal.wrap(c.card.clone()))),
        )
    }
}
