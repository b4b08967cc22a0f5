//! Scroll-linked fade-up reveal of listing cards.

use super::view::{div, Element};

/// Fraction of a card that must intersect the viewport to reveal it.
pub const REVEAL_THRESHOLD: f64 = 0.1;

pub const WRAPPER_CLASS: &str = "image-fade-wrapper";
const BANNER_CLASS: &str = "horizontal-banner";
const HIDDEN_OFFSET: &str = "translateY(100px)";
const SHOWN_OFFSET: &str = "translateY(0)";
const TRANSITION: &str = "opacity 1.5s ease-out, transform 1.5s ease-out";

/// Visibility of one wrapped card.
///
/// Cards start hidden and reveal once enough of them intersects the
/// viewport. Leaving the viewport hides them again only while scrolling up,
/// so a fast downward scroll past a card does not flicker.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Reveal {
    visible: bool,
    last_scroll_y: f64,
}

impl Reveal {
    pub fn new(scroll_y: f64) -> Self {
        Self {
            visible: false,
            last_scroll_y: scroll_y,
        }
    }

    pub fn is_visible(&self) -> bool {
        self.visible
    }

    /// Feed one intersection observation.
    pub fn observe(&mut self, intersection_ratio: f64, scroll_y: f64) {
        let scrolling_down = scroll_y > self.last_scroll_y;

        if intersection_ratio >= REVEAL_THRESHOLD {
            self.visible = true;
        } else if !scrolling_down {
            self.visible = false;
        }

        self.last_scroll_y = scroll_y;
    }

    /// Wrap a card, carrying over the banner modifier and the current styles.
    pub fn wrap(&self, card: Element) -> Element {
        let mut wrapper = div().class(WRAPPER_CLASS);
        if card.has_class(BANNER_CLASS) {
            wrapper.add_class(BANNER_CLASS);
        }
        if self.visible {
            wrapper.set_style("opacity", "1");
            wrapper.set_style("transform", SHOWN_OFFSET);
        } else {
            wrapper.set_style("opacity", "0");
            wrapper.set_style("transform", HIDDEN_OFFSET);
        }
        wrapper.set_style("transition", TRANSITION);
        wrapper.child(card)
    }
}
