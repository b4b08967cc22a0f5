//! Listing cards for news articles and projects.

use super::description::teaser;
use super::view::{a, div, h2, img, p, span, Element};
use crate::models::{ContentItem, Section};

pub fn card(section: Section, item: &ContentItem) -> Element {
    match section {
        Section::News => news_card(item),
        Section::Projects => project_card(item),
    }
}

pub fn news_card(item: &ContentItem) -> Element {
    let mut card = a()
        .class("news-item")
        .attr("href", &item.path)
        .child(
            div().class("news-image-wrapper").child(
                img()
                    .class("news-image")
                    .attr("src", &item.image)
                    .attr("alt", &item.title),
            ),
        )
        .child(
            div()
                .class("news-content-wrapper")
                .child(span().class("news-category").child(item.category.as_str()))
                .child(span().class("news-date").child(item.date.as_str()))
                .child(h2().class("news-title").child(item.title.as_str()))
                .child(
                    div()
                        .class("news-description")
                        .child(p().child(teaser(&item.description))),
                ),
        )
        .child(div().class("clear"));

    // colour and layout cells are CSS modifier classes
    card.add_class(item.article_color.as_str());
    card.add_class(item.layout.as_str());
    card
}

pub fn project_card(item: &ContentItem) -> Element {
    a().class("project-item")
        .attr("href", &item.path)
        .child(
            div().class("projects-image-wrapper").child(
                img()
                    .class("projects-image")
                    .attr("src", &item.image)
                    .attr("alt", &item.title),
            ),
        )
        .child(
            div()
                .class("projects-partner")
                .child(span().child(item.partner.as_str())),
        )
        .child(
            div()
                .class("projects-location")
                .child(span().child(item.location.as_str())),
        )
        .child(
            div()
                .class("projects-duration")
                .child(span().child(item.duration.as_str())),
        )
        .child(h2().class("projects-title").child(item.title.as_str()))
        .child(span().class("projects-date").child(item.date.as_str()))
        .child(span().class("projects-category").child(item.category.as_str()))
}
