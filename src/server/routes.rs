//! Route definitions for the listings server.

use axum::{
    extract::{Path, Query, State},
    http::StatusCode,
    response::{Html, IntoResponse, Response},
    routing::get,
    Router,
};
use serde::Deserialize;
use tracing::debug;

use super::AppState;
use crate::listing::{FilterState, SortDirection};
use crate::models::Section;
use crate::page::ListingPage;
use crate::render::templates::base_template;
use crate::site::Language;

/// Create the router with all routes.
pub fn create_router(state: AppState) -> Router {
    Router::new()
        .route("/health", get(health))
        .route("/:lang/news", get(news_landing))
        .route("/:lang/projects", get(projects_landing))
        .with_state(state)
}

/// Filter state carried in the query string.
#[derive(Debug, Default, Deserialize)]
pub struct ListingQuery {
    pub category: Option<String>,
    pub location: Option<String>,
    pub q: Option<String>,
    /// `asc` or `desc`; anything else keeps the default order.
    pub sort: Option<String>,
}

impl ListingQuery {
    fn into_state(self) -> FilterState {
        let mut state = FilterState::default();
        if let Some(category) = self.category {
            state.select_category(category);
        }
        if let Some(location) = self.location {
            state.select_location(location);
        }
        if let Some(term) = self.q {
            state.set_search(term);
        }
        state.sort = self
            .sort
            .and_then(|sort| sort.parse::<SortDirection>().ok())
            .unwrap_or_default();
        state
    }
}

async fn health() -> &'static str {
    "ok"
}

async fn news_landing(
    State(state): State<AppState>,
    Path(lang): Path<String>,
    Query(query): Query<ListingQuery>,
) -> Response {
    landing(&state, Section::News, &lang, query)
}

async fn projects_landing(
    State(state): State<AppState>,
    Path(lang): Path<String>,
    Query(query): Query<ListingQuery>,
) -> Response {
    landing(&state, Section::Projects, &lang, query)
}

fn landing(state: &AppState, section: Section, lang: &str, query: ListingQuery) -> Response {
    let Ok(language) = lang.parse::<Language>() else {
        return (StatusCode::NOT_FOUND, Html("<h1>Not found</h1>".to_string())).into_response();
    };

    let mut page = ListingPage::new(
        section,
        state.collection(section, language),
        state.labels(language),
        state.settings.page_options(section),
    );
    let filters = query.into_state();
    if !filters.is_default() {
        page.apply_state(filters);
    }
    debug!(
        "Serving {} {} with {} cards",
        language,
        section,
        page.listing().len()
    );

    let title = match section {
        Section::News => "News",
        Section::Projects => "Projects",
    };
    let template = format!("{}-landing", section);
    Html(base_template(
        title,
        language,
        &template,
        &page.view().to_html(),
    ))
    .into_response()
}
