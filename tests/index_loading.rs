//! Loading collections from an index served over HTTP.

mod common;

use std::sync::Arc;
use std::time::Duration;

use foundation_listings::index::{HttpClient, IndexLoader};
use foundation_listings::{Language, Section, SiteVariant};

use common::{news_row, project_row, spawn_index_server};

fn loader(base_url: &str, chunk_size: usize) -> IndexLoader {
    let client = HttpClient::new(base_url, Duration::from_secs(5)).expect("client");
    IndexLoader::new(Arc::new(client)).with_chunk_size(chunk_size)
}

fn index_path(variant: SiteVariant, section: Section, language: Language) -> String {
    variant
        .index_path(section, language)
        .expect("known variant has an index")
}

// ============================================================================
// Pagination
// ============================================================================

#[tokio::test]
async fn pages_are_concatenated_in_order() {
    let path = index_path(SiteVariant::Arbres, Section::News, Language::En);
    let rows = (0..5)
        .map(|i| {
            news_row(
                &format!("/en/fondation-pour-les-arbres-news/item-{i}"),
                &format!("Item {i}"),
                "Forest",
                "01.01.2024",
            )
        })
        .collect();
    let server = spawn_index_server(vec![(path.as_str(), rows)]).await;

    let items = loader(&server.base_url, 2)
        .load(Section::News, SiteVariant::Arbres, Language::En)
        .await;

    let titles: Vec<&str> = items.iter().map(|i| i.title.as_str()).collect();
    assert_eq!(titles, vec!["Item 0", "Item 1", "Item 2", "Item 3", "Item 4"]);
    assert_eq!(
        server.requests(),
        vec![
            format!("{path}?offset=0&limit=2"),
            format!("{path}?offset=2&limit=2"),
            format!("{path}?offset=4&limit=2"),
        ]
    );
}

// ============================================================================
// Variant and language selection
// ============================================================================

#[tokio::test]
async fn rows_outside_the_language_segment_are_dropped() {
    let path = index_path(SiteVariant::Arbres, Section::News, Language::Fr);
    let rows = vec![
        news_row(
            "/fr/fondation-pour-les-arbres-actualites/un",
            "Un",
            "Forêt",
            "01.01.2024",
        ),
        news_row(
            "/en/fondation-pour-les-arbres-news/one",
            "One",
            "Forest",
            "01.01.2024",
        ),
    ];
    let server = spawn_index_server(vec![(path.as_str(), rows)]).await;

    let items = loader(&server.base_url, 1000)
        .load(Section::News, SiteVariant::Arbres, Language::Fr)
        .await;

    assert_eq!(items.len(), 1);
    assert_eq!(items[0].title, "Un");
}

#[tokio::test]
async fn unknown_host_falls_back_to_second_variant() {
    let path = index_path(SiteVariant::BienCommun, Section::Projects, Language::En);
    let rows = vec![project_row(
        "/en/fondation-pour-le-bien-commun-projects/well",
        "Well",
        "Water",
        "Kenya",
        "2019 → 2022",
    )];
    let server = spawn_index_server(vec![(path.as_str(), rows)]).await;

    let items = loader(&server.base_url, 1000)
        .load(Section::Projects, SiteVariant::Unknown, Language::En)
        .await;

    assert_eq!(items.len(), 1);
    assert_eq!(items[0].location, "Kenya");

    let requests = server.requests();
    assert_eq!(requests.len(), 2);
    assert!(requests[0].starts_with(&index_path(
        SiteVariant::Arbres,
        Section::Projects,
        Language::En
    )));
    assert!(requests[1].starts_with(&path));
}

#[tokio::test]
async fn unreachable_index_yields_empty_collection() {
    let server = spawn_index_server(Vec::new()).await;

    let items = loader(&server.base_url, 1000)
        .load(Section::News, SiteVariant::BienCommun, Language::En)
        .await;

    assert!(items.is_empty());
}
