//! Local content index served over HTTP for integration tests.

#![allow(dead_code)]

use std::collections::HashMap;
use std::sync::{Arc, Mutex};

use axum::extract::{Query, State};
use axum::http::{StatusCode, Uri};
use axum::response::{IntoResponse, Response};
use axum::{Json, Router};
use serde::Deserialize;
use serde_json::{json, Value};

#[derive(Default)]
struct Fixture {
    indexes: HashMap<String, Vec<Value>>,
    requests: Mutex<Vec<String>>,
}

#[derive(Deserialize)]
struct PageQuery {
    offset: Option<usize>,
    limit: Option<usize>,
}

/// A running index server. Paths not registered answer 404.
pub struct IndexServer {
    pub base_url: String,
    fixture: Arc<Fixture>,
}

impl IndexServer {
    /// Request log as `path?offset=..&limit=..`.
    pub fn requests(&self) -> Vec<String> {
        self.fixture.requests.lock().expect("request log").clone()
    }
}

/// Start a server on an ephemeral port serving `indexes` keyed by path.
pub async fn spawn_index_server(indexes: Vec<(&str, Vec<Value>)>) -> IndexServer {
    let fixture = Arc::new(Fixture {
        indexes: indexes
            .into_iter()
            .map(|(path, rows)| (path.to_string(), rows))
            .collect(),
        requests: Mutex::new(Vec::new()),
    });

    let app = Router::new()
        .fallback(serve_index)
        .with_state(fixture.clone());

    let listener = tokio::net::TcpListener::bind("127.0.0.1:0")
        .await
        .expect("Failed to bind index server");
    let addr = listener.local_addr().expect("local addr");
    tokio::spawn(async move {
        axum::serve(listener, app).await.expect("index server");
    });

    IndexServer {
        base_url: format!("http://{}", addr),
        fixture,
    }
}

async fn serve_index(
    State(fixture): State<Arc<Fixture>>,
    uri: Uri,
    Query(query): Query<PageQuery>,
) -> Response {
    let offset = query.offset.unwrap_or(0);
    let limit = query.limit.unwrap_or(1000);
    fixture
        .requests
        .lock()
        .expect("request log")
        .push(format!("{}?offset={}&limit={}", uri.path(), offset, limit));

    let Some(rows) = fixture.indexes.get(uri.path()) else {
        return StatusCode::NOT_FOUND.into_response();
    };
    let data: Vec<Value> = rows.iter().skip(offset).take(limit).cloned().collect();
    Json(json!({
        "total": rows.len(),
        "offset": offset,
        "limit": limit,
        "data": data,
    }))
    .into_response()
}

pub fn news_row(path: &str, title: &str, category: &str, date: &str) -> Value {
    json!({
        "path": path,
        "title": title,
        "description": "First sentence. Second sentence.",
        "image": "/media/news.jpg",
        "date": date,
        "category": category,
    })
}

pub fn project_row(path: &str, title: &str, category: &str, location: &str, duration: &str) -> Value {
    json!({
        "path": path,
        "title": title,
        "description": "A project.",
        "image": "/media/project.jpg",
        "category": category,
        "location": location,
        "partner": "Partner",
        "duration": duration,
    })
}
