//! Content index loading.
//!
//! The sites publish a flattened JSON index per section and language.
//! [`IndexLoader`] resolves which index to read for a site variant, walks
//! its pages and turns every failure into an empty collection.

mod http_client;
mod loader;
mod sheet;

pub use http_client::{resolve_user_agent, HttpClient};
pub use loader::{IndexLoader, DEFAULT_CHUNK_SIZE};
pub use sheet::IndexPage;

use async_trait::async_trait;
use thiserror::Error;

/// Why a single index path yielded no data.
#[derive(Debug, Error)]
pub enum IndexError {
    #[error("request failed: {0}")]
    Http(#[from] reqwest::Error),
    #[error("unexpected status {status} for {url}")]
    Status { url: String, status: u16 },
    #[error("malformed index JSON: {0}")]
    Json(#[from] serde_json::Error),
    #[error("index has no sheet named {0}")]
    MissingSheet(String),
    #[error("invalid index URL: {0}")]
    Url(#[from] url::ParseError),
}

/// Something that can return one page of an index.
///
/// `path` is site-relative; implementations add the paging parameters.
#[async_trait]
pub trait IndexSource: Send + Sync {
    async fn fetch_page(
        &self,
        path: &str,
        offset: usize,
        limit: usize,
        sheet: Option<&str>,
    ) -> Result<IndexPage, IndexError>;
}
