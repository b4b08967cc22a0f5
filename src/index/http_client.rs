//! HTTP client for reading the published content index.

use std::time::{Duration, Instant};

use async_trait::async_trait;
use reqwest::Client;
use tracing::debug;
use url::Url;

use super::sheet::IndexPage;
use super::{IndexError, IndexSource};

const USER_AGENT: &str = concat!("foundation-listings/", env!("CARGO_PKG_VERSION"));

/// Resolve user agent from config value.
/// - None => default listings user agent
/// - other => custom user agent string
pub fn resolve_user_agent(config: Option<&str>) -> String {
    match config {
        None => USER_AGENT.to_string(),
        Some(custom) => custom.to_string(),
    }
}

/// HTTP client bound to one site origin.
#[derive(Clone)]
pub struct HttpClient {
    client: Client,
    base_url: Url,
}

impl HttpClient {
    /// Create a new HTTP client for `base_url` (scheme + host, e.g. `https://example.org`).
    pub fn new(base_url: &str, timeout: Duration) -> Result<Self, IndexError> {
        Self::with_user_agent(base_url, timeout, None)
    }

    /// Create a new HTTP client with custom user agent configuration.
    pub fn with_user_agent(
        base_url: &str,
        timeout: Duration,
        user_agent_config: Option<&str>,
    ) -> Result<Self, IndexError> {
        let user_agent = resolve_user_agent(user_agent_config);
        let client = Client::builder()
            .user_agent(&user_agent)
            .timeout(timeout)
            .gzip(true)
            .brotli(true)
            .build()?;

        Ok(Self {
            client,
            base_url: Url::parse(base_url)?,
        })
    }

    /// Absolute URL of one index page.
    pub fn page_url(
        &self,
        path: &str,
        offset: usize,
        limit: usize,
        sheet: Option<&str>,
    ) -> Result<Url, IndexError> {
        let mut url = self.base_url.join(path)?;
        {
            let mut query = url.query_pairs_mut();
            query.append_pair("offset", &offset.to_string());
            query.append_pair("limit", &limit.to_string());
            if let Some(sheet) = sheet {
                query.append_pair("sheet", sheet);
            }
        }
        Ok(url)
    }
}

#[async_trait]
impl IndexSource for HttpClient {
    async fn fetch_page(
        &self,
        path: &str,
        offset: usize,
        limit: usize,
        sheet: Option<&str>,
    ) -> Result<IndexPage, IndexError> {
        let url = self.page_url(path, offset, limit, sheet)?;

        let start = Instant::now();
        let response = self.client.get(url.clone()).send().await?;
        let status = response.status();
        debug!(
            "GET {} -> {} in {:?}",
            url,
            status.as_u16(),
            start.elapsed()
        );

        if !status.is_success() {
            return Err(IndexError::Status {
                url: url.to_string(),
                status: status.as_u16(),
            });
        }

        let body = response.text().await?;
        IndexPage::from_json(&body, sheet)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_resolve_user_agent_default() {
        let ua = resolve_user_agent(None);
        assert!(ua.starts_with("foundation-listings/"));
    }

    #[test]
    fn test_resolve_user_agent_custom() {
        let ua = resolve_user_agent(Some("MyBot/1.0"));
        assert_eq!(ua, "MyBot/1.0");
    }

    #[test]
    fn test_page_url() {
        let client = HttpClient::new("https://example.org", Duration::from_secs(5)).unwrap();
        let url = client
            .page_url("/en/news/news-index.json", 1000, 1000, None)
            .unwrap();
        assert_eq!(
            url.as_str(),
            "https://example.org/en/news/news-index.json?offset=1000&limit=1000"
        );

        let url = client
            .page_url("/fr/x/projects-index.json", 0, 50, Some("default"))
            .unwrap();
        assert_eq!(url.query(), Some("offset=0&limit=50&sheet=default"));
    }

    #[test]
    fn test_invalid_base_url() {
        assert!(matches!(
            HttpClient::new("not a url", Duration::from_secs(5)),
            Err(IndexError::Url(_))
        ));
    }
}
