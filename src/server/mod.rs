//! Web server rendering the landing pages.
//!
//! Collections are loaded once at start-up and shared read-only between
//! requests; each request builds its own page state from the query string.

mod routes;

pub use routes::create_router;

use std::collections::HashMap;
use std::net::SocketAddr;
use std::sync::Arc;

use tracing::warn;

use crate::config::Settings;
use crate::index::{HttpClient, IndexLoader};
use crate::models::{ContentItem, Section};
use crate::placeholders::Placeholders;
use crate::site::Language;

/// Shared state for the web server.
#[derive(Clone)]
pub struct AppState {
    pub settings: Arc<Settings>,
    pub collections: Arc<HashMap<(Section, Language), Arc<[ContentItem]>>>,
    pub labels: Arc<HashMap<Language, Placeholders>>,
}

impl AppState {
    /// Build state from already loaded collections.
    pub fn new(
        settings: Settings,
        collections: HashMap<(Section, Language), Arc<[ContentItem]>>,
        labels: HashMap<Language, Placeholders>,
    ) -> Self {
        Self {
            settings: Arc::new(settings),
            collections: Arc::new(collections),
            labels: Arc::new(labels),
        }
    }

    /// Load every section in every language from the configured site.
    pub async fn load(settings: Settings) -> anyhow::Result<Self> {
        let client = HttpClient::with_user_agent(
            &settings.base_url,
            settings.request_timeout(),
            settings.user_agent.as_deref(),
        )?;
        let loader = IndexLoader::new(Arc::new(client))
            .with_chunk_size(settings.chunk_size)
            .with_sheet(settings.sheet.clone());
        let variant = settings.site_variant();

        let mut collections = HashMap::new();
        let mut labels = HashMap::new();
        for language in Language::ALL {
            for section in [Section::News, Section::Projects] {
                let items = loader.load(section, variant, language).await;
                collections.insert((section, language), Arc::from(items));
            }
            labels.insert(language, load_labels(&settings, language));
        }

        Ok(Self::new(settings, collections, labels))
    }

    pub fn collection(&self, section: Section, language: Language) -> Arc<[ContentItem]> {
        self.collections
            .get(&(section, language))
            .cloned()
            .unwrap_or_else(|| Arc::from(Vec::new()))
    }

    pub fn labels(&self, language: Language) -> Placeholders {
        self.labels.get(&language).cloned().unwrap_or_default()
    }
}

/// Placeholders for `language`, empty when none are configured or readable.
pub fn load_labels(settings: &Settings, language: Language) -> Placeholders {
    let Some(path) = &settings.placeholders_file else {
        return Placeholders::default();
    };
    match Placeholders::load_file(path, language) {
        Ok(labels) => labels,
        Err(e) => {
            warn!("Ignoring placeholders {}: {}", path.display(), e);
            Placeholders::default()
        }
    }
}

/// Start the web server.
pub async fn serve(settings: Settings, host: &str, port: u16) -> anyhow::Result<()> {
    let state = AppState::load(settings).await?;
    let app = create_router(state);

    let addr: SocketAddr = format!("{}:{}", host, port).parse()?;
    tracing::info!("Starting server at http://{}", addr);

    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}
