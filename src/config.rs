//! Configuration management for the listings tools using the prefer crate.

use std::path::PathBuf;
use std::time::Duration;

use serde::{Deserialize, Serialize};

use crate::index::DEFAULT_CHUNK_SIZE;
use crate::listing::SEARCH_DEBOUNCE;
use crate::models::Section;
use crate::page::PageOptions;
use crate::site::{Language, SiteVariant};

/// Default projects map link.
pub const DEFAULT_MAP_LINK: &str = "/en/fondation-pour-les-arbres-projects-map";

/// Application settings.
#[derive(Debug, Clone)]
pub struct Settings {
    /// Origin the content index is read from.
    pub base_url: String,
    /// Hostname used to pick the site variant. Defaults to the host of `base_url`.
    pub hostname: Option<String>,
    /// Content language.
    pub language: Language,
    /// User agent for HTTP requests.
    pub user_agent: Option<String>,
    /// Request timeout in seconds.
    pub request_timeout: u64,
    /// Index rows requested per page.
    pub chunk_size: usize,
    /// Sheet to read from multi-sheet indexes.
    pub sheet: Option<String>,
    /// Idle time before the search input re-filters, in milliseconds.
    pub search_debounce_ms: u64,
    /// Placeholder sheet JSON on disk.
    pub placeholders_file: Option<PathBuf>,
    /// Projects map link.
    pub map_link: String,
    /// Sort controls on the news page.
    pub news_sort_controls: bool,
    /// Sort controls on the projects page.
    pub projects_sort_controls: bool,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            base_url: "http://localhost:3000".to_string(),
            hostname: None,
            language: Language::En,
            user_agent: None,
            request_timeout: 30,
            chunk_size: DEFAULT_CHUNK_SIZE,
            sheet: None,
            search_debounce_ms: SEARCH_DEBOUNCE.as_millis() as u64,
            placeholders_file: None,
            map_link: DEFAULT_MAP_LINK.to_string(),
            news_sort_controls: true,
            projects_sort_controls: false,
        }
    }
}

impl Settings {
    pub fn request_timeout(&self) -> Duration {
        Duration::from_secs(self.request_timeout)
    }

    pub fn search_debounce(&self) -> Duration {
        Duration::from_millis(self.search_debounce_ms)
    }

    /// Site variant from the configured hostname or the base URL host.
    pub fn site_variant(&self) -> SiteVariant {
        let host = match &self.hostname {
            Some(hostname) => hostname.clone(),
            None => url::Url::parse(&self.base_url)
                .ok()
                .and_then(|u| u.host_str().map(str::to_string))
                .unwrap_or_default(),
        };
        SiteVariant::from_hostname(&host)
    }

    pub fn page_options(&self, section: Section) -> PageOptions {
        PageOptions {
            sort_controls: match section {
                Section::News => self.news_sort_controls,
                Section::Projects => self.projects_sort_controls,
            },
            map_link: self.map_link.clone(),
            search_debounce: self.search_debounce(),
        }
    }
}

/// Per-section switches.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct SectionConfig {
    #[serde(default)]
    pub sort_controls: Option<bool>,
}

/// Configuration file structure.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Config {
    #[serde(default)]
    pub base_url: Option<String>,
    #[serde(default)]
    pub hostname: Option<String>,
    #[serde(default)]
    pub language: Option<String>,
    #[serde(default)]
    pub user_agent: Option<String>,
    /// Request timeout in seconds.
    #[serde(default)]
    pub request_timeout: Option<u64>,
    #[serde(default)]
    pub chunk_size: Option<usize>,
    #[serde(default)]
    pub sheet: Option<String>,
    #[serde(default)]
    pub search_debounce_ms: Option<u64>,
    /// Path to a placeholder sheet; `~` is expanded.
    #[serde(default)]
    pub placeholders_file: Option<String>,
    #[serde(default)]
    pub map_link: Option<String>,
    #[serde(default)]
    pub news: SectionConfig,
    #[serde(default)]
    pub projects: SectionConfig,
}

impl Config {
    /// Load configuration using prefer crate.
    /// Automatically discovers `listings` config files in standard locations.
    pub async fn load() -> Self {
        match prefer::load("listings").await {
            Ok(pref_config) => Self::from_prefer(&pref_config),
            Err(_) => {
                // No config file found, use defaults
                Self::default()
            }
        }
    }

    /// Extract values from a loaded prefer config using dot notation.
    pub fn from_prefer(pref_config: &prefer::Config) -> Self {
        Config {
            base_url: pref_config.get("base_url").ok(),
            hostname: pref_config.get("hostname").ok(),
            language: pref_config.get("language").ok(),
            user_agent: pref_config.get("user_agent").ok(),
            request_timeout: pref_config.get("request_timeout").ok(),
            chunk_size: pref_config.get("chunk_size").ok(),
            sheet: pref_config.get("sheet").ok(),
            search_debounce_ms: pref_config.get("search_debounce_ms").ok(),
            placeholders_file: pref_config.get("placeholders_file").ok(),
            map_link: pref_config.get("map_link").ok(),
            news: SectionConfig {
                sort_controls: pref_config.get("news.sort_controls").ok(),
            },
            projects: SectionConfig {
                sort_controls: pref_config.get("projects.sort_controls").ok(),
            },
        }
    }

    /// Apply configuration to settings.
    pub fn apply_to_settings(&self, settings: &mut Settings) {
        if let Some(ref base_url) = self.base_url {
            settings.base_url = base_url.clone();
        }
        if let Some(ref hostname) = self.hostname {
            settings.hostname = Some(hostname.clone());
        }
        if let Some(language) = self.language.as_deref().and_then(|l| l.parse().ok()) {
            settings.language = language;
        }
        if let Some(ref user_agent) = self.user_agent {
            settings.user_agent = Some(user_agent.clone());
        }
        if let Some(timeout) = self.request_timeout {
            settings.request_timeout = timeout;
        }
        if let Some(chunk_size) = self.chunk_size {
            settings.chunk_size = chunk_size.max(1);
        }
        if let Some(ref sheet) = self.sheet {
            settings.sheet = Some(sheet.clone());
        }
        if let Some(debounce) = self.search_debounce_ms {
            settings.search_debounce_ms = debounce;
        }
        if let Some(ref path) = self.placeholders_file {
            let path = shellexpand::tilde(path);
            settings.placeholders_file = Some(PathBuf::from(path.as_ref()));
        }
        if let Some(ref map_link) = self.map_link {
            settings.map_link = map_link.clone();
        }
        if let Some(enabled) = self.news.sort_controls {
            settings.news_sort_controls = enabled;
        }
        if let Some(enabled) = self.projects.sort_controls {
            settings.projects_sort_controls = enabled;
        }
    }
}

/// Load settings from configuration (async version).
pub async fn load_settings() -> Settings {
    let config = Config::load().await;
    let mut settings = Settings::default();
    config.apply_to_settings(&mut settings);
    settings
}
