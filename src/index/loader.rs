//! Variant-aware index loading with fallback.

use std::sync::Arc;

use tracing::{debug, info, warn};

use super::{IndexError, IndexSource};
use crate::models::{ContentItem, Section};
use crate::site::{Language, SiteVariant};

/// Rows requested per page. Large enough that the published indexes come
/// back in a single round trip.
pub const DEFAULT_CHUNK_SIZE: usize = 1000;

/// Upper bound on pages fetched for one path.
pub const MAX_PAGES: usize = 1000;

/// Loads a section's content index for a site variant and language.
#[derive(Clone)]
pub struct IndexLoader {
    source: Arc<dyn IndexSource>,
    chunk_size: usize,
    sheet: Option<String>,
}

impl IndexLoader {
    pub fn new(source: Arc<dyn IndexSource>) -> Self {
        Self {
            source,
            chunk_size: DEFAULT_CHUNK_SIZE,
            sheet: None,
        }
    }

    pub fn with_chunk_size(mut self, chunk_size: usize) -> Self {
        self.chunk_size = chunk_size.max(1);
        self
    }

    /// Read this sheet out of multi-sheet indexes.
    pub fn with_sheet(mut self, sheet: Option<String>) -> Self {
        self.sheet = sheet;
        self
    }

    /// Load the collection. Never fails: anything that goes wrong yields an
    /// empty collection.
    pub async fn load(
        &self,
        section: Section,
        variant: SiteVariant,
        language: Language,
    ) -> Vec<ContentItem> {
        let items = match variant {
            SiteVariant::Arbres | SiteVariant::BienCommun => {
                self.load_variant(section, variant, language).await
            }
            SiteVariant::Unknown => self.load_with_fallback(section, language).await,
        };
        info!(
            "Loaded {} {} items ({}, {})",
            items.len(),
            section,
            variant,
            language
        );
        items
    }

    async fn load_variant(
        &self,
        section: Section,
        variant: SiteVariant,
        language: Language,
    ) -> Vec<ContentItem> {
        let (Some(path), Some(segment)) = (
            variant.index_path(section, language),
            variant.path_segment(section, language),
        ) else {
            return Vec::new();
        };

        let Some(rows) = self.fetch_or_none(&path).await else {
            return Vec::new();
        };

        let total = rows.len();
        let rows: Vec<ContentItem> = rows
            .into_iter()
            .filter(|item| item.path.contains(&segment))
            .collect();
        if rows.len() < total {
            debug!(
                "Dropped {} rows outside {} from {}",
                total - rows.len(),
                segment,
                path
            );
        }
        rows
    }

    /// Unknown hosts: first known variant, then the next, first non-empty wins.
    async fn load_with_fallback(&self, section: Section, language: Language) -> Vec<ContentItem> {
        for variant in SiteVariant::KNOWN {
            let Some(path) = variant.index_path(section, language) else {
                continue;
            };
            match self.fetch_or_none(&path).await {
                Some(rows) if !rows.is_empty() => return rows,
                _ => debug!("No {} index at {}, trying next variant", section, path),
            }
        }
        Vec::new()
    }

    async fn fetch_or_none(&self, path: &str) -> Option<Vec<ContentItem>> {
        match self.fetch_all(path).await {
            Ok(rows) => Some(rows),
            Err(e) => {
                warn!("Could not load index {}: {}", path, e);
                None
            }
        }
    }

    /// Walk every page of one index path and concatenate the rows.
    pub async fn fetch_all(&self, path: &str) -> Result<Vec<ContentItem>, IndexError> {
        let mut rows = Vec::new();
        let mut offset = 0;

        for _ in 0..MAX_PAGES {
            let page = self
                .source
                .fetch_page(path, offset, self.chunk_size, self.sheet.as_deref())
                .await?;
            let more = page.has_more(offset);
            let received = page.data.len();
            rows.extend(page.data);

            if !more {
                return Ok(rows);
            }
            offset += received;
        }

        warn!(
            "Stopped paging {} after {} pages ({} rows)",
            path,
            MAX_PAGES,
            rows.len()
        );

        Ok(rows)
    }
}
