//! Site variants, languages and the index path table.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::models::Section;

/// Supported content languages.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Language {
    #[default]
    En,
    Fr,
}

impl Language {
    pub const ALL: [Language; 2] = [Language::En, Language::Fr];

    pub fn code(&self) -> &'static str {
        match self {
            Language::En => "en",
            Language::Fr => "fr",
        }
    }

    /// Language of a page, read from the first path segment.
    /// Anything other than a supported code falls back to English.
    pub fn from_path(pathname: &str) -> Self {
        pathname
            .split('/')
            .nth(1)
            .and_then(|segment| segment.parse().ok())
            .unwrap_or_default()
    }
}

impl fmt::Display for Language {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.code())
    }
}

impl FromStr for Language {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "en" => Ok(Language::En),
            "fr" => Ok(Language::Fr),
            other => Err(format!("unsupported language: {other}")),
        }
    }
}

/// The two foundation sub-sites, told apart by hostname.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum SiteVariant {
    Arbres,
    BienCommun,
    /// Local development or any other host.
    Unknown,
}

impl SiteVariant {
    /// Known variants in fallback order.
    pub const KNOWN: [SiteVariant; 2] = [SiteVariant::Arbres, SiteVariant::BienCommun];

    pub fn from_hostname(hostname: &str) -> Self {
        if hostname.contains("arbres") {
            SiteVariant::Arbres
        } else if hostname.contains("biencommun") {
            SiteVariant::BienCommun
        } else {
            SiteVariant::Unknown
        }
    }

    /// URL slug of a section for this variant, `None` for unknown hosts.
    pub fn slug(&self, section: Section, language: Language) -> Option<&'static str> {
        let slug = match (self, section, language) {
            (SiteVariant::Arbres, Section::News, Language::En) => "fondation-pour-les-arbres-news",
            (SiteVariant::Arbres, Section::News, Language::Fr) => {
                "fondation-pour-les-arbres-actualites"
            }
            (SiteVariant::Arbres, Section::Projects, Language::En) => {
                "fondation-pour-les-arbres-projects"
            }
            (SiteVariant::Arbres, Section::Projects, Language::Fr) => {
                "fondation-pour-les-arbres-nos-projets"
            }
            (SiteVariant::BienCommun, Section::News, Language::En) => {
                "fondation-pour-le-bien-commun-news"
            }
            (SiteVariant::BienCommun, Section::News, Language::Fr) => {
                "fondation-pour-le-bien-commun-actualites"
            }
            (SiteVariant::BienCommun, Section::Projects, Language::En) => {
                "fondation-pour-le-bien-commun-projects"
            }
            (SiteVariant::BienCommun, Section::Projects, Language::Fr) => {
                "fondation-pour-le-bien-commun-nos-projets"
            }
            (SiteVariant::Unknown, _, _) => return None,
        };
        Some(slug)
    }

    /// Site-relative path of the JSON index, e.g. `/en/fondation-pour-les-arbres-news/news-index.json`.
    pub fn index_path(&self, section: Section, language: Language) -> Option<String> {
        self.slug(section, language)
            .map(|slug| format!("/{}/{}/{}", language, slug, section.index_file()))
    }

    /// Segment every row of this variant's index is expected to live under.
    pub fn path_segment(&self, section: Section, language: Language) -> Option<String> {
        self.slug(section, language)
            .map(|slug| format!("/{}/{}/", language, slug))
    }
}

impl fmt::Display for SiteVariant {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            SiteVariant::Arbres => "arbres",
            SiteVariant::BienCommun => "bien-commun",
            SiteVariant::Unknown => "unknown",
        };
        f.write_str(name)
    }
}
