//! Orderings for news dates and project durations.
//!
//! Keys that fail to parse never panic: they sort after every parsed key in
//! both directions and keep their input order among themselves.

use std::cmp::Ordering;
use std::str::FromStr;

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::models::{ContentItem, Section};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SortDirection {
    /// Most recent first.
    #[default]
    #[serde(alias = "desc")]
    Descending,
    #[serde(alias = "asc")]
    Ascending,
}

impl SortDirection {
    fn apply(self, ordering: Ordering) -> Ordering {
        match self {
            SortDirection::Descending => ordering.reverse(),
            SortDirection::Ascending => ordering,
        }
    }
}

impl FromStr for SortDirection {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "desc" | "descending" => Ok(SortDirection::Descending),
            "asc" | "ascending" => Ok(SortDirection::Ascending),
            other => Err(format!("unknown sort direction: {other}")),
        }
    }
}

/// Parse a `dd.mm.yyyy` date.
pub fn parse_date(raw: &str) -> Option<NaiveDate> {
    let mut parts = raw.trim().split('.');
    let day = parts.next()?.trim().parse().ok()?;
    let month = parts.next()?.trim().parse().ok()?;
    let year = parts.next()?.trim().parse().ok()?;
    if parts.next().is_some() {
        return None;
    }
    NaiveDate::from_ymd_opt(year, month, day)
}

/// Leading integer of a string, ignoring surrounding whitespace.
fn leading_int(raw: &str) -> Option<i32> {
    let raw = raw.trim();
    let end = raw
        .char_indices()
        .find(|(i, c)| !(c.is_ascii_digit() || (*i == 0 && (*c == '-' || *c == '+'))))
        .map(|(i, _)| i)
        .unwrap_or(raw.len());
    raw[..end].parse().ok()
}

/// Start and end year of a `"<start> → <end>"` duration.
pub fn parse_duration(raw: &str) -> (Option<i32>, Option<i32>) {
    let mut sides = raw.splitn(2, '→');
    let start = sides.next().and_then(leading_int);
    let end = sides.next().and_then(leading_int);
    (start, end)
}

/// Compare two optional keys: present keys by `direction`, absent keys last.
fn compare_keys<T: Ord>(a: Option<T>, b: Option<T>, direction: SortDirection) -> Ordering {
    match (a, b) {
        (Some(a), Some(b)) => direction.apply(a.cmp(&b)),
        (Some(_), None) => Ordering::Less,
        (None, Some(_)) => Ordering::Greater,
        (None, None) => Ordering::Equal,
    }
}

/// News ordering by publication date.
pub fn compare_news(a: &ContentItem, b: &ContentItem, direction: SortDirection) -> Ordering {
    compare_keys(parse_date(&a.date), parse_date(&b.date), direction)
}

/// Projects ordering: end year in `direction`, ties broken by start year descending.
pub fn compare_projects(a: &ContentItem, b: &ContentItem, direction: SortDirection) -> Ordering {
    let (start_a, end_a) = parse_duration(&a.duration);
    let (start_b, end_b) = parse_duration(&b.duration);
    compare_keys(end_a, end_b, direction)
        .then_with(|| compare_keys(start_a, start_b, SortDirection::Descending))
}

/// Stable sort of a filtered subset for a section.
pub fn sort_items(section: Section, items: &mut [&ContentItem], direction: SortDirection) {
    match section {
        Section::News => items.sort_by(|a, b| compare_news(a, b, direction)),
        Section::Projects => items.sort_by(|a, b| compare_projects(a, b, direction)),
    }
}
