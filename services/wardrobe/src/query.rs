//! Pure queries over a fetched collection: ordering, filtering, statistics
//! and duplicate detection.

use chrono::{DateTime, Duration, Utc};
use std::collections::HashSet;

use crate::models::{Dress, DressDraft, DressStats, FilterCriteria};

/// Reported when no dress has a category
pub const NO_CATEGORY: &str = "None";

/// How far back a dress counts as recently added
pub const RECENT_WINDOW_DAYS: i64 = 7;

/// Newest first; dresses without a timestamp go last
pub fn sort_newest_first(items: &mut [Dress]) {
    items.sort_by(|a, b| b.created_at.cmp(&a.created_at));
}

fn active(value: &Option<String>) -> Option<&str> {
    value.as_deref().filter(|v| !v.is_empty())
}

fn matches_search(dress: &Dress, needle: &str) -> bool {
    [
        &dress.name,
        &dress.dress_type,
        &dress.color,
        &dress.category,
    ]
    .iter()
    .any(|field| field.to_lowercase().contains(needle))
}

/// Whether `dress` satisfies every active criterion
pub fn matches(dress: &Dress, criteria: &FilterCriteria) -> bool {
    if let Some(search) = active(&criteria.search) {
        if !matches_search(dress, &search.to_lowercase()) {
            return false;
        }
    }

    let exact = [
        (&criteria.dress_type, &dress.dress_type),
        (&criteria.color, &dress.color),
        (&criteria.occasion, &dress.occasion),
        (&criteria.category, &dress.category),
    ];
    exact
        .iter()
        .all(|(wanted, actual)| active(wanted).is_none_or(|w| w == actual.as_str()))
}

/// Keep the dresses matching `criteria`, preserving order
pub fn apply_filters(items: &[Dress], criteria: &FilterCriteria) -> Vec<Dress> {
    items
        .iter()
        .filter(|dress| matches(dress, criteria))
        .cloned()
        .collect()
}

fn distinct<'a>(values: impl Iterator<Item = &'a str>) -> usize {
    values
        .filter(|v| !v.is_empty())
        .collect::<HashSet<_>>()
        .len()
}

/// Category with the most dresses; the first one seen wins a tie
pub fn most_common_category(items: &[Dress]) -> String {
    let mut counts: Vec<(&str, usize)> = Vec::new();
    for category in items
        .iter()
        .map(|d| d.category.as_str())
        .filter(|c| !c.is_empty())
    {
        match counts.iter_mut().find(|(seen, _)| *seen == category) {
            Some((_, count)) => *count += 1,
            None => counts.push((category, 1)),
        }
    }

    let mut best: Option<(&str, usize)> = None;
    for (category, count) in counts {
        if best.is_none_or(|(_, top)| count > top) {
            best = Some((category, count));
        }
    }

    best.map_or_else(|| NO_CATEGORY.to_string(), |(category, _)| category.to_string())
}

/// Aggregate statistics relative to `now`
pub fn compute_statistics(items: &[Dress], now: DateTime<Utc>) -> DressStats {
    let cutoff = now - Duration::days(RECENT_WINDOW_DAYS);

    DressStats {
        total_count: items.len(),
        distinct_categories: distinct(items.iter().map(|d| d.category.as_str())),
        distinct_colors: distinct(items.iter().map(|d| d.color.as_str())),
        distinct_occasions: distinct(items.iter().map(|d| d.occasion.as_str())),
        distinct_types: distinct(items.iter().map(|d| d.dress_type.as_str())),
        recent_count: items
            .iter()
            .filter(|d| d.created_at.is_some_and(|t| t > cutoff))
            .count(),
        most_common_category: most_common_category(items),
    }
}

/// Same name, type and color, ignoring case
pub fn is_duplicate(existing: &Dress, candidate: &DressDraft) -> bool {
    existing.name.to_lowercase() == candidate.name.to_lowercase()
        && existing.dress_type.to_lowercase() == candidate.dress_type.to_lowercase()
        && existing.color.to_lowercase() == candidate.color.to_lowercase()
}
