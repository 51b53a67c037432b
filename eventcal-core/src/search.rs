//! Grouped, ranked text search over the event collection.
//!
//! Search runs four passes in priority order: title, location, category,
//! description. An event claimed by one pass is skipped by every later
//! pass, so no event shows up in two groups. Each group is then sorted by
//! descending score (stable) and capped.

use std::collections::HashSet;

use serde::{Deserialize, Serialize};

use crate::event::EventRecord;

/// Queries shorter than this (after trimming) return nothing.
pub const MIN_QUERY_LEN: usize = 2;

const NAME_BASE_SCORE: u32 = 100;
const LOCATION_BASE_SCORE: u32 = 80;
const CATEGORY_BASE_SCORE: u32 = 70;
const OTHER_BASE_SCORE: u32 = 40;

const EXACT_BONUS: u32 = 50;
const PREFIX_BONUS: u32 = 20;

/// Per-group result caps.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct SearchOptions {
    pub max_name: usize,
    pub max_location: usize,
    pub max_category: usize,
    pub max_other: usize,
}

impl Default for SearchOptions {
    fn default() -> Self {
        SearchOptions {
            max_name: 3,
            max_location: 5,
            max_category: 5,
            max_other: 3,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum MatchType {
    Name,
    Location,
    Category,
    Other,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum MatchedField {
    Title,
    City,
    Country,
    Venue,
    Location,
    Category,
    Description,
}

impl MatchedField {
    pub fn as_str(&self) -> &'static str {
        match self {
            MatchedField::Title => "title",
            MatchedField::City => "city",
            MatchedField::Country => "country",
            MatchedField::Venue => "venue",
            MatchedField::Location => "location",
            MatchedField::Category => "category",
            MatchedField::Description => "description",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SearchResult<'a> {
    pub event: &'a EventRecord,
    pub match_type: MatchType,
    pub score: u32,
    pub matched_field: MatchedField,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub matched_value: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct GroupedSearchResults<'a> {
    pub by_name: Vec<SearchResult<'a>>,
    pub by_location: Vec<SearchResult<'a>>,
    pub by_category: Vec<SearchResult<'a>>,
    pub by_other: Vec<SearchResult<'a>>,
}

impl<'a> GroupedSearchResults<'a> {
    pub fn has_results(&self) -> bool {
        !self.by_name.is_empty()
            || !self.by_location.is_empty()
            || !self.by_category.is_empty()
            || !self.by_other.is_empty()
    }

    /// Groups in display order, with their headings.
    pub fn groups(&self) -> [(&'static str, &[SearchResult<'a>]); 4] {
        [
            ("Events", self.by_name.as_slice()),
            ("Locations", self.by_location.as_slice()),
            ("Categories", self.by_category.as_slice()),
            ("Other", self.by_other.as_slice()),
        ]
    }

    pub fn len(&self) -> usize {
        self.by_name.len() + self.by_location.len() + self.by_category.len() + self.by_other.len()
    }

    pub fn is_empty(&self) -> bool {
        !self.has_results()
    }
}

/// Free-function form of [`GroupedSearchResults::has_results`].
pub fn has_results(results: &GroupedSearchResults) -> bool {
    results.has_results()
}

/// Score one field against an already lowercased query.
///
/// Exact match scores `base + 50`, prefix `base + 20`, substring `base`,
/// anything else (including a missing or empty field) `0`.
pub fn score(field: Option<&str>, query: &str, base: u32) -> u32 {
    let Some(field) = field.filter(|f| !f.is_empty()) else {
        return 0;
    };
    let field = field.to_lowercase();

    if field == query {
        base + EXACT_BONUS
    } else if field.starts_with(query) {
        base + PREFIX_BONUS
    } else if field.contains(query) {
        base
    } else {
        0
    }
}

/// Best-scoring candidate; on equal scores the first one seen wins.
fn best_match<T>(candidates: impl IntoIterator<Item = (T, u32)>) -> Option<(T, u32)> {
    candidates
        .into_iter()
        .filter(|(_, score)| *score > 0)
        .fold(None, |best, (candidate, score)| match best {
            Some((_, best_score)) if best_score >= score => best,
            _ => Some((candidate, score)),
        })
}

pub fn search_events<'a, I>(events: I, query: &str) -> GroupedSearchResults<'a>
where
    I: IntoIterator<Item = &'a EventRecord>,
{
    search_events_with(events, query, &SearchOptions::default())
}

pub fn search_events_with<'a, I>(
    events: I,
    query: &str,
    options: &SearchOptions,
) -> GroupedSearchResults<'a>
where
    I: IntoIterator<Item = &'a EventRecord>,
{
    let query = query.trim().to_lowercase();
    if query.chars().count() < MIN_QUERY_LEN {
        return GroupedSearchResults::default();
    }

    let events: Vec<&'a EventRecord> = events.into_iter().collect();
    let mut claimed: HashSet<&str> = HashSet::new();
    let mut results = GroupedSearchResults::default();

    for &event in &events {
        let score = score(Some(event.title.as_str()), &query, NAME_BASE_SCORE);
        if score > 0 {
            results.by_name.push(SearchResult {
                event,
                match_type: MatchType::Name,
                score,
                matched_field: MatchedField::Title,
                matched_value: None,
            });
            claimed.insert(event.id.as_str());
        }
    }

    for &event in &events {
        if claimed.contains(event.id.as_str()) {
            continue;
        }
        let candidates = [
            (MatchedField::City, event.location_city.as_deref()),
            (MatchedField::Country, event.location_country.as_deref()),
            (MatchedField::Venue, event.location_venue.as_deref()),
            (MatchedField::Location, event.location.as_deref()),
        ]
        .map(|(field, value)| (field, score(value, &query, LOCATION_BASE_SCORE)));

        if let Some((field, score)) = best_match(candidates) {
            results.by_location.push(SearchResult {
                event,
                match_type: MatchType::Location,
                score,
                matched_field: field,
                matched_value: None,
            });
            claimed.insert(event.id.as_str());
        }
    }

    for &event in &events {
        if claimed.contains(event.id.as_str()) {
            continue;
        }
        let candidates = event
            .categories
            .iter()
            .map(|c| (c.as_str(), score(Some(c.as_str()), &query, CATEGORY_BASE_SCORE)));

        if let Some((category, score)) = best_match(candidates) {
            results.by_category.push(SearchResult {
                event,
                match_type: MatchType::Category,
                score,
                matched_field: MatchedField::Category,
                matched_value: Some(category.to_string()),
            });
            claimed.insert(event.id.as_str());
        }
    }

    for &event in &events {
        if claimed.contains(event.id.as_str()) {
            continue;
        }
        let score = score(event.description.as_deref(), &query, OTHER_BASE_SCORE);
        if score > 0 {
            results.by_other.push(SearchResult {
                event,
                match_type: MatchType::Other,
                score,
                matched_field: MatchedField::Description,
                matched_value: None,
            });
            claimed.insert(event.id.as_str());
        }
    }

    rank(&mut results.by_name, options.max_name);
    rank(&mut results.by_location, options.max_location);
    rank(&mut results.by_category, options.max_category);
    rank(&mut results.by_other, options.max_other);

    results
}

/// Stable sort by descending score, then cap.
fn rank(results: &mut Vec<SearchResult>, cap: usize) {
    results.sort_by(|a, b| b.score.cmp(&a.score));
    results.truncate(cap);
}
