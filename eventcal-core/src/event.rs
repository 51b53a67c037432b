//! The normalized event record every query operates on.

use std::fmt;

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::vocabulary::{Category, Continent, event_color};

/// A validated event.
///
/// Records are built once by the loader and never mutated afterwards;
/// the query engines only hand out references to them.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct EventRecord {
    /// File stem of the source file, e.g. `2026-02-17_ethdenver`
    pub id: String,
    pub title: String,
    pub start_date: NaiveDate,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub end_date: Option<NaiveDate>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    /// Canonical event homepage
    pub url: String,

    // Location
    /// "venue, city, country" with missing parts left out
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub location: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub location_city: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub location_country: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub location_venue: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub location_continent: Option<Continent>,

    // Classification
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub categories: Vec<Category>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub tags: Vec<String>,

    // Social links (display only)
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub twitter_url: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub telegram_url: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub discord_url: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub farcaster_url: Option<String>,
}

impl EventRecord {
    /// Minimal single-day event; optional fields are left empty.
    pub fn new(id: impl Into<String>, title: impl Into<String>, start_date: NaiveDate) -> Self {
        EventRecord {
            id: id.into(),
            title: title.into(),
            start_date,
            end_date: None,
            description: None,
            url: String::new(),
            location: None,
            location_city: None,
            location_country: None,
            location_venue: None,
            location_continent: None,
            categories: Vec::new(),
            tags: Vec::new(),
            twitter_url: None,
            telegram_url: None,
            discord_url: None,
            farcaster_url: None,
        }
    }

    /// Last day of the event (the start date for single-day events).
    pub fn last_day(&self) -> NaiveDate {
        self.end_date.unwrap_or(self.start_date)
    }

    pub fn is_multi_day(&self) -> bool {
        self.end_date.is_some_and(|end| end != self.start_date)
    }

    pub fn color(&self) -> &'static str {
        event_color(&self.categories)
    }

    /// Social links that are set, as (network, url) pairs.
    pub fn social_links(&self) -> Vec<(&'static str, &str)> {
        [
            ("twitter", &self.twitter_url),
            ("telegram", &self.telegram_url),
            ("discord", &self.discord_url),
            ("farcaster", &self.farcaster_url),
        ]
        .into_iter()
        .filter_map(|(name, url)| url.as_deref().map(|u| (name, u)))
        .collect()
    }
}

impl fmt::Display for EventRecord {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{}", self.title)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn date(s: &str) -> NaiveDate {
        NaiveDate::parse_from_str(s, "%Y-%m-%d").unwrap()
    }

    #[test]
    fn test_serializes_camel_case_and_omits_missing_fields() {
        let mut event = EventRecord::new("2026-03-10_devcon", "Devcon", date("2026-03-10"));
        event.end_date = Some(date("2026-03-12"));
        event.location_continent = Some(Continent::Europe);
        event.categories = vec![Category::Conference];

        let json = serde_json::to_value(&event).unwrap();

        assert_eq!(json["startDate"], "2026-03-10");
        assert_eq!(json["endDate"], "2026-03-12");
        assert_eq!(json["locationContinent"], "europe");
        assert_eq!(json["categories"][0], "conference");
        assert!(json.get("description").is_none());
        assert!(json.get("tags").is_none());
    }

    #[test]
    fn test_last_day_falls_back_to_start() {
        let mut event = EventRecord::new("a", "A", date("2026-01-30"));
        assert_eq!(event.last_day(), date("2026-01-30"));
        assert!(!event.is_multi_day());

        event.end_date = Some(date("2026-02-02"));
        assert_eq!(event.last_day(), date("2026-02-02"));
        assert!(event.is_multi_day());
    }
}
