//! On-disk event file format and its validation.
//!
//! An event file is a YAML document. Parsing into [`EventFile`] only checks
//! the document shape; [`EventFile::validate`] then checks every field
//! constraint and either produces a normalized [`EventRecord`] or the full
//! list of problems. Records are never partially admitted.

use std::fmt;
use std::sync::LazyLock;

use chrono::NaiveDate;
use regex::Regex;
use serde::{Deserialize, Serialize};

use crate::event::EventRecord;
use crate::vocabulary::{Category, Continent};

pub const MAX_TITLE_LEN: usize = 100;
pub const MAX_DESCRIPTION_LEN: usize = 500;
pub const MAX_CATEGORIES: usize = 2;
pub const MAX_TAGS: usize = 10;
pub const MAX_TAG_LEN: usize = 50;
pub const MAX_VENUE_LEN: usize = 200;
pub const MAX_CITY_LEN: usize = 100;
pub const MAX_COUNTRY_LEN: usize = 100;

static DATE_FORMAT: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^\d{4}-\d{2}-\d{2}$").expect("valid date regex"));

/// Raw event document as written in `events/<year>/<name>.yaml`.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct EventFile {
    pub title: String,
    pub start_date: String,
    pub url: String,

    pub end_date: Option<String>,
    pub description: Option<String>,
    pub categories: Option<Vec<String>>,
    pub location: Option<LocationFile>,
    pub social: Option<SocialFile>,
    pub tags: Option<Vec<String>>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct LocationFile {
    pub venue: Option<String>,
    pub city: Option<String>,
    pub country: Option<String>,
    pub continent: Option<String>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct SocialFile {
    pub twitter: Option<String>,
    pub telegram: Option<String>,
    pub discord: Option<String>,
    pub farcaster: Option<String>,
}

/// One failed constraint on one field.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ValidationIssue {
    pub field: String,
    pub message: String,
}

impl ValidationIssue {
    fn new(field: impl Into<String>, message: impl Into<String>) -> Self {
        ValidationIssue {
            field: field.into(),
            message: message.into(),
        }
    }
}

impl fmt::Display for ValidationIssue {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{}: {}", self.field, self.message)
    }
}

impl EventFile {
    pub fn from_yaml(content: &str) -> Result<Self, serde_yaml::Error> {
        serde_yaml::from_str(content)
    }

    /// Check every constraint and build the normalized record.
    pub fn validate(self, id: &str) -> Result<EventRecord, Vec<ValidationIssue>> {
        let mut issues = Vec::new();

        let title_len = self.title.chars().count();
        if title_len == 0 {
            issues.push(ValidationIssue::new("title", "must not be empty"));
        } else if title_len > MAX_TITLE_LEN {
            issues.push(too_long("title", MAX_TITLE_LEN));
        }

        let start_date = parse_date("startDate", &self.start_date, &mut issues);
        let end_date = self
            .end_date
            .as_deref()
            .and_then(|s| parse_date("endDate", s, &mut issues));

        if matches!((start_date, end_date), (Some(start), Some(end)) if end < start) {
            issues.push(ValidationIssue::new(
                "endDate",
                "End date must be on or after start date",
            ));
        }

        check_url("url", &self.url, &mut issues);

        check_max_len(
            "description",
            self.description.as_deref(),
            MAX_DESCRIPTION_LEN,
            &mut issues,
        );

        let categories = parse_categories(self.categories.unwrap_or_default(), &mut issues);
        let tags = check_tags(self.tags.unwrap_or_default(), &mut issues);

        let location = self.location.unwrap_or_default();
        check_max_len("location.venue", location.venue.as_deref(), MAX_VENUE_LEN, &mut issues);
        check_max_len("location.city", location.city.as_deref(), MAX_CITY_LEN, &mut issues);
        check_max_len("location.country", location.country.as_deref(), MAX_COUNTRY_LEN, &mut issues);
        let continent = location.continent.as_deref().and_then(|c| {
            c.parse::<Continent>()
                .map_err(|e| issues.push(ValidationIssue::new("location.continent", e)))
                .ok()
        });

        let social = self.social.unwrap_or_default();
        for (field, value) in [
            ("social.twitter", &social.twitter),
            ("social.telegram", &social.telegram),
            ("social.discord", &social.discord),
            ("social.farcaster", &social.farcaster),
        ] {
            if let Some(value) = value {
                check_url(field, value, &mut issues);
            }
        }

        let Some(start_date) = start_date else {
            return Err(issues);
        };
        if !issues.is_empty() {
            return Err(issues);
        }

        let display_location = format_location(&location);

        Ok(EventRecord {
            id: id.to_string(),
            title: self.title,
            start_date,
            end_date,
            description: self.description,
            url: self.url,
            location: display_location,
            location_city: location.city,
            location_country: location.country,
            location_venue: location.venue,
            location_continent: continent,
            categories,
            tags,
            twitter_url: social.twitter,
            telegram_url: social.telegram,
            discord_url: social.discord,
            farcaster_url: social.farcaster,
        })
    }
}

/// Join venue, city and country into one display string.
pub fn format_location(location: &LocationFile) -> Option<String> {
    let parts: Vec<&str> = [&location.venue, &location.city, &location.country]
        .into_iter()
        .filter_map(|part| part.as_deref())
        .filter(|part| !part.is_empty())
        .collect();

    if parts.is_empty() {
        None
    } else {
        Some(parts.join(", "))
    }
}

fn too_long(field: &str, max: usize) -> ValidationIssue {
    ValidationIssue::new(field, format!("must be at most {} characters", max))
}

fn parse_date(field: &str, value: &str, issues: &mut Vec<ValidationIssue>) -> Option<NaiveDate> {
    if !DATE_FORMAT.is_match(value) {
        issues.push(ValidationIssue::new(field, "Date must be YYYY-MM-DD format"));
        return None;
    }
    match NaiveDate::parse_from_str(value, "%Y-%m-%d") {
        Ok(date) => Some(date),
        Err(_) => {
            issues.push(ValidationIssue::new(
                field,
                format!("'{}' is not a valid calendar date", value),
            ));
            None
        }
    }
}

fn check_url(field: &str, value: &str, issues: &mut Vec<ValidationIssue>) {
    if url::Url::parse(value).is_err() {
        issues.push(ValidationIssue::new(field, format!("'{}' is not a valid URL", value)));
    }
}

fn check_max_len(field: &str, value: Option<&str>, max: usize, issues: &mut Vec<ValidationIssue>) {
    if value.is_some_and(|v| v.chars().count() > max) {
        issues.push(too_long(field, max));
    }
}

fn parse_categories(raw: Vec<String>, issues: &mut Vec<ValidationIssue>) -> Vec<Category> {
    if raw.len() > MAX_CATEGORIES {
        issues.push(ValidationIssue::new(
            "categories",
            format!("at most {} categories allowed", MAX_CATEGORIES),
        ));
    }

    let mut categories = Vec::with_capacity(raw.len());
    for (i, code) in raw.iter().enumerate() {
        match code.parse::<Category>() {
            Ok(category) if !categories.contains(&category) => categories.push(category),
            Ok(_) => {}
            Err(e) => issues.push(ValidationIssue::new(format!("categories[{}]", i), e)),
        }
    }
    categories
}

fn check_tags(tags: Vec<String>, issues: &mut Vec<ValidationIssue>) -> Vec<String> {
    if tags.len() > MAX_TAGS {
        issues.push(ValidationIssue::new(
            "tags",
            format!("at most {} tags allowed", MAX_TAGS),
        ));
    }
    for (i, tag) in tags.iter().enumerate() {
        if tag.chars().count() > MAX_TAG_LEN {
            issues.push(too_long(&format!("tags[{}]", i), MAX_TAG_LEN));
        }
    }
    tags
}

#[cfg(test)]
mod tests {
    use super::*;

    const VALID: &str = r#"
title: ETHDenver
startDate: 2026-02-17
endDate: "2026-02-21"
url: https://ethdenver.com
description: The largest Web3 week in North America.
categories: [conference, hackathon]
location:
  venue: National Western Center
  city: Denver
  country: USA
  continent: north-america
social:
  twitter: https://x.com/ethdenver
tags: [ethereum]
"#;

    fn issues_for(yaml: &str) -> Vec<ValidationIssue> {
        EventFile::from_yaml(yaml)
            .expect("Should parse")
            .validate("x")
            .expect_err("Should be rejected")
    }

    #[test]
    fn test_valid_file_is_normalized() {
        let event = EventFile::from_yaml(VALID)
            .unwrap()
            .validate("2026-02-17_ethdenver")
            .expect("Should validate");

        assert_eq!(event.id, "2026-02-17_ethdenver");
        assert_eq!(event.start_date, NaiveDate::from_ymd_opt(2026, 2, 17).unwrap());
        assert_eq!(event.end_date, NaiveDate::from_ymd_opt(2026, 2, 21));
        assert_eq!(
            event.location.as_deref(),
            Some("National Western Center, Denver, USA")
        );
        assert_eq!(event.location_continent, Some(Continent::NorthAmerica));
        assert_eq!(event.categories, vec![Category::Conference, Category::Hackathon]);
        assert_eq!(event.twitter_url.as_deref(), Some("https://x.com/ethdenver"));
        assert_eq!(event.tags, vec!["ethereum".to_string()]);
    }

    #[test]
    fn test_end_before_start_is_rejected() {
        let issues = issues_for(
            "title: T\nstartDate: 2026-03-12\nendDate: 2026-03-10\nurl: https://t.example\n",
        );
        assert_eq!(issues.len(), 1);
        assert_eq!(issues[0].field, "endDate");
    }

    #[test]
    fn test_bad_date_format_and_calendar_date() {
        let issues = issues_for("title: T\nstartDate: 2026-3-1\nurl: https://t.example\n");
        assert_eq!(issues[0].message, "Date must be YYYY-MM-DD format");

        let issues = issues_for("title: T\nstartDate: 2026-02-30\nurl: https://t.example\n");
        assert_eq!(issues[0].field, "startDate");
    }

    #[test]
    fn test_all_issues_are_collected() {
        let issues = issues_for(
            "title: \"\"\nstartDate: 2026-03-01\nurl: not a url\ncategories: [conference, party]\nlocation:\n  continent: atlantis\n",
        );
        let fields: Vec<&str> = issues.iter().map(|i| i.field.as_str()).collect();
        assert_eq!(
            fields,
            vec!["title", "url", "categories[1]", "location.continent"]
        );
    }

    #[test]
    fn test_too_many_categories_and_tags() {
        let tags: Vec<String> = (0..11).map(|i| format!("t{}", i)).collect();
        let yaml = format!(
            "title: T\nstartDate: 2026-03-01\nurl: https://t.example\ncategories: [conference, meetup, hackathon]\ntags: [{}]\n",
            tags.join(", ")
        );
        let fields: Vec<String> = issues_for(&yaml).into_iter().map(|i| i.field).collect();
        assert_eq!(fields, vec!["categories", "tags"]);
    }

    #[test]
    fn test_format_location_skips_missing_parts() {
        let location = LocationFile {
            venue: None,
            city: Some("Lisbon".into()),
            country: Some("Portugal".into()),
            continent: None,
        };
        assert_eq!(format_location(&location).as_deref(), Some("Lisbon, Portugal"));
        assert_eq!(format_location(&LocationFile::default()), None);
    }
}
