//! Faceted filtering over the event collection.
//!
//! Values within one facet are OR'd, active facets are AND'd. An event
//! lacking the field an active facet looks at fails that facet.

use std::collections::{BTreeSet, HashSet};

use serde::Serialize;
use tracing::warn;

use crate::event::EventRecord;
use crate::vocabulary::{Category, Continent};

/// Active facet selections. An empty list means the facet is inactive.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FacetSelection {
    /// Continent codes and/or country names
    pub locations: Vec<String>,
    pub categories: Vec<Category>,
    pub tags: Vec<String>,
}

impl FacetSelection {
    /// Build a selection from comma-separated query values, e.g.
    /// `location=europe,Germany&category=meetup`.
    ///
    /// Blank entries are dropped and unknown category codes are ignored.
    pub fn from_params(location: Option<&str>, category: Option<&str>, tag: Option<&str>) -> Self {
        FacetSelection {
            locations: split_list(location),
            categories: split_list(category)
                .iter()
                .filter_map(|code| match code.parse::<Category>() {
                    Ok(category) => Some(category),
                    Err(e) => {
                        warn!("Ignoring category filter: {}", e);
                        None
                    }
                })
                .collect(),
            tags: split_list(tag),
        }
    }

    pub fn is_active(&self) -> bool {
        !self.locations.is_empty() || !self.categories.is_empty() || !self.tags.is_empty()
    }

    pub fn matches(&self, event: &EventRecord) -> bool {
        self.matches_location(event) && self.matches_category(event) && self.matches_tag(event)
    }

    fn matches_location(&self, event: &EventRecord) -> bool {
        if self.locations.is_empty() {
            return true;
        }
        let continent = event.location_continent.map(|c| c.as_str());
        let country = event.location_country.as_deref();

        self.locations
            .iter()
            .any(|selected| Some(selected.as_str()) == continent || Some(selected.as_str()) == country)
    }

    fn matches_category(&self, event: &EventRecord) -> bool {
        self.categories.is_empty() || event.categories.iter().any(|c| self.categories.contains(c))
    }

    fn matches_tag(&self, event: &EventRecord) -> bool {
        self.tags.is_empty() || event.tags.iter().any(|t| self.tags.contains(t))
    }
}

fn split_list(value: Option<&str>) -> Vec<String> {
    value
        .unwrap_or_default()
        .split(',')
        .map(str::trim)
        .filter(|s| !s.is_empty())
        .map(String::from)
        .collect()
}

/// Events satisfying every active facet, in input order.
pub fn filter_events<'a, I>(events: I, selection: &FacetSelection) -> Vec<&'a EventRecord>
where
    I: IntoIterator<Item = &'a EventRecord>,
{
    if !selection.is_active() {
        return events.into_iter().collect();
    }

    events
        .into_iter()
        .filter(|event| selection.matches(event))
        .collect()
}

/// Option group shown as a heading in grouped pickers.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum OptionGroup {
    Continent,
    Country,
}

impl OptionGroup {
    pub fn label(&self) -> &'static str {
        match self {
            OptionGroup::Continent => "Continent",
            OptionGroup::Country => "Country",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct FilterOption {
    pub value: String,
    pub label: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub group: Option<OptionGroup>,
}

/// Continents present in the data (canonical order), then countries present
/// (alphabetical).
pub fn location_options<'a, I>(events: I) -> Vec<FilterOption>
where
    I: IntoIterator<Item = &'a EventRecord>,
{
    let mut used_continents: HashSet<Continent> = HashSet::new();
    let mut used_countries: BTreeSet<&str> = BTreeSet::new();

    for event in events {
        if let Some(continent) = event.location_continent {
            used_continents.insert(continent);
        }
        if let Some(country) = event.location_country.as_deref() {
            used_countries.insert(country);
        }
    }

    let continents = Continent::ALL
        .into_iter()
        .filter(|c| used_continents.contains(c))
        .map(|c| FilterOption {
            value: c.as_str().to_string(),
            label: c.label().to_string(),
            group: Some(OptionGroup::Continent),
        });

    let countries = used_countries.into_iter().map(|country| FilterOption {
        value: country.to_string(),
        label: country.to_string(),
        group: Some(OptionGroup::Country),
    });

    continents.chain(countries).collect()
}

/// Every category in the vocabulary, whether or not any event uses it.
pub fn category_options() -> Vec<FilterOption> {
    Category::ALL
        .into_iter()
        .map(|c| FilterOption {
            value: c.as_str().to_string(),
            label: c.label().to_string(),
            group: None,
        })
        .collect()
}

/// Distinct tags present in the data, sorted.
pub fn tag_options<'a, I>(events: I) -> Vec<FilterOption>
where
    I: IntoIterator<Item = &'a EventRecord>,
{
    let tags: BTreeSet<&str> = events
        .into_iter()
        .flat_map(|event| event.tags.iter().map(String::as_str))
        .collect();

    tags.into_iter()
        .map(|tag| FilterOption {
            value: tag.to_string(),
            label: tag.to_string(),
            group: None,
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;
    use proptest::prelude::*;

    fn event(
        id: &str,
        continent: Option<Continent>,
        country: Option<&str>,
        categories: &[Category],
    ) -> EventRecord {
        let mut e = EventRecord::new(id, id, NaiveDate::from_ymd_opt(2026, 3, 1).unwrap());
        e.location_continent = continent;
        e.location_country = country.map(String::from);
        e.categories = categories.to_vec();
        e
    }

    /// 5 events, 3 continents, 2 categories
    fn sample() -> Vec<EventRecord> {
        vec![
            event("berlin-conf", Some(Continent::Europe), Some("Germany"), &[Category::Conference]),
            event("lisbon-meetup", Some(Continent::Europe), Some("Portugal"), &[Category::Meetup]),
            event("denver-conf", Some(Continent::NorthAmerica), Some("USA"), &[Category::Conference]),
            event("paris-conf", Some(Continent::Europe), Some("France"), &[Category::Conference, Category::Meetup]),
            event("bangkok-meetup", Some(Continent::Asia), Some("Thailand"), &[Category::Meetup]),
        ]
    }

    fn ids(events: &[&EventRecord]) -> Vec<String> {
        events.iter().map(|e| e.id.clone()).collect()
    }

    #[test]
    fn test_empty_selection_is_identity() {
        let events = sample();
        let filtered = filter_events(&events, &FacetSelection::default());
        assert_eq!(filtered.len(), events.len());
        assert!(filtered.iter().zip(&events).all(|(a, b)| std::ptr::eq(*a, b)));
    }

    #[test]
    fn test_continent_and_category_are_anded() {
        let events = sample();
        let mut selection = FacetSelection {
            locations: vec!["europe".into()],
            categories: vec![Category::Conference],
            ..Default::default()
        };

        assert_eq!(
            ids(&filter_events(&events, &selection)),
            vec!["berlin-conf", "paris-conf"]
        );

        selection.categories.clear();
        assert_eq!(
            ids(&filter_events(&events, &selection)),
            vec!["berlin-conf", "lisbon-meetup", "paris-conf"]
        );
    }

    #[test]
    fn test_location_matches_continent_or_country() {
        let events = sample();
        let selection = FacetSelection {
            locations: vec!["asia".into(), "USA".into()],
            ..Default::default()
        };
        assert_eq!(
            ids(&filter_events(&events, &selection)),
            vec!["denver-conf", "bangkok-meetup"]
        );
    }

    #[test]
    fn test_missing_field_fails_active_facet() {
        let events = vec![
            event("online", None, None, &[]),
            event("tagged", Some(Continent::Global), None, &[Category::Hackathon]),
        ];
        let selection = FacetSelection {
            locations: vec!["global".into()],
            ..Default::default()
        };
        assert_eq!(ids(&filter_events(&events, &selection)), vec!["tagged"]);

        let selection = FacetSelection {
            tags: vec!["defi".into()],
            ..Default::default()
        };
        assert!(filter_events(&events, &selection).is_empty());
    }

    #[test]
    fn test_from_params_parses_lists() {
        let selection = FacetSelection::from_params(
            Some("europe, Germany,,"),
            Some("meetup,party,hackathon"),
            None,
        );
        assert_eq!(selection.locations, vec!["europe", "Germany"]);
        assert_eq!(selection.categories, vec![Category::Meetup, Category::Hackathon]);
        assert!(selection.tags.is_empty());
        assert!(selection.is_active());
        assert!(!FacetSelection::from_params(None, Some(""), None).is_active());
    }

    #[test]
    fn test_location_options_only_include_present_values() {
        let options = location_options(&sample());
        let values: Vec<&str> = options.iter().map(|o| o.value.as_str()).collect();
        assert_eq!(
            values,
            vec![
                "asia",
                "europe",
                "north-america",
                "France",
                "Germany",
                "Portugal",
                "Thailand",
                "USA"
            ]
        );
        assert_eq!(options[2].label, "North America");
        assert_eq!(options[2].group, Some(OptionGroup::Continent));
        assert_eq!(options[3].group, Some(OptionGroup::Country));
    }

    #[test]
    fn test_category_options_cover_vocabulary() {
        let options = category_options();
        assert_eq!(options.len(), 5);
        assert_eq!(options[4].value, "popup-village");
        assert_eq!(options[4].label, "Popup Village");
    }

    #[test]
    fn test_tag_options_sorted_and_distinct() {
        let mut events = sample();
        events[0].tags = vec!["zk".into(), "defi".into()];
        events[1].tags = vec!["defi".into()];
        let values: Vec<String> = tag_options(&events).into_iter().map(|o| o.value).collect();
        assert_eq!(values, vec!["defi", "zk"]);
    }

    /// Ids of events in either result, in collection order.
    fn union_in_order(events: &[EventRecord], left: &[&EventRecord], right: &[&EventRecord]) -> Vec<String> {
        events
            .iter()
            .filter(|e| {
                left.iter().chain(right).any(|m| std::ptr::eq(*m, *e))
            })
            .map(|e| e.id.clone())
            .collect()
    }

    fn arb_event() -> impl Strategy<Value = EventRecord> {
        (
            "[a-z]{1,8}",
            proptest::option::of(proptest::sample::select(Continent::ALL.to_vec())),
            proptest::option::of(proptest::sample::select(vec!["Germany", "USA", "Japan"])),
            proptest::sample::subsequence(Category::ALL.to_vec(), 0..=2),
        )
            .prop_map(|(id, continent, country, categories)| event(&id, continent, country, &categories))
    }

    proptest! {
        #[test]
        fn prop_empty_selection_preserves_collection(events in proptest::collection::vec(arb_event(), 0..30)) {
            let filtered = filter_events(&events, &FacetSelection::default());
            prop_assert_eq!(filtered.len(), events.len());
            for (a, b) in filtered.iter().zip(&events) {
                prop_assert!(std::ptr::eq(*a, b));
            }
        }

        #[test]
        fn prop_adding_a_facet_never_grows_result(
            events in proptest::collection::vec(arb_event(), 0..30),
            category in proptest::sample::select(Category::ALL.to_vec()),
        ) {
            let location_only = FacetSelection {
                locations: vec!["europe".into(), "USA".into()],
                ..Default::default()
            };
            let both = FacetSelection {
                categories: vec![category],
                ..location_only.clone()
            };
            prop_assert!(
                filter_events(&events, &both).len() <= filter_events(&events, &location_only).len()
            );
        }

        #[test]
        fn prop_location_values_are_unioned(
            events in proptest::collection::vec(arb_event(), 0..30),
            a in proptest::sample::select(vec!["europe", "asia", "Germany", "USA"]),
            b in proptest::sample::select(vec!["north-america", "global", "Japan", "USA"]),
        ) {
            let only = |value: &str| FacetSelection {
                locations: vec![value.to_string()],
                ..Default::default()
            };
            let both = FacetSelection {
                locations: vec![a.to_string(), b.to_string()],
                ..Default::default()
            };
            prop_assert_eq!(
                ids(&filter_events(&events, &both)),
                union_in_order(&events, &filter_events(&events, &only(a)), &filter_events(&events, &only(b)))
            );
        }

        #[test]
        fn prop_category_values_are_unioned(
            events in proptest::collection::vec(arb_event(), 0..30),
            a in proptest::sample::select(Category::ALL.to_vec()),
            b in proptest::sample::select(Category::ALL.to_vec()),
        ) {
            let only = |category: Category| FacetSelection {
                categories: vec![category],
                ..Default::default()
            };
            let both = FacetSelection {
                categories: vec![a, b],
                ..Default::default()
            };
            prop_assert_eq!(
                ids(&filter_events(&events, &both)),
                union_in_order(&events, &filter_events(&events, &only(a)), &filter_events(&events, &only(b)))
            );
        }
    }
}
