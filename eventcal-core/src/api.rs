//! Read-only JSON API semantics shared by the HTTP server.
//!
//! `GET /api/events?year=YYYY&month=MM` narrows the collection by start
//! date. Malformed or out-of-range parameters are ignored rather than
//! rejected: `month` only applies together with a usable `year`.

use chrono::Datelike;
use serde::Serialize;

use crate::event::EventRecord;

/// Raw query string parameters, kept as strings so bad input can be
/// ignored instead of failing extraction.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct EventsQuery {
    pub year: Option<String>,
    pub month: Option<String>,
}

/// Start-date constraint derived from [`EventsQuery`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct StartDateFilter {
    pub year: Option<i32>,
    /// 1-indexed
    pub month: Option<u32>,
}

impl EventsQuery {
    /// Build from decoded query pairs. The first `year` and `month` win;
    /// repeats and unknown keys are ignored.
    pub fn from_pairs<I, K, V>(pairs: I) -> Self
    where
        I: IntoIterator<Item = (K, V)>,
        K: AsRef<str>,
        V: Into<String>,
    {
        let mut query = EventsQuery::default();
        for (key, value) in pairs {
            let slot = match key.as_ref() {
                "year" => &mut query.year,
                "month" => &mut query.month,
                _ => continue,
            };
            if slot.is_none() {
                *slot = Some(value.into());
            }
        }
        query
    }

    pub fn start_date_filter(&self) -> StartDateFilter {
        let year = self
            .year
            .as_deref()
            .and_then(|y| y.trim().parse::<i32>().ok())
            .filter(|y| (1..=9999).contains(y));

        let month = year.and(
            self.month
                .as_deref()
                .and_then(|m| m.trim().parse::<u32>().ok())
                .filter(|m| (1..=12).contains(m)),
        );

        StartDateFilter { year, month }
    }
}

impl StartDateFilter {
    pub fn matches(&self, event: &EventRecord) -> bool {
        let start = event.start_date;
        self.year.is_none_or(|y| start.year() == y) && self.month.is_none_or(|m| start.month() == m)
    }
}

/// Body of `GET /api/events`.
#[derive(Debug, Clone, Serialize)]
pub struct EventsResponse {
    pub events: Vec<EventRecord>,
    pub count: usize,
}

impl EventsResponse {
    pub fn new(events: Vec<EventRecord>) -> Self {
        let count = events.len();
        EventsResponse { events, count }
    }
}

/// Apply the query to the collection and build the response body.
pub fn select_events(events: Vec<EventRecord>, query: &EventsQuery) -> EventsResponse {
    let filter = query.start_date_filter();
    EventsResponse::new(events.into_iter().filter(|event| filter.matches(event)).collect())
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;

    fn events() -> Vec<EventRecord> {
        [
            ("a", 2025, 12, 5),
            ("b", 2026, 2, 17),
            ("c", 2026, 2, 28),
            ("d", 2026, 3, 1),
        ]
        .into_iter()
        .map(|(id, y, m, d)| EventRecord::new(id, id, NaiveDate::from_ymd_opt(y, m, d).unwrap()))
        .collect()
    }

    fn query(year: Option<&str>, month: Option<&str>) -> EventsQuery {
        EventsQuery {
            year: year.map(String::from),
            month: month.map(String::from),
        }
    }

    fn ids(response: &EventsResponse) -> Vec<String> {
        response.events.iter().map(|e| e.id.clone()).collect()
    }

    #[test]
    fn test_no_params_returns_everything() {
        let response = select_events(events(), &EventsQuery::default());
        assert_eq!(response.count, 4);
    }

    #[test]
    fn test_year_and_month() {
        assert_eq!(ids(&select_events(events(), &query(Some("2026"), None))), vec!["b", "c", "d"]);
        assert_eq!(
            ids(&select_events(events(), &query(Some("2026"), Some("02")))),
            vec!["b", "c"]
        );
    }

    #[test]
    fn test_malformed_params_are_ignored() {
        assert_eq!(select_events(events(), &query(Some("soon"), None)).count, 4);
        assert_eq!(select_events(events(), &query(None, Some("2"))).count, 4);
        assert_eq!(
            ids(&select_events(events(), &query(Some("2026"), Some("13")))),
            vec!["b", "c", "d"]
        );
        assert_eq!(select_events(events(), &query(Some("2026"), Some("feb"))).count, 3);
        assert_eq!(select_events(events(), &query(Some("0"), Some("2"))).count, 4);
    }

    #[test]
    fn test_from_pairs_keeps_first_value() {
        let parsed = EventsQuery::from_pairs([
            ("year", "2026"),
            ("year", "2025"),
            ("page", "2"),
            ("month", "3"),
        ]);
        assert_eq!(parsed, query(Some("2026"), Some("3")));
        assert_eq!(ids(&select_events(events(), &parsed)), vec!["d"]);

        assert_eq!(EventsQuery::from_pairs(Vec::<(String, String)>::new()), EventsQuery::default());
    }

    #[test]
    fn test_response_shape() {
        let json = serde_json::to_value(select_events(events(), &query(Some("2025"), None))).unwrap();
        assert_eq!(json["count"], 1);
        assert_eq!(json["events"][0]["id"], "a");
        assert_eq!(json["events"][0]["startDate"], "2025-12-05");
    }
}
