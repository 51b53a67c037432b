use std::collections::BTreeMap;

use crate::calendar::month::{MonthWindow, YearMonth};
use crate::event::EventRecord;

/// One month bucket of the list view.
#[derive(Debug, Clone, PartialEq)]
pub struct MonthGroup<'a> {
    pub month: YearMonth,
    pub events: Vec<&'a EventRecord>,
}

impl MonthGroup<'_> {
    /// `YYYY-MM`
    pub fn key(&self) -> String {
        self.month.to_string()
    }

    /// e.g. "March 2026"
    pub fn label(&self) -> String {
        self.month.label()
    }
}

/// Bucket events by start month, keeping only start months inside `window`.
///
/// Buckets come out in chronological order and events within a bucket are
/// sorted by start date (stable, so input order breaks ties).
pub fn group_by_month<'a, I>(events: I, window: &MonthWindow) -> Vec<MonthGroup<'a>>
where
    I: IntoIterator<Item = &'a EventRecord>,
{
    let mut in_window: Vec<&EventRecord> = events
        .into_iter()
        .filter(|event| window.contains(event.start_date))
        .collect();
    in_window.sort_by_key(|event| event.start_date);

    let mut buckets: BTreeMap<YearMonth, Vec<&EventRecord>> = BTreeMap::new();
    for event in in_window {
        buckets
            .entry(YearMonth::of(event.start_date))
            .or_default()
            .push(event);
    }

    buckets
        .into_iter()
        .map(|(month, events)| MonthGroup { month, events })
        .collect()
}
