use chrono::NaiveDate;

use crate::calendar::month::YearMonth;
use crate::event::EventRecord;

/// True if the event takes place on `day`.
///
/// Single-day events occur only on their start date; multi-day events on
/// every day of `[start, end]`.
pub fn occurs_on(event: &EventRecord, day: NaiveDate) -> bool {
    if day == event.start_date || Some(day) == event.end_date {
        return true;
    }
    match event.end_date {
        Some(end) => event.start_date <= day && day <= end,
        None => false,
    }
}

/// True if any day of the event's span falls in `month`.
pub fn occurs_in_month(event: &EventRecord, month: YearMonth) -> bool {
    event.start_date <= month.last_day() && event.last_day() >= month.first_day()
}

pub fn events_on_day<'a, I>(events: I, day: NaiveDate) -> Vec<&'a EventRecord>
where
    I: IntoIterator<Item = &'a EventRecord>,
{
    events
        .into_iter()
        .filter(|event| occurs_on(event, day))
        .collect()
}

pub fn events_in_month<'a, I>(events: I, month: YearMonth) -> Vec<&'a EventRecord>
where
    I: IntoIterator<Item = &'a EventRecord>,
{
    events
        .into_iter()
        .filter(|event| occurs_in_month(event, month))
        .collect()
}
