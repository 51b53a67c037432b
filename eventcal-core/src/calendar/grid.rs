use std::fmt;
use std::iter;
use std::str::FromStr;

use chrono::{Datelike, Duration, NaiveDate};

use crate::calendar::month::YearMonth;

/// How many months the grid view shows at once.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ViewMode {
    #[default]
    OneMonth,
    ThreeMonths,
    SixMonths,
}

impl ViewMode {
    pub fn month_count(&self) -> u32 {
        match self {
            ViewMode::OneMonth => 1,
            ViewMode::ThreeMonths => 3,
            ViewMode::SixMonths => 6,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            ViewMode::OneMonth => "1M",
            ViewMode::ThreeMonths => "3M",
            ViewMode::SixMonths => "6M",
        }
    }

    /// Month reached by paging `pages` views forward (negative goes back).
    pub fn step(&self, current: YearMonth, pages: i32) -> YearMonth {
        current.add_months(pages.saturating_mul(self.month_count() as i32))
    }
}

impl fmt::Display for ViewMode {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl FromStr for ViewMode {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_uppercase().as_str() {
            "1M" => Ok(ViewMode::OneMonth),
            "3M" => Ok(ViewMode::ThreeMonths),
            "6M" => Ok(ViewMode::SixMonths),
            _ => Err(format!("Unknown view '{}'. Expected 1M, 3M or 6M", s)),
        }
    }
}

/// Days shown in a month grid: whole Monday-first weeks from the week of
/// the 1st to the week of the last day. Clamped at the ends of the
/// representable date range.
pub fn month_grid(month: YearMonth) -> Vec<NaiveDate> {
    let first = month.first_day();
    let last = month.last_day();

    let lead = Duration::days(first.weekday().num_days_from_monday() as i64);
    let trail = Duration::days(6 - last.weekday().num_days_from_monday() as i64);
    let start = first.checked_sub_signed(lead).unwrap_or(NaiveDate::MIN);
    let end = last.checked_add_signed(trail).unwrap_or(NaiveDate::MAX);

    iter::successors(Some(start), |day| day.succ_opt())
        .take_while(|day| *day <= end)
        .collect()
}

pub fn months_to_show(current: YearMonth, mode: ViewMode) -> Vec<YearMonth> {
    (0..mode.month_count() as i32)
        .map(|i| current.add_months(i))
        .collect()
}

/// Heading for the grid view, e.g. "March 2026", "Mar - Aug 2026" or
/// "Nov 26 - Apr 27".
pub fn view_title(current: YearMonth, mode: ViewMode) -> String {
    if mode == ViewMode::OneMonth {
        return current.label();
    }

    let last = current.add_months(mode.month_count() as i32 - 1);
    let (first_day, last_day) = (current.first_day(), last.first_day());

    if current.year() == last.year() {
        format!("{} - {}", first_day.format("%b"), last_day.format("%b %Y"))
    } else {
        format!("{} - {}", first_day.format("%b %y"), last_day.format("%b %y"))
    }
}
