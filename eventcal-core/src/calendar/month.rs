//! Month values and inclusive month windows.

use std::fmt;
use std::str::FromStr;

use chrono::{Datelike, Local, Months, NaiveDate};

use crate::error::EventcalError;

/// A calendar month. Ordered chronologically.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct YearMonth {
    // Always the 1st of the month
    first: NaiveDate,
}

impl YearMonth {
    /// `None` if `month` is not 1..=12 or the year is out of range.
    pub fn new(year: i32, month: u32) -> Option<Self> {
        NaiveDate::from_ymd_opt(year, month, 1).map(|first| YearMonth { first })
    }

    pub fn of(date: NaiveDate) -> Self {
        YearMonth {
            first: date.with_day(1).unwrap_or(date),
        }
    }

    pub fn current() -> Self {
        Self::of(Local::now().date_naive())
    }

    pub fn year(&self) -> i32 {
        self.first.year()
    }

    /// 1-indexed
    pub fn month(&self) -> u32 {
        self.first.month()
    }

    pub fn first_day(&self) -> NaiveDate {
        self.first
    }

    pub fn last_day(&self) -> NaiveDate {
        self.first
            .checked_add_months(Months::new(1))
            .and_then(|next| next.pred_opt())
            .unwrap_or(NaiveDate::MAX)
    }

    /// Shift by `n` months (negative goes back). Saturates at the
    /// representable date range.
    pub fn add_months(&self, n: i32) -> Self {
        let shifted = if n >= 0 {
            self.first.checked_add_months(Months::new(n.unsigned_abs()))
        } else {
            self.first.checked_sub_months(Months::new(n.unsigned_abs()))
        };
        shifted.map(|first| YearMonth { first }).unwrap_or(*self)
    }

    pub fn contains(&self, date: NaiveDate) -> bool {
        Self::of(date) == *self
    }

    /// e.g. "March 2026"
    pub fn label(&self) -> String {
        self.first.format("%B %Y").to_string()
    }
}

impl fmt::Display for YearMonth {
    /// `YYYY-MM`
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{}", self.first.format("%Y-%m"))
    }
}

impl FromStr for YearMonth {
    type Err = EventcalError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let (year, month) = s
            .split_once('-')
            .ok_or_else(|| EventcalError::InvalidMonth(s.to_string()))?;

        let year: i32 = year
            .parse()
            .map_err(|_| EventcalError::InvalidMonth(s.to_string()))?;
        let month: u32 = month
            .parse()
            .map_err(|_| EventcalError::InvalidMonth(s.to_string()))?;

        YearMonth::new(year, month).ok_or_else(|| EventcalError::InvalidMonth(s.to_string()))
    }
}

/// Inclusive range of months.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MonthWindow {
    pub start: YearMonth,
    pub end: YearMonth,
}

impl MonthWindow {
    pub fn new(start: YearMonth, end: YearMonth) -> Self {
        MonthWindow { start, end }
    }

    /// The month of `today` plus the `months - 1` months after it.
    pub fn ahead(today: NaiveDate, months: u32) -> Self {
        let start = YearMonth::of(today);
        let span = months.saturating_sub(1).min(i32::MAX as u32) as i32;
        MonthWindow::new(start, start.add_months(span))
    }

    /// Window starting at the current month.
    pub fn upcoming(months: u32) -> Self {
        Self::ahead(Local::now().date_naive(), months)
    }

    pub fn contains_month(&self, month: YearMonth) -> bool {
        self.start <= month && month <= self.end
    }

    pub fn contains(&self, date: NaiveDate) -> bool {
        self.contains_month(YearMonth::of(date))
    }
}
