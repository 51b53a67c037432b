//! Calendar windowing: which events fall on a day, inside a month, or in
//! the month-grouped list view.
//!
//! Day and grid views consider an event's whole `[start, end]` span. The
//! list view keys off the start month only, so an event starting Jan 30
//! and ending Feb 2 is listed under January yet still shows on February
//! grid days.

mod format;
mod grid;
mod grouping;
mod month;
mod occurrence;

pub use format::{format_date_compact, format_date_range};
pub use grid::{ViewMode, month_grid, months_to_show, view_title};
pub use grouping::{MonthGroup, group_by_month};
pub use month::{MonthWindow, YearMonth};
pub use occurrence::{events_in_month, events_on_day, occurs_in_month, occurs_on};
