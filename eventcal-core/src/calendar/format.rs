use chrono::NaiveDate;

/// Short date label for list rows: "Mar 10", "10-12 Mar", "Mar 30 - Apr 2".
pub fn format_date_compact(start: NaiveDate, end: Option<NaiveDate>) -> String {
    let Some(end) = end else {
        return start.format("%b %-d").to_string();
    };

    if start.format("%b").to_string() == end.format("%b").to_string() {
        format!("{}-{} {}", start.format("%-d"), end.format("%-d"), start.format("%b"))
    } else {
        format!("{} - {}", start.format("%b %-d"), end.format("%b %-d"))
    }
}

/// Long date label for detail views: "March 10, 2026",
/// "March 10 - 12, 2026", "March 30, 2026 - April 2, 2026".
pub fn format_date_range(start: NaiveDate, end: Option<NaiveDate>) -> String {
    let Some(end) = end else {
        return start.format("%B %-d, %Y").to_string();
    };

    if start.format("%B %Y").to_string() == end.format("%B %Y").to_string() {
        format!("{} - {}", start.format("%B %-d"), end.format("%-d, %Y"))
    } else {
        format!("{} - {}", start.format("%B %-d, %Y"), end.format("%B %-d, %Y"))
    }
}
