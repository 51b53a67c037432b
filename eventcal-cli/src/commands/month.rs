use anyhow::Result;
use chrono::{Datelike, NaiveDate};
use eventcal_core::EventRecord;
use eventcal_core::calendar::{
    ViewMode, YearMonth, events_in_month, events_on_day, month_grid, months_to_show, view_title,
};
use owo_colors::OwoColorize;

use crate::render::{Render, hex_to_rgb};
use crate::session::Session;

const WEEKDAYS: &str = "Mo  Tu  We  Th  Fr  Sa  Su";

/// One day of a month grid.
#[derive(Debug, Clone, PartialEq, Eq)]
struct DayCell {
    date: NaiveDate,
    in_month: bool,
    count: usize,
    /// Accent color of the first event that day
    color: Option<&'static str>,
}

fn grid_cells(events: &[&EventRecord], month: YearMonth) -> Vec<DayCell> {
    month_grid(month)
        .into_iter()
        .map(|date| {
            let on_day = events_on_day(events.iter().copied(), date);
            DayCell {
                date,
                in_month: month.contains(date),
                count: on_day.len(),
                color: on_day.first().map(|e| EventRecord::color(e)),
            }
        })
        .collect()
}

fn render_cell(cell: &DayCell) -> String {
    let day = format!("{:>2}", cell.date.day());

    if !cell.in_month {
        return format!("{}  ", day.dimmed());
    }

    match cell.color.and_then(hex_to_rgb) {
        Some((r, g, b)) if cell.count > 0 => {
            let marker = if cell.count > 1 { "+" } else { "•" };
            format!("{}{} ", day.truecolor(r, g, b).bold(), marker.truecolor(r, g, b))
        }
        _ => format!("{}  ", day),
    }
}

pub fn run(session: &Session, current: YearMonth, view: ViewMode) -> Result<()> {
    let events = session.filtered();

    println!("{}", view_title(current, view).bold());

    for month in months_to_show(current, view) {
        println!();
        if view != ViewMode::OneMonth {
            println!("{}", month.label().bold());
        }
        println!("{}", WEEKDAYS.dimmed());

        let cells = grid_cells(&events, month);
        for week in cells.chunks(7) {
            let line: String = week.iter().map(render_cell).collect();
            println!("{}", line.trim_end());
        }

        let in_month = events_in_month(events.iter().copied(), month);
        if !in_month.is_empty() {
            println!();
            for event in in_month {
                println!("  {}", event.render());
            }
        }
    }

    println!();
    println!(
        "{}",
        format!(
            "prev: {}   next: {}",
            view.step(current, -1),
            view.step(current, 1)
        )
        .dimmed()
    );

    Ok(())
}
