use anyhow::Result;
use chrono::NaiveDate;
use eventcal_core::calendar::{events_on_day, format_date_range};
use owo_colors::OwoColorize;

use crate::render::Render;
use crate::session::Session;

pub fn run(session: &Session, date: NaiveDate) -> Result<()> {
    let events = events_on_day(session.filtered(), date);

    println!("{}", format_date_range(date, None).bold());

    if events.is_empty() {
        println!("  {}", "No events".dimmed());
        return Ok(());
    }

    for event in events {
        println!("  {}", event.render());
    }

    Ok(())
}
