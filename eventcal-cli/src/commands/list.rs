use anyhow::Result;
use eventcal_core::calendar::{MonthGroup, MonthWindow, YearMonth, group_by_month};
use owo_colors::OwoColorize;
use serde_json::json;

use crate::render::Render;
use crate::session::Session;

pub fn run(session: &Session, from: Option<YearMonth>, months: Option<u32>, json: bool) -> Result<()> {
    let months = months.unwrap_or(session.config.list_months);
    let window = match from {
        Some(start) => MonthWindow::ahead(start.first_day(), months),
        None => MonthWindow::upcoming(months),
    };

    let groups = group_by_month(session.filtered(), &window);

    if json {
        println!("{}", serde_json::to_string_pretty(&groups_json(&groups))?);
        return Ok(());
    }

    if groups.is_empty() {
        println!(
            "{}",
            format!("No events between {} and {}", window.start.label(), window.end.label()).dimmed()
        );
        return Ok(());
    }

    for (i, group) in groups.iter().enumerate() {
        if i > 0 {
            println!();
        }
        println!("{}", group.label().bold());
        for event in &group.events {
            println!("  {}", event.render());
        }
    }

    Ok(())
}

fn groups_json(groups: &[MonthGroup]) -> serde_json::Value {
    groups
        .iter()
        .map(|group| {
            json!({
                "key": group.key(),
                "label": group.label(),
                "events": group.events,
            })
        })
        .collect()
}
