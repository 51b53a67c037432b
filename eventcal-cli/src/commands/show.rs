use anyhow::{Result, bail};
use eventcal_core::calendar::format_date_range;
use owo_colors::OwoColorize;

use crate::render::{Render, color_dot};
use crate::session::Session;

pub fn run(session: &Session, id: &str) -> Result<()> {
    let Some(event) = session.store().get(id) else {
        bail!("Event not found: {}", id);
    };

    println!("{} {}", color_dot(event.color()), event.title.bold());
    let dates = format_date_range(event.start_date, event.end_date);
    if event.is_multi_day() {
        let days = (event.last_day() - event.start_date).num_days() + 1;
        println!("   {} {}", dates, format!("({} days)", days).dimmed());
    } else {
        println!("   {}", dates);
    }

    if let Some(location) = &event.location {
        println!("   {}", location);
    }
    if let Some(continent) = event.location_continent {
        println!("   {}", continent.label().dimmed());
    }

    if !event.categories.is_empty() {
        let categories: Vec<String> = event.categories.iter().map(|c| c.render()).collect();
        println!("   {}", categories.join(", "));
    }
    if !event.tags.is_empty() {
        let tags: Vec<String> = event.tags.iter().map(|t| format!("#{}", t)).collect();
        println!("   {}", tags.join(" ").dimmed());
    }

    println!("   {}", event.url.cyan());

    if let Some(description) = &event.description {
        println!();
        for line in description.lines() {
            println!("   {}", line);
        }
    }

    let socials = event.social_links();
    if !socials.is_empty() {
        println!();
        for (network, url) in socials {
            println!("   {:<10} {}", network.dimmed(), url);
        }
    }

    Ok(())
}
