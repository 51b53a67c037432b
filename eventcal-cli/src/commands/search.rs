use anyhow::Result;
use eventcal_core::search::MIN_QUERY_LEN;
use eventcal_core::search_events_with;
use owo_colors::OwoColorize;

use crate::render::{Render, pluralize};
use crate::session::Session;

pub fn run(session: &Session, query: &str, json: bool) -> Result<()> {
    let results = search_events_with(session.filtered(), query, &session.config.search);

    if json {
        println!("{}", serde_json::to_string_pretty(&results)?);
        return Ok(());
    }

    if query.trim().chars().count() < MIN_QUERY_LEN {
        println!(
            "{}",
            format!("Type at least {} characters to search", MIN_QUERY_LEN).dimmed()
        );
        return Ok(());
    }

    if !results.has_results() {
        println!("{}", format!("No events found for \"{}\"", query.trim()).dimmed());
        return Ok(());
    }

    println!(
        "{}",
        format!("{} {}", results.len(), pluralize("result", results.len())).dimmed()
    );

    for (heading, group) in results.groups() {
        if group.is_empty() {
            continue;
        }
        println!();
        println!("{}", heading.bold());
        for result in group {
            println!("  {}", result.render());
        }
    }

    Ok(())
}
