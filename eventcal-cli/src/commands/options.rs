use anyhow::Result;
use eventcal_core::filter::{FilterOption, OptionGroup, category_options, location_options, tag_options};
use owo_colors::OwoColorize;

use crate::session::Session;

/// Options are derived from every loaded event so the active facets never
/// hide values that could be selected.
pub fn run(session: &Session) -> Result<()> {
    let locations = location_options(session.all());
    let (continents, countries): (Vec<FilterOption>, Vec<FilterOption>) = locations
        .into_iter()
        .partition(|o| o.group == Some(OptionGroup::Continent));

    print_section("Continents", &continents);
    print_section("Countries", &countries);
    print_section("Categories", &category_options());
    print_section("Tags", &tag_options(session.all()));

    Ok(())
}

fn print_section(heading: &str, options: &[FilterOption]) {
    println!("{}", heading.bold());
    if options.is_empty() {
        println!("  {}", "none".dimmed());
    }
    for option in options {
        if option.label == option.value {
            println!("  {}", option.value);
        } else {
            println!("  {:<16} {}", option.value, option.label.dimmed());
        }
    }
    println!();
}
