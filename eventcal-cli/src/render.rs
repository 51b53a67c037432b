//! TUI rendering traits for eventcal types.
//!
//! This module provides extension traits that add colored terminal rendering
//! to eventcal-core types using owo_colors.

use eventcal_core::EventRecord;
use eventcal_core::calendar::format_date_compact;
use eventcal_core::search::{MatchType, SearchResult};
use eventcal_core::vocabulary::Category;
use owo_colors::OwoColorize;

/// Extension trait for TUI rendering with colors.
pub trait Render {
    fn render(&self) -> String;
}

impl Render for EventRecord {
    fn render(&self) -> String {
        let date = format!("{:<15}", format_date_compact(self.start_date, self.end_date));
        let location = self.location.as_deref().unwrap_or_default();

        format!(
            "{} {} {} {}",
            date.dimmed(),
            color_dot(self.color()),
            self.title.bold(),
            location.dimmed()
        )
    }
}

impl Render for Category {
    fn render(&self) -> String {
        match hex_to_rgb(self.color()) {
            Some((r, g, b)) => self.label().truecolor(r, g, b).to_string(),
            None => self.label().to_string(),
        }
    }
}

impl Render for SearchResult<'_> {
    fn render(&self) -> String {
        let event = self.event;
        let context = match self.match_type {
            MatchType::Name => String::new(),
            MatchType::Location => event.location.clone().unwrap_or_default(),
            MatchType::Category => self
                .matched_value
                .as_deref()
                .and_then(|code| code.parse::<Category>().ok())
                .map(|c| c.render())
                .unwrap_or_default(),
            MatchType::Other => format!("in {}", self.matched_field.as_str()),
        };

        format!(
            "{} {} {} {}",
            color_dot(event.color()),
            event.title.bold(),
            context.dimmed(),
            format!("[{}]", self.score).dimmed()
        )
    }
}

/// A colored bullet for an event's accent color
pub fn color_dot(hex: &str) -> String {
    match hex_to_rgb(hex) {
        Some((r, g, b)) => "●".truecolor(r, g, b).to_string(),
        None => "●".to_string(),
    }
}

/// Parse `#RRGGBB` into its components
pub fn hex_to_rgb(hex: &str) -> Option<(u8, u8, u8)> {
    let hex = hex.strip_prefix('#')?;
    if hex.len() != 6 || !hex.is_ascii() {
        return None;
    }
    let channel = |i: usize| u8::from_str_radix(&hex[i..i + 2], 16).ok();
    Some((channel(0)?, channel(2)?, channel(4)?))
}

pub fn pluralize(word: &str, count: usize) -> String {
    if count == 1 {
        word.to_string()
    } else {
        format!("{}s", word)
    }
}
