//! Controlled vocabularies: event categories and continents.
//!
//! Both are closed enumerations with display metadata attached per variant,
//! so an unknown code can never silently fall through to a default label or
//! colour.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

/// Colour used for events without any category.
pub const DEFAULT_EVENT_COLOR: &str = "#6b7280";

/// Display metadata for a vocabulary entry.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DisplayInfo {
    pub label: &'static str,
    pub color: Option<&'static str>,
}

/// Event format.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum Category {
    Conference,
    Hackathon,
    Meetup,
    Coworking,
    PopupVillage,
}

impl Category {
    pub const ALL: [Category; 5] = [
        Category::Conference,
        Category::Hackathon,
        Category::Meetup,
        Category::Coworking,
        Category::PopupVillage,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            Category::Conference => "conference",
            Category::Hackathon => "hackathon",
            Category::Meetup => "meetup",
            Category::Coworking => "coworking",
            Category::PopupVillage => "popup-village",
        }
    }

    pub fn display(&self) -> DisplayInfo {
        let (label, color) = match self {
            Category::Conference => ("Conference", "#3B82F6"),
            Category::Hackathon => ("Hackathon", "#8B5CF6"),
            Category::Meetup => ("Meetup", "#10B981"),
            Category::Coworking => ("Coworking", "#F59E0B"),
            Category::PopupVillage => ("Popup Village", "#EC4899"),
        };
        DisplayInfo {
            label,
            color: Some(color),
        }
    }

    pub fn label(&self) -> &'static str {
        self.display().label
    }

    pub fn color(&self) -> &'static str {
        self.display().color.unwrap_or(DEFAULT_EVENT_COLOR)
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl FromStr for Category {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Category::ALL
            .into_iter()
            .find(|c| c.as_str() == s)
            .ok_or_else(|| format!("Unknown category '{}'", s))
    }
}

/// Continent a venue is on. `Global` covers online and worldwide events.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum Continent {
    Africa,
    Asia,
    Europe,
    NorthAmerica,
    SouthAmerica,
    Oceania,
    Global,
}

impl Continent {
    /// Canonical display order.
    pub const ALL: [Continent; 7] = [
        Continent::Africa,
        Continent::Asia,
        Continent::Europe,
        Continent::NorthAmerica,
        Continent::SouthAmerica,
        Continent::Oceania,
        Continent::Global,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            Continent::Africa => "africa",
            Continent::Asia => "asia",
            Continent::Europe => "europe",
            Continent::NorthAmerica => "north-america",
            Continent::SouthAmerica => "south-america",
            Continent::Oceania => "oceania",
            Continent::Global => "global",
        }
    }

    pub fn display(&self) -> DisplayInfo {
        let label = match self {
            Continent::Africa => "Africa",
            Continent::Asia => "Asia",
            Continent::Europe => "Europe",
            Continent::NorthAmerica => "North America",
            Continent::SouthAmerica => "South America",
            Continent::Oceania => "Oceania",
            Continent::Global => "Global / Online",
        };
        DisplayInfo { label, color: None }
    }

    pub fn label(&self) -> &'static str {
        self.display().label
    }
}

impl fmt::Display for Continent {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl FromStr for Continent {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Continent::ALL
            .into_iter()
            .find(|c| c.as_str() == s)
            .ok_or_else(|| format!("Unknown continent '{}'", s))
    }
}

/// Accent colour for an event: the colour of its first category.
pub fn event_color(categories: &[Category]) -> &'static str {
    categories
        .first()
        .map(|c| c.color())
        .unwrap_or(DEFAULT_EVENT_COLOR)
}
