//! Core library for eventcal.
//!
//! This crate provides everything both the server and the CLI build on:
//! - `event` / `vocabulary` for the normalized event record and its closed
//!   category and continent sets
//! - `schema` / `loader` for reading and validating `events/<year>/*.yaml`
//! - `filter`, `search` and `calendar`, the pure query engines
//! - `api` for the read-only JSON API semantics

pub mod api;
pub mod calendar;
pub mod config;
pub mod error;
pub mod event;
pub mod filter;
pub mod loader;
pub mod schema;
pub mod search;
pub mod vocabulary;

pub use config::EventcalConfig;
pub use error::{EventcalError, EventcalResult};
pub use event::EventRecord;
pub use filter::{FacetSelection, filter_events};
pub use loader::{EventStore, get_event_by_id, load_events};
pub use search::{GroupedSearchResults, SearchOptions, search_events, search_events_with};
pub use vocabulary::{Category, Continent};
