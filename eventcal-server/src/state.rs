use std::path::PathBuf;

use eventcal_core::{EventRecord, EventStore};
use tracing::warn;

/// Shared application state
#[derive(Clone)]
pub struct AppState {
    events_dir: PathBuf,
}

impl AppState {
    pub fn new(events_dir: PathBuf) -> Self {
        if !events_dir.is_dir() {
            warn!(dir = %events_dir.display(), "Events directory does not exist yet, serving no events");
        }
        AppState { events_dir }
    }

    // Event files are the source of truth, so reload on every request to
    // pick up edits without a restart.
    pub fn events(&self) -> Vec<EventRecord> {
        EventStore::load(&self.events_dir).into_events()
    }
}
