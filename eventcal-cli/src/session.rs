//! Presentation state: the loaded collection plus the active facets.
//!
//! Every command derives its view from `filtered()`; nothing is cached
//! between derivations.

use eventcal_core::{EventRecord, EventStore, EventcalConfig, FacetSelection, filter_events};
use tracing::debug;

pub struct Session {
    pub config: EventcalConfig,
    selection: FacetSelection,
    store: EventStore,
}

impl Session {
    pub fn load(config: EventcalConfig, selection: FacetSelection) -> Self {
        let store = EventStore::load(&config.events_path());
        debug!(
            events = store.events().len(),
            rejected = store.rejected().len(),
            ?selection,
            "Loaded events"
        );
        Session {
            config,
            selection,
            store,
        }
    }

    pub fn store(&self) -> &EventStore {
        &self.store
    }

    /// Every loaded event, ignoring the facets.
    pub fn all(&self) -> &[EventRecord] {
        self.store.events()
    }

    /// Events passing the active facets.
    pub fn filtered(&self) -> Vec<&EventRecord> {
        filter_events(self.store.events(), &self.selection)
    }
}
