//! Loading event files from the events directory.
//!
//! Layout: `<events_dir>/<YYYY>/<name>.yaml`. The file stem becomes the
//! event id. A bad file is logged and skipped; loading never fails as a
//! whole because of one record.

use std::collections::HashSet;
use std::path::{Path, PathBuf};

use tracing::{debug, error, warn};

use crate::error::{EventcalError, EventcalResult};
use crate::event::EventRecord;
use crate::schema::EventFile;

const EVENT_FILE_EXTENSION: &str = "yaml";

/// A file that could not be admitted into the collection.
#[derive(Debug)]
pub struct RejectedFile {
    pub path: PathBuf,
    pub error: EventcalError,
}

/// Read-only snapshot of every valid event, sorted by start date.
#[derive(Debug, Default)]
pub struct EventStore {
    events: Vec<EventRecord>,
    rejected: Vec<RejectedFile>,
}

impl EventStore {
    pub fn load(events_dir: &Path) -> Self {
        let mut store = EventStore::default();

        if !events_dir.is_dir() {
            warn!(dir = %events_dir.display(), "Events directory not found");
            return store;
        }

        let mut seen_ids = HashSet::new();

        for year_dir in year_dirs(events_dir) {
            for path in event_files(&year_dir) {
                match load_event_file(&path) {
                    Ok(event) if !seen_ids.insert(event.id.clone()) => {
                        store.reject(path.clone(), EventcalError::DuplicateId { id: event.id, path });
                    }
                    Ok(event) => store.events.push(event),
                    Err(e) => store.reject(path, e),
                }
            }
        }

        // Stable: file order breaks ties on equal start dates
        store.events.sort_by(|a, b| a.start_date.cmp(&b.start_date));

        debug!(
            loaded = store.events.len(),
            rejected = store.rejected.len(),
            "Loaded events"
        );

        store
    }

    fn reject(&mut self, path: PathBuf, error: EventcalError) {
        error!(path = %path.display(), "{}", error);
        self.rejected.push(RejectedFile { path, error });
    }

    pub fn events(&self) -> &[EventRecord] {
        &self.events
    }

    pub fn into_events(self) -> Vec<EventRecord> {
        self.events
    }

    pub fn get(&self, id: &str) -> Option<&EventRecord> {
        self.events.iter().find(|event| event.id == id)
    }

    pub fn rejected(&self) -> &[RejectedFile] {
        &self.rejected
    }
}

/// Load every valid event under `events_dir`.
pub fn load_events(events_dir: &Path) -> Vec<EventRecord> {
    EventStore::load(events_dir).into_events()
}

/// Load the collection and look up a single event.
pub fn get_event_by_id(events_dir: &Path, id: &str) -> Option<EventRecord> {
    load_events(events_dir).into_iter().find(|event| event.id == id)
}

/// Parse and validate one event file.
pub fn load_event_file(path: &Path) -> EventcalResult<EventRecord> {
    let content = std::fs::read_to_string(path)?;

    let file = EventFile::from_yaml(&content).map_err(|e| EventcalError::Yaml {
        path: path.to_path_buf(),
        message: e.to_string(),
    })?;

    let id = event_id(path);

    file.validate(&id).map_err(|issues| EventcalError::InvalidEvent {
        path: path.to_path_buf(),
        issues,
    })
}

/// `events/2026/2026-02-17_ethdenver.yaml` -> `2026-02-17_ethdenver`
fn event_id(path: &Path) -> String {
    path.file_stem()
        .map(|stem| stem.to_string_lossy().into_owned())
        .unwrap_or_default()
}

/// Subdirectories named with exactly four digits, in ascending order.
fn year_dirs(events_dir: &Path) -> Vec<PathBuf> {
    let Ok(entries) = std::fs::read_dir(events_dir) else {
        return Vec::new();
    };

    let mut dirs: Vec<PathBuf> = entries
        .filter_map(|entry| entry.ok())
        .map(|entry| entry.path())
        .filter(|path| path.is_dir())
        .filter(|path| {
            path.file_name()
                .and_then(|n| n.to_str())
                .is_some_and(is_year_name)
        })
        .collect();

    dirs.sort();
    dirs
}

fn is_year_name(name: &str) -> bool {
    name.len() == 4 && name.bytes().all(|b| b.is_ascii_digit())
}

fn event_files(year_dir: &Path) -> Vec<PathBuf> {
    let entries = match std::fs::read_dir(year_dir) {
        Ok(entries) => entries,
        Err(e) => {
            warn!(dir = %year_dir.display(), "Could not read year directory: {}", e);
            return Vec::new();
        }
    };

    let mut files: Vec<PathBuf> = entries
        .filter_map(|entry| entry.ok())
        .map(|entry| entry.path())
        .filter(|path| path.is_file())
        .filter(|path| path.extension().is_some_and(|e| e == EVENT_FILE_EXTENSION))
        .collect();

    files.sort();
    files
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::TempDir;

    fn write_event(root: &Path, year: &str, name: &str, content: &str) {
        let dir = root.join(year);
        fs::create_dir_all(&dir).unwrap();
        fs::write(dir.join(name), content).unwrap();
    }

    fn event_yaml(title: &str, start: &str) -> String {
        format!("title: {}\nstartDate: {}\nurl: https://example.com\n", title, start)
    }

    #[test]
    fn test_load_sorts_by_start_date_and_derives_ids() {
        let tmp = TempDir::new().unwrap();
        write_event(tmp.path(), "2026", "2026-05-01_late.yaml", &event_yaml("Late", "2026-05-01"));
        write_event(tmp.path(), "2025", "2025-11-03_devcon.yaml", &event_yaml("Devcon", "2025-11-03"));
        write_event(tmp.path(), "2026", "2026-02-17_ethdenver.yaml", &event_yaml("ETHDenver", "2026-02-17"));

        let store = EventStore::load(tmp.path());
        let ids: Vec<&str> = store.events().iter().map(|e| e.id.as_str()).collect();

        assert_eq!(
            ids,
            vec!["2025-11-03_devcon", "2026-02-17_ethdenver", "2026-05-01_late"]
        );
        assert!(store.rejected().is_empty());
        assert_eq!(store.get("2026-02-17_ethdenver").unwrap().title, "ETHDenver");
        assert!(store.get("missing").is_none());
    }

    #[test]
    fn test_invalid_files_are_skipped_not_fatal() {
        let tmp = TempDir::new().unwrap();
        write_event(tmp.path(), "2026", "good.yaml", &event_yaml("Good", "2026-01-10"));
        write_event(tmp.path(), "2026", "bad-date.yaml", &event_yaml("Bad", "10/01/2026"));
        write_event(tmp.path(), "2026", "broken.yaml", "title: [unclosed\n");
        write_event(tmp.path(), "2026", "missing-url.yaml", "title: X\nstartDate: 2026-01-01\n");

        let store = EventStore::load(tmp.path());

        assert_eq!(store.events().len(), 1);
        assert_eq!(store.events()[0].id, "good");
        assert_eq!(store.rejected().len(), 3);
        assert!(matches!(
            store.rejected().iter().find(|r| r.path.ends_with("bad-date.yaml")).unwrap().error,
            EventcalError::InvalidEvent { .. }
        ));
    }

    #[test]
    fn test_ignores_non_year_dirs_and_other_extensions() {
        let tmp = TempDir::new().unwrap();
        write_event(tmp.path(), "2026", "a.yaml", &event_yaml("A", "2026-01-10"));
        write_event(tmp.path(), "2026", "notes.md", "# not an event");
        write_event(tmp.path(), "drafts", "b.yaml", &event_yaml("B", "2026-01-11"));
        write_event(tmp.path(), "20261", "c.yaml", &event_yaml("C", "2026-01-12"));

        let events = load_events(tmp.path());

        assert_eq!(events.len(), 1);
        assert_eq!(events[0].title, "A");
    }

    #[test]
    fn test_duplicate_ids_across_years_keep_first() {
        let tmp = TempDir::new().unwrap();
        write_event(tmp.path(), "2025", "meetup.yaml", &event_yaml("First", "2025-06-01"));
        write_event(tmp.path(), "2026", "meetup.yaml", &event_yaml("Second", "2026-06-01"));

        let store = EventStore::load(tmp.path());

        assert_eq!(store.events().len(), 1);
        assert_eq!(store.events()[0].title, "First");
        assert!(matches!(
            store.rejected()[0].error,
            EventcalError::DuplicateId { .. }
        ));
    }

    #[test]
    fn test_missing_directory_yields_empty_collection() {
        let tmp = TempDir::new().unwrap();
        let store = EventStore::load(&tmp.path().join("nope"));
        assert!(store.events().is_empty());
        assert!(get_event_by_id(&tmp.path().join("nope"), "x").is_none());
    }
}
