//! eventcal configuration.
//!
//! Sources, lowest precedence first:
//! 1. `~/.config/eventcal/config.toml`
//! 2. `./eventcal.toml` (or the path given with `--config`)
//! 3. `EVENTCAL_*` environment variables, `__` separating nested keys
//!    (e.g. `EVENTCAL_SEARCH__MAX_NAME=5`)

use std::path::{Path, PathBuf};

use config::{Config, Environment, File};
use serde::{Deserialize, Serialize};

use crate::error::{EventcalError, EventcalResult};
use crate::search::SearchOptions;

static DEFAULT_EVENTS_DIR: &str = "events";
static DEFAULT_CONFIG_FILE: &str = "eventcal.toml";
static DEFAULT_BIND: &str = "127.0.0.1:3000";

/// Months shown by the list view: the current month and the 11 after it.
pub const DEFAULT_LIST_MONTHS: u32 = 12;

fn default_events_dir() -> PathBuf {
    PathBuf::from(DEFAULT_EVENTS_DIR)
}

fn default_list_months() -> u32 {
    DEFAULT_LIST_MONTHS
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct EventcalConfig {
    #[serde(default = "default_events_dir")]
    pub events_dir: PathBuf,

    #[serde(default = "default_list_months")]
    pub list_months: u32,

    #[serde(default)]
    pub search: SearchOptions,

    #[serde(default)]
    pub server: ServerConfig,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ServerConfig {
    pub bind: String,
}

impl Default for ServerConfig {
    fn default() -> Self {
        ServerConfig {
            bind: DEFAULT_BIND.to_string(),
        }
    }
}

impl Default for EventcalConfig {
    fn default() -> Self {
        EventcalConfig {
            events_dir: default_events_dir(),
            list_months: DEFAULT_LIST_MONTHS,
            search: SearchOptions::default(),
            server: ServerConfig::default(),
        }
    }
}

impl EventcalConfig {
    /// User-level config file, if a config directory exists on this platform.
    pub fn user_config_path() -> Option<PathBuf> {
        dirs::config_dir().map(|dir| dir.join("eventcal").join("config.toml"))
    }

    /// Load configuration. `path` replaces `./eventcal.toml` when given,
    /// and must then exist.
    pub fn load(path: Option<&Path>) -> EventcalResult<Self> {
        let mut builder = Config::builder();

        if let Some(user_path) = Self::user_config_path() {
            builder = builder.add_source(File::from(user_path).required(false));
        }

        builder = match path {
            Some(path) => builder.add_source(File::from(path).required(true)),
            None => builder.add_source(File::with_name(DEFAULT_CONFIG_FILE).required(false)),
        };

        builder
            .add_source(
                Environment::with_prefix("EVENTCAL")
                    .prefix_separator("_")
                    .separator("__"),
            )
            .build()
            .map_err(|e| EventcalError::Config(e.to_string()))?
            .try_deserialize()
            .map_err(|e| EventcalError::Config(e.to_string()))
    }

    /// Events directory with `~` expanded.
    pub fn events_path(&self) -> PathBuf {
        let full_path_str = shellexpand::tilde(&self.events_dir.to_string_lossy()).into_owned();

        PathBuf::from(full_path_str)
    }

    pub fn to_toml(&self) -> EventcalResult<String> {
        toml::to_string_pretty(self).map_err(|e| EventcalError::Serialization(e.to_string()))
    }
}
