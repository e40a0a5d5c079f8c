//! Countyflow: a Zellij plugin for browsing county-to-county migration flows.
//!
//! Type a county name, pick a match, and see where households are moving:
//! net migration, average income of movers, and the top five destinations
//! and origins. Counterparts that are themselves in the dataset are links.

#![allow(clippy::multiple_crate_versions)]

//!
//! # Architecture
//!
//! ```text
//! ┌─────────────────────────────────────────────────────┐
//! │  Zellij Plugin Shim (main.rs)                       │  ← keys, history, pane title
//! └─────────────────────────────────────────────────────┘
//!                        │
//! ┌─────────────────────────────────────────────────────┐
//! │  Application Layer (app/)                           │
//! │  - Controller (loading gate)                        │
//! │  - Event handling + router                          │
//! │  - Search session, cursors                          │
//! │  - View model computation                           │
//! └─────────────────────────────────────────────────────┘
//!         │                    │                    │
//! ┌───────────────┐   ┌───────────────┐   ┌───────────────┐
//! │ UI Layer      │   │ Storage Layer │   │ Worker Layer  │
//! │ (ui/)         │   │ (storage/)    │   │ (worker/)     │
//! │ - Rendering   │   │ - JSON decode │   │ - Dataset load│
//! │ - Theming     │   │ - Dataset     │   │ - IPC bridge  │
//! │ - Formatting  │   │ - Slug lookup │   │               │
//! └───────────────┘   └───────────────┘   └───────────────┘
//!         │                    │                    │
//! ┌─────────────────────────────────────────────────────┐
//! │  Infrastructure & Domain Layers                     │
//! │  - Sandbox paths (infrastructure/)                  │
//! │  - Errors, county model, slugs (domain/)            │
//! └─────────────────────────────────────────────────────┘
//!                        │
//! ┌─────────────────────────────────────────────────────┐
//! │  Observability (observability/)                     │
//! │  - OpenTelemetry tracing, file-based OTLP export    │
//! └─────────────────────────────────────────────────────┘
//! ```
//!
//! # Configuration
//!
//! ```kdl
//! pane {
//!     plugin location="file:/path/to/countyflow.wasm" {
//!         data_dir "~/.local/share/countyflow"
//!         county "philadelphia-county-pa"
//!         featured "42_101,06_037,17_031"
//!         theme "catppuccin-mocha"
//!         trace_level "info"
//!     }
//! }
//! ```
//!
//! # Initialization Flow
//!
//! 1. `main.rs` parses [`Config`], initializes tracing, builds a [`Controller`]
//!    and posts `LoadDatasets` to the worker.
//! 2. The worker reads `county_list.json` and `migration_data.json` and replies
//!    with `DatasetsLoaded` or `LoadFailed`.
//! 3. On success the controller opens the session and routes the configured
//!    `county` fragment; the plugin renders from then on.
//!
//! # Example
//!
//! ```rust
//! use countyflow::{initialize, Config, Event};
//! use countyflow::storage::Dataset;
//!
//! let mut controller = initialize(&Config::default());
//! let (_, _) = controller.datasets_loaded(Dataset::default());
//! let (_, actions) = controller.dispatch(&Event::Char('p'))?;
//! assert!(actions.is_empty());
//! # Ok::<(), countyflow::CountyflowError>(())
//! ```

pub mod app;
pub mod domain;
pub mod infrastructure;
pub mod storage;
pub mod worker;

pub mod ui;

pub mod observability;

pub use app::{handle_event, Action, AppState, Controller, Direction, Event, ViewState};
pub use domain::{CountyIdentity, CountyflowError, Result};
pub use ui::Theme;

use infrastructure::{expand_tilde, get_data_dir};
use std::collections::BTreeMap;
use std::path::PathBuf;

pub const DEFAULT_COUNTY_LIST: &str = "county_list.json";
pub const DEFAULT_MIGRATION_DATA: &str = "migration_data.json";

/// Plugin configuration parsed from the Zellij layout.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    /// Directory holding both dataset files.
    pub data_dir: PathBuf,
    /// County list file name, relative to `data_dir`.
    pub county_list: String,
    /// Migration data file name, relative to `data_dir`.
    pub migration_data: String,
    /// Fragment (slug) to open once loaded; `None` starts on Search.
    pub initial_county: Option<String>,
    /// Quick-pick counties shown on the Search view (at most nine are used).
    ///
    /// Entries are dataset keys in `SS_CCC` form, e.g. `42_101`.
    pub featured: Vec<CountyIdentity>,
    /// Built-in theme name. Ignored if `theme_file` is set.
    pub theme_name: Option<String>,
    /// Path to a custom TOML theme.
    pub theme_file: Option<String>,
    /// `EnvFilter` directive for spans. Default: `"info"`
    pub trace_level: Option<String>,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            data_dir: get_data_dir(),
            county_list: DEFAULT_COUNTY_LIST.to_string(),
            migration_data: DEFAULT_MIGRATION_DATA.to_string(),
            initial_county: None,
            featured: Vec::new(),
            theme_name: None,
            theme_file: None,
            trace_level: None,
        }
    }
}

fn non_empty(config: &BTreeMap<String, String>, key: &str) -> Option<String> {
    config
        .get(key)
        .map(|v| v.trim())
        .filter(|v| !v.is_empty())
        .map(String::from)
}

impl Config {
    /// Parses the plugin configuration map; missing or blank keys keep their defaults.
    ///
    /// ```rust
    /// use std::collections::BTreeMap;
    /// use countyflow::Config;
    ///
    /// let mut map = BTreeMap::new();
    /// map.insert("featured".to_string(), "42_101, 06_037".to_string());
    ///
    /// let config = Config::from_zellij(&map);
    /// assert_eq!(config.featured.len(), 2);
    /// ```
    #[must_use]
    pub fn from_zellij(config: &BTreeMap<String, String>) -> Self {
        let defaults = Self::default();

        let data_dir = non_empty(config, "data_dir")
            .map_or(defaults.data_dir, |dir| PathBuf::from(expand_tilde(&dir)));

        let featured = config
            .get("featured")
            .map(|list| {
                list.split(',')
                    .map(str::trim)
                    .filter(|id| !id.is_empty())
                    .map(CountyIdentity::from)
                    .collect()
            })
            .unwrap_or_default();

        Self {
            data_dir,
            county_list: non_empty(config, "county_list").unwrap_or(defaults.county_list),
            migration_data: non_empty(config, "migration_data").unwrap_or(defaults.migration_data),
            initial_county: non_empty(config, "county"),
            featured,
            theme_name: non_empty(config, "theme"),
            theme_file: non_empty(config, "theme_file").map(|path| expand_tilde(&path)),
            trace_level: non_empty(config, "trace_level"),
        }
    }

    #[must_use]
    pub fn county_list_path(&self) -> PathBuf {
        self.data_dir.join(&self.county_list)
    }

    #[must_use]
    pub fn migration_data_path(&self) -> PathBuf {
        self.data_dir.join(&self.migration_data)
    }
}

/// Resolves the theme: `theme_file`, then `theme`, then the default.
///
/// Failures are logged and fall back to the default theme.
#[must_use]
pub fn load_theme(config: &Config) -> Theme {
    if let Some(theme_file) = &config.theme_file {
        return Theme::from_file(theme_file).unwrap_or_else(|e| {
            tracing::warn!(theme_file = %theme_file, error = %e, "failed to load theme file, using default");
            Theme::default()
        });
    }

    config.theme_name.as_deref().map_or_else(Theme::default, |name| {
        Theme::from_name(name).unwrap_or_else(|| {
            tracing::warn!(theme_name = %name, "unknown theme, using default");
            Theme::default()
        })
    })
}

/// Builds a [`Controller`] waiting for its datasets.
#[must_use]
pub fn initialize(config: &Config) -> Controller {
    tracing::debug!(
        data_dir = %config.data_dir.display(),
        featured = config.featured.len(),
        "initializing countyflow plugin"
    );

    Controller::new(
        load_theme(config),
        config.initial_county.clone().unwrap_or_default(),
        config.featured.clone(),
    )
}
