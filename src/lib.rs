//! listview: search, filter, sort and pagination for dashboard list screens.
//!
//! The dashboard's user, customer, order, product and inventory screens all
//! show the same thing: a table over an in-memory collection that the user
//! narrows with a search box and filter dropdowns, orders by clicking column
//! headers, and pages through. This crate implements that behaviour once:
//!
//! - A pure engine ([`engine::paginate`]) turning a collection and a
//!   [`QuerySpec`] into a [`ResultPage`]
//! - A controller ([`ListViewState`] + [`handle_event`]) that keeps only the
//!   latest query and page and re-runs the engine on every interaction
//! - A pager view model for the rendering layer
//! - Collection loading from JSON files and tracing setup
//!
//! # Architecture
//!
//! ```text
//! ┌─────────────────────────────────────────────────────┐
//! │  Host application (fetches data, draws the table)   │
//! └─────────────────────────────────────────────────────┘
//!            │ Event                      ▲ Action / TableViewModel
//! ┌─────────────────────────────────────────────────────┐
//! │  Application Layer (app/)                           │
//! │  - Event handling, query transitions                │
//! │  - View model computation                           │
//! └─────────────────────────────────────────────────────┘
//!         │                    │                    │
//! ┌───────────────┐   ┌───────────────┐   ┌───────────────┐
//! │ Engine        │   │ Source        │   │ UI            │
//! │ (engine/)     │   │ (source/)     │   │ (ui/)         │
//! │ - Search      │   │ - Trait seam  │   │ - Pager       │
//! │ - Filter/Sort │   │ - JSON files  │   │ - Empty state │
//! │ - Paging      │   │               │   │               │
//! └───────────────┘   └───────────────┘   └───────────────┘
//!         │                    │                    │
//! ┌─────────────────────────────────────────────────────┐
//! │  Domain (domain/): Record, QuerySpec, ResultPage    │
//! └─────────────────────────────────────────────────────┘
//!                        │
//! ┌─────────────────────────────────────────────────────┐
//! │  Observability (observability/)                     │  ← Optional
//! └─────────────────────────────────────────────────────┘
//! ```
//!
//! # Configuration
//!
//! Hosts pass either a flat key/value map ([`Config::from_map`]) or a TOML
//! file ([`Config::from_file`]):
//!
//! ```toml
//! default_page_size = 25
//! page_size_options = [10, 25, 50]
//! search_fields = ["name", "email", "customer.name"]
//! pager_window = 7
//! trace_level = "debug"
//! trace_file = "/var/log/dashboard/listview-otlp.json"
//! ```
//!
//! # Example
//!
//! ```rust
//! use listview::{handle_event, initialize, Config, Event, Record};
//! use serde_json::json;
//!
//! let config = Config {
//!     search_fields: vec!["name".to_string()],
//!     ..Default::default()
//! };
//! let mut state = initialize(&config)?;
//!
//! let records: Vec<Record> = [json!({"name": "Gear Oil 80W-90"}), json!({"name": "Coolant"})]
//!     .into_iter()
//!     .filter_map(Record::from_value)
//!     .collect();
//! handle_event(&mut state, &Event::CollectionLoaded(records))?;
//! handle_event(&mut state, &Event::SearchChanged("gear".to_string()))?;
//!
//! assert_eq!(state.page.total_count, 1);
//! # Ok::<(), listview::ListViewError>(())
//! ```

pub mod app;
pub mod domain;
pub mod engine;
pub mod source;
pub mod ui;

pub mod observability;

pub use app::{handle_event, Action, Event, ListViewState, LoadState};
pub use domain::{FilterValue, ListViewError, QuerySpec, Record, Result, ResultPage, SortDirection};
pub use engine::paginate;

use std::collections::BTreeMap;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::app::{DEFAULT_PAGER_WINDOW, DEFAULT_PAGE_SIZE_OPTIONS};
use crate::domain::DEFAULT_PAGE_SIZE;

/// Trace file size that triggers rotation (10 MiB).
const DEFAULT_TRACE_MAX_BYTES: u64 = 10 * 1024 * 1024;

/// Rotated trace files kept.
const DEFAULT_TRACE_MAX_BACKUPS: usize = 3;

/// List screen configuration.
///
/// Every field has a default, so partial TOML files and maps are accepted.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Rows per page when a screen opens. Must be positive. Default: 10
    pub default_page_size: usize,

    /// Choices offered by the rows-per-page selector. Default: `[10, 25, 50, 100]`
    pub page_size_options: Vec<usize>,

    /// Fields the search box matches against, dotted paths allowed.
    pub search_fields: Vec<String>,

    /// Page-number buttons shown in the pager. Default: 5
    pub pager_window: usize,

    /// `EnvFilter` directive, e.g. `"debug"` or `"listview=trace"`.
    ///
    /// `RUST_LOG` takes precedence. Default: `"info"`
    pub trace_level: Option<String>,

    /// Export spans as OTLP JSON to this file instead of logging to stderr.
    pub trace_file: Option<PathBuf>,

    /// Trace file size that triggers rotation. Default: 10 MiB
    pub trace_max_bytes: u64,

    /// Rotated trace files kept. Default: 3
    pub trace_max_backups: usize,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            default_page_size: DEFAULT_PAGE_SIZE,
            page_size_options: DEFAULT_PAGE_SIZE_OPTIONS.to_vec(),
            search_fields: Vec::new(),
            pager_window: DEFAULT_PAGER_WINDOW,
            trace_level: None,
            trace_file: None,
            trace_max_bytes: DEFAULT_TRACE_MAX_BYTES,
            trace_max_backups: DEFAULT_TRACE_MAX_BACKUPS,
        }
    }
}

impl Config {
    /// Parses configuration from a flat string map.
    ///
    /// Hosts that only pass string settings (environment, query strings,
    /// widget attributes) use this form. Unparseable or zero numeric values
    /// fall back to their defaults rather than failing.
    ///
    /// # Parsing Rules
    ///
    /// - `default_page_size` (or the shorter `page_size`), `pager_window`,
    ///   `trace_max_bytes`, `trace_max_backups`: integers
    /// - `page_size_options`, `search_fields`: comma-separated, empty items dropped
    /// - `trace_level`, `trace_file`: taken verbatim
    ///
    /// # Example
    ///
    /// ```rust
    /// use std::collections::BTreeMap;
    /// use listview::Config;
    ///
    /// let mut map = BTreeMap::new();
    /// map.insert("default_page_size".to_string(), "25".to_string());
    /// map.insert("search_fields".to_string(), "name, email".to_string());
    ///
    /// let config = Config::from_map(&map);
    /// assert_eq!(config.default_page_size, 25);
    /// assert_eq!(config.search_fields, vec!["name", "email"]);
    /// ```
    #[must_use]
    pub fn from_map(map: &BTreeMap<String, String>) -> Self {
        let defaults = Self::default();

        let positive = |key: &str, fallback: usize| {
            map.get(key)
                .and_then(|s| s.trim().parse::<usize>().ok())
                .filter(|n| *n > 0)
                .unwrap_or(fallback)
        };

        let list = |key: &str| -> Option<Vec<String>> {
            map.get(key)
                .map(|s| {
                    s.split(',')
                        .map(str::trim)
                        .filter(|item| !item.is_empty())
                        .map(String::from)
                        .collect::<Vec<_>>()
                })
                .filter(|items| !items.is_empty())
        };

        let page_size_options = list("page_size_options")
            .map(|items| {
                items
                    .iter()
                    .filter_map(|s| s.parse::<usize>().ok())
                    .filter(|n| *n > 0)
                    .collect::<Vec<_>>()
            })
            .filter(|options| !options.is_empty())
            .unwrap_or(defaults.page_size_options);

        let trace_max_backups = map
            .get("trace_max_backups")
            .and_then(|s| s.trim().parse::<usize>().ok())
            .unwrap_or(defaults.trace_max_backups);

        let trace_max_bytes = map
            .get("trace_max_bytes")
            .and_then(|s| s.trim().parse::<u64>().ok())
            .filter(|n| *n > 0)
            .unwrap_or(defaults.trace_max_bytes);

        Self {
            default_page_size: positive(
                "default_page_size",
                positive("page_size", defaults.default_page_size),
            ),
            page_size_options,
            search_fields: list("search_fields").unwrap_or_default(),
            pager_window: positive("pager_window", defaults.pager_window),
            trace_level: map.get("trace_level").cloned(),
            trace_file: map.get("trace_file").map(PathBuf::from),
            trace_max_bytes,
            trace_max_backups,
        }
    }

    /// Parses configuration from TOML text. Missing keys take defaults.
    ///
    /// # Errors
    ///
    /// Returns [`ListViewError::Config`] if the TOML is malformed or a page
    /// size is zero.
    pub fn from_toml_str(contents: &str) -> Result<Self> {
        let config: Self = toml::from_str(contents)
            .map_err(|e| ListViewError::Config(format!("failed to parse config TOML: {e}")))?;
        config.validate()?;
        Ok(config)
    }

    /// Reads and parses a TOML configuration file.
    ///
    /// # Errors
    ///
    /// Returns [`ListViewError::Io`] if the file cannot be read, or the errors
    /// of [`Config::from_toml_str`].
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        tracing::debug!(path = ?path, "loading config file");
        let contents = std::fs::read_to_string(path)?;
        Self::from_toml_str(&contents)
    }

    fn validate(&self) -> Result<()> {
        if self.default_page_size == 0 {
            return Err(ListViewError::Config("default_page_size must be positive".to_string()));
        }
        if self.page_size_options.contains(&0) {
            return Err(ListViewError::Config("page_size_options must be positive".to_string()));
        }
        if self.trace_max_bytes == 0 {
            return Err(ListViewError::Config("trace_max_bytes must be positive".to_string()));
        }
        Ok(())
    }
}

/// Creates the state for a new list screen from configuration.
///
/// The screen starts on page 1 with the configured page size and search
/// fields, no filters and no sort, in [`LoadState::Idle`]. Send
/// [`Event::Refresh`] to request data.
///
/// # Errors
///
/// Returns [`ListViewError::InvalidArgument`] if `default_page_size` is 0.
pub fn initialize(config: &Config) -> Result<ListViewState> {
    tracing::debug!(
        page_size = config.default_page_size,
        search_fields = config.search_fields.len(),
        "initializing list view"
    );

    let query = QuerySpec {
        search_fields: config.search_fields.clone(),
        page_size: config.default_page_size,
        ..QuerySpec::default()
    };

    let mut state = ListViewState::new(query)?;
    state.pager_window = config.pager_window;
    state.page_size_options.clone_from(&config.page_size_options);
    Ok(state)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn map_falls_back_on_bad_values() {
        let map: BTreeMap<String, String> = [
            ("page_size", "0"),
            ("pager_window", "seven"),
            ("page_size_options", "5, x, 15"),
            ("trace_max_backups", "0"),
        ]
        .into_iter()
        .map(|(k, v)| (k.to_string(), v.to_string()))
        .collect();

        let config = Config::from_map(&map);
        assert_eq!(config.default_page_size, DEFAULT_PAGE_SIZE);
        assert_eq!(config.pager_window, DEFAULT_PAGER_WINDOW);
        assert_eq!(config.page_size_options, vec![5, 15]);
        assert_eq!(config.trace_max_backups, 0);
        assert!(config.search_fields.is_empty());
    }

    #[test]
    fn map_accepts_both_page_size_keys() {
        let single = |key: &str, value: &str| {
            let map = BTreeMap::from([(key.to_string(), value.to_string())]);
            Config::from_map(&map).default_page_size
        };
        assert_eq!(single("default_page_size", "25"), 25);
        assert_eq!(single("page_size", "50"), 50);

        let both = BTreeMap::from([
            ("default_page_size".to_string(), "25".to_string()),
            ("page_size".to_string(), "50".to_string()),
        ]);
        assert_eq!(Config::from_map(&both).default_page_size, 25);
    }

    #[test]
    fn toml_partial_file() {
        let config = Config::from_toml_str(
            r#"
            default_page_size = 50
            search_fields = ["sku", "name"]
            trace_file = "/tmp/listview.json"
            "#,
        )
        .unwrap();

        assert_eq!(config.default_page_size, 50);
        assert_eq!(config.search_fields, vec!["sku", "name"]);
        assert_eq!(config.trace_file, Some(PathBuf::from("/tmp/listview.json")));
        assert_eq!(config.page_size_options, vec![10, 25, 50, 100]);
    }

    #[test]
    fn toml_rejects_zero_sizes() {
        let err = Config::from_toml_str("default_page_size = 0").unwrap_err();
        assert!(matches!(err, ListViewError::Config(_)));

        let err = Config::from_toml_str("default_page_size = [").unwrap_err();
        assert!(matches!(err, ListViewError::Config(_)));

        let err = Config::from_toml_str("trace_max_bytes = 0").unwrap_err();
        assert!(matches!(err, ListViewError::Config(_)));
    }

    #[test]
    fn initialize_applies_config() {
        let config = Config {
            default_page_size: 25,
            search_fields: vec!["name".to_string()],
            pager_window: 3,
            page_size_options: vec![25, 50],
            ..Config::default()
        };
        let state = initialize(&config).unwrap();

        assert_eq!(state.query.page_size, 25);
        assert_eq!(state.query.search_fields, vec!["name"]);
        assert_eq!(state.pager_window, 3);
        assert_eq!(state.page_size_options, vec![25, 50]);
        assert!(!state.accepts_page_size(10));
        assert_eq!(state.load_state, LoadState::Idle);
    }
}
