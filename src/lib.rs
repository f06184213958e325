//! Datagrid: a client-side tabular data engine.
//!
//! Datagrid turns an in-memory list of records into the rows a table
//! component displays:
//! - Case-insensitive free-text filtering across every column
//! - Type-aware single-column sorting (numeric when every value is a number)
//! - Page windowing with summary metadata
//! - Match highlight ranges for rendering
//! - A view controller that owns the filter, sort and page state

#![allow(clippy::multiple_crate_versions)]

//!
//! # Architecture
//!
//! The crate follows a layered architecture pattern:
//!
//! ```text
//! ┌─────────────────────────────────────────────────────┐
//! │  Host (renderer, input handling)                    │  ← Embeds the grid
//! └─────────────────────────────────────────────────────┘
//!                        │
//! ┌─────────────────────────────────────────────────────┐
//! │  Application Layer (app/)                           │  ← View controller
//! │  - Event handling                                   │
//! │  - View state + reactive page clamp                 │
//! │  - View model computation                           │
//! └─────────────────────────────────────────────────────┘
//!         │                                      │
//! ┌──────────────────────────┐   ┌──────────────────────────┐
//! │ Pipeline (pipeline/)     │   │ UI Layer (ui/)           │
//! │ - filter → sort → page   │   │ - View model types       │
//! │ - highlight ranges       │   │ - Highlight segments     │
//! └──────────────────────────┘   └──────────────────────────┘
//!                        │
//! ┌─────────────────────────────────────────────────────┐
//! │  Domain Layer (domain/)                             │
//! │  - Cell, Record, Column                             │
//! │  - Error types                                      │
//! └─────────────────────────────────────────────────────┘
//!                        │
//! ┌─────────────────────────────────────────────────────┐
//! │  Observability (observability/)                     │  ← Optional
//! │  - tracing subscriber setup                         │
//! │  - OpenTelemetry JSON-lines span export             │
//! └─────────────────────────────────────────────────────┘
//! ```
//!
//! # Modules
//!
//! - [`app`]: View controller and event dispatch
//! - [`domain`]: Core data types (Cell, Record, Column, errors)
//! - [`pipeline`]: Filter, sort and paginate stages plus highlighting
//! - [`ui`]: Render-ready view model types
//! - [`observability`]: Tracing initialization and span export
//!
//! # Configuration
//!
//! A grid is configured with [`Config`], built in code, from a string map
//! (for hosts that pass options as attributes), or from TOML:
//!
//! ```toml
//! enable_filtering = true
//! default_sort_key = "name"
//! default_sort_direction = "desc"
//! initial_rows_per_page = 10
//! rows_per_page_options = [10, 25, 50]
//! sort_scope = "global"
//! trace_level = "debug"
//! ```
//!
//! # Examples
//!
//! ```rust
//! use datagrid::{initialize, Column, Config, Record};
//!
//! let columns = vec![Column::new("id", "ID"), Column::new("name", "Name")];
//! let records = vec![
//!     Record::new().with("id", 1).with("name", "Ann"),
//!     Record::new().with("id", 2).with("name", "Bob"),
//!     Record::new().with("id", 3).with("name", "Cid"),
//! ];
//!
//! let mut grid = initialize(records, columns, &Config::default());
//!
//! grid.set_filter_query("a");
//! assert_eq!(grid.matched_count(), 1);
//!
//! let vm = grid.compute_viewmodel();
//! assert_eq!(vm.rows[0].cells[1].text, "Ann");
//! assert_eq!(vm.rows[0].cells[1].highlight_ranges, vec![(0, 1)]);
//! ```
//!
//! # Key Design Decisions
//!
//! ## Index-Based Stages
//!
//! Stages exchange row indices over a borrowed record slice, so the input
//! records are never cloned or reordered.
//!
//! ## Global Sort
//!
//! By default every matching row is sorted before the page window is cut.
//! Sorting only the visible page is available as [`SortScope::CurrentPage`].
//!
//! ## Total Handlers
//!
//! Controller handlers never fail. Rejected requests (an out-of-range page,
//! an unsortable column) leave the state untouched and return `false`.

pub mod app;
pub mod domain;
pub mod pipeline;
pub mod ui;

pub mod observability;

pub use app::{handle_event, DataGrid, Event, SortDirection, SortScope, StageToggles, ViewState};
pub use domain::{Cell, Column, GridError, OpaqueHandle, Record, Result};
pub use ui::GridViewModel;

use serde::Deserialize;
use std::collections::BTreeMap;
use std::path::{Path, PathBuf};

/// Engine configuration.
///
/// # Example
///
/// ```rust
/// use datagrid::{Config, SortDirection};
///
/// let config = Config {
///     default_sort_key: Some("name".to_string()),
///     default_sort_direction: SortDirection::Descending,
///     ..Default::default()
/// };
/// assert!(config.enable_filtering);
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default)]
#[allow(clippy::struct_excessive_bools)]
pub struct Config {
    /// Whether the filter stage runs. Default: `true`
    pub enable_filtering: bool,

    /// Whether the sort stage runs. Default: `true`
    pub enable_sorting: bool,

    /// Whether the paginate stage runs. Default: `true`
    pub enable_pagination: bool,

    /// Column to sort by initially.
    ///
    /// Ignored if it does not name a sortable column, in which case the first
    /// column (or the first sortable one) is used.
    pub default_sort_key: Option<String>,

    /// Initial sort direction. Default: ascending
    pub default_sort_direction: SortDirection,

    /// Initial 1-based page, clamped to the available pages. Default: `1`
    pub initial_page: usize,

    /// Initial page size. Falls back to `default_rows_per_page` when unset or zero.
    pub initial_rows_per_page: Option<usize>,

    /// Page sizes offered in the view model. Default: `[5, 10, 25, 50]`
    pub rows_per_page_options: Vec<usize>,

    /// Page size used when no initial size is configured. Default: `5`
    pub default_rows_per_page: usize,

    /// Which rows the sort stage orders. Default: all matches
    pub sort_scope: SortScope,

    /// Tracing level filter.
    ///
    /// Options: `trace`, `debug`, `info`, `warn`, `error`. Default: `"info"`
    pub trace_level: Option<String>,

    /// File to export spans to as JSON lines. Default: stderr logging only
    pub trace_file: Option<PathBuf>,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            enable_filtering: true,
            enable_sorting: true,
            enable_pagination: true,
            default_sort_key: None,
            default_sort_direction: SortDirection::Ascending,
            initial_page: 1,
            initial_rows_per_page: None,
            rows_per_page_options: vec![5, 10, 25, 50],
            default_rows_per_page: pipeline::DEFAULT_ROWS_PER_PAGE,
            sort_scope: SortScope::Global,
            trace_level: None,
            trace_file: None,
        }
    }
}

impl Config {
    /// Parses configuration from a flat string map.
    ///
    /// Hosts that pass options as string attributes hand them over as a
    /// `BTreeMap<String, String>`. Every field is parsed independently and
    /// falls back to its default when missing or malformed.
    ///
    /// # Parsing Rules
    ///
    /// - booleans: `true`/`false`, `yes`/`no`, `on`/`off`, `1`/`0`
    /// - `default_sort_direction`: `asc`, `ascending`, `desc`, `descending`
    /// - `sort_scope`: `global`, `current-page`
    /// - `rows_per_page_options`: comma-separated positive integers
    /// - `initial_page`, `initial_rows_per_page`, `default_rows_per_page`: positive integers
    ///
    /// # Example
    ///
    /// ```rust
    /// use std::collections::BTreeMap;
    /// use datagrid::{Config, SortDirection};
    ///
    /// let mut map = BTreeMap::new();
    /// map.insert("enable_pagination".to_string(), "no".to_string());
    /// map.insert("default_sort_direction".to_string(), "desc".to_string());
    /// map.insert("rows_per_page_options".to_string(), "10, 20".to_string());
    ///
    /// let config = Config::from_map(&map);
    /// assert!(!config.enable_pagination);
    /// assert_eq!(config.default_sort_direction, SortDirection::Descending);
    /// assert_eq!(config.rows_per_page_options, vec![10, 20]);
    /// ```
    #[must_use]
    pub fn from_map(map: &BTreeMap<String, String>) -> Self {
        let defaults = Self::default();

        let flag = |key: &str, default: bool| {
            map.get(key).map_or(default, |raw| {
                parse_bool(raw).unwrap_or_else(|| {
                    tracing::debug!(key, value = %raw, "invalid boolean, using default");
                    default
                })
            })
        };

        let positive = |key: &str| {
            map.get(key).and_then(|raw| {
                let parsed = raw.trim().parse::<usize>().ok().filter(|&n| n > 0);
                if parsed.is_none() {
                    tracing::debug!(key, value = %raw, "invalid positive integer, ignoring");
                }
                parsed
            })
        };

        let non_empty = |key: &str| {
            map.get(key)
                .map(|raw| raw.trim().to_string())
                .filter(|value| !value.is_empty())
        };

        let rows_per_page_options = map
            .get("rows_per_page_options")
            .map(|raw| {
                raw.split(',')
                    .filter_map(|part| part.trim().parse::<usize>().ok())
                    .filter(|&n| n > 0)
                    .collect::<Vec<_>>()
            })
            .filter(|options| !options.is_empty())
            .unwrap_or(defaults.rows_per_page_options);

        Self {
            enable_filtering: flag("enable_filtering", defaults.enable_filtering),
            enable_sorting: flag("enable_sorting", defaults.enable_sorting),
            enable_pagination: flag("enable_pagination", defaults.enable_pagination),
            default_sort_key: non_empty("default_sort_key"),
            default_sort_direction: map
                .get("default_sort_direction")
                .and_then(|raw| raw.parse().ok())
                .unwrap_or(defaults.default_sort_direction),
            initial_page: positive("initial_page").unwrap_or(defaults.initial_page),
            initial_rows_per_page: positive("initial_rows_per_page"),
            rows_per_page_options,
            default_rows_per_page: positive("default_rows_per_page")
                .unwrap_or(defaults.default_rows_per_page),
            sort_scope: map
                .get("sort_scope")
                .and_then(|raw| raw.parse().ok())
                .unwrap_or(defaults.sort_scope),
            trace_level: non_empty("trace_level"),
            trace_file: non_empty("trace_file").map(PathBuf::from),
        }
    }

    /// Parses configuration from a TOML document.
    ///
    /// Missing keys take their defaults; unlike [`from_map`](Self::from_map),
    /// malformed values are errors.
    ///
    /// # Errors
    ///
    /// Returns [`GridError::Toml`] if the document does not parse and
    /// [`GridError::Config`] if a page size is zero.
    ///
    /// # Example
    ///
    /// ```rust
    /// use datagrid::{Config, SortScope};
    ///
    /// let config = Config::from_toml_str("sort_scope = \"current-page\"\ninitial_page = 2")?;
    /// assert_eq!(config.sort_scope, SortScope::CurrentPage);
    /// assert_eq!(config.initial_page, 2);
    /// # Ok::<(), datagrid::GridError>(())
    /// ```
    pub fn from_toml_str(text: &str) -> Result<Self> {
        let config: Self = toml::from_str(text)?;
        config.validate()?;
        Ok(config)
    }

    /// Reads and parses a TOML configuration file.
    ///
    /// # Errors
    ///
    /// Returns [`GridError::Io`] if the file cannot be read, otherwise the
    /// errors of [`from_toml_str`](Self::from_toml_str).
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        tracing::debug!(path = %path.display(), "loading configuration");
        let text = std::fs::read_to_string(path)?;
        Self::from_toml_str(&text)
    }

    fn validate(&self) -> Result<()> {
        if self.default_rows_per_page == 0 {
            return Err(GridError::Config("default_rows_per_page must be positive".to_string()));
        }
        if self.initial_rows_per_page == Some(0) {
            return Err(GridError::Config("initial_rows_per_page must be positive".to_string()));
        }
        if self.rows_per_page_options.contains(&0) {
            return Err(GridError::Config(
                "rows_per_page_options must contain only positive sizes".to_string(),
            ));
        }
        Ok(())
    }
}

fn parse_bool(raw: &str) -> Option<bool> {
    match raw.trim().to_ascii_lowercase().as_str() {
        "true" | "yes" | "on" | "1" => Some(true),
        "false" | "no" | "off" | "0" => Some(false),
        _ => None,
    }
}

/// Creates a grid over `records` and `columns`.
///
/// Installs the tracing subscriber first if `trace_level` or `trace_file` is
/// set.
///
/// # Example
///
/// ```rust
/// use datagrid::{initialize, Config};
///
/// let grid = initialize(vec![], vec![], &Config::default());
/// assert_eq!(grid.total_pages(), 1);
/// ```
pub fn initialize(records: Vec<Record>, columns: Vec<Column>, config: &Config) -> DataGrid {
    if config.trace_level.is_some() || config.trace_file.is_some() {
        observability::init_tracing(config);
    }

    tracing::debug!("initializing data grid");
    DataGrid::new(records, columns, config.clone())
}

/// Creates a grid from JSON documents.
///
/// `records_json` is an array of objects; `columns_json` is an array of
/// `{ "key", "label", "sortable"? }` objects.
///
/// # Errors
///
/// Returns [`GridError::Json`] if either document is malformed and
/// [`GridError::Schema`] if the schema has empty or duplicate keys.
///
/// # Example
///
/// ```rust
/// use datagrid::{initialize_from_json, Config};
///
/// let grid = initialize_from_json(
///     r#"[{"id": 2}, {"id": "10"}, {"id": 1}]"#,
///     r#"[{"key": "id", "label": "ID"}]"#,
///     &Config::default(),
/// )?;
/// assert_eq!(grid.visible_rows()[2].get("id").map(ToString::to_string), Some("10".to_string()));
/// # Ok::<(), datagrid::GridError>(())
/// ```
pub fn initialize_from_json(records_json: &str, columns_json: &str, config: &Config) -> Result<DataGrid> {
    let columns = domain::columns_from_json(columns_json)?;
    let records = domain::records_from_json(records_json)?;
    Ok(initialize(records, columns, config))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn map(pairs: &[(&str, &str)]) -> BTreeMap<String, String> {
        pairs
            .iter()
            .map(|(k, v)| ((*k).to_string(), (*v).to_string()))
            .collect()
    }

    #[test]
    fn empty_map_gives_defaults() {
        assert_eq!(Config::from_map(&BTreeMap::new()), Config::default());
    }

    #[test]
    fn malformed_map_values_fall_back() {
        let config = Config::from_map(&map(&[
            ("enable_sorting", "maybe"),
            ("initial_page", "0"),
            ("initial_rows_per_page", "-3"),
            ("default_sort_direction", "sideways"),
            ("rows_per_page_options", "0, x"),
            ("default_sort_key", "  "),
        ]));
        assert_eq!(config, Config::default());
    }

    #[test]
    fn map_values_are_parsed() {
        let config = Config::from_map(&map(&[
            ("enable_filtering", "off"),
            ("default_sort_key", "name"),
            ("initial_page", "3"),
            ("initial_rows_per_page", "10"),
            ("sort_scope", "current-page"),
            ("trace_file", "/tmp/datagrid.jsonl"),
        ]));
        assert!(!config.enable_filtering);
        assert_eq!(config.default_sort_key.as_deref(), Some("name"));
        assert_eq!(config.initial_page, 3);
        assert_eq!(config.initial_rows_per_page, Some(10));
        assert_eq!(config.sort_scope, SortScope::CurrentPage);
        assert_eq!(config.trace_file, Some(PathBuf::from("/tmp/datagrid.jsonl")));
    }

    #[test]
    fn toml_uses_defaults_for_missing_keys() {
        let config = Config::from_toml_str("default_sort_direction = \"descending\"").unwrap();
        assert_eq!(config.default_sort_direction, SortDirection::Descending);
        assert!(config.enable_pagination);
        assert_eq!(config.rows_per_page_options, vec![5, 10, 25, 50]);
    }

    #[test]
    fn toml_rejects_zero_page_sizes() {
        let err = Config::from_toml_str("rows_per_page_options = [5, 0]").unwrap_err();
        assert!(matches!(err, GridError::Config(_)));

        let err = Config::from_toml_str("default_rows_per_page = 0").unwrap_err();
        assert!(matches!(err, GridError::Config(_)));
    }

    #[test]
    fn toml_rejects_bad_types() {
        let err = Config::from_toml_str("enable_sorting = \"sometimes\"").unwrap_err();
        assert!(matches!(err, GridError::Toml(_)));
    }

    #[test]
    fn json_initialization_validates_schema() {
        let err = initialize_from_json(
            "[]",
            r#"[{"key": "id", "label": "ID"}, {"key": "id", "label": "Again"}]"#,
            &Config::default(),
        )
        .unwrap_err();
        assert!(matches!(err, GridError::Schema(_)));
    }
}
