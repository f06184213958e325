//! View controller: the single owner of grid view state.
//!
//! [`DataGrid`] holds the records, the column schema, the engine options and
//! the mutable [`ViewState`]. Every handler mutates the view state and then
//! calls `recompute`, which re-runs the pipeline and re-establishes the
//! state invariants. Nothing outside this module writes to the view state.
//!
//! # Invariants
//!
//! After every handler returns:
//!
//! - `current_page` lies within `1..=total_pages`
//! - `sort_key`, when sorting is enabled, names a sortable column (or is
//!   `None` when the schema has no sortable column)
//! - `rows_per_page` is positive
//!
//! # Example
//!
//! ```rust
//! use datagrid::{Column, Config, DataGrid, Record};
//!
//! let columns = vec![Column::new("id", "ID"), Column::new("name", "Name")];
//! let records = vec![
//!     Record::new().with("id", 2).with("name", "Bob"),
//!     Record::new().with("id", 1).with("name", "Ann"),
//! ];
//!
//! let mut grid = DataGrid::new(records, columns, Config::default());
//! assert_eq!(grid.visible_rows()[0].get("name"), Some(&"Ann".into()));
//!
//! grid.toggle_sort("id");
//! assert_eq!(grid.visible_rows()[0].get("name"), Some(&"Bob".into()));
//! ```

use super::modes::{SortDirection, SortScope, StageToggles};
use crate::domain::{find_sortable_column, Cell, Column, Record};
use crate::pipeline::{self, find_matches, PageWindow, PipelineRequest, DEFAULT_ROWS_PER_PAGE};
use crate::ui::helpers::format_summary;
use crate::ui::viewmodel::{
    DisplayCell, DisplayRow, EmptyState, FilterBarInfo, GridViewModel, HeaderCell, PaginationInfo,
    SummaryInfo,
};
use crate::Config;

/// Mutable filter, sort and pagination configuration.
///
/// Read it through [`DataGrid::view_state`]; change it only through the
/// controller's handlers.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ViewState {
    /// Free-text filter query as entered (trimmed only when matching).
    pub filter_query: String,

    /// Key of the active sort column.
    pub sort_key: Option<String>,

    /// Direction of the active sort column.
    pub sort_direction: SortDirection,

    /// 1-based page shown in the window.
    pub current_page: usize,

    /// Page size.
    pub rows_per_page: usize,
}

/// Client-side data grid engine.
///
/// Owns the inputs and the view state, and caches the derived pipeline
/// output from the last recomputation.
#[derive(Debug, Clone)]
pub struct DataGrid {
    records: Vec<Record>,
    columns: Vec<Column>,
    options: Config,
    state: ViewState,
    output: pipeline::PipelineOutput,
}

impl DataGrid {
    /// Creates a grid with the view state initialized from `options`.
    ///
    /// - filter query is empty
    /// - sort key is the configured default if it names a sortable column,
    ///   otherwise the first column if sortable, otherwise the first sortable
    ///   column; `None` when sorting is disabled
    /// - sort direction is the configured default
    /// - page is the configured initial page (clamped after the first pass)
    /// - rows per page is the configured initial value, falling back to the
    ///   configured default and then to [`DEFAULT_ROWS_PER_PAGE`]
    #[must_use]
    pub fn new(records: Vec<Record>, columns: Vec<Column>, options: Config) -> Self {
        let rows_per_page = [options.initial_rows_per_page, Some(options.default_rows_per_page)]
            .into_iter()
            .flatten()
            .find(|&count| count > 0)
            .unwrap_or(DEFAULT_ROWS_PER_PAGE);

        let state = ViewState {
            filter_query: String::new(),
            sort_key: None,
            sort_direction: options.default_sort_direction,
            current_page: options.initial_page.max(1),
            rows_per_page,
        };

        let mut grid = Self {
            records,
            columns,
            options,
            state,
            output: pipeline::PipelineOutput {
                matched: Vec::new(),
                visible: Vec::new(),
                window: PageWindow::single(0),
            },
        };

        grid.state.sort_key = grid.default_sort_key();
        grid.recompute();

        tracing::debug!(
            record_count = grid.records.len(),
            column_count = grid.columns.len(),
            sort_key = ?grid.state.sort_key,
            rows_per_page = grid.state.rows_per_page,
            "data grid created"
        );

        grid
    }

    /// Sets the filter query and returns to page 1.
    ///
    /// No-op when filtering is disabled. Returns whether the view state
    /// changed.
    pub fn set_filter_query(&mut self, text: impl Into<String>) -> bool {
        if !self.options.enable_filtering {
            tracing::debug!("filter ignored: filtering disabled");
            return false;
        }

        let text = text.into();
        if text == self.state.filter_query && self.state.current_page == 1 {
            return false;
        }

        self.state.filter_query = text;
        self.state.current_page = 1;
        self.recompute();
        true
    }

    /// Clears the filter query. Same as `set_filter_query("")`.
    pub fn clear_filter(&mut self) -> bool {
        self.set_filter_query(String::new())
    }

    /// Sorts by `column_key`, or flips the direction if it is already active.
    ///
    /// A new key always starts ascending. Unknown and unsortable columns are
    /// ignored, as is every call while sorting is disabled. The current page
    /// is kept.
    pub fn toggle_sort(&mut self, column_key: &str) -> bool {
        if !self.options.enable_sorting {
            tracing::debug!(column = column_key, "sort ignored: sorting disabled");
            return false;
        }

        if find_sortable_column(&self.columns, column_key).is_none() {
            tracing::debug!(column = column_key, "sort ignored: column unknown or not sortable");
            return false;
        }

        if self.state.sort_key.as_deref() == Some(column_key) {
            self.state.sort_direction = self.state.sort_direction.flipped();
        } else {
            self.state.sort_key = Some(column_key.to_string());
            self.state.sort_direction = SortDirection::Ascending;
        }

        self.recompute();
        true
    }

    /// Moves to `page` if it lies within `1..=total_pages`.
    ///
    /// Out-of-range requests are rejected and leave the page unchanged.
    pub fn set_page(&mut self, page: usize) -> bool {
        if page < 1 || page > self.total_pages() {
            tracing::debug!(page, total_pages = self.total_pages(), "page request ignored");
            return false;
        }
        if page == self.state.current_page {
            return false;
        }

        self.state.current_page = page;
        self.recompute();
        true
    }

    /// Moves to the next page, if there is one.
    pub fn next_page(&mut self) -> bool {
        self.set_page(self.state.current_page + 1)
    }

    /// Moves to the previous page, if there is one.
    pub fn previous_page(&mut self) -> bool {
        self.set_page(self.state.current_page.saturating_sub(1))
    }

    /// Moves to page 1.
    pub fn first_page(&mut self) -> bool {
        self.set_page(1)
    }

    /// Moves to the last page.
    pub fn last_page(&mut self) -> bool {
        self.set_page(self.total_pages())
    }

    /// Changes the page size and returns to page 1.
    ///
    /// A count of zero is ignored.
    pub fn set_rows_per_page(&mut self, count: usize) -> bool {
        if count == 0 {
            tracing::debug!("rows-per-page ignored: must be positive");
            return false;
        }

        self.state.rows_per_page = count;
        self.state.current_page = 1;
        self.recompute();
        true
    }

    /// Replaces the record set, keeping the view state.
    ///
    /// The current page is clamped if the new data has fewer pages.
    pub fn set_records(&mut self, records: Vec<Record>) -> bool {
        self.records = records;
        self.recompute();
        true
    }

    /// Replaces the column schema.
    ///
    /// If the active sort key no longer names a sortable column, the default
    /// sort key is chosen again.
    pub fn set_columns(&mut self, columns: Vec<Column>) -> bool {
        self.columns = columns;
        let still_valid = self
            .state
            .sort_key
            .as_deref()
            .is_some_and(|key| find_sortable_column(&self.columns, key).is_some());
        if !still_valid {
            self.state.sort_key = self.default_sort_key();
            self.state.sort_direction = self.options.default_sort_direction;
        }
        self.recompute();
        true
    }

    /// Current view state.
    #[must_use]
    pub const fn view_state(&self) -> &ViewState {
        &self.state
    }

    /// Engine options the grid was created with.
    #[must_use]
    pub const fn options(&self) -> &Config {
        &self.options
    }

    /// All records, in input order.
    #[must_use]
    pub fn records(&self) -> &[Record] {
        &self.records
    }

    /// Column schema.
    #[must_use]
    pub fn columns(&self) -> &[Column] {
        &self.columns
    }

    /// Active stage toggles.
    #[must_use]
    pub const fn stages(&self) -> StageToggles {
        StageToggles {
            filtering: self.options.enable_filtering,
            sorting: self.options.enable_sorting,
            pagination: self.options.enable_pagination,
        }
    }

    /// Records on the current page, in display order.
    #[must_use]
    pub fn visible_rows(&self) -> Vec<&Record> {
        pipeline::select(&self.records, &self.output.visible)
    }

    /// Indices (into [`records`](Self::records)) of the rows on the current page.
    #[must_use]
    pub fn visible_indices(&self) -> &[usize] {
        &self.output.visible
    }

    /// Indices of every row that passed the filter, in pipeline order.
    #[must_use]
    pub fn matched_indices(&self) -> &[usize] {
        &self.output.matched
    }

    /// Number of rows that passed the filter.
    #[must_use]
    pub fn matched_count(&self) -> usize {
        self.output.matched.len()
    }

    /// Number of pages, at least 1.
    #[must_use]
    pub const fn total_pages(&self) -> usize {
        self.output.window.total_pages
    }

    /// Window metadata for the current page.
    #[must_use]
    pub const fn page_window(&self) -> &PageWindow {
        &self.output.window
    }

    /// Active sort column and direction, when sorting is enabled.
    #[must_use]
    pub fn active_sort(&self) -> Option<(&Column, SortDirection)> {
        if !self.options.enable_sorting {
            return None;
        }
        let key = self.state.sort_key.as_deref()?;
        find_sortable_column(&self.columns, key).map(|column| (column, self.state.sort_direction))
    }

    /// Re-runs the pipeline and applies the reactive page clamp.
    fn recompute(&mut self) {
        let _span = tracing::debug_span!(
            "recompute",
            records = self.records.len(),
            query_len = self.state.filter_query.len(),
            sort_key = ?self.state.sort_key,
            page = self.state.current_page
        )
        .entered();

        let request = PipelineRequest {
            query: &self.state.filter_query,
            sort: self.active_sort(),
            page: self.state.current_page,
            rows_per_page: self.state.rows_per_page,
            stages: self.stages(),
            scope: self.options.sort_scope,
        };

        let output = pipeline::run(&self.records, &self.columns, &request);

        if output.window.current_page != self.state.current_page {
            tracing::debug!(
                from = self.state.current_page,
                to = output.window.current_page,
                "current page clamped"
            );
        }

        self.state.current_page = output.window.current_page;
        self.output = output;

        tracing::debug!(
            matched = self.output.matched.len(),
            visible = self.output.visible.len(),
            total_pages = self.output.window.total_pages,
            "pipeline recomputed"
        );
    }

    /// Picks the sort key a fresh grid starts with.
    fn default_sort_key(&self) -> Option<String> {
        if !self.options.enable_sorting {
            return None;
        }

        self.options
            .default_sort_key
            .as_deref()
            .and_then(|key| find_sortable_column(&self.columns, key))
            .or_else(|| self.columns.first().filter(|column| column.sortable))
            .or_else(|| self.columns.iter().find(|column| column.sortable))
            .map(|column| column.key.clone())
    }

    /// Which rows the sort stage orders.
    #[must_use]
    pub const fn sort_scope(&self) -> SortScope {
        self.options.sort_scope
    }

    /// Computes a render-ready snapshot of the grid.
    ///
    /// Cells are converted to text, and every non-overlapping occurrence of
    /// the filter query in a text or number cell is reported as a highlight
    /// range. Pagination and filter bar info are omitted when their stages
    /// are disabled.
    #[must_use]
    pub fn compute_viewmodel(&self) -> GridViewModel {
        let _span = tracing::debug_span!("compute_viewmodel", visible = self.output.visible.len()).entered();

        let window = &self.output.window;
        let matched = self.output.matched.len();

        let rows = self
            .output
            .visible
            .iter()
            .filter_map(|&index| self.records.get(index).map(|record| (index, record)))
            .map(|(record_index, record)| DisplayRow {
                record_index,
                cells: self.compute_display_cells(record),
            })
            .collect();

        let pagination = self.options.enable_pagination.then(|| PaginationInfo {
            current_page: window.current_page,
            total_pages: window.total_pages,
            can_previous: window.has_previous(),
            can_next: window.has_next(),
            rows_per_page: self.state.rows_per_page,
            rows_per_page_options: self.options.rows_per_page_options.clone(),
        });

        let empty_state = (matched == 0).then(|| EmptyState {
            message: "No matching records".to_string(),
            subtitle: if self.records.is_empty() {
                "There is no data to display".to_string()
            } else {
                "Try a different filter".to_string()
            },
        });

        GridViewModel {
            header: self.compute_header(),
            rows,
            pagination,
            summary: SummaryInfo {
                start_index: window.start_index,
                end_index: window.end_index,
                total_matches: matched,
                text: format_summary(window.start_index, window.end_index, matched),
            },
            filter_bar: self.options.enable_filtering.then(|| FilterBarInfo {
                query: self.state.filter_query.clone(),
            }),
            empty_state,
        }
    }

    fn compute_header(&self) -> Vec<HeaderCell> {
        let active = self.active_sort();
        self.columns
            .iter()
            .map(|column| HeaderCell {
                key: column.key.clone(),
                label: column.label.clone(),
                sortable: column.sortable && self.options.enable_sorting,
                sort_direction: active
                    .filter(|(sorted, _)| sorted.key == column.key)
                    .map(|(_, direction)| direction),
            })
            .collect()
    }

    fn compute_display_cells(&self, record: &Record) -> Vec<DisplayCell> {
        self.columns
            .iter()
            .map(|column| {
                let cell = record.get(&column.key);
                let text = cell.map(Cell::to_string).unwrap_or_default();
                let highlight_ranges = cell
                    .and_then(Cell::match_text)
                    .map(|matchable| find_matches(&matchable, &self.state.filter_query))
                    .unwrap_or_default();
                let opaque = match cell {
                    Some(Cell::Opaque(handle)) => Some(handle.clone()),
                    _ => None,
                };

                DisplayCell {
                    key: column.key.clone(),
                    text,
                    highlight_ranges,
                    opaque,
                }
            })
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn people() -> (Vec<Record>, Vec<Column>) {
        let records = vec![
            Record::new().with("id", 2).with("name", "Bob"),
            Record::new().with("id", 1).with("name", "Ann"),
            Record::new().with("id", 4).with("name", "Cid"),
            Record::new().with("id", 3).with("name", "Deb"),
        ];
        let columns = vec![Column::new("id", "ID"), Column::new("name", "Name")];
        (records, columns)
    }

    fn numbered(count: i32) -> Vec<Record> {
        (1..=count)
            .map(|n| Record::new().with("n", n).with("label", format!("row {n}")))
            .collect()
    }

    fn numbered_columns() -> Vec<Column> {
        vec![Column::new("n", "#"), Column::new("label", "Label")]
    }

    fn ids(grid: &DataGrid, key: &str) -> Vec<f64> {
        grid.visible_rows()
            .iter()
            .filter_map(|record| record.get(key))
            .map(crate::domain::Cell::to_number)
            .collect()
    }

    #[test]
    fn defaults() {
        let (records, columns) = people();
        let grid = DataGrid::new(records, columns, Config::default());
        let state = grid.view_state();

        assert_eq!(state.filter_query, "");
        assert_eq!(state.sort_key.as_deref(), Some("id"));
        assert_eq!(state.sort_direction, SortDirection::Ascending);
        assert_eq!(state.current_page, 1);
        assert_eq!(state.rows_per_page, 5);
    }

    #[test]
    fn default_sort_key_skips_unsortable_first_column() {
        let (records, _) = people();
        let columns = vec![Column::new("id", "ID").unsortable(), Column::new("name", "Name")];
        let grid = DataGrid::new(records, columns, Config::default());
        assert_eq!(grid.view_state().sort_key.as_deref(), Some("name"));
    }

    #[test]
    fn configured_default_sort_key_wins() {
        let (records, columns) = people();
        let config = Config {
            default_sort_key: Some("name".to_string()),
            default_sort_direction: SortDirection::Descending,
            ..Config::default()
        };
        let grid = DataGrid::new(records, columns, config);
        assert_eq!(grid.view_state().sort_key.as_deref(), Some("name"));
        let names: Vec<String> = grid
            .visible_rows()
            .iter()
            .map(|r| r.get("name").map(ToString::to_string).unwrap_or_default())
            .collect();
        assert_eq!(names, vec!["Deb", "Cid", "Bob", "Ann"]);
    }

    #[test]
    fn unknown_default_sort_key_falls_back_to_first_column() {
        let (records, columns) = people();
        let config = Config {
            default_sort_key: Some("nope".to_string()),
            ..Config::default()
        };
        let grid = DataGrid::new(records, columns, config);
        assert_eq!(grid.view_state().sort_key.as_deref(), Some("id"));
    }

    #[test]
    fn toggle_sort_cycle() {
        let (records, columns) = people();
        let mut grid = DataGrid::new(records, columns, Config::default());

        assert!(grid.toggle_sort("name"));
        assert_eq!(grid.view_state().sort_key.as_deref(), Some("name"));
        assert_eq!(grid.view_state().sort_direction, SortDirection::Ascending);

        assert!(grid.toggle_sort("name"));
        assert_eq!(grid.view_state().sort_direction, SortDirection::Descending);

        assert!(grid.toggle_sort("id"));
        assert_eq!(grid.view_state().sort_key.as_deref(), Some("id"));
        assert_eq!(grid.view_state().sort_direction, SortDirection::Ascending);
    }

    #[test]
    fn toggle_sort_ignores_unknown_and_unsortable_columns() {
        let (records, _) = people();
        let columns = vec![Column::new("id", "ID"), Column::new("name", "Name").unsortable()];
        let mut grid = DataGrid::new(records, columns, Config::default());
        let before = grid.view_state().clone();

        assert!(!grid.toggle_sort("name"));
        assert!(!grid.toggle_sort("missing"));
        assert_eq!(grid.view_state(), &before);
    }

    #[test]
    fn sorting_keeps_current_page() {
        let mut grid = DataGrid::new(numbered(12), numbered_columns(), Config::default());
        assert!(grid.set_page(2));
        grid.toggle_sort("n");
        assert_eq!(grid.view_state().current_page, 2);
        assert_eq!(ids(&grid, "n"), vec![7.0, 6.0, 5.0, 4.0, 3.0]);
    }

    #[test]
    fn pagination_windowing() {
        let mut grid = DataGrid::new(numbered(12), numbered_columns(), Config::default());
        assert_eq!(grid.total_pages(), 3);
        assert_eq!(ids(&grid, "n"), vec![1.0, 2.0, 3.0, 4.0, 5.0]);

        assert!(grid.set_page(3));
        assert_eq!(ids(&grid, "n"), vec![11.0, 12.0]);

        assert!(!grid.set_page(4));
        assert!(!grid.set_page(0));
        assert_eq!(grid.view_state().current_page, 3);
    }

    #[test]
    fn page_navigation_helpers() {
        let mut grid = DataGrid::new(numbered(12), numbered_columns(), Config::default());
        assert!(!grid.previous_page());
        assert!(grid.next_page());
        assert!(grid.last_page());
        assert_eq!(grid.view_state().current_page, 3);
        assert!(!grid.next_page());
        assert!(grid.first_page());
        assert_eq!(grid.view_state().current_page, 1);
    }

    #[test]
    fn filter_resets_page_and_clamps() {
        let mut grid = DataGrid::new(numbered(12), numbered_columns(), Config::default());
        grid.set_page(3);

        // "row 1", "row 10", "row 11", "row 12"
        assert!(grid.set_filter_query("row 1"));
        assert_eq!(grid.matched_count(), 4);
        assert_eq!(grid.total_pages(), 1);
        assert_eq!(grid.view_state().current_page, 1);
    }

    #[test]
    fn shrinking_records_clamps_page() {
        let mut grid = DataGrid::new(numbered(12), numbered_columns(), Config::default());
        grid.set_page(3);
        grid.set_records(numbered(4));
        assert_eq!(grid.view_state().current_page, 1);
        assert_eq!(grid.total_pages(), 1);
    }

    #[test]
    fn rows_per_page_resets_page_and_rejects_zero() {
        let mut grid = DataGrid::new(numbered(12), numbered_columns(), Config::default());
        grid.set_page(2);

        assert!(!grid.set_rows_per_page(0));
        assert_eq!(grid.view_state().rows_per_page, 5);
        assert_eq!(grid.view_state().current_page, 2);

        assert!(grid.set_rows_per_page(4));
        assert_eq!(grid.view_state().current_page, 1);
        assert_eq!(grid.total_pages(), 3);
    }

    #[test]
    fn huge_rows_per_page_shows_everything_on_one_page() {
        let mut grid = DataGrid::new(numbered(12), numbered_columns(), Config::default());
        grid.set_page(3);

        assert!(grid.set_rows_per_page(usize::MAX));
        assert_eq!(grid.total_pages(), 1);
        assert_eq!(grid.view_state().current_page, 1);
        assert_eq!(grid.visible_rows().len(), 12);
        assert!(!grid.set_page(2));

        let pagination = grid.compute_viewmodel().pagination.unwrap();
        assert!(!pagination.can_next);
        assert_eq!(pagination.total_pages, 1);
    }

    #[test]
    fn disabled_filtering_ignores_queries() {
        let (records, columns) = people();
        let config = Config {
            enable_filtering: false,
            ..Config::default()
        };
        let mut grid = DataGrid::new(records, columns, config);
        let before: Vec<Record> = grid.visible_rows().into_iter().cloned().collect();

        assert!(!grid.set_filter_query("Ann"));
        let after: Vec<Record> = grid.visible_rows().into_iter().cloned().collect();
        assert_eq!(before, after);
        assert_eq!(grid.view_state().filter_query, "");
    }

    #[test]
    fn disabled_sorting_keeps_input_order() {
        let (records, columns) = people();
        let config = Config {
            enable_sorting: false,
            ..Config::default()
        };
        let mut grid = DataGrid::new(records, columns, config);
        assert_eq!(grid.view_state().sort_key, None);
        assert!(!grid.toggle_sort("id"));
        assert_eq!(ids(&grid, "id"), vec![2.0, 1.0, 4.0, 3.0]);
    }

    #[test]
    fn disabled_pagination_shows_everything() {
        let config = Config {
            enable_pagination: false,
            ..Config::default()
        };
        let mut grid = DataGrid::new(numbered(12), numbered_columns(), config);
        assert_eq!(grid.visible_rows().len(), 12);
        assert_eq!(grid.total_pages(), 1);
        assert!(!grid.set_page(2));
    }

    #[test]
    fn replacing_columns_revalidates_sort_key() {
        let (records, columns) = people();
        let mut grid = DataGrid::new(records, columns, Config::default());
        grid.toggle_sort("name");

        grid.set_columns(vec![Column::new("id", "ID")]);
        assert_eq!(grid.view_state().sort_key.as_deref(), Some("id"));

        grid.set_columns(vec![Column::new("id", "ID").unsortable()]);
        assert_eq!(grid.view_state().sort_key, None);
    }

    #[test]
    fn empty_everything_is_consistent() {
        let mut grid = DataGrid::new(Vec::new(), Vec::new(), Config::default());
        assert!(grid.visible_rows().is_empty());
        assert_eq!(grid.total_pages(), 1);
        assert_eq!(grid.view_state().sort_key, None);
        assert!(!grid.toggle_sort("id"));
        assert!(!grid.set_page(2));
        grid.set_filter_query("x");
        assert_eq!(grid.page_window().start_index, 0);
    }

    #[test]
    fn initial_page_is_clamped() {
        let config = Config {
            initial_page: 9,
            ..Config::default()
        };
        let grid = DataGrid::new(numbered(12), numbered_columns(), config);
        assert_eq!(grid.view_state().current_page, 3);
    }

    #[test]
    fn non_positive_initial_rows_per_page_falls_back() {
        let config = Config {
            initial_rows_per_page: Some(0),
            default_rows_per_page: 0,
            ..Config::default()
        };
        let grid = DataGrid::new(numbered(12), numbered_columns(), config);
        assert_eq!(grid.view_state().rows_per_page, DEFAULT_ROWS_PER_PAGE);
    }

    #[test]
    fn viewmodel_header_marks_active_sort() {
        let (records, columns) = people();
        let mut grid = DataGrid::new(records, columns, Config::default());
        grid.toggle_sort("name");
        grid.toggle_sort("name");

        let vm = grid.compute_viewmodel();
        assert_eq!(vm.header[0].sort_direction, None);
        assert_eq!(vm.header[0].indicator(), "");
        assert_eq!(vm.header[1].sort_direction, Some(SortDirection::Descending));
        assert_eq!(vm.header[1].indicator(), "▼");
    }

    #[test]
    fn viewmodel_rows_carry_highlights() {
        let (records, columns) = people();
        let mut grid = DataGrid::new(records, columns, Config::default());
        grid.set_filter_query("b");

        let vm = grid.compute_viewmodel();
        // Bob (id 2) and Deb (id 3)
        assert_eq!(vm.rows.len(), 2);
        assert_eq!(vm.rows[0].record_index, 0);
        assert_eq!(vm.rows[1].cells[1].highlight_ranges, vec![(2, 3)]);
        let name = &vm.rows[0].cells[1];
        assert_eq!(name.text, "Bob");
        assert_eq!(name.highlight_ranges, vec![(0, 1), (2, 3)]);
        assert!(vm.rows[0].cells[0].highlight_ranges.is_empty());
        assert_eq!(vm.filter_bar.map(|bar| bar.query), Some("b".to_string()));
    }

    #[test]
    fn viewmodel_pagination_and_summary() {
        let mut grid = DataGrid::new(numbered(12), numbered_columns(), Config::default());
        grid.set_page(2);

        let vm = grid.compute_viewmodel();
        let pagination = vm.pagination.unwrap();
        assert_eq!(pagination.current_page, 2);
        assert_eq!(pagination.total_pages, 3);
        assert!(pagination.can_previous);
        assert!(pagination.can_next);
        assert_eq!(pagination.rows_per_page_options, vec![5, 10, 25, 50]);
        assert_eq!(vm.summary.text, "Showing 6–10 of 12");
        assert!(vm.empty_state.is_none());
    }

    #[test]
    fn viewmodel_empty_state() {
        let (records, columns) = people();
        let mut grid = DataGrid::new(records, columns, Config::default());
        grid.set_filter_query("zzz");

        let vm = grid.compute_viewmodel();
        assert!(vm.rows.is_empty());
        assert_eq!(vm.summary.text, "No matching records");
        assert_eq!(vm.summary.start_index, 0);
        assert_eq!(vm.summary.end_index, 0);
        assert_eq!(
            vm.empty_state.map(|state| state.message),
            Some("No matching records".to_string())
        );
    }

    #[test]
    fn viewmodel_opaque_cells_pass_through() {
        let records = vec![Record::new()
            .with("name", "Ann")
            .with("avatar", crate::domain::OpaqueHandle::new("img-1"))];
        let columns = vec![Column::new("name", "Name"), Column::new("avatar", "Avatar").unsortable()];
        let config = Config {
            enable_filtering: false,
            enable_pagination: false,
            ..Config::default()
        };
        let grid = DataGrid::new(records, columns, config);

        let vm = grid.compute_viewmodel();
        let avatar = &vm.rows[0].cells[1];
        assert_eq!(avatar.text, "");
        assert_eq!(avatar.opaque.as_ref().map(|h| h.tag()), Some("img-1"));
        assert!(vm.pagination.is_none());
        assert!(vm.filter_bar.is_none());
        assert!(!vm.header[1].sortable);
    }
}
