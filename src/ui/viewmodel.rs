//! View model types representing a render-ready grid.
//!
//! View models are immutable snapshots computed from a
//! [`DataGrid`](crate::DataGrid) via `DataGrid::compute_viewmodel()`. They
//! contain no business logic, only display-ready data: the page's cells as
//! text with highlight ranges, header cells with their sort indicator, page
//! controls and a summary line.
//!
//! # Example
//!
//! ```rust
//! use datagrid::{Column, Config, DataGrid, Record};
//!
//! let grid = DataGrid::new(
//!     vec![Record::new().with("name", "Ann")],
//!     vec![Column::new("name", "Name")],
//!     Config::default(),
//! );
//!
//! let vm = grid.compute_viewmodel();
//! assert_eq!(vm.header[0].indicator(), "▲");
//! assert_eq!(vm.rows[0].cells[0].text, "Ann");
//! assert_eq!(vm.summary.text, "Showing 1–1 of 1");
//! ```

use crate::app::modes::SortDirection;
use crate::domain::OpaqueHandle;

/// Complete view model for one render of the grid.
#[derive(Debug, Clone, PartialEq)]
pub struct GridViewModel {
    /// One header cell per schema column, in schema order.
    pub header: Vec<HeaderCell>,

    /// Rows on the current page, in display order.
    pub rows: Vec<DisplayRow>,

    /// Page controls. `None` when pagination is disabled.
    pub pagination: Option<PaginationInfo>,

    /// Summary line describing the window.
    pub summary: SummaryInfo,

    /// Filter input state. `None` when filtering is disabled.
    pub filter_bar: Option<FilterBarInfo>,

    /// Message to show in place of rows when nothing matches.
    pub empty_state: Option<EmptyState>,
}

/// Display information for a column header.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HeaderCell {
    /// Column key.
    pub key: String,

    /// Column label.
    pub label: String,

    /// Whether clicking the header toggles sorting.
    pub sortable: bool,

    /// Direction of the active sort, if this column is the sort column.
    pub sort_direction: Option<SortDirection>,
}

impl HeaderCell {
    /// Glyph for the sort indicator, or `""` when the column is not sorted.
    #[must_use]
    pub fn indicator(&self) -> &'static str {
        self.sort_direction.map_or("", SortDirection::indicator)
    }
}

/// One row of the window.
#[derive(Debug, Clone, PartialEq)]
pub struct DisplayRow {
    /// Index of the source record in the grid's input.
    pub record_index: usize,

    /// One cell per schema column, in schema order.
    pub cells: Vec<DisplayCell>,
}

/// Display information for a single cell.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DisplayCell {
    /// Column key the cell belongs to.
    pub key: String,

    /// Text form of the cell. Empty for missing, empty and opaque cells.
    pub text: String,

    /// Character ranges of `text` that match the filter query.
    ///
    /// Each tuple is `(start_index, end_index)` in character indices with an
    /// exclusive end.
    pub highlight_ranges: Vec<(usize, usize)>,

    /// Handle to hand back to the renderer for opaque cells.
    pub opaque: Option<OpaqueHandle>,
}

/// Page control state.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PaginationInfo {
    /// 1-based current page.
    pub current_page: usize,

    /// Number of pages, at least 1.
    pub total_pages: usize,

    /// Whether the "previous" control is enabled.
    pub can_previous: bool,

    /// Whether the "next" control is enabled.
    pub can_next: bool,

    /// Active page size.
    pub rows_per_page: usize,

    /// Page sizes to offer in a selector.
    pub rows_per_page_options: Vec<usize>,
}

/// Summary line information.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SummaryInfo {
    /// 1-based position of the first row shown, or 0.
    pub start_index: usize,

    /// 1-based position of the last row shown, or 0.
    pub end_index: usize,

    /// Number of rows that passed the filter.
    pub total_matches: usize,

    /// Formatted summary (e.g., "Showing 1–5 of 12").
    pub text: String,
}

/// Filter input display information.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FilterBarInfo {
    /// Current filter query text.
    pub query: String,
}

/// Empty state message display information.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EmptyState {
    /// Primary message (e.g., "No matching records").
    pub message: String,

    /// Secondary explanatory text.
    pub subtitle: String,
}
