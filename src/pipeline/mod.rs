//! The record pipeline: filter, sort, paginate.
//!
//! Every stage is a pure function over a borrowed record slice. Stages pass
//! row *indices* to each other rather than records, so the input records are
//! never copied, reordered or mutated.
//!
//! ```text
//! records ─→ filter_rows ─→ sort_rows ─→ paginate ─→ window
//!             (indices)     (reorder)    (range)
//! ```
//!
//! [`run`] wires the stages together according to the active
//! [`StageToggles`] and [`SortScope`]. A disabled stage is the identity.
//!
//! # Modules
//!
//! - [`filter`]: Case-insensitive substring matching across the schema
//! - [`sort`]: Numeric/textual type inference and single-column ordering
//! - [`paginate`]: Page windows and display bounds
//! - [`highlight`]: Non-overlapping match ranges for highlighting

pub mod filter;
pub mod highlight;
pub mod paginate;
pub mod sort;

pub use filter::{filter_rows, record_matches};
pub use highlight::find_matches;
pub use paginate::{paginate, total_pages, PageWindow, DEFAULT_ROWS_PER_PAGE};
pub use sort::{compare_text, infer_column_kind, sort_rows, ColumnKind};

use crate::app::modes::{SortDirection, SortScope, StageToggles};
use crate::domain::{Column, Record};

/// Inputs for one pipeline pass besides the records and schema.
#[derive(Debug, Clone, Copy)]
pub struct PipelineRequest<'a> {
    /// Raw filter query (trimmed by the filter stage).
    pub query: &'a str,
    /// Active sort column and direction, if any.
    pub sort: Option<(&'a Column, SortDirection)>,
    /// Requested page; clamped by the paginate stage.
    pub page: usize,
    /// Rows per page.
    pub rows_per_page: usize,
    /// Which stages run.
    pub stages: StageToggles,
    /// Whether sorting spans all matches or just the visible page.
    pub scope: SortScope,
}

/// Result of one pipeline pass.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PipelineOutput {
    /// Every row that passed the filter, in pipeline order.
    ///
    /// Under [`SortScope::Global`] this is fully sorted. Under
    /// [`SortScope::CurrentPage`] it keeps input order.
    pub matched: Vec<usize>,
    /// Rows on the current page, in display order.
    pub visible: Vec<usize>,
    /// The page window over `matched`.
    pub window: PageWindow,
}

/// Runs filter → sort → paginate (or filter → paginate → sort for
/// [`SortScope::CurrentPage`]).
///
/// # Examples
///
/// ```
/// use datagrid::{Column, Record, SortDirection, SortScope, StageToggles};
/// use datagrid::pipeline::{run, PipelineRequest};
///
/// let columns = vec![Column::new("id", "ID")];
/// let records: Vec<Record> = [3, 1, 2].iter().map(|id| Record::new().with("id", *id)).collect();
///
/// let output = run(&records, &columns, &PipelineRequest {
///     query: "",
///     sort: Some((&columns[0], SortDirection::Ascending)),
///     page: 1,
///     rows_per_page: 2,
///     stages: StageToggles::default(),
///     scope: SortScope::Global,
/// });
///
/// assert_eq!(output.visible, vec![1, 2]);
/// assert_eq!(output.window.total_pages, 2);
/// ```
#[must_use]
pub fn run(records: &[Record], columns: &[Column], request: &PipelineRequest<'_>) -> PipelineOutput {
    let stages = request.stages;

    let mut matched = if stages.filtering {
        filter_rows(records, columns, request.query)
    } else {
        (0..records.len()).collect()
    };

    let sort = request.sort.filter(|_| stages.sorting);

    if let (Some((column, direction)), SortScope::Global) = (sort, request.scope) {
        sort_rows(records, &mut matched, column, direction);
    }

    let window = if stages.pagination {
        paginate(matched.len(), request.page, request.rows_per_page)
    } else {
        PageWindow::single(matched.len())
    };

    let mut visible = matched[window.range.clone()].to_vec();

    if let (Some((column, direction)), SortScope::CurrentPage) = (sort, request.scope) {
        sort_rows(records, &mut visible, column, direction);
    }

    PipelineOutput {
        matched,
        visible,
        window,
    }
}

/// Resolves row indices to record references.
///
/// Indices out of bounds are skipped.
#[must_use]
pub fn select<'a>(records: &'a [Record], rows: &[usize]) -> Vec<&'a Record> {
    rows.iter().filter_map(|&row| records.get(row)).collect()
}

/// Case folding shared by the filter and sort stages.
pub(crate) fn fold_case(text: &str) -> String {
    text.chars().flat_map(char::to_lowercase).collect()
}
