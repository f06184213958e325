//! Paginate stage: page-sized windows over the ordered rows.

use std::ops::Range;

/// Rows per page used when none (or zero) is configured.
pub const DEFAULT_ROWS_PER_PAGE: usize = 5;

/// The page-sized window over an ordered row list plus display metadata.
///
/// `start_index` and `end_index` are 1-based and inclusive, ready for a
/// summary line such as "Showing 6–10 of 12". Both are `0` when there are no
/// rows.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PageWindow {
    /// Positions of the window within the ordered rows.
    pub range: Range<usize>,
    /// The page the window shows, always within `1..=total_pages`.
    pub current_page: usize,
    /// Number of pages, at least 1.
    pub total_pages: usize,
    /// 1-based position of the first row shown, or 0.
    pub start_index: usize,
    /// 1-based position of the last row shown, or 0.
    pub end_index: usize,
    /// Number of rows being paginated.
    pub total_rows: usize,
}

impl PageWindow {
    /// The single implicit page used when pagination is disabled.
    #[must_use]
    pub const fn single(total_rows: usize) -> Self {
        Self {
            range: 0..total_rows,
            current_page: 1,
            total_pages: 1,
            start_index: if total_rows == 0 { 0 } else { 1 },
            end_index: total_rows,
            total_rows,
        }
    }

    /// Whether a page exists before this one.
    #[must_use]
    pub const fn has_previous(&self) -> bool {
        self.current_page > 1
    }

    /// Whether a page exists after this one.
    #[must_use]
    pub const fn has_next(&self) -> bool {
        self.current_page < self.total_pages
    }

    /// Number of rows in the window.
    #[must_use]
    pub fn len(&self) -> usize {
        self.range.len()
    }

    /// Whether the window holds no rows.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.range.is_empty()
    }
}

/// Number of pages needed for `total_rows`, never less than 1.
///
/// A `rows_per_page` of zero falls back to [`DEFAULT_ROWS_PER_PAGE`].
#[must_use]
pub const fn total_pages(total_rows: usize, rows_per_page: usize) -> usize {
    let per_page = effective_rows_per_page(rows_per_page);
    let remainder = if total_rows % per_page == 0 { 0 } else { 1 };
    let pages = total_rows / per_page + remainder;
    if pages == 0 {
        1
    } else {
        pages
    }
}

/// Computes the window for `current_page` over `total_rows` ordered rows.
///
/// The requested page is clamped into `1..=total_pages` so the result is
/// always a valid window.
///
/// # Examples
///
/// ```
/// use datagrid::pipeline::paginate;
///
/// let page = paginate(12, 3, 5);
/// assert_eq!(page.total_pages, 3);
/// assert_eq!(page.range, 10..12);
/// assert_eq!((page.start_index, page.end_index), (11, 12));
///
/// let empty = paginate(0, 1, 5);
/// assert_eq!(empty.total_pages, 1);
/// assert_eq!((empty.start_index, empty.end_index), (0, 0));
/// ```
#[must_use]
pub fn paginate(total_rows: usize, current_page: usize, rows_per_page: usize) -> PageWindow {
    let per_page = effective_rows_per_page(rows_per_page);
    let total_pages = total_pages(total_rows, per_page);
    let current_page = current_page.clamp(1, total_pages);

    let start = (current_page - 1).saturating_mul(per_page).min(total_rows);
    let end = current_page.saturating_mul(per_page).min(total_rows);

    let (start_index, end_index) = if start == end { (0, 0) } else { (start + 1, end) };

    PageWindow {
        range: start..end,
        current_page,
        total_pages,
        start_index,
        end_index,
        total_rows,
    }
}

const fn effective_rows_per_page(rows_per_page: usize) -> usize {
    if rows_per_page == 0 {
        DEFAULT_ROWS_PER_PAGE
    } else {
        rows_per_page
    }
}
