//! Sort stage: single-column ordering with column type inference.
//!
//! Before sorting, the stage inspects every non-empty cell of the target
//! column across the rows being sorted. If all of them are numbers or text
//! that parses entirely as a number, the column sorts numerically; otherwise
//! it sorts by text, ignoring case.
//!
//! # Comparison
//!
//! - **Numeric**: cells coerce to numbers (unparseable and empty cells become
//!   `0`, as does `NaN`), compared by value.
//! - **Textual**: cells convert to their string form (empty cells become
//!   `""`), compared with Unicode case folding; strings equal under folding
//!   order lowercase first.
//!
//! Descending order reverses the comparator. The underlying sort is stable.

use super::fold_case;
use crate::app::modes::SortDirection;
use crate::domain::{Cell, Column, Record};
use std::borrow::Cow;
use std::cmp::Ordering;
use unicase::UniCase;

/// How a column's values are compared.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ColumnKind {
    /// Every non-empty value is numeric.
    Numeric,
    /// At least one value is non-numeric, or the column has no values.
    Textual,
}

/// Infers whether the `key` column sorts numerically across `rows`.
///
/// Empty and opaque cells, and keys missing from a record, are skipped.
///
/// # Examples
///
/// ```
/// use datagrid::Record;
/// use datagrid::pipeline::{infer_column_kind, ColumnKind};
///
/// let records = vec![
///     Record::new().with("id", "10"),
///     Record::new().with("id", 2),
///     Record::new().with("id", " 1 "),
/// ];
/// assert_eq!(infer_column_kind(&records, &[0, 1, 2], "id"), ColumnKind::Numeric);
///
/// let mixed = vec![Record::new().with("id", "10"), Record::new().with("id", "n/a")];
/// assert_eq!(infer_column_kind(&mixed, &[0, 1], "id"), ColumnKind::Textual);
/// ```
#[must_use]
pub fn infer_column_kind(records: &[Record], rows: &[usize], key: &str) -> ColumnKind {
    let mut saw_value = false;

    for cell in rows.iter().filter_map(|&row| records.get(row)?.get(key)) {
        match cell {
            Cell::Empty | Cell::Opaque(_) => continue,
            Cell::Number(_) => saw_value = true,
            Cell::Text(text) if crate::domain::cell::parse_number(text).is_some() => {
                saw_value = true;
            }
            Cell::Text(_) | Cell::Bool(_) => return ColumnKind::Textual,
        }
    }

    if saw_value {
        ColumnKind::Numeric
    } else {
        ColumnKind::Textual
    }
}

/// Sorts `rows` (indices into `records`) by `column` in `direction`.
///
/// No-op when the column is not sortable. The records themselves are never
/// touched; only the index order changes.
///
/// # Examples
///
/// ```
/// use datagrid::{Column, Record, SortDirection};
/// use datagrid::pipeline::sort_rows;
///
/// let records = vec![
///     Record::new().with("name", "Charlie"),
///     Record::new().with("name", "alice"),
///     Record::new().with("name", "Bob"),
/// ];
/// let mut rows = vec![0, 1, 2];
/// sort_rows(&records, &mut rows, &Column::new("name", "Name"), SortDirection::Ascending);
/// assert_eq!(rows, vec![1, 2, 0]);
/// ```
pub fn sort_rows(records: &[Record], rows: &mut [usize], column: &Column, direction: SortDirection) {
    if !column.sortable || rows.len() < 2 {
        return;
    }

    let kind = infer_column_kind(records, rows, &column.key);
    let _span = tracing::trace_span!(
        "sort_rows",
        column = %column.key,
        ?kind,
        ?direction,
        row_count = rows.len()
    )
    .entered();

    let cell_of = |row: usize| records.get(row).and_then(|record| record.get(&column.key));

    match kind {
        ColumnKind::Numeric => {
            let mut keyed: Vec<(usize, f64)> = rows
                .iter()
                .map(|&row| (row, cell_of(row).map_or(0.0, numeric_key)))
                .collect();
            keyed.sort_by(|a, b| direction.apply(a.1.total_cmp(&b.1)));
            write_back(rows, keyed.into_iter().map(|(row, _)| row));
        }
        ColumnKind::Textual => {
            let mut keyed: Vec<(usize, Cow<'_, str>)> = rows
                .iter()
                .map(|&row| (row, cell_of(row).map_or(Cow::Borrowed(""), Cell::sort_text)))
                .collect();
            keyed.sort_by(|a, b| direction.apply(compare_text(&a.1, &b.1)));
            write_back(rows, keyed.into_iter().map(|(row, _)| row));
        }
    }
}

/// Case-insensitive text ordering with a lowercase-first tie break.
///
/// # Examples
///
/// ```
/// use std::cmp::Ordering;
/// use datagrid::pipeline::compare_text;
///
/// assert_eq!(compare_text("alice", "Bob"), Ordering::Less);
/// assert_eq!(compare_text("a", "A"), Ordering::Less);
/// assert_eq!(compare_text("same", "same"), Ordering::Equal);
/// ```
#[must_use]
pub fn compare_text(a: &str, b: &str) -> Ordering {
    UniCase::new(a)
        .cmp(&UniCase::new(b))
        .then_with(|| fold_case(a).cmp(&fold_case(b)))
        .then_with(|| b.cmp(a))
}

/// Numeric sort key; `NaN` and `-0` normalize to `0` so the order is total.
fn numeric_key(cell: &Cell) -> f64 {
    let value = cell.to_number();
    if value.is_nan() || value == 0.0 {
        0.0
    } else {
        value
    }
}

fn write_back(rows: &mut [usize], ordered: impl Iterator<Item = usize>) {
    for (slot, row) in rows.iter_mut().zip(ordered) {
        *slot = row;
    }
}
