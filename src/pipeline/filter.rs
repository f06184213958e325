//! Filter stage: free-text matching across the column schema.
//!
//! A record matches when any of its schema columns holds a text or numeric
//! cell whose text contains the query, ignoring case. Matching is plain
//! substring containment; there is no tokenization and no fuzzy scoring.
//! The stage returns the positions of matching records in input order, so
//! the input slice is never copied or reordered.

use super::fold_case;
use crate::domain::{Column, Record};

/// Returns the indices of records matching `query`, preserving input order.
///
/// The query is trimmed first. An empty query matches every record.
///
/// # Examples
///
/// ```
/// use datagrid::{Column, Record};
/// use datagrid::pipeline::filter_rows;
///
/// let columns = vec![Column::new("name", "Name")];
/// let records = vec![
///     Record::new().with("name", "Ann"),
///     Record::new().with("name", "Bob"),
///     Record::new().with("name", "Joanna"),
/// ];
///
/// assert_eq!(filter_rows(&records, &columns, " AN "), vec![0, 2]);
/// assert_eq!(filter_rows(&records, &columns, ""), vec![0, 1, 2]);
/// ```
#[must_use]
pub fn filter_rows(records: &[Record], columns: &[Column], query: &str) -> Vec<usize> {
    let needle = fold_case(query.trim());
    if needle.is_empty() {
        return (0..records.len()).collect();
    }

    let _span = tracing::trace_span!(
        "filter_rows",
        record_count = records.len(),
        query_len = needle.len()
    )
    .entered();

    records
        .iter()
        .enumerate()
        .filter(|(_, record)| record_matches(record, columns, &needle))
        .map(|(index, _)| index)
        .collect()
}

/// Whether any schema column of `record` contains the already folded needle.
///
/// Cells that are not text or numbers never match.
#[must_use]
pub fn record_matches(record: &Record, columns: &[Column], folded_needle: &str) -> bool {
    columns
        .iter()
        .filter_map(|column| record.get(&column.key))
        .filter_map(|cell| cell.match_text())
        .any(|text| fold_case(&text).contains(folded_needle))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::{Cell, OpaqueHandle};

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

    #[test]
    fn matches_case_insensitively() {
        let (records, columns) = people();
        assert_eq!(filter_rows(&records, &columns, "a"), vec![1]);
        assert_eq!(filter_rows(&records, &columns, "B"), vec![0, 3]);
    }

    #[test]
    fn matches_numbers_by_their_text() {
        let (records, columns) = people();
        assert_eq!(filter_rows(&records, &columns, "4"), vec![2]);
    }

    #[test]
    fn whitespace_query_matches_everything() {
        let (records, columns) = people();
        assert_eq!(filter_rows(&records, &columns, "   "), vec![0, 1, 2, 3]);
    }

    #[test]
    fn only_schema_columns_are_searched() {
        let records = vec![Record::new().with("name", "Ann").with("secret", "zebra")];
        let columns = vec![Column::new("name", "Name")];
        assert!(filter_rows(&records, &columns, "zebra").is_empty());
    }

    #[test]
    fn non_matchable_cells_never_match() {
        let records = vec![
            Record::new().with("flag", true),
            Record::new().with("flag", Cell::Empty),
            Record::new().with("flag", OpaqueHandle::new("true")),
        ];
        let columns = vec![Column::new("flag", "Flag")];
        assert!(filter_rows(&records, &columns, "true").is_empty());
    }

    #[test]
    fn no_match_yields_empty() {
        let (records, columns) = people();
        assert!(filter_rows(&records, &columns, "zzz").is_empty());
    }

    #[test]
    fn empty_inputs_are_fine() {
        assert!(filter_rows(&[], &[], "x").is_empty());
        let (records, _) = people();
        assert!(filter_rows(&records, &[], "b").is_empty());
    }

    #[test]
    fn substring_not_token_matching() {
        let records = vec![Record::new().with("title", "Stateful widgets")];
        let columns = vec![Column::new("title", "Title")];
        assert_eq!(filter_rows(&records, &columns, "eful wid"), vec![0]);
    }
}
