//! Records: one row of grid data.
//!
//! A [`Record`] maps column keys to [`Cell`] values. Records carry no identity
//! of their own; the engine refers to them by their position in the input
//! slice and never mutates them.

use crate::domain::cell::Cell;
use crate::domain::error::Result;
use serde::Deserialize;
use std::collections::BTreeMap;

/// One row of data, keyed by column key.
///
/// Keys not present in the record read as absent and behave like
/// [`Cell::Empty`] in every stage.
///
/// # Examples
///
/// ```
/// use datagrid::{Cell, Record};
///
/// let record = Record::new().with("id", 2).with("name", "Bob");
/// assert_eq!(record.get("id"), Some(&Cell::Number(2.0)));
/// assert_eq!(record.get("missing"), None);
///
/// let same: Record = [("id", Cell::from(2)), ("name", Cell::from("Bob"))]
///     .into_iter()
///     .collect();
/// assert_eq!(record, same);
/// ```
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(transparent)]
pub struct Record {
    cells: BTreeMap<String, Cell>,
}

impl Record {
    /// Creates an empty record.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Builder-style insert.
    #[must_use]
    pub fn with(mut self, key: impl Into<String>, cell: impl Into<Cell>) -> Self {
        self.insert(key, cell);
        self
    }

    /// Inserts or replaces the cell stored under `key`.
    pub fn insert(&mut self, key: impl Into<String>, cell: impl Into<Cell>) {
        self.cells.insert(key.into(), cell.into());
    }

    /// Returns the cell stored under `key`, if any.
    #[must_use]
    pub fn get(&self, key: &str) -> Option<&Cell> {
        self.cells.get(key)
    }

    /// Number of cells in the record.
    #[must_use]
    pub fn len(&self) -> usize {
        self.cells.len()
    }

    /// Whether the record holds no cells.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.cells.is_empty()
    }

    /// Iterates over `(key, cell)` pairs in key order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &Cell)> {
        self.cells.iter().map(|(key, cell)| (key.as_str(), cell))
    }
}

impl<K: Into<String>, V: Into<Cell>> FromIterator<(K, V)> for Record {
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        Self {
            cells: iter
                .into_iter()
                .map(|(key, cell)| (key.into(), cell.into()))
                .collect(),
        }
    }
}

/// Parses a JSON array of objects into records.
///
/// Scalars map onto [`Cell`] variants; nested arrays and objects become
/// opaque cells.
///
/// # Errors
///
/// Returns [`GridError::Json`](crate::GridError::Json) if the document is not
/// an array of objects.
///
/// # Examples
///
/// ```
/// use datagrid::domain::records_from_json;
///
/// let records = records_from_json(r#"[{"id": 1, "name": "Ann"}, {"id": "2", "name": null}]"#)?;
/// assert_eq!(records.len(), 2);
/// assert!(records[1].get("name").is_some_and(|cell| cell.is_empty()));
/// # Ok::<(), datagrid::GridError>(())
/// ```
pub fn records_from_json(json: &str) -> Result<Vec<Record>> {
    let records: Vec<Record> = serde_json::from_str(json)?;
    tracing::debug!(record_count = records.len(), "records loaded");
    Ok(records)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn insert_replaces_existing_cells() {
        let mut record = Record::new().with("name", "Ann");
        record.insert("name", "Bea");
        assert_eq!(record.len(), 1);
        assert_eq!(record.get("name"), Some(&Cell::from("Bea")));
    }

    #[test]
    fn iteration_is_in_key_order() {
        let record = Record::new().with("b", 2).with("a", 1);
        let keys: Vec<&str> = record.iter().map(|(key, _)| key).collect();
        assert_eq!(keys, vec!["a", "b"]);
    }

    #[test]
    fn records_from_json_rejects_non_objects() {
        assert!(records_from_json("[1, 2, 3]").is_err());
        assert!(records_from_json("{}").is_err());
    }

    #[test]
    fn records_from_json_keeps_nested_values_opaque() {
        let records = records_from_json(r#"[{"tags": ["a", "b"]}]"#).unwrap();
        assert!(matches!(records[0].get("tags"), Some(Cell::Opaque(_))));
    }

    #[test]
    fn empty_array_yields_no_records() {
        assert!(records_from_json("[]").unwrap().is_empty());
    }
}
