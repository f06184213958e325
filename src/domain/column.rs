//! Column schema entries.
//!
//! A schema is an ordered list of [`Column`] descriptors. Column order drives
//! both the filter stage (which cells are searched) and the header row of the
//! view model. Keys are expected to be unique; [`validate_schema`] enforces
//! that for schemas loaded from external documents.

use crate::domain::error::{GridError, Result};
use serde::{Deserialize, Serialize};
use std::collections::HashSet;

/// Describes one column of the grid.
///
/// `sortable` defaults to `true` when omitted from a serialized schema. A
/// non-sortable column is never a sort target, even when sorting is enabled.
///
/// # Examples
///
/// ```
/// use datagrid::Column;
///
/// let id = Column::new("id", "ID");
/// let actions = Column::new("actions", "Actions").unsortable();
///
/// assert!(id.sortable);
/// assert!(!actions.sortable);
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Column {
    /// Record key this column reads.
    pub key: String,

    /// Header text shown by the rendering layer.
    pub label: String,

    /// Whether the column may be used as the sort key.
    #[serde(default = "default_sortable")]
    pub sortable: bool,
}

const fn default_sortable() -> bool {
    true
}

impl Column {
    /// Creates a sortable column.
    pub fn new(key: impl Into<String>, label: impl Into<String>) -> Self {
        Self {
            key: key.into(),
            label: label.into(),
            sortable: true,
        }
    }

    /// Marks the column as never sortable.
    #[must_use]
    pub fn unsortable(mut self) -> Self {
        self.sortable = false;
        self
    }
}

/// Looks up a column by key. The first column with the key wins.
#[must_use]
pub fn find_column<'a>(columns: &'a [Column], key: &str) -> Option<&'a Column> {
    columns.iter().find(|column| column.key == key)
}

/// Looks up a column by key and returns it only if it may be sorted.
#[must_use]
pub fn find_sortable_column<'a>(columns: &'a [Column], key: &str) -> Option<&'a Column> {
    find_column(columns, key).filter(|column| column.sortable)
}

/// Checks that every column key in the schema is unique and non-empty.
///
/// # Errors
///
/// Returns [`GridError::Schema`] naming the first offending key.
pub fn validate_schema(columns: &[Column]) -> Result<()> {
    let mut seen = HashSet::with_capacity(columns.len());
    for column in columns {
        if column.key.is_empty() {
            return Err(GridError::Schema("column key must not be empty".to_string()));
        }
        if !seen.insert(column.key.as_str()) {
            return Err(GridError::Schema(format!(
                "duplicate column key `{}`",
                column.key
            )));
        }
    }
    Ok(())
}

/// Parses a JSON array of column descriptors and validates it.
///
/// # Errors
///
/// Returns [`GridError::Json`] for malformed JSON and [`GridError::Schema`]
/// for duplicate or empty keys.
///
/// # Examples
///
/// ```
/// use datagrid::domain::columns_from_json;
///
/// let columns = columns_from_json(
///     r#"[{"key": "id", "label": "ID"}, {"key": "notes", "label": "Notes", "sortable": false}]"#,
/// )?;
/// assert_eq!(columns.len(), 2);
/// assert!(columns[0].sortable);
/// assert!(!columns[1].sortable);
/// # Ok::<(), datagrid::GridError>(())
/// ```
pub fn columns_from_json(json: &str) -> Result<Vec<Column>> {
    let columns: Vec<Column> = serde_json::from_str(json)?;
    validate_schema(&columns)?;
    tracing::debug!(column_count = columns.len(), "column schema loaded");
    Ok(columns)
}
