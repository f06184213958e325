//! Event handling for hosts that drive the grid with discrete events.
//!
//! Hosts that translate user input into messages (key presses, clicks,
//! data refreshes) can feed them through [`handle_event`] instead of calling
//! the [`DataGrid`] handlers one by one. Every event maps onto exactly one
//! controller handler.
//!
//! # Event Types
//!
//! - **Filtering**: `SetFilterQuery`, `AppendFilterChar`, `FilterBackspace`, `ClearFilter`
//! - **Sorting**: `ToggleSort`
//! - **Paging**: `SetPage`, `NextPage`, `PreviousPage`, `FirstPage`, `LastPage`, `SetRowsPerPage`
//! - **Data**: `ReplaceRecords`, `ReplaceColumns`
//!
//! # Example
//!
//! ```rust
//! use datagrid::{handle_event, Column, Config, DataGrid, Event, Record};
//!
//! let mut grid = DataGrid::new(
//!     vec![Record::new().with("name", "Ann"), Record::new().with("name", "Bob")],
//!     vec![Column::new("name", "Name")],
//!     Config::default(),
//! );
//!
//! assert!(handle_event(&mut grid, &Event::AppendFilterChar('b')));
//! assert_eq!(grid.matched_count(), 1);
//! ```

use crate::app::DataGrid;
use crate::domain::{Column, Record};

/// Events a host can send to the grid.
#[derive(Debug, Clone, PartialEq)]
pub enum Event {
    /// Replaces the filter query.
    SetFilterQuery(String),
    /// Appends a character to the filter query.
    AppendFilterChar(char),
    /// Removes the last character from the filter query.
    FilterBackspace,
    /// Clears the filter query.
    ClearFilter,

    /// Sorts by the given column key, or flips the direction if already active.
    ToggleSort(String),

    /// Jumps to a 1-based page.
    SetPage(usize),
    /// Moves one page forward.
    NextPage,
    /// Moves one page back.
    PreviousPage,
    /// Jumps to the first page.
    FirstPage,
    /// Jumps to the last page.
    LastPage,
    /// Changes the page size.
    SetRowsPerPage(usize),

    /// Replaces the record set.
    ReplaceRecords(Vec<Record>),
    /// Replaces the column schema.
    ReplaceColumns(Vec<Column>),
}

/// Applies an event to the grid.
///
/// Returns whether the view changed and should be re-rendered. Events the
/// grid rejects (an out-of-range page, an unsortable column, filtering while
/// filtering is disabled) return `false` and leave the grid untouched.
///
/// # Tracing
///
/// Each call creates a debug-level span named after the event.
pub fn handle_event(grid: &mut DataGrid, event: &Event) -> bool {
    let _span = tracing::debug_span!("handle_event", event_type = event.name()).entered();

    match event {
        Event::SetFilterQuery(query) => grid.set_filter_query(query.clone()),
        Event::AppendFilterChar(c) => {
            let mut query = grid.view_state().filter_query.clone();
            query.push(*c);
            tracing::trace!(query = %query, char = %c, "filter query updated");
            grid.set_filter_query(query)
        }
        Event::FilterBackspace => {
            let mut query = grid.view_state().filter_query.clone();
            if query.pop().is_none() {
                return false;
            }
            grid.set_filter_query(query)
        }
        Event::ClearFilter => grid.clear_filter(),
        Event::ToggleSort(key) => grid.toggle_sort(key),
        Event::SetPage(page) => grid.set_page(*page),
        Event::NextPage => grid.next_page(),
        Event::PreviousPage => grid.previous_page(),
        Event::FirstPage => grid.first_page(),
        Event::LastPage => grid.last_page(),
        Event::SetRowsPerPage(count) => grid.set_rows_per_page(*count),
        Event::ReplaceRecords(records) => {
            tracing::debug!(record_count = records.len(), "replacing records");
            grid.set_records(records.clone())
        }
        Event::ReplaceColumns(columns) => {
            tracing::debug!(column_count = columns.len(), "replacing columns");
            grid.set_columns(columns.clone())
        }
    }
}

impl Event {
    /// Short name used in tracing spans.
    #[must_use]
    pub const fn name(&self) -> &'static str {
        match self {
            Self::SetFilterQuery(_) => "set_filter_query",
            Self::AppendFilterChar(_) => "append_filter_char",
            Self::FilterBackspace => "filter_backspace",
            Self::ClearFilter => "clear_filter",
            Self::ToggleSort(_) => "toggle_sort",
            Self::SetPage(_) => "set_page",
            Self::NextPage => "next_page",
            Self::PreviousPage => "previous_page",
            Self::FirstPage => "first_page",
            Self::LastPage => "last_page",
            Self::SetRowsPerPage(_) => "set_rows_per_page",
            Self::ReplaceRecords(_) => "replace_records",
            Self::ReplaceColumns(_) => "replace_columns",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::Config;

    fn grid() -> DataGrid {
        let records = ["Ann", "Bob", "Cid", "Deb", "Eve", "Fay", "Gus"]
            .iter()
            .map(|name| Record::new().with("name", *name))
            .collect();
        DataGrid::new(records, vec![Column::new("name", "Name")], Config::default())
    }

    #[test]
    fn typing_builds_the_query() {
        let mut grid = grid();
        assert!(handle_event(&mut grid, &Event::AppendFilterChar('e')));
        assert!(handle_event(&mut grid, &Event::AppendFilterChar('v')));
        assert_eq!(grid.view_state().filter_query, "ev");
        assert_eq!(grid.matched_count(), 1);

        assert!(handle_event(&mut grid, &Event::FilterBackspace));
        assert_eq!(grid.view_state().filter_query, "e");
        assert_eq!(grid.matched_count(), 2);
    }

    #[test]
    fn backspace_on_empty_query_is_a_no_op() {
        let mut grid = grid();
        assert!(!handle_event(&mut grid, &Event::FilterBackspace));
    }

    #[test]
    fn paging_events() {
        let mut grid = grid();
        assert!(handle_event(&mut grid, &Event::NextPage));
        assert!(!handle_event(&mut grid, &Event::NextPage));
        assert!(handle_event(&mut grid, &Event::FirstPage));
        assert!(handle_event(&mut grid, &Event::LastPage));
        assert!(!handle_event(&mut grid, &Event::SetPage(3)));
        assert!(handle_event(&mut grid, &Event::SetRowsPerPage(3)));
        assert_eq!(grid.total_pages(), 3);
        assert!(handle_event(&mut grid, &Event::SetPage(3)));
        assert_eq!(grid.visible_rows().len(), 1);
    }

    #[test]
    fn sort_and_clear_events() {
        let mut grid = grid();
        assert!(handle_event(&mut grid, &Event::ToggleSort("name".to_string())));
        assert_eq!(grid.visible_rows()[0].get("name"), Some(&"Gus".into()));
        assert!(!handle_event(&mut grid, &Event::ToggleSort("age".to_string())));

        handle_event(&mut grid, &Event::SetFilterQuery("a".to_string()));
        assert!(handle_event(&mut grid, &Event::ClearFilter));
        assert_eq!(grid.matched_count(), 7);
    }

    #[test]
    fn replace_events() {
        let mut grid = grid();
        handle_event(&mut grid, &Event::ReplaceRecords(vec![Record::new().with("name", "Zed")]));
        assert_eq!(grid.matched_count(), 1);

        handle_event(
            &mut grid,
            &Event::ReplaceColumns(vec![Column::new("name", "Name").unsortable()]),
        );
        assert_eq!(grid.view_state().sort_key, None);
    }
}
