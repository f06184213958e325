//! Application layer: view state ownership and event dispatch.
//!
//! This layer sits between the host (whatever renders the grid and collects
//! input) and the pure [`pipeline`](crate::pipeline) stages. It owns the
//! mutable view state and re-derives the visible rows after every change.
//!
//! # Architecture
//!
//! The application layer follows a unidirectional data flow pattern:
//!
//! ```text
//! Host Input → Events → handle_event → DataGrid handlers → recompute
//!                                                             ↓
//!                         Host Renderer ← GridViewModel ← compute_viewmodel
//! ```
//!
//! # Modules
//!
//! - [`handler`]: Event enum and dispatch onto controller handlers
//! - [`modes`]: Sort direction, sort scope and stage toggle types
//! - [`state`]: The [`DataGrid`] view controller and view model computation
//!
//! # Example
//!
//! ```rust
//! use datagrid::app::{handle_event, DataGrid, Event};
//! use datagrid::Config;
//!
//! let mut grid = DataGrid::new(vec![], vec![], Config::default());
//! assert!(!handle_event(&mut grid, &Event::NextPage));
//! ```

pub mod handler;
pub mod modes;
pub mod state;

pub use handler::{handle_event, Event};
pub use modes::{SortDirection, SortScope, StageToggles};
pub use state::{DataGrid, ViewState};
