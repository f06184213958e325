//! Presentation layer: render-ready snapshots of the grid.
//!
//! The engine does not draw anything. It hands a [`GridViewModel`] to
//! whatever rendering backend the host uses:
//!
//! ```text
//! DataGrid → compute_viewmodel → GridViewModel → host renderer
//! ```
//!
//! # Modules
//!
//! - [`viewmodel`]: View model types representing a renderable grid
//! - [`helpers`]: Highlight segmentation and summary formatting

pub mod helpers;
pub mod viewmodel;

pub use helpers::{format_summary, split_highlighted, TextSegment};
pub use viewmodel::{
    DisplayCell, DisplayRow, EmptyState, FilterBarInfo, GridViewModel, HeaderCell, PaginationInfo,
    SummaryInfo,
};
