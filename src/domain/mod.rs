//! Domain layer: the data the engine operates on.
//!
//! These types are independent of any rendering technology. They describe
//! what a grid holds (records of cells) and how it is shaped (a column
//! schema), plus the error type used when either is loaded from text.
//!
//! # Organization
//!
//! - [`cell`]: Closed cell value variant and number conversions
//! - [`column`]: Column schema entries and schema validation
//! - [`record`]: Records and JSON record loading
//! - [`error`]: Error types and result aliases
//!
//! # Examples
//!
//! ```
//! use datagrid::domain::{Column, Record, Result};
//!
//! fn sample() -> Result<(Vec<Record>, Vec<Column>)> {
//!     let records = vec![Record::new().with("id", 1).with("name", "Ann")];
//!     let columns = vec![Column::new("id", "ID"), Column::new("name", "Name")];
//!     Ok((records, columns))
//! }
//! # sample().unwrap();
//! ```

pub mod cell;
pub mod column;
pub mod error;
pub mod record;

pub use cell::{Cell, OpaqueHandle};
pub use column::{columns_from_json, find_column, find_sortable_column, validate_schema, Column};
pub use error::{GridError, Result};
pub use record::{records_from_json, Record};
