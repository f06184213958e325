//! Error types for the data grid engine.
//!
//! The engine itself is total: filtering, sorting, pagination and every
//! controller handler accept any input and never fail. Errors only arise at
//! the edges, when configuration or data is loaded from text or from disk.
//! [`GridError`] covers those edges and [`Result`] is the matching alias.

use thiserror::Error;

/// The main error type for loading configuration, schemas and records.
///
/// Most variants wrap errors from external crates using `#[from]` for
/// automatic conversion with `?`.
///
/// # Examples
///
/// ```
/// use datagrid::GridError;
///
/// fn require_columns(count: usize) -> Result<(), GridError> {
///     if count == 0 {
///         return Err(GridError::Schema("schema has no columns".to_string()));
///     }
///     Ok(())
/// }
///
/// assert!(require_columns(0).is_err());
/// ```
#[derive(Debug, Error)]
pub enum GridError {
    /// Filesystem or I/O operation failed.
    ///
    /// Raised when a configuration file or data file cannot be read.
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// Configuration is invalid.
    ///
    /// The string describes the specific configuration problem.
    #[error("Configuration error: {0}")]
    Config(String),

    /// A TOML configuration document could not be parsed.
    #[error("TOML parse error: {0}")]
    Toml(#[from] toml::de::Error),

    /// A JSON record or schema document could not be parsed.
    #[error("JSON parse error: {0}")]
    Json(#[from] serde_json::Error),

    /// A column schema is malformed (e.g. duplicate keys).
    #[error("Schema error: {0}")]
    Schema(String),
}

/// A specialized `Result` type for fallible loading operations.
pub type Result<T> = std::result::Result<T, GridError>;
