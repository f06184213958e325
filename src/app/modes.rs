//! Sort and pipeline mode types.
//!
//! These enums parameterize how the view controller derives its window:
//! which way the active column sorts, whether sorting spans every matching
//! row or only the current page, and which pipeline stages are active.
//!
//! # Example
//!
//! ```rust
//! use datagrid::{SortDirection, SortScope};
//!
//! assert_eq!(SortDirection::Ascending.flipped(), SortDirection::Descending);
//! assert_eq!(SortScope::default(), SortScope::Global);
//! ```

use serde::{Deserialize, Serialize};
use std::cmp::Ordering;
use std::str::FromStr;

/// Direction of the active sort column.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SortDirection {
    /// Smallest value first.
    #[default]
    #[serde(alias = "asc")]
    Ascending,
    /// Largest value first.
    #[serde(alias = "desc")]
    Descending,
}

impl SortDirection {
    /// Returns the opposite direction.
    #[must_use]
    pub const fn flipped(self) -> Self {
        match self {
            Self::Ascending => Self::Descending,
            Self::Descending => Self::Ascending,
        }
    }

    /// Applies the direction to an ascending comparison result.
    #[must_use]
    pub const fn apply(self, ordering: Ordering) -> Ordering {
        match self {
            Self::Ascending => ordering,
            Self::Descending => ordering.reverse(),
        }
    }

    /// Glyph a header cell shows for this direction.
    #[must_use]
    pub const fn indicator(self) -> &'static str {
        match self {
            Self::Ascending => "▲",
            Self::Descending => "▼",
        }
    }
}

impl FromStr for SortDirection {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "asc" | "ascending" => Ok(Self::Ascending),
            "desc" | "descending" => Ok(Self::Descending),
            other => Err(format!("unknown sort direction `{other}`")),
        }
    }
}

/// Which rows the sort stage orders.
///
/// `Global` sorts every row that passed the filter and then paginates, so a
/// page always shows a contiguous slice of the fully sorted result.
/// `CurrentPage` paginates first and sorts only the rows on the visible page;
/// it exists for tables that explicitly want that behavior and is never the
/// default.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum SortScope {
    /// Filter, then sort all matches, then paginate.
    #[default]
    Global,
    /// Filter, then paginate, then sort the visible page only.
    CurrentPage,
}

impl FromStr for SortScope {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "global" => Ok(Self::Global),
            "current-page" | "current_page" | "page" => Ok(Self::CurrentPage),
            other => Err(format!("unknown sort scope `{other}`")),
        }
    }
}

/// Which pipeline stages are active.
///
/// A disabled stage is the identity function: rows pass through unchanged
/// and the view model omits its controls.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[allow(clippy::struct_excessive_bools)]
pub struct StageToggles {
    /// Free-text filtering.
    pub filtering: bool,
    /// Column sorting.
    pub sorting: bool,
    /// Page windowing.
    pub pagination: bool,
}

impl Default for StageToggles {
    fn default() -> Self {
        Self {
            filtering: true,
            sorting: true,
            pagination: true,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn direction_flips_and_applies() {
        assert_eq!(SortDirection::Descending.flipped(), SortDirection::Ascending);
        assert_eq!(SortDirection::Ascending.apply(Ordering::Less), Ordering::Less);
        assert_eq!(SortDirection::Descending.apply(Ordering::Less), Ordering::Greater);
    }

    #[test]
    fn direction_parses_short_and_long_names() {
        assert_eq!("asc".parse(), Ok(SortDirection::Ascending));
        assert_eq!(" Descending ".parse(), Ok(SortDirection::Descending));
        assert!("sideways".parse::<SortDirection>().is_err());
    }

    #[test]
    fn scope_parses() {
        assert_eq!("global".parse(), Ok(SortScope::Global));
        assert_eq!("current-page".parse(), Ok(SortScope::CurrentPage));
        assert!("everything".parse::<SortScope>().is_err());
    }

    #[test]
    fn all_stages_enabled_by_default() {
        let stages = StageToggles::default();
        assert!(stages.filtering && stages.sorting && stages.pagination);
    }
}
