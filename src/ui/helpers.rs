//! Shared presentation helpers.
//!
//! Renderers receive highlight ranges as character indices. [`split_highlighted`]
//! turns a cell's text and its ranges into alternating plain and highlighted
//! segments, which is what most rendering backends want to emit.
//!
//! # Example
//!
//! ```rust
//! use datagrid::ui::helpers::{split_highlighted, TextSegment};
//!
//! let segments = split_highlighted("my-project", &[(0, 2), (3, 4)]);
//! assert_eq!(segments[0], TextSegment { text: "my".to_string(), highlighted: true });
//! assert_eq!(segments[1], TextSegment { text: "-".to_string(), highlighted: false });
//! ```

/// A run of text that is either fully highlighted or fully plain.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TextSegment {
    /// Segment text.
    pub text: String,
    /// Whether the segment lies inside a highlight range.
    pub highlighted: bool,
}

/// Splits `text` into plain and highlighted segments.
///
/// `ranges` are `(start, end)` character indices with an exclusive end, in
/// ascending non-overlapping order. Ranges extending past the end of the text
/// are cut short; out-of-order or overlapping ranges are skipped. Empty
/// segments are never emitted.
#[must_use]
pub fn split_highlighted(text: &str, ranges: &[(usize, usize)]) -> Vec<TextSegment> {
    let chars: Vec<char> = text.chars().collect();
    let mut segments = Vec::new();
    let mut current_pos = 0;

    let mut push = |from: usize, to: usize, highlighted: bool| {
        if from < to {
            segments.push(TextSegment {
                text: chars[from..to].iter().collect(),
                highlighted,
            });
        }
    };

    for &(start, end) in ranges {
        let start = start.min(chars.len());
        let end = end.min(chars.len());
        if start < current_pos || start >= end {
            continue;
        }

        push(current_pos, start, false);
        push(start, end, true);
        current_pos = end;
    }

    push(current_pos, chars.len(), false);
    segments
}

/// Formats the summary line for a window.
///
/// ```rust
/// use datagrid::ui::helpers::format_summary;
///
/// assert_eq!(format_summary(6, 10, 12), "Showing 6–10 of 12");
/// assert_eq!(format_summary(0, 0, 0), "No matching records");
/// ```
#[must_use]
pub fn format_summary(start_index: usize, end_index: usize, total: usize) -> String {
    if total == 0 {
        return "No matching records".to_string();
    }
    format!("Showing {start_index}–{end_index} of {total}")
}
