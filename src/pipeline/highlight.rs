//! Match locations for highlighting filtered cells.
//!
//! The rendering layer highlights every place the filter query occurs in a
//! cell. Occurrences are found left to right, each scan resuming where the
//! previous match ended, so matches never overlap. Comparison folds case per
//! character, and ranges are reported in character indices (not bytes) so
//! they stay valid for non-ASCII text.

/// Finds every non-overlapping occurrence of `query` in `text`.
///
/// Returns `(start, end)` character index ranges with an exclusive end. The
/// query is trimmed; an empty query yields no ranges.
///
/// # Examples
///
/// ```
/// use datagrid::pipeline::find_matches;
///
/// assert_eq!(find_matches("Banana", "an"), vec![(1, 3), (3, 5)]);
/// assert_eq!(find_matches("aaa", "aa"), vec![(0, 2)]);
/// assert_eq!(find_matches("Zoë Zoë", "ZOË"), vec![(0, 3), (4, 7)]);
/// assert!(find_matches("anything", "").is_empty());
/// ```
#[must_use]
pub fn find_matches(text: &str, query: &str) -> Vec<(usize, usize)> {
    let needle: Vec<char> = query.trim().chars().flat_map(char::to_lowercase).collect();
    if needle.is_empty() {
        return Vec::new();
    }

    // Each folded char remembers the index of the source char it came from.
    let folded: Vec<(usize, char)> = text
        .chars()
        .enumerate()
        .flat_map(|(index, c)| c.to_lowercase().map(move |lower| (index, lower)))
        .collect();

    let mut ranges: Vec<(usize, usize)> = Vec::new();
    let mut pos = 0;

    while pos + needle.len() <= folded.len() {
        let candidate = &folded[pos..pos + needle.len()];
        if candidate.iter().map(|(_, c)| *c).eq(needle.iter().copied()) {
            let start = candidate[0].0;
            let end = candidate[candidate.len() - 1].0 + 1;
            let start = ranges.last().map_or(start, |&(_, prev_end)| start.max(prev_end));
            if start < end {
                ranges.push((start, end));
            }
            pos += needle.len();
        } else {
            pos += 1;
        }
    }

    ranges
}
