//! Incremental search over the county list.
//!
//! Matching is case-insensitive substring containment of the trimmed query
//! in the county name. Results keep list order and are capped at
//! [`MAX_MATCHES`]. A trimmed query shorter than [`MIN_QUERY_LEN`] characters
//! is not a search at all; callers check [`is_searchable`] (or use
//! [`SearchSession::begin`]) before matching.

use crate::app::cursor::SelectionCursor;
use crate::domain::{CountyIdentity, CountySummaryEntry};

/// Minimum trimmed query length, in characters, that activates a search.
pub const MIN_QUERY_LEN: usize = 2;

/// Maximum number of matches kept for one query.
pub const MAX_MATCHES: usize = 10;

/// One search hit.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SearchMatch {
    pub entry: CountySummaryEntry,
    /// Character range `(start, end)` of the matched text within the name.
    ///
    /// `None` when lower-casing changes the name's length, which makes the
    /// position ambiguous.
    pub highlight: Option<(usize, usize)>,
}

/// Whether `query` is long enough to run the matcher.
#[must_use]
pub fn is_searchable(query: &str) -> bool {
    query.trim().chars().count() >= MIN_QUERY_LEN
}

/// Returns the first [`MAX_MATCHES`] entries whose name contains the trimmed
/// query, ignoring case, in index order.
#[must_use]
pub fn find_matches(query: &str, index: &[CountySummaryEntry]) -> Vec<SearchMatch> {
    let needle = query.trim().to_lowercase();
    let needle_chars = needle.chars().count();

    index
        .iter()
        .filter_map(|entry| {
            let haystack = entry.name.to_lowercase();
            let byte_start = haystack.find(&needle)?;

            let highlight = (haystack.chars().count() == entry.name.chars().count()).then(|| {
                let start = haystack[..byte_start].chars().count();
                (start, start + needle_chars)
            });

            Some(SearchMatch {
                entry: entry.clone(),
                highlight,
            })
        })
        .take(MAX_MATCHES)
        .collect()
}

/// Results of one qualifying query plus the cursor over them.
///
/// Rebuilt on every keystroke and dropped on commit or dismissal.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SearchSession {
    pub query: String,
    pub matches: Vec<SearchMatch>,
    pub cursor: SelectionCursor,
}

impl SearchSession {
    /// Runs the matcher for `query`, or returns `None` when the query is too
    /// short to count as a search.
    #[must_use]
    pub fn begin(query: &str, index: &[CountySummaryEntry]) -> Option<Self> {
        if !is_searchable(query) {
            return None;
        }

        let matches = find_matches(query, index);
        tracing::trace!(query = %query.trim(), match_count = matches.len(), "search session started");

        Some(Self {
            query: query.trim().to_string(),
            cursor: SelectionCursor::new(matches.len()),
            matches,
        })
    }

    /// No county matched a qualifying query.
    #[must_use]
    pub fn is_no_matches(&self) -> bool {
        self.matches.is_empty()
    }

    /// The identity under the cursor, or `None` when nothing is selected.
    #[must_use]
    pub fn commit(&self) -> Option<&CountyIdentity> {
        self.cursor
            .selected()
            .and_then(|index| self.matches.get(index))
            .map(|hit| &hit.entry.identity)
    }
}
