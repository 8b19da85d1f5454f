//! Literal case-insensitive search with match-cursor navigation.
//!
//! The engine owns the current query, the ordered match list, and a
//! cursor into it. The query is always literal text: metacharacters
//! match themselves, which rules out the entire "invalid pattern" error
//! class by construction. Matching walks the original character
//! sequence and case-folds one character at a time, so match offsets
//! are always offsets into the buffer even where a full-string
//! lowercase would change the character count. The scan runs left to
//! right, so the match list is ascending by start and never contains
//! overlapping ranges.
//!
//! The match list reflects the snapshot it was computed against; it is
//! not re-validated when the buffer mutates afterward (stale until the
//! next update or clear). Navigation only moves the cursor.

/// A half-open match interval `[start, end)` in character offsets.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MatchRange {
    pub start: usize,
    pub end: usize,
}

/// Query, ordered matches, and the match cursor.
#[derive(Debug, Default)]
pub struct SearchEngine {
    query: String,
    matches: Vec<MatchRange>,
    current: Option<usize>,
}

impl SearchEngine {
    /// Creates an inactive engine (empty query, no matches).
    pub fn new() -> Self {
        Self::default()
    }

    /// The current query; empty means "search inactive".
    pub fn query(&self) -> &str {
        &self.query
    }

    /// The ordered match list from the last update.
    pub fn matches(&self) -> &[MatchRange] {
        &self.matches
    }

    /// Number of matches from the last update.
    pub fn match_count(&self) -> usize {
        self.matches.len()
    }

    /// The match under the cursor, if any.
    pub fn current(&self) -> Option<MatchRange> {
        self.current.map(|i| self.matches[i])
    }

    /// 1-based cursor position for display, 0 when there is no match.
    pub fn display_index(&self) -> usize {
        match self.current {
            Some(i) => i + 1,
            None => 0,
        }
    }

    /// Re-runs the search for `query` against `text`.
    ///
    /// Resets the cursor to the first match (or to "none" when the
    /// query is empty or matches nothing) and returns the match list.
    pub fn update(&mut self, text: &str, query: &str) -> &[MatchRange] {
        self.query = query.to_string();
        self.matches = find_matches(text, query);
        self.current = if self.matches.is_empty() { None } else { Some(0) };
        &self.matches
    }

    /// Deactivates the search: empty query, no matches, no cursor.
    pub fn clear(&mut self) {
        self.query.clear();
        self.matches.clear();
        self.current = None;
    }

    /// Advances the cursor cyclically; no-op without matches.
    pub fn next(&mut self) -> Option<MatchRange> {
        let count = self.matches.len();
        if count == 0 {
            return None;
        }
        let i = (self.current.unwrap_or(0) + 1) % count;
        self.current = Some(i);
        Some(self.matches[i])
    }

    /// Moves the cursor back cyclically; no-op without matches.
    pub fn previous(&mut self) -> Option<MatchRange> {
        let count = self.matches.len();
        if count == 0 {
            return None;
        }
        let i = (self.current.unwrap_or(0) + count - 1) % count;
        self.current = Some(i);
        Some(self.matches[i])
    }
}

/// Finds every literal, case-insensitive occurrence of `query` in
/// `text`, ascending by start, in character offsets.
fn find_matches(text: &str, query: &str) -> Vec<MatchRange> {
    if query.is_empty() {
        return Vec::new();
    }

    // Fold one character at a time against the original sequence, never
    // against a lowercased copy: lowercasing a whole string can change
    // its character count (U+0130 becomes two characters), which would
    // skew every offset after it.
    let haystack: Vec<char> = text.chars().collect();
    let needle: Vec<char> = query.chars().collect();
    if needle.len() > haystack.len() {
        return Vec::new();
    }

    let mut matches = Vec::new();
    let mut at = 0;
    while at + needle.len() <= haystack.len() {
        let hit = needle
            .iter()
            .zip(&haystack[at..])
            .all(|(q, h)| chars_eq_ignore_case(*q, *h));
        if hit {
            matches.push(MatchRange {
                start: at,
                end: at + needle.len(),
            });
            // Literal matches for a fixed query can never overlap, so
            // the scan resumes past the match end.
            at += needle.len();
        } else {
            at += 1;
        }
    }
    matches
}

fn chars_eq_ignore_case(a: char, b: char) -> bool {
    a == b || a.to_lowercase().eq(b.to_lowercase())
}
