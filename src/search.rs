//! In-document search and replace
//!
//! Full-recompute search over a snapshot of the buffer text: every
//! search-affecting event (query edit, option toggle, content change)
//! rebuilds the match list from scratch, never patches it incrementally.
//! Matching is per line, left to right, non-overlapping; matches never
//! span a line break.

use regex::Regex;
use serde::{Deserialize, Serialize};

/// Search configuration, pure data
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct SearchOptions {
    pub case_sensitive: bool,
    pub whole_word: bool,
    pub use_regex: bool,
}

/// One match in the current content snapshot.
///
/// Void the instant the content or query changes; callers re-run
/// [`SearchEngine::search`] rather than adjusting stored positions.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SearchMatch {
    /// 1-indexed line number
    pub line: usize,
    /// 1-indexed char column within the line
    pub column: usize,
    /// Match length in chars
    pub length: usize,
    /// Matched text
    pub text: String,
}

/// Search state: query, options, match list, and the selected match index.
#[derive(Debug, Clone, Default)]
pub struct SearchEngine {
    query: String,
    options: SearchOptions,
    matches: Vec<SearchMatch>,
    current_index: Option<usize>,
    dirty: bool,
}

impl SearchEngine {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn query(&self) -> &str {
        &self.query
    }

    pub fn options(&self) -> SearchOptions {
        self.options
    }

    /// Matches from the last [`search`](Self::search) call
    pub fn matches(&self) -> &[SearchMatch] {
        &self.matches
    }

    /// Index of the selected match, `None` when the list is empty
    pub fn current_index(&self) -> Option<usize> {
        self.current_index
    }

    /// True when the match list is stale relative to query/options
    pub fn is_dirty(&self) -> bool {
        self.dirty
    }

    /// Set the query; marks the match set stale without searching
    pub fn set_query(&mut self, query: impl Into<String>) {
        self.query = query.into();
        self.dirty = true;
    }

    /// Set the options; marks the match set stale without searching
    pub fn set_options(&mut self, options: SearchOptions) {
        self.options = options;
        self.dirty = true;
    }

    /// Compile the active pattern, or `None` for an empty/invalid query.
    ///
    /// Literal mode escapes all metacharacters, then optionally anchors with
    /// word boundaries; regex mode compiles the query verbatim. A malformed
    /// regex degrades to no pattern rather than an error: search is a
    /// best-effort interactive affordance.
    fn compile_pattern(&self) -> Option<Regex> {
        if self.query.is_empty() {
            return None;
        }
        let source = if self.options.use_regex {
            self.query.clone()
        } else {
            let escaped = regex::escape(&self.query);
            if self.options.whole_word {
                format!(r"\b{escaped}\b")
            } else {
                escaped
            }
        };
        let source = if self.options.case_sensitive {
            source
        } else {
            format!("(?i){source}")
        };
        match Regex::new(&source) {
            Ok(pattern) => Some(pattern),
            Err(e) => {
                tracing::debug!("invalid search pattern {:?}: {}", self.query, e);
                None
            }
        }
    }

    /// Recompute the full match list against a content snapshot.
    ///
    /// Resets the selected index to the first match (or `None`).
    pub fn search(&mut self, content: &str) -> &[SearchMatch] {
        self.matches.clear();
        self.dirty = false;

        if let Some(pattern) = self.compile_pattern() {
            for (line_idx, line) in content.lines().enumerate() {
                for m in pattern.find_iter(line) {
                    let column = line[..m.start()].chars().count() + 1;
                    self.matches.push(SearchMatch {
                        line: line_idx + 1,
                        column,
                        length: m.as_str().chars().count(),
                        text: m.as_str().to_string(),
                    });
                }
            }
        }

        self.current_index = if self.matches.is_empty() {
            None
        } else {
            Some(0)
        };
        &self.matches
    }

    /// Advance the selected match circularly; no-op when empty
    pub fn find_next(&mut self) -> Option<&SearchMatch> {
        let len = self.matches.len();
        if len == 0 {
            return None;
        }
        let next = match self.current_index {
            Some(i) => (i + 1) % len,
            None => 0,
        };
        self.current_index = Some(next);
        Some(&self.matches[next])
    }

    /// Retreat the selected match circularly; no-op when empty
    pub fn find_previous(&mut self) -> Option<&SearchMatch> {
        let len = self.matches.len();
        if len == 0 {
            return None;
        }
        let prev = match self.current_index {
            Some(0) | None => len - 1,
            Some(i) => i - 1,
        };
        self.current_index = Some(prev);
        Some(&self.matches[prev])
    }

    /// Replace the selected match in `content`, returning the new content.
    ///
    /// Splices by the match's recorded line/column/length; every other line
    /// is untouched. Returns `None` (no-op) when nothing is selected. The
    /// caller must re-run [`search`](Self::search) against the returned
    /// content: positions shift and the stored match list is void. The
    /// selected index after re-search is not guaranteed to land on the
    /// occurrence following the replaced one; that is inherent to the
    /// full-recompute contract.
    pub fn replace_one(&self, content: &str, replacement: &str) -> Option<String> {
        let m = self.matches.get(self.current_index?)?;

        // Absolute char offset of the match start
        let mut offset = 0;
        for (line_idx, line) in content.split('\n').enumerate() {
            if line_idx + 1 == m.line {
                offset += m.column - 1;
                break;
            }
            offset += line.chars().count() + 1;
        }

        let start_byte = char_to_byte(content, offset);
        let end_byte = char_to_byte(content, offset + m.length);
        let mut result = String::with_capacity(content.len() + replacement.len());
        result.push_str(&content[..start_byte]);
        result.push_str(replacement);
        result.push_str(&content[end_byte..]);
        Some(result)
    }

    /// Replace every match in one pass with the same compiled pattern used
    /// for searching, then clear the match list.
    ///
    /// Returns `None` (no-op) for an empty or invalid query.
    pub fn replace_all(&mut self, content: &str, replacement: &str) -> Option<String> {
        let pattern = self.compile_pattern()?;
        let result = pattern.replace_all(content, replacement).into_owned();
        self.matches.clear();
        self.current_index = None;
        Some(result)
    }
}

/// Byte offset of the nth char in `s` (s.len() when past the end)
fn char_to_byte(s: &str, char_offset: usize) -> usize {
    s.char_indices()
        .nth(char_offset)
        .map(|(b, _)| b)
        .unwrap_or(s.len())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn engine(query: &str, options: SearchOptions) -> SearchEngine {
        let mut e = SearchEngine::new();
        e.set_query(query);
        e.set_options(options);
        e
    }

    #[test]
    fn test_search_basic_scenario() {
        let mut e = engine("foo", SearchOptions::default());
        let matches = e.search("Hello world\nfoo bar foo");
        assert_eq!(
            matches,
            &[
                SearchMatch {
                    line: 2,
                    column: 1,
                    length: 3,
                    text: "foo".into()
                },
                SearchMatch {
                    line: 2,
                    column: 9,
                    length: 3,
                    text: "foo".into()
                },
            ]
        );
        assert_eq!(e.current_index(), Some(0));
    }

    #[test]
    fn test_search_empty_query_yields_no_matches() {
        let mut e = engine("", SearchOptions::default());
        assert!(e.search("anything").is_empty());
        assert_eq!(e.current_index(), None);
    }

    #[test]
    fn test_search_case_insensitive_by_default() {
        let mut e = engine("HELLO", SearchOptions::default());
        assert_eq!(e.search("hello Hello HELLO").len(), 3);
    }

    #[test]
    fn test_search_case_sensitive() {
        let mut e = engine(
            "Hello",
            SearchOptions {
                case_sensitive: true,
                ..Default::default()
            },
        );
        assert_eq!(e.search("hello Hello HELLO").len(), 1);
    }

    #[test]
    fn test_whole_word_reduces_matches() {
        let content = "concatenate cat";
        let mut e = engine("cat", SearchOptions::default());
        assert_eq!(e.search(content).len(), 2);
        e.set_options(SearchOptions {
            whole_word: true,
            ..Default::default()
        });
        let matches = e.search(content);
        assert_eq!(matches.len(), 1);
        assert_eq!(matches[0].column, 13);
    }

    #[test]
    fn test_literal_mode_escapes_metacharacters() {
        let mut e = engine("a.b", SearchOptions::default());
        let matches = e.search("a.b axb");
        assert_eq!(matches.len(), 1);
        assert_eq!(matches[0].column, 1);
    }

    #[test]
    fn test_regex_mode_matches_pattern() {
        let mut e = engine(
            r"\d+",
            SearchOptions {
                use_regex: true,
                ..Default::default()
            },
        );
        let matches = e.search("a1 b22 c333");
        assert_eq!(matches.len(), 3);
        assert_eq!(matches[2].text, "333");
    }

    #[test]
    fn test_invalid_regex_degrades_to_empty() {
        let mut e = engine(
            "[unclosed",
            SearchOptions {
                use_regex: true,
                ..Default::default()
            },
        );
        assert!(e.search("[unclosed bracket").is_empty());
        assert_eq!(e.current_index(), None);
    }

    #[test]
    fn test_matches_sorted_and_non_overlapping() {
        let mut e = engine("aa", SearchOptions::default());
        let matches = e.search("aaaa\naaa").to_vec();
        for pair in matches.windows(2) {
            let (a, b) = (&pair[0], &pair[1]);
            assert!((a.line, a.column) < (b.line, b.column));
            if a.line == b.line {
                assert!(a.column + a.length <= b.column);
            }
        }
        assert_eq!(matches.len(), 3);
    }

    #[test]
    fn test_matches_never_span_line_break() {
        let mut e = engine("ab", SearchOptions::default());
        assert!(e.search("a\nb").is_empty());
    }

    #[test]
    fn test_multibyte_columns_are_char_based() {
        let mut e = engine("wörld", SearchOptions::default());
        let matches = e.search("héllo wörld");
        assert_eq!(matches[0].column, 7);
        assert_eq!(matches[0].length, 5);
    }

    #[test]
    fn test_find_next_wraps_circularly() {
        let mut e = engine("x", SearchOptions::default());
        e.search("x x x");
        let n = e.matches().len();
        let start = e.current_index();
        for _ in 0..n {
            e.find_next();
        }
        assert_eq!(e.current_index(), start);
    }

    #[test]
    fn test_find_previous_wraps_to_end() {
        let mut e = engine("x", SearchOptions::default());
        e.search("x x x");
        e.find_previous();
        assert_eq!(e.current_index(), Some(2));
    }

    #[test]
    fn test_find_next_on_empty_is_noop() {
        let mut e = engine("zzz", SearchOptions::default());
        e.search("nothing here");
        assert!(e.find_next().is_none());
        assert_eq!(e.current_index(), None);
    }

    #[test]
    fn test_replace_one_touches_only_selected_match() {
        let mut e = engine("foo", SearchOptions::default());
        e.search("foo bar\nfoo baz");
        e.find_next();
        let result = e.replace_one("foo bar\nfoo baz", "qux").unwrap();
        assert_eq!(result, "foo bar\nqux baz");
    }

    #[test]
    fn test_replace_one_multibyte_line() {
        let mut e = engine("bar", SearchOptions::default());
        e.search("héllo bar");
        let result = e.replace_one("héllo bar", "x").unwrap();
        assert_eq!(result, "héllo x");
    }

    #[test]
    fn test_replace_one_without_matches_is_noop() {
        let mut e = engine("zzz", SearchOptions::default());
        e.search("abc");
        assert!(e.replace_one("abc", "x").is_none());
    }

    #[test]
    fn test_replace_all_then_search_is_clean() {
        let content = "cat dog cat\ncatalog";
        let mut e = engine("cat", SearchOptions::default());
        e.search(content);
        let replaced = e.replace_all(content, "bird").unwrap();
        assert_eq!(replaced, "bird dog bird\nbirdalog");
        assert!(e.matches().is_empty());
        assert_eq!(e.current_index(), None);
        assert!(e.search(&replaced).is_empty());
    }

    #[test]
    fn test_replace_all_empty_query_is_noop() {
        let mut e = engine("", SearchOptions::default());
        assert!(e.replace_all("abc", "x").is_none());
    }

    #[test]
    fn test_replace_all_regex_groups() {
        let mut e = engine(
            r"(\w+)@example\.com",
            SearchOptions {
                use_regex: true,
                ..Default::default()
            },
        );
        e.search("mail bob@example.com now");
        let result = e.replace_all("mail bob@example.com now", "$1@test.org").unwrap();
        assert_eq!(result, "mail bob@test.org now");
    }

    #[test]
    fn test_set_query_marks_dirty() {
        let mut e = SearchEngine::new();
        e.set_query("a");
        assert!(e.is_dirty());
        e.search("a");
        assert!(!e.is_dirty());
        e.set_options(SearchOptions {
            whole_word: true,
            ..Default::default()
        });
        assert!(e.is_dirty());
    }
}
