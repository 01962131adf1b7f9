//! Fuzzy matching over the flattened bookmark list
//!
//! Ranking is delegated to nucleo; this module only scores the title and
//! address fields separately and combines them with configurable weights,
//! title-heavy by default. For a fixed list and query the output order is
//! fully deterministic: ties fall back to the original list position.

use crate::bookmarks::BookmarkEntry;
use nucleo::pattern::{CaseMatching, Normalization, Pattern};
use nucleo::{Config, Matcher, Utf32Str};
use serde::{Deserialize, Serialize};

/// Matching knobs, loaded from the `[search]` config table
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SearchConfig {
    /// Weight of a title match in the combined score
    #[serde(default = "default_title_weight")]
    pub title_weight: f64,
    /// Weight of an address match in the combined score
    #[serde(default = "default_address_weight")]
    pub address_weight: f64,
    /// Queries shorter than this are matched as plain substrings
    /// instead of fuzzily
    #[serde(default = "default_min_query_length")]
    pub min_query_length: usize,
}

const fn default_title_weight() -> f64 {
    0.7
}

const fn default_address_weight() -> f64 {
    0.3
}

const fn default_min_query_length() -> usize {
    2
}

impl Default for SearchConfig {
    fn default() -> Self {
        Self {
            title_weight: default_title_weight(),
            address_weight: default_address_weight(),
            min_query_length: default_min_query_length(),
        }
    }
}

/// Weighted two-field fuzzy matcher
pub struct EntryMatcher {
    matcher: Matcher,
    config: SearchConfig,
    haystack_buf: Vec<char>,
}

impl EntryMatcher {
    /// Create a matcher with the given knobs
    #[must_use]
    pub fn new(config: SearchConfig) -> Self {
        Self {
            matcher: Matcher::new(Config::DEFAULT),
            config,
            haystack_buf: Vec::new(),
        }
    }

    /// Filter `entries` against `query`, returning indices into `entries`
    /// ordered most-relevant first.
    ///
    /// An empty or whitespace query is the identity: every index in
    /// original order. Below the minimum query length the query is
    /// matched as a case-insensitive substring, original order preserved.
    pub fn filter(&mut self, entries: &[BookmarkEntry], query: &str) -> Vec<u32> {
        let query = query.trim();
        if query.is_empty() {
            #[allow(clippy::cast_possible_truncation)]
            return (0..entries.len() as u32).collect();
        }

        if query.chars().count() < self.config.min_query_length {
            return Self::substring_filter(entries, query);
        }

        let pattern = Pattern::parse(query, CaseMatching::Ignore, Normalization::Smart);
        let mut scored: Vec<(u32, f64)> = Vec::new();

        for (idx, entry) in entries.iter().enumerate() {
            let title = pattern.score(
                Utf32Str::new(&entry.title, &mut self.haystack_buf),
                &mut self.matcher,
            );
            let address = pattern.score(
                Utf32Str::new(&entry.address, &mut self.haystack_buf),
                &mut self.matcher,
            );

            if title.is_none() && address.is_none() {
                continue;
            }

            let score = f64::from(title.unwrap_or(0)) * self.config.title_weight
                + f64::from(address.unwrap_or(0)) * self.config.address_weight;
            #[allow(clippy::cast_possible_truncation)]
            scored.push((idx as u32, score));
        }

        // Most relevant first; ties keep document order.
        scored.sort_by(|a, b| b.1.total_cmp(&a.1).then(a.0.cmp(&b.0)));
        scored.into_iter().map(|(idx, _)| idx).collect()
    }

    fn substring_filter(entries: &[BookmarkEntry], query: &str) -> Vec<u32> {
        let needle = query.to_lowercase();
        entries
            .iter()
            .enumerate()
            .filter(|(_, entry)| {
                entry.title.to_lowercase().contains(&needle)
                    || entry.address.to_lowercase().contains(&needle)
            })
            .map(|(idx, _)| {
                #[allow(clippy::cast_possible_truncation)]
                let idx = idx as u32;
                idx
            })
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::bookmarks::EntryKind;

    fn entry(id: &str, title: &str, address: &str) -> BookmarkEntry {
        BookmarkEntry {
            id: id.to_string(),
            title: title.to_string(),
            address: address.to_string(),
            kind: EntryKind::Web,
        }
    }

    fn sample() -> Vec<BookmarkEntry> {
        vec![
            entry("1", "Rust Language", "https://www.rust-lang.org/"),
            entry("2", "Hacker News", "https://news.ycombinator.com/"),
            entry("3", "docs.rs", "https://docs.rs/"),
        ]
    }

    #[test]
    fn test_empty_query_is_identity() {
        let mut matcher = EntryMatcher::new(SearchConfig::default());
        let entries = sample();
        assert_eq!(matcher.filter(&entries, ""), vec![0, 1, 2]);
        assert_eq!(matcher.filter(&entries, "   "), vec![0, 1, 2]);
    }

    #[test]
    fn test_empty_entries() {
        let mut matcher = EntryMatcher::new(SearchConfig::default());
        assert!(matcher.filter(&[], "anything").is_empty());
    }

    #[test]
    fn test_matches_title_and_address() {
        let mut matcher = EntryMatcher::new(SearchConfig::default());
        let entries = sample();

        let hits = matcher.filter(&entries, "rust");
        assert!(hits.contains(&0));
        assert!(!hits.contains(&1));
    }

    #[test]
    fn test_title_weighted_over_address() {
        let mut matcher = EntryMatcher::new(SearchConfig::default());
        // "news" appears in entry 1's title and only in entry 0's address
        let entries = vec![
            entry("a", "Aggregator", "https://news.example.com/"),
            entry("b", "News", "https://example.org/"),
        ];

        let hits = matcher.filter(&entries, "news");
        assert_eq!(hits.first(), Some(&1));
    }

    #[test]
    fn test_non_matching_entries_excluded() {
        let mut matcher = EntryMatcher::new(SearchConfig::default());
        let entries = sample();
        assert!(matcher.filter(&entries, "zzzzqqqq").is_empty());
    }

    #[test]
    fn test_short_query_substring_behavior() {
        let mut matcher = EntryMatcher::new(SearchConfig::default());
        let entries = sample();

        // Single char is below the default minimum: substring match,
        // document order preserved.
        let hits = matcher.filter(&entries, "r");
        assert_eq!(hits, vec![0, 1, 2]);

        let hits = matcher.filter(&entries, "x");
        assert!(hits.is_empty());
    }

    #[test]
    fn test_deterministic() {
        let mut matcher = EntryMatcher::new(SearchConfig::default());
        let entries = sample();
        let first = matcher.filter(&entries, "docs");
        let second = matcher.filter(&entries, "docs");
        assert_eq!(first, second);
    }
}
