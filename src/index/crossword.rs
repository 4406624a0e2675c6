//! Crossword scheme
//!
//! Matches a pattern where every non-letter character is a wildcard for
//! any single letter, independently at each position. There is no key that
//! can narrow this down, so searching is a linear scan over the whole
//! index: O(dictionary size × word length) per query, inherent to the
//! mode.

use super::engine::Buckets;
use super::scheme::{Scheme, fold};
use crate::core::{Key, Word};

/// Crossword scheme
///
/// Words are indexed under their plain lowercase key, which makes every
/// bucket effectively a singleton; matching happens at search time
/// against each bucket's representative word.
pub struct CrosswordScheme;

/// A fixed-length positional pattern built from a query
///
/// `Some(c)` requires the letter `c` at that position; `None` matches any
/// single letter. The pattern must cover the entire candidate, so words
/// of a different length never match.
fn compile(query: &str) -> Vec<Option<char>> {
    fold(query)
        .chars()
        .map(|c| c.is_ascii_alphabetic().then_some(c))
        .collect()
}

fn matches(pattern: &[Option<char>], entry: &str) -> bool {
    entry.chars().count() == pattern.len()
        && pattern
            .iter()
            .zip(entry.chars())
            .all(|(&slot, c)| slot.is_none_or(|wanted| wanted == c))
}

impl Scheme for CrosswordScheme {
    fn key(&self, word: &str) -> Key {
        Key::Text(fold(word).into())
    }

    fn search<'a>(&self, buckets: &'a Buckets, query: &str) -> Option<Vec<&'a Word>> {
        let pattern = compile(query);

        let mut hits = Vec::new();
        for (key, bucket) in buckets.iter() {
            let Key::Text(entry) = key else { continue };
            if matches(&pattern, entry) {
                // One representative per bucket; plain keys make buckets
                // singletons apart from case variants of the same word.
                if let Some(word) = bucket.first() {
                    hits.push(word);
                }
            }
        }

        if hits.is_empty() { None } else { Some(hits) }
    }

    fn usage(&self) -> &'static str {
        "\
Finds words that match the input with blanks. Blanks are considered to be
any character that isn't a letter, so any punctuation or digits can be
used for the blanks.

Example:

    : __g_nt
    COGENT
    NUGENT
    REGENT
    URGENT
"
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn indexed(words: &[&str]) -> Buckets {
        let scheme = CrosswordScheme;
        let mut buckets = Buckets::default();
        for text in words {
            let word = Word::new(text).unwrap();
            buckets.push(scheme.key(word.text()), word);
        }
        buckets
    }

    fn sorted_hits(buckets: &Buckets, query: &str) -> Option<Vec<String>> {
        CrosswordScheme.search(buckets, query).map(|hits| {
            let mut texts: Vec<String> = hits.iter().map(|w| w.text().to_string()).collect();
            texts.sort();
            texts
        })
    }

    #[test]
    fn wildcards_match_any_letter_per_position() {
        let buckets = indexed(&["COGENT", "NUGENT", "REGENT", "URGENT", "ARGENT"]);

        let hits = sorted_hits(&buckets, "__g_nt").unwrap();
        assert_eq!(hits, ["ARGENT", "COGENT", "NUGENT", "REGENT", "URGENT"]);
    }

    #[test]
    fn expected_crossword_set() {
        let buckets = indexed(&["COGENT", "NUGENT", "REGENT", "URGENT", "ABSENT", "MOMENT"]);

        let hits = sorted_hits(&buckets, "__g_nt").unwrap();
        assert_eq!(hits, ["COGENT", "NUGENT", "REGENT", "URGENT"]);
    }

    #[test]
    fn wildcards_are_independent() {
        // The two leading wildcards resolve to different letters in REGENT
        // and to the same letter in AAGENT; both match.
        let buckets = indexed(&["REGENT", "AAGENT"]);
        let hits = sorted_hits(&buckets, "__g_nt").unwrap();
        assert_eq!(hits, ["AAGENT", "REGENT"]);
    }

    #[test]
    fn wrong_length_never_matches() {
        let buckets = indexed(&["COGENT", "NUGENT", "REGENT", "URGENT"]);

        assert!(sorted_hits(&buckets, "__g_n").is_none());
        assert!(sorted_hits(&buckets, "__g_nt_").is_none());
    }

    #[test]
    fn literal_letters_are_case_insensitive() {
        let buckets = indexed(&["URGENT"]);

        let hits = sorted_hits(&buckets, "__G_NT").unwrap();
        assert_eq!(hits, ["URGENT"]);
    }

    #[test]
    fn digits_and_punctuation_are_wildcards() {
        let buckets = indexed(&["URGENT"]);

        assert!(sorted_hits(&buckets, "12g3nt").is_some());
        assert!(sorted_hits(&buckets, "?!g.nt").is_some());
    }

    #[test]
    fn fully_literal_query_is_exact_match() {
        let buckets = indexed(&["URGENT", "COGENT"]);

        let hits = sorted_hits(&buckets, "urgent").unwrap();
        assert_eq!(hits, ["URGENT"]);
    }

    #[test]
    fn no_match_is_none() {
        let buckets = indexed(&["URGENT"]);
        assert!(sorted_hits(&buckets, "zz____").is_none());
    }
}
