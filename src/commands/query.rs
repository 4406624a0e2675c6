//! One-shot query command
//!
//! Runs a single search and returns the outcome as data, for
//! non-interactive use.

use crate::index::{Scheme, WordIndex};

/// Result of a one-shot query
pub struct QueryResult {
    /// The raw query as entered
    pub pattern: String,
    /// Matching words in bucket order; `None` when nothing matched,
    /// `Some` but empty when a codeword structure matched with zero
    /// survivors
    pub matches: Option<Vec<String>>,
}

/// Run a single query against the index
#[must_use]
pub fn run_query<S: Scheme>(index: &WordIndex<S>, pattern: &str) -> QueryResult {
    let matches = index
        .search(pattern)
        .map(|hits| hits.iter().map(|w| w.text().to_string()).collect());

    QueryResult {
        pattern: pattern.to_string(),
        matches,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::Word;
    use crate::index::{AnagramScheme, PlainScheme, WordIndex};

    #[test]
    fn query_returns_matches_as_text() {
        let index = WordIndex::from_words(
            AnagramScheme,
            ["STOP", "POTS", "PAST"].map(|w| Word::new(w).unwrap()),
        );

        let result = run_query(&index, "tops");
        assert_eq!(result.pattern, "tops");
        assert_eq!(result.matches, Some(vec!["STOP".into(), "POTS".into()]));
    }

    #[test]
    fn query_miss_is_none() {
        let index = WordIndex::from_words(PlainScheme, [Word::new("hello").unwrap()]);

        let result = run_query(&index, "absent");
        assert!(result.matches.is_none());
    }
}
