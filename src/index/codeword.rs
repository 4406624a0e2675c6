//! Codeword scheme
//!
//! Matches a pattern where each wildcard symbol names a letter class: the
//! same symbol recurring in the query forces the same letter at those
//! positions. Words are bucketed by their letter-repetition structure, so
//! the index itself acts as a coarse pre-filter and only structurally
//! compatible words need the full positional check.

use super::engine::Buckets;
use super::scheme::{Scheme, fold};
use crate::core::{Key, Word};
use rustc_hash::FxHashMap;

/// Codeword scheme
///
/// `key` assigns each first-seen character the next unused number
/// starting at 1 and reuses it on repeats, so "barefoot" becomes
/// `[1,2,3,4,5,6,6,7]`. Queries go through the same coding, each distinct
/// wildcard character forming its own class.
pub struct CodewordScheme;

fn structural_code(input: &str) -> Box<[u8]> {
    let folded = fold(input);
    let mut seen: FxHashMap<char, u8> = FxHashMap::default();
    let mut code = Vec::with_capacity(folded.len());
    for c in folded.chars() {
        let next = u8::try_from(seen.len() + 1).unwrap_or(u8::MAX);
        code.push(*seen.entry(c).or_insert(next));
    }
    code.into_boxed_slice()
}

/// Position-wise literal check
///
/// Every alphabetic query position must hold the candidate's letter at
/// that position (case-insensitive); wildcard positions add no further
/// constraint, their agreement having been settled by the structural
/// code.
fn literals_match(query: &str, candidate: &Word) -> bool {
    query
        .chars()
        .zip(candidate.folded().chars())
        .all(|(q, c)| !q.is_ascii_alphabetic() || q.to_ascii_lowercase() == c)
}

impl Scheme for CodewordScheme {
    fn key(&self, word: &str) -> Key {
        Key::Code(structural_code(word))
    }

    fn search<'a>(&self, buckets: &'a Buckets, query: &str) -> Option<Vec<&'a Word>> {
        let query = query.trim();

        // Absent code: no result container at all. A present code with
        // zero survivors yields an empty list instead; the two outcomes
        // are deliberately distinct.
        let bucket = buckets.get(&self.key(query))?;

        Some(
            bucket
                .iter()
                .filter(|candidate| literals_match(query, candidate))
                .collect(),
        )
    }

    fn usage(&self) -> &'static str {
        "\
Finds words that match the input with missing letters. This is similar to
the crossword mode, but it treats the blank characters differently. Each
blank character matches only a single letter throughout the word. If you
have different letters through the word you must use different blank
characters for each one. Any non letter character can be used as a blank,
e.g. digits or punctuation.

Example:

    : 1234566t
    BAREFOOT
    DISCREET

The double 6 towards the end means those two letters must be the same in
the result, and also different from any of the letters using 1-5.
"
    }
}
