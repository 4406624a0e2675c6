//! Normalisation schemes
//!
//! Defines the Scheme trait and the plain and anagram implementations.
//! The crossword and codeword schemes live in their own modules since they
//! override search entirely.

use super::engine::Buckets;
use super::{CodewordScheme, CrosswordScheme};
use crate::core::{Key, Word};

/// A normalisation scheme for indexing and searching words
///
/// A scheme decides two things: which key a word is filed under at
/// insertion time, and how a raw query maps to matching words at search
/// time. The default search is an exact lookup of the query's own key;
/// schemes whose matching is not a single key lookup override it.
pub trait Scheme {
    /// Compute the index key for a word or query
    fn key(&self, word: &str) -> Key;

    /// Search the index for a query string
    ///
    /// Returns `None` when nothing matches. The codeword scheme
    /// additionally distinguishes an empty-but-present result, see
    /// [`CodewordScheme`].
    fn search<'a>(&self, buckets: &'a Buckets, query: &str) -> Option<Vec<&'a Word>> {
        buckets.get(&self.key(query)).map(|b| b.iter().collect())
    }

    /// Usage text describing how to query under this scheme
    fn usage(&self) -> &'static str;
}

/// Lowercase and trim, the shared first step of every scheme
pub(crate) fn fold(input: &str) -> String {
    input.trim().to_lowercase()
}

/// Enum wrapper for all scheme types
///
/// Allows runtime selection of scheme while maintaining static dispatch.
pub enum SchemeKind {
    /// Case-insensitive exact match
    Plain(PlainScheme),
    /// Letter-multiset (anagram) match
    Anagram(AnagramScheme),
    /// Positional wildcard match
    Crossword(CrosswordScheme),
    /// Wildcard-class (letter equivalence) match
    Codeword(CodewordScheme),
}

impl Scheme for SchemeKind {
    fn key(&self, word: &str) -> Key {
        match self {
            Self::Plain(s) => s.key(word),
            Self::Anagram(s) => s.key(word),
            Self::Crossword(s) => s.key(word),
            Self::Codeword(s) => s.key(word),
        }
    }

    fn search<'a>(&self, buckets: &'a Buckets, query: &str) -> Option<Vec<&'a Word>> {
        match self {
            Self::Plain(s) => s.search(buckets, query),
            Self::Anagram(s) => s.search(buckets, query),
            Self::Crossword(s) => s.search(buckets, query),
            Self::Codeword(s) => s.search(buckets, query),
        }
    }

    fn usage(&self) -> &'static str {
        match self {
            Self::Plain(s) => s.usage(),
            Self::Anagram(s) => s.usage(),
            Self::Crossword(s) => s.usage(),
            Self::Codeword(s) => s.usage(),
        }
    }
}

impl SchemeKind {
    /// The recognised scheme names, in CLI order
    pub const NAMES: [&'static str; 4] = ["plain", "anagram", "crossword", "codeword"];

    /// Create a scheme from its name
    ///
    /// Returns `None` for unrecognised names; the caller owns the
    /// resulting error message.
    #[must_use]
    pub fn from_name(name: &str) -> Option<Self> {
        match name {
            "plain" => Some(Self::Plain(PlainScheme)),
            "anagram" => Some(Self::Anagram(AnagramScheme)),
            "crossword" => Some(Self::Crossword(CrosswordScheme)),
            "codeword" => Some(Self::Codeword(CodewordScheme)),
            _ => None,
        }
    }
}

/// Plain scheme
///
/// Words are keyed by their lowercase form, so lookups are
/// case-insensitive exact matches.
pub struct PlainScheme;

impl Scheme for PlainScheme {
    fn key(&self, word: &str) -> Key {
        Key::Text(fold(word).into())
    }

    fn usage(&self) -> &'static str {
        "\
Matches words in a case insensitive manner. Type a word in any or mixed
case and if the word exists in the dictionary it will be shown.

Example:

    : HeLlo
    HELLO
"
    }
}

/// Anagram scheme
///
/// Words are keyed by their letters sorted alphabetically, so two words
/// share a bucket iff they are exact anagrams of one another.
/// Different-length words can never collide.
pub struct AnagramScheme;

impl Scheme for AnagramScheme {
    fn key(&self, word: &str) -> Key {
        let mut letters: Vec<char> = fold(word).chars().collect();
        letters.sort_unstable();
        Key::Letters(letters.into_iter().collect::<String>().into())
    }

    fn usage(&self) -> &'static str {
        "\
Finds words that are an anagram of the input text.

Example:

    : opst
    OPTS
    POST
    POTS
    SPOT
    STOP
    TOPS
"
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn plain_key_folds_case_and_whitespace() {
        let scheme = PlainScheme;
        assert_eq!(scheme.key("  HeLlo \n"), Key::Text("hello".into()));
        assert_eq!(scheme.key("hello"), scheme.key("HELLO"));
    }

    #[test]
    fn plain_search_any_case_returns_original() {
        let mut buckets = Buckets::default();
        let scheme = PlainScheme;
        let word = Word::new("HELLO").unwrap();
        buckets.push(scheme.key(word.text()), word);

        let hits = scheme.search(&buckets, "hello").unwrap();
        assert_eq!(hits.len(), 1);
        assert_eq!(hits[0].text(), "HELLO");

        let hits = scheme.search(&buckets, "HeLlO").unwrap();
        assert_eq!(hits[0].text(), "HELLO");
    }

    #[test]
    fn plain_search_miss_is_none() {
        let buckets = Buckets::default();
        assert!(PlainScheme.search(&buckets, "absent").is_none());
    }

    #[test]
    fn anagram_key_is_letter_multiset() {
        let scheme = AnagramScheme;
        assert_eq!(scheme.key("stop"), Key::Letters("opst".into()));
        assert_eq!(scheme.key("stop"), scheme.key("pots"));
        assert_eq!(scheme.key("STOP"), scheme.key("spot"));
        // Same letters, different counts: no collision
        assert_ne!(scheme.key("too"), scheme.key("to"));
    }

    #[test]
    fn anagram_key_is_deterministic() {
        let scheme = AnagramScheme;
        assert_eq!(scheme.key("barefoot"), scheme.key("barefoot"));
    }

    #[test]
    fn anagram_all_permutations_share_a_key() {
        let scheme = AnagramScheme;
        let reference = scheme.key("tops");
        for permutation in ["tops", "opts", "post", "pots", "spot", "stop"] {
            assert_eq!(scheme.key(permutation), reference, "{permutation}");
        }
    }

    #[test]
    fn anagram_search_returns_whole_bucket() {
        let mut buckets = Buckets::default();
        let scheme = AnagramScheme;
        for text in ["OPTS", "POST", "POTS", "SPOT", "STOP", "TOPS", "PAST"] {
            let word = Word::new(text).unwrap();
            buckets.push(scheme.key(word.text()), word);
        }

        let hits = scheme.search(&buckets, "opst").unwrap();
        let texts: Vec<&str> = hits.iter().map(|w| w.text()).collect();
        assert_eq!(texts, ["OPTS", "POST", "POTS", "SPOT", "STOP", "TOPS"]);
    }

    #[test]
    fn scheme_kind_from_name() {
        for name in SchemeKind::NAMES {
            assert!(SchemeKind::from_name(name).is_some(), "{name}");
        }
        assert!(SchemeKind::from_name("fuzzy").is_none());
        assert!(SchemeKind::from_name("").is_none());
    }

    #[test]
    fn scheme_kind_delegates_key() {
        let plain = SchemeKind::from_name("plain").unwrap();
        assert_eq!(plain.key("Stop"), PlainScheme.key("Stop"));

        let anagram = SchemeKind::from_name("anagram").unwrap();
        assert_eq!(anagram.key("Stop"), AnagramScheme.key("Stop"));
    }
}
