//! Index key representation
//!
//! Every scheme reduces a word to a `Key` at insertion time. The variants
//! keep the three key shapes distinct so keys from different schemes can
//! never collide by accident.

use std::fmt;

/// A normalised index key
///
/// - `Text`: the lowercase word itself (plain and crossword schemes)
/// - `Letters`: the word's letters sorted alphabetically (anagram scheme)
/// - `Code`: the word's letter-repetition structure (codeword scheme),
///   e.g. "barefoot" → `[1, 2, 3, 4, 5, 6, 6, 7]`
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum Key {
    Text(Box<str>),
    Letters(Box<str>),
    Code(Box<[u8]>),
}

impl fmt::Display for Key {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Text(s) => write!(f, "{s}"),
            Self::Letters(s) => write!(f, "({s})"),
            Self::Code(code) => {
                let digits: Vec<String> = code.iter().map(u8::to_string).collect();
                write!(f, "[{}]", digits.join(","))
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::hash_map::DefaultHasher;
    use std::hash::{Hash, Hasher};

    fn hash_of(key: &Key) -> u64 {
        let mut hasher = DefaultHasher::new();
        key.hash(&mut hasher);
        hasher.finish()
    }

    #[test]
    fn equal_keys_hash_equal() {
        let a = Key::Code(vec![1, 2, 3, 3].into_boxed_slice());
        let b = Key::Code(vec![1, 2, 3, 3].into_boxed_slice());
        assert_eq!(a, b);
        assert_eq!(hash_of(&a), hash_of(&b));
    }

    #[test]
    fn variants_never_compare_equal() {
        // "abc" as plain text vs. as a sorted-letter key are different keys.
        let text = Key::Text("abc".into());
        let letters = Key::Letters("abc".into());
        assert_ne!(text, letters);
    }

    #[test]
    fn display_formats() {
        assert_eq!(Key::Text("hello".into()).to_string(), "hello");
        assert_eq!(Key::Letters("ehllo".into()).to_string(), "(ehllo)");
        assert_eq!(
            Key::Code(vec![1, 2, 1].into_boxed_slice()).to_string(),
            "[1,2,1]"
        );
    }
}
