//! Dictionary word representation
//!
//! A `Word` is a single validated dictionary entry. The original casing is
//! preserved for display; a case-folded form is cached for matching.

use std::fmt;

/// A validated dictionary word
///
/// Words are single whitespace-free tokens made of ASCII letters only.
/// The original spelling is kept so search results echo the dictionary
/// exactly; `folded()` provides the lowercase form all matching uses.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Word {
    text: String,
    folded: String,
}

/// Error type for invalid dictionary entries
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum WordError {
    Empty,
    MultipleTokens,
    NonAlphabetic(char),
}

impl fmt::Display for WordError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Empty => write!(f, "blank line"),
            Self::MultipleTokens => write!(f, "multiple words on one line"),
            Self::NonAlphabetic(c) => write!(f, "non letter character '{c}'"),
        }
    }
}

impl std::error::Error for WordError {}

impl Word {
    /// Create a new Word from a raw dictionary line
    ///
    /// Leading and trailing whitespace is trimmed before validation.
    ///
    /// # Errors
    /// Returns `WordError` if:
    /// - The line is empty after trimming
    /// - The line splits into more than one whitespace-separated token
    /// - Any character is not an ASCII letter
    ///
    /// # Examples
    /// ```
    /// use wordindex::core::Word;
    ///
    /// let word = Word::new("Hello").unwrap();
    /// assert_eq!(word.text(), "Hello");
    /// assert_eq!(word.folded(), "hello");
    ///
    /// assert!(Word::new("two words").is_err());
    /// assert!(Word::new("sh0rt").is_err());
    /// ```
    pub fn new(raw: impl AsRef<str>) -> Result<Self, WordError> {
        let trimmed = raw.as_ref().trim();

        if trimmed.is_empty() {
            return Err(WordError::Empty);
        }

        if trimmed.split_whitespace().nth(1).is_some() {
            return Err(WordError::MultipleTokens);
        }

        if let Some(bad) = trimmed.chars().find(|c| !c.is_ascii_alphabetic()) {
            return Err(WordError::NonAlphabetic(bad));
        }

        Ok(Self {
            text: trimmed.to_string(),
            folded: trimmed.to_ascii_lowercase(),
        })
    }

    /// Get the word as it appeared in the dictionary
    #[inline]
    #[must_use]
    pub fn text(&self) -> &str {
        &self.text
    }

    /// Get the lowercase form used for matching
    #[inline]
    #[must_use]
    pub fn folded(&self) -> &str {
        &self.folded
    }

    /// Length in letters
    ///
    /// Words are ASCII-only, so bytes and letters coincide.
    #[inline]
    #[must_use]
    pub fn len(&self) -> usize {
        self.folded.len()
    }

    /// Check whether the word has no letters
    ///
    /// Always false for a constructed `Word`; provided for completeness.
    #[inline]
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.folded.is_empty()
    }
}

impl fmt::Display for Word {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.text)
    }
}
