//! Main word index
//!
//! A keyed multi-map from normalised keys to the original-case words that
//! produced them, plus dictionary loading with per-line diagnostics.

use super::scheme::Scheme;
use crate::core::{Key, Word, WordError};
use crate::wordlists::loader::read_dictionary;
use rustc_hash::FxHashMap;
use std::io;
use std::path::Path;

/// The raw key → bucket storage behind a [`WordIndex`]
///
/// A bucket is the append-only list of original-case words sharing one
/// key. Insertion order within a bucket is preserved and is the only
/// ordering guarantee the index makes.
#[derive(Debug, Default)]
pub struct Buckets {
    map: FxHashMap<Key, Vec<Word>>,
    words: usize,
}

impl Buckets {
    /// Get the bucket for a key
    ///
    /// Absent keys are `None`; a present bucket is never empty.
    #[inline]
    #[must_use]
    pub fn get(&self, key: &Key) -> Option<&[Word]> {
        self.map.get(key).map(Vec::as_slice)
    }

    /// Append a word to the bucket for `key`, creating it if absent
    ///
    /// No deduplication: a word pushed twice appears twice.
    pub fn push(&mut self, key: Key, word: Word) {
        self.map.entry(key).or_default().push(word);
        self.words += 1;
    }

    /// Iterate over all (key, bucket) pairs in arbitrary order
    pub fn iter(&self) -> impl Iterator<Item = (&Key, &[Word])> {
        self.map.iter().map(|(k, b)| (k, b.as_slice()))
    }

    /// Number of distinct keys
    #[inline]
    #[must_use]
    pub fn len(&self) -> usize {
        self.map.len()
    }

    /// Total number of stored words across all buckets
    #[inline]
    #[must_use]
    pub const fn word_count(&self) -> usize {
        self.words
    }

    #[inline]
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.map.is_empty()
    }

    /// Drop all buckets
    pub fn clear(&mut self) {
        self.map.clear();
        self.words = 0;
    }
}

/// One rejected dictionary line
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LineDiagnostic {
    /// 1-based line number in the source
    pub line: usize,
    /// The offending line, trimmed
    pub text: String,
    /// Why the line was rejected
    pub reason: WordError,
}

/// Outcome of a dictionary load
///
/// The inserted count reflects only successfully indexed words; every
/// rejected line is recorded individually. A missing source file yields a
/// default (all-zero) report rather than an error, leaving the caller to
/// decide how serious that is.
#[derive(Debug, Default)]
pub struct LoadReport {
    /// Words successfully inserted
    pub inserted: usize,
    /// Lines rejected during validation
    pub skipped: Vec<LineDiagnostic>,
}

/// Main word index
///
/// Coordinates insertion and search through a normalisation scheme. The
/// scheme fixes the key a word is filed under once, at insertion time;
/// searches are pure functions of the current contents and the query.
pub struct WordIndex<S: Scheme> {
    scheme: S,
    buckets: Buckets,
}

impl<S: Scheme> WordIndex<S> {
    /// Create an empty index using the given scheme
    #[must_use]
    pub fn new(scheme: S) -> Self {
        Self {
            scheme,
            buckets: Buckets::default(),
        }
    }

    /// Create an index pre-seeded with words
    #[must_use]
    pub fn from_words(scheme: S, words: impl IntoIterator<Item = Word>) -> Self {
        let mut index = Self::new(scheme);
        for word in words {
            index.insert(word);
        }
        index
    }

    /// The active scheme
    #[inline]
    pub const fn scheme(&self) -> &S {
        &self.scheme
    }

    /// Insert a word under its normalised key
    pub fn insert(&mut self, word: Word) {
        let key = self.scheme.key(word.text());
        self.buckets.push(key, word);
    }

    /// Exact-key lookup
    ///
    /// Returns the bucket for `key`, or `None` if the key is absent —
    /// never an empty-but-present bucket.
    #[inline]
    #[must_use]
    pub fn lookup(&self, key: &Key) -> Option<&[Word]> {
        self.buckets.get(key)
    }

    /// Search for a raw query string under the active scheme
    ///
    /// `None` means no match. In codeword mode `Some` may hold an empty
    /// list when the query's structural code is indexed but no candidate
    /// survives the literal check; callers that only care about "anything
    /// to show?" can treat the two alike.
    #[must_use]
    pub fn search(&self, query: &str) -> Option<Vec<&Word>> {
        self.scheme.search(&self.buckets, query)
    }

    /// Validate and insert candidate lines
    ///
    /// Each line must be a single non-blank token of ASCII letters.
    /// Invalid lines are recorded in the report and skipped; loading
    /// continues. With `reset` the index is cleared before anything is
    /// inserted.
    pub fn load_words<I>(&mut self, lines: I, reset: bool) -> LoadReport
    where
        I: IntoIterator,
        I::Item: AsRef<str>,
    {
        if reset {
            self.buckets.clear();
        }

        let mut report = LoadReport::default();
        for (i, line) in lines.into_iter().enumerate() {
            let line = line.as_ref();
            match Word::new(line) {
                Ok(word) => {
                    self.insert(word);
                    report.inserted += 1;
                }
                Err(reason) => report.skipped.push(LineDiagnostic {
                    line: i + 1,
                    text: line.trim().to_string(),
                    reason,
                }),
            }
        }
        report
    }

    /// Load a dictionary file, one candidate word per line
    ///
    /// A missing file is not an error: the load is a no-op producing an
    /// empty report (the index is still cleared when `reset` is set).
    ///
    /// # Errors
    /// Returns any I/O error other than the file not existing.
    pub fn load_from_path(&mut self, path: impl AsRef<Path>, reset: bool) -> io::Result<LoadReport> {
        if reset {
            self.buckets.clear();
        }
        match read_dictionary(path)? {
            Some(content) => Ok(self.load_words(content.lines(), false)),
            None => Ok(LoadReport::default()),
        }
    }

    /// Total number of indexed words
    #[inline]
    #[must_use]
    pub const fn word_count(&self) -> usize {
        self.buckets.word_count()
    }

    /// Number of distinct keys
    #[inline]
    #[must_use]
    pub fn bucket_count(&self) -> usize {
        self.buckets.len()
    }

    #[inline]
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.buckets.is_empty()
    }
}
