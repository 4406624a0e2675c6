//! Word Index
//!
//! Dictionary lookup with interchangeable normalisation schemes: plain
//! case-insensitive match, anagram match, crossword wildcard match, and
//! codeword structural match.
//!
//! # Quick Start
//!
//! ```rust
//! use wordindex::core::Word;
//! use wordindex::index::{AnagramScheme, WordIndex};
//!
//! let index = WordIndex::from_words(
//!     AnagramScheme,
//!     ["STOP", "POTS", "PAST"].map(|w| Word::new(w).unwrap()),
//! );
//!
//! let hits = index.search("tops").unwrap();
//! assert_eq!(hits.len(), 2);
//! ```

// Core domain types
pub mod core;

// The index and its normalisation schemes
pub mod index;

// Word lists
pub mod wordlists;

// Command implementations
pub mod commands;

// Terminal output formatting
pub mod output;
