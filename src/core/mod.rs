//! Core domain types for word indexing
//!
//! This module contains the fundamental domain types with zero external dependencies.
//! All types here are pure, testable, and have clear mathematical properties.

mod key;
mod word;

pub use key::Key;
pub use word::{Word, WordError};
