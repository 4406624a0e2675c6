//! Word indexing
//!
//! The generic keyed multi-map at the heart of the tool, plus the four
//! normalisation schemes that decide how words are keyed and queried.

mod codeword;
mod crossword;
mod engine;
mod scheme;

pub use codeword::CodewordScheme;
pub use crossword::CrosswordScheme;
pub use engine::{Buckets, LineDiagnostic, LoadReport, WordIndex};
pub use scheme::{AnagramScheme, PlainScheme, Scheme, SchemeKind};
