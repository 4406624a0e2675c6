//! Dictionary sources
//!
//! File access for word lists; kept separate from the index so the core
//! never touches the filesystem directly.

pub mod loader;

pub use loader::read_dictionary;
