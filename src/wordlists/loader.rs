//! Word list loading utilities
//!
//! Reads dictionary files for the index; validation and diagnostics live
//! with the index itself.

use std::fs;
use std::io;
use std::path::Path;

/// Read a dictionary file into memory
///
/// One candidate word per line. A missing file is not an error here:
/// `Ok(None)` lets the index treat it as a zero-insertion load while the
/// caller decides whether that is fatal.
///
/// # Errors
///
/// Returns any I/O error other than the file not existing.
///
/// # Examples
/// ```no_run
/// use wordindex::wordlists::loader::read_dictionary;
///
/// if let Some(content) = read_dictionary("dictionary.txt").unwrap() {
///     println!("{} candidate lines", content.lines().count());
/// }
/// ```
pub fn read_dictionary<P: AsRef<Path>>(path: P) -> io::Result<Option<String>> {
    match fs::read_to_string(path) {
        Ok(content) => Ok(Some(content)),
        Err(e) if e.kind() == io::ErrorKind::NotFound => Ok(None),
        Err(e) => Err(e),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn missing_file_is_none_not_error() {
        let result = read_dictionary("no/such/dictionary.txt").unwrap();
        assert!(result.is_none());
    }
}
