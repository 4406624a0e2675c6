//! Interactive lookup loop
//!
//! Strict request/response prompt: one query in, its matches out,
//! terminating on a blank line or end of input.

use crate::index::{Scheme, WordIndex};
use crate::output::print_search_results;
use std::io::{self, BufRead, Write};

/// Run the interactive lookup loop
///
/// Prints the active scheme's usage text, then prompts until the user
/// enters a blank line or input ends.
///
/// # Errors
///
/// Returns an error if reading from stdin or flushing stdout fails.
pub fn run_repl<S: Scheme>(index: &WordIndex<S>) -> io::Result<()> {
    println!("{}", index.scheme().usage());

    let stdin = io::stdin();
    let mut input = String::new();
    loop {
        print!(": ");
        io::stdout().flush()?;

        input.clear();
        if stdin.lock().read_line(&mut input)? == 0 {
            break; // EOF
        }

        let query = input.trim_end_matches(['\r', '\n']);
        if query.is_empty() {
            break;
        }

        print_search_results(index.search(query).as_deref());
    }

    Ok(())
}
