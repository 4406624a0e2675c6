//! Display functions for command results

use crate::commands::QueryResult;
use crate::core::Word;
use crate::index::LoadReport;
use colored::Colorize;

/// Print search hits, or a notice when there are none
///
/// `None` (no match) and `Some` with an empty list (codeword mode, code
/// present but zero survivors) read the same to a person at the prompt.
pub fn print_search_results(results: Option<&[&Word]>) {
    match results {
        Some(words) if !words.is_empty() => {
            for word in words {
                println!("{}", word.text().bright_white().bold());
            }
        }
        _ => println!("{}", "Nothing found!".yellow()),
    }
}

/// Print the result of a one-shot query
pub fn print_query_result(result: &QueryResult) {
    match &result.matches {
        Some(words) if !words.is_empty() => {
            for word in words {
                println!("{}", word.bright_white().bold());
            }
        }
        _ => println!("{}", "Nothing found!".yellow()),
    }
}

/// Print a dictionary load summary with one line per rejected entry
pub fn print_load_report(report: &LoadReport) {
    for diag in &report.skipped {
        if diag.text.is_empty() {
            println!("{} line {}: {}", "skipped".red(), diag.line, diag.reason);
        } else {
            println!(
                "{} line {}: {} ({})",
                "skipped".red(),
                diag.line,
                diag.reason,
                diag.text
            );
        }
    }
    println!(
        "Loaded {} words",
        report.inserted.to_string().bright_cyan()
    );
}
