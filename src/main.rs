//! Word Index - CLI
//!
//! Interactive dictionary lookup with plain, anagram, crossword and
//! codeword index schemes.

use anyhow::{Result, bail};
use clap::{Parser, Subcommand};
use colored::Colorize;
use std::path::PathBuf;
use wordindex::{
    commands::{run_query, run_repl},
    index::{SchemeKind, WordIndex},
    output::{print_load_report, print_query_result},
};

#[derive(Parser)]
#[command(
    name = "wordindex",
    about = "Dictionary lookup with plain, anagram, crossword and codeword index schemes",
    version,
    author
)]
struct Cli {
    /// Index scheme: plain, anagram, crossword, codeword
    scheme: String,

    /// Dictionary file, one word per line
    #[arg(short = 'd', long, default_value = "dictionary.txt")]
    dictionary: PathBuf,

    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// Interactive lookup loop (default) - blank line exits
    Repl,

    /// Run a single query and exit
    Query {
        /// The query pattern, interpreted by the chosen scheme
        pattern: String,
    },
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    let Some(scheme) = SchemeKind::from_name(&cli.scheme) else {
        bail!(
            "unknown scheme '{}', expected one of: {}",
            cli.scheme,
            SchemeKind::NAMES.join(", ")
        );
    };

    let mut index = WordIndex::new(scheme);
    let report = index.load_from_path(&cli.dictionary, true)?;
    print_load_report(&report);

    // A missing or empty dictionary is not fatal; queries will simply
    // find nothing.
    if index.is_empty() {
        eprintln!(
            "{}",
            format!("warning: no words loaded from {}", cli.dictionary.display()).yellow()
        );
    }

    match cli.command.unwrap_or(Commands::Repl) {
        Commands::Repl => run_repl(&index)?,
        Commands::Query { pattern } => {
            let result = run_query(&index, &pattern);
            print_query_result(&result);
        }
    }

    Ok(())
}
