//! Command implementations

pub mod query;
pub mod repl;

pub use query::{QueryResult, run_query};
pub use repl::run_repl;
