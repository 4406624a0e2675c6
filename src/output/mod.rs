//! Terminal output formatting
//!
//! All user-facing printing lives here; the index itself never prints.

pub mod display;

pub use display::{print_load_report, print_query_result, print_search_results};
