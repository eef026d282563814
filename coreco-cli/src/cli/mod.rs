//! Command-line interface orchestration for the coreco recommender.
//!
//! The CLI offers a `recommend` command that loads a book catalog and a
//! ratings table from CSV, resolves the requested ISBNs and prints the books
//! most often liked alongside them.

mod commands;

pub use commands::{
    Cli, CliError, Command, RankedBook, RecommendCommand, RecommendationSummary, render_summary,
    run_cli,
};

#[cfg(test)]
mod test_helpers;
