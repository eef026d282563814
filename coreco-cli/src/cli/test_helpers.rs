//! Small helpers shared across CLI tests.
//!
//! The CLI unit tests build temporary catalog and ratings files and assert
//! error handling behaviour. These helpers keep the test cases concise.

use std::fs::File;
use std::io::{self, Write};
use std::path::PathBuf;

use tempfile::TempDir;

use super::{Cli, CliError, Command, RecommendCommand, run_cli};

pub(super) const BOOKS_CSV: &str = "\
book_id,isbn,authors,title,original_publication_year
1,100,Suzanne Collins,The Hunger Games,2008.0
2,200,J.K. Rowling,Harry Potter,1997.0
3,300,Stephenie Meyer,Twilight,2005.0
4,400,Harper Lee,To Kill a Mockingbird,1960.0
";

pub(super) const RATINGS_CSV: &str = "\
user_id,book_id,rating
1,1,5
1,2,5
2,1,5
2,3,5
3,1,5
3,3,5
4,4,5
4,2,3
";

pub(super) fn temp_dir() -> TempDir {
    match TempDir::new() {
        Ok(dir) => dir,
        Err(err) => panic!("failed to create temp dir: {err}"),
    }
}

pub(super) fn create_text_file(dir: &TempDir, name: &str, contents: &str) -> io::Result<PathBuf> {
    let path = dir.path().join(name);
    let mut file = File::create(&path)?;
    file.write_all(contents.as_bytes())?;
    Ok(path)
}

/// Writes the default fixtures and returns a command seeded with `isbns`.
pub(super) fn recommend_command(
    dir: &TempDir,
    isbns: &[u64],
    count: i64,
) -> io::Result<RecommendCommand> {
    Ok(RecommendCommand {
        books: create_text_file(dir, "books.csv", BOOKS_CSV)?,
        ratings: create_text_file(dir, "ratings.csv", RATINGS_CSV)?,
        isbns: isbns.iter().copied().map(coreco_providers_csv::Isbn::new).collect(),
        count,
        min_rating: 5,
        drop_zero_scores: false,
        explain: false,
    })
}

pub(super) fn run_cli_expecting_error(command: RecommendCommand, panic_msg: &str) -> CliError {
    let cli = Cli {
        command: Command::Recommend(command),
    };
    match run_cli(cli) {
        Ok(_) => panic!("{panic_msg}"),
        Err(err) => err,
    }
}
