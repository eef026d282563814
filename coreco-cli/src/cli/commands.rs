//! Command implementations and argument parsing for the coreco CLI.

use std::fs::File;
use std::io::{self, BufReader, Write};
use std::path::{Path, PathBuf};

use clap::{Args, Parser, Subcommand};
use coreco_core::{
    MAX_RESULT_COUNT, PreferenceSource, RecommendError, Recommendations, RecommenderBuilder,
    Score, SeedSet, TracingObserver, ZeroScorePolicy,
};
use coreco_providers_csv::{Book, Catalog, CsvProviderError, Isbn, RatingsFilter, RatingsProvider};
use thiserror::Error;
use tracing::{Span, field, info, instrument};

const DEFAULT_RESULT_COUNT: i64 = 10;
const DEFAULT_MIN_RATING: u8 = 5;

/// Top-level CLI options parsed by [`clap`].
#[derive(Debug, Parser, Clone)]
#[command(
    name = "coreco",
    about = "Recommend books liked by readers who liked yours."
)]
pub struct Cli {
    /// Command to execute.
    #[command(subcommand)]
    pub command: Command,
}

/// Supported CLI commands.
#[derive(Debug, Subcommand, Clone)]
pub enum Command {
    /// Recommend books for a set of favourite ISBNs.
    Recommend(RecommendCommand),
}

/// Options accepted by the `recommend` command.
#[derive(Debug, Args, Clone)]
pub struct RecommendCommand {
    /// Catalog CSV with `book_id`, `isbn`, `authors` and `title` columns.
    #[arg(long)]
    pub books: PathBuf,

    /// Ratings CSV with `user_id`, `book_id` and `rating` columns.
    #[arg(long)]
    pub ratings: PathBuf,

    /// ISBN of a favourite book (digits only). Repeat for several books.
    #[arg(long = "isbn", required = true, num_args = 1..)]
    pub isbns: Vec<Isbn>,

    /// Number of books to recommend. Zero or negative values recommend none.
    #[arg(long, default_value_t = DEFAULT_RESULT_COUNT, allow_negative_numbers = true)]
    pub count: i64,

    /// Lowest rating that counts as liking a book.
    #[arg(long = "min-rating", default_value_t = DEFAULT_MIN_RATING)]
    pub min_rating: u8,

    /// Ignore candidates that no reader of the chosen books liked.
    #[arg(long = "drop-zero-scores")]
    pub drop_zero_scores: bool,

    /// Trace every ranked book and show its score.
    #[arg(long)]
    pub explain: bool,
}

/// Errors surfaced while executing CLI commands.
#[derive(Debug, Error)]
pub enum CliError {
    /// File I/O failed while opening an input file.
    #[error("failed to open `{path}`: {source}")]
    Io {
        /// Path that triggered the failure.
        path: PathBuf,
        /// Underlying operating system error.
        #[source]
        source: io::Error,
    },
    /// Catalog or ratings ingestion failed.
    #[error(transparent)]
    Provider(#[from] CsvProviderError),
    /// Core orchestration failed.
    #[error(transparent)]
    Core(#[from] RecommendError),
    /// A requested ISBN is not in the catalog.
    #[error("ISBN {isbn} is not in the book catalog")]
    UnknownIsbn {
        /// The unresolved ISBN.
        isbn: Isbn,
    },
}

/// One rendered recommendation.
#[derive(Debug, Clone)]
pub struct RankedBook {
    /// Position in the ranking, starting at 1.
    pub rank: usize,
    /// Number of overlapping readers who liked the book.
    pub score: Score,
    /// Catalog metadata.
    pub book: Book,
}

/// Summarises the outcome of executing a CLI command.
#[derive(Debug, Clone)]
pub struct RecommendationSummary {
    /// Books the recommendation was seeded with, in request order.
    pub seeds: Vec<Book>,
    /// Recommended books, best first.
    pub recommendations: Vec<RankedBook>,
    /// Number of scored candidates before selection.
    pub candidates: usize,
    /// Whether scores should be shown when rendering.
    pub explain: bool,
}

/// Executes the CLI command represented by `cli`.
///
/// # Errors
/// Returns [`CliError`] when loading, ISBN resolution or recommendation fails.
///
/// # Examples
/// ```
/// # use std::error::Error;
/// # use coreco_cli::cli::{Cli, Command, RecommendCommand, run_cli};
/// # use tempfile::TempDir;
/// #
/// # fn main() -> Result<(), Box<dyn Error>> {
/// let dir = TempDir::new()?;
/// let books = dir.path().join("books.csv");
/// let ratings = dir.path().join("ratings.csv");
/// std::fs::write(&books, "book_id,isbn,authors,title\n1,11,A,One\n2,22,B,Two\n")?;
/// std::fs::write(&ratings, "user_id,book_id,rating\n1,1,5\n1,2,5\n")?;
/// let cli = Cli {
///     command: Command::Recommend(RecommendCommand {
///         books,
///         ratings,
///         isbns: vec!["11".parse()?],
///         count: 3,
///         min_rating: 5,
///         drop_zero_scores: false,
///         explain: false,
///     }),
/// };
/// let summary = run_cli(cli)?;
/// assert_eq!(summary.recommendations.len(), 1);
/// assert_eq!(summary.recommendations[0].book.title(), "Two");
/// # Ok(())
/// # }
/// ```
#[instrument(
    name = "cli.run",
    err,
    skip(cli),
    fields(command = field::Empty),
)]
pub fn run_cli(cli: Cli) -> Result<RecommendationSummary, CliError> {
    match cli.command {
        Command::Recommend(recommend) => {
            Span::current().record("command", field::display("recommend"));
            run_recommend(recommend)
        }
    }
}

#[instrument(
    name = "cli.recommend",
    err,
    skip(command),
    fields(count = command.count, seeds = command.isbns.len(), min_rating = command.min_rating),
)]
pub(super) fn run_recommend(command: RecommendCommand) -> Result<RecommendationSummary, CliError> {
    let recommender = RecommenderBuilder::new()
        .with_result_count(result_count(command.count))
        .with_zero_score_policy(if command.drop_zero_scores {
            ZeroScorePolicy::Drop
        } else {
            ZeroScorePolicy::Keep
        })
        .build()?;

    let catalog = Catalog::try_from_reader(
        derive_source_name(&command.books, "books"),
        open_reader(&command.books)?,
    )?;
    let filter = RatingsFilter::with_min_rating(command.min_rating);
    let ratings = RatingsProvider::try_from_reader(
        derive_source_name(&command.ratings, "ratings"),
        open_reader(&command.ratings)?,
        &catalog,
        &filter,
    )?;

    let seed_books = resolve_seeds(&catalog, &command.isbns)?;
    let seeds: SeedSet = seed_books.iter().map(Book::id).collect();

    let result = if command.explain {
        recommender.recommend_with(&ratings, &seeds, &mut TracingObserver)?
    } else {
        recommender.recommend(&ratings, &seeds)?
    };

    let summary = summarise(&catalog, seed_books, &result, command.explain);
    info!(
        catalog = catalog.len(),
        users = ratings.liked_items().user_count(),
        skipped_rows = catalog.skipped_rows() + ratings.skipped_rows(),
        candidates = summary.candidates,
        returned = summary.recommendations.len(),
        "command completed"
    );
    Ok(summary)
}

/// Maps the signed `--count` value onto a result count. Non-positive values
/// request nothing; values past [`MAX_RESULT_COUNT`] are capped, which cannot
/// change the output because no catalog holds that many candidates.
pub(super) fn result_count(count: i64) -> usize {
    usize::try_from(count.max(0))
        .unwrap_or(usize::MAX)
        .min(MAX_RESULT_COUNT)
}

/// Resolves every requested ISBN, preserving request order.
pub(super) fn resolve_seeds(catalog: &Catalog, isbns: &[Isbn]) -> Result<Vec<Book>, CliError> {
    isbns
        .iter()
        .map(|&isbn| {
            catalog
                .item_for_isbn(isbn)
                .and_then(|item| catalog.book(item))
                .cloned()
                .ok_or(CliError::UnknownIsbn { isbn })
        })
        .collect()
}

fn summarise(
    catalog: &Catalog,
    seeds: Vec<Book>,
    result: &Recommendations,
    explain: bool,
) -> RecommendationSummary {
    let recommendations = result
        .iter()
        .filter_map(|entry| {
            catalog.book(entry.item()).map(|book| RankedBook {
                rank: entry.rank(),
                score: entry.score(),
                book: book.clone(),
            })
        })
        .collect();
    RecommendationSummary {
        seeds,
        recommendations,
        candidates: result.candidate_count(),
        explain,
    }
}

#[instrument(name = "cli.open_reader", err, fields(path = field::Empty))]
pub(super) fn open_reader(path: &Path) -> Result<BufReader<File>, CliError> {
    Span::current().record("path", field::display(path.display()));
    let file = File::open(path).map_err(|source| CliError::Io {
        path: path.to_path_buf(),
        source,
    })?;
    Ok(BufReader::new(file))
}

pub(super) fn derive_source_name(path: &Path, fallback: &str) -> String {
    path.file_stem()
        .and_then(|value| value.to_str())
        .map(ToOwned::to_owned)
        .unwrap_or_else(|| fallback.to_owned())
}

/// Renders `summary` to `writer` in a human-readable text format.
///
/// The seed titles are echoed first when any were resolved.
///
/// # Errors
/// Returns [`io::Error`] if writing to the supplied writer fails.
///
/// # Examples
/// ```
/// # use std::error::Error;
/// # use std::io::Cursor;
/// # use coreco_cli::cli::{RecommendationSummary, render_summary};
/// #
/// # fn main() -> Result<(), Box<dyn Error>> {
/// let summary = RecommendationSummary {
///     seeds: Vec::new(),
///     recommendations: Vec::new(),
///     candidates: 0,
///     explain: false,
/// };
/// let mut buffer = Cursor::new(Vec::new());
/// render_summary(&summary, &mut buffer)?;
/// let text = String::from_utf8(buffer.into_inner())?;
/// assert_eq!(text, "No recommendations found.\n");
/// # Ok(())
/// # }
/// ```
pub fn render_summary(summary: &RecommendationSummary, mut writer: impl Write) -> io::Result<()> {
    if !summary.seeds.is_empty() {
        let titles: Vec<&str> = summary.seeds.iter().map(Book::title).collect();
        writeln!(writer, "Because you liked {}:", titles.join(", "))?;
    }
    if summary.recommendations.is_empty() {
        return writeln!(writer, "No recommendations found.");
    }
    writeln!(writer, "Recommended books are:")?;
    for ranked in &summary.recommendations {
        write!(
            writer,
            "Book #{}: {} by {}",
            ranked.rank,
            ranked.book.title(),
            ranked.book.authors()
        )?;
        if summary.explain {
            write!(writer, " ({} readers also liked this)", ranked.score)?;
        }
        writeln!(writer)?;
    }
    Ok(())
}
