use clap::builder::TypedValueParser;
use clap::{Parser, ValueEnum};
use std::process::ExitCode;
use std::time::Instant;

use findword::errors::FinderError;
use findword::finder::{FinderConfig, QueryResult, Ranking, WordFinder, DEFAULT_MAX_RESULTS};
use findword::input;

/// Find words hidden horizontally and vertically in a letter grid
#[derive(Parser, Debug)]
#[command(author, version = concat!(env!("CARGO_PKG_VERSION"), " (", env!("GIT_HASH"), ")"), about, long_about = None)]
struct Cli {
    /// Path to the grid file (one row of letters per line, at most 64x64)
    #[arg(default_value = concat!(env!("CARGO_MANIFEST_DIR"), "/data/matrix.txt"))]
    matrix: String,

    /// Path to the word list file (one word per line)
    #[arg(
        short,
        long,
        default_value = concat!(env!("CARGO_MANIFEST_DIR"), "/data/wordstream.txt")
    )]
    words: String,

    /// Maximum number of words to report
    #[arg(short = 'n', long, default_value_t = DEFAULT_MAX_RESULTS, value_parser = clap::value_parser!(u16).range(1..).map(usize::from))]
    max_results: usize,

    /// How to order the words found
    #[arg(short, long, value_enum, default_value_t = RankingArg::Frequency)]
    ranking: RankingArg,

    /// Print each word's occurrence count
    #[arg(short, long)]
    counts: bool,
}

#[derive(Copy, Clone, Debug, PartialEq, Eq, ValueEnum)]
enum RankingArg {
    /// Most occurrences first
    Frequency,
    /// Word-list order, first matches only
    FirstMatched,
}

impl From<RankingArg> for Ranking {
    fn from(arg: RankingArg) -> Self {
        match arg {
            RankingArg::Frequency => Ranking::Frequency,
            RankingArg::FirstMatched => Ranking::FirstMatched,
        }
    }
}

/// Failures of the CLI, grouped by which input caused them.
#[derive(Debug, thiserror::Error)]
enum CliError {
    #[error("Grid file load error: {0}")]
    GridLoad(#[source] std::io::Error),

    #[error("Word list file load error: {0}")]
    WordsLoad(#[source] std::io::Error),

    #[error(transparent)]
    Finder(#[from] FinderError),
}

impl CliError {
    /// 1 for grid problems, 2 for word-list problems.
    fn exit_code(&self) -> u8 {
        match self {
            CliError::GridLoad(_) | CliError::Finder(FinderError::Grid(_)) => 1,
            CliError::WordsLoad(_) | CliError::Finder(FinderError::EmptyWordList) => 2,
        }
    }

    fn display_detailed(&self) -> String {
        match self {
            CliError::Finder(e) => e.display_detailed(),
            _ => self.to_string(),
        }
    }
}

/// Entry point of the findword CLI.
///
/// Delegates to [`try_main`], printing any error to stderr and exiting with
/// the code for the input that failed.
fn main() -> ExitCode {
    // Set up logging
    let debug_enabled = std::env::var("FINDWORD_DEBUG").is_ok();
    findword::log::init_logger(debug_enabled);

    log::info!("Welcome to findword");

    match try_main() {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("Error: {}", e.display_detailed());
            ExitCode::from(e.exit_code())
        }
    }
}

/// Core application logic.
///
/// Steps:
/// 1. Parse CLI arguments with Clap.
/// 2. Load the grid and word list from disk.
/// 3. Build the finder and search.
/// 4. Print the words found on stdout and timings on stderr.
fn try_main() -> Result<(), CliError> {
    let cli = Cli::parse();

    let t_load = Instant::now();
    log::info!("Loading grid file {}", cli.matrix);
    let matrix = input::load_lines_from_path(&cli.matrix).map_err(CliError::GridLoad)?;
    log::info!("Loading word list file {}", cli.words);
    let words = input::load_words_from_path(&cli.words).map_err(CliError::WordsLoad)?;
    let load_secs = t_load.elapsed().as_secs_f64();

    let config = FinderConfig { max_results: cli.max_results, ranking: cli.ranking.into() };

    let t_find = Instant::now();
    let finder = WordFinder::with_config(&matrix, config)?;
    log::info!("Finding words");
    let found = finder.find_with_counts(&words)?;
    let find_secs = t_find.elapsed().as_secs_f64();

    if found.is_empty() {
        println!("No words found.");
    } else {
        println!("Found words: {}.", format_results(&found, cli.counts));
    }

    eprintln!(
        "Loaded a {}x{} grid and {} words in {:.3}s; searched in {:.3}s.",
        finder.grid().width(),
        finder.grid().height(),
        words.len(),
        load_secs,
        find_secs
    );

    Ok(())
}

/// Comma-join the words, optionally with their counts.
fn format_results(found: &[QueryResult], with_counts: bool) -> String {
    found
        .iter()
        .map(|r| {
            if with_counts {
                format!("{} ({})", r.word, r.count)
            } else {
                r.word.clone()
            }
        })
        .collect::<Vec<_>>()
        .join(", ")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_cli_definition() {
        use clap::CommandFactory;
        Cli::command().debug_assert();
    }

    #[test]
    fn test_parse_args() {
        let cli = Cli::try_parse_from(["findword", "grid.txt", "-w", "w.txt", "-n", "3", "-r", "first-matched", "-c"]).unwrap();
        assert_eq!(cli.matrix, "grid.txt");
        assert_eq!(cli.words, "w.txt");
        assert_eq!(cli.max_results, 3);
        assert_eq!(cli.ranking, RankingArg::FirstMatched);
        assert!(cli.counts);
    }

    #[test]
    fn test_zero_max_results_rejected() {
        assert!(Cli::try_parse_from(["findword", "-n", "0"]).is_err());
    }

    #[test]
    fn test_exit_codes() {
        let io = || std::io::Error::from(std::io::ErrorKind::NotFound);
        assert_eq!(CliError::GridLoad(io()).exit_code(), 1);
        assert_eq!(CliError::WordsLoad(io()).exit_code(), 2);
        assert_eq!(CliError::from(FinderError::EmptyWordList).exit_code(), 2);
    }

    #[test]
    fn test_format_results() {
        let found = vec![
            QueryResult { word: "LOOP".to_string(), count: 2 },
            QueryResult { word: "PEAR".to_string(), count: 1 },
        ];
        assert_eq!(format_results(&found, false), "LOOP, PEAR");
        assert_eq!(format_results(&found, true), "LOOP (2), PEAR (1)");
    }
}
