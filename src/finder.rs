//! The word finder: counts grid occurrences of each query word and ranks them.
//!
//! # Examples
//!
//! ```
//! use findword::finder::WordFinder;
//!
//! let finder = WordFinder::new(&["catx", "atxx", "txxx"])?;
//! // "CAT" reads across row 1 and down column 1
//! let found = finder.find(&["cat", "dog", "at"])?;
//! assert_eq!(found, ["AT", "CAT"]);
//! # Ok::<(), findword::errors::FinderError>(())
//! ```
//!
//! ## Counts and ranking modes
//!
//! ```
//! use findword::finder::{FinderConfig, Ranking, WordFinder};
//!
//! let config = FinderConfig { max_results: 1, ranking: Ranking::FirstMatched };
//! let finder = WordFinder::with_config(&["aaaa"], config)?;
//! let results = finder.find_with_counts(&["b", "aa", "a"])?;
//! assert_eq!(results.len(), 1);
//! assert_eq!(results[0].word, "AA");
//! assert_eq!(results[0].count, 3);
//! # Ok::<(), findword::errors::FinderError>(())
//! ```

use crate::errors::FinderError;
use crate::grid::{normalize, Grid};
use log::{debug, trace};
use std::collections::HashMap;

/// Number of words returned by default.
pub const DEFAULT_MAX_RESULTS: usize = 10;

/// How matched words are ordered and cut off.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Ranking {
    /// Highest total occurrence count first; ties keep first-matched order.
    #[default]
    Frequency,
    /// Distinct words in word-list order, stopping once the limit is reached.
    FirstMatched,
}

/// Library-level settings for a [`WordFinder`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FinderConfig {
    /// Upper bound on the number of words returned.
    pub max_results: usize,
    pub ranking: Ranking,
}

impl Default for FinderConfig {
    fn default() -> Self {
        Self { max_results: DEFAULT_MAX_RESULTS, ranking: Ranking::default() }
    }
}

/// A matched word and how many times it occurs across the grid.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct QueryResult {
    /// Upper-cased word
    pub word: String,
    /// Total occurrences over every row and column (always >= 1)
    pub count: usize,
}

/// Call-local accumulator, one entry per distinct matched word in first-matched order.
#[derive(Debug, Default)]
struct Tally {
    results: Vec<QueryResult>,
    index: HashMap<String, usize>,
}

impl Tally {
    fn contains(&self, word: &str) -> bool {
        self.index.contains_key(word)
    }

    fn len(&self) -> usize {
        self.results.len()
    }

    /// Add `count` to `word`, creating its entry on first match.
    fn add(&mut self, word: &str, count: usize) {
        if let Some(&i) = self.index.get(word) {
            self.results[i].count += count;
        } else {
            self.index.insert(word.to_string(), self.results.len());
            self.results.push(QueryResult { word: word.to_string(), count });
        }
    }

    /// Highest counts first, truncated to `limit`.
    fn into_ranked(self, limit: usize) -> Vec<QueryResult> {
        let mut results = self.results;
        // stable: equal counts stay in first-matched order
        results.sort_by(|a, b| b.count.cmp(&a.count));
        results.truncate(limit);
        results
    }
}

/// Searches a [`Grid`] for lists of words.
///
/// `find` only reads the grid, so one finder can serve any number of queries.
#[derive(Debug, Clone)]
pub struct WordFinder {
    grid: Grid,
    config: FinderConfig,
}

impl WordFinder {
    /// Build a finder with the default configuration.
    ///
    /// # Errors
    ///
    /// Returns [`FinderError::Grid`] if the grid lines are rejected (see [`Grid::new`]).
    pub fn new<S: AsRef<str>>(matrix: &[S]) -> Result<Self, FinderError> {
        Self::with_config(matrix, FinderConfig::default())
    }

    /// Build a finder with an explicit configuration.
    ///
    /// # Errors
    ///
    /// Returns [`FinderError::Grid`] if the grid lines are rejected.
    pub fn with_config<S: AsRef<str>>(matrix: &[S], config: FinderConfig) -> Result<Self, FinderError> {
        debug!("WordFinder started, loading grid");
        let grid = Grid::new(matrix)?;
        Ok(Self::from_grid(grid, config))
    }

    /// Wrap an already-built grid.
    #[must_use]
    pub fn from_grid(grid: Grid, config: FinderConfig) -> Self {
        Self { grid, config }
    }

    #[must_use]
    pub fn grid(&self) -> &Grid {
        &self.grid
    }

    /// The configuration this finder ranks with.
    #[must_use]
    pub fn config(&self) -> FinderConfig {
        self.config
    }

    /// Find the words of `words` that occur in the grid, ranked per the configuration.
    ///
    /// Returns an empty list when nothing matches.
    ///
    /// # Errors
    ///
    /// Returns [`FinderError::EmptyWordList`] if `words` is empty or every entry is blank.
    pub fn find<S: AsRef<str>>(&self, words: &[S]) -> Result<Vec<String>, FinderError> {
        Ok(self
            .find_with_counts(words)?
            .into_iter()
            .map(|r| r.word)
            .collect())
    }

    /// Like [`find`](Self::find), keeping each word's occurrence count.
    ///
    /// # Errors
    ///
    /// Returns [`FinderError::EmptyWordList`] if `words` is empty or every entry is blank.
    pub fn find_with_counts<S: AsRef<str>>(&self, words: &[S]) -> Result<Vec<QueryResult>, FinderError> {
        let queries = normalize_words(words)?;
        debug!("Starting find for {} word(s)", queries.len());

        let results = match self.config.ranking {
            Ranking::Frequency => self.rank_by_frequency(&queries),
            Ranking::FirstMatched => self.first_matched(&queries),
        };

        debug!("Received {} word(s), found {} word(s)", words.len(), results.len());
        Ok(results)
    }

    fn rank_by_frequency(&self, queries: &[String]) -> Vec<QueryResult> {
        let mut tally = Tally::default();
        // Duplicate queries are scanned again and add to the same entry.
        for word in queries {
            for row in self.grid.rows() {
                let count = count_occurrences(row, word);
                if count > 0 {
                    tally.add(word, count);
                }
            }
        }
        tally.into_ranked(self.config.max_results)
    }

    fn first_matched(&self, queries: &[String]) -> Vec<QueryResult> {
        let mut tally = Tally::default();
        for word in queries {
            if tally.len() >= self.config.max_results {
                break;
            }
            if tally.contains(word) {
                continue;
            }
            let count: usize = self.grid.rows().iter().map(|row| count_occurrences(row, word)).sum();
            if count > 0 {
                tally.add(word, count);
            }
        }
        tally.results
    }
}

/// Drop blank entries and upper-case the rest.
fn normalize_words<S: AsRef<str>>(words: &[S]) -> Result<Vec<String>, FinderError> {
    let normalized: Vec<String> = words
        .iter()
        .map(AsRef::as_ref)
        .filter(|w| !w.trim().is_empty())
        .map(normalize)
        .collect();

    if normalized.is_empty() {
        return Err(FinderError::EmptyWordList);
    }
    Ok(normalized)
}

/// Count occurrences of `word` in `line`, restarting one character past each match start.
///
/// Overlapping matches are therefore counted: `"AAAA"` holds `"AA"` three times.
/// An empty `word` never matches.
#[must_use]
pub fn count_occurrences(line: &str, word: &str) -> usize {
    if word.is_empty() {
        return 0;
    }

    let mut count = 0;
    let mut start = 0;
    while let Some(offset) = line[start..].find(word) {
        let at = start + offset;
        trace!("Found {word} at {at}");
        count += 1;
        start = at + line[at..].chars().next().map_or(1, char::len_utf8);
    }
    count
}
