//! Error types for grid construction and word searches, with error codes and helpful messages.
//!
//! # Error Codes
//!
//! Each variant has a unique code for documentation lookup:
//!
//! - G001: `EmptyGrid` (Grid has no usable rows)
//! - G002: `TooManyRows` (Grid has more than 64 rows)
//! - G003: `RowTooLong` (A grid row has more than 64 characters)
//! - G004: `RaggedGrid` (A row is too short for column transposition)
//! - F001: `Grid` (Grid construction failed (wraps [`GridError`]))
//! - F002: `EmptyWordList` (Word list has no usable entries)
//!
//! # Examples
//!
//! ```
//! use findword::errors::GridError;
//! use findword::grid::Grid;
//!
//! match Grid::new(&["ABC", "DE"]) {
//!     Err(e) => {
//!         assert_eq!(e.code(), "G004");
//!         assert!(matches!(e, GridError::RaggedGrid { column: 2, row: 1 }));
//!         println!("{}", e.display_detailed());
//!     }
//!     Ok(_) => unreachable!("ragged grids are rejected"),
//! }
//! ```

use crate::grid::{MAX_ROWS, MAX_ROW_LEN};

/// Failures raised while building a [`Grid`](crate::grid::Grid).
///
/// Row and column indices are zero-based; messages print them one-based.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum GridError {
    #[error("Grid has no usable rows")]
    EmptyGrid,

    #[error("Grid has {count} rows (maximum is {max})", max = MAX_ROWS)]
    TooManyRows { count: usize },

    #[error("Row {line} has {length} characters (maximum is {max})", line = .row + 1, max = MAX_ROW_LEN)]
    RowTooLong { row: usize, length: usize },

    #[error("Pivot error: row {line} has no character at column {col}", line = .row + 1, col = .column + 1)]
    RaggedGrid { column: usize, row: usize },
}

impl GridError {
    /// Returns the error code for this error variant
    #[must_use]
    pub fn code(&self) -> &'static str {
        match self {
            GridError::EmptyGrid => "G001",
            GridError::TooManyRows { .. } => "G002",
            GridError::RowTooLong { .. } => "G003",
            GridError::RaggedGrid { .. } => "G004",
        }
    }

    /// Returns a short description of this error type (for documentation)
    #[must_use]
    pub fn description(&self) -> &'static str {
        match self {
            GridError::EmptyGrid => "Grid has no usable rows",
            GridError::TooManyRows { .. } => "Grid has too many rows",
            GridError::RowTooLong { .. } => "A grid row is too long",
            GridError::RaggedGrid { .. } => "Grid rows have different lengths",
        }
    }

    /// Returns detailed explanation of this error type (for documentation)
    #[must_use]
    pub fn details(&self) -> &'static str {
        match self {
            GridError::EmptyGrid => "The grid input contained no rows, or only empty rows. There is nothing to search.",
            GridError::TooManyRows { .. } => "A grid may have at most 64 rows. Blank rows count towards the limit.",
            GridError::RowTooLong { .. } => "Each grid row may have at most 64 characters. The message names the first offending row.",
            GridError::RaggedGrid { .. } => "Vertical search reads the grid column by column, so every non-empty row must have the same length. Rows are never padded or truncated.",
        }
    }

    /// Returns a helpful suggestion for this error
    #[must_use]
    pub fn help(&self) -> Option<&'static str> {
        match self {
            GridError::EmptyGrid => Some("Provide at least one row of letters, e.g. 'ABCD'"),
            GridError::TooManyRows { .. } => Some("Split the puzzle into grids of at most 64 rows"),
            GridError::RowTooLong { .. } => Some("Shorten the row to 64 characters or fewer"),
            GridError::RaggedGrid { .. } => Some("Make every row the same length as the longest one"),
        }
    }

    /// Formats the error with code and optional help text
    #[must_use]
    pub fn display_detailed(&self) -> String {
        format_error_with_code_and_help(&self.to_string(), self.code(), self.help())
    }
}

/// Failures raised by [`WordFinder`](crate::finder::WordFinder).
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum FinderError {
    /// The grid handed to the finder was rejected.
    #[error("invalid grid: {0}")]
    Grid(#[from] GridError),

    /// The word list was empty or held only blank entries.
    #[error("Word list has no usable entries")]
    EmptyWordList,
}

impl FinderError {
    /// Returns the error code for this error variant
    #[must_use]
    pub fn code(&self) -> &'static str {
        match self {
            FinderError::Grid(_) => "F001",
            FinderError::EmptyWordList => "F002",
        }
    }

    /// Returns a short description of this error type (for documentation)
    #[must_use]
    pub fn description(&self) -> &'static str {
        match self {
            FinderError::Grid(_) => "Grid construction failed",
            FinderError::EmptyWordList => "Word list has no usable entries",
        }
    }

    /// Returns detailed explanation of this error type (for documentation)
    #[must_use]
    pub fn details(&self) -> &'static str {
        match self {
            FinderError::Grid(_) => "The grid could not be built. This wraps an underlying GridError (see Grid Errors section for specific error codes).",
            FinderError::EmptyWordList => "The word list was empty, or every entry was blank. An empty list is rejected rather than reported as 'no words found'.",
        }
    }

    /// Returns a helpful suggestion for this error
    #[must_use]
    pub fn help(&self) -> Option<&'static str> {
        match self {
            FinderError::EmptyWordList => Some("Provide at least one word to search for, one per line"),
            FinderError::Grid(_) => None, // GridError has its own help
        }
    }

    /// Formats the error with code and optional help text
    #[must_use]
    pub fn display_detailed(&self) -> String {
        match self {
            FinderError::Grid(ge) => {
                format!("{}\n  caused by: {}", self.code(), ge.display_detailed())
            }
            FinderError::EmptyWordList => {
                format_error_with_code_and_help(&self.to_string(), self.code(), self.help())
            }
        }
    }
}

/// Helper function to format error messages with code and optional help text
pub(crate) fn format_error_with_code_and_help(base_msg: &str, code: &str, help: Option<&str>) -> String {
    if let Some(help_text) = help {
        format!("{base_msg} ({code})\n{help_text}")
    } else {
        format!("{base_msg} ({code})")
    }
}
