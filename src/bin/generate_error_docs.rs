//! Generate error code documentation from the source of truth (error enums).
//!
//! This binary reads the codes, descriptions, details, and help text directly
//! from the `GridError` and `FinderError` implementations.
//!
//! Run with:
//! ```bash
//! cargo run --bin generate_error_docs > docs/ERROR_CODES.md
//! ```

use std::fmt::Write;

use findword::errors::{FinderError, GridError};

/// Append documentation for every error in `$errors` to `$out`.
/// Works for any error type with `code()`, `description()`, `details()`,
/// `help()`, and `display_detailed()` methods.
macro_rules! write_error_docs {
    ($out:expr, $errors:expr) => {
        for error in $errors {
            writeln!($out, "### {}: {}\n", error.code(), error.description())?;
            writeln!($out, "**Details:** {}\n", error.details())?;

            if let Some(help_text) = error.help() {
                writeln!($out, "**How to fix:**")?;
                writeln!($out, "```\n{help_text}\n```\n")?;
            }

            writeln!($out, "**Example error message:**")?;
            writeln!($out, "```\n{error}\n```\n")?;

            writeln!($out, "**Detailed format:**")?;
            writeln!($out, "```\n{}\n```\n", error.display_detailed())?;

            writeln!($out, "---\n")?;
        }
    };
}

/// One instance of each `GridError` variant
fn all_grid_error_variants() -> Vec<GridError> {
    vec![
        GridError::EmptyGrid,
        GridError::TooManyRows { count: 70 },
        GridError::RowTooLong { row: 2, length: 65 },
        GridError::RaggedGrid { column: 3, row: 1 },
    ]
}

/// One instance of each `FinderError` variant
fn all_finder_error_variants() -> Vec<FinderError> {
    vec![
        FinderError::Grid(GridError::RaggedGrid { column: 3, row: 1 }),
        FinderError::EmptyWordList,
    ]
}

fn generate_docs() -> Result<String, std::fmt::Error> {
    let mut out = String::new();

    writeln!(out, "# Error Code Reference\n")?;
    writeln!(out, "**This document is auto-generated from the source code. Do not edit manually.**\n")?;

    writeln!(out, "## Table of Contents\n")?;
    writeln!(out, "- [Finder Errors (F001–F002)](#finder-errors)")?;
    writeln!(out, "- [Grid Errors (G001–G004)](#grid-errors)\n")?;

    writeln!(out, "## Finder Errors\n")?;
    writeln!(out, "Top-level errors from the word finder. These wrap grid errors or reject the word list.\n")?;
    write_error_docs!(out, all_finder_error_variants());

    writeln!(out, "## Grid Errors\n")?;
    writeln!(out, "Errors raised while validating and transposing the letter grid.\n")?;
    write_error_docs!(out, all_grid_error_variants());

    writeln!(out, "## Error Display Formats\n")?;
    writeln!(out, "### Simple Format")?;
    writeln!(out, "```\nError: <message>\n```\n")?;
    writeln!(out, "### Detailed Format (via `display_detailed()`)")?;
    writeln!(out, "```\n<message> (<code>)\n<help text if available>\n```")?;

    Ok(out)
}

fn main() -> Result<(), std::fmt::Error> {
    print!("{}", generate_docs()?);
    Ok(())
}
