//! `input` — turn raw text into the line lists the grid and finder accept.
//!
//! Grid files hold one grid row per line and word files one word per line.
//! Parsing works on in-memory strings; the `load_*` helpers read a file first.
//!
//! - Line terminators (`\n` or `\r\n`) are stripped.
//! - Blank lines are kept: blank grid rows still count towards the row limit,
//!   and the finder skips blank words itself.
//! - Words are trimmed of surrounding whitespace; grid rows are left as-is so
//!   row lengths are reported exactly.

use std::path::Path;

/// Split grid text into rows.
#[must_use]
pub fn parse_lines(contents: &str) -> Vec<String> {
    contents.lines().map(str::to_string).collect()
}

/// Split word-list text into trimmed words.
#[must_use]
pub fn parse_words(contents: &str) -> Vec<String> {
    contents.lines().map(|line| line.trim().to_string()).collect()
}

/// Read a grid file and split it into rows.
///
/// # Errors
///
/// Will return an `Error` if unable to read a file at `path`.
pub fn load_lines_from_path<P: AsRef<Path>>(path: P) -> std::io::Result<Vec<String>> {
    read_file(path.as_ref(), "grid").map(|data| parse_lines(&data))
}

/// Read a word-list file and split it into words.
///
/// # Errors
///
/// Will return an `Error` if unable to read a file at `path`.
pub fn load_words_from_path<P: AsRef<Path>>(path: P) -> std::io::Result<Vec<String>> {
    read_file(path.as_ref(), "word list").map(|data| parse_words(&data))
}

fn read_file(path: &Path, what: &str) -> std::io::Result<String> {
    std::fs::read_to_string(path).map_err(|e| {
        std::io::Error::new(
            e.kind(),
            format!("failed to read {what} from '{}': {e}", path.display()),
        )
    })
}
