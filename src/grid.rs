//! `grid` — the validated, upper-cased letter grid.
//!
//! A [`Grid`] stores one flat list of rows: the original rows (read left to
//! right) followed by the transposed rows (each original column read top to
//! bottom). Searching that list with a single substring scan covers both
//! horizontal and vertical words, so the finder never needs to know which
//! direction a row came from.
//!
//! ```
//! use findword::grid::Grid;
//!
//! let grid = Grid::new(&["ab", "cd"])?;
//! assert_eq!(grid.horizontal_rows(), ["AB", "CD"]);
//! assert_eq!(grid.vertical_rows(), ["AC", "BD"]);
//! # Ok::<(), findword::errors::GridError>(())
//! ```

use crate::errors::GridError;
use log::debug;

/// Maximum number of rows accepted in the input (blank rows included).
pub const MAX_ROWS: usize = 64;
/// Maximum number of characters in a single input row.
pub const MAX_ROW_LEN: usize = 64;

/// Upper-case a single character, keeping it as-is when its upper case is
/// more than one character (`'ß'` stays `'ß'`). One cell stays one character.
#[must_use]
pub fn upper_char(c: char) -> char {
    let mut upper = c.to_uppercase();
    match (upper.next(), upper.next()) {
        (Some(u), None) => u,
        _ => c,
    }
}

/// Upper-case `s` character by character with [`upper_char`].
#[must_use]
pub fn normalize(s: &str) -> String {
    s.chars().map(upper_char).collect()
}

/// Immutable search grid holding both reading directions.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Grid {
    /// Original rows first, then transposed rows; all upper-case.
    rows: Vec<String>,
    /// How many entries of `rows` are original rows.
    horizontal_count: usize,
    /// Length of the longest original row (the number of pivoted columns).
    width: usize,
}

impl Grid {
    /// Build a grid from raw lines.
    ///
    /// Empty lines are skipped but still count towards [`MAX_ROWS`]. Every
    /// non-empty line must have the same length; the columns are read
    /// strictly and a short row is reported rather than padded.
    ///
    /// # Errors
    ///
    /// - [`GridError::EmptyGrid`] if there are no lines, or only empty ones.
    /// - [`GridError::TooManyRows`] if there are more than [`MAX_ROWS`] lines.
    /// - [`GridError::RowTooLong`] for the first line longer than [`MAX_ROW_LEN`].
    /// - [`GridError::RaggedGrid`] for the first column that a row is too short to supply.
    pub fn new<S: AsRef<str>>(lines: &[S]) -> Result<Grid, GridError> {
        if lines.is_empty() {
            return Err(GridError::EmptyGrid);
        }
        if lines.len() > MAX_ROWS {
            return Err(GridError::TooManyRows { count: lines.len() });
        }

        debug!("Loading grid from {} line(s)", lines.len());

        let mut rows: Vec<String> = Vec::with_capacity(lines.len() * 2);
        // (input index, characters) of every non-empty line, kept for the pivot
        let mut retained: Vec<(usize, Vec<char>)> = Vec::with_capacity(lines.len());
        let mut width = 0;

        for (row, line) in lines.iter().enumerate() {
            let line = line.as_ref();
            let chars: Vec<char> = line.chars().collect();
            if chars.len() > MAX_ROW_LEN {
                return Err(GridError::RowTooLong { row, length: chars.len() });
            }
            if chars.is_empty() {
                continue;
            }

            width = width.max(chars.len());
            rows.push(chars.iter().map(|&c| upper_char(c)).collect());
            retained.push((row, chars));
        }

        if rows.is_empty() {
            return Err(GridError::EmptyGrid);
        }
        let horizontal_count = rows.len();

        debug!("Pivoting {width} column(s) for vertical search");
        for column in 0..width {
            let mut pivoted = String::with_capacity(retained.len());
            for (row, chars) in &retained {
                let c = chars
                    .get(column)
                    .ok_or(GridError::RaggedGrid { column, row: *row })?;
                pivoted.push(upper_char(*c));
            }

            if !pivoted.is_empty() {
                rows.push(pivoted);
            }
        }

        debug!(
            "Received a {width}x{} grid, stored {} searchable row(s)",
            horizontal_count,
            rows.len()
        );

        Ok(Grid { rows, horizontal_count, width })
    }

    /// Every searchable row: original rows, then transposed rows.
    #[must_use]
    pub fn rows(&self) -> &[String] {
        &self.rows
    }

    /// The non-empty original rows, upper-cased, in input order.
    #[must_use]
    pub fn horizontal_rows(&self) -> &[String] {
        &self.rows[..self.horizontal_count]
    }

    /// One row per original column, read top to bottom.
    #[must_use]
    pub fn vertical_rows(&self) -> &[String] {
        &self.rows[self.horizontal_count..]
    }

    /// Number of non-empty original rows.
    #[must_use]
    pub fn height(&self) -> usize {
        self.horizontal_count
    }

    /// Length of the longest original row.
    #[must_use]
    pub fn width(&self) -> usize {
        self.width
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_rows_then_columns() {
        let grid = Grid::new(&["abc", "def"]).unwrap();
        assert_eq!(grid.rows(), ["ABC", "DEF", "AD", "BE", "CF"]);
        assert_eq!(grid.height(), 2);
        assert_eq!(grid.width(), 3);
    }

    #[test]
    fn test_row_set_size_matches_both_directions() {
        let lines = ["ABCL", "EOIO", "LPSR", "ESAR"];
        let grid = Grid::new(&lines).unwrap();

        assert_eq!(grid.rows().len(), grid.horizontal_rows().len() + grid.vertical_rows().len());
        assert_eq!(grid.horizontal_rows().len(), 4);
        assert!(grid.vertical_rows().len() <= grid.width());
        assert_eq!(grid.vertical_rows(), ["AELE", "BOPS", "CISA", "LORR"]);
    }

    #[test]
    fn test_construction_is_deterministic() {
        let lines = vec!["Wxyz".to_string(), "abcd".to_string()];
        assert_eq!(Grid::new(&lines).unwrap(), Grid::new(&lines).unwrap());
    }

    #[test]
    fn test_upper_cases_everything() {
        let grid = Grid::new(&["aBc"]).unwrap();
        assert!(grid.rows().iter().all(|r| r.chars().all(|c| !c.is_lowercase())));
        assert_eq!(grid.vertical_rows(), ["A", "B", "C"]);
    }

    #[test]
    fn test_upper_casing_keeps_grid_rectangular() {
        let grid = Grid::new(&["straße", "abcdef"]).unwrap();
        assert_eq!(grid.horizontal_rows(), ["STRAßE", "ABCDEF"]);
        assert_eq!(grid.vertical_rows(), ["SA", "TB", "RC", "AD", "ßE", "EF"]);
        assert!(grid.rows().iter().all(|r| r.chars().count() <= grid.width()));
    }

    #[test]
    fn test_upper_char() {
        assert_eq!(upper_char('a'), 'A');
        assert_eq!(upper_char('é'), 'É');
        assert_eq!(upper_char('ß'), 'ß');
        assert_eq!(upper_char('7'), '7');
        assert_eq!(normalize("Straße"), "STRAßE");
    }

    #[test]
    fn test_empty_lines_are_skipped() {
        let grid = Grid::new(&["", "ab", "", "cd", ""]).unwrap();
        assert_eq!(grid.horizontal_rows(), ["AB", "CD"]);
        assert_eq!(grid.vertical_rows(), ["AC", "BD"]);
    }

    #[test]
    fn test_no_lines_is_rejected() {
        let lines: [&str; 0] = [];
        assert_eq!(Grid::new(&lines), Err(GridError::EmptyGrid));
    }

    #[test]
    fn test_only_blank_lines_is_rejected() {
        assert_eq!(Grid::new(&["", ""]), Err(GridError::EmptyGrid));
    }

    #[test]
    fn test_row_limit() {
        let ok = vec!["A"; MAX_ROWS];
        assert!(Grid::new(&ok).is_ok());

        let too_many = vec!["A"; MAX_ROWS + 1];
        assert_eq!(Grid::new(&too_many), Err(GridError::TooManyRows { count: 65 }));
    }

    #[test]
    fn test_blank_lines_count_towards_row_limit() {
        let mut lines = vec![""; MAX_ROWS];
        lines.push("A");
        assert_eq!(Grid::new(&lines), Err(GridError::TooManyRows { count: 65 }));
    }

    #[test]
    fn test_row_length_limit() {
        let longest = "A".repeat(MAX_ROW_LEN);
        assert!(Grid::new(&[longest.as_str()]).is_ok());

        let too_long = "A".repeat(MAX_ROW_LEN + 1);
        assert_eq!(
            Grid::new(&["ABC", "DEF", too_long.as_str()]),
            Err(GridError::RowTooLong { row: 2, length: 65 })
        );
    }

    #[test]
    fn test_row_length_counts_characters() {
        // 64 two-byte characters is still a 64-character row
        let row = "é".repeat(MAX_ROW_LEN);
        let grid = Grid::new(&[row.as_str()]).unwrap();
        assert_eq!(grid.width(), MAX_ROW_LEN);
    }

    #[test]
    fn test_ragged_grid_reports_column() {
        assert_eq!(
            Grid::new(&["ABCD", "EFGH", "IJ"]),
            Err(GridError::RaggedGrid { column: 2, row: 2 })
        );
    }

    #[test]
    fn test_short_first_row_is_ragged() {
        assert_eq!(
            Grid::new(&["AB", "CDE"]),
            Err(GridError::RaggedGrid { column: 2, row: 0 })
        );
    }
}
