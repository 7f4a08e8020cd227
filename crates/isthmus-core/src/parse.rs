//! Parsing elevation grids from text.
//!
//! Two input formats are accepted:
//!
//! - **Text**: one grid row per line, values separated by whitespace and/or
//!   commas. Blank lines and lines whose first non-blank character is `#` are
//!   skipped.
//! - **JSON**: an array of arrays of non-negative integers.
//!
//! [`parse_grid`] picks JSON when the first non-whitespace character is `[`.
//! This module never touches the filesystem; callers supply the content.

use crate::grid::{ElevationGrid, GridError};

/// Input format of a grid document.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GridFormat {
    /// Line-oriented numeric text.
    Text,
    /// JSON array of arrays.
    Json,
}

impl GridFormat {
    /// Guesses the format of `content` from its first non-whitespace byte.
    pub fn detect(content: &str) -> Self {
        match content.trim_start().as_bytes().first() {
            Some(b'[') => GridFormat::Json,
            Some(_) | None => GridFormat::Text,
        }
    }
}

/// Errors produced by [`parse_grid`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ParseError {
    /// A text token is not a non-negative integer that fits in `u32`.
    InvalidValue {
        /// 1-based line number.
        line: usize,
        /// 1-based character column of the token's first character.
        column: usize,
        /// The offending token.
        token: String,
    },
    /// The JSON document is malformed or not an array of arrays of `u32`.
    Json(String),
    /// The values parsed but do not form a non-empty rectangle.
    Grid(GridError),
}

impl std::fmt::Display for ParseError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ParseError::InvalidValue {
                line,
                column,
                token,
            } => write!(
                f,
                "line {line}, column {column}: {token:?} is not a non-negative elevation"
            ),
            ParseError::Json(detail) => write!(f, "JSON grid: {detail}"),
            ParseError::Grid(e) => write!(f, "{e}"),
        }
    }
}

impl std::error::Error for ParseError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            ParseError::Grid(e) => Some(e),
            ParseError::InvalidValue { .. } | ParseError::Json(_) => None,
        }
    }
}

impl From<GridError> for ParseError {
    fn from(e: GridError) -> Self {
        ParseError::Grid(e)
    }
}

/// Parses `content` in the format reported by [`GridFormat::detect`].
///
/// # Errors
///
/// See [`parse_grid_as`].
pub fn parse_grid(content: &str) -> Result<ElevationGrid, ParseError> {
    parse_grid_as(content, GridFormat::detect(content))
}

/// Parses `content` in an explicit format.
///
/// # Errors
///
/// - [`ParseError::InvalidValue`] for a bad text token.
/// - [`ParseError::Json`] for malformed JSON or values outside `u32`.
/// - [`ParseError::Grid`] for an empty or ragged grid.
pub fn parse_grid_as(content: &str, format: GridFormat) -> Result<ElevationGrid, ParseError> {
    let rows = match format {
        GridFormat::Text => parse_text_rows(content)?,
        GridFormat::Json => serde_json::from_str::<Vec<Vec<u32>>>(content)
            .map_err(|e| ParseError::Json(e.to_string()))?,
    };
    Ok(ElevationGrid::from_rows(&rows)?)
}

fn parse_text_rows(content: &str) -> Result<Vec<Vec<u32>>, ParseError> {
    let mut rows = Vec::new();
    for (line_idx, line) in content.lines().enumerate() {
        let trimmed = line.trim();
        if trimmed.is_empty() || trimmed.starts_with('#') {
            continue;
        }
        let mut row = Vec::new();
        for (offset, token) in tokens(line) {
            let value = token
                .parse::<u32>()
                .map_err(|_| ParseError::InvalidValue {
                    line: line_idx + 1,
                    column: line[..offset].chars().count() + 1,
                    token: token.to_owned(),
                })?;
            row.push(value);
        }
        rows.push(row);
    }
    Ok(rows)
}

/// Splits a line on whitespace and commas, yielding each token with its byte
/// offset.
fn tokens(line: &str) -> Vec<(usize, &str)> {
    let mut out = Vec::new();
    let mut start = None;
    for (i, c) in line.char_indices() {
        let separator = c.is_whitespace() || c == ',';
        match (separator, start) {
            (false, None) => start = Some(i),
            (true, Some(s)) => {
                out.push((s, &line[s..i]));
                start = None;
            }
            (false, Some(_)) | (true, None) => {}
        }
    }
    if let Some(s) = start {
        out.push((s, &line[s..]));
    }
    out
}

/// Renders `grid` in the text format, one row per line.
pub fn to_text(grid: &ElevationGrid) -> String {
    let mut out = String::new();
    for row in grid.rows() {
        let line: Vec<String> = row.iter().map(u32::to_string).collect();
        out.push_str(&line.join(" "));
        out.push('\n');
    }
    out
}

#[cfg(test)]
mod tests {
    #![allow(clippy::expect_used)]

    use super::*;
    use crate::grid::Coord;

    #[test]
    fn detects_format() {
        assert_eq!(GridFormat::detect("  \n[[0]]"), GridFormat::Json);
        assert_eq!(GridFormat::detect("0 1 0"), GridFormat::Text);
        assert_eq!(GridFormat::detect(""), GridFormat::Text);
    }

    #[test]
    fn text_with_mixed_separators_and_comments() {
        let content = "# reference\n0, 1, 0\n\n0 1\t0\n";
        let grid = parse_grid(content).expect("parses");
        assert_eq!(grid.width(), 2);
        assert_eq!(grid.height(), 3);
        assert_eq!(grid.get(Coord::new(1, 1)), Some(1));
    }

    #[test]
    fn json_array_of_arrays() {
        let grid = parse_grid("[[0, 2], [3, 0]]").expect("parses");
        assert_eq!(grid.get(Coord::new(1, 0)), Some(3));
    }

    #[test]
    fn negative_value_reports_position() {
        let err = parse_grid("0 1 0\n0 -1 0\n").expect_err("negative");
        assert_eq!(
            err,
            ParseError::InvalidValue {
                line: 2,
                column: 3,
                token: "-1".to_owned(),
            }
        );
    }

    #[test]
    fn non_numeric_token_is_rejected() {
        let err = parse_grid("0 x 0").expect_err("not a number");
        assert!(matches!(err, ParseError::InvalidValue { column: 3, .. }));
    }

    #[test]
    fn overflowing_value_is_rejected() {
        assert!(parse_grid("0 4294967296 0").is_err());
        assert!(parse_grid("[[0, -3]]").is_err());
    }

    #[test]
    fn ragged_text_is_a_grid_error() {
        let err = parse_grid("0 1 0\n0 1\n").expect_err("ragged");
        assert_eq!(
            err,
            ParseError::Grid(GridError::Ragged {
                row: 1,
                expected: 3,
                found: 2
            })
        );
    }

    #[test]
    fn empty_documents_are_grid_errors() {
        assert_eq!(
            parse_grid("# nothing here\n\n"),
            Err(ParseError::Grid(GridError::Empty))
        );
        assert_eq!(parse_grid("[]"), Err(ParseError::Grid(GridError::Empty)));
        assert_eq!(
            parse_grid("[[]]"),
            Err(ParseError::Grid(GridError::EmptyRow))
        );
    }

    #[test]
    fn malformed_json_is_reported() {
        assert!(matches!(parse_grid("[[0, 1"), Err(ParseError::Json(_))));
    }

    #[test]
    fn text_round_trip_preserves_grid() {
        let grid = parse_grid("0 1 2\n3 0 4\n").expect("parses");
        let again = parse_grid(&to_text(&grid)).expect("parses");
        assert_eq!(grid, again);
    }
}
