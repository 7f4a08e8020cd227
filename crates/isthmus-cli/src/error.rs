/// CLI error types with associated exit codes.
///
/// [`CliError`] is the top-level error type for the `isthmus` binary. Every
/// variant maps to a stable exit code via [`CliError::exit_code`]:
///
/// - Exit code **2**: input failure. The grid could not be read or is not a
///   valid grid. Nothing was solved.
/// - Exit code **1**: the grid was read but solving it failed (strict seed
///   check, or an internal solver defect).
use std::fmt;
use std::path::PathBuf;

use isthmus_core::{ParseError, SolveError};

// ---------------------------------------------------------------------------
// CliError
// ---------------------------------------------------------------------------

/// All error conditions that the `isthmus` CLI can produce.
#[derive(Debug)]
pub enum CliError {
    // --- Exit code 2: input failures ---
    /// A file argument could not be found on the filesystem.
    FileNotFound {
        /// The path that was not found.
        path: PathBuf,
    },

    /// The process lacks permission to read a file.
    PermissionDenied {
        /// The path that could not be read.
        path: PathBuf,
    },

    /// The input exceeds the configured `--max-file-size` limit.
    FileTooLarge {
        /// `"-"` for stdin, or the filesystem path.
        source: String,
        /// The configured size limit in bytes.
        limit: u64,
        /// The actual size in bytes, if known (`None` for stdin).
        actual: Option<u64>,
    },

    /// The input bytes are not valid UTF-8.
    InvalidUtf8 {
        /// `"-"` for stdin, or the filesystem path.
        source: String,
        /// The byte offset of the first invalid byte sequence.
        byte_offset: usize,
    },

    /// An I/O error occurred while reading from stdin.
    StdinReadError {
        /// The underlying I/O error message.
        detail: String,
    },

    /// Any other I/O error, including failures writing to stdout.
    IoError {
        /// `"-"`, `"stdout"`, or the filesystem path.
        source: String,
        /// The underlying I/O error message.
        detail: String,
    },

    /// The input is not a parseable, rectangular, non-empty grid.
    InvalidGrid {
        /// `"-"` for stdin, or the filesystem path.
        source: String,
        /// The parser's description of the problem.
        detail: String,
    },

    // --- Exit code 1: solve failures ---
    /// `--strict-seeds` was given and a seed corner is land.
    SeedNotSea {
        /// Which seed, where, and how high.
        detail: String,
    },

    /// The solver reported an internal defect.
    SolverFailure {
        /// The solver's error message.
        detail: String,
    },
}

impl CliError {
    /// Returns the process exit code for this error.
    pub fn exit_code(&self) -> i32 {
        match self {
            Self::FileNotFound { .. }
            | Self::PermissionDenied { .. }
            | Self::FileTooLarge { .. }
            | Self::InvalidUtf8 { .. }
            | Self::StdinReadError { .. }
            | Self::IoError { .. }
            | Self::InvalidGrid { .. } => 2,

            Self::SeedNotSea { .. } | Self::SolverFailure { .. } => 1,
        }
    }

    /// Returns a human-readable error message suitable for printing to stderr.
    pub fn message(&self) -> String {
        match self {
            Self::FileNotFound { path } => {
                format!("error: file not found: {}", path.display())
            }
            Self::PermissionDenied { path } => {
                format!("error: permission denied: {}", path.display())
            }
            Self::FileTooLarge {
                source,
                limit,
                actual: Some(actual),
            } => {
                format!("error: file too large: {source} is {actual} bytes, limit is {limit} bytes")
            }
            Self::FileTooLarge {
                source,
                limit,
                actual: None,
            } => {
                format!("error: file too large: {source} exceeded limit of {limit} bytes")
            }
            Self::InvalidUtf8 {
                source,
                byte_offset,
            } => {
                format!(
                    "error: invalid UTF-8 in {source}: first invalid byte at offset {byte_offset}"
                )
            }
            Self::StdinReadError { detail } => {
                format!("error: failed to read stdin: {detail}")
            }
            Self::IoError { source, detail } => {
                format!("error: I/O error on {source}: {detail}")
            }
            Self::InvalidGrid { source, detail } => {
                format!("error: invalid grid in {source}: {detail}")
            }
            Self::SeedNotSea { detail } => format!("error: {detail}"),
            Self::SolverFailure { detail } => format!("error: {detail}"),
        }
    }

    /// Wraps a grid parse failure for `source`.
    pub fn from_parse(source: &str, e: &ParseError) -> Self {
        Self::InvalidGrid {
            source: source.to_owned(),
            detail: e.to_string(),
        }
    }

    /// Wraps a solver failure for `source`.
    pub fn from_solve(source: &str, e: &SolveError) -> Self {
        match e {
            SolveError::InvalidGrid(_) => Self::InvalidGrid {
                source: source.to_owned(),
                detail: e.to_string(),
            },
            SolveError::SeedNotSea { .. } => Self::SeedNotSea {
                detail: e.to_string(),
            },
            SolveError::Internal(_) => Self::SolverFailure {
                detail: e.to_string(),
            },
        }
    }
}

impl fmt::Display for CliError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.message())
    }
}

impl std::error::Error for CliError {}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------

#[cfg(test)]
mod tests {
    #![allow(clippy::expect_used)]

    use std::path::PathBuf;

    use isthmus_core::{Coord, DisjointSetError, GridError, SeaSide};

    use super::*;

    // ── exit_code ────────────────────────────────────────────────────────────

    #[test]
    fn input_failures_are_exit_2() {
        let errors = [
            CliError::FileNotFound {
                path: PathBuf::from("grid.txt"),
            },
            CliError::PermissionDenied {
                path: PathBuf::from("/root/grid.txt"),
            },
            CliError::FileTooLarge {
                source: "big.txt".to_owned(),
                limit: 1024,
                actual: Some(2048),
            },
            CliError::InvalidUtf8 {
                source: "bad.txt".to_owned(),
                byte_offset: 42,
            },
            CliError::StdinReadError {
                detail: "broken pipe".to_owned(),
            },
            CliError::IoError {
                source: "grid.txt".to_owned(),
                detail: "device full".to_owned(),
            },
            CliError::InvalidGrid {
                source: "-".to_owned(),
                detail: "grid has no rows".to_owned(),
            },
        ];
        for e in errors {
            assert_eq!(e.exit_code(), 2, "{e}");
        }
    }

    #[test]
    fn solve_failures_are_exit_1() {
        let seed = CliError::SeedNotSea {
            detail: "near sea seed (0, 0) is land".to_owned(),
        };
        let internal = CliError::SolverFailure {
            detail: "boom".to_owned(),
        };
        assert_eq!(seed.exit_code(), 1);
        assert_eq!(internal.exit_code(), 1);
    }

    // ── conversions ──────────────────────────────────────────────────────────

    #[test]
    fn parse_error_becomes_invalid_grid() {
        let e = CliError::from_parse("grid.txt", &ParseError::Grid(GridError::Empty));
        assert_eq!(e.exit_code(), 2);
        let msg = e.message();
        assert!(msg.contains("grid.txt"), "message: {msg}");
        assert!(msg.contains("no rows"), "message: {msg}");
    }

    #[test]
    fn solve_errors_map_by_kind() {
        let seed = CliError::from_solve(
            "-",
            &SolveError::SeedNotSea {
                side: SeaSide::Far,
                coord: Coord::new(2, 3),
                elevation: 9,
            },
        );
        assert_eq!(seed.exit_code(), 1);
        assert!(seed.message().contains("(2, 3)"), "{seed}");

        let internal = CliError::from_solve(
            "-",
            &SolveError::Internal(DisjointSetError::OutOfRange { index: 5, len: 5 }),
        );
        assert!(matches!(internal, CliError::SolverFailure { .. }));

        let grid = CliError::from_solve("-", &SolveError::InvalidGrid(GridError::EmptyRow));
        assert_eq!(grid.exit_code(), 2);
    }

    // ── message content ──────────────────────────────────────────────────────

    #[test]
    fn file_not_found_message_contains_path() {
        let e = CliError::FileNotFound {
            path: PathBuf::from("panama.txt"),
        };
        let msg = e.message();
        assert!(msg.contains("panama.txt"), "message: {msg}");
        assert!(msg.contains("not found"), "message: {msg}");
    }

    #[test]
    fn file_too_large_mentions_sizes() {
        let with_actual = CliError::FileTooLarge {
            source: "big.txt".to_owned(),
            limit: 1_000_000,
            actual: Some(2_000_000),
        }
        .message();
        assert!(with_actual.contains("2000000"), "message: {with_actual}");
        assert!(with_actual.contains("1000000"), "message: {with_actual}");

        let without = CliError::FileTooLarge {
            source: "-".to_owned(),
            limit: 512,
            actual: None,
        }
        .message();
        assert!(without.contains("512"), "message: {without}");
    }

    #[test]
    fn display_matches_message() {
        let e = CliError::InvalidUtf8 {
            source: "x.txt".to_owned(),
            byte_offset: 99,
        };
        assert_eq!(format!("{e}"), e.message());
    }
}
