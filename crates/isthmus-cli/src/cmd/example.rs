//! Implementation of `isthmus example`.
//!
//! Writes the reference isthmus to stdout: seven rows of nine cells with sea
//! down both long edges, a lagoon-ringed interior, and two elevation-2 hubs
//! that are its only peaks. Human mode emits the text format (with a comment
//! header); JSON mode emits an array of arrays. Either output can be piped
//! straight back into `isthmus solve -`.
use isthmus_core::{ElevationGrid, to_text};

use crate::OutputFormat;
use crate::error::CliError;

/// The reference grid, one row per `x`.
pub const REFERENCE_GRID: [[u32; 9]; 7] = [
    [0, 1, 1, 1, 2, 1, 1, 1, 0],
    [0, 1, 0, 0, 0, 0, 0, 1, 0],
    [0, 1, 0, 1, 1, 1, 0, 1, 0],
    [0, 1, 0, 1, 0, 1, 0, 1, 0],
    [0, 1, 0, 1, 1, 1, 0, 1, 0],
    [0, 1, 0, 0, 0, 0, 0, 1, 0],
    [0, 1, 1, 1, 2, 1, 1, 1, 0],
];

/// Renders the reference grid in `format`.
///
/// # Errors
///
/// Returns [`CliError::SolverFailure`] only if the built-in grid is
/// malformed.
pub fn render(format: OutputFormat) -> Result<String, CliError> {
    let grid = ElevationGrid::from_rows(&REFERENCE_GRID).map_err(|e| CliError::SolverFailure {
        detail: e.to_string(),
    })?;
    match format {
        OutputFormat::Human => Ok(format!(
            "# peaks: (0, 4) and (6, 4)\n{}",
            to_text(&grid)
        )),
        OutputFormat::Json => {
            let mut json = serde_json::to_string(&REFERENCE_GRID).map_err(|e| {
                CliError::SolverFailure {
                    detail: e.to_string(),
                }
            })?;
            json.push('\n');
            Ok(json)
        }
    }
}

/// Runs the `example` command.
///
/// # Errors
///
/// Returns [`CliError::IoError`] if writing to stdout fails.
pub fn run(format: OutputFormat) -> Result<(), CliError> {
    use std::io::Write as _;

    let content = render(format)?;
    let stdout = std::io::stdout();
    let mut out = stdout.lock();
    out.write_all(content.as_bytes())
        .map_err(|e| CliError::IoError {
            source: "stdout".to_owned(),
            detail: e.to_string(),
        })
}
