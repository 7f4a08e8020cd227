//! Implementation of `isthmus solve <file>`.
//!
//! Parses the grid, solves it, and writes the peaks to stdout.
//!
//! Flags:
//! - `--input-format <f>`: `auto` (default), `text`, or `json`.
//! - `--strict-seeds`: fail with exit code 1 if a seed corner is land.
//! - `--parallel`: flood the two seas on separate threads.
//! - `--map`: also print the drainage map.
//!
//! Output (human mode): one `(x, y)` per line, sorted; the map follows after
//! a blank line. A summary line goes to stderr unless `--quiet`.
//! Output (JSON mode): `{"peaks": [...], "count": N}` with optional `"map"`
//! and, under `--verbose`, `"report"`.
//!
//! Exit codes: 0 = success, 1 = strict seed violation, 2 = read/parse failure.
use std::time::Instant;

use isthmus_core::{GridFormat, IsthmusSolver, SolverConfig, parse_grid, parse_grid_as};

use crate::error::CliError;
use crate::format::{
    FormatterConfig, Timings, write_map_human, write_peaks_human, write_solve_json,
    write_summary, write_verbose,
};
use crate::{InputFormat, OutputFormat};

/// Arguments of the `solve` subcommand after input has been read.
#[derive(Debug, Clone, Copy)]
pub struct SolveArgs {
    /// How to interpret the input.
    pub input_format: InputFormat,
    /// Reject land seed corners.
    pub strict_seeds: bool,
    /// Flood both seas concurrently.
    pub parallel: bool,
    /// Print the drainage map.
    pub map: bool,
}

/// Runs the `solve` command on already-read `content`.
///
/// `source` labels the input in error messages (`"-"` for stdin).
///
/// # Errors
///
/// - [`CliError::InvalidGrid`] (exit 2) if `content` is not a valid grid.
/// - [`CliError::SeedNotSea`] (exit 1) under `--strict-seeds`.
/// - [`CliError::IoError`] (exit 2) if writing to stdout fails.
pub fn run(
    content: &str,
    source: &str,
    args: SolveArgs,
    format: OutputFormat,
    config: &FormatterConfig,
) -> Result<(), CliError> {
    let started = Instant::now();
    let grid = match args.input_format {
        InputFormat::Auto => parse_grid(content),
        InputFormat::Text => parse_grid_as(content, GridFormat::Text),
        InputFormat::Json => parse_grid_as(content, GridFormat::Json),
    }
    .map_err(|e| CliError::from_parse(source, &e))?;
    let parsed = Instant::now();

    let solver_config = SolverConfig::default()
        .with_require_sea_seeds(args.strict_seeds)
        .with_parallel(args.parallel);
    let solver = IsthmusSolver::with_config(&grid, solver_config)
        .map_err(|e| CliError::from_solve(source, &e))?;

    let timings = Timings {
        parse: parsed.duration_since(started),
        solve: parsed.elapsed(),
    };

    let stdout = std::io::stdout();
    let mut out = stdout.lock();
    match format {
        OutputFormat::Human => print_human(&mut out, &solver, args.map),
        OutputFormat::Json => write_solve_json(&mut out, &solver, args.map, config),
    }
    .map_err(|e| CliError::IoError {
        source: "stdout".to_owned(),
        detail: e.to_string(),
    })?;

    let stderr = std::io::stderr();
    let mut err = stderr.lock();
    if format == OutputFormat::Human {
        write_summary(&mut err, solver.report(), config).map_err(stderr_error)?;
    }
    write_verbose(&mut err, solver.report(), &timings, config).map_err(stderr_error)
}

fn stderr_error(e: std::io::Error) -> CliError {
    CliError::IoError {
        source: "stderr".to_owned(),
        detail: e.to_string(),
    }
}

fn print_human<W: std::io::Write>(
    out: &mut W,
    solver: &IsthmusSolver,
    map: bool,
) -> std::io::Result<()> {
    write_peaks_human(out, solver.peaks())?;
    if map {
        writeln!(out)?;
        write_map_human(out, solver)?;
    }
    Ok(())
}
