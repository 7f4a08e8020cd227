/// Output formatting for solve results: human-readable and JSON modes.
///
/// - **Human mode** (default): one `(x, y)` peak per line on stdout, optional
///   drainage map after a blank line, and a one-line summary on stderr.
/// - **JSON mode**: a single JSON object on stdout.
///
/// Both modes honour **quiet** (no stderr summary) and **verbose** (grid
/// size, per-sea statistics and timing on stderr).
use std::io::Write;
use std::time::Duration;

use isthmus_core::{IsthmusSolver, PeakSet, SideReport, SolveReport};
use serde::Serialize;

// ---------------------------------------------------------------------------
// FormatterConfig
// ---------------------------------------------------------------------------

/// Configuration for stderr diagnostics, derived from CLI flags.
#[derive(Debug, Clone, Copy)]
pub struct FormatterConfig {
    /// Suppress all non-error stderr output.
    pub quiet: bool,
    /// Emit statistics and timing to stderr.
    pub verbose: bool,
}

impl FormatterConfig {
    /// Constructs a [`FormatterConfig`] from the raw CLI flags.
    pub fn from_flags(quiet: bool, verbose: bool) -> Self {
        Self { quiet, verbose }
    }
}

/// Wall-clock timings of the solve pipeline stages.
#[derive(Debug, Clone, Copy, Default)]
pub struct Timings {
    /// Time spent parsing the grid.
    pub parse: Duration,
    /// Time spent solving.
    pub solve: Duration,
}

// ---------------------------------------------------------------------------
// Human mode
// ---------------------------------------------------------------------------

/// Writes one `(x, y)` per line.
///
/// # Errors
///
/// Returns an error only if writing to `writer` fails.
pub fn write_peaks_human<W: Write>(writer: &mut W, peaks: &PeakSet) -> std::io::Result<()> {
    for coord in peaks {
        writeln!(writer, "{coord}")?;
    }
    Ok(())
}

/// Writes the drainage map, one grid row per line.
///
/// # Errors
///
/// Returns an error only if writing to `writer` fails.
pub fn write_map_human<W: Write>(writer: &mut W, solver: &IsthmusSolver) -> std::io::Result<()> {
    writeln!(writer, "{}", solver.drainage_map())
}

/// Writes the stderr summary line, e.g. `2 peaks on a 7x9 grid`.
///
/// Suppressed in quiet mode.
///
/// # Errors
///
/// Returns an error only if writing to `writer` fails.
pub fn write_summary<W: Write>(
    writer: &mut W,
    report: &SolveReport,
    config: &FormatterConfig,
) -> std::io::Result<()> {
    if config.quiet {
        return Ok(());
    }
    let noun = if report.peaks == 1 { "peak" } else { "peaks" };
    writeln!(
        writer,
        "{} {noun} on a {}x{} grid",
        report.peaks, report.width, report.height
    )
}

/// Writes verbose statistics and timing. No-op unless `config.verbose`.
///
/// # Errors
///
/// Returns an error only if writing to `writer` fails.
pub fn write_verbose<W: Write>(
    writer: &mut W,
    report: &SolveReport,
    timings: &Timings,
    config: &FormatterConfig,
) -> std::io::Result<()> {
    if !config.verbose {
        return Ok(());
    }
    writeln!(
        writer,
        "grid: {}x{}, {} land cells (parsed in {})",
        report.width,
        report.height,
        report.land_cells,
        format_duration(timings.parse)
    )?;
    for side in [&report.near, &report.far] {
        write_side(writer, side)?;
    }
    writeln!(writer, "solved in {}", format_duration(timings.solve))
}

fn write_side<W: Write>(writer: &mut W, side: &SideReport) -> std::io::Result<()> {
    writeln!(
        writer,
        "{} sea from {}: {} sea cells, {} land cells drained, {} classes",
        side.side, side.seed, side.sea_cells_visited, side.land_cells_drained, side.classes
    )
}

fn format_duration(d: Duration) -> String {
    let micros = d.as_micros();
    if micros < 1_000 {
        format!("{micros}µs")
    } else {
        format!("{:.1}ms", d.as_secs_f64() * 1_000.0)
    }
}

// ---------------------------------------------------------------------------
// JSON mode
// ---------------------------------------------------------------------------

#[derive(Serialize)]
struct SolveOutput<'a> {
    peaks: &'a PeakSet,
    count: usize,
    #[serde(skip_serializing_if = "Option::is_none")]
    map: Option<Vec<String>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    report: Option<&'a SolveReport>,
}

/// Writes the solve result as one JSON object:
/// `{"peaks": [{"x":..,"y":..}], "count": N}`, plus `"map"` (array of row
/// strings) when `include_map` and `"report"` in verbose mode.
///
/// # Errors
///
/// Returns an error if serialization or writing fails.
pub fn write_solve_json<W: Write>(
    writer: &mut W,
    solver: &IsthmusSolver,
    include_map: bool,
    config: &FormatterConfig,
) -> std::io::Result<()> {
    let map = include_map.then(|| {
        solver
            .drainage_map()
            .to_string()
            .lines()
            .map(str::to_owned)
            .collect()
    });
    let output = SolveOutput {
        peaks: solver.peaks(),
        count: solver.peaks().len(),
        map,
        report: config.verbose.then(|| solver.report()),
    };
    serde_json::to_writer(&mut *writer, &output).map_err(std::io::Error::other)?;
    writeln!(writer)
}
