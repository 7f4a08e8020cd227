//! Finds the land cells from which water can reach both seas of an isthmus.
//!
//! Each sea side gets its own [`DisjointSet`] of `width * height + 1`
//! elements. The extra element, at index `width * height`, is that side's
//! **sea sentinel**: a land cell drains to the sea exactly when it is in the
//! sentinel's class.
//!
//! Per side the traversal has two phases, both driven by an explicit stack:
//!
//! 1. *Sea expansion* walks 4-connected sea cells outward from the side's seed
//!    corner, marking each in a fresh visited grid.
//! 2. Every land neighbour met on the way starts a *land expansion*: the cell
//!    is unioned with the sentinel and the walk continues into neighbours at
//!    the same or greater elevation that are not yet in the sentinel's class.
//!    Class membership doubles as the land visited marker, so each land cell
//!    is expanded at most once per side.
//!
//! After both sides finish, a scan over all land cells keeps those connected
//! to both sentinels.

use std::collections::BTreeSet;

use crate::grid::{Coord, ElevationGrid, GridError, SEA_LEVEL};
use crate::peaks::PeakSet;
use crate::union_find::{DisjointSet, DisjointSetError};

// ---------------------------------------------------------------------------
// Sides and configuration
// ---------------------------------------------------------------------------

/// One of the two seas bounding the isthmus, identified by its seed corner.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, serde::Serialize)]
#[serde(rename_all = "snake_case")]
pub enum SeaSide {
    /// The sea containing `(0, 0)`.
    Near,
    /// The sea containing `(width - 1, height - 1)`.
    Far,
}

impl SeaSide {
    /// Both sides, in solving order.
    pub const ALL: [SeaSide; 2] = [SeaSide::Near, SeaSide::Far];

    /// The seed corner of this side on `grid`.
    pub fn seed(self, grid: &ElevationGrid) -> Coord {
        match self {
            SeaSide::Near => Coord::new(0, 0),
            SeaSide::Far => Coord::new(grid.width() - 1, grid.height() - 1),
        }
    }
}

impl std::fmt::Display for SeaSide {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            SeaSide::Near => f.write_str("near"),
            SeaSide::Far => f.write_str("far"),
        }
    }
}

/// Options controlling a solve.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct SolverConfig {
    /// Reject grids whose seed corners are land.
    ///
    /// When `false` (the default) a land seed is treated as a one-cell sea:
    /// it is marked visited and its neighbours are expanded as if it were
    /// water.
    pub require_sea_seeds: bool,
    /// Flood the two sides on separate threads.
    ///
    /// Ignored when the `parallel` feature is disabled.
    pub parallel: bool,
}

impl SolverConfig {
    /// Sets [`SolverConfig::require_sea_seeds`].
    pub fn with_require_sea_seeds(mut self, require: bool) -> Self {
        self.require_sea_seeds = require;
        self
    }

    /// Sets [`SolverConfig::parallel`].
    pub fn with_parallel(mut self, parallel: bool) -> Self {
        self.parallel = parallel;
        self
    }
}

// ---------------------------------------------------------------------------
// Errors
// ---------------------------------------------------------------------------

/// Errors that can occur while constructing an [`IsthmusSolver`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SolveError {
    /// The input is empty or not rectangular. No traversal was attempted.
    InvalidGrid(GridError),
    /// A seed corner is land and [`SolverConfig::require_sea_seeds`] is set.
    SeedNotSea {
        /// The side whose seed is land.
        side: SeaSide,
        /// The seed coordinate.
        coord: Coord,
        /// The seed's elevation.
        elevation: u32,
    },
    /// A disjoint-set index fell out of range during traversal.
    ///
    /// Indicates a defect in the solver, never a property of the input.
    Internal(DisjointSetError),
}

impl std::fmt::Display for SolveError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            SolveError::InvalidGrid(e) => write!(f, "invalid grid: {e}"),
            SolveError::SeedNotSea {
                side,
                coord,
                elevation,
            } => write!(
                f,
                "{side} sea seed {coord} is land at elevation {elevation}"
            ),
            SolveError::Internal(e) => write!(f, "internal solver error: {e}"),
        }
    }
}

impl std::error::Error for SolveError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            SolveError::InvalidGrid(e) => Some(e),
            SolveError::Internal(e) => Some(e),
            SolveError::SeedNotSea { .. } => None,
        }
    }
}

impl From<GridError> for SolveError {
    fn from(e: GridError) -> Self {
        SolveError::InvalidGrid(e)
    }
}

impl From<DisjointSetError> for SolveError {
    fn from(e: DisjointSetError) -> Self {
        SolveError::Internal(e)
    }
}

// ---------------------------------------------------------------------------
// Results
// ---------------------------------------------------------------------------

/// Which seas a cell drains to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, serde::Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Drainage {
    /// The cell is sea.
    Sea,
    /// Land draining to neither sea.
    Isolated,
    /// Land draining to the near sea only.
    Near,
    /// Land draining to the far sea only.
    Far,
    /// Land draining to both seas: a peak.
    Both,
}

impl Drainage {
    fn of_land(near: bool, far: bool) -> Self {
        match (near, far) {
            (true, true) => Drainage::Both,
            (true, false) => Drainage::Near,
            (false, true) => Drainage::Far,
            (false, false) => Drainage::Isolated,
        }
    }

    /// Single-character glyph used by [`DrainageMap`].
    pub fn glyph(self) -> char {
        match self {
            Drainage::Sea => '~',
            Drainage::Isolated => '.',
            Drainage::Near => 'n',
            Drainage::Far => 'f',
            Drainage::Both => '*',
        }
    }
}

/// Traversal statistics for one side.
#[derive(Debug, Clone, Copy, PartialEq, Eq, serde::Serialize)]
pub struct SideReport {
    /// The side these numbers describe.
    pub side: SeaSide,
    /// Where the sea expansion started.
    pub seed: Coord,
    /// Sea cells reached, counting the seed.
    pub sea_cells_visited: usize,
    /// Land cells joined to this side's sentinel.
    pub land_cells_drained: usize,
    /// Classes left in this side's disjoint set after flooding.
    pub classes: usize,
}

/// Summary of a completed solve.
#[derive(Debug, Clone, Copy, PartialEq, Eq, serde::Serialize)]
pub struct SolveReport {
    /// Grid extent along `x`.
    pub width: usize,
    /// Grid extent along `y`.
    pub height: usize,
    /// Number of land cells in the grid.
    pub land_cells: usize,
    /// Near-side statistics.
    pub near: SideReport,
    /// Far-side statistics.
    pub far: SideReport,
    /// Number of peaks found.
    pub peaks: usize,
}

// ---------------------------------------------------------------------------
// Per-side flood fill
// ---------------------------------------------------------------------------

/// Traversal state owned by a single side.
struct SideFlood<'g> {
    grid: &'g ElevationGrid,
    land: DisjointSet,
    visited_sea: Vec<bool>,
    sentinel: usize,
    sea_cells_visited: usize,
}

/// A side's disjoint set after flooding, ready for membership queries.
struct DrainedSide {
    side: SeaSide,
    seed: Coord,
    land: DisjointSet,
    sentinel: usize,
    sea_cells_visited: usize,
}

impl DrainedSide {
    fn drains(&mut self, index: usize) -> Result<bool, DisjointSetError> {
        self.land.connected(index, self.sentinel)
    }

    fn report(&mut self) -> Result<SideReport, DisjointSetError> {
        Ok(SideReport {
            side: self.side,
            seed: self.seed,
            sea_cells_visited: self.sea_cells_visited,
            land_cells_drained: self.land.set_size(self.sentinel)? - 1,
            classes: self.land.count(),
        })
    }
}

impl<'g> SideFlood<'g> {
    fn new(grid: &'g ElevationGrid) -> Self {
        let sentinel = sentinel_index(grid);
        Self {
            grid,
            land: DisjointSet::new(sentinel + 1),
            visited_sea: vec![false; grid.len()],
            sentinel,
            sea_cells_visited: 0,
        }
    }

    /// Floods `side` of `grid` and returns its drained disjoint set.
    fn run(grid: &'g ElevationGrid, side: SeaSide) -> Result<DrainedSide, DisjointSetError> {
        let seed = side.seed(grid);
        let mut flood = Self::new(grid);
        flood.expand_sea(grid.index_of(seed))?;
        Ok(DrainedSide {
            side,
            seed,
            land: flood.land,
            sentinel: flood.sentinel,
            sea_cells_visited: flood.sea_cells_visited,
        })
    }

    /// Visits every sea cell 4-connected to `seed`, starting a land
    /// expansion at each land cell bordering them.
    ///
    /// `seed` itself is treated as sea whatever its elevation.
    fn expand_sea(&mut self, seed: usize) -> Result<(), DisjointSetError> {
        let grid = self.grid;
        self.mark_sea(seed);
        let mut stack = vec![seed];

        while let Some(cell) = stack.pop() {
            for next in grid.neighbours(cell) {
                if grid.at(next) == SEA_LEVEL {
                    if !self.visited_sea[next] {
                        self.mark_sea(next);
                        stack.push(next);
                    }
                } else {
                    self.expand_land(next)?;
                }
            }
        }
        Ok(())
    }

    /// Joins `start` and all land reachable from it by steps onto equal or
    /// higher ground to the sentinel.
    fn expand_land(&mut self, start: usize) -> Result<(), DisjointSetError> {
        let grid = self.grid;
        // Already drained means already expanded.
        if !self.land.union(start, self.sentinel)? {
            return Ok(());
        }
        let mut stack = vec![start];

        while let Some(cell) = stack.pop() {
            let elevation = grid.at(cell);
            for next in grid.neighbours(cell) {
                if grid.at(next) >= elevation && !self.land.connected(next, self.sentinel)? {
                    self.land.union(next, self.sentinel)?;
                    stack.push(next);
                }
            }
        }
        Ok(())
    }

    fn mark_sea(&mut self, cell: usize) {
        self.visited_sea[cell] = true;
        self.sea_cells_visited += 1;
    }
}

/// Index of the sea sentinel in each side's disjoint set: one past the last
/// grid cell.
pub fn sentinel_index(grid: &ElevationGrid) -> usize {
    grid.len()
}

fn flood_sides(
    grid: &ElevationGrid,
    config: SolverConfig,
) -> (
    Result<DrainedSide, DisjointSetError>,
    Result<DrainedSide, DisjointSetError>,
) {
    #[cfg(feature = "parallel")]
    if config.parallel {
        return rayon::join(
            || SideFlood::run(grid, SeaSide::Near),
            || SideFlood::run(grid, SeaSide::Far),
        );
    }
    #[cfg(not(feature = "parallel"))]
    let _ = config.parallel;

    (
        SideFlood::run(grid, SeaSide::Near),
        SideFlood::run(grid, SeaSide::Far),
    )
}

// ---------------------------------------------------------------------------
// IsthmusSolver
// ---------------------------------------------------------------------------

/// A solved isthmus.
///
/// All work happens in the constructors; afterwards the peaks, the per-cell
/// drainage and the traversal report are read-only.
#[derive(Debug, Clone)]
pub struct IsthmusSolver {
    width: usize,
    height: usize,
    peaks: PeakSet,
    drainage: Vec<Drainage>,
    report: SolveReport,
}

impl IsthmusSolver {
    /// Solves `grid` with the default (permissive, sequential) configuration.
    ///
    /// # Errors
    ///
    /// [`SolveError::Internal`] only if the solver itself is defective.
    pub fn new(grid: &ElevationGrid) -> Result<Self, SolveError> {
        Self::with_config(grid, SolverConfig::default())
    }

    /// Validates `rows` as a grid and solves it.
    ///
    /// # Errors
    ///
    /// [`SolveError::InvalidGrid`] if `rows` is empty or not rectangular,
    /// before any traversal starts.
    pub fn from_rows<R: AsRef<[u32]>>(rows: &[R]) -> Result<Self, SolveError> {
        let grid = ElevationGrid::from_rows(rows)?;
        Self::new(&grid)
    }

    /// Solves `grid` with an explicit configuration.
    ///
    /// # Errors
    ///
    /// - [`SolveError::SeedNotSea`] if `config.require_sea_seeds` is set and a
    ///   seed corner is land.
    /// - [`SolveError::Internal`] only if the solver itself is defective.
    pub fn with_config(grid: &ElevationGrid, config: SolverConfig) -> Result<Self, SolveError> {
        if config.require_sea_seeds {
            for side in SeaSide::ALL {
                let coord = side.seed(grid);
                let elevation = grid.at(grid.index_of(coord));
                if elevation != SEA_LEVEL {
                    return Err(SolveError::SeedNotSea {
                        side,
                        coord,
                        elevation,
                    });
                }
            }
        }

        let (near, far) = flood_sides(grid, config);
        let (mut near, mut far) = (near?, far?);

        let mut coords = BTreeSet::new();
        let mut drainage = Vec::with_capacity(grid.len());
        for index in 0..grid.len() {
            if grid.at(index) == SEA_LEVEL {
                drainage.push(Drainage::Sea);
                continue;
            }
            let cell = Drainage::of_land(near.drains(index)?, far.drains(index)?);
            if cell == Drainage::Both {
                coords.insert(grid.coord_of(index));
            }
            drainage.push(cell);
        }

        let report = SolveReport {
            width: grid.width(),
            height: grid.height(),
            land_cells: grid.land_count(),
            near: near.report()?,
            far: far.report()?,
            peaks: coords.len(),
        };

        Ok(Self {
            width: grid.width(),
            height: grid.height(),
            peaks: PeakSet::from_set(coords),
            drainage,
            report,
        })
    }

    /// Land cells draining to both seas.
    pub fn peaks(&self) -> &PeakSet {
        &self.peaks
    }

    /// Drainage class of the cell at `coord`, or `None` outside the grid.
    pub fn drainage(&self, coord: Coord) -> Option<Drainage> {
        if coord.x < self.width && coord.y < self.height {
            self.drainage.get(coord.x * self.height + coord.y).copied()
        } else {
            None
        }
    }

    /// Traversal statistics.
    pub fn report(&self) -> &SolveReport {
        &self.report
    }

    /// A printable view of the drainage of every cell, one input row per
    /// line.
    pub fn drainage_map(&self) -> DrainageMap<'_> {
        DrainageMap { solver: self }
    }
}

/// `Display` adapter returned by [`IsthmusSolver::drainage_map`].
///
/// Glyphs: `~` sea, `.` isolated land, `n` near only, `f` far only, `*` peak.
pub struct DrainageMap<'a> {
    solver: &'a IsthmusSolver,
}

impl std::fmt::Display for DrainageMap<'_> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        for (x, row) in self.solver.drainage.chunks(self.solver.height).enumerate() {
            if x > 0 {
                f.write_str("\n")?;
            }
            for cell in row {
                write!(f, "{}", cell.glyph())?;
            }
        }
        Ok(())
    }
}
