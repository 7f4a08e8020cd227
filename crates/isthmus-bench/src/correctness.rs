//! Brute-force reference solver and post-solve invariant checkers.
//!
//! The reference solver works on coordinates with hash sets and a queue and
//! shares no code with the disjoint-set solver in `isthmus-core`.

use std::collections::{BTreeSet, HashSet, VecDeque};

use isthmus_core::{Coord, Drainage, ElevationGrid, IsthmusSolver, SeaSide, SolveReport};

fn neighbours(grid: &ElevationGrid, c: Coord) -> impl Iterator<Item = Coord> {
    let (w, h) = (grid.width(), grid.height());
    let left = c.y.checked_sub(1).map(|y| Coord::new(c.x, y));
    let right = (c.y + 1 < h).then(|| Coord::new(c.x, c.y + 1));
    let up = c.x.checked_sub(1).map(|x| Coord::new(x, c.y));
    let down = (c.x + 1 < w).then(|| Coord::new(c.x + 1, c.y));
    [left, right, up, down].into_iter().flatten()
}

fn is_land(grid: &ElevationGrid, c: Coord) -> bool {
    grid.get(c).is_some_and(|e| e > 0)
}

/// Land cells that drain to `side`'s sea.
///
/// The seed counts as sea even when it is land. A land cell drains if it
/// borders the seed's sea region or can step onto equal or higher ground
/// from a cell that drains.
pub fn reference_drained(grid: &ElevationGrid, side: SeaSide) -> HashSet<Coord> {
    let seed = side.seed(grid);

    let mut sea = HashSet::from([seed]);
    let mut queue = VecDeque::from([seed]);
    let mut drained = HashSet::new();
    let mut uphill = VecDeque::new();

    while let Some(cell) = queue.pop_front() {
        for next in neighbours(grid, cell) {
            if is_land(grid, next) {
                if drained.insert(next) {
                    uphill.push_back(next);
                }
            } else if sea.insert(next) {
                queue.push_back(next);
            }
        }
    }

    while let Some(cell) = uphill.pop_front() {
        let elevation = grid.get(cell).unwrap_or(0);
        for next in neighbours(grid, cell) {
            if grid.get(next).is_some_and(|e| e >= elevation && e > 0) && drained.insert(next) {
                uphill.push_back(next);
            }
        }
    }
    drained
}

/// Land cells draining to both seas, computed by brute force.
pub fn reference_peaks(grid: &ElevationGrid) -> BTreeSet<Coord> {
    let near = reference_drained(grid, SeaSide::Near);
    let far = reference_drained(grid, SeaSide::Far);
    near.intersection(&far).copied().collect()
}

/// Verifies that the solver's peaks equal the brute-force peaks.
pub fn check_matches_reference(grid: &ElevationGrid, solver: &IsthmusSolver) -> Result<(), String> {
    let expected = reference_peaks(grid);
    let actual = solver.peaks().as_set();
    if *actual != expected {
        let missing: Vec<_> = expected.difference(actual).collect();
        let extra: Vec<_> = actual.difference(&expected).collect();
        return Err(format!(
            "peak mismatch: missing {missing:?}, unexpected {extra:?}"
        ));
    }
    Ok(())
}

/// Verifies peak invariants:
/// - every peak is land
/// - every peak is classified [`Drainage::Both`], and nothing else is
/// - the report's peak count agrees
pub fn check_peak_invariants(grid: &ElevationGrid, solver: &IsthmusSolver) -> Result<(), String> {
    for coord in solver.peaks() {
        if !is_land(grid, *coord) {
            return Err(format!("peak {coord} is not land"));
        }
    }

    let mut both = 0;
    for x in 0..grid.width() {
        for y in 0..grid.height() {
            let coord = Coord::new(x, y);
            let drainage = solver
                .drainage(coord)
                .ok_or_else(|| format!("no drainage for {coord}"))?;
            if drainage == Drainage::Both {
                both += 1;
                if !solver.peaks().contains(coord) {
                    return Err(format!("{coord} drains both ways but is not a peak"));
                }
            }
            if (drainage == Drainage::Sea) == is_land(grid, coord) {
                return Err(format!("{coord} classified {drainage:?} against its elevation"));
            }
        }
    }

    if both != solver.peaks().len() {
        return Err(format!(
            "{both} cells drain both ways but {} peaks reported",
            solver.peaks().len()
        ));
    }
    if solver.report().peaks != solver.peaks().len() {
        return Err("report peak count disagrees with peak set".to_owned());
    }
    Ok(())
}

/// Verifies traversal report invariants:
/// - `land_cells` matches the grid
/// - each side drained no more than the land there is
/// - each side's classes plus drained cells equal `len + 1`, since every
///   successful union joins one new cell to the sentinel's class
pub fn check_report_invariants(grid: &ElevationGrid, report: &SolveReport) -> Result<(), String> {
    if report.land_cells != grid.land_count() {
        return Err(format!(
            "land count mismatch: report={}, grid={}",
            report.land_cells,
            grid.land_count()
        ));
    }
    for side in [&report.near, &report.far] {
        if side.land_cells_drained > report.land_cells {
            return Err(format!(
                "{} side drained {} of {} land cells",
                side.side, side.land_cells_drained, report.land_cells
            ));
        }
        if side.sea_cells_visited == 0 {
            return Err(format!("{} side visited no sea", side.side));
        }
        if side.classes + side.land_cells_drained != grid.len() + 1 {
            return Err(format!(
                "{} side: {} classes + {} drained != {} elements",
                side.side,
                side.classes,
                side.land_cells_drained,
                grid.len() + 1
            ));
        }
    }
    Ok(())
}
