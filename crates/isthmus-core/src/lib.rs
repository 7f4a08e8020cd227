#![deny(clippy::print_stdout, clippy::print_stderr)]

pub mod grid;
pub mod parse;
pub mod peaks;
pub mod solver;
pub mod union_find;

pub use grid::{Coord, ElevationGrid, GridError, SEA_LEVEL};
pub use parse::{GridFormat, ParseError, parse_grid, parse_grid_as, to_text};
pub use peaks::PeakSet;
pub use solver::{
    Drainage, DrainageMap, IsthmusSolver, SeaSide, SideReport, SolveError, SolveReport,
    SolverConfig, sentinel_index,
};
pub use union_find::{DisjointSet, DisjointSetError};

/// Returns the current version of the isthmus-core library.
pub fn version() -> &'static str {
    env!("CARGO_PKG_VERSION")
}

#[cfg(test)]
mod tests {
    #![allow(clippy::expect_used)]

    use super::*;

    #[test]
    fn version_is_semver() {
        let v = version();
        let parts: Vec<&str> = v.split('.').collect();
        assert_eq!(parts.len(), 3, "version should have 3 parts: {v}");
        for part in parts {
            part.parse::<u32>().expect("each part should be a number");
        }
    }
}
