//! Isthmus grid generator.
//!
//! Every generated grid has sea down both long edges (`y = 0` and
//! `y = height - 1`) so both seed corners are sea, and a random interior of
//! land with scattered lakes.

use isthmus_core::{ElevationGrid, GridError, SEA_LEVEL};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

/// Configuration for the isthmus generator.
#[derive(Debug, Clone)]
pub struct GeneratorConfig {
    /// Seed for the random number generator (deterministic).
    pub seed: u64,
    /// Number of rows (extent along `x`).
    pub width: usize,
    /// Cells per row (extent along `y`).
    pub height: usize,
    /// Highest land elevation; land is drawn uniformly from `1..=max_elevation`.
    pub max_elevation: u32,
    /// Probability that an interior cell is a lake (0.0-1.0).
    pub lake_density: f64,
}

/// Predefined size tiers for benchmarking.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SizeTier {
    /// 32 x 32, ~1K cells
    Small,
    /// 256 x 256, ~65K cells
    Medium,
    /// 1024 x 1024, ~1M cells
    Large,
    /// 2048 x 2048, ~4M cells
    XLarge,
}

impl SizeTier {
    /// Every tier, smallest first.
    pub const ALL: [SizeTier; 4] = [
        SizeTier::Small,
        SizeTier::Medium,
        SizeTier::Large,
        SizeTier::XLarge,
    ];

    /// Short label used in benchmark ids.
    pub fn label(self) -> &'static str {
        match self {
            SizeTier::Small => "S",
            SizeTier::Medium => "M",
            SizeTier::Large => "L",
            SizeTier::XLarge => "XL",
        }
    }

    /// Returns the default `GeneratorConfig` for this size tier.
    pub fn config(self, seed: u64) -> GeneratorConfig {
        let (side, max_elevation) = match self {
            SizeTier::Small => (32, 9),
            SizeTier::Medium => (256, 50),
            SizeTier::Large => (1024, 200),
            SizeTier::XLarge => (2048, 1000),
        };
        GeneratorConfig {
            seed,
            width: side,
            height: side,
            max_elevation,
            lake_density: 0.1,
        }
    }
}

/// Generates the rows of an isthmus grid, one row per `x`.
///
/// Zero extents are raised to one; a `max_elevation` of zero is treated as
/// one.
pub fn generate_rows(config: &GeneratorConfig) -> Vec<Vec<u32>> {
    let mut rng = StdRng::seed_from_u64(config.seed);
    let width = config.width.max(1);
    let height = config.height.max(1);
    let max_elevation = config.max_elevation.max(1);
    let lake_density = config.lake_density.clamp(0.0, 1.0);

    (0..width)
        .map(|_| {
            (0..height)
                .map(|y| {
                    if y == 0 || y == height - 1 || rng.gen_bool(lake_density) {
                        SEA_LEVEL
                    } else {
                        rng.gen_range(1..=max_elevation)
                    }
                })
                .collect()
        })
        .collect()
}

/// Generates an isthmus grid.
///
/// # Errors
///
/// Never fails for configurations accepted by [`generate_rows`]; the
/// [`GridError`] is the grid constructor's.
pub fn generate_isthmus(config: &GeneratorConfig) -> Result<ElevationGrid, GridError> {
    ElevationGrid::from_rows(&generate_rows(config))
}

#[cfg(test)]
mod tests {
    #![allow(clippy::expect_used)]

    use super::*;

    #[test]
    fn same_seed_same_grid() {
        let config = SizeTier::Small.config(7);
        assert_eq!(generate_rows(&config), generate_rows(&config));
    }

    #[test]
    fn long_edges_are_sea() {
        let rows = generate_rows(&SizeTier::Small.config(42));
        assert_eq!(rows.len(), 32);
        for row in &rows {
            assert_eq!(row.len(), 32);
            assert_eq!(row[0], SEA_LEVEL);
            assert_eq!(row[31], SEA_LEVEL);
        }
    }

    #[test]
    fn elevations_stay_in_range() {
        let config = GeneratorConfig {
            seed: 3,
            width: 20,
            height: 20,
            max_elevation: 4,
            lake_density: 0.0,
        };
        let rows = generate_rows(&config);
        for row in &rows {
            assert!(row[1..19].iter().all(|&e| (1..=4).contains(&e)));
        }
    }

    #[test]
    fn degenerate_config_still_builds() {
        let config = GeneratorConfig {
            seed: 0,
            width: 0,
            height: 0,
            max_elevation: 0,
            lake_density: 2.0,
        };
        let grid = generate_isthmus(&config).expect("grid");
        assert_eq!((grid.width(), grid.height()), (1, 1));
    }
}
