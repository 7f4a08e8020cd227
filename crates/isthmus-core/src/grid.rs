//! Rectangular elevation grid and the `(x, y)` coordinate type.
//!
//! The grid is built from a sequence of rows. Row `i` of the input holds every
//! cell with `x == i`, so `width` is the number of rows and `height` the
//! length of each row. Cells are stored flat at linear index
//! `x * height + y`, which is the same index the solver hands to its
//! disjoint sets.

use serde::{Deserialize, Serialize};

/// Elevation of a sea cell. Any other value is land at that elevation.
pub const SEA_LEVEL: u32 = 0;

/// Errors produced when a grid is not a non-empty rectangle.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum GridError {
    /// The input contains no rows.
    Empty,
    /// The first row contains no cells.
    EmptyRow,
    /// A row's length differs from the first row's.
    Ragged {
        /// Zero-based index of the offending row.
        row: usize,
        /// Length of the first row.
        expected: usize,
        /// Length of the offending row.
        found: usize,
    },
}

impl std::fmt::Display for GridError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            GridError::Empty => f.write_str("grid has no rows"),
            GridError::EmptyRow => f.write_str("grid rows have no cells"),
            GridError::Ragged {
                row,
                expected,
                found,
            } => write!(
                f,
                "grid is not rectangular: row {row} has {found} cells, expected {expected}"
            ),
        }
    }
}

impl std::error::Error for GridError {}

/// A zero-based grid position.
///
/// Ordered by `x`, then `y`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct Coord {
    /// Position along the first grid dimension (input row).
    pub x: usize,
    /// Position along the second grid dimension (input column).
    pub y: usize,
}

impl Coord {
    /// Creates a coordinate.
    pub const fn new(x: usize, y: usize) -> Self {
        Self { x, y }
    }
}

impl std::fmt::Display for Coord {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "({}, {})", self.x, self.y)
    }
}

impl From<(usize, usize)> for Coord {
    fn from((x, y): (usize, usize)) -> Self {
        Self { x, y }
    }
}

/// An immutable, non-empty, rectangular grid of elevations.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ElevationGrid {
    cells: Vec<u32>,
    width: usize,
    height: usize,
}

impl ElevationGrid {
    /// Builds a grid from rows, validating the shape.
    ///
    /// # Errors
    ///
    /// - [`GridError::Empty`] if `rows` is empty.
    /// - [`GridError::EmptyRow`] if the first row is empty.
    /// - [`GridError::Ragged`] if any row's length differs from the first.
    pub fn from_rows<R: AsRef<[u32]>>(rows: &[R]) -> Result<Self, GridError> {
        let first = rows.first().ok_or(GridError::Empty)?;
        let height = first.as_ref().len();
        if height == 0 {
            return Err(GridError::EmptyRow);
        }

        let mut cells = Vec::with_capacity(rows.len() * height);
        for (row, values) in rows.iter().enumerate() {
            let values = values.as_ref();
            if values.len() != height {
                return Err(GridError::Ragged {
                    row,
                    expected: height,
                    found: values.len(),
                });
            }
            cells.extend_from_slice(values);
        }

        Ok(Self {
            cells,
            width: rows.len(),
            height,
        })
    }

    /// Extent along `x` (number of input rows).
    pub fn width(&self) -> usize {
        self.width
    }

    /// Extent along `y` (length of each input row).
    pub fn height(&self) -> usize {
        self.height
    }

    /// Total number of cells, `width * height`.
    pub fn len(&self) -> usize {
        self.cells.len()
    }

    /// Always `false`: a constructed grid has at least one cell.
    pub fn is_empty(&self) -> bool {
        self.cells.is_empty()
    }

    /// Elevation at `coord`, or `None` if it lies outside the grid.
    pub fn get(&self, coord: Coord) -> Option<u32> {
        if coord.x < self.width && coord.y < self.height {
            Some(self.cells[self.index_of(coord)])
        } else {
            None
        }
    }

    /// Elevation at a linear index produced by [`ElevationGrid::index_of`].
    pub(crate) fn at(&self, index: usize) -> u32 {
        self.cells[index]
    }

    /// Linear index of an in-bounds coordinate: `x * height + y`.
    pub fn index_of(&self, coord: Coord) -> usize {
        coord.x * self.height + coord.y
    }

    /// Inverse of [`ElevationGrid::index_of`].
    pub fn coord_of(&self, index: usize) -> Coord {
        Coord {
            x: index / self.height,
            y: index % self.height,
        }
    }

    /// Returns `true` if the cell at `coord` is sea.
    pub fn is_sea(&self, coord: Coord) -> bool {
        self.get(coord) == Some(SEA_LEVEL)
    }

    /// Number of land cells.
    pub fn land_count(&self) -> usize {
        self.cells.iter().filter(|&&e| e != SEA_LEVEL).count()
    }

    /// Linear indices of the in-bounds 4-neighbours of `index`, in the order
    /// left (`x - 1`), right (`x + 1`), up (`y - 1`), down (`y + 1`).
    pub(crate) fn neighbours(&self, index: usize) -> impl Iterator<Item = usize> {
        let Coord { x, y } = self.coord_of(index);
        let h = self.height;
        [
            (x > 0).then(|| index - h),
            (x + 1 < self.width).then(|| index + h),
            (y > 0).then(|| index - 1),
            (y + 1 < h).then(|| index + 1),
        ]
        .into_iter()
        .flatten()
    }

    /// Rows in input order, for rendering.
    pub fn rows(&self) -> impl Iterator<Item = &[u32]> {
        self.cells.chunks_exact(self.height)
    }
}

impl TryFrom<Vec<Vec<u32>>> for ElevationGrid {
    type Error = GridError;

    fn try_from(rows: Vec<Vec<u32>>) -> Result<Self, Self::Error> {
        Self::from_rows(&rows)
    }
}
