//! The result set of a solve: coordinates of land draining to both seas.

use std::collections::BTreeSet;

use serde::Serialize;

use crate::grid::Coord;

/// An immutable set of peak coordinates.
///
/// Iteration is in ascending `(x, y)` order. `Display` writes one `(x, y)`
/// per line; serializing produces a JSON array of `{"x": .., "y": ..}`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct PeakSet {
    coords: BTreeSet<Coord>,
}

impl PeakSet {
    pub(crate) fn from_set(coords: BTreeSet<Coord>) -> Self {
        Self { coords }
    }

    /// Number of peaks.
    pub fn len(&self) -> usize {
        self.coords.len()
    }

    /// Returns `true` if no cell drains to both seas.
    pub fn is_empty(&self) -> bool {
        self.coords.is_empty()
    }

    /// Returns `true` if `coord` is a peak.
    pub fn contains(&self, coord: Coord) -> bool {
        self.coords.contains(&coord)
    }

    /// Peaks in ascending `(x, y)` order.
    pub fn iter(&self) -> impl Iterator<Item = Coord> + '_ {
        self.coords.iter().copied()
    }

    /// Borrows the underlying ordered set.
    pub fn as_set(&self) -> &BTreeSet<Coord> {
        &self.coords
    }
}

impl<'a> IntoIterator for &'a PeakSet {
    type Item = &'a Coord;
    type IntoIter = std::collections::btree_set::Iter<'a, Coord>;

    fn into_iter(self) -> Self::IntoIter {
        self.coords.iter()
    }
}

impl std::fmt::Display for PeakSet {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let mut first = true;
        for coord in &self.coords {
            if !first {
                f.write_str("\n")?;
            }
            write!(f, "{coord}")?;
            first = false;
        }
        Ok(())
    }
}
