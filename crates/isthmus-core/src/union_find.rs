//! Weighted union-find (disjoint set) with iterative path halving.
//!
//! [`DisjointSet::find`] points every visited node at its grandparent while
//! walking to the root, so paths shrink on every lookup without recursion or a
//! second pass. [`DisjointSet::union`] hangs the smaller tree under the larger
//! one; on equal sizes the root of the **first** argument is attached under the
//! root of the second.
//!
//! The structure knows nothing about grids. The solver gives each sea side its
//! own instance and reserves one extra element as that side's sea sentinel.

/// Errors returned by [`DisjointSet`] operations.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DisjointSetError {
    /// An element index outside `[0, len)` was supplied.
    OutOfRange {
        /// The offending index.
        index: usize,
        /// Number of elements in the structure.
        len: usize,
    },
}

impl std::fmt::Display for DisjointSetError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            DisjointSetError::OutOfRange { index, len } => {
                write!(f, "element {index} is out of range for {len} elements")
            }
        }
    }
}

impl std::error::Error for DisjointSetError {}

/// A partition of `n` elements into disjoint equivalence classes.
///
/// Elements are `usize` ordinals in `[0, n)`. Classes only ever merge; there
/// is no split or delete operation.
#[derive(Debug, Clone)]
pub struct DisjointSet {
    parent: Vec<usize>,
    size: Vec<usize>,
    count: usize,
}

impl DisjointSet {
    /// Creates `n` singleton classes.
    pub fn new(n: usize) -> Self {
        Self {
            parent: (0..n).collect(),
            size: vec![1; n],
            count: n,
        }
    }

    /// Returns the root of the class containing `p`.
    ///
    /// Path halving: every node on the way up is re-pointed at its grandparent.
    ///
    /// # Errors
    ///
    /// [`DisjointSetError::OutOfRange`] if `p >= len()`.
    pub fn find(&mut self, mut p: usize) -> Result<usize, DisjointSetError> {
        self.validate(p)?;
        while self.parent[p] != p {
            self.parent[p] = self.parent[self.parent[p]];
            p = self.parent[p];
        }
        Ok(p)
    }

    /// Merges the classes containing `p` and `q`.
    ///
    /// Returns `true` if two distinct classes were merged and `false` if `p`
    /// and `q` were already connected (in which case nothing changes).
    ///
    /// # Errors
    ///
    /// [`DisjointSetError::OutOfRange`] if either index is out of range.
    pub fn union(&mut self, p: usize, q: usize) -> Result<bool, DisjointSetError> {
        let a = self.find(p)?;
        let b = self.find(q)?;

        if a == b {
            return Ok(false);
        }

        if self.size[b] >= self.size[a] {
            self.parent[a] = b;
            self.size[b] += self.size[a];
        } else {
            self.parent[b] = a;
            self.size[a] += self.size[b];
        }
        self.count -= 1;
        Ok(true)
    }

    /// Returns `true` if `p` and `q` belong to the same class.
    ///
    /// # Errors
    ///
    /// [`DisjointSetError::OutOfRange`] if either index is out of range.
    pub fn connected(&mut self, p: usize, q: usize) -> Result<bool, DisjointSetError> {
        Ok(self.find(p)? == self.find(q)?)
    }

    /// Returns the number of elements in the class containing `p`.
    ///
    /// # Errors
    ///
    /// [`DisjointSetError::OutOfRange`] if `p` is out of range.
    pub fn set_size(&mut self, p: usize) -> Result<usize, DisjointSetError> {
        let root = self.find(p)?;
        Ok(self.size[root])
    }

    /// Returns the current number of distinct classes.
    pub fn count(&self) -> usize {
        self.count
    }

    /// Returns the number of elements.
    pub fn len(&self) -> usize {
        self.parent.len()
    }

    /// Returns `true` if the structure has no elements.
    pub fn is_empty(&self) -> bool {
        self.parent.is_empty()
    }

    fn validate(&self, p: usize) -> Result<(), DisjointSetError> {
        if p < self.parent.len() {
            Ok(())
        } else {
            Err(DisjointSetError::OutOfRange {
                index: p,
                len: self.parent.len(),
            })
        }
    }
}
