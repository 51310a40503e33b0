//! Strongly-typed cell identifier.

use std::fmt;

/// Identifies a cell within a grid.
///
/// `CellId(n)` is the n-th cell of the grid's flat, row-major cell store,
/// i.e. `n == row * width + col`.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct CellId(pub usize);

impl CellId {
    /// The raw index into the flat cell store.
    pub fn index(self) -> usize {
        self.0
    }
}

impl fmt::Display for CellId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{}", self.0)
    }
}

impl From<usize> for CellId {
    fn from(v: usize) -> Self {
        Self(v)
    }
}
