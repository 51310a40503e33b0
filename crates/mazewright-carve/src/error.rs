//! Errors raised while carving.

use mazewright_grid::GridError;
use std::error::Error;
use std::fmt;

/// A carving run failed. The grid is in an unspecified, partially carved
/// state afterwards and must not be handed to readers.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum CarveError {
    /// A grid operation failed (including `NoOpenableWalls`).
    Grid(GridError),
    /// The depth-first stack emptied before every cell was visited.
    StackExhausted {
        /// Cells visited when the stack ran dry.
        visited: usize,
        /// Cells in the grid.
        total: usize,
    },
    /// The frontier emptied before every cell was closed.
    FrontierExhausted {
        /// Cells closed when the frontier ran dry.
        closed: usize,
        /// Cells in the grid.
        total: usize,
    },
}

impl fmt::Display for CarveError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Grid(e) => write!(f, "grid operation failed: {e}"),
            Self::StackExhausted { visited, total } => {
                write!(f, "carving stack exhausted after {visited} of {total} cells")
            }
            Self::FrontierExhausted { closed, total } => {
                write!(f, "frontier exhausted after {closed} of {total} cells")
            }
        }
    }
}

impl Error for CarveError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::Grid(e) => Some(e),
            _ => None,
        }
    }
}

impl From<GridError> for CarveError {
    fn from(e: GridError) -> Self {
        Self::Grid(e)
    }
}
