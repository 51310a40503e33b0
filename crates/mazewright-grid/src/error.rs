//! Error types for grid construction and cell operations.

use mazewright_core::{CellId, GridCoord};
use std::fmt;

/// Errors arising from grid construction or cell-level operations.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum GridError {
    /// A `(row, col)` pair lies outside the grid.
    OutOfRangeCoordinate {
        /// The offending coordinate.
        coord: GridCoord,
        /// Grid width (columns).
        width: u32,
        /// Grid height (rows).
        height: u32,
    },
    /// A cell id does not name a cell of this grid.
    UnknownCell {
        /// The offending id.
        id: CellId,
        /// Number of cells in the grid.
        cell_count: usize,
    },
    /// The two cells do not share a wall.
    NotAdjacent {
        /// First cell.
        a: CellId,
        /// Second cell.
        b: CellId,
    },
    /// `demolish_random_wall` was called on a cell with no openable
    /// neighbour. Callers must check first; reaching this is a bug in
    /// the carving loop.
    NoOpenableWalls {
        /// The cell that had nothing left to carve.
        id: CellId,
    },
    /// Attempted to construct a grid with zero cells.
    EmptyGrid,
    /// `width * height` does not fit the cell index type.
    DimensionTooLarge {
        /// Requested width.
        width: u32,
        /// Requested height.
        height: u32,
    },
}

impl fmt::Display for GridError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::OutOfRangeCoordinate {
                coord,
                width,
                height,
            } => write!(
                f,
                "coordinate {coord} out of range for {width}x{height} grid"
            ),
            Self::UnknownCell { id, cell_count } => {
                write!(f, "cell {id} not in grid of {cell_count} cells")
            }
            Self::NotAdjacent { a, b } => write!(f, "cells {a} and {b} are not adjacent"),
            Self::NoOpenableWalls { id } => write!(f, "cell {id} has no openable walls"),
            Self::EmptyGrid => write!(f, "grid must have at least one cell"),
            Self::DimensionTooLarge { width, height } => {
                write!(f, "grid of {width}x{height} cells is too large")
            }
        }
    }
}

impl std::error::Error for GridError {}
