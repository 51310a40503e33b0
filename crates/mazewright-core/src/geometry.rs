//! Grid coordinates and renderer-facing bounding boxes.

use std::fmt;

/// A `(row, col)` position in a grid. Row 0 is the northern edge.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct GridCoord {
    /// Zero-based row, growing southwards.
    pub row: u32,
    /// Zero-based column, growing eastwards.
    pub col: u32,
}

impl GridCoord {
    /// Construct a coordinate.
    pub fn new(row: u32, col: u32) -> Self {
        Self { row, col }
    }
}

impl fmt::Display for GridCoord {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {})", self.row, self.col)
    }
}

/// Axis-aligned rectangle in pixel space. `x` grows with columns and `y`
/// with rows.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct Rect {
    /// Left edge.
    pub x: u64,
    /// Top edge.
    pub y: u64,
    /// Horizontal extent.
    pub width: u32,
    /// Vertical extent.
    pub height: u32,
}

impl Rect {
    /// Exclusive right edge.
    pub fn right(&self) -> u64 {
        self.x + u64::from(self.width)
    }

    /// Exclusive bottom edge.
    pub fn bottom(&self) -> u64 {
        self.y + u64::from(self.height)
    }
}

/// Pixel bounding box of the cell at `coord` for square cells of
/// `cell_size` pixels.
///
/// Pure function of its inputs; the caller decides the pixel size.
///
/// # Examples
///
/// ```
/// use mazewright_core::{bounds_of, GridCoord, Rect};
///
/// let r = bounds_of(GridCoord::new(2, 3), 10);
/// assert_eq!(r, Rect { x: 30, y: 20, width: 10, height: 10 });
/// ```
pub fn bounds_of(coord: GridCoord, cell_size: u32) -> Rect {
    let size = u64::from(cell_size);
    Rect {
        x: u64::from(coord.col) * size,
        y: u64::from(coord.row) * size,
        width: cell_size,
        height: cell_size,
    }
}
