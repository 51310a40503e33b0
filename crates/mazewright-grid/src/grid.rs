//! The cell arena and its coordinate bookkeeping.

use std::collections::VecDeque;

use mazewright_core::{CellId, Direction, GridCoord, WallFlags};
use rand::Rng;
use smallvec::SmallVec;
use tracing::warn;

use crate::cell::Cell;
use crate::error::GridError;

/// Openable neighbours of one cell, in N, E, S, W order.
pub type OpenableNeighbours = SmallVec<[(Direction, CellId); 4]>;

/// A `width × height` rectangle of cells stored row-major.
///
/// `CellId(row * width + col)` addresses the cell at `(row, col)`.
///
/// # Examples
///
/// ```
/// use mazewright_grid::Grid;
///
/// let grid = Grid::new(4, 3).unwrap();
/// assert_eq!(grid.cell_count(), 12);
/// let id = grid.index_of(2, 1).unwrap();
/// assert_eq!(id.index(), 9);
/// assert_eq!(grid.coord_of(id).unwrap().row, 2);
/// ```
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Grid {
    width: u32,
    height: u32,
    cells: Vec<Cell>,
}

impl Grid {
    /// Build a fully walled grid of `width` columns and `height` rows.
    ///
    /// Returns `Err(GridError::EmptyGrid)` if either dimension is 0.
    pub fn new(width: u32, height: u32) -> Result<Self, GridError> {
        let mut grid = Self {
            width: 0,
            height: 0,
            cells: Vec::new(),
        };
        grid.build(width, height)?;
        Ok(grid)
    }

    /// Discard every cell and rebuild the grid at the given size.
    ///
    /// All walls are closed, distances and markers cleared, and
    /// neighbour links recomputed. Nothing from the previous cell set
    /// survives. On error the grid is left unchanged.
    pub fn build(&mut self, width: u32, height: u32) -> Result<(), GridError> {
        if width == 0 || height == 0 {
            return Err(GridError::EmptyGrid);
        }
        let count = u64::from(width) * u64::from(height);
        if count > usize::MAX as u64 {
            return Err(GridError::DimensionTooLarge { width, height });
        }

        let mut cells = Vec::with_capacity(count as usize);
        for row in 0..height {
            for col in 0..width {
                let coord = GridCoord::new(row, col);
                let mut neighbours = [None; 4];
                for dir in Direction::ALL {
                    neighbours[dir.slot()] = step(coord, dir, width, height)
                        .map(|n| linear_index(n, width));
                }
                cells.push(Cell::new(coord, neighbours));
            }
        }

        self.width = width;
        self.height = height;
        self.cells = cells;
        Ok(())
    }

    /// Close every wall and clear distances and markers, keeping the
    /// current size and adjacency.
    pub fn reset(&mut self) {
        for cell in &mut self.cells {
            cell.walls = WallFlags::CLOSED;
            cell.distance = None;
            cell.is_origin = false;
            cell.is_exit = false;
        }
    }

    /// Number of columns.
    pub fn width(&self) -> u32 {
        self.width
    }

    /// Number of rows.
    pub fn height(&self) -> u32 {
        self.height
    }

    /// Total number of cells.
    pub fn cell_count(&self) -> usize {
        self.cells.len()
    }

    /// All cells in row-major order.
    pub fn cells(&self) -> &[Cell] {
        &self.cells
    }

    /// Iterate `(id, cell)` pairs in row-major order.
    pub fn iter(&self) -> impl Iterator<Item = (CellId, &Cell)> + '_ {
        self.cells.iter().enumerate().map(|(i, c)| (CellId(i), c))
    }

    /// The cell with the given id, if it belongs to this grid.
    pub fn cell(&self, id: CellId) -> Option<&Cell> {
        self.cells.get(id.0)
    }

    /// The cell at `(row, col)`, if in range.
    pub fn cell_at(&self, row: u32, col: u32) -> Option<&Cell> {
        self.index_of(row, col).and_then(|id| self.cell(id))
    }

    // ── Coordinate conversion ───────────────────────────────────

    /// Linear index → `(row, col)`. `None` for ids outside the grid.
    pub fn coord_of(&self, id: CellId) -> Option<GridCoord> {
        if id.0 >= self.cells.len() {
            return None;
        }
        let w = self.width as usize;
        Some(GridCoord::new((id.0 / w) as u32, (id.0 % w) as u32))
    }

    /// `(row, col)` → linear index.
    ///
    /// Out-of-range input yields `None`. Each axis is checked on its own
    /// and each violation is logged, so a coordinate that is off on both
    /// axes produces two warnings.
    pub fn index_of(&self, row: u32, col: u32) -> Option<CellId> {
        let mut valid = true;
        if row >= self.height {
            warn!(row, height = self.height, "row out of range");
            valid = false;
        }
        if col >= self.width {
            warn!(col, width = self.width, "column out of range");
            valid = false;
        }
        valid.then(|| linear_index(GridCoord::new(row, col), self.width))
    }

    /// `(row, col)` → linear index, as a `Result`.
    pub fn try_index(&self, row: u32, col: u32) -> Result<CellId, GridError> {
        self.index_of(row, col)
            .ok_or(GridError::OutOfRangeCoordinate {
                coord: GridCoord::new(row, col),
                width: self.width,
                height: self.height,
            })
    }

    fn checked(&self, id: CellId) -> Result<&Cell, GridError> {
        self.cells.get(id.0).ok_or(GridError::UnknownCell {
            id,
            cell_count: self.cells.len(),
        })
    }

    fn checked_mut(&mut self, id: CellId) -> Result<&mut Cell, GridError> {
        let cell_count = self.cells.len();
        self.cells
            .get_mut(id.0)
            .ok_or(GridError::UnknownCell { id, cell_count })
    }

    // ── Walls ───────────────────────────────────────────────────

    /// The direction from `a` to `b`, if they are adjacent.
    pub fn direction_between(&self, a: CellId, b: CellId) -> Option<Direction> {
        let cell = self.cell(a)?;
        cell.neighbours().find(|(_, n)| *n == b).map(|(d, _)| d)
    }

    /// Neighbours of `id` that can still be carved into, in N, E, S, W
    /// order.
    ///
    /// A neighbour qualifies when the wall between the two cells is
    /// closed on both sides and the neighbour is still sealed, i.e. no
    /// carving has reached it yet. Opening a wall into such a cell can
    /// never close a loop.
    pub fn openable_neighbours(&self, id: CellId) -> Result<OpenableNeighbours, GridError> {
        let cell = self.checked(id)?;
        let mut out = OpenableNeighbours::new();
        for (dir, n) in cell.neighbours() {
            let other = &self.cells[n.0];
            if cell.has_wall(dir) && other.has_wall(dir.opposite()) && other.is_sealed() {
                out.push((dir, n));
            }
        }
        Ok(out)
    }

    /// Open the wall toward a uniformly chosen openable neighbour of
    /// `id` and return that neighbour.
    ///
    /// Returns `Err(GridError::NoOpenableWalls)` if there is none. The
    /// grid is unchanged in that case.
    pub fn demolish_random_wall<R: Rng + ?Sized>(
        &mut self,
        id: CellId,
        rng: &mut R,
    ) -> Result<CellId, GridError> {
        let candidates = self.openable_neighbours(id)?;
        if candidates.is_empty() {
            return Err(GridError::NoOpenableWalls { id });
        }
        let (dir, next) = candidates[rng.random_range(0..candidates.len())];
        self.open_wall(id, dir, next);
        Ok(next)
    }

    /// Open the wall shared by two adjacent cells, on both sides.
    ///
    /// Returns the direction from `a` to `b`. Fails with
    /// `GridError::NotAdjacent` (leaving every wall untouched) if the
    /// cells do not share a wall.
    pub fn demolish_wall_between(&mut self, a: CellId, b: CellId) -> Result<Direction, GridError> {
        self.checked(a)?;
        self.checked(b)?;
        let dir = self
            .direction_between(a, b)
            .ok_or(GridError::NotAdjacent { a, b })?;
        self.open_wall(a, dir, b);
        Ok(dir)
    }

    fn open_wall(&mut self, a: CellId, dir: Direction, b: CellId) {
        self.cells[a.0].walls.open(dir);
        self.cells[b.0].walls.open(dir.opposite());
    }

    // ── Markers ─────────────────────────────────────────────────

    /// Record a carve-order distance for `id`.
    pub fn set_distance(&mut self, id: CellId, distance: u32) -> Result<(), GridError> {
        self.checked_mut(id)?.distance = Some(distance);
        Ok(())
    }

    /// Flag `id` as the origin.
    pub fn mark_origin(&mut self, id: CellId) -> Result<(), GridError> {
        self.checked_mut(id)?.is_origin = true;
        Ok(())
    }

    /// Flag `id` as the exit.
    pub fn mark_exit(&mut self, id: CellId) -> Result<(), GridError> {
        self.checked_mut(id)?.is_exit = true;
        Ok(())
    }

    // ── Graph queries ───────────────────────────────────────────

    /// Number of open wall pairs between adjacent cells.
    ///
    /// Each shared wall is counted once, from its western or northern
    /// side.
    pub fn open_edge_count(&self) -> usize {
        self.cells
            .iter()
            .map(|c| {
                [Direction::East, Direction::South]
                    .into_iter()
                    .filter(|d| c.neighbour(*d).is_some() && !c.has_wall(*d))
                    .count()
            })
            .sum()
    }

    /// Number of cells reachable from `start` through open walls,
    /// including `start` itself.
    pub fn reachable_from(&self, start: CellId) -> Result<usize, GridError> {
        self.checked(start)?;
        let mut seen = vec![false; self.cells.len()];
        let mut queue = VecDeque::new();
        seen[start.0] = true;
        queue.push_back(start);
        let mut count = 0;
        while let Some(id) = queue.pop_front() {
            count += 1;
            for (_, n) in self.cells[id.0].passages() {
                if !seen[n.0] {
                    seen[n.0] = true;
                    queue.push_back(n);
                }
            }
        }
        Ok(count)
    }

    /// The cell flagged as origin, if any.
    pub fn origin(&self) -> Option<CellId> {
        self.iter().find(|(_, c)| c.is_origin).map(|(id, _)| id)
    }

    /// The cell flagged as exit, if any.
    pub fn exit(&self) -> Option<CellId> {
        self.iter().find(|(_, c)| c.is_exit).map(|(id, _)| id)
    }
}

fn linear_index(coord: GridCoord, width: u32) -> CellId {
    CellId(coord.row as usize * width as usize + coord.col as usize)
}

/// The coordinate one step from `coord` in `dir`, or `None` past the edge.
fn step(coord: GridCoord, dir: Direction, width: u32, height: u32) -> Option<GridCoord> {
    let (dr, dc) = dir.offset();
    let row = i64::from(coord.row) + dr;
    let col = i64::from(coord.col) + dc;
    if row < 0 || col < 0 || row >= i64::from(height) || col >= i64::from(width) {
        return None;
    }
    Some(GridCoord::new(row as u32, col as u32))
}
