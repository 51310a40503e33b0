//! A single grid unit.

use mazewright_core::{CellId, Direction, GridCoord, WallFlags};

/// One cell of a [`Grid`](crate::Grid).
///
/// Neighbour links are fixed when the grid is built. Wall flags,
/// distance and the origin/exit markers are the only mutable state, and
/// they change only through `Grid` methods so that shared walls stay
/// symmetric.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Cell {
    pub(crate) coord: GridCoord,
    pub(crate) walls: WallFlags,
    /// Indexed by [`Direction::slot`].
    pub(crate) neighbours: [Option<CellId>; 4],
    pub(crate) distance: Option<u32>,
    pub(crate) is_origin: bool,
    pub(crate) is_exit: bool,
}

impl Cell {
    pub(crate) fn new(coord: GridCoord, neighbours: [Option<CellId>; 4]) -> Self {
        Self {
            coord,
            walls: WallFlags::CLOSED,
            neighbours,
            distance: None,
            is_origin: false,
            is_exit: false,
        }
    }

    /// Position of this cell in the grid.
    pub fn coord(&self) -> GridCoord {
        self.coord
    }

    /// Snapshot of the four wall flags.
    pub fn walls(&self) -> WallFlags {
        self.walls
    }

    /// Whether the wall in `dir` is still standing.
    pub fn has_wall(&self, dir: Direction) -> bool {
        self.walls.has(dir)
    }

    /// The neighbour in `dir`, or `None` at the grid boundary.
    pub fn neighbour(&self, dir: Direction) -> Option<CellId> {
        self.neighbours[dir.slot()]
    }

    /// Existing neighbours in N, E, S, W order.
    pub fn neighbours(&self) -> impl Iterator<Item = (Direction, CellId)> + '_ {
        Direction::ALL
            .into_iter()
            .filter_map(move |d| self.neighbour(d).map(|n| (d, n)))
    }

    /// Neighbours reachable through an open wall, in N, E, S, W order.
    pub fn passages(&self) -> impl Iterator<Item = (Direction, CellId)> + '_ {
        self.neighbours().filter(move |(d, _)| !self.has_wall(*d))
    }

    /// Carve-order distance from the origin, or `None` if never assigned.
    pub fn distance(&self) -> Option<u32> {
        self.distance
    }

    /// `true` for the cell where generation started.
    pub fn is_origin(&self) -> bool {
        self.is_origin
    }

    /// `true` for the terminus chosen by depth-first carving.
    pub fn is_exit(&self) -> bool {
        self.is_exit
    }

    /// `true` if none of this cell's walls have been opened.
    pub fn is_sealed(&self) -> bool {
        self.walls.is_sealed()
    }
}
