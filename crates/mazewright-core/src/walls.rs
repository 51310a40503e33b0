//! Per-cell wall flags.

use crate::direction::Direction;

/// The four wall flags of a cell. `true` means the wall is present
/// (movement blocked); `false` means it has been carved open.
///
/// A fresh set of flags is fully closed.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct WallFlags {
    /// Wall towards `row - 1`.
    pub north: bool,
    /// Wall towards `row + 1`.
    pub south: bool,
    /// Wall towards `col + 1`.
    pub east: bool,
    /// Wall towards `col - 1`.
    pub west: bool,
}

impl WallFlags {
    /// All four walls present.
    pub const CLOSED: WallFlags = WallFlags {
        north: true,
        south: true,
        east: true,
        west: true,
    };

    /// Whether the wall in direction `dir` is present.
    pub fn has(&self, dir: Direction) -> bool {
        match dir {
            Direction::North => self.north,
            Direction::South => self.south,
            Direction::East => self.east,
            Direction::West => self.west,
        }
    }

    /// Set the wall in direction `dir` (`true` = present).
    pub fn set(&mut self, dir: Direction, present: bool) {
        let flag = match dir {
            Direction::North => &mut self.north,
            Direction::South => &mut self.south,
            Direction::East => &mut self.east,
            Direction::West => &mut self.west,
        };
        *flag = present;
    }

    /// Carve the wall in direction `dir` open.
    pub fn open(&mut self, dir: Direction) {
        self.set(dir, false);
    }

    /// `true` if no wall has been opened.
    pub fn is_sealed(&self) -> bool {
        *self == Self::CLOSED
    }

    /// Number of open walls.
    pub fn open_count(&self) -> usize {
        Direction::ALL.iter().filter(|d| !self.has(**d)).count()
    }
}

impl Default for WallFlags {
    fn default() -> Self {
        Self::CLOSED
    }
}
