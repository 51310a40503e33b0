//! The `Carver` trait and the algorithm selector.

use std::fmt;

use mazewright_core::CellId;
use mazewright_grid::Grid;
use rand::RngCore;

use crate::depth_first::DepthFirst;
use crate::error::CarveError;
use crate::frontier::{FrontierCarver, FrontierOrder};
use crate::progress::ProgressSink;

/// Counters collected during one carving run.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct CarveStats {
    /// Loop iterations executed.
    pub steps: u64,
    /// Depth-first backtracks (stack pops).
    pub backtracks: u64,
    /// Frontier entries dequeued for a cell that was already closed.
    pub duplicate_visits: u64,
    /// Largest stack depth or frontier length seen.
    pub max_frontier: usize,
}

/// Result of a successful carving run.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct CarveOutcome {
    /// The randomly chosen start cell.
    pub origin: CellId,
    /// The chosen end cell. `None` for algorithms that do not pick one.
    pub terminus: Option<CellId>,
    /// Loop counters.
    pub stats: CarveStats,
}

/// A maze-carving algorithm.
///
/// `carve` resets `grid`, picks an origin with `rng`, and opens walls
/// until every cell is part of a single spanning tree. Given the same
/// grid size and RNG state, a carver must produce the same maze.
pub trait Carver: Send + fmt::Debug {
    /// Human-readable algorithm name, used in logs.
    fn name(&self) -> &str;

    /// Carve `grid` into a perfect maze.
    fn carve(
        &self,
        grid: &mut Grid,
        rng: &mut dyn RngCore,
        sink: &mut dyn ProgressSink,
    ) -> Result<CarveOutcome, CarveError>;
}

/// Which carver a generator should run.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum Algorithm {
    /// Randomized depth-first carving.
    #[default]
    DepthFirst,
    /// Prim's-style frontier expansion.
    Frontier(FrontierOrder),
}

impl Algorithm {
    /// Instantiate the carver for this algorithm.
    pub fn carver(self) -> Box<dyn Carver> {
        match self {
            Algorithm::DepthFirst => Box::new(DepthFirst),
            Algorithm::Frontier(order) => Box::new(FrontierCarver::new(order)),
        }
    }

    /// Whether this algorithm assigns distances to every cell and marks
    /// a terminus.
    pub fn assigns_distances(self) -> bool {
        matches!(self, Algorithm::DepthFirst)
    }
}

impl fmt::Display for Algorithm {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Algorithm::DepthFirst => write!(f, "depth-first"),
            Algorithm::Frontier(FrontierOrder::Fifo) => write!(f, "frontier (fifo)"),
            Algorithm::Frontier(FrontierOrder::Random) => write!(f, "frontier (random)"),
        }
    }
}
