//! Errors surfaced by the generator.

use std::error::Error;
use std::fmt;

use mazewright_carve::CarveError;
use mazewright_grid::GridError;

/// Why a generation request was rejected or a run failed.
///
/// Request-level problems (a run already in flight, bad dimensions) are
/// returned directly from
/// [`Generator::generate`](crate::generator::Generator::generate). Failures
/// inside a run arrive through the completion event and from
/// [`Generator::finish`](crate::generator::Generator::finish).
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum GenerateError {
    /// A run is still in flight on this generator.
    ConcurrentGenerationRequested,
    /// Width or height is zero.
    InvalidDimensions {
        /// Requested width.
        width: u32,
        /// Requested height.
        height: u32,
    },
    /// The request exceeds `GeneratorConfig::max_cells`.
    TooManyCells {
        /// `width * height`.
        requested: u64,
        /// The configured limit.
        max: usize,
    },
    /// The cell pixel size is zero.
    InvalidCellSize,
    /// The grid could not be built.
    Grid(GridError),
    /// The carving algorithm failed.
    Carve(CarveError),
    /// The worker thread panicked or hung up before completing.
    WorkerPanicked,
    /// The worker thread could not be spawned.
    ThreadSpawnFailed {
        /// OS error text.
        reason: String,
    },
    /// `finish` was called without any run to collect.
    NothingToCollect,
}

impl fmt::Display for GenerateError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::ConcurrentGenerationRequested => {
                write!(f, "a generation run is already in flight")
            }
            Self::InvalidDimensions { width, height } => {
                write!(f, "invalid maze dimensions {width}x{height}")
            }
            Self::TooManyCells { requested, max } => {
                write!(f, "{requested} cells requested, limit is {max}")
            }
            Self::InvalidCellSize => write!(f, "cell size must be at least 1 pixel"),
            Self::Grid(e) => write!(f, "grid construction failed: {e}"),
            Self::Carve(e) => write!(f, "carving failed: {e}"),
            Self::WorkerPanicked => write!(f, "generation worker panicked"),
            Self::ThreadSpawnFailed { reason } => {
                write!(f, "failed to spawn generation worker: {reason}")
            }
            Self::NothingToCollect => write!(f, "no generation run to collect"),
        }
    }
}

impl Error for GenerateError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::Grid(e) => Some(e),
            Self::Carve(e) => Some(e),
            _ => None,
        }
    }
}

impl From<GridError> for GenerateError {
    fn from(e: GridError) -> Self {
        Self::Grid(e)
    }
}

impl From<CarveError> for GenerateError {
    fn from(e: CarveError) -> Self {
        Self::Carve(e)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use mazewright_core::CellId;

    #[test]
    fn carve_errors_chain_to_grid_errors() {
        let e = GenerateError::from(CarveError::Grid(GridError::NoOpenableWalls {
            id: CellId(3),
        }));
        let carve = e.source().unwrap();
        let grid = carve.source().unwrap();
        assert_eq!(grid.to_string(), "cell #3 has no openable walls");
    }

    #[test]
    fn display_is_human_readable() {
        assert_eq!(
            GenerateError::InvalidDimensions {
                width: 0,
                height: 4
            }
            .to_string(),
            "invalid maze dimensions 0x4"
        );
    }
}
