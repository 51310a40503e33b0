//! Mazewright: perfect-maze generation on rectangular grids.
//!
//! This is the top-level facade crate that re-exports the public API from all
//! Mazewright sub-crates. For most users, adding `mazewright` as a single
//! dependency is sufficient.
//!
//! # Quick start
//!
//! ```rust
//! use mazewright::prelude::*;
//!
//! let config = GeneratorConfig {
//!     seed: Some(42),
//!     algorithm: Algorithm::DepthFirst,
//!     ..GeneratorConfig::default()
//! };
//! let mut generator = Generator::new(config).unwrap();
//!
//! let handle = generator
//!     .generate(GenerationRequest::new(12, 8).with_cell_size(10))
//!     .unwrap();
//! let mut last = 0;
//! let summary = handle.wait_with(|p| last = p).unwrap();
//! assert_eq!(last, 100);
//!
//! let maze = generator.finish().unwrap();
//! assert_eq!(maze.origin_id(), summary.origin);
//! assert_eq!(maze.grid().open_edge_count(), 12 * 8 - 1);
//!
//! let rect = maze.bounds_of(CellId(13)).unwrap();
//! assert_eq!((rect.x, rect.y, rect.width), (10, 10, 10));
//! ```
//!
//! # Modules
//!
//! | Module | Sub-crate | Contents |
//! |--------|-----------|----------|
//! | [`types`] | `mazewright-core` | Ids, directions, wall flags, pixel geometry |
//! | [`grid`] | `mazewright-grid` | Cell arena, wall demolition, grid errors |
//! | [`carve`] | `mazewright-carve` | Carver trait, depth-first and frontier carvers |
//! | [`engine`] | `mazewright-engine` | Background generator, events, published mazes |

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![forbid(unsafe_code)]

/// Ids, directions, wall flags and pixel geometry (`mazewright-core`).
pub use mazewright_core as types;

/// The cell arena and wall bookkeeping (`mazewright-grid`).
///
/// [`grid::Grid`] owns every [`grid::Cell`]; carvers mutate it through
/// [`grid::Grid::demolish_random_wall`] and
/// [`grid::Grid::demolish_wall_between`].
pub use mazewright_grid as grid;

/// Carving algorithms (`mazewright-carve`).
///
/// Implement [`carve::Carver`] to plug in a new algorithm.
pub use mazewright_carve as carve;

/// Background generation (`mazewright-engine`).
///
/// [`engine::Generator`] runs one job at a time on a worker thread and
/// streams [`engine::GenerationEvent`]s back.
pub use mazewright_engine as engine;

/// Common imports for typical Mazewright usage.
///
/// ```rust
/// use mazewright::prelude::*;
/// ```
pub mod prelude {
    // Core types
    pub use mazewright_core::{bounds_of, CellId, Direction, GridCoord, Rect, WallFlags};

    // Grid
    pub use mazewright_grid::{Cell, Grid, GridError};

    // Carving
    pub use mazewright_carve::{Algorithm, CarveError, Carver, FrontierOrder, ProgressSink};

    // Engine
    pub use mazewright_engine::{
        GenerateError, GenerationEvent, GenerationHandle, GenerationRequest, Generator,
        GeneratorConfig, GeneratorState, Maze, ProgressGranularity,
    };
}
