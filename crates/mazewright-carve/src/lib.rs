//! Maze carving algorithms for Mazewright.
//!
//! A [`Carver`] turns a fully walled [`Grid`](mazewright_grid::Grid) into
//! a perfect maze by opening exactly `cells - 1` walls. Two algorithms
//! ship here:
//!
//! - [`DepthFirst`]: randomized depth-first carving with backtracking.
//!   Assigns carve-order distances and picks a terminus.
//! - [`FrontierCarver`]: Prim's-style frontier expansion. FIFO by default,
//!   which yields a breadth-expanding tree rather than a uniformly random
//!   one; [`FrontierOrder::Random`] opts into randomized selection.
//!
//! Progress is reported through a [`ProgressSink`] after every step.

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![forbid(unsafe_code)]

pub mod carver;
pub mod depth_first;
pub mod error;
pub mod frontier;
pub mod progress;

pub use carver::{Algorithm, CarveOutcome, CarveStats, Carver};
pub use depth_first::DepthFirst;
pub use error::CarveError;
pub use frontier::{FrontierCarver, FrontierOrder};
pub use progress::{percent, NullSink, ProgressSink};
