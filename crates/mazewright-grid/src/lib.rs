//! Cell storage and adjacency for Mazewright grids.
//!
//! A [`Grid`] is an arena: it owns a flat, row-major `Vec<Cell>` and every
//! neighbour link is a [`CellId`](mazewright_core::CellId) into that
//! vector. Cells never hold references to each other, so the cyclic
//! neighbour graph carries no ownership cycles.
//!
//! Carving algorithms mutate wall flags through [`Grid`] methods, which
//! keep the two sides of a shared wall in sync.

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![forbid(unsafe_code)]

pub mod cell;
pub mod error;
pub mod grid;

pub use cell::Cell;
pub use error::GridError;
pub use grid::{Grid, OpenableNeighbours};
