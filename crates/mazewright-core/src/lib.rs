//! Core types for the Mazewright maze generator.
//!
//! This is the leaf crate with zero internal dependencies. It defines the
//! vocabulary shared by every other crate in the workspace: cell
//! identifiers, grid coordinates, compass directions, wall flags, and the
//! renderer-facing bounding-box geometry.

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![forbid(unsafe_code)]

pub mod direction;
pub mod geometry;
pub mod id;
pub mod walls;

pub use direction::Direction;
pub use geometry::{bounds_of, GridCoord, Rect};
pub use id::CellId;
pub use walls::WallFlags;
