//! Test utilities for Mazewright development.
//!
//! Maze invariant checks shared by the grid, carve and engine test
//! suites, plus a recording [`ProgressSink`] and a seeded RNG helper.

#![forbid(unsafe_code)]
#![allow(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]

pub mod fixtures;

pub use fixtures::{
    assert_perfect_maze, assert_wall_symmetry, carved, count_open_edges, seeded_rng,
    RecordingSink,
};
