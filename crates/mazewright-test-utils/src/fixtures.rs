//! Reusable maze fixtures and invariant assertions.
//!
//! - [`assert_wall_symmetry`]: every shared wall agrees on both sides.
//! - [`assert_perfect_maze`]: symmetry, `cells - 1` open edges, and full
//!   connectivity from a given start cell.
//! - [`RecordingSink`]: collects progress reports for later inspection.

use mazewright_carve::{CarveOutcome, Carver, ProgressSink};
use mazewright_core::{CellId, Direction};
use mazewright_grid::Grid;
use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;

/// Deterministic RNG for tests.
pub fn seeded_rng(seed: u64) -> ChaCha8Rng {
    ChaCha8Rng::seed_from_u64(seed)
}

/// Build a `width × height` grid and carve it with `carver`.
pub fn carved(carver: &dyn Carver, width: u32, height: u32, seed: u64) -> (Grid, CarveOutcome) {
    let mut grid = Grid::new(width, height).expect("valid test dimensions");
    let mut rng = seeded_rng(seed);
    let mut sink = RecordingSink::default();
    let outcome = carver
        .carve(&mut grid, &mut rng, &mut sink)
        .expect("carving a fresh grid succeeds");
    (grid, outcome)
}

/// Count open wall pairs by walking every cell's passages.
///
/// Independent of [`Grid::open_edge_count`]: each passage is seen from
/// both ends, so the raw count is halved.
pub fn count_open_edges(grid: &Grid) -> usize {
    let half_edges: usize = grid.cells().iter().map(|c| c.passages().count()).sum();
    half_edges / 2
}

/// Panic unless every wall flag matches its counterpart on the
/// neighbouring cell.
pub fn assert_wall_symmetry(grid: &Grid) {
    for (id, cell) in grid.iter() {
        for (dir, n) in cell.neighbours() {
            let other = grid.cell(n).expect("neighbour belongs to grid");
            assert_eq!(
                cell.has_wall(dir),
                other.has_wall(dir.opposite()),
                "asymmetric wall between {id} ({dir}) and {n}"
            );
        }
    }
}

/// Panic unless `grid` is a spanning tree rooted anywhere: symmetric
/// walls, exactly `cells - 1` open edges, and every cell reachable from
/// `start`. With `cells - 1` edges, connectivity implies no cycles.
pub fn assert_perfect_maze(grid: &Grid, start: CellId) {
    assert_wall_symmetry(grid);
    let cells = grid.cell_count();
    assert_eq!(count_open_edges(grid), cells - 1, "open edge count");
    assert_eq!(grid.open_edge_count(), cells - 1, "grid edge count");
    assert_eq!(
        grid.reachable_from(start).expect("start belongs to grid"),
        cells,
        "cells reachable from {start}"
    );
    for (id, cell) in grid.iter() {
        for dir in Direction::ALL {
            if cell.neighbour(dir).is_none() {
                assert!(cell.has_wall(dir), "boundary wall {dir} of {id} opened");
            }
        }
    }
}

/// A [`ProgressSink`] that stores every report.
#[derive(Clone, Debug, Default)]
pub struct RecordingSink {
    pub reports: Vec<u8>,
}

impl RecordingSink {
    /// `true` if reports never decrease.
    pub fn is_monotonic(&self) -> bool {
        self.reports.windows(2).all(|w| w[0] <= w[1])
    }

    /// The most recent report.
    pub fn last(&self) -> Option<u8> {
        self.reports.last().copied()
    }
}

impl ProgressSink for RecordingSink {
    fn progress(&mut self, percent: u8) {
        self.reports.push(percent);
    }
}
