//! Prim's-style frontier carving.
//!
//! The frontier holds `(cell, parent)` pairs: `parent` is the closed cell
//! whose expansion discovered `cell`. Taking an entry for a cell that is
//! not yet closed opens the wall to its parent, closes the cell, and
//! pushes its unclosed neighbours. A cell can sit in the frontier several
//! times (once per closed neighbour that discovered it); later entries for
//! an already closed cell are counted and dropped without opening a wall
//! or expanding again.
//!
//! With [`FrontierOrder::Fifo`] the frontier is a plain queue and the only
//! randomness is the origin, so the maze grows breadth-first as a
//! non-uniform spanning tree. This is not the canonical randomized Prim's
//! maze. [`FrontierOrder::Random`] takes a uniformly random entry instead.
//!
//! Only the origin gets a distance (0). No terminus is chosen.

use std::collections::VecDeque;

use mazewright_core::CellId;
use mazewright_grid::{Grid, GridError};
use rand::{Rng, RngCore};
use tracing::debug;

use crate::carver::{CarveOutcome, CarveStats, Carver};
use crate::error::CarveError;
use crate::progress::{percent, ProgressSink};

/// How the next frontier entry is selected.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum FrontierOrder {
    /// Oldest entry first.
    #[default]
    Fifo,
    /// Uniformly random entry.
    Random,
}

/// Prim's-style frontier carver.
#[derive(Clone, Copy, Debug, Default)]
pub struct FrontierCarver {
    order: FrontierOrder,
}

impl FrontierCarver {
    /// Create a carver with the given frontier order.
    pub fn new(order: FrontierOrder) -> Self {
        Self { order }
    }

    /// The configured frontier order.
    pub fn order(&self) -> FrontierOrder {
        self.order
    }

    fn take(
        &self,
        frontier: &mut VecDeque<(CellId, Option<CellId>)>,
        rng: &mut dyn RngCore,
    ) -> Option<(CellId, Option<CellId>)> {
        match self.order {
            FrontierOrder::Fifo => frontier.pop_front(),
            FrontierOrder::Random => {
                if frontier.is_empty() {
                    return None;
                }
                let i = rng.random_range(0..frontier.len());
                frontier.swap_remove_back(i)
            }
        }
    }
}

impl Carver for FrontierCarver {
    fn name(&self) -> &str {
        "Frontier"
    }

    fn carve(
        &self,
        grid: &mut Grid,
        rng: &mut dyn RngCore,
        sink: &mut dyn ProgressSink,
    ) -> Result<CarveOutcome, CarveError> {
        grid.reset();
        let total = grid.cell_count();
        let origin = CellId(rng.random_range(0..total));

        let mut frontier = VecDeque::new();
        frontier.push_back((origin, None));
        let mut closed = vec![false; total];
        let mut closed_count = 0usize;
        let mut stats = CarveStats {
            max_frontier: 1,
            ..CarveStats::default()
        };
        sink.progress(percent(closed_count, total));

        while closed_count < total {
            let (current, parent) = self
                .take(&mut frontier, rng)
                .ok_or(CarveError::FrontierExhausted {
                    closed: closed_count,
                    total,
                })?;

            if closed[current.0] {
                stats.duplicate_visits += 1;
            } else {
                if let Some(parent) = parent {
                    grid.demolish_wall_between(parent, current)?;
                }
                closed[current.0] = true;
                closed_count += 1;

                let cell = grid.cell(current).ok_or(GridError::UnknownCell {
                    id: current,
                    cell_count: total,
                })?;
                for (_, n) in cell.neighbours() {
                    if !closed[n.0] {
                        frontier.push_back((n, Some(current)));
                    }
                }
                stats.max_frontier = stats.max_frontier.max(frontier.len());
            }

            stats.steps += 1;
            sink.progress(percent(closed_count, total));
        }

        grid.set_distance(origin, 0)?;
        grid.mark_origin(origin)?;
        debug!(
            cells = total,
            steps = stats.steps,
            duplicates = stats.duplicate_visits,
            max_frontier = stats.max_frontier,
            order = ?self.order,
            "frontier carve finished"
        );

        Ok(CarveOutcome {
            origin,
            terminus: None,
            stats,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::progress::NullSink;
    use mazewright_core::Direction;
    use rand::SeedableRng;
    use rand_chacha::ChaCha8Rng;

    fn carve(order: FrontierOrder, width: u32, height: u32, seed: u64) -> (Grid, CarveOutcome) {
        let mut grid = Grid::new(width, height).unwrap();
        let mut rng = ChaCha8Rng::seed_from_u64(seed);
        let outcome = FrontierCarver::new(order)
            .carve(&mut grid, &mut rng, &mut NullSink)
            .unwrap();
        (grid, outcome)
    }

    #[test]
    fn single_cell_closes_immediately() {
        let (grid, outcome) = carve(FrontierOrder::Fifo, 1, 1, 0);
        assert_eq!(outcome.origin, CellId(0));
        assert_eq!(outcome.terminus, None);
        assert_eq!(outcome.stats.steps, 1);
        assert_eq!(grid.open_edge_count(), 0);
    }

    #[test]
    fn fifo_spans_every_cell() {
        let (grid, outcome) = carve(FrontierOrder::Fifo, 9, 6, 4);
        assert_eq!(grid.open_edge_count(), 53);
        assert_eq!(grid.reachable_from(outcome.origin).unwrap(), 54);
    }

    #[test]
    fn random_order_spans_every_cell() {
        let (grid, outcome) = carve(FrontierOrder::Random, 9, 6, 4);
        assert_eq!(grid.open_edge_count(), 53);
        assert_eq!(grid.reachable_from(outcome.origin).unwrap(), 54);
    }

    #[test]
    fn only_origin_is_marked() {
        let (grid, outcome) = carve(FrontierOrder::Fifo, 5, 5, 17);
        assert_eq!(grid.origin(), Some(outcome.origin));
        assert_eq!(grid.exit(), None);
        for (id, cell) in grid.iter() {
            if id == outcome.origin {
                assert_eq!(cell.distance(), Some(0));
            } else {
                assert_eq!(cell.distance(), None);
            }
        }
    }

    #[test]
    fn every_step_closes_a_cell_or_drops_a_duplicate() {
        for order in [FrontierOrder::Fifo, FrontierOrder::Random] {
            let (grid, outcome) = carve(order, 6, 5, 10);
            assert_eq!(
                outcome.stats.steps,
                grid.cell_count() as u64 + outcome.stats.duplicate_visits
            );
        }
    }

    #[test]
    fn corridor_has_no_duplicates() {
        let (_, outcome) = carve(FrontierOrder::Fifo, 8, 1, 12);
        assert_eq!(outcome.stats.duplicate_visits, 0);
        assert_eq!(outcome.stats.steps, 8);
    }

    #[test]
    fn fifo_corridor_is_a_straight_line() {
        let (grid, _) = carve(FrontierOrder::Fifo, 6, 1, 3);
        for (_, cell) in grid.iter() {
            if cell.neighbour(Direction::East).is_some() {
                assert!(!cell.has_wall(Direction::East));
            }
        }
    }

    #[test]
    fn fifo_tree_depth_matches_manhattan_distance() {
        // FIFO discovers every cell from the nearest closed cell first, so
        // carve-tree depth equals Manhattan distance from the origin.
        let (grid, outcome) = carve(FrontierOrder::Fifo, 7, 7, 42);
        let o = grid.coord_of(outcome.origin).unwrap();
        for (id, cell) in grid.iter() {
            let c = cell.coord();
            let manhattan = c.row.abs_diff(o.row) + c.col.abs_diff(o.col);
            if manhattan == 0 {
                continue;
            }
            let closer = cell
                .passages()
                .filter(|(_, n)| {
                    let nc = grid.coord_of(*n).unwrap();
                    nc.row.abs_diff(o.row) + nc.col.abs_diff(o.col) == manhattan - 1
                })
                .count();
            assert_eq!(closer, 1, "cell {id}");
        }
    }

    #[test]
    fn progress_is_monotonic_and_ends_at_100() {
        let mut grid = Grid::new(4, 3).unwrap();
        let mut rng = ChaCha8Rng::seed_from_u64(6);
        let mut seen = Vec::new();
        let mut sink = |p: u8| seen.push(p);
        FrontierCarver::new(FrontierOrder::Random)
            .carve(&mut grid, &mut rng, &mut sink)
            .unwrap();
        assert_eq!(seen.first(), Some(&0));
        assert_eq!(seen.last(), Some(&100));
        assert!(seen.windows(2).all(|w| w[0] <= w[1]));
    }

    #[test]
    fn same_seed_same_maze() {
        let (a, _) = carve(FrontierOrder::Random, 8, 8, 77);
        let (b, _) = carve(FrontierOrder::Random, 8, 8, 77);
        assert_eq!(a, b);
    }
}
