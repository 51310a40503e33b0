//! Randomized depth-first carving (recursive backtracker, iterative form).
//!
//! Starting from a random origin, repeatedly carve into a random sealed
//! neighbour of the cell on top of the stack; when there is none, pop
//! the stack and try again from the previous cell.
//!
//! Each newly entered cell gets `distance(parent) + 1`. This is the
//! *carve-order distance*: the depth of the cell in the carving tree,
//! assigned once on entry and never revisited on backtrack. No separate
//! shortest-path pass is run.
//!
//! The last cell carved becomes the terminus.

use mazewright_core::CellId;
use mazewright_grid::{Cell, Grid, GridError};
use rand::{Rng, RngCore};
use tracing::debug;

use crate::carver::{CarveOutcome, CarveStats, Carver};
use crate::error::CarveError;
use crate::progress::{percent, ProgressSink};

/// Randomized depth-first carver. Stateless; all run state lives on the
/// stack of [`carve`](Carver::carve).
#[derive(Clone, Copy, Debug, Default)]
pub struct DepthFirst;

impl Carver for DepthFirst {
    fn name(&self) -> &str {
        "DepthFirst"
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
        grid.set_distance(origin, 0)?;

        let mut stack = vec![origin];
        let mut visited = 1usize;
        let mut terminus = origin;
        let mut stats = CarveStats {
            max_frontier: 1,
            ..CarveStats::default()
        };
        sink.progress(percent(visited, total));

        while visited < total {
            let current = *stack
                .last()
                .ok_or(CarveError::StackExhausted { visited, total })?;

            match grid.demolish_random_wall(current, &mut *rng) {
                Ok(next) => {
                    if distance(grid, next).is_none() {
                        let base = distance(grid, current).unwrap_or(0);
                        grid.set_distance(next, base + 1)?;
                    }
                    stack.push(next);
                    stats.max_frontier = stats.max_frontier.max(stack.len());
                    visited += 1;
                    terminus = next;
                }
                // Dead end: nothing sealed around `current`.
                Err(GridError::NoOpenableWalls { .. }) => {
                    stack.pop();
                    stats.backtracks += 1;
                }
                Err(e) => return Err(e.into()),
            }

            stats.steps += 1;
            sink.progress(percent(visited, total));
        }

        grid.mark_origin(origin)?;
        grid.mark_exit(terminus)?;
        debug!(
            cells = total,
            steps = stats.steps,
            backtracks = stats.backtracks,
            max_depth = stats.max_frontier,
            "depth-first carve finished"
        );

        Ok(CarveOutcome {
            origin,
            terminus: Some(terminus),
            stats,
        })
    }
}

fn distance(grid: &Grid, id: CellId) -> Option<u32> {
    grid.cell(id).and_then(Cell::distance)
}
