//! Body of the generation thread.
//!
//! The worker owns the RNG and the grid for the duration of a run (both
//! moved in via `thread::spawn`), so carving takes no locks. Progress
//! and the completion event go out over the run's channel; the RNG and
//! the finished maze come back through the `JoinHandle`.

use std::time::Instant;

use crossbeam_channel::Sender;
use mazewright_carve::{Algorithm, Carver};
use mazewright_grid::Grid;
use rand_chacha::ChaCha8Rng;
use tracing::{debug, error, info};

use crate::config::{GenerationRequest, ProgressGranularity};
use crate::error::GenerateError;
use crate::event::{ChannelSink, GenerationEvent, RunSummary};
use crate::maze::Maze;
use crate::metrics::RunMetrics;

/// What the worker thread hands back when it exits.
pub(crate) struct WorkerOutput {
    pub rng: ChaCha8Rng,
    pub result: Result<Maze, GenerateError>,
}

/// State moved onto the worker thread for one run.
pub(crate) struct GenerationWorker {
    run_id: u64,
    request: GenerationRequest,
    algorithm: Algorithm,
    carver: Box<dyn Carver>,
    granularity: ProgressGranularity,
    rng: ChaCha8Rng,
    events: Sender<GenerationEvent>,
}

impl GenerationWorker {
    pub fn new(
        run_id: u64,
        request: GenerationRequest,
        algorithm: Algorithm,
        granularity: ProgressGranularity,
        rng: ChaCha8Rng,
        events: Sender<GenerationEvent>,
    ) -> Self {
        Self {
            run_id,
            request,
            algorithm,
            carver: algorithm.carver(),
            granularity,
            rng,
            events,
        }
    }

    /// Run to completion. Always sends exactly one `Completed` event
    /// (best-effort) before returning.
    pub fn run(mut self) -> WorkerOutput {
        debug!(
            run_id = self.run_id,
            width = self.request.width,
            height = self.request.height,
            algorithm = %self.algorithm,
            "generation started"
        );

        let result = self.carve();
        let event = match &result {
            Ok(maze) => {
                info!(
                    run_id = self.run_id,
                    cells = maze.grid().cell_count(),
                    elapsed_us = maze.metrics().elapsed_us,
                    "generation completed"
                );
                Ok(RunSummary {
                    run_id: self.run_id,
                    origin: maze.origin_id(),
                    terminus: maze.terminus_id(),
                    metrics: maze.metrics().clone(),
                })
            }
            Err(e) => {
                error!(run_id = self.run_id, error = %e, "generation failed");
                Err(e.clone())
            }
        };
        // Best-effort: the caller may have dropped its receiver.
        let _ = self.events.send(GenerationEvent::Completed(event));

        WorkerOutput {
            rng: self.rng,
            result,
        }
    }

    fn carve(&mut self) -> Result<Maze, GenerateError> {
        let start = Instant::now();
        let mut grid = Grid::new(self.request.width, self.request.height)?;
        let mut sink = ChannelSink::new(&self.events, self.granularity);
        let outcome = self.carver.carve(&mut grid, &mut self.rng, &mut sink)?;

        let metrics = RunMetrics {
            stats: outcome.stats,
            elapsed_us: start.elapsed().as_micros() as u64,
            progress_events: sink.sent(),
        };
        Ok(Maze::new(
            grid,
            outcome.origin,
            outcome.terminus,
            self.algorithm,
            self.request.cell_size,
            self.run_id,
            metrics,
        ))
    }
}
