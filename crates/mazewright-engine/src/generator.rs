//! User-facing `Generator` API and its run state machine.
//!
//! # Architecture
//!
//! ```text
//! Caller Thread                       Worker Thread
//!     |                                   |
//!     |--generate(request)--------------->| spawn, owns Grid + RNG
//!     |   [events: unbounded]             | carver.carve()
//!     |<--Progress(p) ... Progress(100)---|
//!     |<--Completed(Ok(summary))----------|
//!     |                                   | return WorkerOutput
//!     |--finish()---- join -------------->|
//!     |   Maze published, RNG recovered
//! ```
//!
//! At most one run is in flight per generator. The maze of a run is only
//! readable after [`Generator::finish`] has collected it.

use std::io;
use std::thread::{self, JoinHandle};

use crossbeam_channel::Receiver;
use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;
use tracing::{debug, warn};

use crate::config::{ConfigError, GenerationRequest, GeneratorConfig};
use crate::error::GenerateError;
use crate::event::{GenerationEvent, RunSummary};
use crate::maze::Maze;
use crate::worker::{GenerationWorker, WorkerOutput};

// ── GeneratorState ───────────────────────────────────────────────

/// Lifecycle of a generator's current run.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GeneratorState {
    /// No maze available: nothing has run yet, or the last run failed.
    Idle,
    /// A run has been started and not yet collected with `finish()`.
    Running,
    /// The last run succeeded; its maze is readable.
    Completed,
}

// ── GenerationHandle ─────────────────────────────────────────────

/// Caller's end of one run's event channel.
///
/// Dropping the handle does not cancel the run; the worker keeps going
/// and its events are discarded.
#[derive(Debug)]
pub struct GenerationHandle {
    run_id: u64,
    events: Receiver<GenerationEvent>,
}

impl GenerationHandle {
    /// Sequence number of this run on its generator.
    pub fn run_id(&self) -> u64 {
        self.run_id
    }

    /// The raw event receiver, for callers that `select!` over several
    /// channels.
    pub fn events(&self) -> &Receiver<GenerationEvent> {
        &self.events
    }

    /// Block until the run completes, discarding progress.
    pub fn wait(self) -> Result<RunSummary, GenerateError> {
        self.wait_with(|_| {})
    }

    /// Block until the run completes, passing each progress percentage
    /// to `on_progress` in order.
    pub fn wait_with<F: FnMut(u8)>(self, mut on_progress: F) -> Result<RunSummary, GenerateError> {
        for event in self.events.iter() {
            match event {
                GenerationEvent::Progress(p) => on_progress(p),
                GenerationEvent::Completed(outcome) => return outcome,
            }
        }
        // Channel closed without a completion event: the worker died.
        Err(GenerateError::WorkerPanicked)
    }
}

// ── Generator ────────────────────────────────────────────────────

struct InFlight {
    run_id: u64,
    thread: JoinHandle<WorkerOutput>,
}

/// Maze generator running each job on a background thread.
///
/// # Examples
///
/// ```
/// use mazewright_engine::{GenerationRequest, Generator, GeneratorConfig};
///
/// let config = GeneratorConfig { seed: Some(7), ..GeneratorConfig::default() };
/// let mut generator = Generator::new(config).unwrap();
/// let maze = generator.generate_blocking(GenerationRequest::new(8, 8)).unwrap();
/// assert_eq!(maze.grid().open_edge_count(), 63);
/// assert!(maze.origin().is_origin());
/// ```
pub struct Generator {
    config: GeneratorConfig,
    seed: u64,
    /// `None` while a worker owns it.
    rng: Option<ChaCha8Rng>,
    in_flight: Option<InFlight>,
    maze: Option<Maze>,
    last_error: Option<GenerateError>,
    runs: u64,
}

impl Generator {
    /// Create a generator. Validates `config` and seeds the RNG.
    pub fn new(config: GeneratorConfig) -> Result<Self, ConfigError> {
        config.validate()?;
        let seed = config.seed.unwrap_or_else(rand::random);
        Ok(Self {
            config,
            seed,
            rng: Some(ChaCha8Rng::seed_from_u64(seed)),
            in_flight: None,
            maze: None,
            last_error: None,
            runs: 0,
        })
    }

    /// The seed actually in use (drawn at construction if not configured).
    pub fn seed(&self) -> u64 {
        self.seed
    }

    /// The configuration this generator was built with.
    pub fn config(&self) -> &GeneratorConfig {
        &self.config
    }

    /// Current lifecycle state.
    pub fn state(&self) -> GeneratorState {
        if self.in_flight.is_some() {
            GeneratorState::Running
        } else if self.maze.is_some() {
            GeneratorState::Completed
        } else {
            GeneratorState::Idle
        }
    }

    /// `true` if a worker is still carving.
    pub fn is_busy(&self) -> bool {
        self.in_flight
            .as_ref()
            .is_some_and(|f| !f.thread.is_finished())
    }

    /// The most recently collected maze, if the last run succeeded.
    pub fn maze(&self) -> Option<&Maze> {
        self.maze.as_ref()
    }

    /// Start a run in the background and return its event handle.
    ///
    /// Rejects the request with
    /// [`GenerateError::ConcurrentGenerationRequested`] while a previous
    /// run is still carving; the running job is unaffected. Invalid
    /// requests are rejected before anything else happens, so a rejected
    /// request never changes the generator's state.
    ///
    /// A previous run that has finished but was never collected is
    /// collected first and its maze discarded. Starting a run invalidates
    /// the current maze.
    pub fn generate(&mut self, request: GenerationRequest) -> Result<GenerationHandle, GenerateError> {
        if let Some(run) = &self.in_flight {
            if !run.thread.is_finished() {
                warn!(running = run.run_id, "generation requested while a run is in flight");
                return Err(GenerateError::ConcurrentGenerationRequested);
            }
        }
        request.validate(self.config.max_cells)?;

        if let Some(run) = &self.in_flight {
            debug!(run_id = run.run_id, "collecting stale run before starting a new one");
            let _ = self.finish();
        }

        let name = self.config.thread_name.clone();
        self.launch(request, move |worker| {
            thread::Builder::new()
                .name(name)
                .spawn(move || worker.run())
        })
    }

    /// Hand a worker for `request` to `spawn`.
    ///
    /// The worker gets a copy of the RNG; the generator's own RNG is only
    /// released once the spawn succeeded, so a failed spawn leaves the
    /// seed sequence where it was.
    fn launch<S>(&mut self, request: GenerationRequest, spawn: S) -> Result<GenerationHandle, GenerateError>
    where
        S: FnOnce(GenerationWorker) -> io::Result<JoinHandle<WorkerOutput>>,
    {
        let rng = self.take_rng();
        let run_id = self.runs + 1;
        let (tx, rx) = crossbeam_channel::unbounded();
        let worker = GenerationWorker::new(
            run_id,
            request,
            self.config.algorithm,
            self.config.progress,
            rng.clone(),
            tx,
        );
        let thread = match spawn(worker) {
            Ok(thread) => thread,
            Err(e) => {
                warn!(run_id, error = %e, "failed to spawn generation worker");
                self.rng = Some(rng);
                return Err(GenerateError::ThreadSpawnFailed {
                    reason: e.to_string(),
                });
            }
        };

        self.runs = run_id;
        self.maze = None;
        self.last_error = None;
        self.in_flight = Some(InFlight { run_id, thread });
        Ok(GenerationHandle { run_id, events: rx })
    }

    /// Wait for the current run, publish its maze, and return it.
    ///
    /// Blocks until the worker exits. Calling `finish` again without a new
    /// run returns the same maze (or the same error).
    pub fn finish(&mut self) -> Result<&Maze, GenerateError> {
        let Some(run) = self.in_flight.take() else {
            return match (&self.maze, &self.last_error) {
                (Some(maze), _) => Ok(maze),
                (None, Some(e)) => Err(e.clone()),
                (None, None) => Err(GenerateError::NothingToCollect),
            };
        };

        let output = match run.thread.join() {
            Ok(output) => output,
            Err(_) => {
                warn!(run_id = run.run_id, "generation worker panicked");
                self.last_error = Some(GenerateError::WorkerPanicked);
                return Err(GenerateError::WorkerPanicked);
            }
        };
        self.rng = Some(output.rng);
        match output.result {
            Ok(maze) => Ok(self.maze.insert(maze)),
            Err(e) => {
                self.last_error = Some(e.clone());
                Err(e)
            }
        }
    }

    /// Run to completion on the worker thread and return the maze.
    pub fn generate_blocking(&mut self, request: GenerationRequest) -> Result<&Maze, GenerateError> {
        let handle = self.generate(request)?;
        // The completion event carries the same outcome `finish` reports.
        let _ = handle.wait();
        self.finish()
    }

    /// The generator's RNG, reseeding deterministically if a worker took
    /// it and never gave it back.
    fn take_rng(&mut self) -> ChaCha8Rng {
        self.rng.take().unwrap_or_else(|| {
            debug!(runs = self.runs, "reseeding lost rng");
            ChaCha8Rng::seed_from_u64(self.seed ^ self.runs)
        })
    }
}

impl Drop for Generator {
    fn drop(&mut self) {
        // No cancellation: an in-flight run always finishes.
        if let Some(run) = self.in_flight.take() {
            debug!(run_id = run.run_id, "joining in-flight run on drop");
            let _ = run.thread.join();
        }
    }
}

impl std::fmt::Debug for Generator {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Generator")
            .field("seed", &self.seed)
            .field("algorithm", &self.config.algorithm)
            .field("state", &self.state())
            .field("runs", &self.runs)
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use mazewright_carve::{Algorithm, FrontierOrder};
    use mazewright_core::CellId;

    fn seeded(seed: u64) -> Generator {
        Generator::new(GeneratorConfig {
            seed: Some(seed),
            ..GeneratorConfig::default()
        })
        .unwrap()
    }

    #[test]
    fn starts_idle() {
        let g = seeded(1);
        assert_eq!(g.state(), GeneratorState::Idle);
        assert!(g.maze().is_none());
        assert!(!g.is_busy());
        assert_eq!(g.seed(), 1);
    }

    #[test]
    fn invalid_config_rejected() {
        let cfg = GeneratorConfig {
            max_cells: 0,
            ..GeneratorConfig::default()
        };
        assert!(matches!(Generator::new(cfg), Err(ConfigError::MaxCellsZero)));
    }

    #[test]
    fn finish_without_run() {
        let mut g = seeded(1);
        assert!(matches!(g.finish(), Err(GenerateError::NothingToCollect)));
    }

    #[test]
    fn single_cell_scenario() {
        let mut g = seeded(3);
        let maze = g.generate_blocking(GenerationRequest::new(1, 1)).unwrap();
        assert_eq!(maze.grid().open_edge_count(), 0);
        assert_eq!(maze.origin_id(), CellId(0));
        assert_eq!(maze.terminus_id(), Some(CellId(0)));
        assert_eq!(maze.distance(CellId(0)), Some(0));
        assert_eq!(g.state(), GeneratorState::Completed);
    }

    #[test]
    fn lifecycle_running_then_completed() {
        let mut g = seeded(4);
        let handle = g.generate(GenerationRequest::new(6, 6)).unwrap();
        assert_eq!(handle.run_id(), 1);
        assert_eq!(g.state(), GeneratorState::Running);
        assert!(g.maze().is_none());

        let summary = handle.wait().unwrap();
        let maze = g.finish().unwrap();
        assert_eq!(maze.origin_id(), summary.origin);
        assert_eq!(maze.run_id(), 1);
        assert_eq!(g.state(), GeneratorState::Completed);

        // Idempotent.
        assert_eq!(g.finish().unwrap().run_id(), 1);
    }

    #[test]
    fn invalid_request_leaves_state_untouched() {
        let mut g = seeded(5);
        g.generate_blocking(GenerationRequest::new(3, 3)).unwrap();
        assert_eq!(
            g.generate(GenerationRequest::new(0, 3)).unwrap_err(),
            GenerateError::InvalidDimensions {
                width: 0,
                height: 3
            }
        );
        assert_eq!(g.state(), GeneratorState::Completed);
        assert_eq!(g.maze().unwrap().width(), 3);
    }

    #[test]
    fn too_many_cells_rejected() {
        let mut g = Generator::new(GeneratorConfig {
            seed: Some(1),
            max_cells: 10,
            ..GeneratorConfig::default()
        })
        .unwrap();
        assert!(matches!(
            g.generate(GenerationRequest::new(4, 4)),
            Err(GenerateError::TooManyCells { requested: 16, .. })
        ));
        assert_eq!(g.state(), GeneratorState::Idle);
    }

    #[test]
    fn same_seed_reproduces_sequence() {
        let mut a = seeded(99);
        let mut b = seeded(99);
        for _ in 0..3 {
            let ma = a.generate_blocking(GenerationRequest::new(7, 5)).unwrap().clone();
            let mb = b.generate_blocking(GenerationRequest::new(7, 5)).unwrap();
            assert_eq!(ma.grid(), mb.grid());
        }
    }

    #[test]
    fn rng_carries_across_runs() {
        let mut g = seeded(12);
        let first = g
            .generate_blocking(GenerationRequest::new(10, 10))
            .unwrap()
            .grid()
            .clone();
        let second = g
            .generate_blocking(GenerationRequest::new(10, 10))
            .unwrap()
            .grid()
            .clone();
        assert_ne!(first, second);
        assert_eq!(g.maze().unwrap().run_id(), 2);
    }

    #[test]
    fn frontier_algorithm_has_no_terminus() {
        let mut g = Generator::new(GeneratorConfig {
            seed: Some(8),
            algorithm: Algorithm::Frontier(FrontierOrder::Fifo),
            ..GeneratorConfig::default()
        })
        .unwrap();
        let maze = g.generate_blocking(GenerationRequest::new(5, 4)).unwrap();
        assert!(maze.terminus().is_none());
        assert_eq!(maze.grid().open_edge_count(), 19);
        assert_eq!(maze.algorithm(), Algorithm::Frontier(FrontierOrder::Fifo));
    }

    #[test]
    fn unreaped_finished_run_is_collected_on_next_generate() {
        let mut g = seeded(6);
        let handle = g.generate(GenerationRequest::new(2, 2)).unwrap();
        handle.wait().unwrap();
        // Wait for the thread itself to exit, not just the event.
        while g.is_busy() {
            std::thread::yield_now();
        }
        let second = g.generate(GenerationRequest::new(3, 3)).unwrap();
        assert_eq!(second.run_id(), 2);
        second.wait().unwrap();
        assert_eq!(g.finish().unwrap().width(), 3);
    }

    #[test]
    fn failed_spawn_keeps_seed_sequence() {
        let mut g = seeded(21);
        let err = g
            .launch(GenerationRequest::new(4, 4), |_| {
                Err(io::Error::other("no threads left"))
            })
            .unwrap_err();
        assert!(matches!(err, GenerateError::ThreadSpawnFailed { .. }));
        assert_eq!(g.state(), GeneratorState::Idle);

        let after = g
            .generate_blocking(GenerationRequest::new(6, 6))
            .unwrap()
            .clone();
        let fresh = seeded(21)
            .generate_blocking(GenerationRequest::new(6, 6))
            .unwrap()
            .clone();
        assert_eq!(after.run_id(), 1);
        assert_eq!(after.grid(), fresh.grid());
        assert_eq!(after.origin_id(), fresh.origin_id());
    }

    #[test]
    fn debug_shows_state() {
        let g = seeded(2);
        let s = format!("{g:?}");
        assert!(s.contains("Idle"));
        assert!(s.contains("seed: 2"));
    }
}
