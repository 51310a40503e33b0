//! Generator configuration, per-run requests, and validation errors.
//!
//! [`GeneratorConfig`] is fixed for the lifetime of a
//! [`Generator`](crate::generator::Generator); [`GenerationRequest`]
//! describes a single run.

use std::error::Error;
use std::fmt;

use mazewright_carve::Algorithm;

use crate::error::GenerateError;

// ── ProgressGranularity ────────────────────────────────────────────

/// Which progress reports reach the event channel.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum ProgressGranularity {
    /// One event per carving step. Large grids produce one event per
    /// cell or more.
    #[default]
    EveryStep,
    /// Skip a report when it repeats the previous percentage.
    PercentChange,
}

// ── GeneratorConfig ───────────────────────────────────────────────

/// Configuration for a [`Generator`](crate::generator::Generator).
#[derive(Clone, Debug)]
pub struct GeneratorConfig {
    /// RNG seed. `None` draws one from the thread RNG at construction.
    /// The same seed and request sequence reproduce the same mazes.
    pub seed: Option<u64>,
    /// Carving algorithm. Default: depth-first.
    pub algorithm: Algorithm,
    /// Progress event filtering. Default: every step.
    pub progress: ProgressGranularity,
    /// Largest `width * height` a request may ask for. Default: 16M.
    pub max_cells: usize,
    /// Name given to the worker thread. Default: `mazewright-gen`.
    pub thread_name: String,
}

impl Default for GeneratorConfig {
    fn default() -> Self {
        Self {
            seed: None,
            algorithm: Algorithm::default(),
            progress: ProgressGranularity::default(),
            max_cells: 1 << 24,
            thread_name: "mazewright-gen".into(),
        }
    }
}

impl GeneratorConfig {
    /// Check structural invariants.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.max_cells == 0 {
            return Err(ConfigError::MaxCellsZero);
        }
        if self.thread_name.is_empty() || self.thread_name.contains('\0') {
            return Err(ConfigError::InvalidThreadName {
                name: self.thread_name.clone(),
            });
        }
        Ok(())
    }
}

// ── GenerationRequest ─────────────────────────────────────────────

/// Parameters for one generation run.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct GenerationRequest {
    /// Columns.
    pub width: u32,
    /// Rows.
    pub height: u32,
    /// Pixel size of a cell, used by [`Maze::bounds_of`](crate::maze::Maze::bounds_of).
    /// Default: 16.
    pub cell_size: u32,
}

impl GenerationRequest {
    /// A `width × height` request with the default cell size.
    pub fn new(width: u32, height: u32) -> Self {
        Self {
            width,
            height,
            cell_size: 16,
        }
    }

    /// Override the cell pixel size.
    pub fn with_cell_size(mut self, cell_size: u32) -> Self {
        self.cell_size = cell_size;
        self
    }

    /// Total cells requested.
    pub fn cell_count(&self) -> u64 {
        u64::from(self.width) * u64::from(self.height)
    }

    /// Check the request against a generator's limits.
    pub(crate) fn validate(&self, max_cells: usize) -> Result<(), GenerateError> {
        if self.width == 0 || self.height == 0 {
            return Err(GenerateError::InvalidDimensions {
                width: self.width,
                height: self.height,
            });
        }
        if self.cell_count() > max_cells as u64 {
            return Err(GenerateError::TooManyCells {
                requested: self.cell_count(),
                max: max_cells,
            });
        }
        if self.cell_size == 0 {
            return Err(GenerateError::InvalidCellSize);
        }
        Ok(())
    }
}

// ── ConfigError ────────────────────────────────────────────────────

/// Errors detected by [`GeneratorConfig::validate()`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ConfigError {
    /// `max_cells` is zero, so no request could ever be served.
    MaxCellsZero,
    /// The worker thread name is empty or contains a NUL byte.
    InvalidThreadName {
        /// The rejected name.
        name: String,
    },
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::MaxCellsZero => write!(f, "max_cells must be at least 1"),
            Self::InvalidThreadName { name } => write!(f, "invalid worker thread name {name:?}"),
        }
    }
}

impl Error for ConfigError {}
