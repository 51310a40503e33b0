//! Background maze generation for Mazewright.
//!
//! [`Generator`](generator::Generator) runs one carving job at a time on a
//! dedicated thread and streams [`GenerationEvent`](event::GenerationEvent)s
//! back to the caller over a channel. The finished maze is published as a
//! read-only [`Maze`](maze::Maze) once the run has been collected.

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![forbid(unsafe_code)]

pub mod config;
pub mod error;
pub mod event;
pub mod generator;
pub mod maze;
pub mod metrics;
mod worker;

pub use config::{ConfigError, GenerationRequest, GeneratorConfig, ProgressGranularity};
pub use error::GenerateError;
pub use event::{GenerationEvent, RunSummary};
pub use generator::{GenerationHandle, Generator, GeneratorState};
pub use maze::Maze;
pub use metrics::RunMetrics;
