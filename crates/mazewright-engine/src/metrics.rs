//! Per-run metrics for the generator.

use mazewright_carve::CarveStats;

/// Timing and loop counters collected during one generation run.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct RunMetrics {
    /// Counters reported by the carver.
    pub stats: CarveStats,
    /// Wall-clock time from grid allocation to the end of carving, in
    /// microseconds.
    pub elapsed_us: u64,
    /// Progress events actually sent on the channel.
    pub progress_events: u64,
}
