//! Messages from the generation worker to its caller.

use crossbeam_channel::Sender;
use mazewright_carve::ProgressSink;
use mazewright_core::CellId;

use crate::config::ProgressGranularity;
use crate::error::GenerateError;
use crate::metrics::RunMetrics;

/// One message on a run's event channel.
///
/// A run emits zero or more `Progress` events with non-decreasing
/// percentages, followed by exactly one `Completed`.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum GenerationEvent {
    /// Percentage of cells carved so far, `0..=100`.
    Progress(u8),
    /// The run finished. `Err` carries the failure; the partial grid is
    /// discarded.
    Completed(Result<RunSummary, GenerateError>),
}

impl GenerationEvent {
    /// `true` for the terminal event.
    pub fn is_completed(&self) -> bool {
        matches!(self, GenerationEvent::Completed(_))
    }
}

/// What a successful run produced, without the grid itself.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct RunSummary {
    /// Sequence number of the run on its generator, starting at 1.
    pub run_id: u64,
    /// Start cell.
    pub origin: CellId,
    /// End cell, for algorithms that choose one.
    pub terminus: Option<CellId>,
    /// Timing and counters.
    pub metrics: RunMetrics,
}

/// Forwards carver progress onto the event channel.
///
/// Sends are best-effort: if the caller dropped its receiver the run
/// still completes.
pub(crate) struct ChannelSink<'a> {
    tx: &'a Sender<GenerationEvent>,
    granularity: ProgressGranularity,
    last: Option<u8>,
    sent: u64,
}

impl<'a> ChannelSink<'a> {
    pub fn new(tx: &'a Sender<GenerationEvent>, granularity: ProgressGranularity) -> Self {
        Self {
            tx,
            granularity,
            last: None,
            sent: 0,
        }
    }

    /// Progress events sent so far.
    pub fn sent(&self) -> u64 {
        self.sent
    }
}

impl ProgressSink for ChannelSink<'_> {
    fn progress(&mut self, percent: u8) {
        if self.granularity == ProgressGranularity::PercentChange && self.last == Some(percent) {
            return;
        }
        self.last = Some(percent);
        if self.tx.send(GenerationEvent::Progress(percent)).is_ok() {
            self.sent += 1;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn drain(rx: &crossbeam_channel::Receiver<GenerationEvent>) -> Vec<GenerationEvent> {
        rx.try_iter().collect()
    }

    #[test]
    fn every_step_forwards_repeats() {
        let (tx, rx) = crossbeam_channel::unbounded();
        let mut sink = ChannelSink::new(&tx, ProgressGranularity::EveryStep);
        for p in [10, 10, 20] {
            sink.progress(p);
        }
        assert_eq!(sink.sent(), 3);
        assert_eq!(
            drain(&rx),
            vec![
                GenerationEvent::Progress(10),
                GenerationEvent::Progress(10),
                GenerationEvent::Progress(20),
            ]
        );
    }

    #[test]
    fn percent_change_drops_repeats_only() {
        let (tx, rx) = crossbeam_channel::unbounded();
        let mut sink = ChannelSink::new(&tx, ProgressGranularity::PercentChange);
        for p in [0, 0, 5, 5, 5, 100] {
            sink.progress(p);
        }
        assert_eq!(sink.sent(), 3);
        assert_eq!(
            drain(&rx),
            vec![
                GenerationEvent::Progress(0),
                GenerationEvent::Progress(5),
                GenerationEvent::Progress(100),
            ]
        );
    }

    #[test]
    fn dropped_receiver_is_tolerated() {
        let (tx, rx) = crossbeam_channel::unbounded();
        drop(rx);
        let mut sink = ChannelSink::new(&tx, ProgressGranularity::EveryStep);
        sink.progress(50);
        assert_eq!(sink.sent(), 0);
    }
}
