//! Progress reporting from inside a carving loop.

/// Receives progress percentages from a carver.
///
/// Carvers call [`progress`](ProgressSink::progress) once after choosing
/// the origin and once after every step. Values never decrease within a
/// run and the last one is always 100.
pub trait ProgressSink {
    /// Report completion as an integer percentage in `0..=100`.
    fn progress(&mut self, percent: u8);
}

impl<F: FnMut(u8)> ProgressSink for F {
    fn progress(&mut self, percent: u8) {
        self(percent)
    }
}

/// Discards all progress reports.
#[derive(Clone, Copy, Debug, Default)]
pub struct NullSink;

impl ProgressSink for NullSink {
    fn progress(&mut self, _percent: u8) {}
}

/// `100 * done / total`, truncated. `total == 0` counts as finished.
pub fn percent(done: usize, total: usize) -> u8 {
    if total == 0 {
        return 100;
    }
    let p = (done.min(total) as u128 * 100) / total as u128;
    p as u8
}
