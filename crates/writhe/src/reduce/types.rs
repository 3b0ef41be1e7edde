//! Engine configuration and the progress-sink capability.

use std::time::{Duration, Instant};

/// How row partial sums are merged into the total.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum Reduction {
    /// Row partials are collected by index and folded sequentially in row order.
    /// Bit-identical for any worker count.
    #[default]
    Ordered,
    /// Each worker adds its row partial to a mutex-guarded accumulator once per
    /// outer iteration. Merge order follows scheduling.
    Locked,
}

/// Engine configuration.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct WritheCfg {
    /// Dedicated worker count (must be positive); `None` runs on rayon's global pool.
    pub threads: Option<usize>,
    /// Minimum wall-clock time between progress signals per worker.
    /// `None` or zero disables progress reporting.
    pub progress_interval: Option<Duration>,
    pub reduction: Reduction,
}

/// Receiver of coarse progress signals `(done, total)`.
///
/// Called concurrently from several workers; interleaved or repeated values are
/// expected. Implementations must not influence the computation.
pub trait ProgressSink: Sync {
    fn report(&self, done: usize, total: usize);
}

impl<F: Fn(usize, usize) + Sync> ProgressSink for F {
    #[inline]
    fn report(&self, done: usize, total: usize) {
        self(done, total)
    }
}

/// Sink that drops every signal.
#[derive(Clone, Copy, Debug, Default)]
pub struct NoProgress;

impl ProgressSink for NoProgress {
    #[inline]
    fn report(&self, _done: usize, _total: usize) {}
}

/// Sink that emits a `tracing` event per signal.
#[derive(Clone, Copy, Debug, Default)]
pub struct LogProgress;

impl ProgressSink for LogProgress {
    fn report(&self, done: usize, total: usize) {
        tracing::info!(done, total, "progress");
    }
}

/// Per-worker rate limiter for progress signals.
///
/// A disabled clock never reads the system timer.
#[derive(Clone, Copy, Debug)]
pub struct ProgressClock {
    interval: Option<Duration>,
    last: Option<Instant>,
}

impl ProgressClock {
    pub fn new(interval: Option<Duration>) -> Self {
        let interval = interval.filter(|d| !d.is_zero());
        Self {
            last: interval.map(|_| Instant::now()),
            interval,
        }
    }

    #[inline]
    pub fn is_enabled(&self) -> bool {
        self.interval.is_some()
    }

    /// Report `(done, total)` to `sink` if more than the interval elapsed since
    /// this clock last reported (or was created).
    #[inline]
    pub fn tick<S: ProgressSink + ?Sized>(&mut self, done: usize, total: usize, sink: &S) {
        if let (Some(every), Some(last)) = (self.interval, self.last.as_mut()) {
            let now = Instant::now();
            if now.duration_since(*last) > every {
                sink.report(done, total);
                *last = now;
            }
        }
    }
}
