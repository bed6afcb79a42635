//! Tick-rate counter.

use crate::avg_timer::{AvgTimer, SAMPLE_BUFFER_SIZE, TimingStats};
use crate::time::{TimeInstant, TimeSource};

/// Counts how often [`tick`](Self::tick) is called per second.
///
/// Every tick after the first closes the interval since the previous tick and
/// records it as one sample; the rate is the reciprocal of the average
/// interval. Intended for frequent events such as frames or loop iterations.
pub struct Counter<'t, I: TimeInstant, T: TimeSource<I>, const N: usize = SAMPLE_BUFFER_SIZE> {
    timer: AvgTimer<'t, I, T, N>,
    started: bool,
}

impl<'t, I: TimeInstant, T: TimeSource<I>, const N: usize> Counter<'t, I, T, N> {
    /// Creates a counter that has seen no ticks.
    pub fn new(time_source: &'t T) -> Self {
        Self {
            timer: AvgTimer::new(time_source),
            started: false,
        }
    }

    /// Call when the event being measured happens.
    pub fn tick(&mut self) {
        if self.started {
            self.timer.stop();
        }
        self.started = true;
        self.timer.start();
    }

    /// Ticks per second over the buffered intervals.
    ///
    /// Returns `0.0` until two ticks have been seen, or if the average
    /// interval is zero.
    pub fn rate(&self) -> f32 {
        let interval = self.timer.average_secs();
        if interval > 0.0 { 1.0 / interval } else { 0.0 }
    }

    /// Forgets all intervals and the last tick. The next tick starts afresh.
    pub fn reset(&mut self) {
        self.timer.clear();
        self.started = false;
    }

    /// Average time between ticks in milliseconds, `0.0` without samples.
    pub fn average_interval_ms(&self) -> f32 {
        self.timer.average_ms()
    }

    /// Number of buffered intervals.
    pub fn sample_count(&self) -> usize {
        self.timer.sample_count()
    }

    /// Summary of the buffered intervals.
    pub fn stats(&self) -> Option<TimingStats> {
        self.timer.stats()
    }
}
