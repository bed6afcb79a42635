//! Averaged start/stop timer.
//!
//! Provides [`AvgTimer`], which measures repeated start/stop intervals and keeps
//! the most recent ones in a fixed-size ring buffer, and [`TimingStats`], a
//! summary of the buffered samples suitable for logging.

use crate::time::{TimeInstant, TimeSource, millis_f32};
use heapless::Vec;

/// Default number of samples kept for averaging.
pub const SAMPLE_BUFFER_SIZE: usize = 64;

/// Summary of the samples currently held by a timer.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct TimingStats {
    /// Number of samples summarised.
    pub count: usize,
    /// Mean sample in milliseconds.
    pub average_ms: f32,
    /// Shortest sample in milliseconds.
    pub min_ms: f32,
    /// Longest sample in milliseconds.
    pub max_ms: f32,
}

/// Averages how many milliseconds elapse between `start` and `stop`.
///
/// Each `stop` records one sample into a ring buffer of `N` slots; once the
/// ring is full the oldest sample is overwritten. The average is only computed
/// when asked for.
///
/// # Type Parameters
/// * `'t` - Lifetime of the time source reference
/// * `I` - Time instant type
/// * `T` - Time source implementation type
/// * `N` - Ring buffer capacity (defaults to [`SAMPLE_BUFFER_SIZE`])
pub struct AvgTimer<'t, I: TimeInstant, T: TimeSource<I>, const N: usize = SAMPLE_BUFFER_SIZE> {
    time_source: &'t T,
    start_time: Option<I>,
    samples: [f32; N],
    write_index: usize,
    sample_count: usize,
}

impl<'t, I: TimeInstant, T: TimeSource<I>, const N: usize> AvgTimer<'t, I, T, N> {
    /// Creates a timer with no samples that has not been started.
    pub fn new(time_source: &'t T) -> Self {
        Self {
            time_source,
            start_time: None,
            samples: [0.0; N],
            write_index: 0,
            sample_count: 0,
        }
    }

    /// Starts (or restarts) the timer. A previous unmatched start is discarded.
    pub fn start(&mut self) {
        self.start_time = Some(self.time_source.now());
    }

    /// Records the time since the last `start` as a sample.
    ///
    /// The timer keeps running from the same start, so consecutive stops
    /// measure from the same point.
    ///
    /// # Returns
    /// * `Some(ms)` - The recorded sample in milliseconds
    /// * `None` - The timer was never started; nothing is recorded
    pub fn stop(&mut self) -> Option<f32> {
        let start = self.start_time?;
        let elapsed_ms = millis_f32(self.time_source.now().duration_since(start));
        self.record(elapsed_ms);
        Some(elapsed_ms)
    }

    /// Average sample in milliseconds, or `0.0` when there are no samples.
    pub fn average_ms(&self) -> f32 {
        if self.sample_count == 0 {
            return 0.0;
        }

        // Sum fractions of the mean rather than dividing one large total.
        let count = self.sample_count as f32;
        self.samples[..self.sample_count]
            .iter()
            .fold(0.0, |acc, sample| acc + sample / count)
    }

    /// Average sample in seconds, or `0.0` when there are no samples.
    pub fn average_secs(&self) -> f32 {
        self.average_ms() / 1000.0
    }

    /// Drops all samples. The start time is kept.
    pub fn clear(&mut self) {
        self.write_index = 0;
        self.sample_count = 0;
    }

    /// Number of samples currently held (at most `N`).
    pub fn sample_count(&self) -> usize {
        self.sample_count
    }

    /// Returns true if no samples are held.
    pub fn is_empty(&self) -> bool {
        self.sample_count == 0
    }

    /// The most recently recorded sample in milliseconds.
    pub fn last_ms(&self) -> Option<f32> {
        if self.sample_count == 0 {
            return None;
        }
        let idx = (self.write_index + N - 1) % N;
        Some(self.samples[idx])
    }

    /// Held samples in recording order, oldest first.
    pub fn samples(&self) -> Vec<f32, N> {
        let mut ordered = Vec::new();
        let (newer, older) = if self.sample_count < N {
            (&self.samples[..self.sample_count], &[][..])
        } else {
            self.samples.split_at(self.write_index)
        };
        for &sample in older.iter().chain(newer) {
            let _ = ordered.push(sample);
        }
        ordered
    }

    /// Summary of the held samples, or `None` when there are none.
    pub fn stats(&self) -> Option<TimingStats> {
        let held = &self.samples[..self.sample_count];
        let (&first, rest) = held.split_first()?;
        let (min_ms, max_ms) = rest
            .iter()
            .fold((first, first), |(lo, hi), &s| (lo.min(s), hi.max(s)));

        Some(TimingStats {
            count: self.sample_count,
            average_ms: self.average_ms(),
            min_ms,
            max_ms,
        })
    }

    fn record(&mut self, elapsed_ms: f32) {
        if N == 0 {
            return;
        }
        self.samples[self.write_index] = elapsed_ms;
        self.write_index = (self.write_index + 1) % N;
        if self.sample_count < N {
            self.sample_count += 1;
        }
    }
}
