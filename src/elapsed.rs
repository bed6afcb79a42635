//! Time elapsed since an event.

use crate::time::{TimeDuration, TimeInstant, TimeSource};

/// Reports how long ago an event happened.
///
/// The event time is recorded at construction and on every [`reset`](Self::reset).
pub struct ElapsedTimer<'t, I: TimeInstant, T: TimeSource<I>> {
    time_source: &'t T,
    event_time: I,
}

impl<'t, I: TimeInstant, T: TimeSource<I>> ElapsedTimer<'t, I, T> {
    /// Creates a timer whose event time is now.
    pub fn new(time_source: &'t T) -> Self {
        Self {
            time_source,
            event_time: time_source.now(),
        }
    }

    /// Marks now as the event time.
    pub fn reset(&mut self) {
        self.event_time = self.time_source.now();
    }

    /// Seconds elapsed since the event.
    pub fn elapsed(&self) -> f32 {
        self.elapsed_duration().as_secs_f32()
    }

    /// Duration elapsed since the event.
    pub fn elapsed_duration(&self) -> I::Duration {
        self.time_source.now().duration_since(self.event_time)
    }
}
