//! One-shot countdown.

use crate::time::{TimeDuration, TimeInstant, TimeSource};

/// A countdown of a whole number of seconds.
///
/// Starts running at construction. Expiry is a pure function of the time
/// elapsed since the last start and the configured span, so querying it has no
/// side effects.
///
/// A span of zero expires as soon as any millisecond has passed; a negative
/// span is expired immediately.
///
/// # Type Parameters
/// * `'t` - Lifetime of the time source reference
/// * `I` - Time instant type
/// * `T` - Time source implementation type
pub struct Countdown<'t, I: TimeInstant, T: TimeSource<I>> {
    time_source: &'t T,
    start_time: I,
    span_ms: i64,
}

impl<'t, I: TimeInstant, T: TimeSource<I>> Countdown<'t, I, T> {
    /// Creates and starts a countdown of `seconds`.
    pub fn new(time_source: &'t T, seconds: i32) -> Self {
        Self {
            time_source,
            start_time: time_source.now(),
            span_ms: i64::from(seconds) * 1000,
        }
    }

    /// Returns true once more than the span has elapsed since the last start.
    pub fn is_expired(&self) -> bool {
        let elapsed = self.elapsed().as_millis();
        i64::try_from(elapsed).unwrap_or(i64::MAX) > self.span_ms
    }

    /// Restarts the countdown from now. The span is unchanged.
    pub fn reset(&mut self) {
        self.start_time = self.time_source.now();
    }

    /// Configured span in milliseconds.
    pub fn span_ms(&self) -> i64 {
        self.span_ms
    }

    /// Time left before the span is used up.
    ///
    /// Returns `ZERO` once the span has run out, and always for spans of zero
    /// or less.
    pub fn remaining(&self) -> I::Duration {
        match self.span() {
            Some(span) => span.saturating_sub(self.elapsed()),
            None => I::Duration::ZERO,
        }
    }

    /// Instant at which the span is used up.
    ///
    /// `None` for spans of zero or less, or if the instant is not representable.
    pub fn expires_at(&self) -> Option<I> {
        self.start_time.checked_add(self.span()?)
    }

    fn span(&self) -> Option<I::Duration> {
        u64::try_from(self.span_ms)
            .ok()
            .filter(|&ms| ms > 0)
            .map(I::Duration::from_millis)
    }

    fn elapsed(&self) -> I::Duration {
        self.time_source.now().duration_since(self.start_time)
    }
}
