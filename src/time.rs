//! Time abstraction traits for platform-agnostic timing.

use core::time::Duration;

/// Trait for abstracting time sources.
pub trait TimeSource<I: TimeInstant> {
    /// Returns the current time instant.
    fn now(&self) -> I;
}

/// Trait abstraction for duration types.
pub trait TimeDuration: Copy + PartialEq {
    /// Zero duration constant.
    const ZERO: Self;

    /// Converts duration to milliseconds.
    fn as_millis(&self) -> u64;

    /// Converts duration to microseconds.
    ///
    /// Defaults to millisecond resolution. Override for finer clocks so the
    /// instruments keep sub-millisecond precision.
    fn as_micros(&self) -> u64 {
        self.as_millis().saturating_mul(1000)
    }

    /// Converts duration to fractional seconds.
    fn as_secs_f32(&self) -> f32 {
        self.as_micros() as f32 / 1_000_000.0
    }

    /// Creates duration from milliseconds.
    fn from_millis(millis: u64) -> Self;

    /// Saturating subtraction (returns ZERO on underflow).
    fn saturating_sub(self, other: Self) -> Self;
}

/// Trait abstraction for instant types.
pub trait TimeInstant: Copy {
    /// Duration type for this instant.
    type Duration: TimeDuration;

    /// Calculates duration since an earlier instant.
    ///
    /// Must return `ZERO` when `earlier` is actually later than `self`, so a
    /// clock stepping backwards never yields a negative interval.
    fn duration_since(&self, earlier: Self) -> Self::Duration;

    /// Adds duration to instant, returns None on overflow.
    fn checked_add(self, duration: Self::Duration) -> Option<Self>;
}

impl TimeDuration for Duration {
    const ZERO: Self = Duration::new(0, 0);

    fn as_millis(&self) -> u64 {
        u64::try_from(Duration::as_millis(self)).unwrap_or(u64::MAX)
    }

    fn as_micros(&self) -> u64 {
        u64::try_from(Duration::as_micros(self)).unwrap_or(u64::MAX)
    }

    fn as_secs_f32(&self) -> f32 {
        Duration::as_secs_f32(self)
    }

    fn from_millis(millis: u64) -> Self {
        Duration::from_millis(millis)
    }

    fn saturating_sub(self, other: Self) -> Self {
        Duration::saturating_sub(self, other)
    }
}

/// Elapsed time in fractional milliseconds.
pub(crate) fn millis_f32<D: TimeDuration>(duration: D) -> f32 {
    duration.as_micros() as f32 / 1000.0
}
