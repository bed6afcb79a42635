//! Standard library clocks.
//!
//! Two [`TimeSource`] implementations are provided:
//! - [`MonotonicClock`]: `std::time::Instant`, high resolution and never steps backwards.
//! - [`WallClock`]: `std::time::SystemTime`, coarser and subject to wall-clock adjustments.
//!
//! [`DefaultClock`] picks one of them at build time: the monotonic clock with the
//! `hi-res` feature, the wall clock otherwise.

use crate::time::{TimeInstant, TimeSource};
use core::time::Duration;
use std::time::{Instant, SystemTime};

impl TimeInstant for Instant {
    type Duration = Duration;

    fn duration_since(&self, earlier: Self) -> Self::Duration {
        Instant::saturating_duration_since(self, earlier)
    }

    fn checked_add(self, duration: Self::Duration) -> Option<Self> {
        Instant::checked_add(&self, duration)
    }
}

impl TimeInstant for SystemTime {
    type Duration = Duration;

    fn duration_since(&self, earlier: Self) -> Self::Duration {
        // Err means the wall clock was set back between the two readings.
        SystemTime::duration_since(self, earlier).unwrap_or(Duration::ZERO)
    }

    fn checked_add(self, duration: Self::Duration) -> Option<Self> {
        SystemTime::checked_add(&self, duration)
    }
}

/// High-resolution monotonic clock backed by [`Instant`].
#[derive(Debug, Clone, Copy, Default)]
pub struct MonotonicClock;

impl TimeSource<Instant> for MonotonicClock {
    fn now(&self) -> Instant {
        Instant::now()
    }
}

/// Wall clock backed by [`SystemTime`].
#[derive(Debug, Clone, Copy, Default)]
pub struct WallClock;

impl TimeSource<SystemTime> for WallClock {
    fn now(&self) -> SystemTime {
        SystemTime::now()
    }
}

/// Clock selected by the `hi-res` feature.
#[cfg(feature = "hi-res")]
pub type DefaultClock = MonotonicClock;

/// Instant type produced by [`DefaultClock`].
#[cfg(feature = "hi-res")]
pub type DefaultInstant = Instant;

/// Clock selected by the `hi-res` feature.
#[cfg(not(feature = "hi-res"))]
pub type DefaultClock = WallClock;

/// Instant type produced by [`DefaultClock`].
#[cfg(not(feature = "hi-res"))]
pub type DefaultInstant = SystemTime;
