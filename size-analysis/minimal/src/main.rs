#![no_std]
#![no_main]

use cortex_m_rt::entry;
use panic_halt as _;
use tick_instruments::{
    AvgTimer, Countdown, Counter, ElapsedTimer, MovingAverage, TimeDuration, TimeInstant,
    TimeSource,
};

// ============================================================================
// Minimal Time Types
// ============================================================================

/// Minimal 32-bit millisecond duration
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub struct Duration32(u32);

impl TimeDuration for Duration32 {
    const ZERO: Self = Duration32(0);

    fn as_millis(&self) -> u64 {
        self.0 as u64
    }

    fn from_millis(millis: u64) -> Self {
        Duration32(millis as u32)
    }

    fn saturating_sub(self, other: Self) -> Self {
        Duration32(self.0.saturating_sub(other.0))
    }
}

/// Minimal 32-bit millisecond instant
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub struct Instant32(u32);

impl TimeInstant for Instant32 {
    type Duration = Duration32;

    fn duration_since(&self, earlier: Self) -> Self::Duration {
        Duration32(self.0.saturating_sub(earlier.0))
    }

    fn checked_add(self, duration: Self::Duration) -> Option<Self> {
        self.0.checked_add(duration.0).map(Instant32)
    }
}

// ============================================================================
// Minimal TimeSource Implementation
// ============================================================================

pub struct MinimalTimeSource;

impl TimeSource<Instant32> for MinimalTimeSource {
    fn now(&self) -> Instant32 {
        Instant32(core::hint::black_box(0))
    }
}

// ============================================================================
// Instrument Usage
// ============================================================================

// This function uses the library to prevent optimizer from removing code
#[inline(never)]
fn exercise_instruments() {
    let time_source = MinimalTimeSource;

    let elapsed = ElapsedTimer::<Instant32, MinimalTimeSource>::new(&time_source);
    core::hint::black_box(elapsed.elapsed());

    let mut countdown = Countdown::<Instant32, MinimalTimeSource>::new(&time_source, 5);
    countdown.reset();
    core::hint::black_box((countdown.is_expired(), countdown.remaining()));

    // Default 64-sample ring
    let mut timer = AvgTimer::<Instant32, MinimalTimeSource>::new(&time_source);
    timer.start();
    let _ = timer.stop();
    core::hint::black_box((timer.average_ms(), timer.stats(), timer.samples()));

    // Small ring for tight RAM budgets
    let mut counter = Counter::<Instant32, MinimalTimeSource, 8>::new(&time_source);
    counter.tick();
    counter.tick();
    core::hint::black_box(counter.rate());

    let mut average = MovingAverage::<Instant32, MinimalTimeSource>::new(&time_source, 2);
    average.push(1.0);
    average.push(2.0);
    core::hint::black_box(average.average());
}

#[entry]
fn main() -> ! {
    // Call test function to ensure all code is included
    exercise_instruments();

    // Halt - this is a size analysis binary, not meant to run
    loop {
        cortex_m::asm::nop();
    }
}
