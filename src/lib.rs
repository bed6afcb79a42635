#![cfg_attr(not(feature = "std"), no_std)]
#![doc = include_str!("../README.md")]

//! # Core Concepts
//!
//! - **`ElapsedTimer`**: Seconds elapsed since an event
//! - **`Countdown`**: One-shot countdown of a number of seconds
//! - **`AvgTimer`**: Average of repeated start/stop intervals over a ring buffer
//! - **`Counter`**: Ticks per second, averaged over the most recent intervals
//! - **`MovingAverage`**: Exponential moving average whose decay follows elapsed time
//! - **`TimeSource`**: Trait to implement for your timing system
//!
//! Every instrument borrows a `TimeSource`, so the same code runs against the
//! standard library clocks (feature `std`), an embedded timer, or a mock clock
//! in tests. None of the instruments synchronize; share them across threads
//! only behind your own lock.

pub mod avg_timer;
#[cfg(feature = "std")]
pub mod clock;
pub mod countdown;
pub mod counter;
pub mod elapsed;
pub mod moving_average;
pub mod time;

pub use avg_timer::{AvgTimer, SAMPLE_BUFFER_SIZE, TimingStats};
#[cfg(feature = "std")]
pub use clock::{DefaultClock, DefaultInstant, MonotonicClock, WallClock};
pub use countdown::Countdown;
pub use counter::Counter;
pub use elapsed::ElapsedTimer;
pub use moving_average::MovingAverage;
pub use time::{TimeDuration, TimeInstant, TimeSource};
