//! Integration tests for Counter

mod common;
use common::*;

use tick_instruments::Counter;

type TickCounter<'t> = Counter<'t, TestInstant, MockTimeSource>;

#[test]
fn single_tick_records_no_sample() {
    let clock = MockTimeSource::new();
    let mut counter = TickCounter::new(&clock);

    counter.tick();
    clock.advance(TestDuration::millis(100));

    assert_eq!(counter.sample_count(), 0);
    assert_eq!(counter.rate(), 0.0);
}

#[test]
fn two_ticks_record_the_gap() {
    let clock = MockTimeSource::new();
    let mut counter = TickCounter::new(&clock);

    counter.tick();
    clock.advance(TestDuration::millis(250));
    counter.tick();

    assert_eq!(counter.sample_count(), 1);
    assert!(approx_eq(counter.average_interval_ms(), 250.0));
    assert!(approx_eq(counter.rate(), 4.0));
}

#[test]
fn rate_follows_average_interval() {
    let clock = MockTimeSource::new();
    let mut counter = TickCounter::new(&clock);

    counter.tick();
    for ms in [10, 30, 20] {
        clock.advance(TestDuration::millis(ms));
        counter.tick();
    }

    // Mean interval 20ms -> 50 ticks per second
    assert_eq!(counter.sample_count(), 3);
    assert!(approx_eq_epsilon(counter.rate(), 50.0, 0.01));
}

#[test]
fn simultaneous_ticks_report_zero_rate() {
    let clock = MockTimeSource::new();
    let mut counter = TickCounter::new(&clock);

    counter.tick();
    counter.tick();

    assert_eq!(counter.sample_count(), 1);
    assert_eq!(counter.rate(), 0.0);
}

#[test]
fn reset_forgets_previous_tick() {
    let clock = MockTimeSource::new();
    let mut counter = TickCounter::new(&clock);

    counter.tick();
    clock.advance(TestDuration::millis(10));
    counter.tick();
    counter.reset();

    assert_eq!(counter.sample_count(), 0);
    assert_eq!(counter.rate(), 0.0);

    // The long pause before the first tick after reset must not be sampled
    clock.advance(TestDuration::millis(5000));
    counter.tick();
    assert_eq!(counter.sample_count(), 0);

    clock.advance(TestDuration::millis(100));
    counter.tick();
    assert!(approx_eq(counter.average_interval_ms(), 100.0));
    assert!(approx_eq(counter.rate(), 10.0));
}

#[test]
fn window_is_limited_to_capacity() {
    let clock = MockTimeSource::new();
    let mut counter = Counter::<TestInstant, MockTimeSource, 8>::new(&clock);

    counter.tick();
    clock.advance(TestDuration::millis(1000));
    counter.tick();
    for _ in 0..8 {
        clock.advance(TestDuration::millis(50));
        counter.tick();
    }

    assert_eq!(counter.sample_count(), 8);
    assert!(approx_eq_epsilon(counter.rate(), 20.0, 0.01));
}

#[test]
fn stats_cover_tick_intervals() {
    let clock = MockTimeSource::new();
    let mut counter = TickCounter::new(&clock);

    assert!(counter.stats().is_none());

    counter.tick();
    clock.advance(TestDuration::millis(40));
    counter.tick();
    clock.advance(TestDuration::millis(60));
    counter.tick();

    let stats = counter.stats().unwrap();
    assert_eq!(stats.count, 2);
    assert_eq!(stats.min_ms, 40.0);
    assert_eq!(stats.max_ms, 60.0);
    assert!(approx_eq(stats.average_ms, 50.0));
}

#[test]
fn rate_is_pure() {
    let clock = MockTimeSource::new();
    let mut counter = TickCounter::new(&clock);

    counter.tick();
    clock.advance(TestDuration::millis(16));
    counter.tick();

    let rate = counter.rate();
    clock.advance(TestDuration::millis(1000));
    assert_eq!(counter.rate(), rate);
}
