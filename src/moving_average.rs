//! Time-weighted exponential moving average.

use crate::time::{TimeDuration, TimeInstant, TimeSource};

/// Moving average of `f32` values where older values fade with elapsed time.
///
/// The window acts as a half-life: a value pushed one window after the
/// previous push is weighted equally with the running average, while values
/// pushed in quick succession barely move it.
///
/// # Type Parameters
/// * `'t` - Lifetime of the time source reference
/// * `I` - Time instant type
/// * `T` - Time source implementation type
pub struct MovingAverage<'t, I: TimeInstant, T: TimeSource<I>> {
    time_source: &'t T,
    span_ms: i64,
    last_measure_time: Option<I>,
    moving_average: Option<f32>,
}

impl<'t, I: TimeInstant, T: TimeSource<I>> MovingAverage<'t, I, T> {
    /// Creates an empty average with a half-life of `window_seconds`.
    ///
    /// A window of zero or less makes every push replace the average.
    pub fn new(time_source: &'t T, window_seconds: i32) -> Self {
        Self {
            time_source,
            span_ms: i64::from(window_seconds) * 1000,
            last_measure_time: None,
            moving_average: None,
        }
    }

    /// Registers a value at the current time.
    pub fn push(&mut self, value: f32) {
        let this_measure_time = self.time_source.now();

        let next = match (self.moving_average, self.last_measure_time) {
            (Some(average), Some(last)) => {
                let alpha = self.decay_weight(this_measure_time.duration_since(last));
                (alpha * f64::from(value) + (1.0 - alpha) * f64::from(average)) as f32
            }
            _ => value,
        };

        self.moving_average = Some(next);
        self.last_measure_time = Some(this_measure_time);
    }

    /// Current moving average, `None` before the first push.
    pub fn average(&self) -> Option<f32> {
        self.moving_average
    }

    /// Returns true once a value has been pushed.
    pub fn has_value(&self) -> bool {
        self.moving_average.is_some()
    }

    /// Half-life window in milliseconds.
    pub fn window_ms(&self) -> i64 {
        self.span_ms
    }

    /// Forgets the average; the next push starts it over.
    pub fn clear(&mut self) {
        self.moving_average = None;
        self.last_measure_time = None;
    }

    /// Weight of a new value after `elapsed`: `1 - 2^(-elapsed / window)`, within `[0, 1]`.
    fn decay_weight(&self, elapsed: I::Duration) -> f64 {
        if self.span_ms <= 0 {
            return 1.0;
        }
        let elapsed_ms = elapsed.as_micros() as f64 / 1000.0;
        let alpha = 1.0 - libm::exp2(-elapsed_ms / self.span_ms as f64);
        alpha.clamp(0.0, 1.0)
    }
}
