//! Monotonic wall-clock timing of a single action.

use std::time::{Duration, Instant};

fn as_millis_f64(elapsed: Duration) -> f64 {
    elapsed.as_nanos() as f64 / 1_000_000.0
}

/// Run `action` once and return how long it took in milliseconds.
///
/// Panics raised by the action unwind through unchanged.
pub fn measure<F>(action: F) -> f64
where
    F: FnOnce(),
{
    let start = Instant::now();
    action();
    as_millis_f64(start.elapsed())
}

/// Time a fallible action. An `Err` is returned as-is and no timing is reported.
pub fn try_measure<T, E, F>(action: F) -> Result<f64, E>
where
    F: FnOnce() -> Result<T, E>,
{
    let start = Instant::now();
    let result = action();
    let elapsed = start.elapsed();
    result?;
    Ok(as_millis_f64(elapsed))
}
