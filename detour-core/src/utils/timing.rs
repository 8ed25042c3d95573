use std::time::{Duration, Instant};

/// Implements performance timer functionality.
pub struct Timer;

impl Timer {
    /// Runs given action and reports its duration to the callback.
    pub fn measure_duration_with_callback<R, F, C>(action: F, callback: C) -> R
    where
        F: FnOnce() -> R,
        C: FnOnce(Duration),
    {
        let start = Instant::now();
        let result = action();
        callback(start.elapsed());

        result
    }
}
