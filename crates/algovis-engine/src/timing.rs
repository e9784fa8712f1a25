//! Wall-clock timing of engine runs.
//!
//! Timing is presentation-side policy: the core algorithms are pure and the
//! elapsed figure exists for display next to the result.

use std::time::{Duration, Instant};

use serde::Serialize;

/// A result paired with the wall-clock time it took to produce.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Timed<T> {
    /// The produced value.
    pub value: T,
    /// Wall-clock time spent inside the closure.
    pub elapsed: Duration,
}

impl<T> Timed<T> {
    /// Maps the value, keeping the measurement.
    pub fn map<U>(self, f: impl FnOnce(T) -> U) -> Timed<U> {
        Timed {
            value: f(self.value),
            elapsed: self.elapsed,
        }
    }
}

/// Runs `f` and reports how long it took.
pub fn measure<T>(f: impl FnOnce() -> T) -> Timed<T> {
    let started = Instant::now();
    let value = f();
    Timed {
        value,
        elapsed: started.elapsed(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_measure_returns_value() {
        let timed = measure(|| 2 + 2);
        assert_eq!(timed.value, 4);
        assert!(timed.elapsed < Duration::from_secs(1));
    }

    #[test]
    fn test_map_keeps_elapsed() {
        let timed = measure(|| 21).map(|v| v * 2);
        assert_eq!(timed.value, 42);
    }
}
