//! Half-open decimal ranges, rounded to a fixed number of places.

use crate::constants::RANGE_DECIMALS;
use crate::error::{MeltFlowError, Result};

/// Smallest step the generator accepts. Twice the rounding resolution, so
/// neighbouring values that both land on a half-unit tie still round apart.
const MIN_STEP: f64 = 2.0e-5;

/// Relative slack applied to `(stop - start) / step` before flooring, so
/// that decimal steps such as 0.1 count the way they would in exact arithmetic.
const COUNT_TOLERANCE: f64 = 1.0e-9;

/// Round `value` to `places` decimal places.
pub fn round_to(value: f64, places: i32) -> f64 {
    let scale = 10f64.powi(places);
    let scaled = value * scale;
    if !scaled.is_finite() {
        return value;
    }
    scaled.round() / scale
}

/// Finite, restartable sequence `start, start + step, ...` stopping before `stop`.
///
/// Each emitted value is rounded to [`RANGE_DECIMALS`] places.
#[derive(Debug, Clone, PartialEq)]
pub struct FloatRange {
    start: f64,
    stop: f64,
    step: f64,
    count: usize,
    front: usize,
    back: usize,
}

/// Build a [`FloatRange`] over `[start, stop)`.
///
/// Fails when `step <= 0`, `stop <= start`, a bound is not finite, the step
/// is below twice the rounding resolution, or the value count does not fit
/// in a `usize`.
pub fn float_range(start: f64, stop: f64, step: f64) -> Result<FloatRange> {
    FloatRange::new(start, stop, step)
}

impl FloatRange {
    pub fn new(start: f64, stop: f64, step: f64) -> Result<Self> {
        let finite = start.is_finite() && stop.is_finite() && step.is_finite();
        if !finite || step < MIN_STEP || stop <= start {
            return Err(MeltFlowError::InvalidRange { start, stop, step });
        }

        let quotient = ((stop - start) / step * (1.0 + COUNT_TOLERANCE)).floor();
        if !quotient.is_finite() || quotient >= usize::MAX as f64 {
            return Err(MeltFlowError::InvalidRange { start, stop, step });
        }
        let mut count = quotient as usize;
        while count > 0 && value_at(start, step, count - 1) >= stop {
            count -= 1;
        }

        Ok(FloatRange {
            start,
            stop,
            step,
            count,
            front: 0,
            back: count,
        })
    }

    pub fn start(&self) -> f64 {
        self.start
    }

    pub fn stop(&self) -> f64 {
        self.stop
    }

    pub fn step(&self) -> f64 {
        self.step
    }

    /// Total number of values in the full range, regardless of progress.
    pub fn count_total(&self) -> usize {
        self.count
    }

    /// Rewind to the first value.
    pub fn restart(&mut self) {
        self.front = 0;
        self.back = self.count;
    }

    /// Value at position `index` of the full range.
    pub fn get(&self, index: usize) -> Option<f64> {
        (index < self.count).then(|| value_at(self.start, self.step, index))
    }
}

fn value_at(start: f64, step: f64, index: usize) -> f64 {
    round_to(start + index as f64 * step, RANGE_DECIMALS)
}

impl Iterator for FloatRange {
    type Item = f64;

    fn next(&mut self) -> Option<f64> {
        if self.front >= self.back {
            return None;
        }
        let value = value_at(self.start, self.step, self.front);
        self.front += 1;
        Some(value)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let remaining = self.back - self.front;
        (remaining, Some(remaining))
    }
}

impl DoubleEndedIterator for FloatRange {
    fn next_back(&mut self) -> Option<f64> {
        if self.front >= self.back {
            return None;
        }
        self.back -= 1;
        Some(value_at(self.start, self.step, self.back))
    }
}

impl ExactSizeIterator for FloatRange {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_round_to() {
        assert_eq!(round_to(0.123456, 5), 0.12346);
        assert_eq!(round_to(2.5, 0), 3.0);
    }

    #[test]
    fn test_exact_multiple_excludes_stop() {
        let values: Vec<f64> = float_range(0.0, 1.0, 0.25).unwrap().collect();
        assert_eq!(values, vec![0.0, 0.25, 0.5, 0.75]);
    }

    #[test]
    fn test_decimal_step_counts_like_exact_arithmetic() {
        // 0.3 / 0.1 evaluates to 2.9999999999999996
        let range = float_range(0.0, 0.3, 0.1).unwrap();
        assert_eq!(range.len(), 3);
        assert_eq!(range.last(), Some(0.2));
    }

    #[test]
    fn test_restart() {
        let mut range = float_range(1.0, 2.0, 0.5).unwrap();
        assert_eq!(range.next(), Some(1.0));
        assert_eq!(range.next(), Some(1.5));
        assert_eq!(range.next(), None);
        range.restart();
        assert_eq!(range.next(), Some(1.0));
    }

    #[test]
    fn test_reverse() {
        let values: Vec<f64> = float_range(0.0, 0.3, 0.1).unwrap().rev().collect();
        assert_eq!(values, vec![0.2, 0.1, 0.0]);
    }

    #[test]
    fn test_get() {
        let range = float_range(0.95, 0.96, 0.001).unwrap();
        assert_eq!(range.get(0), Some(0.95));
        assert_eq!(range.get(9), Some(0.959));
        assert_eq!(range.get(10), None);
    }

    #[test]
    fn test_rejects_step_below_resolution() {
        assert!(float_range(0.0, 1.0, 1.0e-6).is_err());
        assert!(float_range(0.0, 1.0, 1.0e-5).is_err());
        assert!(float_range(0.0, 1.0, 2.0e-5).is_ok());
    }

    #[test]
    fn test_round_to_keeps_huge_values() {
        assert_eq!(round_to(1.0e304, 5), 1.0e304);
        assert_eq!(round_to(-3.0e305, 5), -3.0e305);
    }

    #[test]
    fn test_rejects_nan() {
        assert!(float_range(f64::NAN, 1.0, 0.1).is_err());
        assert!(float_range(0.0, f64::INFINITY, 0.1).is_err());
    }
}
