//! Layout engines for rulers and jigs
//!
//! This module handles all the geometric calculations for a template:
//! - Tick placement and weight classification along a ruled edge
//! - Band slicing and hole rows for punch jigs

mod holes;
mod ticks;

pub use holes::*;
pub use ticks::*;

use crate::constants::TOLERANCE;

/// Number of whole `step`s in `length`, tolerant of floating drift
/// (`0.3 / 0.1` counts as 3, not 2).
pub(crate) fn whole_steps(length: f64, step: f64) -> usize {
    if !(length.is_finite() && step.is_finite()) || step <= 0.0 || length <= 0.0 {
        return 0;
    }
    (length / step + TOLERANCE).floor() as usize
}

/// True when `value` is within tolerance of `target`
pub(crate) fn approx_eq(value: f64, target: f64) -> bool {
    (value - target).abs() <= TOLERANCE
}
