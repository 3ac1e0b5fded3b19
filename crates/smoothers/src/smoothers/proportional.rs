//! Proportional (exponential) smoothing.
//!
//! ## Purpose
//!
//! This module provides the simplest filter in the crate: a first-order
//! exponential filter that pulls its output toward each new input by a
//! fixed proportion of the remaining error.
//!
//! ## Design notes
//!
//! * **Recurrence**: `output += gain * (input - output)`.
//! * **State**: One value; O(1) time and space per push.
//! * **Gain**: `gain = 1` tracks the input exactly, `gain = 0` never moves.
//!
//! ## Non-goals
//!
//! * This module does not validate the gain; any sign and magnitude is
//!   accepted, including values outside `[0, 1]`.

// External dependencies
use num_traits::Float;

// Internal dependencies
use crate::smoothers::Smoother;

// ============================================================================
// Proportional Smoother
// ============================================================================

/// Smooths values over time using a proportional gain.
///
/// Runs in constant time per push.
///
/// ```rust
/// use smoothers::prelude::*;
///
/// let mut filter = ProportionalSmoother::new(0.5);
/// assert_eq!(filter.push(2.0), 1.0);
/// assert_eq!(filter.push(2.0), 1.5);
/// assert_eq!(filter.push(2.0), 1.75);
/// ```
#[derive(Debug, Clone, Copy)]
pub struct ProportionalSmoother<T> {
    // The proportion of the error applied each step.
    gain: T,

    // The previous output.
    output: T,
}

impl<T: Float> ProportionalSmoother<T> {
    /// Create a proportional smoother with the given gain.
    pub fn new(gain: T) -> Self {
        Self {
            gain,
            output: T::zero(),
        }
    }
}

impl<T: Float> Smoother<T> for ProportionalSmoother<T> {
    fn push(&mut self, value: T) -> T {
        self.output = self.output + self.gain * (value - self.output);
        self.output
    }

    fn get(&self) -> T {
        self.output
    }

    fn reset(&mut self) {
        self.output = T::zero();
    }
}
