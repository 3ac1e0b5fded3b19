//! Second-derivative-limited smoothing.
//!
//! ## Purpose
//!
//! This module provides a tracking filter that bounds how quickly the
//! output's rate of change may change per step. The "fall" of the output
//! toward zero is always rate-limited; the `fall_up` flag extends the same
//! limit to motion away from zero, making the clamp symmetric.
//!
//! ## Design notes
//!
//! * **State**: The previous output and its first derivative; both zero
//!   after construction and reset.
//! * **Momentum discard**: When the output already sits at or beyond the
//!   target's magnitude and is still moving further from zero, the
//!   derivative is zeroed first so the filter does not overshoot back past
//!   the target.
//! * **Clamp condition**: The desired change in the derivative is clamped
//!   when `fall_up` is set, or when the output is falling toward zero
//!   (positive and above the target, or negative and below it). All other
//!   motion is unclamped and reaches the target in one step.
//! * **Overshoot snap**: If an update carries the output past the target in
//!   the direction of travel, the output snaps to the target exactly; the
//!   derivative is left as computed.
//!
//! ## Key concepts
//!
//! * **Sign convention**: The sign of zero is zero here, not positive; the
//!   momentum-discard comparison depends on it. `Float::signum` is
//!   deliberately not used (it maps `0.0` to `1.0`).
//!
//! ## Invariants
//!
//! * The stored limit is non-negative; the absolute value is taken at
//!   construction.

// External dependencies
use num_traits::Float;

// Internal dependencies
use crate::smoothers::Smoother;

// Sign of `v` with zero mapped to zero.
#[inline]
fn sign<T: Float>(v: T) -> T {
    if v == T::zero() {
        T::zero()
    } else {
        v.signum()
    }
}

// ============================================================================
// Fall Limited Smoother
// ============================================================================

/// Smooths values over time by limiting the second derivative of the
/// output.
///
/// Runs in constant time per push.
///
/// ```rust
/// use smoothers::prelude::*;
///
/// // Change the rate of change by at most 0.005 per step, in both
/// // directions.
/// let mut filter = FallLimitedSmoother::new(0.005, true);
/// let out = filter.push(1.0);
/// assert!(out <= 1.0);
/// ```
#[derive(Debug, Clone, Copy)]
pub struct FallLimitedSmoother<T> {
    // Maximum allowed change in the rate of change per push.
    max_second_derivative: T,

    // If true the limit also applies to motion away from zero; if false
    // only the fall toward zero is limited.
    fall_up: bool,

    // The previous output.
    output: T,

    // The previous rate of change.
    dydx: T,
}

impl<T: Float> FallLimitedSmoother<T> {
    /// Create a fall-limited smoother.
    ///
    /// `max_second_derivative` bounds how much the output's rate of change
    /// may change per push; its absolute value is stored. With `fall_up`
    /// true the limit applies in both directions; with `fall_up` false it
    /// applies only while the output is falling toward zero.
    pub fn new(max_second_derivative: T, fall_up: bool) -> Self {
        Self {
            max_second_derivative: max_second_derivative.abs(),
            fall_up,
            output: T::zero(),
            dydx: T::zero(),
        }
    }
}

impl<T: Float> Smoother<T> for FallLimitedSmoother<T> {
    fn push(&mut self, value: T) -> T {
        // Discard momentum when already at or beyond the target's
        // magnitude and still moving further from zero.
        if self.output.abs() >= value.abs() && sign(self.dydx) == sign(self.output) {
            self.dydx = T::zero();
        }

        // The acceleration that would reach the target in one step.
        let mut change = value - self.output - self.dydx;

        let falling = (self.output > value && self.output > T::zero())
            || (self.output < value && self.output < T::zero());
        if (self.fall_up || falling) && change.abs() > self.max_second_derivative {
            change = sign(change) * self.max_second_derivative;
        }

        self.dydx = self.dydx + change;
        self.output = self.output + self.dydx;

        // Snap on overshoot in the direction of travel; dydx is kept.
        if (self.output > value && self.dydx > T::zero())
            || (self.output < value && self.dydx < T::zero())
        {
            self.output = value;
        }

        self.output
    }

    fn get(&self) -> T {
        self.output
    }

    fn reset(&mut self) {
        self.output = T::zero();
        self.dydx = T::zero();
    }
}
