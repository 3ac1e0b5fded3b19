//! Weighted moving-average smoothing.
//!
//! ## Purpose
//!
//! This module provides a true weighted average over the last N samples,
//! with a caller-supplied weight per sample age, maintained incrementally
//! in O(N) per push.
//!
//! ## Design notes
//!
//! * **Weight table**: Stored most-recent-first with one extra trailing
//!   entry. Index 0 weights the sample being pushed; missing entries
//!   default to 1; the trailing entry (index N) is always 0 and represents
//!   the weight just past the window, so an evicted sample's contribution
//!   is removed by the same re-weighting step that ages everything else.
//! * **Incremental re-weighting**: Between consecutive pushes only each
//!   held sample's *weight* changes, not its value. The running sum is
//!   therefore updated by `(weight[age + 1] - weight[age]) * value_at_age`
//!   for each held sample, moving its contribution to the weight it will
//!   carry once the new sample shifts every age by one. The sum of weights
//!   is re-accumulated in the same loop, seeded from `weight[0]`.
//!
//! ## Invariants
//!
//! * Weight table length is exactly window size + 1, fixed for the
//!   smoother's lifetime.
//! * The running sum always equals the weighted sum of the held values
//!   under the current age assignment.
//!
//! ## Non-goals
//!
//! * Weight values are not validated; zero or negative weights are the
//!   caller's concern.

#[cfg(not(feature = "std"))]
use alloc::vec::Vec;

// External dependencies
use num_traits::Float;

// Internal dependencies
use crate::engine::validator::Validator;
use crate::primitives::errors::SmootherError;
use crate::primitives::window::SampleWindow;
use crate::smoothers::Smoother;

// ============================================================================
// Weighted Moving Average Smoother
// ============================================================================

/// Smooths values over time using a weighted moving average.
///
/// Runs in time proportional to the window size per push.
///
/// ```rust
/// use smoothers::prelude::*;
///
/// // Weight the newest sample 5x, the previous 3x, the rest 1x.
/// let mut filter = WeightedMovingAverageSmoother::new(9, &[5.0, 3.0])?;
/// filter.push(1.0);
/// # Result::<(), SmootherError>::Ok(())
/// ```
#[derive(Debug, Clone)]
pub struct WeightedMovingAverageSmoother<T> {
    // Circular buffer of the last `size` samples.
    window: SampleWindow<T>,

    // Per-age weights, most-recent-first; length is window size + 1 with a
    // final entry of 0.
    weights: Vec<T>,

    // Weighted sum of the held samples.
    sum: T,

    // The previous output.
    average: T,
}

impl<T: Float> WeightedMovingAverageSmoother<T> {
    /// Create a weighted moving-average smoother over the last `size`
    /// samples.
    ///
    /// `weights` is ordered most-recent-first: `weights[0]` applies to the
    /// sample about to be pushed, `weights[1]` to the one before it, and so
    /// on. Ages beyond the supplied list are weighted 1.
    ///
    /// # Errors
    ///
    /// Returns [`SmootherError::InvalidWindowSize`] if `size` is zero, or
    /// [`SmootherError::TooManyWeights`] if more than `size` weights are
    /// supplied.
    pub fn new(size: usize, weights: &[T]) -> Result<Self, SmootherError> {
        Validator::validate_window_size(size)?;
        Validator::validate_weights(weights.len(), size)?;

        let mut table = Vec::with_capacity(size + 1);
        for age in 0..size {
            table.push(weights.get(age).copied().unwrap_or_else(T::one));
        }
        // Weight just past the window; zeroes out evicted samples.
        table.push(T::zero());

        Ok(Self {
            window: SampleWindow::new(size),
            weights: table,
            sum: T::zero(),
            average: T::zero(),
        })
    }
}

impl<T: Float> Smoother<T> for WeightedMovingAverageSmoother<T> {
    fn push(&mut self, value: T) -> T {
        // Age every held sample by one weight slot before inserting.
        let mut sum_of_weights = self.weights[0];
        for age in 0..self.window.len() {
            self.sum = self.sum
                + (self.weights[age + 1] - self.weights[age]) * self.window.at_age(age);
            sum_of_weights = sum_of_weights + self.weights[age + 1];
        }

        self.sum = self.sum + self.weights[0] * value;
        self.window.advance(value);

        self.average = self.sum / sum_of_weights;
        self.average
    }

    fn get(&self) -> T {
        self.average
    }

    fn reset(&mut self) {
        self.window.clear();
        self.sum = T::zero();
        self.average = T::zero();
    }
}
