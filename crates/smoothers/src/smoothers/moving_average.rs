//! Moving-average smoothing.
//!
//! ## Purpose
//!
//! This module provides an exact unweighted average over the last N
//! samples, maintained incrementally so each push costs O(1) regardless of
//! the window size.
//!
//! ## Design notes
//!
//! * **Running sum**: The sum is adjusted by `new - evicted` on each push;
//!   the window is never re-scanned.
//! * **Warm-up**: While fewer than N samples have been pushed, the average
//!   is taken over the samples held so far.
//!
//! ## Invariants
//!
//! * The window holds `min(pushes_since_reset, N)` values.
//! * The running sum always equals the sum of the held values.

// External dependencies
use num_traits::Float;

// Internal dependencies
use crate::engine::validator::Validator;
use crate::primitives::errors::SmootherError;
use crate::primitives::window::SampleWindow;
use crate::smoothers::Smoother;

// ============================================================================
// Moving Average Smoother
// ============================================================================

/// Smooths values over time using an unweighted moving average.
///
/// Runs in constant time per push.
///
/// ```rust
/// use smoothers::prelude::*;
///
/// let mut filter = MovingAverageSmoother::new(3)?;
/// assert_eq!(filter.push(1.0), 1.0);
/// assert_eq!(filter.push(2.0), 1.5);
/// assert_eq!(filter.push(3.0), 2.0);
/// assert_eq!(filter.push(4.0), 3.0);
/// # Result::<(), SmootherError>::Ok(())
/// ```
#[derive(Debug, Clone)]
pub struct MovingAverageSmoother<T> {
    // Circular buffer of the last `size` samples.
    window: SampleWindow<T>,

    // Sum of the held samples.
    sum: T,

    // The previous output.
    average: T,
}

impl<T: Float> MovingAverageSmoother<T> {
    /// Create a moving-average smoother over the last `size` samples.
    ///
    /// # Errors
    ///
    /// Returns [`SmootherError::InvalidWindowSize`] if `size` is zero.
    pub fn new(size: usize) -> Result<Self, SmootherError> {
        Validator::validate_window_size(size)?;
        Ok(Self {
            window: SampleWindow::new(size),
            sum: T::zero(),
            average: T::zero(),
        })
    }
}

impl<T: Float> Smoother<T> for MovingAverageSmoother<T> {
    fn push(&mut self, value: T) -> T {
        let evicted = self.window.advance(value);
        self.sum = self.sum + value - evicted;

        self.average = self.sum / T::from(self.window.len()).unwrap();
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
