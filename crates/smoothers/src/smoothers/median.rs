//! Median smoothing.
//!
//! ## Purpose
//!
//! This module provides a moving median over the last N samples, which
//! rejects outlier spikes that any averaging filter would smear across the
//! window.
//!
//! ## Design notes
//!
//! * **Sorted view**: A list of window slot indices is kept sorted by the
//!   value each slot holds, and re-sorted (stably) after every push. When
//!   the window wraps, the overwritten slot's entry is already in the list;
//!   the re-sort moves it to its new position.
//! * **Tie-break**: The output is the element at sorted position
//!   `len / 2` — the true median for odd counts, the *upper-middle*
//!   element for even counts. The even-count behavior is deliberate and
//!   must not be averaged.
//!
//! ## Invariants
//!
//! * The sorted view is always a permutation of the current window slots.

#[cfg(not(feature = "std"))]
use alloc::vec::Vec;

// External dependencies
use core::cmp::Ordering;
use num_traits::Float;

// Internal dependencies
use crate::engine::validator::Validator;
use crate::primitives::errors::SmootherError;
use crate::primitives::window::SampleWindow;
use crate::smoothers::Smoother;

// ============================================================================
// Median Smoother
// ============================================================================

/// Smooths values over time using a moving median.
///
/// Runs in O(N log N) per push from the re-sort.
///
/// ```rust
/// use smoothers::prelude::*;
///
/// let mut filter = MedianSmoother::new(3)?;
/// assert_eq!(filter.push(5.0), 5.0);
/// assert_eq!(filter.push(1.0), 5.0); // upper-middle of [1, 5]
/// assert_eq!(filter.push(3.0), 3.0);
/// assert_eq!(filter.push(9.0), 3.0); // 5 evicted; window holds [1, 3, 9]
/// # Result::<(), SmootherError>::Ok(())
/// ```
#[derive(Debug, Clone)]
pub struct MedianSmoother<T> {
    // Circular buffer of the last `size` samples.
    window: SampleWindow<T>,

    // Window slot indices ordered by the value each slot holds.
    sorted: Vec<usize>,

    // The previous output.
    median: T,
}

impl<T: Float> MedianSmoother<T> {
    /// Create a median smoother over the last `size` samples.
    ///
    /// # Errors
    ///
    /// Returns [`SmootherError::InvalidWindowSize`] if `size` is zero.
    pub fn new(size: usize) -> Result<Self, SmootherError> {
        Validator::validate_window_size(size)?;
        Ok(Self {
            window: SampleWindow::new(size),
            sorted: Vec::with_capacity(size),
            median: T::zero(),
        })
    }
}

impl<T: Float> Smoother<T> for MedianSmoother<T> {
    fn push(&mut self, value: T) -> T {
        let held = self.window.len();
        self.window.advance(value);

        // A growing window introduces a new slot; a full one re-uses the
        // slot just overwritten, whose entry is already in the sorted view.
        if self.window.len() != held {
            self.sorted.push(self.window.latest_slot());
        }

        let window = &self.window;
        self.sorted.sort_by(|&a, &b| {
            window
                .slot(a)
                .partial_cmp(&window.slot(b))
                .unwrap_or(Ordering::Equal)
        });

        self.median = self.window.slot(self.sorted[self.sorted.len() / 2]);
        self.median
    }

    fn get(&self) -> T {
        self.median
    }

    fn reset(&mut self) {
        self.window.clear();
        self.sorted.clear();
        self.median = T::zero();
    }
}
