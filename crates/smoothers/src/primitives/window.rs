//! Fixed-capacity circular sample window.
//!
//! This module provides the low-level storage shared by the window-based
//! smoothers: a ring of the last N pushed values, addressed either by age
//! (0 = most recent) or by raw slot index.

#[cfg(not(feature = "std"))]
use alloc::vec;
#[cfg(not(feature = "std"))]
use alloc::vec::Vec;

// External dependencies
use num_traits::Float;

// ============================================================================
// Sample Window
// ============================================================================

/// A circular buffer over the last `capacity` pushed values.
///
/// Slots are zero-initialized, so the value returned by [`advance`] for a
/// slot that has never been written is `T::zero()`. Callers maintaining a
/// running sum rely on this: `sum += new - evicted` is exact from the very
/// first push.
///
/// [`advance`]: SampleWindow::advance
#[derive(Debug, Clone)]
pub struct SampleWindow<T> {
    // Slot storage; length is fixed at `capacity`.
    values: Vec<T>,

    // Slot of the most recently written value. Starts one step before slot
    // 0 so the first `advance` wraps onto it.
    index: usize,

    // Number of slots holding pushed values, capped at capacity.
    len: usize,
}

impl<T: Float> SampleWindow<T> {
    /// Create a window holding up to `capacity` values.
    ///
    /// The caller is responsible for ensuring `capacity >= 1`; see
    /// `Validator::validate_window_size`.
    pub fn new(capacity: usize) -> Self {
        debug_assert!(capacity >= 1, "SampleWindow capacity must be at least 1");
        Self {
            values: vec![T::zero(); capacity],
            index: capacity - 1,
            len: 0,
        }
    }

    /// Step the write cursor forward, store `value`, and return the value
    /// the slot previously held (`T::zero()` for a never-written slot).
    ///
    /// Grows the logical length until the window is full, after which the
    /// oldest value is the one evicted.
    #[inline]
    pub fn advance(&mut self, value: T) -> T {
        self.index = (self.index + 1) % self.capacity();
        let evicted = self.values[self.index];
        self.values[self.index] = value;
        if self.len != self.capacity() {
            self.len += 1;
        }
        evicted
    }

    /// Value pushed `age` steps ago (0 = most recent).
    ///
    /// Only ages below `len()` refer to held values; older ages read
    /// whatever the slot last held (zero until the first wrap).
    #[inline]
    pub fn at_age(&self, age: usize) -> T {
        debug_assert!(age < self.capacity(), "age out of window range");
        self.values[(self.index + self.capacity() - age) % self.capacity()]
    }

    /// Raw slot index of the most recently written value.
    #[inline]
    pub fn latest_slot(&self) -> usize {
        self.index
    }

    /// Value at raw slot `slot`.
    #[inline]
    pub fn slot(&self, slot: usize) -> T {
        self.values[slot]
    }

    /// Number of held values: `min(pushes_since_clear, capacity)`.
    #[inline]
    pub fn len(&self) -> usize {
        self.len
    }

    /// Check if the window holds no values.
    #[allow(dead_code)]
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// Maximum number of held values, fixed at construction.
    #[inline]
    pub fn capacity(&self) -> usize {
        self.values.len()
    }

    /// Discard all held values and restore the just-constructed state.
    pub fn clear(&mut self) {
        for slot in self.values.iter_mut() {
            *slot = T::zero();
        }
        self.index = self.capacity() - 1;
        self.len = 0;
    }
}
