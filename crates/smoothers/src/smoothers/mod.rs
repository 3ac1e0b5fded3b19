//! Layer 3: Smoothers
//!
//! This layer defines the [`Smoother`] contract and the five filter
//! implementations. Each filter is an independent leaf depending only on
//! the contract and the lower layers; there are no dependencies between
//! implementations.

/// Exponential filter driven by a proportional gain.
pub mod proportional;

/// Unweighted average over the last N samples.
pub mod moving_average;

/// Weighted average over the last N samples with per-age weights.
pub mod weighted;

/// Median over the last N samples.
pub mod median;

/// Second-derivative-limited tracking filter.
pub mod fall_limited;

#[cfg(not(feature = "std"))]
use alloc::boxed::Box;

// External dependencies
use num_traits::Float;

// ============================================================================
// Smoother Contract
// ============================================================================

/// A stateful filter that smooths a stream of samples in real time.
///
/// Implementations consume one sample per [`push`] and produce one output
/// per sample. The sequencing contract shared by all implementations:
///
/// * [`get`] returns exactly the value produced by the most recent
///   [`push`], with no recomputation or side effects.
/// * Before the first [`push`] (and after every [`reset`]), [`get`]
///   returns the type's zero-state value, `T::zero()`.
/// * [`reset`] restores the just-constructed state; parameters supplied at
///   construction are retained.
///
/// [`push`]: Smoother::push
/// [`get`]: Smoother::get
/// [`reset`]: Smoother::reset
pub trait Smoother<T: Float> {
    /// Consume one new sample and return the new smoothed output.
    fn push(&mut self, value: T) -> T;

    /// Return the output produced by the most recent [`push`](Smoother::push).
    fn get(&self) -> T;

    /// Discard all accumulated state, keeping construction parameters.
    fn reset(&mut self);
}

impl<T: Float> Smoother<T> for Box<dyn Smoother<T>> {
    fn push(&mut self, value: T) -> T {
        (**self).push(value)
    }

    fn get(&self) -> T {
        (**self).get()
    }

    fn reset(&mut self) {
        (**self).reset();
    }
}
