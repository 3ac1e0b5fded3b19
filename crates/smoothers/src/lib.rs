//! # Smoothers — Streaming Signal-Smoothing Filters for Rust
//!
//! A small library of stateful, real-time smoothing filters: each filter
//! accepts one sample at a time and returns a smoothed output for it,
//! making the crate suitable for sensor pipelines, control loops, and any
//! other setting where data arrives as a stream and latency matters.
//!
//! ## What is a smoother?
//!
//! A smoother transforms a noisy input sequence into a less noisy output
//! sequence while preserving the underlying trend. Every filter in this
//! crate implements the same three-operation [`Smoother`] contract:
//!
//! * `push(value)` — consume one sample, update state, return the new output.
//! * `get()` — re-read the most recent output without side effects.
//! * `reset()` — return to the just-constructed state, keeping parameters.
//!
//! ## Quick Start
//!
//! ```rust
//! use smoothers::prelude::*;
//!
//! // Average over the last 3 samples.
//! let mut avg = MovingAverageSmoother::new(3)?;
//!
//! assert_eq!(avg.push(1.0), 1.0);
//! assert_eq!(avg.push(2.0), 1.5);
//! assert_eq!(avg.push(3.0), 2.0);
//! assert_eq!(avg.push(4.0), 3.0); // window now holds [2, 3, 4]
//!
//! avg.reset();
//! assert_eq!(avg.get(), 0.0);
//! # Result::<(), SmootherError>::Ok(())
//! ```
//!
//! ## Available Filters
//!
//! | Filter | State | Per-push cost | Character |
//! |--------|-------|---------------|-----------|
//! | [`ProportionalSmoother`] | O(1) | O(1) | First-order exponential filter driven by a gain. |
//! | [`MovingAverageSmoother`] | O(N) | O(1) | Exact unweighted average over the last N samples. |
//! | [`WeightedMovingAverageSmoother`] | O(N) | O(N) | Weighted average with explicit per-age weights. |
//! | [`MedianSmoother`] | O(N) | O(N log N) | Median over the last N samples. |
//! | [`FallLimitedSmoother`] | O(1) | O(1) | Clamps the second derivative of the output, optionally one-sided. |
//!
//! ## Heterogeneous filter chains
//!
//! Filters can be held by trait object when the concrete type is chosen at
//! runtime:
//!
//! ```rust
//! use smoothers::prelude::*;
//!
//! let mut filters: Vec<Box<dyn Smoother<f64>>> = vec![
//!     Box::new(ProportionalSmoother::new(0.2)),
//!     Box::new(MedianSmoother::new(9)?),
//! ];
//!
//! for filter in &mut filters {
//!     filter.push(1.0);
//! }
//! # Result::<(), SmootherError>::Ok(())
//! ```
//!
//! ## Error Handling
//!
//! Construction of window-based filters returns
//! `Result<Self, SmootherError>`: a window size of zero or a weight list
//! longer than the window is rejected up front rather than deferred to the
//! first `push`. `push` itself never fails; every finite input is accepted
//! unconditionally.
//!
//! ## Minimal Usage (no_std / Embedded)
//!
//! The crate supports `no_std` environments for embedded devices. Disable
//! default features to remove the standard library dependency:
//!
//! ```toml
//! [dependencies]
//! smoothers = { version = "0.1", default-features = false }
//! ```
//!
//! **Tips for embedded usage:**
//! - Use `f32` instead of `f64` to reduce memory footprint
//! - Keep window sizes small; window-based filters allocate N slots once at construction
//! - `ProportionalSmoother` and `FallLimitedSmoother` never allocate
//!
//! ## Concurrency
//!
//! Each filter instance owns the state of a single logical stream. Calls
//! are synchronous and non-blocking, but instances are not synchronized;
//! callers feeding one filter from multiple threads must serialize access
//! themselves.

#![cfg_attr(not(feature = "std"), no_std)]

#[cfg(not(feature = "std"))]
extern crate alloc;

// Layer 1: Primitives - data structures and basic utilities.
mod primitives;

// Layer 2: Engine - construction-time validation.
mod engine;

// Layer 3: Smoothers - the filter contract and its implementations.
mod smoothers;

// High-level public surface.
mod api;

// Standard smoothers prelude.
pub mod prelude {
    pub use crate::api::{
        FallLimitedSmoother, MedianSmoother, MovingAverageSmoother, ProportionalSmoother,
        Smoother, SmootherError, WeightedMovingAverageSmoother,
    };
}

pub use api::{
    FallLimitedSmoother, MedianSmoother, MovingAverageSmoother, ProportionalSmoother, Smoother,
    SmootherError, WeightedMovingAverageSmoother,
};

// Internal modules for development and testing.
//
// This module re-exports internal modules for development and testing purposes.
// It is only available with the `dev` feature enabled.
#[cfg(feature = "dev")]
pub mod internals {
    pub mod primitives {
        pub use crate::primitives::*;
    }
    pub mod engine {
        pub use crate::engine::*;
    }
    pub mod smoothers {
        pub use crate::smoothers::*;
    }
    pub mod api {
        pub use crate::api::*;
    }
}
