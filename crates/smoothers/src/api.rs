//! High-level public surface for the smoothers crate.
//!
//! ## Purpose
//!
//! This module gathers the public types from the internal layers into one
//! flat import surface. The crate root and the [`prelude`](crate::prelude)
//! both re-export from here.
//!
//! ## Key concepts
//!
//! * **Contract**: [`Smoother`] — `push` / `get` / `reset`.
//! * **Implementations**: one type per filtering strategy, each
//!   constructed once with fixed parameters and driven purely by `push`.
//! * **Errors**: [`SmootherError`], returned by the fallible constructors.

// Publicly re-exported types
pub use crate::primitives::errors::SmootherError;
pub use crate::smoothers::Smoother;
pub use crate::smoothers::fall_limited::FallLimitedSmoother;
pub use crate::smoothers::median::MedianSmoother;
pub use crate::smoothers::moving_average::MovingAverageSmoother;
pub use crate::smoothers::proportional::ProportionalSmoother;
pub use crate::smoothers::weighted::WeightedMovingAverageSmoother;
