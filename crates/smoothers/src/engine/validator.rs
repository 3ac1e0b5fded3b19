//! Construction-time validation for smoother parameters.
//!
//! ## Purpose
//!
//! This module provides validation functions for the parameters supplied to
//! smoother constructors. It enforces the constraints that would otherwise
//! surface as divisions by zero or silently ignored configuration on the
//! first `push`.
//!
//! ## Design notes
//!
//! * **Fail-Fast**: Validation stops at the first error encountered.
//! * **Construction-Only**: `push` accepts every input unconditionally;
//!   nothing in this module runs on the per-sample path.
//!
//! ## Key concepts
//!
//! * **Window sizing**: Window-based smoothers require a window of at
//!   least one sample.
//! * **Weight sequences**: A weighted moving average accepts at most one
//!   weight per window slot; extra weights would never be applied.
//!
//! ## Invariants
//!
//! * All validated parameters satisfy their respective constraints.
//! * Validation logic is deterministic and side-effect free.
//!
//! ## Non-goals
//!
//! * This module does not validate sample values (any real is accepted).
//! * This module does not provide automatic correction of invalid inputs.

// Internal dependencies
use crate::primitives::errors::SmootherError;

// ============================================================================
// Validator
// ============================================================================

/// Validation utility for smoother construction parameters.
///
/// Provides static methods returning `Result<(), SmootherError>` that fail
/// fast upon identifying the first violation.
pub struct Validator;

impl Validator {
    /// Validate a sample-window size.
    ///
    /// A window must hold at least one value; a zero-size window would
    /// divide by zero on the first push.
    pub fn validate_window_size(size: usize) -> Result<(), SmootherError> {
        if size < 1 {
            return Err(SmootherError::InvalidWindowSize(size));
        }
        Ok(())
    }

    /// Validate a weight sequence against the window it applies to.
    ///
    /// At most one weight per window slot is accepted; missing entries
    /// default to 1 at construction.
    pub fn validate_weights(weight_count: usize, window_size: usize) -> Result<(), SmootherError> {
        if weight_count > window_size {
            return Err(SmootherError::TooManyWeights {
                got: weight_count,
                max: window_size,
            });
        }
        Ok(())
    }
}
