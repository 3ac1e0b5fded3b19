//! Error types for smoother construction.
//!
//! ## Purpose
//!
//! This module defines the error conditions that can occur when a smoother
//! is configured, covering window sizing and weight-sequence constraints.
//!
//! ## Design notes
//!
//! * **Contextual**: Errors include the offending values (e.g., actual vs.
//!   maximum weight count).
//! * **Fail-Fast**: All errors surface at construction; `push` never fails.
//! * **No-std**: Implements `Display` via `core::fmt` and `std::error::Error`
//!   only when the `std` feature is enabled.
//!
//! ## Key concepts
//!
//! 1. **Window sizing**: A sample window must hold at least one value.
//! 2. **Weight sequences**: A weight list may not be longer than the window
//!    it applies to.
//!
//! ## Invariants
//!
//! * All variants provide sufficient context for diagnosis.
//! * Error messages are consistent in tone and formatting.
//!
//! ## Non-goals
//!
//! * This module does not perform the validation logic itself.
//! * This module does not provide error recovery or fallback strategies.

#[cfg(feature = "std")]
use std::error::Error;

// External dependencies
use core::fmt::{Display, Formatter, Result};

// ============================================================================
// Error Type
// ============================================================================

/// Error type for smoother construction.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SmootherError {
    /// Window size must be at least 1; averaging over an empty window would
    /// divide by zero on the first push.
    InvalidWindowSize(usize),

    /// More weights were supplied than the window can hold.
    TooManyWeights {
        /// Number of weights supplied.
        got: usize,
        /// Window size, the maximum number of weights accepted.
        max: usize,
    },
}

// ============================================================================
// Display Implementation
// ============================================================================

impl Display for SmootherError {
    fn fmt(&self, f: &mut Formatter<'_>) -> Result {
        match self {
            Self::InvalidWindowSize(n) => {
                write!(f, "Invalid window size: {n} (must be at least 1)")
            }
            Self::TooManyWeights { got, max } => {
                write!(
                    f,
                    "Too many weights: got {got} (must be at most the window size {max})"
                )
            }
        }
    }
}

// ============================================================================
// Standard Error Trait
// ============================================================================

#[cfg(feature = "std")]
impl Error for SmootherError {}
