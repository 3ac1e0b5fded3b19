#![cfg(feature = "dev")]
//! Tests for construction-time parameter validation.
//!
//! These tests verify the validator used by the smoother constructors:
//! - Window size bounds
//! - Weight-sequence length constraints
//! - Error variants carry the offending values
//!
//! ## Test Organization
//!
//! 1. **Window Size** - rejection of zero, acceptance of valid sizes
//! 2. **Weight Sequences** - boundary lengths, rejection of excess weights
//! 3. **Error Context** - variant payloads and Display formatting

use smoothers::internals::engine::validator::Validator;
use smoothers::internals::primitives::errors::SmootherError;

// ============================================================================
// Window Size Tests
// ============================================================================

/// Test that a zero window size is rejected.
#[test]
fn test_validate_window_size_zero() {
    let result = Validator::validate_window_size(0);
    assert_eq!(
        result,
        Err(SmootherError::InvalidWindowSize(0)),
        "Zero window size should be rejected"
    );
}

/// Test that positive window sizes are accepted.
#[test]
fn test_validate_window_size_positive() {
    assert!(Validator::validate_window_size(1).is_ok(), "1 is the minimum");
    assert!(Validator::validate_window_size(1000).is_ok(), "Large sizes are fine");
}

// ============================================================================
// Weight Sequence Tests
// ============================================================================

/// Test that up to one weight per slot is accepted.
#[test]
fn test_validate_weights_within_window() {
    assert!(
        Validator::validate_weights(0, 3).is_ok(),
        "An empty weight list is valid"
    );
    assert!(
        Validator::validate_weights(2, 3).is_ok(),
        "Fewer weights than slots is valid"
    );
    assert!(
        Validator::validate_weights(3, 3).is_ok(),
        "Exactly one weight per slot is valid"
    );
}

/// Test that excess weights are rejected with context.
#[test]
fn test_validate_weights_excess() {
    let result = Validator::validate_weights(4, 3);
    assert_eq!(
        result,
        Err(SmootherError::TooManyWeights { got: 4, max: 3 }),
        "More weights than slots should be rejected"
    );
}

// ============================================================================
// Error Context Tests
// ============================================================================

/// Test Display formatting of the error variants.
#[test]
fn test_error_display() {
    let msg = SmootherError::InvalidWindowSize(0).to_string();
    assert!(msg.contains('0'), "Message should contain the offending size");

    let msg = SmootherError::TooManyWeights { got: 5, max: 2 }.to_string();
    assert!(msg.contains('5'), "Message should contain the supplied count");
    assert!(msg.contains('2'), "Message should contain the maximum");
}
