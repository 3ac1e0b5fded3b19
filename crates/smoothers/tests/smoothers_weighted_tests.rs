//! Tests for the weighted moving-average smoother.
//!
//! These tests verify the incrementally re-weighted average:
//! - Hand-computed outputs for explicit weight tables
//! - Default weight of 1 for unsupplied ages
//! - Uniform weights reducing to the unweighted moving average
//! - Agreement with naive weighted recomputation across eviction
//! - Construction validation and lifecycle semantics
//!
//! ## Test Organization
//!
//! 1. **Hand-Computed Cases** - explicit small traces
//! 2. **Reduction Properties** - uniform-weight equivalence with MA
//! 3. **Exactness** - incremental update vs. naive weighted re-sum
//! 4. **Validation** - weight count rejection
//! 5. **Lifecycle** - reset equivalence, get idempotence

use approx::assert_relative_eq;
use smoothers::prelude::*;

// ============================================================================
// Hand-Computed Cases
// ============================================================================

/// Test a window of two with weights [3, 1].
///
/// Expected outputs, weighting the newest sample 3x:
/// - push 10: 3*10 / 3 = 10
/// - push 20: (3*20 + 1*10) / 4 = 17.5
/// - push 30: (3*30 + 1*20) / 4 = 27.5 (10 evicted)
#[test]
fn test_weighted_explicit_weights() {
    let mut filter =
        WeightedMovingAverageSmoother::new(2, &[3.0, 1.0]).expect("Valid configuration");

    assert_relative_eq!(filter.push(10.0), 10.0);
    assert_relative_eq!(filter.push(20.0), 17.5);
    assert_relative_eq!(filter.push(30.0), 27.5);
}

/// Test that unsupplied ages default to weight 1.
///
/// With window 3 and only weight [2] supplied, ages 1 and 2 weigh 1.
#[test]
fn test_weighted_missing_weights_default_to_one() {
    let mut filter = WeightedMovingAverageSmoother::new(3, &[2.0]).expect("Valid configuration");

    assert_relative_eq!(filter.push(6.0), 6.0); // 2*6 / 2
    assert_relative_eq!(filter.push(3.0), 4.0); // (2*3 + 1*6) / 3
    assert_relative_eq!(filter.push(9.0), 6.75); // (2*9 + 1*3 + 1*6) / 4
}

/// Test zero-state output before any push.
#[test]
fn test_weighted_zero_state() {
    let filter =
        WeightedMovingAverageSmoother::<f64>::new(3, &[5.0, 3.0]).expect("Valid configuration");
    assert_eq!(filter.get(), 0.0, "Output should be zero before any push");
}

// ============================================================================
// Reduction Properties
// ============================================================================

/// Test that uniform weights reduce to the unweighted moving average.
///
/// WeightedMovingAverageSmoother(N, [1; k]) must agree with
/// MovingAverageSmoother(N) for any input sequence, whether the ones are
/// supplied explicitly or left to the default.
#[test]
fn test_weighted_uniform_equals_moving_average() {
    fastrand::seed(7);

    for weights in [&[][..], &[1.0][..], &[1.0, 1.0][..]] {
        let mut weighted =
            WeightedMovingAverageSmoother::new(2, weights).expect("Valid configuration");
        let mut unweighted = MovingAverageSmoother::new(2).expect("Valid configuration");

        for _ in 0..300 {
            let v = fastrand::f64() * 2.0 - 1.0;
            assert_relative_eq!(weighted.push(v), unweighted.push(v), epsilon = 1e-9);
        }
    }
}

// ============================================================================
// Exactness Tests
// ============================================================================

/// Test the incremental update against naive weighted recomputation.
///
/// The redistribution step at the window boundary (item entering, item
/// leaving) is the subtle part; compare against a from-scratch weighted
/// average of the held values at every step.
#[test]
fn test_weighted_matches_naive_rescan() {
    fastrand::seed(123);
    let n = 5;
    let weights = [4.0, 3.0, 2.0]; // ages 3 and 4 default to 1
    let full_weights = [4.0, 3.0, 2.0, 1.0, 1.0];

    let mut filter = WeightedMovingAverageSmoother::new(n, &weights).expect("Valid configuration");
    let mut history: Vec<f64> = Vec::new();

    for _ in 0..400 {
        let v = fastrand::f64() * 20.0 - 10.0;
        history.push(v);

        let held = &history[history.len().saturating_sub(n)..];
        let mut naive_sum = 0.0;
        let mut naive_weight = 0.0;
        for (age, &sample) in held.iter().rev().enumerate() {
            naive_sum += full_weights[age] * sample;
            naive_weight += full_weights[age];
        }

        assert_relative_eq!(filter.push(v), naive_sum / naive_weight, epsilon = 1e-9);
    }
}

// ============================================================================
// Validation Tests
// ============================================================================

/// Test that a zero window size is rejected at construction.
#[test]
fn test_weighted_rejects_zero_window() {
    let result = WeightedMovingAverageSmoother::<f64>::new(0, &[]);
    assert_eq!(
        result.err(),
        Some(SmootherError::InvalidWindowSize(0)),
        "Window size 0 should fail fast at construction"
    );
}

/// Test that more weights than window slots are rejected.
#[test]
fn test_weighted_rejects_excess_weights() {
    let result = WeightedMovingAverageSmoother::<f64>::new(2, &[1.0, 2.0, 3.0]);
    assert_eq!(
        result.err(),
        Some(SmootherError::TooManyWeights { got: 3, max: 2 }),
        "Excess weights should fail fast at construction"
    );
}

// ============================================================================
// Lifecycle Tests
// ============================================================================

/// Test that reset restores fresh-construction behavior.
#[test]
fn test_weighted_reset_equals_fresh() {
    let mut used =
        WeightedMovingAverageSmoother::new(3, &[5.0, 3.0]).expect("Valid configuration");
    for v in [1.0, 2.0, 3.0, 4.0] {
        used.push(v);
    }
    used.reset();
    assert_eq!(used.get(), 0.0, "Reset should zero the output");

    let mut fresh =
        WeightedMovingAverageSmoother::new(3, &[5.0, 3.0]).expect("Valid configuration");
    for v in [9.0, -3.0, 0.5, 2.0] {
        assert_relative_eq!(used.push(v), fresh.push(v));
    }
}

/// Test get() idempotence after a push.
#[test]
fn test_weighted_get_idempotent() {
    let mut filter =
        WeightedMovingAverageSmoother::new(2, &[3.0, 1.0]).expect("Valid configuration");
    let out = filter.push(4.0);

    assert_eq!(filter.get(), out, "get() should return the push output");
    assert_eq!(filter.get(), out, "Repeated get() should not advance state");
}
