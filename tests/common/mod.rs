//! Shared utilities for integration tests

#![allow(dead_code)]

use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;

pub use approx::{assert_abs_diff_eq, assert_relative_eq};

/// Four-test sample used for the adjustment reference values
pub const ADJUST_SAMPLE: [f64; 4] = [0.001, 0.01, 0.03, 0.5];

/// Five-test sample used for the π₀ reference values
pub const PI0_SAMPLE: [f64; 5] = [0.001, 0.002, 0.01, 0.03, 0.5];

/// Four-test sample used for the combination reference values
pub const COMBINE_SAMPLE: [f64; 4] = [0.01, 0.02, 0.3, 0.5];

/// Element-wise absolute comparison
pub fn assert_all_close(actual: &[f64], expected: &[f64], epsilon: f64) {
    assert_eq!(actual.len(), expected.len(), "length mismatch");
    for (i, (a, e)) in actual.iter().zip(expected).enumerate() {
        assert!(
            (a - e).abs() <= epsilon,
            "index {i}: got {a}, expected {e} (epsilon {epsilon:e})"
        );
    }
}

/// Seeded null/alternative mixture: `nulls` uniform p-values followed by
/// `signals` p-values from a Beta(0.1, 1) alternative
pub fn mixed_pvalues(nulls: usize, signals: usize, seed: u64) -> Vec<f64> {
    let mut rng = ChaCha8Rng::seed_from_u64(seed);
    let mut pvalues: Vec<f64> = (0..nulls).map(|_| rng.gen::<f64>()).collect();
    // inverse CDF of Beta(0.1, 1) is u^10
    pvalues.extend((0..signals).map(|_| rng.gen::<f64>().powi(10)));
    pvalues
}
