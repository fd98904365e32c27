//! Holm step-down and Hochberg step-up corrections

use crate::ranked::{adjust_ranked, Direction};
use multitest_core::{PValueAdjustment, Result};
use serde::{Deserialize, Serialize};

/// Holm's step-down procedure
///
/// Rank `i` (ascending) gets `(n - i + 1)·p₍ᵢ₎`, followed by a running
/// maximum from the smallest p-value up. Uniformly more powerful than
/// Bonferroni with the same FWER guarantee.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Holm;

impl Holm {
    /// Create a new Holm correction
    pub fn new() -> Self {
        Self
    }
}

impl PValueAdjustment for Holm {
    fn adjust_n(&self, pvalues: &[f64], n: usize) -> Result<Vec<f64>> {
        adjust_ranked(self.name(), pvalues, n, Direction::StepDown, |i, p| {
            p * (n + 1 - i) as f64
        })
    }

    fn name(&self) -> &str {
        "Holm"
    }
}

/// Hochberg's step-up procedure
///
/// Same per-rank values as [`Holm`], but corrected with a running minimum
/// from the largest p-value down. Valid for independent or positively
/// dependent tests.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Hochberg;

impl Hochberg {
    /// Create a new Hochberg correction
    pub fn new() -> Self {
        Self
    }
}

impl PValueAdjustment for Hochberg {
    fn adjust_n(&self, pvalues: &[f64], n: usize) -> Result<Vec<f64>> {
        adjust_ranked(self.name(), pvalues, n, Direction::StepUp, |i, p| {
            p * (n + 1 - i) as f64
        })
    }

    fn name(&self) -> &str {
        "Hochberg"
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    const P: [f64; 4] = [0.001, 0.01, 0.03, 0.5];

    fn assert_all_close(actual: &[f64], expected: &[f64]) {
        assert_eq!(actual.len(), expected.len());
        for (a, e) in actual.iter().zip(expected) {
            assert_relative_eq!(*a, *e, max_relative = 1e-12);
        }
    }

    #[test]
    fn test_holm_reference() {
        assert_all_close(&Holm.adjust(&P).unwrap(), &[0.004, 0.03, 0.06, 0.5]);
        assert_all_close(&Holm.adjust_n(&P, 6).unwrap(), &[0.006, 0.05, 0.12, 1.0]);
    }

    #[test]
    fn test_hochberg_reference() {
        assert_all_close(&Hochberg.adjust(&P).unwrap(), &[0.004, 0.03, 0.06, 0.5]);
        assert_all_close(&Hochberg.adjust_n(&P, 6).unwrap(), &[0.006, 0.05, 0.12, 1.0]);
    }

    #[test]
    fn test_directions_differ() {
        // Raw per-rank values: 0.03, 0.06, 0.04
        let p = [0.01, 0.03, 0.04];
        assert_all_close(&Holm.adjust(&p).unwrap(), &[0.03, 0.06, 0.06]);
        assert_all_close(&Hochberg.adjust(&p).unwrap(), &[0.03, 0.04, 0.04]);
    }

    #[test]
    fn test_input_order_preserved() {
        let adj = Holm.adjust(&[0.5, 0.001, 0.03, 0.01]).unwrap();
        assert_all_close(&adj, &[0.5, 0.004, 0.06, 0.03]);
    }
}
