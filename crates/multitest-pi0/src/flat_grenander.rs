//! Flat part of the Grenander density estimate

use multitest_core::{validate_pvalues, Grenander, Pi0Estimator, RankOrder, Result};
use serde::{Deserialize, Serialize};
use tracing::debug;

/// Flat Grenander estimator (Langaas, Lindqvist & Ferkingstad)
///
/// Fits the Grenander non-increasing density to the p-values and returns
/// the height of its longest constant piece, capped at 1. When every p-value
/// is zero there is no piece and the estimate is 0.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct FlatGrenander;

impl FlatGrenander {
    /// Create the estimator
    pub fn new() -> Self {
        Self
    }
}

impl Pi0Estimator for FlatGrenander {
    fn estimate_pi0(&self, pvalues: &[f64]) -> Result<f64> {
        validate_pvalues(pvalues)?;
        if pvalues.is_empty() {
            return Ok(1.0);
        }

        let sorted = RankOrder::ascending(pvalues).sorted(pvalues);
        let fit = Grenander::fit(&sorted);
        let height = fit.longest_constant_height().unwrap_or(0.0);
        debug!(knots = fit.knots().len(), height, "grenander fit");

        Ok(height.min(1.0))
    }

    fn name(&self) -> &str {
        "Flat Grenander"
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn test_flat_grenander_reference() {
        let pi0 = FlatGrenander
            .estimate_pi0(&[0.001, 0.002, 0.01, 0.03, 0.5])
            .unwrap();
        assert_relative_eq!(pi0, 0.42553191489361697, epsilon = 1e-15);
    }

    #[test]
    fn test_flat_grenander_order_invariant() {
        let a = FlatGrenander.estimate_pi0(&[0.5, 0.03, 0.001, 0.01, 0.002]).unwrap();
        assert_relative_eq!(a, 0.42553191489361697, epsilon = 1e-15);
    }

    #[test]
    fn test_flat_grenander_degenerate() {
        assert_eq!(FlatGrenander.estimate_pi0(&[0.0, 0.0, 0.0]).unwrap(), 0.0);
        assert_eq!(FlatGrenander.estimate_pi0(&[]).unwrap(), 1.0);
        // A single knot at 0.8 spreads mass 1 over [0, 0.8]
        assert_eq!(FlatGrenander.estimate_pi0(&[0.8]).unwrap(), 1.0);
    }
}
