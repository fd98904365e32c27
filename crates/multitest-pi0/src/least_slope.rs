//! Least-slope estimator

use multitest_core::{validate_pvalues, Pi0Estimator, RankOrder, Result};
use serde::{Deserialize, Serialize};

/// Least-slope estimator (Benjamini & Hochberg, 2000)
///
/// With ascending p-values, the slopes `sᵢ = (1 - p₍ᵢ₎) / (k - i + 1)` are
/// scanned from `i = 2` for the first decrease; at that rank
/// `π̂₀ = min(1, (⌊1/sᵢ⌋ + 1) / k)`, a whole number of nulls over `k`. If the
/// slopes never decrease, `π̂₀ = 1`.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct LeastSlope;

impl LeastSlope {
    /// Create the estimator
    pub fn new() -> Self {
        Self
    }
}

impl Pi0Estimator for LeastSlope {
    fn estimate_pi0(&self, pvalues: &[f64]) -> Result<f64> {
        validate_pvalues(pvalues)?;
        let k = pvalues.len();
        let sorted = RankOrder::ascending(pvalues).sorted(pvalues);

        let slope = |i: usize| (1.0 - sorted[i]) / (k - i) as f64;
        for i in 1..k {
            let current = slope(i);
            if current < slope(i - 1) {
                return Ok((((1.0 / current).floor() + 1.0) / k as f64).min(1.0));
            }
        }
        Ok(1.0)
    }

    fn name(&self) -> &str {
        "Least slope"
    }
}
