//! Higher criticism thresholding

use crate::scores::{sorted_scores, Standardization};
use multitest_core::{validate_pvalues, Error, Estimate, RankOrder, Result};
use serde::{Deserialize, Serialize};
use tracing::debug;

/// Default fraction of the ranks searched for the maximal score
pub const DEFAULT_ALPHA0: f64 = 1.0;

/// Higher criticism threshold
///
/// Returns the p-value with the largest score among the ranks `i` with
/// `i/k ≤ α₀`. The first rank wins ties. At least the smallest p-value is
/// always a candidate, so an `α₀` below `1/k` selects it.
///
/// # Examples
///
/// ```rust
/// use multitest_core::Estimate;
/// use multitest_criticism::HigherCriticismThreshold;
///
/// let threshold = HigherCriticismThreshold::new()
///     .estimate(&[0.001, 0.01, 0.03, 0.5])
///     .unwrap();
/// assert_eq!(threshold, 0.03);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct HigherCriticismThreshold {
    alpha0: f64,
    standardization: Standardization,
}

impl HigherCriticismThreshold {
    /// Search every rank
    pub fn new() -> Self {
        Self {
            alpha0: DEFAULT_ALPHA0,
            standardization: Standardization::default(),
        }
    }

    /// Restrict the search to the fraction `alpha0` of smallest p-values
    ///
    /// Values outside (0, 1] are rejected when the threshold is estimated.
    pub fn with_alpha0(mut self, alpha0: f64) -> Self {
        self.alpha0 = alpha0;
        self
    }

    /// Choose how the scores are standardised
    pub fn with_standardization(mut self, standardization: Standardization) -> Self {
        self.standardization = standardization;
        self
    }

    /// Fraction of ranks searched
    pub fn alpha0(&self) -> f64 {
        self.alpha0
    }

    /// The standardisation in use
    pub fn standardization(&self) -> Standardization {
        self.standardization
    }
}

impl Default for HigherCriticismThreshold {
    fn default() -> Self {
        Self::new()
    }
}

impl Estimate for HigherCriticismThreshold {
    type Output = f64;

    fn estimate(&self, pvalues: &[f64]) -> Result<f64> {
        if !(self.alpha0 > 0.0 && self.alpha0 <= 1.0) {
            return Err(Error::invalid_parameter("alpha0", self.alpha0, "(0, 1]"));
        }
        if pvalues.is_empty() {
            return Err(Error::empty_input("higher criticism threshold"));
        }
        validate_pvalues(pvalues)?;

        let sorted = RankOrder::ascending(pvalues).sorted(pvalues);
        let scores = sorted_scores(&sorted, self.standardization);
        let k = sorted.len() as f64;

        let mut best = 0;
        for (i, &score) in scores.iter().enumerate().skip(1) {
            if (i + 1) as f64 / k > self.alpha0 {
                break;
            }
            if score > scores[best] {
                best = i;
            }
        }

        debug!(
            rank = best + 1,
            score = scores[best],
            threshold = sorted[best],
            "higher criticism threshold"
        );
        Ok(sorted[best])
    }
}
