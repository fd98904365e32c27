//! Two-step estimator based on an initial adjustment

use multitest_adjust::BenjaminiLiu;
use multitest_core::{validate_pvalues, Error, PValueAdjustment, Pi0Estimator, Result};
use serde::{Deserialize, Serialize};
use tracing::debug;

/// Default level of [`TwoStep`]
pub const DEFAULT_ALPHA: f64 = 0.05;

/// Two-step estimator (Benjamini, Krieger & Yekutieli)
///
/// The p-values are adjusted with the configured procedure and rejected at
/// level `α / (1 + α)`; with `R` rejections, `π̂₀ = (k - R) / k`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TwoStep<A = BenjaminiLiu> {
    alpha: f64,
    adjustment: A,
}

impl TwoStep<BenjaminiLiu> {
    /// Create the estimator with `α = 0.05` and Benjamini-Liu adjustment
    pub fn new() -> Self {
        Self {
            alpha: DEFAULT_ALPHA,
            adjustment: BenjaminiLiu,
        }
    }
}

impl Default for TwoStep<BenjaminiLiu> {
    fn default() -> Self {
        Self::new()
    }
}

impl<A: PValueAdjustment> TwoStep<A> {
    /// Set the level `α ∈ (0, 1)`
    pub fn with_alpha(mut self, alpha: f64) -> Self {
        self.alpha = alpha;
        self
    }

    /// Use a different adjustment procedure for the first step
    pub fn with_adjustment<B: PValueAdjustment>(self, adjustment: B) -> TwoStep<B> {
        TwoStep {
            alpha: self.alpha,
            adjustment,
        }
    }

    /// The level
    pub fn alpha(&self) -> f64 {
        self.alpha
    }

    /// The first-step adjustment
    pub fn adjustment(&self) -> &A {
        &self.adjustment
    }
}

impl<A: PValueAdjustment> Pi0Estimator for TwoStep<A> {
    fn estimate_pi0(&self, pvalues: &[f64]) -> Result<f64> {
        if !(self.alpha > 0.0 && self.alpha < 1.0) {
            return Err(Error::invalid_parameter("alpha", self.alpha, "(0, 1)"));
        }
        validate_pvalues(pvalues)?;
        if pvalues.is_empty() {
            return Ok(1.0);
        }

        let threshold = self.alpha / (1.0 + self.alpha);
        let adjusted = self.adjustment.adjust(pvalues)?;
        let retained = adjusted.iter().filter(|&&p| p >= threshold).count();
        debug!(
            adjustment = self.adjustment.name(),
            rejected = pvalues.len() - retained,
            "two-step first stage"
        );

        Ok(retained as f64 / pvalues.len() as f64)
    }

    fn name(&self) -> &str {
        "Two-step"
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;
    use multitest_adjust::{BenjaminiHochberg, Bonferroni};

    const P: [f64; 5] = [0.001, 0.002, 0.01, 0.03, 0.5];

    #[test]
    fn test_two_step_reference() {
        assert_relative_eq!(TwoStep::new().estimate_pi0(&P).unwrap(), 0.2, epsilon = 1e-12);
    }

    #[test]
    fn test_two_step_other_adjustment() {
        // Bonferroni: 0.005, 0.01, 0.05, 0.15, 1.0 against 0.0476
        let estimator = TwoStep::new().with_adjustment(Bonferroni);
        assert_relative_eq!(estimator.estimate_pi0(&P).unwrap(), 0.6, epsilon = 1e-12);

        let estimator = TwoStep::new().with_alpha(0.2).with_adjustment(BenjaminiHochberg);
        assert_relative_eq!(estimator.alpha(), 0.2);
        assert_relative_eq!(estimator.estimate_pi0(&P).unwrap(), 0.2, epsilon = 1e-12);
    }

    #[test]
    fn test_two_step_no_rejections() {
        assert_eq!(TwoStep::new().estimate_pi0(&[0.4, 0.6, 0.9]).unwrap(), 1.0);
        assert_eq!(TwoStep::new().estimate_pi0(&[]).unwrap(), 1.0);
    }

    #[test]
    fn test_two_step_validation() {
        assert!(matches!(
            TwoStep::new().with_alpha(0.0).estimate_pi0(&P),
            Err(Error::InvalidInput(_))
        ));
        assert!(TwoStep::new().with_alpha(1.0).estimate_pi0(&P).is_err());
        assert!(TwoStep::new().estimate_pi0(&[0.1, 1.2]).is_err());
    }
}
