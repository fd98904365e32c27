//! Strategy traits shared by every multitest crate
//!
//! Each procedure family is a trait; concrete procedures are small value
//! types implementing it. Composite procedures (an adaptive adjustment that
//! owns a π₀ estimator, a combination that owns an adjustment) hold their
//! inner strategy by value through these traits.

use crate::Result;

/// Multiplicity adjustment of a vector of p-values
///
/// Implementations return one adjusted value per input p-value, in input
/// order, each clipped to [0, 1].
///
/// # Example
///
/// ```rust
/// use multitest_core::{validate_pvalues, validate_total, PValueAdjustment, Result};
///
/// struct Doubling;
///
/// impl PValueAdjustment for Doubling {
///     fn adjust_n(&self, pvalues: &[f64], n: usize) -> Result<Vec<f64>> {
///         validate_pvalues(pvalues)?;
///         validate_total(pvalues.len(), n)?;
///         Ok(pvalues.iter().map(|p| (2.0 * p).min(1.0)).collect())
///     }
///
///     fn name(&self) -> &str {
///         "Doubling"
///     }
/// }
///
/// assert_eq!(Doubling.adjust(&[0.1, 0.7]).unwrap(), vec![0.2, 1.0]);
/// ```
pub trait PValueAdjustment: Send + Sync {
    /// Adjust `pvalues` as if they were the smallest `pvalues.len()` out of
    /// `n` tests, the remaining `n - k` tests having p-value 1
    ///
    /// Fails with `InvalidInput` if a p-value is outside [0, 1] or `n` is
    /// smaller than the number of p-values.
    fn adjust_n(&self, pvalues: &[f64], n: usize) -> Result<Vec<f64>>;

    /// Adjust `pvalues` treating them as the complete family of tests
    fn adjust(&self, pvalues: &[f64]) -> Result<Vec<f64>> {
        self.adjust_n(pvalues, pvalues.len())
    }

    /// Human-readable name of the procedure
    fn name(&self) -> &str;
}

/// Estimator of the proportion of true null hypotheses
pub trait Pi0Estimator: Send + Sync {
    /// Estimate π₀ from the p-values; the result lies in [0, 1]
    fn estimate_pi0(&self, pvalues: &[f64]) -> Result<f64>;

    /// Human-readable name of the estimator
    fn name(&self) -> &str;
}

/// Combination of independent p-values into a single p-value
pub trait PValueCombination: Send + Sync {
    /// Combined p-value in [0, 1]
    ///
    /// Fails with `InvalidInput` on an empty input.
    fn combine(&self, pvalues: &[f64]) -> Result<f64>;

    /// Human-readable name of the combination
    fn name(&self) -> &str;
}

/// Statistic computed from a vector of p-values
///
/// Covers procedures whose result is neither an adjustment, a π₀ nor a
/// combined p-value, such as higher-criticism scores and thresholds.
pub trait Estimate: Send + Sync {
    /// Output type of the statistic
    type Output;

    /// Compute the statistic
    fn estimate(&self, pvalues: &[f64]) -> Result<Self::Output>;
}

impl<A: PValueAdjustment + ?Sized> PValueAdjustment for &A {
    fn adjust_n(&self, pvalues: &[f64], n: usize) -> Result<Vec<f64>> {
        (**self).adjust_n(pvalues, n)
    }

    fn name(&self) -> &str {
        (**self).name()
    }
}

impl<E: Pi0Estimator + ?Sized> Pi0Estimator for &E {
    fn estimate_pi0(&self, pvalues: &[f64]) -> Result<f64> {
        (**self).estimate_pi0(pvalues)
    }

    fn name(&self) -> &str {
        (**self).name()
    }
}

impl<C: PValueCombination + ?Sized> PValueCombination for &C {
    fn combine(&self, pvalues: &[f64]) -> Result<f64> {
        (**self).combine(pvalues)
    }

    fn name(&self) -> &str {
        (**self).name()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{validate_pvalues, validate_total, Error};

    struct Identity;

    impl PValueAdjustment for Identity {
        fn adjust_n(&self, pvalues: &[f64], n: usize) -> Result<Vec<f64>> {
            validate_pvalues(pvalues)?;
            validate_total(pvalues.len(), n)?;
            Ok(pvalues.to_vec())
        }

        fn name(&self) -> &str {
            "Identity"
        }
    }

    struct Constant(f64);

    impl Pi0Estimator for Constant {
        fn estimate_pi0(&self, _pvalues: &[f64]) -> Result<f64> {
            Ok(self.0)
        }

        fn name(&self) -> &str {
            "Constant"
        }
    }

    #[test]
    fn test_default_adjust_uses_observed_count() {
        assert_eq!(Identity.adjust(&[0.2, 0.1]).unwrap(), vec![0.2, 0.1]);
        assert!(matches!(
            Identity.adjust_n(&[0.2, 0.1], 1),
            Err(Error::InvalidInput(_))
        ));
    }

    #[test]
    fn test_references_forward() {
        let by_ref: &dyn PValueAdjustment = &Identity;
        assert_eq!(by_ref.adjust(&[0.3]).unwrap(), vec![0.3]);
        assert_eq!((&Identity).name(), "Identity");

        let estimator = Constant(0.4);
        assert_eq!((&estimator).estimate_pi0(&[]).unwrap(), 0.4);
    }
}
