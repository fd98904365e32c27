//! Higher criticism scores

use multitest_core::{validate_pvalues, Error, Estimate, RankOrder, Result};
use serde::{Deserialize, Serialize};
use tracing::trace;

/// Distance kept between a p-value and the ends of [0, 1] under
/// [`Standardization::Null`]
pub const BOUNDARY_EPSILON: f64 = 1e-10;

/// How the gap between the ECDF and the p-values is standardised
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum Standardization {
    /// `|F - p| / √(F(1 - F)/k)`, the variance taken from the ECDF value
    ///
    /// A variance of zero (F = 1) is replaced by the smallest positive
    /// variance in the sample; with none available every score is 0.
    #[default]
    Ecdf,
    /// `√k (F - p) / √(p(1 - p))`, the variance under the uniform null
    ///
    /// p is clamped into `[BOUNDARY_EPSILON, 1 - BOUNDARY_EPSILON]` before
    /// the denominator is formed, so scores stay finite and keep their sign.
    Null,
}

/// Scores of ascending-sorted p-values, one per rank
pub(crate) fn sorted_scores(sorted: &[f64], standardization: Standardization) -> Vec<f64> {
    let k = sorted.len();
    let kf = k as f64;

    // ECDF at each order statistic; tied values share the count of the group
    let mut ecdf = vec![0.0; k];
    for j in (0..k).rev() {
        ecdf[j] = if j + 1 < k && sorted[j] == sorted[j + 1] {
            ecdf[j + 1]
        } else {
            (j + 1) as f64 / kf
        };
    }

    match standardization {
        Standardization::Ecdf => {
            let variances: Vec<f64> = ecdf.iter().map(|f| f * (1.0 - f) / kf).collect();
            let floor = variances
                .iter()
                .copied()
                .filter(|&v| v > 0.0)
                .fold(f64::INFINITY, f64::min);
            if floor.is_infinite() {
                return vec![0.0; k];
            }
            ecdf.iter()
                .zip(sorted)
                .zip(&variances)
                .map(|((f, p), &v)| (f - p).abs() / v.max(floor).sqrt())
                .collect()
        }
        Standardization::Null => ecdf
            .iter()
            .zip(sorted)
            .map(|(f, &p)| {
                let p_clamped = p.clamp(BOUNDARY_EPSILON, 1.0 - BOUNDARY_EPSILON);
                kf.sqrt() * (f - p) / (p_clamped * (1.0 - p_clamped)).sqrt()
            })
            .collect(),
    }
}

/// Higher criticism score of every p-value, in input order
///
/// # Examples
///
/// ```rust
/// use multitest_core::Estimate;
/// use multitest_criticism::HigherCriticismScores;
///
/// let scores = HigherCriticismScores::new()
///     .estimate(&[0.001, 0.01, 0.03, 0.5])
///     .unwrap();
/// assert!((scores[1] - 1.96).abs() < 1e-12);
/// ```
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct HigherCriticismScores {
    standardization: Standardization,
}

impl HigherCriticismScores {
    /// Scores standardised by the ECDF variance
    pub fn new() -> Self {
        Self::default()
    }

    /// Choose the standardisation
    pub fn with_standardization(mut self, standardization: Standardization) -> Self {
        self.standardization = standardization;
        self
    }

    /// The standardisation in use
    pub fn standardization(&self) -> Standardization {
        self.standardization
    }
}

impl Estimate for HigherCriticismScores {
    type Output = Vec<f64>;

    fn estimate(&self, pvalues: &[f64]) -> Result<Vec<f64>> {
        if pvalues.is_empty() {
            return Err(Error::empty_input("higher criticism scores"));
        }
        validate_pvalues(pvalues)?;
        trace!(k = pvalues.len(), standardization = ?self.standardization, "higher criticism scores");

        let order = RankOrder::ascending(pvalues);
        let scores = sorted_scores(&order.sorted(pvalues), self.standardization);
        Ok(order.restore(&scores))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    const P: [f64; 4] = [0.001, 0.01, 0.03, 0.5];

    #[test]
    fn test_reference_scores() {
        let scores = HigherCriticismScores::new().estimate(&P).unwrap();
        let expected = [
            1.1500817362257345,
            1.96,
            3.3255375505322444,
            2.3094010767584976,
        ];
        for (s, e) in scores.iter().zip(&expected) {
            assert_relative_eq!(s, e, max_relative = 1e-12);
        }
    }

    #[test]
    fn test_scores_follow_input_order() {
        let shuffled = [0.5, 0.03, 0.001, 0.01];
        let scores = HigherCriticismScores::new().estimate(&shuffled).unwrap();
        assert_relative_eq!(scores[0], 2.3094010767584976, max_relative = 1e-12);
        assert_relative_eq!(scores[1], 3.3255375505322444, max_relative = 1e-12);
        assert_relative_eq!(scores[2], 1.1500817362257345, max_relative = 1e-12);
        assert_relative_eq!(scores[3], 1.96, max_relative = 1e-12);
    }

    #[test]
    fn test_ties_share_ecdf() {
        let scores = HigherCriticismScores::new()
            .estimate(&[0.02, 0.3, 0.02, 0.9, 0.7])
            .unwrap();
        assert_eq!(scores[0], scores[2]);
        assert_relative_eq!(scores[0], 1.734454765433026, max_relative = 1e-12);
        assert_relative_eq!(scores[1], 1.3693063937629153, max_relative = 1e-12);
        assert_relative_eq!(scores[3], 0.5590169943749473, max_relative = 1e-12);
    }

    #[test]
    fn test_degenerate_samples_score_zero() {
        let single = HigherCriticismScores::new().estimate(&[0.2]).unwrap();
        assert_eq!(single, vec![0.0]);

        let tied = HigherCriticismScores::new().estimate(&[0.4, 0.4, 0.4]).unwrap();
        assert_eq!(tied, vec![0.0; 3]);
    }

    #[test]
    fn test_null_standardization() {
        let hc = HigherCriticismScores::new().with_standardization(Standardization::Null);
        let scores = hc.estimate(&P).unwrap();
        let expected = [
            15.756022729491482,
            9.849370589540278,
            8.441429497351908,
            2.0,
        ];
        for (s, e) in scores.iter().zip(&expected) {
            assert_relative_eq!(s, e, max_relative = 1e-12);
        }
    }

    #[test]
    fn test_null_standardization_boundaries_stay_finite() {
        let hc = HigherCriticismScores::new().with_standardization(Standardization::Null);
        let scores = hc.estimate(&[0.0, 0.4, 1.0]).unwrap();
        assert!(scores.iter().all(|s| s.is_finite()));
        assert!(scores[0] > 1e4);
        assert_eq!(scores[2], 0.0);
    }

    #[test]
    fn test_invalid_input() {
        let hc = HigherCriticismScores::new();
        assert!(matches!(hc.estimate(&[]), Err(Error::InvalidInput(_))));
        assert!(matches!(hc.estimate(&[0.1, 1.1]), Err(Error::InvalidInput(_))));
    }
}
