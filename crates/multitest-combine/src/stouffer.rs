//! Stouffer's weighted Z-method

use crate::common::check_pvalues;
use multitest_core::{distributions::normal, Error, PValueCombination, Result};
use serde::{Deserialize, Serialize};

/// Stouffer's combination
///
/// Each p-value is turned into `zᵢ = Φ⁻¹(1 - pᵢ)`; the combined statistic
/// `Z = Σ wᵢzᵢ / √(Σ wᵢ²)` is standard normal under the global null and the
/// combined p-value is `1 - Φ(Z)`. Weights default to 1.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Stouffer {
    weights: Option<Vec<f64>>,
}

impl Stouffer {
    /// Create an unweighted Stouffer combination
    pub fn new() -> Self {
        Self { weights: None }
    }

    /// Use one positive, finite weight per p-value
    pub fn with_weights(mut self, weights: Vec<f64>) -> Self {
        self.weights = Some(weights);
        self
    }

    /// The configured weights, if any
    pub fn weights(&self) -> Option<&[f64]> {
        self.weights.as_deref()
    }

    /// Combine with explicit weights
    pub fn combine_weighted(&self, pvalues: &[f64], weights: &[f64]) -> Result<f64> {
        check_pvalues(self.name(), pvalues)?;
        if weights.len() != pvalues.len() {
            return Err(Error::size_mismatch(pvalues.len(), weights.len(), "Stouffer weights"));
        }
        if let Some(&w) = weights.iter().find(|&&w| !(w > 0.0 && w.is_finite())) {
            return Err(Error::invalid_parameter("Stouffer weight", w, "(0, inf)"));
        }

        let (weighted, squares) = pvalues.iter().zip(weights).fold(
            (0.0, 0.0),
            |(sum, sq), (&p, &w)| (sum + w * normal::upper_quantile(p), sq + w * w),
        );
        let z = weighted / squares.sqrt();
        if z.is_nan() {
            // +∞ and -∞ scores cancel: a p-value of 0 next to one of 1
            return Err(Error::InvalidInput(
                "Stouffer combination is undefined with p-values of both 0 and 1".to_string(),
            ));
        }
        Ok(normal::upper_tail(z))
    }
}

impl PValueCombination for Stouffer {
    fn combine(&self, pvalues: &[f64]) -> Result<f64> {
        match &self.weights {
            Some(weights) => self.combine_weighted(pvalues, weights),
            None => self.combine_weighted(pvalues, &vec![1.0; pvalues.len()]),
        }
    }

    fn name(&self) -> &str {
        "Stouffer"
    }
}
