//! Benjamini-Hochberg false discovery rate control and its adaptive variant

use crate::ranked::{adjust_ranked, Direction};
use multitest_core::{clip_unit, Oracle, PValueAdjustment, Pi0Estimator, Result};
use serde::{Deserialize, Serialize};
use tracing::trace;

/// Benjamini-Hochberg step-up procedure
///
/// Rank `i` gets `n·p₍ᵢ₎ / i`, followed by a running minimum from the
/// largest p-value down. Controls the FDR for independent or positively
/// dependent tests.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct BenjaminiHochberg;

impl BenjaminiHochberg {
    /// Create a new Benjamini-Hochberg adjustment
    pub fn new() -> Self {
        Self
    }
}

impl PValueAdjustment for BenjaminiHochberg {
    fn adjust_n(&self, pvalues: &[f64], n: usize) -> Result<Vec<f64>> {
        let total = n as f64;
        adjust_ranked(self.name(), pvalues, n, Direction::StepUp, |i, p| {
            p * total / i as f64
        })
    }

    fn name(&self) -> &str {
        "Benjamini-Hochberg"
    }
}

/// Adaptive Benjamini-Hochberg procedure
///
/// Benjamini-Hochberg adjusted p-values scaled by an estimate of the
/// proportion of true nulls, `p̃ᵢ = π̂₀ · p̃ᵢ(BH)`. The estimator runs on the
/// observed p-values only; a known π₀ is supplied through
/// [`BenjaminiHochbergAdaptive::with_pi0`].
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct BenjaminiHochbergAdaptive<E> {
    estimator: E,
}

impl<E: Pi0Estimator> BenjaminiHochbergAdaptive<E> {
    /// Create an adaptive adjustment using `estimator` for π₀
    pub fn new(estimator: E) -> Self {
        Self { estimator }
    }

    /// The π₀ estimator in use
    pub fn estimator(&self) -> &E {
        &self.estimator
    }
}

impl BenjaminiHochbergAdaptive<Oracle> {
    /// Scale by a known π₀, checked against [0, 1] on adjustment
    pub fn with_pi0(pi0: f64) -> Self {
        Self::new(Oracle::new(pi0))
    }
}

impl<E: Pi0Estimator> PValueAdjustment for BenjaminiHochbergAdaptive<E> {
    fn adjust_n(&self, pvalues: &[f64], n: usize) -> Result<Vec<f64>> {
        let adjusted = BenjaminiHochberg.adjust_n(pvalues, n)?;
        if adjusted.is_empty() {
            return Ok(adjusted);
        }
        let pi0 = self.estimator.estimate_pi0(pvalues)?;
        trace!(estimator = self.estimator.name(), pi0, "scaling BH by pi0");
        Ok(adjusted.into_iter().map(|p| clip_unit(p * pi0)).collect())
    }

    fn name(&self) -> &str {
        "Benjamini-Hochberg adaptive"
    }
}
