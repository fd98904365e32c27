//! Benjamini-Yekutieli FDR control under arbitrary dependence

use crate::ranked::{adjust_ranked, Direction};
use multitest_core::{distributions::harmonic, PValueAdjustment, Result};
use serde::{Deserialize, Serialize};

/// Benjamini-Yekutieli step-up procedure
///
/// Benjamini-Hochberg inflated by the harmonic number `c(n) = Σⱼ₌₁ⁿ 1/j`:
/// rank `i` gets `n·c(n)·p₍ᵢ₎ / i`.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct BenjaminiYekutieli;

impl BenjaminiYekutieli {
    /// Create a new Benjamini-Yekutieli adjustment
    pub fn new() -> Self {
        Self
    }
}

impl PValueAdjustment for BenjaminiYekutieli {
    fn adjust_n(&self, pvalues: &[f64], n: usize) -> Result<Vec<f64>> {
        let scale = n as f64 * harmonic(n);
        adjust_ranked(self.name(), pvalues, n, Direction::StepUp, |i, p| {
            p * scale / i as f64
        })
    }

    fn name(&self) -> &str {
        "Benjamini-Yekutieli"
    }
}
